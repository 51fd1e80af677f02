//! Base URL configuration shared by the probes

use reqwest::Url;

/// The environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// **Get base URL**
///
/// Tries to create a URL from the provided argument.
///
/// If that is not possible, falls back to a default.
///
/// It returns a URL in any case.
///
/// This is meant to be a base URL for all requests, of both probes.
///
/// - If the provided argument is the `None` variant,
///   returns a default value as the base URL.
/// - If it's a `String`, tries to parse it into URL.
///   - If it's a valid URL string, returns it as URL.
///   - If it's a malformed URL string, returns the default.
///
/// A path that doesn't end in `/` gets one appended, so that endpoint
/// paths are joined underneath it instead of replacing its last segment.
///
/// The default value is [`DEFAULT_BASE_URL`].
pub fn get_base_url(base_url: Option<String>) -> Url {
    let base_url = base_url.unwrap_or_else(|| {
        log::info!(
            "{} is not set; using default: {}",
            BASE_URL_ENV,
            DEFAULT_BASE_URL
        );
        DEFAULT_BASE_URL.into()
    });

    let mut base_url = match Url::parse(base_url.trim()) {
        Ok(url) if !url.cannot_be_a_base() => url,
        _ => {
            log::warn!(
                "Provided base URL {:?} could not be parsed; using default: {}",
                base_url,
                DEFAULT_BASE_URL
            );
            default_base_url()
        }
    };

    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    base_url
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

/// **The base URL as a string prefix, without the trailing slash**
///
/// `http://localhost:3000/` becomes `http://localhost:3000`.
pub fn base_url_prefix(base_url: &Url) -> &str {
    base_url.as_str().trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::{base_url_prefix, get_base_url, DEFAULT_BASE_URL};

    #[test]
    fn test_default_url_none() {
        assert_eq!(get_base_url(None).to_string(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_url_empty() {
        assert_eq!(
            get_base_url(Some("".to_string())).to_string(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_default_url_bad() {
        assert_eq!(
            get_base_url(Some("https://333.333.333.333".to_string())).to_string(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_default_url_not_a_base() {
        assert_eq!(
            get_base_url(Some("mailto:ops@example.com".to_string())).to_string(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_valid_url() {
        assert_eq!(
            get_base_url(Some("https://apis.trustedvehicles.com".to_string())).to_string(),
            "https://apis.trustedvehicles.com/"
        );
    }

    #[test]
    fn test_url_with_path_gets_trailing_slash() {
        let base_url = get_base_url(Some("http://127.0.0.1:3333/staging".to_string()));
        assert_eq!(base_url.to_string(), "http://127.0.0.1:3333/staging/");
        assert_eq!(
            base_url.join("api/loan-requests").unwrap().to_string(),
            "http://127.0.0.1:3333/staging/api/loan-requests"
        );
    }

    #[test]
    fn test_base_url_prefix() {
        let base_url = get_base_url(Some("http://localhost:3000".to_string()));
        assert_eq!(base_url_prefix(&base_url), "http://localhost:3000");
    }
}
