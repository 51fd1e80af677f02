//! Marketplace listing endpoints and the image links their records carry

use crate::config::base_url_prefix;
use reqwest::Url;

pub const IMAGE_URL_COLUMN: &str = "imageUrl";

/// **A marketplace endpoint that returns a list of records**
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListingEndpoint {
    /// Plural noun used in the report, e.g. "vehicles".
    pub label: &'static str,

    /// Path relative to the base URL.
    pub path: &'static str,

    /// The record fields shown as table columns, in order.
    pub columns: &'static [&'static str],
}

pub const VEHICLES: ListingEndpoint = ListingEndpoint {
    label: "vehicles",
    path: "api/marketplace/vehicles",
    columns: &["id", "make", "model", "price", "odometer", IMAGE_URL_COLUMN],
};

pub const BANNERS: ListingEndpoint = ListingEndpoint {
    label: "banners",
    path: "api/marketplace/banners",
    columns: &["title", IMAGE_URL_COLUMN],
};

/// **Does the link already carry an `http(s)` scheme?**
pub fn is_absolute_url(link: &str) -> bool {
    let lower = link.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// **Turns an image link from a record into a full URL**
///
/// Absolute links are returned unchanged; anything else is appended to
/// the base URL with exactly one `/` in between.
pub fn resolve_image_url(link: &str, base_url: &Url) -> String {
    if is_absolute_url(link) {
        link.to_string()
    } else {
        format!(
            "{}/{}",
            base_url_prefix(base_url),
            link.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{is_absolute_url, resolve_image_url, BANNERS, VEHICLES};
    use crate::config::get_base_url;

    #[test]
    fn test_absolute_urls() {
        assert!(is_absolute_url("http://cdn.example.com/a.jpg"));
        assert!(is_absolute_url("HTTPS://cdn.example.com/a.jpg"));
        assert!(!is_absolute_url("/img/1.jpg"));
        assert!(!is_absolute_url("uploads/http.jpg"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_relative_link_gets_base_url() {
        let base_url = get_base_url(Some("http://localhost:3000".to_string()));
        assert_eq!(
            resolve_image_url("/img/1.jpg", &base_url),
            "http://localhost:3000/img/1.jpg"
        );
        assert_eq!(
            resolve_image_url("img/1.jpg", &base_url),
            "http://localhost:3000/img/1.jpg"
        );
    }

    #[test]
    fn test_absolute_link_unchanged() {
        let base_url = get_base_url(Some("http://localhost:3000".to_string()));
        let link = "https://images.unsplash.com/photo-1.jpg";
        assert_eq!(resolve_image_url(link, &base_url), link);
    }

    #[test]
    fn test_endpoint_columns() {
        assert_eq!(
            VEHICLES.columns,
            &["id", "make", "model", "price", "odometer", "imageUrl"]
        );
        assert_eq!(BANNERS.columns, &["title", "imageUrl"]);
    }
}
