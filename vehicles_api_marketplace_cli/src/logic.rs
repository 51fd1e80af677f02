use reqwest::{Client, Url};
use serde_json::Value;
use vehicles_api_common::cli::constants::*;
use vehicles_api_common::cli::helpers::section_banner;
use vehicles_api_common::config::base_url_prefix;
use vehicles_api_common::errors::{json_type_name, ProbeError};
use vehicles_api_common::marketplace::{ListingEndpoint, BANNERS, VEHICLES};
use vehicles_api_common::table::render_table;

/// **The HTTP client shared by both listings of a run**
///
/// Uses reqwest's default timeout settings.
pub fn build_client() -> Result<Client, ProbeError> {
    let client = Client::builder()
        .user_agent("vehicles_api_marketplace_cli")
        .build()?;

    Ok(client)
}

/// **Full URL of an endpoint, for display**
pub fn endpoint_url(base_url: &Url, endpoint: &ListingEndpoint) -> String {
    match base_url.join(endpoint.path) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}/{}", base_url_prefix(base_url), endpoint.path),
    }
}

/// **Fetch a listing**
///
/// # Errors
/// - Non-2xx status, `ProbeError::Status`, with the raw body;
/// - Body is JSON but not a list, `ProbeError::UnexpectedShape`;
/// - Body isn't JSON at all, `ProbeError::Decode`;
/// - Server unreachable, `ProbeError::Connect`, or any other transport error.
pub async fn fetch_listing(
    client: &Client,
    base_url: &Url,
    endpoint: &ListingEndpoint,
) -> Result<Vec<Value>, ProbeError> {
    let url = base_url.join(endpoint.path)?;
    log::info!("GET {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ProbeError::Status { status, body });
    }

    match serde_json::from_str::<Value>(&body)? {
        Value::Array(records) => Ok(records),
        other => Err(ProbeError::UnexpectedShape {
            observed: json_type_name(&other),
        }),
    }
}

/// **Report lines for a fetched listing: its size, then the table**
pub fn listing_report(endpoint: &ListingEndpoint, records: &[Value], base_url: &Url) -> Vec<String> {
    let mut lines = vec![format!("Found {} {}.", records.len(), endpoint.label)];
    lines.extend(render_table(endpoint.columns, records, base_url));
    lines
}

/// **Report lines for a failed fetch**
///
/// Each kind of failure gets its own wording.
pub fn failure_report(err: &ProbeError, url: &str) -> Vec<String> {
    match err {
        ProbeError::Status { status, body } => vec![
            format!("{} {}", HTTP_ERROR, status),
            format!("{} {}", RESPONSE_BODY, body),
        ],
        ProbeError::Connect { .. } => vec![format!(
            "{} Could not connect to {}. Is the server running?",
            CONNECTION_ERROR, url
        )],
        ProbeError::UnexpectedShape { observed } => vec![format!(
            "Error: Expected a list from {}, but got {}.",
            url, observed
        )],
        other => vec![format!("{} {}", UNEXPECTED_ERROR, other)],
    }
}

/// **Fetches one listing and reports on it**
///
/// Never fails: every error is turned into a diagnostic.
pub async fn run_endpoint(
    client: &Client,
    base_url: &Url,
    endpoint: &ListingEndpoint,
) -> Vec<String> {
    let url = endpoint_url(base_url, endpoint);
    let mut lines = vec![section_banner(&format!(
        "Fetching {} from {}",
        endpoint.label, url
    ))];

    match fetch_listing(client, base_url, endpoint).await {
        Ok(records) => lines.extend(listing_report(endpoint, &records, base_url)),
        Err(err) => {
            log::warn!("Fetching {} failed: {}", endpoint.label, err);
            lines.extend(failure_report(&err, &url));
        }
    }

    lines
}

/// **Fetches vehicles, then banners**
///
/// Each listing's lines are handed to `emit` as soon as it is done.
pub async fn run_all<F>(client: &Client, base_url: &Url, mut emit: F)
where
    F: FnMut(&[String]),
{
    emit(&[format!("Fetching marketplace data from: {}", base_url)]);

    for endpoint in [VEHICLES, BANNERS] {
        let lines = run_endpoint(client, base_url, &endpoint).await;
        emit(&lines);
    }

    emit(&[String::new()]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::net::TcpListener;
    use std::rc::Rc;
    use vehicles_api_common::config::get_base_url;
    use vehicles_api_mock_service::{routes, MockStore};
    use warp::http::StatusCode;
    use warp::{Filter, Rejection};

    async fn serve<F>(filter: F) -> Url
    where
        F: Filter<Error = Rejection> + Clone + Send + Sync + 'static,
        F::Extract: warp::Reply,
    {
        let (addr, server) = warp::serve(filter).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        get_base_url(Some(format!("http://{}", addr)))
    }

    fn unreachable_base_url() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        get_base_url(Some(format!("http://{}", addr)))
    }

    fn is_rule(line: &str) -> bool {
        !line.is_empty() && line.chars().all(|c| c == '-')
    }

    #[test]
    fn test_example_vehicle_image_is_prefixed() {
        let base_url = get_base_url(Some("http://localhost:3000".to_string()));
        let records = vec![json!({"id": 1, "make": "Honda", "model": "City", "price": 500000,
                                  "odometer": 30000, "imageUrl": "/img/1.jpg"})];

        let lines = listing_report(&VEHICLES, &records, &base_url);
        assert_eq!(lines[0], "Found 1 vehicles.");
        assert_eq!(
            lines[1],
            format!("ID | MAKE  | MODEL | PRICE  | ODOMETER | {:<31}", "IMAGEURL")
        );
        assert_eq!(lines[3], "1  | Honda | City  | 500000 | 30000    | http://localhost:3000/img/1.jpg");
        assert_eq!(lines.len(), 1 + 1 + 3);
    }

    #[test]
    fn test_failure_wording() {
        let url = "http://localhost:3000/api/marketplace/banners";

        let status = ProbeError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(
            failure_report(&status, url),
            vec!["HTTP Error: 500 Internal Server Error", "Response body: boom"]
        );

        let shape = ProbeError::UnexpectedShape { observed: "object" };
        assert_eq!(
            failure_report(&shape, url),
            vec![format!("Error: Expected a list from {}, but got object.", url)]
        );

        let decode: ProbeError = serde_json::from_str::<Value>("oops").unwrap_err().into();
        let lines = failure_report(&decode, url);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("An unexpected error occurred: response body is not valid JSON"));
    }

    #[tokio::test]
    async fn test_mock_service_listings() {
        let base_url = serve(routes(MockStore::seeded().into_shared())).await;
        let client = build_client().unwrap();

        let lines = run_endpoint(&client, &base_url, &VEHICLES).await;
        assert_eq!(lines[1], "Found 3 vehicles.");
        assert!(lines[2].starts_with("ID | MAKE"));
        let rules = lines.iter().filter(|line| is_rule(line)).count();
        assert_eq!(rules, 2);
        // banner, count, header, rule, 3 rows, rule
        assert_eq!(lines.len(), 8);

        let own_image = format!("{}uploads/vehicles/honda-city.jpg", base_url);
        assert!(lines[4].contains(&own_image));
        assert!(lines[5].contains("https://picsum.photos/seed/creta/600/400"));
        assert!(lines[6].starts_with("3 "));
        assert!(lines[6].contains("| null"));
    }

    #[tokio::test]
    async fn test_non_list_body_is_not_rendered() {
        let filter = warp::get().map(|| warp::reply::json(&json!({"message": "maintenance"})));
        let base_url = serve(filter).await;
        let client = build_client().unwrap();

        let lines = run_endpoint(&client, &base_url, &BANNERS).await;
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            format!(
                "Error: Expected a list from {}api/marketplace/banners, but got object.",
                base_url
            )
        );
        assert!(!lines.iter().any(|line| is_rule(line)));
    }

    #[tokio::test]
    async fn test_http_error_reports_status_and_body() {
        let filter = warp::get().map(|| {
            warp::reply::with_status("database is locked", StatusCode::INTERNAL_SERVER_ERROR)
        });
        let base_url = serve(filter).await;
        let client = build_client().unwrap();

        let lines = run_endpoint(&client, &base_url, &VEHICLES).await;
        assert_eq!(
            &lines[1..],
            &[
                "HTTP Error: 500 Internal Server Error".to_string(),
                "Response body: database is locked".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_connection_failure_on_both_endpoints() {
        let base_url = unreachable_base_url();
        let client = build_client().unwrap();

        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink = lines.clone();
        run_all(&client, &base_url, |chunk: &[String]| {
            sink.borrow_mut().extend_from_slice(chunk)
        })
        .await;

        let lines = lines.borrow();
        let diagnostics = lines
            .iter()
            .filter(|line| line.starts_with(CONNECTION_ERROR))
            .collect::<Vec<_>>();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].contains("api/marketplace/vehicles"));
        assert!(diagnostics[1].contains("api/marketplace/banners"));
        // start line, two sections of banner + diagnostic, trailing blank line
        assert_eq!(lines.len(), 1 + 2 * 2 + 1);
    }
}
