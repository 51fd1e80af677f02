//! The "Vehicles API Mock Service's" entry point.

use std::env;
use std::net::SocketAddr;
use vehicles_api_common::cli::helpers::init_logger;
use vehicles_api_mock_service::{routes, MockStore};

/// The environment variable holding the listen address.
const ADDR_ENV: &str = "MOCK_SERVICE_ADDR";

const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

fn listen_addr(addr: Option<String>) -> SocketAddr {
    match addr.map(|addr| addr.parse::<SocketAddr>()) {
        Some(Ok(addr)) => addr,
        Some(Err(err)) => {
            log::warn!("{} could not be parsed ({}); using default", ADDR_ENV, err);
            DEFAULT_ADDR.into()
        }
        None => DEFAULT_ADDR.into(),
    }
}

/// The "Vehicles API Mock Service's" entry point.
#[tokio::main]
async fn main() {
    init_logger("vehicles_api_mock_service");

    let store = MockStore::seeded().into_shared();
    let addr = listen_addr(env::var(ADDR_ENV).ok());
    log::info!("Serving the vehicles API on http://{}", addr);

    // Start up the server
    warp::serve(routes(store)).run(addr).await;
}
