//! Route table of the mock service

use crate::handlers;
use crate::store::SharedStore;
use std::convert::Infallible;
use warp::{Filter, Rejection, Reply};

/// Request bodies larger than this are rejected.
pub const BODY_LIMIT: u64 = 1024 * 16;

fn with_store(
    store: SharedStore,
) -> impl Filter<Extract = (SharedStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

/// **All routes of the mock service, with request logging**
pub fn routes(store: SharedStore) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let log = warp::log("vehicles_api_mock_service");

    let loan_request = warp::path!("api" / "loan-requests")
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::loan_request);

    let insurance_renewal = warp::path!("api" / "insurance-renewals")
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::insurance_renewal);

    let pdi_inspection = warp::path!("api" / "pdi-inspections")
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::pdi_inspection);

    let vehicles = warp::path!("api" / "marketplace" / "vehicles")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::vehicles);

    let banners = warp::path!("api" / "marketplace" / "banners")
        .and(warp::get())
        .and(with_store(store))
        .and_then(handlers::banners);

    loan_request
        .or(insurance_renewal)
        .or(pdi_inspection)
        .or(vehicles)
        .or(banners)
        .with(log)
}
