//! Handler functions

use crate::store::SharedStore;
use serde::Serialize;
use serde_json::{Map, Value};
use std::convert::Infallible;
use vehicles_api_common::{InsuranceRenewalRequest, LoanRequest, PdiInspectionRequest};
use warp::http::StatusCode;
use warp::Reply;

/// `201 Created` with `{"message": ..., <key>: <record>}`.
fn created<T: Serialize>(message: &str, key: &str, record: &T) -> impl Reply {
    let mut body = Map::new();
    body.insert("message".to_string(), Value::from(message));
    body.insert(
        key.to_string(),
        serde_json::to_value(record).unwrap_or_default(),
    );
    warp::reply::with_status(warp::reply::json(&body), StatusCode::CREATED)
}

/// The `loan_request` handler
///
/// POST /api/loan-requests
pub async fn loan_request(
    request: LoanRequest,
    store: SharedStore,
) -> Result<impl Reply, Infallible> {
    log::debug!("loan_request; request = {:?}", request);
    let stored = store.lock().await.add_loan_request(request);
    log::info!("Stored loan request {}", stored.id);
    Ok(created(
        "Loan request submitted successfully",
        "request",
        &stored,
    ))
}

/// The `insurance_renewal` handler
///
/// POST /api/insurance-renewals
pub async fn insurance_renewal(
    renewal: InsuranceRenewalRequest,
    store: SharedStore,
) -> Result<impl Reply, Infallible> {
    log::debug!("insurance_renewal; renewal = {:?}", renewal);
    let stored = store.lock().await.add_insurance_renewal(renewal);
    log::info!("Stored insurance renewal {}", stored.id);
    Ok(created(
        "Insurance renewal request submitted successfully",
        "renewal",
        &stored,
    ))
}

/// The `pdi_inspection` handler
///
/// POST /api/pdi-inspections
pub async fn pdi_inspection(
    inspection: PdiInspectionRequest,
    store: SharedStore,
) -> Result<impl Reply, Infallible> {
    log::debug!("pdi_inspection; inspection = {:?}", inspection);
    let stored = store.lock().await.add_pdi_inspection(inspection);
    log::info!("Stored PDI inspection {}", stored.id);
    Ok(created(
        "PDI inspection request submitted successfully",
        "inspection",
        &stored,
    ))
}

/// The `vehicles` handler
///
/// Responds with every vehicle listed for sale.
///
/// GET /api/marketplace/vehicles
pub async fn vehicles(store: SharedStore) -> Result<impl Reply, Infallible> {
    log::debug!("vehicles");
    let vehicles = &store.lock().await.vehicles;
    Ok(warp::reply::json(vehicles))
}

/// The `banners` handler
///
/// GET /api/marketplace/banners
pub async fn banners(store: SharedStore) -> Result<impl Reply, Infallible> {
    log::debug!("banners");
    let banners = &store.lock().await.banners;
    Ok(warp::reply::json(banners))
}
