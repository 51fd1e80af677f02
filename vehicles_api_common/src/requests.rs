//! Request payloads for the submission endpoints

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub pan_number: String,
    pub aadhar_number: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRenewalRequest {
    pub name: String,
    pub phone: String,
    pub registration_number: String,
    pub insurance_type: String,
}

/// **Pre-delivery inspection booking**
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdiInspectionRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub make: String,
    pub model: String,
}
