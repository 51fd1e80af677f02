use reqwest::{header, Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use vehicles_api_common::cli::constants::*;
use vehicles_api_common::cli::helpers::{pretty_json, section_banner};
use vehicles_api_common::errors::ProbeError;
use vehicles_api_common::{InsuranceRenewalRequest, LoanRequest, PdiInspectionRequest};

/// Every submission gives up after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// **One fixed submission: an endpoint and the payload sent to it**
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionCase {
    LoanRequest(LoanRequest),
    InsuranceRenewal(InsuranceRenewalRequest),
    PdiInspection(PdiInspectionRequest),
}

impl SubmissionCase {
    /// Name shown in the case's banner.
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionCase::LoanRequest(_) => "Loan Request",
            SubmissionCase::InsuranceRenewal(_) => "Insurance Renewal",
            SubmissionCase::PdiInspection(_) => "PDI Inspection",
        }
    }

    /// Path relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            SubmissionCase::LoanRequest(_) => "api/loan-requests",
            SubmissionCase::InsuranceRenewal(_) => "api/insurance-renewals",
            SubmissionCase::PdiInspection(_) => "api/pdi-inspections",
        }
    }
}

pub fn loan_request_payload() -> LoanRequest {
    LoanRequest {
        name: "Test Borrower".to_string(),
        phone: "9876543210".to_string(),
        email: "borrower@example.com".to_string(),
        make: "Test Make".to_string(),
        model: "Test Model".to_string(),
        variant: "LXI".to_string(),
        pan_number: "ABCDE1234F".to_string(),
        aadhar_number: "123456789012".to_string(),
    }
}

pub fn insurance_renewal_payload() -> InsuranceRenewalRequest {
    InsuranceRenewalRequest {
        name: "Test PolicyHolder".to_string(),
        phone: "8765432109".to_string(),
        registration_number: "MH12XY1234".to_string(),
        insurance_type: "Comprehensive".to_string(),
    }
}

pub fn pdi_inspection_payload() -> PdiInspectionRequest {
    PdiInspectionRequest {
        name: "Test PDI Customer".to_string(),
        phone: "7654321098".to_string(),
        email: "pdi.customer@example.com".to_string(),
        city: "Test City".to_string(),
        make: "Test Vehicle Make".to_string(),
        model: "Test Vehicle Model".to_string(),
    }
}

/// **The three submissions, in the order they are run**
pub fn submission_cases() -> Vec<SubmissionCase> {
    vec![
        SubmissionCase::LoanRequest(loan_request_payload()),
        SubmissionCase::InsuranceRenewal(insurance_renewal_payload()),
        SubmissionCase::PdiInspection(pdi_inspection_payload()),
    ]
}

/// **The HTTP client shared by all submissions of a run**
pub fn build_client() -> Result<Client, ProbeError> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("vehicles_api_submit_cli")
        .build()?;

    Ok(client)
}

/// **What the server answered to a submission**
///
/// Any status counts, errors included; only the transport can fail.
#[derive(Debug)]
pub struct Submission {
    pub status: StatusCode,
    pub body: String,
}

/// **Send a POST request with the case's payload**
///
/// Sent exactly once; there are no retries.
pub async fn submit(
    client: &Client,
    base_url: &Url,
    case: &SubmissionCase,
) -> Result<Submission, ProbeError> {
    let url = base_url.join(case.path())?;
    log::info!("POST {}", url);

    let request = client
        .post(url)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match case {
        SubmissionCase::LoanRequest(payload) => request.json(payload),
        SubmissionCase::InsuranceRenewal(payload) => request.json(payload),
        SubmissionCase::PdiInspection(payload) => request.json(payload),
    };

    let response = request.send().await?;
    let status = response.status();
    log::debug!("{} answered {}", case.name(), status);
    let body = response.text().await?;

    Ok(Submission { status, body })
}

/// **Report lines for a completed submission**
///
/// The status code, then the body pretty-printed as JSON.
/// A body that isn't JSON is reported as an error, followed by the raw text.
pub fn submission_report(submission: &Submission) -> Vec<String> {
    let mut lines = vec![format!("{} {}", STATUS_CODE, submission.status.as_u16())];

    match serde_json::from_str::<Value>(&submission.body) {
        Ok(json) => {
            lines.push(RESPONSE_JSON.to_string());
            lines.push(pretty_json(&json));
        }
        Err(err) => {
            lines.push(format!("{} {}", AN_ERROR_OCCURRED, ProbeError::from(err)));
            if !submission.body.trim().is_empty() {
                lines.push(submission.body.clone());
            }
        }
    }

    lines
}

/// **Runs a single case and reports on it**
///
/// Never fails: a transport error becomes a single diagnostic line.
pub async fn run_case(client: &Client, base_url: &Url, case: &SubmissionCase) -> Vec<String> {
    let mut lines = vec![section_banner(&format!("Testing {} API", case.name()))];

    match submit(client, base_url, case).await {
        Ok(submission) => lines.extend(submission_report(&submission)),
        Err(err) => {
            log::warn!("{} failed: {}", case.name(), err);
            lines.push(format!("{} {}", AN_ERROR_OCCURRED, err));
        }
    }

    lines
}

/// **Runs all cases in order**
///
/// Each case's lines are handed to `emit` as soon as the case is done,
/// whatever the outcome of the previous cases.
pub async fn run_all<F>(client: &Client, base_url: &Url, mut emit: F)
where
    F: FnMut(&[String]),
{
    emit(&[format!("Starting API tests for base URL: {}", base_url)]);

    for case in submission_cases() {
        let lines = run_case(client, base_url, &case).await;
        emit(&lines);
    }

    emit(&[section_banner("All tests completed."), String::new()]);
}
