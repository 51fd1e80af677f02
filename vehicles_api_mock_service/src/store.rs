//! In-memory state of the mock service

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use vehicles_api_common::{InsuranceRenewalRequest, LoanRequest, PdiInspectionRequest};

pub type SharedStore = Arc<Mutex<MockStore>>;

/// Status given to every newly stored submission.
pub const NEW_STATUS: &str = "New";

/// **A stored submission**
///
/// The submitted fields, flattened, plus the id and status the server assigns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stored<T> {
    pub id: u64,
    #[serde(flatten)]
    pub data: T,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceVehicle {
    pub id: u64,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub price: u64,
    pub fuel_type: String,
    pub odometer: u64,
    pub rto_state: String,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceBanner {
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Default)]
pub struct MockStore {
    next_id: u64,
    pub loan_requests: Vec<Stored<LoanRequest>>,
    pub insurance_renewals: Vec<Stored<InsuranceRenewalRequest>>,
    pub pdi_inspections: Vec<Stored<PdiInspectionRequest>>,
    pub vehicles: Vec<MarketplaceVehicle>,
    pub banners: Vec<MarketplaceBanner>,
}

impl MockStore {
    /// A store with no submissions and no listings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with a few vehicles and banners for sale.
    pub fn seeded() -> Self {
        Self {
            vehicles: seed_vehicles(),
            banners: seed_banners(),
            ..Self::default()
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    fn stamp<T>(&mut self, data: T) -> Stored<T> {
        self.next_id += 1;
        Stored {
            id: self.next_id,
            data,
            status: NEW_STATUS.to_string(),
        }
    }

    pub fn add_loan_request(&mut self, request: LoanRequest) -> Stored<LoanRequest> {
        let stored = self.stamp(request);
        self.loan_requests.push(stored.clone());
        stored
    }

    pub fn add_insurance_renewal(
        &mut self,
        renewal: InsuranceRenewalRequest,
    ) -> Stored<InsuranceRenewalRequest> {
        let stored = self.stamp(renewal);
        self.insurance_renewals.push(stored.clone());
        stored
    }

    pub fn add_pdi_inspection(
        &mut self,
        inspection: PdiInspectionRequest,
    ) -> Stored<PdiInspectionRequest> {
        let stored = self.stamp(inspection);
        self.pdi_inspections.push(stored.clone());
        stored
    }
}

fn seed_vehicles() -> Vec<MarketplaceVehicle> {
    vec![
        MarketplaceVehicle {
            id: 1,
            make: "Honda".to_string(),
            model: "City".to_string(),
            variant: "VX CVT".to_string(),
            price: 500000,
            fuel_type: "Petrol".to_string(),
            odometer: 30000,
            rto_state: "MH".to_string(),
            image_url: Some("/uploads/vehicles/honda-city.jpg".to_string()),
        },
        MarketplaceVehicle {
            id: 2,
            make: "Hyundai".to_string(),
            model: "Creta".to_string(),
            variant: "SX".to_string(),
            price: 1150000,
            fuel_type: "Diesel".to_string(),
            odometer: 52000,
            rto_state: "KA".to_string(),
            image_url: Some("https://picsum.photos/seed/creta/600/400".to_string()),
        },
        MarketplaceVehicle {
            id: 3,
            make: "Maruti Suzuki".to_string(),
            model: "Swift".to_string(),
            variant: "ZXI".to_string(),
            price: 425000,
            fuel_type: "Petrol".to_string(),
            odometer: 41250,
            rto_state: "DL".to_string(),
            image_url: None,
        },
    ]
}

fn seed_banners() -> Vec<MarketplaceBanner> {
    vec![
        MarketplaceBanner {
            title: "Festive Offers".to_string(),
            image_url: "/uploads/banners/festive.png".to_string(),
        },
        MarketplaceBanner {
            title: "Certified Pre-Owned".to_string(),
            image_url: "https://placehold.co/1200x400".to_string(),
        },
    ]
}
