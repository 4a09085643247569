//! Core shared types and identifiers for waitlist records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Textual format of `Record::signup_date` (day/month/year)
pub const SIGNUP_DATE_FORMAT: &str = "%d/%m/%Y";

/// Unique identifier for a waitlist record
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Whether a service provider trades alone or as a business
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorType {
    Independent,
    Company,
}

impl VendorType {
    pub const ALL: [VendorType; 2] = [VendorType::Independent, VendorType::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            VendorType::Independent => "independent",
            VendorType::Company => "company",
        }
    }

    /// Capitalised label shown in the table
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for VendorType {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        match s.to_lowercase().as_str() {
            "independent" => Ok(VendorType::Independent),
            "company" => Ok(VendorType::Company),
            _ => Err(SharedError::invalid_value("vendorType", s)),
        }
    }
}

/// Service a waitlist entrant offers or is looking for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceOffering {
    Housekeeping,
    WindowCleaning,
    CarValet,
}

impl ServiceOffering {
    pub const ALL: [ServiceOffering; 3] = [
        ServiceOffering::Housekeeping,
        ServiceOffering::WindowCleaning,
        ServiceOffering::CarValet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceOffering::Housekeeping => "housekeeping",
            ServiceOffering::WindowCleaning => "window-cleaning",
            ServiceOffering::CarValet => "car-valet",
        }
    }

    /// Hyphen-separated words, each capitalised ("Window Cleaning")
    pub fn label(&self) -> String {
        self.as_str().split('-').map(title_case).collect::<Vec<_>>().join(" ")
    }
}

impl FromStr for ServiceOffering {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        match s.to_lowercase().as_str() {
            "housekeeping" => Ok(ServiceOffering::Housekeeping),
            "window-cleaning" => Ok(ServiceOffering::WindowCleaning),
            "car-valet" => Ok(ServiceOffering::CarValet),
            _ => Err(SharedError::invalid_value("serviceOffering", s)),
        }
    }
}

/// Registration status of a waitlist entrant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Onboarded,
    Rejected,
    Pending,
}

impl RegistrationStatus {
    pub const ALL: [RegistrationStatus; 3] = [
        RegistrationStatus::Onboarded,
        RegistrationStatus::Rejected,
        RegistrationStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Onboarded => "onboarded",
            RegistrationStatus::Rejected => "rejected",
            RegistrationStatus::Pending => "pending",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            RegistrationStatus::Onboarded => BadgeVariant::Success,
            RegistrationStatus::Rejected => BadgeVariant::Warning,
            RegistrationStatus::Pending => BadgeVariant::Default,
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        match s.to_lowercase().as_str() {
            "onboarded" => Ok(RegistrationStatus::Onboarded),
            "rejected" => Ok(RegistrationStatus::Rejected),
            "pending" => Ok(RegistrationStatus::Pending),
            _ => Err(SharedError::invalid_value("status", s)),
        }
    }
}

/// Visual variant of a status badge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Success,
    Warning,
    Default,
}

/// One waitlist entrant (service provider or customer)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub email: String,
    pub phone_number: String,
    pub postcode: String,
    pub vendor_type: VendorType,
    pub service_offering: ServiceOffering,
    /// Day/month/year text, kept as received
    pub signup_date: String,
    pub status: RegistrationStatus,
}

impl Record {
    /// Parse `signup_date`; `None` when it is not a valid DD/MM/YYYY date
    pub fn parsed_signup_date(&self) -> Option<NaiveDate> {
        parse_signup_date(&self.signup_date)
    }

    /// Copy of this record with only the status replaced
    pub fn with_status(&self, status: RegistrationStatus) -> Record {
        Record {
            status,
            ..self.clone()
        }
    }
}

/// Parse a day/month/year signup date
pub fn parse_signup_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), SIGNUP_DATE_FORMAT).ok()
}

/// Which record collection the waitlist table shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaitlistTab {
    #[default]
    ServiceProviders,
    Customers,
}

impl WaitlistTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitlistTab::ServiceProviders => "serviceProviders",
            WaitlistTab::Customers => "customers",
        }
    }
}

impl fmt::Display for WaitlistTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WaitlistTab {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        match s {
            "serviceProviders" | "providers" => Ok(WaitlistTab::ServiceProviders),
            "customers" => Ok(WaitlistTab::Customers),
            _ => Err(SharedError::invalid_value("tab", s)),
        }
    }
}

/// The static waitlist document: two named record collections
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistData {
    pub service_providers: Vec<Record>,
    pub customers: Vec<Record>,
}

impl WaitlistData {
    /// Parse and validate a waitlist JSON document
    pub fn from_json(json: &str) -> SharedResult<Self> {
        let data: WaitlistData = serde_json::from_str(json).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })?;
        data.validate()?;
        Ok(data)
    }

    /// Record ids must be unique across both collections
    pub fn validate(&self) -> SharedResult<()> {
        let mut seen = HashSet::with_capacity(self.total_records());
        for record in self.service_providers.iter().chain(self.customers.iter()) {
            if !seen.insert(&record.id) {
                return Err(SharedError::DuplicateRecordId {
                    id: record.id.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn records(&self, tab: WaitlistTab) -> &[Record] {
        match tab {
            WaitlistTab::ServiceProviders => &self.service_providers,
            WaitlistTab::Customers => &self.customers,
        }
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.service_providers
            .iter()
            .chain(self.customers.iter())
            .find(|record| &record.id == id)
    }

    /// Replace the record with a matching id by a copy carrying the new status
    pub fn update_status(&mut self, id: &RecordId, status: RegistrationStatus) -> Option<Record> {
        let slot = self
            .service_providers
            .iter_mut()
            .chain(self.customers.iter_mut())
            .find(|record| &record.id == id)?;
        *slot = slot.with_status(status);
        Some(slot.clone())
    }

    pub fn total_records(&self) -> usize {
        self.service_providers.len() + self.customers.len()
    }
}

/// Uppercase the first character of a word
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str, signup_date: &str) -> Record {
        Record {
            id: RecordId::new(id),
            email: format!("{id}@example.com"),
            phone_number: "07700 900123".to_string(),
            postcode: "SW1A 1AA".to_string(),
            vendor_type: VendorType::Independent,
            service_offering: ServiceOffering::WindowCleaning,
            signup_date: signup_date.to_string(),
            status: RegistrationStatus::Pending,
        }
    }

    #[test]
    fn test_record_wire_format() {
        let json = r#"{
            "id": "sp-1",
            "email": "a@example.com",
            "phoneNumber": "07700 900001",
            "postcode": "E1 6AN",
            "vendorType": "company",
            "serviceOffering": "car-valet",
            "signupDate": "12/03/2024",
            "status": "onboarded"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "sp-1");
        assert_eq!(record.vendor_type, VendorType::Company);
        assert_eq!(record.service_offering, ServiceOffering::CarValet);
        assert_eq!(record.status, RegistrationStatus::Onboarded);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["phoneNumber"], "07700 900001");
        assert_eq!(value["serviceOffering"], "car-valet");
    }

    #[test]
    fn test_signup_date_is_day_month_year() {
        let record = sample_record("a", "02/01/2024");
        assert_eq!(record.parsed_signup_date(), NaiveDate::from_ymd_opt(2024, 1, 2));

        assert_eq!(sample_record("b", "2024-01-02").parsed_signup_date(), None);
        assert_eq!(sample_record("c", "31/02/2024").parsed_signup_date(), None);
        assert_eq!(sample_record("d", "").parsed_signup_date(), None);
    }

    #[test]
    fn test_with_status_only_changes_status() {
        let record = sample_record("a", "02/01/2024");
        let updated = record.with_status(RegistrationStatus::Rejected);

        assert_eq!(updated.status, RegistrationStatus::Rejected);
        assert_eq!(updated.email, record.email);
        assert_eq!(updated.signup_date, record.signup_date);
        assert_eq!(record.status, RegistrationStatus::Pending);
    }

    #[test]
    fn test_labels() {
        assert_eq!(VendorType::Independent.label(), "Independent");
        assert_eq!(ServiceOffering::WindowCleaning.label(), "Window Cleaning");
        assert_eq!(ServiceOffering::Housekeeping.label(), "Housekeeping");
        assert_eq!(RegistrationStatus::Onboarded.badge(), BadgeVariant::Success);
        assert_eq!(RegistrationStatus::Rejected.badge(), BadgeVariant::Warning);
        assert_eq!(RegistrationStatus::Pending.badge(), BadgeVariant::Default);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Onboarded".parse::<RegistrationStatus>().unwrap(), RegistrationStatus::Onboarded);
        assert_eq!("window-cleaning".parse::<ServiceOffering>().unwrap(), ServiceOffering::WindowCleaning);
        assert_eq!("providers".parse::<WaitlistTab>().unwrap(), WaitlistTab::ServiceProviders);
        assert!("archived".parse::<RegistrationStatus>().is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let data = WaitlistData {
            service_providers: vec![sample_record("a", "01/01/2024"), sample_record("a", "02/01/2024")],
            customers: vec![],
        };

        assert!(matches!(data.validate(), Err(SharedError::DuplicateRecordId { .. })));
    }

    #[test]
    fn test_id_shared_between_collections_rejected() {
        let data = WaitlistData {
            service_providers: vec![sample_record("x-1", "01/01/2024")],
            customers: vec![sample_record("x-1", "05/01/2024")],
        };

        assert!(matches!(data.validate(), Err(SharedError::DuplicateRecordId { ref id }) if id == "x-1"));

        let json = serde_json::to_string(&data).unwrap();
        assert!(WaitlistData::from_json(&json).is_err());
    }

    #[test]
    fn test_update_status_by_id() {
        let mut data = WaitlistData {
            service_providers: vec![sample_record("a", "01/01/2024")],
            customers: vec![sample_record("c", "01/01/2024")],
        };

        let updated = data.update_status(&RecordId::new("c"), RegistrationStatus::Onboarded).unwrap();
        assert_eq!(updated.status, RegistrationStatus::Onboarded);
        assert_eq!(data.customers[0].status, RegistrationStatus::Onboarded);
        assert_eq!(data.service_providers[0].status, RegistrationStatus::Pending);

        assert!(data.update_status(&RecordId::new("missing"), RegistrationStatus::Rejected).is_none());
    }
}
