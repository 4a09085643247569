//! Filter engine for waitlist records
//!
//! Pure functions: the result depends only on the records and the filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use shared::{Record, RegistrationStatus, ServiceOffering, VendorType};

/// Inclusive signup date bounds
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Combined filter criteria; every field defaults to "no constraint"
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Matched against email, phone number and postcode
    pub free_text: String,
    pub postcode: String,
    pub statuses: HashSet<RegistrationStatus>,
    pub vendor_types: HashSet<VendorType>,
    pub service_offerings: HashSet<ServiceOffering>,
    pub date_range: DateRange,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_free_text(mut self, text: &str) -> Self {
        self.free_text = text.to_string();
        self
    }

    pub fn with_postcode(mut self, postcode: &str) -> Self {
        self.postcode = postcode.to_string();
        self
    }

    pub fn with_status(mut self, status: RegistrationStatus) -> Self {
        self.statuses.insert(status);
        self
    }

    pub fn with_vendor_type(mut self, vendor_type: VendorType) -> Self {
        self.vendor_types.insert(vendor_type);
        self
    }

    pub fn with_service_offering(mut self, service: ServiceOffering) -> Self {
        self.service_offerings.insert(service);
        self
    }

    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.date_range.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.date_range.end = Some(end);
        self
    }

    /// True when no clause is active
    pub fn is_empty(&self) -> bool {
        self.free_text.is_empty()
            && self.postcode.is_empty()
            && self.statuses.is_empty()
            && self.vendor_types.is_empty()
            && self.service_offerings.is_empty()
            && !self.date_range.is_active()
    }

    /// Check a single record against every active clause
    pub fn matches(&self, record: &Record) -> bool {
        CompiledFilter::new(self).matches(record)
    }
}

/// Spec with its text needles lowercased once per pass
struct CompiledFilter<'a> {
    spec: &'a FilterSpec,
    free_text: Option<String>,
    postcode: Option<String>,
}

impl<'a> CompiledFilter<'a> {
    fn new(spec: &'a FilterSpec) -> Self {
        let lowered = |text: &str| (!text.is_empty()).then(|| text.to_lowercase());
        Self {
            spec,
            free_text: lowered(&spec.free_text),
            postcode: lowered(&spec.postcode),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        self.matches_free_text(record)
            && self.matches_postcode(record)
            && set_allows(&self.spec.statuses, &record.status)
            && set_allows(&self.spec.vendor_types, &record.vendor_type)
            && set_allows(&self.spec.service_offerings, &record.service_offering)
            && self.matches_date_range(record)
    }

    fn matches_free_text(&self, record: &Record) -> bool {
        let Some(needle) = &self.free_text else {
            return true;
        };
        [&record.email, &record.phone_number, &record.postcode]
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }

    fn matches_postcode(&self, record: &Record) -> bool {
        match &self.postcode {
            Some(needle) => record.postcode.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// Unparseable signup dates fail whenever a bound is set
    fn matches_date_range(&self, record: &Record) -> bool {
        let range = &self.spec.date_range;
        if !range.is_active() {
            return true;
        }
        match record.parsed_signup_date() {
            Some(date) => range.contains(date),
            None => false,
        }
    }
}

/// Empty set means no constraint; otherwise membership
fn set_allows<T: Eq + std::hash::Hash>(set: &HashSet<T>, value: &T) -> bool {
    set.is_empty() || set.contains(value)
}

/// Stable filter: retained records keep their input order
pub fn apply_filters(records: &[Record], spec: &FilterSpec) -> Vec<Record> {
    if spec.is_empty() {
        return records.to_vec();
    }
    let filter = CompiledFilter::new(spec);
    records.iter().filter(|record| filter.matches(record)).cloned().collect()
}

/// Number of records passing the filter without cloning them
pub fn count_matching(records: &[Record], spec: &FilterSpec) -> usize {
    let filter = CompiledFilter::new(spec);
    records.iter().filter(|record| filter.matches(record)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RecordId;

    fn record(id: &str, postcode: &str, status: RegistrationStatus) -> Record {
        Record {
            id: RecordId::new(id),
            email: format!("{id}@Example.com"),
            phone_number: "07700 900123".to_string(),
            postcode: postcode.to_string(),
            vendor_type: VendorType::Independent,
            service_offering: ServiceOffering::Housekeeping,
            signup_date: "15/03/2024".to_string(),
            status,
        }
    }

    fn scenario() -> Vec<Record> {
        vec![
            record("a", "SW1A", RegistrationStatus::Pending),
            record("b", "E1", RegistrationStatus::Onboarded),
        ]
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let records = scenario();
        assert_eq!(apply_filters(&records, &FilterSpec::new()), records);
    }

    #[test]
    fn test_postcode_scenario() {
        let spec = FilterSpec::new().with_postcode("SW1A");
        assert_eq!(ids(&apply_filters(&scenario(), &spec)), vec!["a"]);

        let spec = FilterSpec::new().with_postcode("sw1");
        assert_eq!(ids(&apply_filters(&scenario(), &spec)), vec!["a"]);
    }

    #[test]
    fn test_status_scenario() {
        let spec = FilterSpec::new().with_status(RegistrationStatus::Onboarded);
        assert_eq!(ids(&apply_filters(&scenario(), &spec)), vec!["b"]);

        let spec = spec.with_status(RegistrationStatus::Pending);
        assert_eq!(ids(&apply_filters(&scenario(), &spec)), vec!["a", "b"]);
    }

    #[test]
    fn test_free_text_matches_email_phone_or_postcode() {
        let records = scenario();

        let by_email = FilterSpec::new().with_free_text("A@EXAMPLE");
        assert_eq!(ids(&apply_filters(&records, &by_email)), vec!["a"]);

        let by_phone = FilterSpec::new().with_free_text("900123");
        assert_eq!(ids(&apply_filters(&records, &by_phone)), vec!["a", "b"]);

        let by_postcode = FilterSpec::new().with_free_text("e1");
        assert_eq!(ids(&apply_filters(&records, &by_postcode)), vec!["b"]);

        let nothing = FilterSpec::new().with_free_text("zzz");
        assert!(apply_filters(&records, &nothing).is_empty());
    }

    #[test]
    fn test_clauses_combine_with_and() {
        let mut records = scenario();
        records[1].vendor_type = VendorType::Company;

        let spec = FilterSpec::new()
            .with_status(RegistrationStatus::Onboarded)
            .with_vendor_type(VendorType::Independent);
        assert!(apply_filters(&records, &spec).is_empty());

        let spec = FilterSpec::new()
            .with_status(RegistrationStatus::Onboarded)
            .with_vendor_type(VendorType::Company)
            .with_service_offering(ServiceOffering::Housekeeping);
        assert_eq!(ids(&apply_filters(&records, &spec)), vec!["b"]);
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let mut records = scenario();
        records[0].signup_date = "01/02/2024".to_string();
        records[1].signup_date = "10/02/2024".to_string();

        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();

        let spec = FilterSpec::new().with_start(start);
        assert_eq!(ids(&apply_filters(&records, &spec)), vec!["a", "b"]);

        let spec = FilterSpec::new().with_start(start).with_end(end);
        assert_eq!(ids(&apply_filters(&records, &spec)), vec!["a"]);

        let spec = FilterSpec::new().with_end(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert!(apply_filters(&records, &spec).is_empty());
    }

    #[test]
    fn test_unparseable_date_excluded_only_when_bound_set() {
        let mut records = scenario();
        records[0].signup_date = "not a date".to_string();

        assert_eq!(apply_filters(&records, &FilterSpec::new().with_postcode("")).len(), 2);

        let spec = FilterSpec::new().with_start(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(ids(&apply_filters(&records, &spec)), vec!["b"]);
    }

    #[test]
    fn test_spec_deserializes_with_defaults() {
        let spec: FilterSpec = serde_json::from_str(
            r#"{"statuses": ["rejected"], "dateRange": {"start": "2024-01-31"}}"#,
        )
        .unwrap();

        assert!(spec.free_text.is_empty());
        assert!(spec.statuses.contains(&RegistrationStatus::Rejected));
        assert_eq!(spec.date_range.start, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(spec.date_range.end, None);
        assert!(!spec.is_empty());
    }

    #[test]
    fn test_count_matching_agrees_with_apply() {
        let spec = FilterSpec::new().with_free_text("example");
        assert_eq!(count_matching(&scenario(), &spec), apply_filters(&scenario(), &spec).len());
    }
}
