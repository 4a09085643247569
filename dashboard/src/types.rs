//! Request bodies and response shapes of the HTTP API

use serde::{Deserialize, Serialize};

use shared::{BadgeVariant, Record, RecordId, RegistrationStatus, WaitlistTab};
use waitlist::{FilterSpec, WaitlistView};

/// Table row with the display labels the front end renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRow {
    #[serde(flatten)]
    pub record: Record,
    pub vendor_label: String,
    pub service_label: String,
    pub badge: BadgeVariant,
    pub selected: bool,
}

impl WaitlistRow {
    pub fn new(record: Record, selected: bool) -> Self {
        Self {
            vendor_label: record.vendor_type.label(),
            service_label: record.service_offering.label(),
            badge: record.status.badge(),
            selected,
            record,
        }
    }
}

/// Current page of the waitlist table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistPage {
    pub tab: WaitlistTab,
    pub filters: FilterSpec,
    pub draft_pending: bool,
    pub rows: Vec<WaitlistRow>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_window: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    pub all_selected: bool,
    pub selected_count: usize,
}

impl From<WaitlistView> for WaitlistPage {
    fn from(view: WaitlistView) -> Self {
        let page = view.page;
        Self {
            tab: view.tab,
            filters: view.applied,
            draft_pending: view.draft_pending,
            rows: page
                .items
                .into_iter()
                .map(|row| WaitlistRow::new(row.record, row.selected))
                .collect(),
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages: page.total_pages,
            total_items: page.total_items,
            page_window: view.page_window,
            has_previous: view.has_previous,
            has_next: view.has_next,
            all_selected: view.all_selected,
            selected_count: view.selected_count,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabRequest {
    pub tab: WaitlistTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDirection {
    Next,
    Previous,
}

/// Either an explicit page number or a step
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PageRequest {
    Number { page: usize },
    Step { direction: PageDirection },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleRequest {
    pub id: RecordId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusRequest {
    pub status: RegistrationStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigQuery {
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::{ServiceOffering, VendorType};

    #[test]
    fn test_page_request_forms() {
        let by_number: PageRequest = serde_json::from_value(json!({ "page": 3 })).unwrap();
        assert_eq!(by_number, PageRequest::Number { page: 3 });

        let by_step: PageRequest = serde_json::from_value(json!({ "direction": "previous" })).unwrap();
        assert_eq!(
            by_step,
            PageRequest::Step {
                direction: PageDirection::Previous
            }
        );

        assert!(serde_json::from_value::<PageRequest>(json!({ "direction": "sideways" })).is_err());
    }

    #[test]
    fn test_row_carries_display_labels() {
        let record = Record {
            id: RecordId::new("sp-7"),
            email: "jo@example.com".to_string(),
            phone_number: "07700 900007".to_string(),
            postcode: "E1 6AN".to_string(),
            vendor_type: VendorType::Company,
            service_offering: ServiceOffering::WindowCleaning,
            signup_date: "14/02/2024".to_string(),
            status: RegistrationStatus::Rejected,
        };

        let value = serde_json::to_value(WaitlistRow::new(record, true)).unwrap();
        assert_eq!(value["id"], "sp-7");
        assert_eq!(value["serviceOffering"], "window-cleaning");
        assert_eq!(value["vendorLabel"], "Company");
        assert_eq!(value["serviceLabel"], "Window Cleaning");
        assert_eq!(value["badge"], "warning");
        assert_eq!(value["selected"], true);
    }
}
