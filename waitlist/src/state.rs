//! Waitlist state management
//!
//! Owns the record source, the loaded record store and the table view. The
//! store is populated once; until then every table operation is refused so
//! filters never run over a partially loaded store.
//!
//! Source calls can run outside a lock on this state: take `source()`, await
//! the call, then hand the result to `install` or `merge`.

use serde::Serialize;
use std::sync::Arc;

use shared::{Component, Record, RecordId, RegistrationStatus, WaitlistData, WaitlistTab, component_info, component_warn};

use crate::core::{FilterSpec, TableView, WaitlistView};
use crate::error::{WaitlistError, WaitlistResult};
use crate::traits::RecordSource;

/// Loading lifecycle of the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    fn label(&self) -> String {
        match self {
            LoadState::Loading => "loading".to_string(),
            LoadState::Ready => "ready".to_string(),
            LoadState::Failed(reason) => format!("failed: {reason}"),
        }
    }
}

/// Record store plus table state for one dashboard session
pub struct WaitlistState<S: RecordSource> {
    source: Arc<S>,
    load_state: LoadState,
    store: WaitlistData,
    table: TableView,
}

impl<S: RecordSource> WaitlistState<S> {
    /// Create state in the `Loading` state; call `load` to populate it
    pub fn new(source: S) -> Self {
        Self::with_table(source, TableView::new())
    }

    pub fn with_table(source: S, table: TableView) -> Self {
        Self {
            source: Arc::new(source),
            load_state: LoadState::Loading,
            store: WaitlistData::default(),
            table,
        }
    }

    /// Populate the store from the record source
    pub async fn load(&mut self) -> WaitlistResult<()> {
        self.begin_load();
        let result = self.source.fetch_all().await;
        self.install(result)
    }

    /// Refuse table operations until the next `install`
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Install the outcome of a `fetch_all` on the record source
    pub fn install(&mut self, result: WaitlistResult<WaitlistData>) -> WaitlistResult<()> {
        match result {
            Ok(data) => {
                component_info!(
                    Component::Waitlist,
                    providers = data.service_providers.len(),
                    customers = data.customers.len(),
                    "📋 Waitlist data loaded"
                );
                self.store = data;
                self.load_state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                component_warn!(Component::Waitlist, error = %e, "Waitlist data failed to load");
                self.load_state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn store(&self) -> &WaitlistData {
        &self.store
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// `NotLoaded` unless the store is ready
    pub fn ensure_ready(&self) -> WaitlistResult<()> {
        if self.load_state.is_ready() {
            Ok(())
        } else {
            Err(WaitlistError::NotLoaded {
                state: self.load_state.label(),
            })
        }
    }

    /// Recompute the current page
    pub fn view(&mut self) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        Ok(self.table.view(&self.store))
    }

    /// Replace the draft filter; the view is unchanged until `apply_filters`
    pub fn set_draft(&mut self, spec: FilterSpec) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        self.table.set_draft(spec);
        self.view()
    }

    pub fn apply_filters(&mut self) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        self.table.apply();
        component_info!(
            Component::Waitlist,
            tab = %self.table.tab(),
            "🔍 Filters applied"
        );
        self.view()
    }

    pub fn clear_filters(&mut self) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        self.table.clear();
        self.view()
    }

    pub fn switch_tab(&mut self, tab: WaitlistTab) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        self.table.switch_tab(tab);
        self.view()
    }

    pub fn go_to_page(&mut self, page: usize) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        self.table.go_to_page(&self.store, page);
        self.view()
    }

    pub fn next_page(&mut self) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        self.table.next_page(&self.store);
        self.view()
    }

    pub fn previous_page(&mut self) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        self.table.previous_page(&self.store);
        self.view()
    }

    /// Flip the selection of a record of the active tab
    pub fn toggle(&mut self, id: &RecordId) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        if !self.store.records(self.table.tab()).iter().any(|record| &record.id == id) {
            return Err(WaitlistError::not_found(id));
        }
        self.table.toggle(id);
        self.view()
    }

    pub fn toggle_all(&mut self) -> WaitlistResult<WaitlistView> {
        self.ensure_ready()?;
        self.table.toggle_all(&self.store);
        self.view()
    }

    /// Update a record's status through the source and merge it into the store
    pub async fn update_status(&mut self, id: &RecordId, status: RegistrationStatus) -> WaitlistResult<Record> {
        self.ensure_ready()?;
        let updated = self.source.update_status(id, status).await?;
        self.merge(&updated);
        Ok(updated)
    }

    /// Merge a record returned by the source into the store by id
    pub fn merge(&mut self, updated: &Record) {
        if self.store.update_status(&updated.id, updated.status).is_none() {
            component_warn!(
                Component::Waitlist,
                "Record {} updated by the source is missing from the store",
                updated.id
            );
            return;
        }
        component_info!(Component::Waitlist, "✏️ Status of {} set to {}", updated.id, updated.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockRecordSource;
    use shared::{ServiceOffering, VendorType};

    fn record(id: &str, status: RegistrationStatus) -> Record {
        Record {
            id: RecordId::new(id),
            email: format!("{id}@example.com"),
            phone_number: "07700 900555".to_string(),
            postcode: "LS1 4DY".to_string(),
            vendor_type: VendorType::Independent,
            service_offering: ServiceOffering::WindowCleaning,
            signup_date: "05/05/2024".to_string(),
            status,
        }
    }

    fn data() -> WaitlistData {
        WaitlistData {
            service_providers: vec![record("a", RegistrationStatus::Pending), record("b", RegistrationStatus::Onboarded)],
            customers: vec![],
        }
    }

    #[tokio::test]
    async fn test_operations_refused_before_load() {
        let mock = MockRecordSource::new();
        let mut state = WaitlistState::new(mock);

        assert_eq!(state.load_state(), &LoadState::Loading);
        assert!(matches!(state.view(), Err(WaitlistError::NotLoaded { .. })));
        assert!(matches!(state.apply_filters(), Err(WaitlistError::NotLoaded { .. })));
    }

    #[tokio::test]
    async fn test_rejected_draft_is_not_kept() {
        let mut mock = MockRecordSource::new();
        mock.expect_fetch_all().returning(|| Ok(data()));

        let mut state = WaitlistState::new(mock);
        let result = state.set_draft(FilterSpec::new().with_postcode("SW1A"));
        assert!(matches!(result, Err(WaitlistError::NotLoaded { .. })));

        state.load().await.unwrap();
        assert!(state.table().draft().is_empty());
        assert!(!state.view().unwrap().draft_pending);
    }

    #[test]
    fn test_install_outcome_of_detached_fetch() {
        let mut state = WaitlistState::new(MockRecordSource::new());

        let failed = state.install(Err(WaitlistError::SourceError {
            message: "timeout".to_string(),
        }));
        assert!(failed.is_err());
        assert!(matches!(state.load_state(), LoadState::Failed(reason) if reason.contains("timeout")));

        state.install(Ok(data())).unwrap();
        assert!(state.load_state().is_ready());
        assert_eq!(state.store(), &data());

        state.begin_load();
        assert!(matches!(state.view(), Err(WaitlistError::NotLoaded { .. })));
    }

    #[test]
    fn test_merge_ignores_unknown_record() {
        let mut state = WaitlistState::new(MockRecordSource::new());
        state.install(Ok(data())).unwrap();

        state.merge(&record("zzz", RegistrationStatus::Rejected));
        assert_eq!(state.store(), &data());

        state.merge(&record("b", RegistrationStatus::Rejected));
        assert_eq!(state.store().service_providers[1].status, RegistrationStatus::Rejected);
    }

    #[tokio::test]
    async fn test_load_populates_store() {
        let mut mock = MockRecordSource::new();
        mock.expect_fetch_all().times(1).returning(|| Ok(data()));

        let mut state = WaitlistState::new(mock);
        state.load().await.unwrap();

        assert!(state.load_state().is_ready());
        assert_eq!(state.view().unwrap().page.total_items, 2);
    }

    #[tokio::test]
    async fn test_failed_load_is_reported() {
        let mut mock = MockRecordSource::new();
        mock.expect_fetch_all().returning(|| {
            Err(WaitlistError::SourceError {
                message: "fixture unavailable".to_string(),
            })
        });

        let mut state = WaitlistState::new(mock);
        assert!(state.load().await.is_err());
        assert!(matches!(state.load_state(), LoadState::Failed(reason) if reason.contains("fixture unavailable")));
        assert!(state.view().is_err());
    }

    #[tokio::test]
    async fn test_status_update_merges_into_store() {
        let mut mock = MockRecordSource::new();
        mock.expect_fetch_all().returning(|| Ok(data()));
        mock.expect_update_status()
            .withf(|id, status| id.as_str() == "a" && *status == RegistrationStatus::Rejected)
            .times(1)
            .returning(|id, status| Ok(record(id.as_str(), RegistrationStatus::Pending).with_status(status)));

        let mut state = WaitlistState::new(mock);
        state.load().await.unwrap();

        let updated = state
            .update_status(&RecordId::new("a"), RegistrationStatus::Rejected)
            .await
            .unwrap();
        assert_eq!(updated.status, RegistrationStatus::Rejected);
        assert_eq!(state.store().service_providers[0].status, RegistrationStatus::Rejected);

        state
            .set_draft(FilterSpec::new().with_status(RegistrationStatus::Rejected))
            .unwrap();
        let view = state.apply_filters().unwrap();
        assert_eq!(view.page.total_items, 1);
    }

    #[tokio::test]
    async fn test_status_update_not_found_propagates() {
        let mut mock = MockRecordSource::new();
        mock.expect_fetch_all().returning(|| Ok(data()));
        mock.expect_update_status()
            .returning(|id, _| Err(WaitlistError::not_found(id)));

        let mut state = WaitlistState::new(mock);
        state.load().await.unwrap();

        let result = state.update_status(&RecordId::new("zzz"), RegistrationStatus::Onboarded).await;
        assert!(matches!(result, Err(WaitlistError::RecordNotFound { .. })));
        assert_eq!(state.store(), &data());
    }

    #[tokio::test]
    async fn test_toggle_unknown_record_is_not_found() {
        let mut mock = MockRecordSource::new();
        mock.expect_fetch_all().returning(|| Ok(data()));

        let mut state = WaitlistState::new(mock);
        state.load().await.unwrap();

        assert!(matches!(state.toggle(&RecordId::new("zzz")), Err(WaitlistError::RecordNotFound { .. })));
        let view = state.toggle(&RecordId::new("b")).unwrap();
        assert_eq!(view.selected_count, 1);
        assert!(view.page.items[1].selected);
    }
}
