//! Shared application state handed to every handler

use std::sync::Arc;
use tokio::sync::Mutex;

use shared::{Component, DashboardConfig, Record, RecordId, RegistrationStatus, logging};
use waitlist::{LoadState, RecordSource, WaitlistResult, WaitlistState};

use crate::traits::MetricsSource;

/// Handler state: the waitlist session, the metrics source and the header config
///
/// The process serves one waitlist session; every client sees the same
/// filters, page and selection.
pub struct AppState<R: RecordSource, M: MetricsSource> {
    pub waitlist: Arc<Mutex<WaitlistState<R>>>,
    pub metrics: Arc<M>,
    pub config: Arc<DashboardConfig>,
}

impl<R: RecordSource, M: MetricsSource> Clone for AppState<R, M> {
    fn clone(&self) -> Self {
        Self {
            waitlist: Arc::clone(&self.waitlist),
            metrics: Arc::clone(&self.metrics),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R: RecordSource, M: MetricsSource> AppState<R, M> {
    pub fn new(waitlist: WaitlistState<R>, metrics: M, config: DashboardConfig) -> Self {
        Self {
            waitlist: Arc::new(Mutex::new(waitlist)),
            metrics: Arc::new(metrics),
            config: Arc::new(config),
        }
    }

    /// Populate the waitlist store; failures are kept in the load state
    ///
    /// The session lock is released while the source is fetching, so table
    /// requests answer `NotLoaded` instead of queueing behind the load.
    pub async fn load_waitlist(&self) -> LoadState {
        let source = {
            let mut waitlist = self.waitlist.lock().await;
            waitlist.begin_load();
            Arc::clone(waitlist.source())
        };

        let result = source.fetch_all().await;

        let mut waitlist = self.waitlist.lock().await;
        if let Err(e) = waitlist.install(result) {
            logging::log_error(Component::Waitlist, "Waitlist load", &e);
        }
        waitlist.load_state().clone()
    }

    /// Update a record's status through the source, outside the session lock
    pub async fn update_status(&self, id: &RecordId, status: RegistrationStatus) -> WaitlistResult<Record> {
        let source = {
            let waitlist = self.waitlist.lock().await;
            waitlist.ensure_ready()?;
            Arc::clone(waitlist.source())
        };

        let updated = source.update_status(id, status).await?;
        self.waitlist.lock().await.merge(&updated);
        Ok(updated)
    }
}
