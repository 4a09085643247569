//! Service trait definitions for dependency injection
//!
//! Record loading and status updates go through this trait so the table
//! state can be tested against mocks.

use async_trait::async_trait;
use shared::{Record, RecordId, RegistrationStatus, WaitlistData};

use crate::error::WaitlistResult;

/// Source of waitlist records
#[mockall::automock]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch both record collections
    async fn fetch_all(&self) -> WaitlistResult<WaitlistData>;

    /// Replace the status of the record with the given id
    ///
    /// # Returns
    /// The updated record, or `RecordNotFound` when no record carries `id`
    async fn update_status(&self, id: &RecordId, status: RegistrationStatus) -> WaitlistResult<Record>;
}
