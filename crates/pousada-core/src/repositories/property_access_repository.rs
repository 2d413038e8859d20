//! Property access repository trait (port)

use async_trait::async_trait;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait PropertyAccessRepository: Send + Sync {
    /// Grants OWNER to each property's owner where no grant for that
    /// (user, property) exists yet. Returns the number of rows created.
    async fn backfill_owner_access(&self) -> Result<u64, DomainError>;
}
