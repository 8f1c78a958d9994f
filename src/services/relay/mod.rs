pub mod google_forms;

use async_trait::async_trait;

use crate::errors::TransportError;
use crate::services::mapping::ExternalPayload;

/// Hands a lead to the outside collector.
///
/// `Ok(())` only means the request went out and something answered. The
/// collector's verdict is not observable, so there is no richer success type.
#[async_trait]
pub trait LeadRelay: Send + Sync {
    async fn submit(&self, payload: &ExternalPayload) -> Result<(), TransportError>;
}
