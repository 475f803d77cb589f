use async_trait::async_trait;

use super::errors::OrderGatewayError;
use super::model::OrderDraft;

/// Port for the order fulfilment endpoint. The endpoint itself is outside
/// this system; the port only promises to accept or refuse a draft.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, draft: &OrderDraft) -> Result<(), OrderGatewayError>;
}
