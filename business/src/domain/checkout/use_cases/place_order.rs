use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::OrderDraft;

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    /// Submits the current cart as an order. On success the cart is emptied;
    /// on failure it is left untouched so the shopper can retry.
    async fn execute(&self) -> Result<OrderDraft, CheckoutError>;
}
