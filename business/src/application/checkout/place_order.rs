use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::gateway::OrderGateway;
use crate::domain::checkout::model::OrderDraft;
use crate::domain::checkout::use_cases::place_order::PlaceOrderUseCase;
use crate::domain::logger::Logger;

pub struct PlaceOrderUseCaseImpl {
    pub store: Arc<CartStore>,
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self) -> Result<OrderDraft, CheckoutError> {
        self.logger.info("Placing order from cart");

        let cart = self.store.cart().await;
        let draft = OrderDraft::from_cart(&cart)?;
        self.gateway.submit(&draft).await?;
        self.store.clear().await;

        self.logger.info(&format!(
            "Order placed: {} lines, total {}",
            draft.lines.len(),
            draft.total_amount
        ));
        Ok(draft)
    }
}
