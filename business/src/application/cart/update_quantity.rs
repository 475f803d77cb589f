use crate::application::cart::store::CartStore;
use crate::domain::cart::model::{CartUpdate, PersistenceStatus};
use crate::domain::shared::value_objects::ProductId;

impl CartStore {
    /// Sets the quantity of a line that is already in the cart. Requests
    /// below one are clamped to one; removal goes through `remove_item`,
    /// never through a zero here. A product that is not in the cart leaves
    /// everything untouched, including the slot.
    pub async fn update_quantity(&self, product_id: &ProductId, quantity: i64) -> CartUpdate {
        self.logger.info(&format!(
            "Updating cart quantity: {} -> {}",
            product_id, quantity
        ));

        let mut cart = self.cart.lock().await;
        if !cart.set_quantity(product_id, quantity) {
            self.logger
                .debug(&format!("Product not in cart, nothing updated: {}", product_id));
            return CartUpdate {
                cart: cart.clone(),
                persistence: PersistenceStatus::Synced,
            };
        }

        let persistence = self.persist(&cart).await;
        self.notify(&cart).await;

        CartUpdate {
            cart: cart.clone(),
            persistence,
        }
    }
}
