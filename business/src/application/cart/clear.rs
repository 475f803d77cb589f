use crate::application::cart::store::CartStore;
use crate::domain::cart::model::CartUpdate;

impl CartStore {
    /// Empties the cart and deletes the slot outright rather than writing an
    /// empty list. Safe to call on an already empty cart; observers hear
    /// about it only when there was something to drop.
    pub async fn clear(&self) -> CartUpdate {
        self.logger.info("Clearing cart");

        let mut cart = self.cart.lock().await;
        let had_items = cart.clear();
        let persistence = self.discard_slot().await;
        if had_items {
            self.notify(&cart).await;
        }

        CartUpdate {
            cart: cart.clone(),
            persistence,
        }
    }
}
