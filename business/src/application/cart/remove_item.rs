use crate::application::cart::store::CartStore;
use crate::domain::cart::model::CartUpdate;
use crate::domain::shared::value_objects::ProductId;

impl CartStore {
    /// Takes the whole line for the product out of the cart, whatever its
    /// quantity. The slot is rewritten even when the product was not in the
    /// cart; observers hear about it only when a line actually went away.
    pub async fn remove_item(&self, product_id: &ProductId) -> CartUpdate {
        self.logger
            .info(&format!("Removing from cart: {}", product_id));

        let mut cart = self.cart.lock().await;
        let removed = cart.remove(product_id);
        let persistence = self.persist(&cart).await;
        if removed {
            self.notify(&cart).await;
        }

        CartUpdate {
            cart: cart.clone(),
            persistence,
        }
    }
}
