use super::model::Cart;

/// Port for parties that want to re-render when the cart changes, such as a
/// header badge or a cart page. Callbacks run synchronously on the store's
/// task while the operation still holds the cart lock, so implementations
/// must return quickly and must not call back into the store.
pub trait CartObserver: Send + Sync {
    fn cart_changed(&self, cart: &Cart);
}
