use super::errors::CheckoutError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

/// One line of an order as the fulfilment endpoint expects it: which product
/// and how many units. Names and prices are resolved server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Snapshot of the cart at the moment the shopper confirms the purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub lines: Vec<OrderLine>,
    pub total_amount: u64,
}

impl OrderDraft {
    pub fn from_cart(cart: &Cart) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(Self {
            lines: cart
                .items()
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
            total_amount: cart.total_amount(),
        })
    }
}
