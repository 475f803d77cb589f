#[derive(Debug, thiserror::Error)]
pub enum OrderGatewayError {
    #[error("order_gateway.unavailable")]
    Unavailable,
    #[error("order_gateway.rejected")]
    Rejected,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.gateway")]
    Gateway(#[from] OrderGatewayError),
}
