use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid price: {0}")]
    InvalidPrice(f64),
    #[error("division by zero while inverting price")]
    DivisionByZero,
    #[error("token balance for account index {account_index} mint {mint} has no owner")]
    MissingOwner { account_index: usize, mint: String },
    #[error("invalid sqrtPriceX96 value: {0}")]
    InvalidSqrtPrice(String),
    #[error("failed to decode block: {0}")]
    InvalidBlock(String),
}
