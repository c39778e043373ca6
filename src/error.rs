use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("invalid symbol '{symbol}' at position {index}: expected '0' or '1'")]
    InvalidSymbol { index: usize, symbol: char },
}
