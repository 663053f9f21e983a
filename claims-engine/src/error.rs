use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("Invalid claim amount: {0:?}")]
    InvalidAmount(String),

    #[error("Unrecognized {field}: {value:?}")]
    UnrecognizedValue { field: &'static str, value: String },
}

pub type ClaimsResult<T> = Result<T, ClaimsError>;
