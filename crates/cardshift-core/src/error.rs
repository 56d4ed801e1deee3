use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A contact that cannot be written as a vCard.
    #[error("Invalid contact: {0}")]
    InvalidContact(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
