use crate::token::Token;

/// Raised by a printer handler that meets a node it cannot render, e.g. a
/// unary expression whose operator token is `*`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{token} {message}")]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self {
            token: token.clone(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
