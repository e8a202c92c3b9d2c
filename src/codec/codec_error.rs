use thiserror::Error;

use crate::expr::CompositeType;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The bytes are not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Float literal with no JSON representation (infinite).
    #[error("unrepresentable literal: {0}")]
    UnrepresentableLiteral(f64),

    /// Valid JSON whose shape is not a criteria record.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("invalid expression type: {0}")]
    InvalidExpressionType(String),

    #[error("invalid operator: {0}")]
    InvalidOperator(String),

    #[error("invalid ordering direction: {0}")]
    InvalidDirection(String),

    #[error("null expression at position {index} of a composite")]
    NullChild { index: usize },

    #[error("{0} composite has no expressions")]
    EmptyComposite(CompositeType),
}

impl CodecError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        CodecError::MalformedRecord(message.into())
    }

    /// True for wire-level failures in either direction: bytes or records that
    /// cannot be decoded, and literals that cannot be encoded. Tree-level errors
    /// (`InvalidExpressionType`, `NullChild`, `EmptyComposite`) are excluded.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            CodecError::Decode(_)
                | CodecError::Encode(_)
                | CodecError::UnrepresentableLiteral(_)
                | CodecError::MalformedRecord(_)
                | CodecError::InvalidOperator(_)
                | CodecError::InvalidDirection(_)
        )
    }
}
