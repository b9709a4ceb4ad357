use async_graphql::ErrorExtensions;
use hub_core::{serde_json, uuid::Uuid};
use poem::{error::ResponseError, http::StatusCode};

use crate::store::StoreError;

/// Every way a single resolver invocation can fail. Nothing is recovered
/// locally; the invoking runtime turns these into client-facing errors.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// The arguments did not match the shape expected by the operation.
    #[error(transparent)]
    MalformedInput(#[from] serde_json::Error),
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("record not found: no customer with id {0}")]
    NotFound(Uuid),
    #[error("handler error: type {0} is unknown")]
    UnknownType(String),
    #[error("handler error: field name {field} is unknown on {parent}")]
    UnknownField {
        parent: &'static str,
        field: String,
    },
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl ResolverError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Machine readable code attached to GraphQL errors.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_)
            | Self::Validation { .. }
            | Self::UnknownType(_)
            | Self::UnknownField { .. } => "BAD_USER_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Persistence(StoreError::ConstraintViolation(_)) => "CONFLICT",
            Self::Persistence(StoreError::Database(_)) => "INTERNAL",
        }
    }
}

impl ResponseError for ResolverError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_)
            | Self::Validation { .. }
            | Self::UnknownType(_)
            | Self::UnknownField { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(StoreError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Persistence(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
