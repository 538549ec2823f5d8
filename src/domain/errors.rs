//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// Validation error with message
    Validation(String),
    /// Unique constraint or other state conflict
    Conflict(String),
    /// Database/persistence error
    Database(String),
    /// Generic internal error
    Internal(String),
}

impl DomainError {
    /// Stable, machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotFound => "not_found",
            DomainError::Validation(_) => "validation",
            DomainError::Conflict(_) => "conflict",
            DomainError::Database(_) | DomainError::Internal(_) => "internal",
        }
    }

    /// Failures the client could not have caused.
    pub fn is_server_side(&self) -> bool {
        matches!(self, DomainError::Database(_) | DomainError::Internal(_))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        // An UPDATE that matched no row: the row was removed after it was looked up
        if matches!(e, sea_orm::DbErr::RecordNotUpdated) {
            return DomainError::NotFound;
        }

        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
            _ => DomainError::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_side_failures_share_the_internal_kind() {
        assert_eq!(DomainError::Database("boom".into()).kind(), "internal");
        assert_eq!(DomainError::Internal("boom".into()).kind(), "internal");
        assert_eq!(DomainError::NotFound.kind(), "not_found");
    }

    #[test]
    fn record_not_found_is_a_database_error() {
        let err = DomainError::from(sea_orm::DbErr::RecordNotFound("aluno".into()));
        assert!(matches!(err, DomainError::Database(_)));
        assert!(err.to_string().starts_with("Database error"));
        assert!(err.is_server_side());
    }

    #[test]
    fn update_matching_no_row_is_not_found() {
        let err = DomainError::from(sea_orm::DbErr::RecordNotUpdated);
        assert!(matches!(err, DomainError::NotFound));
        assert!(!err.is_server_side());
    }
}
