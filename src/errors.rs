use sea_orm::error::DbErr;
use validator::ValidationErrors;

/// Category of a rejected field, derived from the validator error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationKind {
    /// A required field was empty.
    Missing,
    /// A text field exceeded its maximum length.
    TooLong,
    /// A URL or e-mail field was malformed.
    InvalidFormat,
    /// A decimal had too many digits for its column.
    PrecisionExceeded,
}

impl ValidationKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "required" => Some(Self::Missing),
            "length" => Some(Self::TooLong),
            "url" | "email" => Some(Self::InvalidFormat),
            "cost_precision" => Some(Self::PrecisionExceeded),
            _ => None,
        }
    }
}

/// Flattens validator output into `(field, kind)` pairs.
///
/// Codes outside the known taxonomy are skipped.
pub fn validation_kinds(errors: &ValidationErrors) -> Vec<(&'static str, ValidationKind)> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .filter_map(move |e| ValidationKind::from_code(&e.code).map(|kind| (field, kind)))
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl ServiceError {
    /// Convenience constructor for a missing record of the given kind.
    pub fn not_found(what: &str, id: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("{} {} not found", what, id))
    }

    /// Field-level rejection categories, empty unless this is a validation error.
    pub fn validation_kinds(&self) -> Vec<(&'static str, ValidationKind)> {
        match self {
            Self::ValidationError(errors) => validation_kinds(errors),
            _ => Vec::new(),
        }
    }

    /// True when the caller supplied bad input rather than the system failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::ValidationError(_))
    }
}
