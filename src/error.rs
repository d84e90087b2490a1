use async_graphql::{Context, ErrorExtensions};
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Failure of a single store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("Record already exists: {0}")]
    Conflict(String),
    #[error("Referenced record does not exist: {0}")]
    MissingReference(String),
    #[error("Constraint violated: {0}")]
    Constraint(String),
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Machine readable code placed in the GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "NOT_FOUND",
            StoreError::Conflict(_) => "CONFLICT",
            StoreError::MissingReference(_) => "MISSING_REFERENCE",
            StoreError::Constraint(_) => "CONSTRAINT",
            StoreError::Database(_) | StoreError::Migrate(_) => "INTERNAL",
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let classified = match &err {
            sqlx::Error::Database(db_err) => Some((db_err.kind(), db_err.message().to_owned())),
            _ => None,
        };
        match classified {
            Some((ErrorKind::UniqueViolation, msg)) => StoreError::Conflict(msg),
            Some((ErrorKind::ForeignKeyViolation, msg)) => StoreError::MissingReference(msg),
            Some((ErrorKind::NotNullViolation | ErrorKind::CheckViolation, msg)) => {
                StoreError::Constraint(msg)
            }
            _ => StoreError::Database(err),
        }
    }
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code().to_string()))
    }
}

/// Collapses a store outcome into the boolean some mutations answer with.
/// The failure reason is logged rather than returned.
pub trait IntoFlag {
    fn into_flag(self, action: &str) -> bool;
}

impl<T> IntoFlag for Result<T, StoreError> {
    fn into_flag(self, action: &str) -> bool {
        match self {
            Ok(_) => true,
            Err(err) => {
                log::warn!("{action} failed: {err}");
                false
            }
        }
    }
}

/// Turns a failed store call into a `null` field plus an entry in the
/// response errors, leaving sibling fields to resolve normally.
pub trait OrNull<T> {
    fn or_null(self, ctx: &Context<'_>) -> Option<T>;
}

impl<T> OrNull<T> for Result<T, StoreError> {
    fn or_null(self, ctx: &Context<'_>) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let error = err.extend().into_server_error(ctx.item.pos);
                ctx.add_error(ctx.set_error_path(error));
                None
            }
        }
    }
}
