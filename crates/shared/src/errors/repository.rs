use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),
}

// Constraint failures carry the semantics here; everything else stays a
// plain database error.
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return RepositoryError::NotFound;
        }

        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return RepositoryError::AlreadyExists(db_err.message().to_string());
                }
                ErrorKind::ForeignKeyViolation => {
                    return RepositoryError::ForeignKey(db_err.message().to_string());
                }
                _ => {}
            }
        }

        RepositoryError::Sqlx(err)
    }
}
