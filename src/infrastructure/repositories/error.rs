use crate::domain::errors::DomainError;

/// Every sqlx failure is a persistence failure; constraint names are kept
/// so the log shows which check the database enforced.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.constraint() {
            Some(constraint) => {
                DomainError::Persistence(format!("database constraint violation: {constraint}"))
            }
            None => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
