use thiserror::Error;

use super::statements::Statement;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("Query `{statement}` failed: {source}")]
    Query {
        statement: Statement,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Classifies an error raised while `statement` was running. Transport
    /// and pool failures still count as connection failures.
    pub fn from_query(statement: Statement, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(err),
            other => StoreError::Query {
                statement,
                source: other,
            },
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_connection_errors() {
        let err = StoreError::from_query(Statement::Users, sqlx::Error::PoolTimedOut);
        assert!(err.is_connection());

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = StoreError::from_query(Statement::Violations, sqlx::Error::Io(io));
        assert!(err.is_connection());
    }

    #[test]
    fn test_other_errors_name_the_statement() {
        let err = StoreError::from_query(
            Statement::ViolationHistory,
            sqlx::Error::ColumnNotFound("fine".to_string()),
        );
        assert!(!err.is_connection());
        assert!(err.to_string().contains("violation_history"));
    }
}
