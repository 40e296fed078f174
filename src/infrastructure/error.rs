use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// The store could not be reached or the connection broke.
    #[error("Database Connection Error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The store rejected the statement.
    #[error("Database Query Error: {0}")]
    Query(#[source] sqlx::Error),

    /// Rows came back but did not fit the row type.
    #[error("Unexpected Query Result: {0}")]
    Decode(#[source] sqlx::Error),

    #[error("Failed to load dashboard configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<sqlx::Error> for DashboardError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::Decode(_) => DashboardError::Decode(error),
            sqlx::Error::Database(_)
            | sqlx::Error::RowNotFound
            | sqlx::Error::InvalidArgument(_)
            | sqlx::Error::Encode(_) => DashboardError::Query(error),
            _ => DashboardError::Connection(error),
        }
    }
}
