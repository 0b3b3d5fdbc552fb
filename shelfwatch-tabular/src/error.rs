//! Schema error types.
//!
//! Every failure mode has a named variant. No stringly-typed errors.
//! Only *required* columns produce errors; optional columns that cannot be
//! located simply leave their feature unavailable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("required column '{column}' not found (accepted headers: {accepted})")]
    MissingColumn { column: String, accepted: String },

    #[error(
        "no '{column}' column found (accepted headers: {accepted}); \
         cannot restrict rows to partition '{partition}'"
    )]
    MissingPartitionColumn {
        column: String,
        accepted: String,
        partition: String,
    },
}

impl SchemaError {
    /// Error for a required field whose aliases all failed to resolve.
    pub fn missing_column(column: &str, aliases: &[&str]) -> Self {
        SchemaError::MissingColumn {
            column: column.to_string(),
            accepted: aliases.join(", "),
        }
    }

    /// Error for a partition filter whose indicator column is absent.
    pub fn missing_partition_column(column: &str, aliases: &[&str], partition: &str) -> Self {
        SchemaError::MissingPartitionColumn {
            column: column.to_string(),
            accepted: aliases.join(", "),
            partition: partition.to_string(),
        }
    }
}

/// Result type alias for schema resolution operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
