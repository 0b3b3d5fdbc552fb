pub mod coerce;
pub mod error;
pub mod resolve;
pub mod table;

pub use coerce::{to_date, to_number, to_number_or_zero};
pub use error::{SchemaError, SchemaResult};
pub use resolve::{normalize_header, resolve_column, resolve_index};
pub use table::RawTable;
