pub mod aggregate;
pub mod doh;
pub mod error;
pub mod expiry;
pub mod kpi;
pub mod loader;
pub mod pipelines;
pub mod room_filter;
pub mod schema;
pub mod scoring;
pub mod status;
pub mod types;
pub mod velocity;

pub use doh::{days_of_supply, UNKNOWN_DAYS_OF_SUPPLY};
pub use error::{LoadError, LoadResult};
pub use pipelines::buyer_view::{classify_inventory, BuyerView, BuyerViewPipeline, PipelineConfig};
pub use types::{DiscountBand, ItemStatus, ItemSummary, SlowMoverAction};
