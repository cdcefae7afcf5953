//! Core types: allocations, asset sets, input records and configuration.

mod allocation;
mod allocation_set;
mod asset_set;
mod config;
mod record;

pub use allocation::{Allocation, RATIO_TOLERANCE, UNDEFINED_CLASS};
pub use allocation_set::AllocationSet;
pub use asset_set::AssetSet;
pub use config::AggregationConfig;
pub use record::{AllocationRecord, AssetRecord};
