//! Aggregation of assets into class-level exposure.
//!
//! - **Aggregate**: combine an [`AllocationSet`](crate::AllocationSet) with an
//!   [`AssetSet`](crate::AssetSet) into a class-level `AssetSet`
//! - **Batch**: aggregate many independent pairs, optionally in parallel
//! - **Exposure**: per-class value, principal, gain and weight
//!
//! All functions are pure - they take inputs by reference and return new
//! values.

mod aggregate;
mod batch;
mod exposure;

pub use aggregate::*;
pub use batch::*;
pub use exposure::*;
