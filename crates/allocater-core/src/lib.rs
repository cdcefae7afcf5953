//! # Allocater Core
//!
//! Decomposes asset values into class-level exposure using per-asset
//! allocation ratios.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O; loaders hand over records, serializers
//!   receive [`AssetSet`]s
//! - **Validated construction**: an [`Allocation`] checks its ratios once,
//!   when it is built
//! - **Structured diagnostics**: non-fatal conditions are collected as
//!   [`Warning`]s and mirrored to `tracing`
//!
//! ## Quick Start
//!
//! ```rust
//! use allocater_core::prelude::*;
//!
//! let assets = AssetSet::from_records(
//!     [
//!         AssetRecord::new("All-Country", 120_000.0).with_principal(100_000.0),
//!         AssetRecord::new("S&P500", 60_000.0).with_principal(50_000.0),
//!     ],
//!     None,
//! );
//!
//! let mut diagnostics = Diagnostics::new();
//! let allocations = AllocationSet::from_records_with_diagnostics(
//!     [
//!         AllocationRecord::new("All-Country", "US", 0.7),
//!         AllocationRecord::new("All-Country", "Emerging", 0.3),
//!         AllocationRecord::new("S&P500", "US", 1.0),
//!     ],
//!     &mut diagnostics,
//! )?;
//!
//! let by_class = aggregate_with_diagnostics(&allocations, &assets, &mut diagnostics);
//! assert!((by_class.get("US") - 144_000.0).abs() < 1e-9);
//! assert!(diagnostics.is_empty());
//! # Ok::<(), AllocError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`types`] - Allocation, AllocationSet, AssetSet, records, config
//! - [`aggregation`] - Aggregation, batch aggregation, exposure summary
//! - [`diagnostics`] - Warning records and their collector
//! - [`error`] - Hard failures
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel batch aggregation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregation;
pub mod diagnostics;
pub mod error;
pub mod types;

pub use error::{AllocError, AllocResult};

pub use diagnostics::{Diagnostics, Warning};

pub use types::{
    AggregationConfig, Allocation, AllocationRecord, AllocationSet, AssetRecord, AssetSet,
    RATIO_TOLERANCE, UNDEFINED_CLASS,
};

pub use aggregation::{
    aggregate, aggregate_batch, aggregate_with_diagnostics, exposures, maybe_parallel_map,
    ClassExposure, ExposureSummary,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use allocater_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregation::{
        aggregate, aggregate_batch, aggregate_with_diagnostics, exposures, ClassExposure,
        ExposureSummary,
    };
    pub use crate::diagnostics::{Diagnostics, Warning};
    pub use crate::error::{AllocError, AllocResult};
    pub use crate::types::{
        AggregationConfig, Allocation, AllocationRecord, AllocationSet, AssetRecord, AssetSet,
        UNDEFINED_CLASS,
    };
}
