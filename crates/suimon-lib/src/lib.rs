//! Rust library for downloading hydrological records from the Japanese
//! river portal (`www1.river.go.jp`).
//!
//! This is a facade crate that re-exports functionality from the suimon
//! workspace crates for convenient access, and adds [`DownloadPipeline`],
//! which runs a whole download from user-entered bounds to written files.
//!
//! # Quick Start
//!
//! ```ignore
//! use suimon_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = DownloadPipeline::new(PortalClient::with_defaults()?, Materializer::default());
//!
//!     let plan = pipeline
//!         .prepare(DataCategory::Rain, StationId::new("102011282220010"), KindCode::new(3), "2015", "2019")
//!         .await?;
//!     let summary = pipeline.execute(plan, |step| println!("{step}")).await;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "fetch", feature = "store"))]
mod pipeline;

// Re-export core types
pub use suimon_types::*;

// Re-export dispatch and planning
pub use suimon_plan::{KindEntry, KindRegistry, MonthIterator, Planner};

// Re-export portal access
#[cfg(feature = "fetch")]
pub use suimon_fetch::{
    ClientConfig, DetailSnapshot, FetchError, KindResolution, PortalClient, StationSession,
    StepOutcome, StepResult, decode_page, normalize_payload, parse, plan_stream, resolve_kind,
    url,
};

// Re-export file placement
#[cfg(feature = "store")]
pub use suimon_store::{Materializer, StoreError};

#[cfg(all(feature = "fetch", feature = "store"))]
pub use pipeline::{DownloadPipeline, PlanSummary, PreparedPlan, StepReport, StepStatus};

/// Prelude module for convenient imports.
///
/// ```
/// use suimon_lib::prelude::*;
/// ```
pub mod prelude {
    pub use suimon_types::{
        AvailabilityRecord, DataCategory, DownloadRequest, FileNaming, InputError, KindCode,
        PlanBounds, Presence, RequestSpan, Result, StationId, StationIdentity, Strategy,
        SuimonError, YearMonth,
    };

    pub use suimon_plan::{KindRegistry, Planner};

    #[cfg(feature = "fetch")]
    pub use suimon_fetch::{ClientConfig, PortalClient, StationSession, resolve_kind};

    #[cfg(feature = "store")]
    pub use suimon_store::Materializer;

    #[cfg(all(feature = "fetch", feature = "store"))]
    pub use crate::pipeline::{DownloadPipeline, PlanSummary, StepReport, StepStatus};
}
