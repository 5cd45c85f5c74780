//! Kind dispatch and query planning for suimon.
//!
//! The [`KindRegistry`] maps a `(category, kind)` pair to the [`Strategy`]
//! the portal expects for it; the [`Planner`] turns validated bounds into
//! the ordered [`DownloadRequest`]s that strategy calls for.
//!
//! # Example
//!
//! ```
//! use suimon_plan::{KindRegistry, Planner};
//! use suimon_types::{DataCategory, KindCode, PlanBounds, StationId};
//!
//! let strategy = KindRegistry::global()
//!     .get(DataCategory::Rain, KindCode::new(3))
//!     .unwrap();
//! let bounds = PlanBounds::years(2015, 2017).unwrap();
//! let requests = Planner::new(DataCategory::Rain, StationId::new("102011282220010"), KindCode::new(3))
//!     .plan(strategy, bounds)
//!     .unwrap();
//! assert_eq!(requests.len(), 3);
//! ```
//!
//! [`Strategy`]: suimon_types::Strategy
//! [`DownloadRequest`]: suimon_types::DownloadRequest

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dispatch;
mod planner;

pub use dispatch::{KindEntry, KindRegistry};
pub use planner::{MonthIterator, Planner};
