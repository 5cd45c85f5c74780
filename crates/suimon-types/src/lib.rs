//! Core types for the suimon hydrological data downloader.
//!
//! This crate provides the data structures shared by every suimon crate:
//!
//! - [`StationId`], [`KindCode`] - Portal addressing of a station and data kind
//! - [`DataCategory`] - The portal's data families (rainfall, water level, ...)
//! - [`StationIdentity`] - Water system, river and station names
//! - [`AvailabilityRecord`] - Per-year data presence from the decade grid
//! - [`Strategy`] - How a kind decomposes a date range into queries
//! - [`PlanBounds`], [`YearMonth`] - Validated user-entered ranges
//! - [`DownloadRequest`] - One planned query against the portal

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod availability;
mod category;
mod error;
mod period;
mod request;
mod station;
mod strategy;

pub use availability::{AvailabilityRecord, DecadeRow, Presence, YearAvailability};
pub use category::DataCategory;
pub use error::{InputError, Result, SuimonError};
pub use period::{PlanBounds, YearMonth};
pub use request::{DownloadRequest, DownloadToken, RequestSpan, WireDate};
pub use station::{KindCode, StationId, StationIdentity, UNKNOWN};
pub use strategy::{Axis, EndDatePolicy, FileNaming, Strategy};
