//! Portal client and page parsing for the suimon hydrological data downloader.
//!
//! This crate talks to the river portal's CGI endpoints:
//!
//! - [`url`] - Detail, query, download and site-info URLs
//! - [`PortalClient`] - HTTP client with request and connect timeouts
//! - [`decode_page`], [`normalize_payload`] - Legacy Japanese encodings
//! - [`parse`] - Header, availability grid, identity row and token extraction
//! - [`StationSession`] - Memoized per-station accessors and range validation
//! - [`plan_stream`] - Sequential execution of planned requests
//! - [`resolve_kind`] - Category and kind lookup from the site-info page
//!
//! The `test-util` feature adds `testing::FakePortal`, a local server that
//! answers like the portal.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod decode;
mod exchange;
pub mod parse;
mod resolve;
mod session;
mod stream;
pub mod url;

#[cfg(feature = "test-util")]
pub mod testing;

pub use client::{ClientConfig, FetchError, PortalClient};
pub use decode::{decode_page, normalize_payload};
pub use resolve::{KindResolution, resolve_kind};
pub use session::{DetailSnapshot, StationSession};
pub use stream::{StepOutcome, StepResult, plan_stream};
