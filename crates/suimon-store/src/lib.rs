//! File placement for the suimon hydrological data downloader.
//!
//! [`Materializer`] names and writes each payload so that repeated runs
//! overwrite the same file and different stations never share a directory.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod materializer;

pub use materializer::{DEFAULT_ROOT, EXTENSION, Materializer, StoreError};
