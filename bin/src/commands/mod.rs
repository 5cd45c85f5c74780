//! CLI command implementations.

pub(crate) mod download;
pub(crate) mod info;
pub(crate) mod kinds;
pub(crate) mod resolve;
