//! Shelf Client - typed access to the remote file service
//!
//! One method per endpoint, one round trip per call. Responses arrive
//! in the uniform success envelope and are validated before anything
//! is handed back; every failure carries the most specific message the
//! server or the transport produced.

mod client;
mod error;

pub use client::{FsClient, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};

pub use shelf_types as types;
