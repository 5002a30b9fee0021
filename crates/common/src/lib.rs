//! Shared building blocks for the HostNetix crates: logging setup and
//! small response types used by more than one surface.

pub mod types;
pub mod utils;
