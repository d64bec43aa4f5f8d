//! Core library for the `nr` command line application.
//!
//! `nr` turns a profile's alias file into small executable shims in `~/bin`,
//! each running its package on demand through `nix run`. A run is three
//! sequential steps: the alias file is read by [`nr::shims::io::aliases`],
//! shims left by the previous run of the same profile are removed by
//! [`nr::shims::clean`], and new ones are written by [`nr::shims::generate`].
//! [`nr::shims::sync`] ties the steps together.

pub mod nr;

pub use nr::shims::{Result, ToolError, clean, error, generate, io, logging, model, sync};
