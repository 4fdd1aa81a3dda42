//! SeedMedia CLI library.
//!
//! This crate provides the `basic` and `enhanced` generation runs used by
//! the `seedmedia` binary, plus the report types they produce.

pub mod commands;
pub mod layout;
pub mod report;
