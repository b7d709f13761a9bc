//! Even money splitting with exact reconciliation
//!
//! This crate divides a monetary amount evenly among a number of recipients
//! and then redistributes the rounding drift one minimal unit at a time,
//! round-robin, so the shares sum back to the original total exactly.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
