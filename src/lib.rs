//! Shipping Quote Engine
//!
//! This crate estimates the cost of shipping a parcel between two US ZIP
//! codes from its weight, dimensions, service mode and the current fuel and
//! regional surcharges.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
