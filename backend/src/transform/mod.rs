//! Transformation module.
//!
//! This module handles CSV to JSON transformation:
//! - Mapper: Table rows to JSON objects keyed by the header
//! - Pipeline: Validate, parse, map and serialize in one call

pub mod mapper;
pub mod pipeline;

pub use mapper::{count_short_rows, table_to_json, table_to_records};
pub use pipeline::*;
