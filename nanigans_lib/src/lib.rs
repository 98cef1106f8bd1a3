//! Library layer for the Nanigans reporting API: one client per data source,
//! day-by-day ad-hoc stats with fail-fast aggregation, and record cleanup.
//!
//! Wraps the `nanigans_api` crate, which owns the wire format.

pub mod aggregate;
pub mod cleanup;
pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod source;
pub mod stats;
pub mod validation;

pub use nanigans_api;
pub use nanigans_api::types;
pub use nanigans_api::types::{Record, Response, ResponseError};

pub use aggregate::aggregate;
pub use client::SourceClient;
pub use config::Config;
pub use dates::{date_range, trailing_week, DateRange};
pub use error::NanigansError;
pub use source::{DataSource, RecordTransform, SourceConfig};
pub use stats::{FieldList, ResolvedStats, StatsQuery};
