//! Data sources and the per-source post-fetch hook.

use std::fmt;
use std::str::FromStr;

use nanigans_api::types::Record;

use crate::cleanup::clean_spend;
use crate::error::NanigansError;

/// In-place transform applied to every record a source returns.
pub type RecordTransform = fn(&mut Record);

/// The data sources this crate knows how to query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Native ad placements.
    Placements,
    /// Publisher and exchange placements.
    Publishers,
}

impl DataSource {
    /// Identifier sent with every request for this source.
    pub fn identifier(&self) -> &'static str {
        match self {
            DataSource::Placements => "placements",
            DataSource::Publishers => "componentpublishers",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for DataSource {
    type Err = NanigansError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placements" | "native" => Ok(DataSource::Placements),
            "publishers" | "componentpublishers" => Ok(DataSource::Publishers),
            _ => Err(NanigansError::InvalidInput(format!(
                "unknown data source '{}'. Valid values: placements, publishers",
                s
            ))),
        }
    }
}

/// Identifier plus optional record transform for one data source.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    pub id: String,
    pub transform: Option<RecordTransform>,
}

impl SourceConfig {
    /// A source with an arbitrary identifier.
    pub fn new(id: &str, transform: Option<RecordTransform>) -> Self {
        Self {
            id: id.to_string(),
            transform,
        }
    }

    /// Placements get spend cleanup; publishers are passed through untouched.
    pub fn for_source(source: DataSource) -> Self {
        let transform: Option<RecordTransform> = match source {
            DataSource::Placements => Some(clean_spend),
            DataSource::Publishers => None,
        };
        Self::new(source.identifier(), transform)
    }

    /// Runs the transform, if any, over every record. Empty data is a no-op.
    pub fn apply(&self, records: &mut [Record]) {
        if let Some(transform) = self.transform {
            records.iter_mut().for_each(transform);
        }
    }
}

impl From<DataSource> for SourceConfig {
    fn from(source: DataSource) -> Self {
        Self::for_source(source)
    }
}
