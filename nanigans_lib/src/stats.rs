//! Ad-hoc stats query description and normalization.

use chrono::NaiveDate;
use nanigans_api::QueryParams;

use crate::dates::{date_range, trailing_week, DateRange};
use crate::error::NanigansError;
use crate::validation::validate_field_name;

pub const DEFAULT_METRICS: &[&str] = &["impressions", "clicks", "fbSpend"];
pub const DEFAULT_ATTRIBUTES: &[&str] = &["budgetPool", "strategyGroup", "adPlan"];

/// One field name or an ordered list of them.
///
/// A single name is the same as a one-element list; an empty list means
/// "use the defaults".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldList(Vec<String>);

impl FieldList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Validates every name, falling back to `defaults` when the list is empty.
    fn resolve(&self, defaults: &[&str]) -> Result<Vec<String>, NanigansError> {
        if self.0.is_empty() {
            return Ok(defaults.iter().map(|s| s.to_string()).collect());
        }
        self.0.iter().map(|name| validate_field_name(name)).collect()
    }
}

impl From<&str> for FieldList {
    fn from(name: &str) -> Self {
        FieldList(vec![name.to_string()])
    }
}

impl From<String> for FieldList {
    fn from(name: String) -> Self {
        FieldList(vec![name])
    }
}

impl From<Vec<String>> for FieldList {
    fn from(names: Vec<String>) -> Self {
        FieldList(names)
    }
}

impl From<Vec<&str>> for FieldList {
    fn from(names: Vec<&str>) -> Self {
        FieldList(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldList {
    fn from(names: &[&str]) -> Self {
        FieldList(names.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldList {
    fn from(names: [&str; N]) -> Self {
        FieldList(names.iter().map(|s| s.to_string()).collect())
    }
}

/// Parameters for an ad-hoc stats query, as given by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsQuery {
    pub attributes: FieldList,
    pub metrics: FieldList,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub depth: u32,
}

impl StatsQuery {
    pub fn attributes(mut self, attributes: impl Into<FieldList>) -> Self {
        self.attributes = attributes.into();
        self
    }

    pub fn metrics(mut self, metrics: impl Into<FieldList>) -> Self {
        self.metrics = metrics.into();
        self
    }

    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start(start).end(end)
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Applies defaults and validates names.
    ///
    /// If either date bound is missing, both are replaced by the trailing
    /// week relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> Result<ResolvedStats, NanigansError> {
        let attributes = self.attributes.resolve(DEFAULT_ATTRIBUTES)?;
        let metrics = self.metrics.resolve(DEFAULT_METRICS)?;
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => trailing_week(today).ok_or_else(|| {
                NanigansError::InvalidInput(format!(
                    "no trailing week before {}; pass explicit dates",
                    today
                ))
            })?,
        };
        Ok(ResolvedStats {
            attributes,
            metrics,
            start,
            end,
            depth: self.depth,
        })
    }
}

/// A stats query with every default applied. Attribute and metric lists
/// are never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStats {
    pub attributes: Vec<String>,
    pub metrics: Vec<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub depth: u32,
}

impl ResolvedStats {
    pub fn days(&self) -> DateRange {
        date_range(self.start, self.end)
    }

    /// Parameters for the request covering a single `day`.
    pub fn params_for_day(&self, day: NaiveDate) -> QueryParams {
        QueryParams::default()
            .with_metrics(&self.metrics)
            .with_attributes(&self.attributes)
            .with_date_range(day, day)
            .with_depth(self.depth)
            .with_format("json")
    }
}
