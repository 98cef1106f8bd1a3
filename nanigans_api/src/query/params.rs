//! Optional query parameters shared by the view and ad-hoc endpoints.

use chrono::NaiveDate;
use url::Url;

/// Query-string parameters for a request. Every field is optional; only the
/// ones that are set end up on the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Metric names, sent as repeated `metrics[]` pairs in this order.
    pub metrics: Vec<String>,
    /// Attribute (dimension) names, sent as repeated `attributes[]` pairs.
    pub attributes: Vec<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Levels of dimensional breakdown.
    pub depth: Option<u32>,
    /// Response format. The API only speaks `json`.
    pub format: Option<String>,
}

impl QueryParams {
    pub fn with_metric(mut self, metric: &str) -> Self {
        self.metrics.push(metric.to_string());
        self
    }
    pub fn with_metrics(mut self, metrics: &[String]) -> Self {
        self.metrics.extend_from_slice(metrics);
        self
    }
    pub fn with_attribute(mut self, attribute: &str) -> Self {
        self.attributes.push(attribute.to_string());
        self
    }
    pub fn with_attributes(mut self, attributes: &[String]) -> Self {
        self.attributes.extend_from_slice(attributes);
        self
    }

    /// Restricts the query to `[start, end]`. Single-day queries pass the same date twice.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Appends the parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for metric in self.metrics.iter() {
            url.query_pairs_mut().append_pair("metrics[]", metric);
        }
        for attribute in self.attributes.iter() {
            url.query_pairs_mut().append_pair("attributes[]", attribute);
        }
        if let Some(start) = self.start {
            url.query_pairs_mut()
                .append_pair("start", &start.format("%Y-%m-%d").to_string());
        }
        if let Some(end) = self.end {
            url.query_pairs_mut()
                .append_pair("end", &end.format("%Y-%m-%d").to_string());
        }
        if let Some(depth) = self.depth {
            url.query_pairs_mut()
                .append_pair("depth", &depth.to_string());
        }
        if let Some(format) = &self.format {
            url.query_pairs_mut().append_pair("format", format);
        }
        url
    }
}
