//! One client per data source, sharing all query logic.

use chrono::{Local, NaiveDate};
use nanigans_api::types::Response;
use nanigans_api::{Client, Operation, PreparedRequest, QueryParams, RequiredFields};

use crate::error::NanigansError;
use crate::source::{DataSource, SourceConfig};
use crate::stats::StatsQuery;
use crate::validation::validate_view_id;

/// API client bound to one data source.
///
/// Transport and API failures are never returned as `Err`: they are embedded
/// in the returned [`Response`], so callers must check
/// [`Response::is_error`] before trusting a result. `Err` is reserved for
/// input rejected before any request is sent.
pub struct SourceClient {
    inner: Client,
    source: SourceConfig,
}

impl SourceClient {
    pub fn new(inner: Client, source: impl Into<SourceConfig>) -> Self {
        Self {
            inner,
            source: source.into(),
        }
    }

    /// Native placements, with spend cleanup.
    pub fn placements(inner: Client) -> Self {
        Self::new(inner, DataSource::Placements)
    }

    /// Publisher/exchange placements.
    pub fn publishers(inner: Client) -> Self {
        Self::new(inner, DataSource::Publishers)
    }

    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    fn fields(&self) -> RequiredFields {
        RequiredFields::new(&self.source.id)
    }

    async fn send(&self, request: PreparedRequest) -> Response {
        tracing::debug!(
            "{} request for source {}",
            request.operation,
            self.source.id
        );
        match self.inner.send(&request).await {
            Ok(resp) => resp,
            Err(e) => Response::from_error(&e),
        }
    }

    /// Built-in time ranges for this source.
    pub async fn get_timeranges(&self) -> Response {
        self.send(PreparedRequest::new(Operation::TimeRanges, self.fields()))
            .await
    }

    /// All attributes (dimensions) available for this source.
    pub async fn get_attributes(&self) -> Response {
        self.send(PreparedRequest::new(Operation::Attributes, self.fields()))
            .await
    }

    /// All metrics available for this source.
    pub async fn get_metrics(&self) -> Response {
        self.send(PreparedRequest::new(Operation::Metrics, self.fields()))
            .await
    }

    /// Data for a view saved in the Nanigans interface.
    pub async fn get_view(&self, view: &str, depth: u32) -> Result<Response, NanigansError> {
        let view = validate_view_id(view)?;
        let request = PreparedRequest::new(Operation::View, self.fields().with_view(&view))
            .with_params(QueryParams::default().with_depth(depth).with_format("json"));
        let mut resp = self.send(request).await;
        self.source.apply(&mut resp.data);
        Ok(resp)
    }

    /// Ad-hoc stats, relative to the local calendar date.
    pub async fn get_stats(&self, query: &StatsQuery) -> Result<Response, NanigansError> {
        self.get_stats_as_of(query, Local::now().date_naive()).await
    }

    /// Ad-hoc stats with `today` pinned, which decides the default window.
    ///
    /// Issues one request per day, in order, and stops after the first day
    /// that leaves the aggregate in error. The partial aggregate, including
    /// the failing day's records, is returned.
    pub async fn get_stats_as_of(
        &self,
        query: &StatsQuery,
        today: NaiveDate,
    ) -> Result<Response, NanigansError> {
        let resolved = query.resolve(today)?;
        let days = resolved.days();
        let total = days.len();
        if total == 0 {
            tracing::warn!(
                "Empty date range {} to {}, no requests sent",
                resolved.start,
                resolved.end
            );
        }

        let mut response = Response::empty();
        for (i, day) in days.enumerate() {
            let request = PreparedRequest::new(Operation::Adhoc, self.fields())
                .with_params(resolved.params_for_day(day));
            let mut day_resp = self.send(request).await;
            self.source.apply(&mut day_resp.data);
            response = response.combine(day_resp);

            if response.is_error() {
                tracing::warn!(
                    "Stopping {} stats at {} (day {}/{}): {}",
                    self.source.id,
                    day,
                    i + 1,
                    total,
                    response
                        .errors
                        .last()
                        .map(|e| e.message.as_str())
                        .unwrap_or("unknown error")
                );
                break;
            }
        }
        Ok(response)
    }
}
