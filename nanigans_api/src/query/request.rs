//! Request description: which endpoint, which data source, which parameters.

use std::fmt;

use crate::{Error, QueryParams};

/// Logical API operation. Each maps to one endpoint under
/// `/sites/{site}/datasources/{source}/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    TimeRanges,
    Attributes,
    Metrics,
    View,
    Adhoc,
}

impl Operation {
    /// The logical operation name (`timeranges`, `attributes`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Operation::TimeRanges => "timeranges",
            Operation::Attributes => "attributes",
            Operation::Metrics => "metrics",
            Operation::View => "view",
            Operation::Adhoc => "adhoc",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields that identify the resource rather than filter it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredFields {
    /// Data-source identifier, e.g. `placements`.
    pub source: String,
    /// Saved view id. Only the `view` operation reads it.
    pub view: Option<String>,
}

impl RequiredFields {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            view: None,
        }
    }

    pub fn with_view(mut self, view: &str) -> Self {
        self.view = Some(view.to_string());
        self
    }
}

/// A fully described request, ready to hand to [`crate::Client::send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub operation: Operation,
    pub fields: RequiredFields,
    pub params: Option<QueryParams>,
}

impl PreparedRequest {
    pub fn new(operation: Operation, fields: RequiredFields) -> Self {
        Self {
            operation,
            fields,
            params: None,
        }
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Path segments below the API root for the given site.
    pub fn path_segments<'a>(&'a self, site: &'a str) -> Result<Vec<&'a str>, Error> {
        let mut segments = vec!["sites", site, "datasources", self.fields.source.as_str()];
        match self.operation {
            Operation::TimeRanges => segments.push("timeRanges"),
            Operation::Attributes => segments.push("attributes"),
            Operation::Metrics => segments.push("metrics"),
            Operation::View => {
                let view = self
                    .fields
                    .view
                    .as_deref()
                    .ok_or(Error::MissingField("view"))?;
                segments.extend(["views", view]);
            }
            Operation::Adhoc => segments.extend(["views", "adhoc"]),
        }
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_paths() {
        let req = PreparedRequest::new(Operation::TimeRanges, RequiredFields::new("placements"));
        assert_eq!(
            req.path_segments("123").unwrap(),
            vec!["sites", "123", "datasources", "placements", "timeRanges"]
        );

        let req = PreparedRequest::new(
            Operation::Metrics,
            RequiredFields::new("componentpublishers"),
        );
        assert_eq!(
            req.path_segments("9").unwrap().join("/"),
            "sites/9/datasources/componentpublishers/metrics"
        );
    }

    #[test]
    fn view_path_uses_view_id() {
        let req = PreparedRequest::new(
            Operation::View,
            RequiredFields::new("placements").with_view("4242"),
        );
        assert_eq!(
            req.path_segments("1").unwrap().join("/"),
            "sites/1/datasources/placements/views/4242"
        );
    }

    #[test]
    fn view_without_id_is_an_error() {
        let req = PreparedRequest::new(Operation::View, RequiredFields::new("placements"));
        assert!(matches!(
            req.path_segments("1"),
            Err(Error::MissingField("view"))
        ));
    }

    #[test]
    fn adhoc_path() {
        let req = PreparedRequest::new(Operation::Adhoc, RequiredFields::new("placements"));
        assert_eq!(
            req.path_segments("1").unwrap().join("/"),
            "sites/1/datasources/placements/views/adhoc"
        );
        assert_eq!(req.operation.to_string(), "adhoc");
    }
}
