use serde::{Deserialize, Serialize};

use crate::Error;

/// One result row: field name to value, in the order the API sent them.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// An error reported for a request, either by the API itself or by the
/// transport underneath it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawError")]
pub struct ResponseError {
    pub message: String,
    pub status: Option<u16>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawError {
    Text(String),
    Detailed {
        #[serde(alias = "error")]
        message: String,
        #[serde(default)]
        status: Option<u16>,
    },
    Other(serde_json::Value),
}

impl From<RawError> for ResponseError {
    fn from(raw: RawError) -> Self {
        match raw {
            RawError::Text(message) => ResponseError {
                message,
                status: None,
            },
            RawError::Detailed { message, status } => ResponseError { message, status },
            RawError::Other(value) => ResponseError {
                message: value.to_string(),
                status: None,
            },
        }
    }
}

impl From<serde_json::Value> for ResponseError {
    fn from(value: serde_json::Value) -> Self {
        RawError::deserialize(&value)
            .map(Self::from)
            .unwrap_or_else(|_| ResponseError {
                message: value.to_string(),
                status: None,
            })
    }
}

/// Records plus errors for one or more requests.
///
/// Responses form a monoid under [`Response::combine`]: records and errors
/// are concatenated in order, and [`Response::empty`] is the identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub data: Vec<Record>,
    #[serde(default)]
    pub errors: Vec<ResponseError>,
}

impl Response {
    /// A response with no records and no errors.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps a transport or parse failure so it travels with the data.
    pub fn from_error(err: &Error) -> Self {
        let message = match err {
            Error::HttpStatus { status, body } if !body.is_empty() => {
                format!("Request failed with status {}: {}", status, body)
            }
            other => other.to_string(),
        };
        Self {
            data: Vec::new(),
            errors: vec![ResponseError {
                message,
                status: err.status(),
            }],
        }
    }

    pub fn data(&self) -> &[Record] {
        &self.data
    }

    /// True when any request folded into this response failed.
    pub fn is_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.errors.is_empty()
    }

    /// Appends `other` after `self`.
    pub fn combine(mut self, other: Response) -> Response {
        self.data.extend(other.data);
        self.errors.extend(other.errors);
        self
    }
}

impl Extend<Response> for Response {
    fn extend<I: IntoIterator<Item = Response>>(&mut self, iter: I) {
        for other in iter {
            self.data.extend(other.data);
            self.errors.extend(other.errors);
        }
    }
}

impl FromIterator<Response> for Response {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        let mut response = Response::empty();
        response.extend(iter);
        response
    }
}
