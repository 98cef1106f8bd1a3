use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Record, Response, ResponseError};

/// Body shapes returned by the API. Lookups answer with a bare list or a
/// single object; views and ad-hoc queries wrap rows in a `data` envelope.
///
/// Any object carrying a `data` or `errors` key is an envelope, whatever
/// the shape of those values, so reported errors always reach
/// [`Response::errors`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Envelope {
        data: Vec<Record>,
        errors: Vec<ResponseError>,
    },
    Rows(Vec<Record>),
    Single(Record),
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => records(items).map(Payload::Rows).map_err(D::Error::custom),
            Value::Object(mut map) if map.contains_key("data") || map.contains_key("errors") => {
                let data = match map.remove("data") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(items)) => records(items).map_err(D::Error::custom)?,
                    Some(Value::Object(record)) => vec![record],
                    Some(other) => {
                        return Err(D::Error::custom(format!(
                            "expected `data` to be a list of objects, found {}",
                            other
                        )))
                    }
                };
                let errors = match map.remove("errors") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(items)) => items.into_iter().map(ResponseError::from).collect(),
                    Some(other) => vec![ResponseError::from(other)],
                };
                Ok(Payload::Envelope { data, errors })
            }
            Value::Object(map) => Ok(Payload::Single(map)),
            other => Err(D::Error::custom(format!(
                "expected an object or a list of objects, found {}",
                other
            ))),
        }
    }
}

fn records(items: Vec<Value>) -> Result<Vec<Record>, String> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => Ok(record),
            other => Err(format!("expected a record object, found {}", other)),
        })
        .collect()
}

impl From<Payload> for Response {
    fn from(payload: Payload) -> Self {
        match payload {
            Payload::Envelope { data, errors } => Response { data, errors },
            Payload::Rows(data) => Response {
                data,
                errors: Vec::new(),
            },
            Payload::Single(record) => Response {
                data: vec![record],
                errors: Vec::new(),
            },
        }
    }
}
