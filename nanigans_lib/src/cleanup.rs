//! Post-fetch record cleanup.
//!
//! The placements source serializes spend as a punctuated string
//! (`"12,345.67"`), so the value has to be normalized before it can be
//! parsed as a number downstream.

use nanigans_api::types::Record;
use serde_json::Value;

/// Field holding spend in dollars for the native-placements source.
pub const SPEND_FIELD: &str = "fbSpend";

/// Removes thousands separators from `field` when it holds a string.
/// Numbers, nulls and absent fields are left as they are.
pub fn strip_thousands_separators(record: &mut Record, field: &str) {
    if let Some(Value::String(value)) = record.get_mut(field) {
        if value.contains(',') {
            value.retain(|c| c != ',');
        }
    }
}

/// Normalizes the spend field of one record.
pub fn clean_spend(record: &mut Record) {
    strip_thousands_separators(record, SPEND_FIELD);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn strips_commas_from_spend() {
        let mut r = record(json!({ "fbSpend": "12,345.67", "clicks": 4 }));
        clean_spend(&mut r);
        assert_eq!(r["fbSpend"], "12345.67");
        assert_eq!(r["clicks"], 4);
    }

    #[test]
    fn millions() {
        let mut r = record(json!({ "fbSpend": "1,000,000" }));
        clean_spend(&mut r);
        assert_eq!(r["fbSpend"], "1000000");
    }

    #[test]
    fn plain_values_unchanged() {
        let mut r = record(json!({ "fbSpend": "987.10" }));
        clean_spend(&mut r);
        assert_eq!(r["fbSpend"], "987.10");

        let mut r = record(json!({ "fbSpend": 42.5 }));
        clean_spend(&mut r);
        assert_eq!(r["fbSpend"], 42.5);

        let mut r = record(json!({ "fbSpend": null }));
        clean_spend(&mut r);
        assert!(r["fbSpend"].is_null());
    }

    #[test]
    fn missing_field_is_noop() {
        let mut r = record(json!({ "clicks": "1,200" }));
        clean_spend(&mut r);
        assert_eq!(r["clicks"], "1,200");
        assert!(!r.contains_key(SPEND_FIELD));
    }

    #[test]
    fn other_fields_by_name() {
        let mut r = record(json!({ "spend": "3,210.00" }));
        strip_thousands_separators(&mut r, "spend");
        assert_eq!(r["spend"], "3210.00");
    }
}
