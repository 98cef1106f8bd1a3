//! Folding per-request responses into one logical result.

use nanigans_api::types::Response;

/// Combines responses in order, starting from the empty response.
///
/// Records and errors are concatenated, so the result of aggregating N
/// day-level responses is their logical union.
pub fn aggregate<I>(responses: I) -> Response
where
    I: IntoIterator<Item = Response>,
{
    responses
        .into_iter()
        .fold(Response::empty(), Response::combine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanigans_api::types::ResponseError;
    use serde_json::json;

    fn day(n: i64) -> Response {
        Response {
            data: vec![json!({ "day": n }).as_object().unwrap().clone()],
            errors: Vec::new(),
        }
    }

    fn failure() -> Response {
        Response {
            data: Vec::new(),
            errors: vec![ResponseError {
                message: "timeout".to_string(),
                status: None,
            }],
        }
    }

    #[test]
    fn empty_sequence_is_identity() {
        assert_eq!(aggregate(Vec::new()), Response::empty());
    }

    #[test]
    fn preserves_record_order() {
        let resp = aggregate(vec![day(1), day(2), day(3)]);
        let days: Vec<i64> = resp.data.iter().map(|r| r["day"].as_i64().unwrap()).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert!(!resp.is_error());
    }

    #[test]
    fn associative_over_groupings() {
        let flat = aggregate(vec![day(1), failure(), day(2)]);
        let nested_left = aggregate(vec![aggregate(vec![day(1), failure()]), day(2)]);
        let nested_right = aggregate(vec![day(1), aggregate(vec![failure(), day(2)])]);
        assert_eq!(flat, nested_left);
        assert_eq!(flat, nested_right);
    }

    #[test]
    fn empty_responses_are_noops() {
        let with_empties = aggregate(vec![Response::empty(), day(1), Response::empty()]);
        assert_eq!(with_empties, day(1));
    }

    #[test]
    fn matches_collect() {
        let folded = aggregate(vec![day(1), failure()]);
        let collected: Response = vec![day(1), failure()].into_iter().collect();
        assert_eq!(folded, collected);
    }
}
