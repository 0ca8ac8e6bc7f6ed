//! JSON request/response bodies for exposing the matcher over a request/response transport.

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::geo::Coordinate;
use crate::matcher::{match_closest_points, MatchedPair};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub points_a: Vec<Coordinate>,
    pub points_b: Vec<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchedPair>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl From<&MatchError> for ErrorBody {
    fn from(err: &MatchError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Status code plus serialized JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

impl WireResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        // Plain structs of strings and floats; serialization does not fail for them.
        let body = serde_json::to_string(value).unwrap_or_else(|e| {
            format!(r#"{{"error":"internal","message":{:?}}}"#, e.to_string())
        });
        Self { status, body }
    }
}

pub fn respond(request: &MatchRequest) -> Result<MatchResponse, ErrorBody> {
    match_closest_points(&request.points_a, &request.points_b)
        .map(|matches| MatchResponse { matches })
        .map_err(|e| ErrorBody::from(&e))
}

/// Parses a request body, runs the match and encodes the outcome.
/// Malformed JSON and an empty `points_b` are both client errors.
pub fn handle_match_request(body: &str) -> WireResponse {
    let request: MatchRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            let err = ErrorBody {
                error: "malformed_request".to_string(),
                message: e.to_string(),
            };
            return WireResponse::json(STATUS_BAD_REQUEST, &err);
        }
    };

    match respond(&request) {
        Ok(response) => WireResponse::json(STATUS_OK, &response),
        Err(err) => WireResponse::json(STATUS_BAD_REQUEST, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_us_cities() {
        let body = r#"{
            "points_a": [[40.7128, -74.0060], [34.0522, -118.2437]],
            "points_b": [[51.5074, -0.1278], [41.8781, -87.6298]]
        }"#;
        let response = handle_match_request(body);
        assert!(response.is_success());

        let parsed: MatchResponse = serde_json::from_str(&response.body).unwrap();
        assert_eq!(
            parsed.matches,
            vec![
                ((40.7128, -74.0060), (41.8781, -87.6298)),
                ((34.0522, -118.2437), (41.8781, -87.6298)),
            ]
        );
    }

    #[test]
    fn empty_candidates_is_bad_request() {
        let response = handle_match_request(r#"{"points_a": [[1.0, 2.0]], "points_b": []}"#);
        assert_eq!(response.status, STATUS_BAD_REQUEST);

        let parsed: ErrorBody = serde_json::from_str(&response.body).unwrap();
        assert_eq!(parsed.error, "invalid_input");
    }

    #[test]
    fn empty_queries_are_ok() {
        let response = handle_match_request(r#"{"points_a": [], "points_b": [[1.0, 2.0]]}"#);
        assert!(response.is_success());
        assert_eq!(response.body, r#"{"matches":[]}"#);
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let response = handle_match_request(r#"{"points_a": [[1.0]]"#);
        assert_eq!(response.status, STATUS_BAD_REQUEST);

        let parsed: ErrorBody = serde_json::from_str(&response.body).unwrap();
        assert_eq!(parsed.error, "malformed_request");
    }

    #[test]
    fn respond_returns_typed_error() {
        let request = MatchRequest {
            points_a: vec![],
            points_b: vec![],
        };
        let err = respond(&request).unwrap_err();
        assert_eq!(err.error, "invalid_input");
    }
}
