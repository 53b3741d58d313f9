//! AWS Lambda handler for termination date requests
//!
//! Accepts a JSON termination request and returns the evaluated outcome,
//! including the regime and scenario that produced the date.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::Utc;
use insurance_termination::{TerminationCalculator, TerminationOutcome, TerminationRequest};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(&ErrorBody { error: message })?;
    Ok(cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

fn json_response(outcome: &TerminationOutcome) -> Result<Response<Body>, Error> {
    Ok(cors(Response::builder())
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(outcome)?))?)
}

/// Parse the request body into a termination request
fn parse_request(body: &Body) -> Result<TerminationRequest, serde_json::Error> {
    match body {
        Body::Text(s) => serde_json::from_str(s),
        Body::Binary(b) => serde_json::from_slice(b),
        Body::Empty => serde_json::from_str("{}"),
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let request = match parse_request(event.body()) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let today = Utc::now().date_naive();
    match TerminationCalculator::default().evaluate(&request, today) {
        Ok(outcome) => {
            log::info!(
                "contract {} -> {} ({}, {})",
                outcome.contract_start,
                outcome.termination_date,
                outcome.regime,
                outcome.scenario
            );
            json_response(&outcome)
        }
        Err(e) => error_response(400, &e.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_text() {
        let body = Body::Text(
            r#"{"contract_start":"2023-09-05","reference_date":"2025-11-05","earliest_expected_termination":"2025-12-05"}"#
                .to_string(),
        );
        let request = parse_request(&body).unwrap();
        let outcome = TerminationCalculator::default()
            .evaluate(&request, Utc::now().date_naive())
            .unwrap();
        assert_eq!(outcome.termination_date.to_string(), "2026-01-05");
    }

    #[test]
    fn test_parse_request_empty_body_fails() {
        // contract_start is mandatory
        assert!(parse_request(&Body::Empty).is_err());
    }

    #[test]
    fn test_parse_request_rejects_unpadded_date() {
        let body = Body::Text(r#"{"contract_start":"2023-9-5"}"#.to_string());
        let err = parse_request(&body).unwrap_err();
        assert!(err.to_string().contains("invalid date: 2023-9-5"), "{err}");
    }

    #[test]
    fn test_outcome_json_shape() {
        let request: TerminationRequest =
            serde_json::from_str(r#"{"contract_start":"2018-05-18","reference_date":"2024-10-01"}"#).unwrap();
        let outcome = TerminationCalculator::default()
            .evaluate(&request, Utc::now().date_naive())
            .unwrap();
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["regime"], "PRE_OCT2024");
        assert_eq!(json["scenario"], "end_of_term");
        assert_eq!(json["termination_date"], "2025-05-18");
        assert!(json["earliest_expected_termination"].is_null());
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(400, "invalid date: x").unwrap();
        assert_eq!(response.status(), 400);
        match response.body() {
            Body::Text(text) => assert_eq!(text, r#"{"error":"invalid date: x"}"#),
            other => panic!("unexpected body {:?}", other),
        }
    }
}
