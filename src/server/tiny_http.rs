//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.
//! Each run request is handled on its own thread, so a slow checker
//! never blocks listing requests.

use std::io::Cursor;
use std::io::Read as _;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{self, ApiError, ApiResponse, ListResultsQuery, RunCheckRequest};
use crate::runner::CheckRunner;

/// Start the results API server and block serving requests
pub fn serve(runner: CheckRunner, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    println!("Serving check results on http://localhost:{port}");
    println!("Press Ctrl+C to stop");

    let runner = Arc::new(runner);
    for request in server.incoming_requests() {
        let runner = Arc::clone(&runner);
        std::thread::spawn(move || {
            let mut request = request;
            let response = handle_request(&runner, &mut request);
            if let Err(e) = request.respond(response) {
                log::warn!("failed to send response: {e}");
            }
        });
    }

    Ok(())
}

/// Route an API request to its handler
fn handle_request(runner: &CheckRunner, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    let (path, query) = url.split_once('?').map_or((url.as_str(), ""), |(p, q)| (p, q));

    match (&method, path) {
        (&Method::Get, "/api/results") => {
            handle_result(api::list_results(runner.store(), &parse_list_query(query)))
        },

        (&Method::Post, "/api/run-check") => match read_json_body::<RunCheckRequest>(request) {
            Ok(req) => handle_result(api::run_check(runner, &req)),
            Err(e) => error_response(&e),
        },

        // Result detail: GET /api/results/{id}
        _ if method == Method::Get && path.starts_with("/api/results/") => {
            let id = path.strip_prefix("/api/results/").unwrap_or("");
            if id.contains('/') {
                not_found_response(&format!("API endpoint not found: {method} {path}"))
            } else {
                handle_result(api::get_result(runner.store(), id))
            }
        },

        // 404 for unknown API routes
        _ => not_found_response(&format!("API endpoint not found: {method} {path}")),
    }
}

/// Parse listing parameters from a query string
fn parse_list_query(query: &str) -> ListResultsQuery {
    let mut parsed = ListResultsQuery::default();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "checker" if !value.is_empty() => parsed.checker = Some(value.to_string()),
            "limit" => parsed.limit = value.parse().ok(),
            "offset" => parsed.offset = value.parse().ok(),
            _ => {},
        }
    }
    parsed
}

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error("NOT_FOUND", message);
    json_response(&response, 404)
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    Response::from_data(json.into_bytes())
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
        .with_status_code(StatusCode(status))
}
