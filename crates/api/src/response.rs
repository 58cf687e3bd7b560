//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "result": "success" }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

impl ResultResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
