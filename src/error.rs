use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Client-side validation failures for a cafe lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown city")]
    InvalidCity,
    #[error("incorrect count")]
    InvalidCount,
}

impl QueryError {
    pub fn status(&self) -> StatusCode {
        match self {
            QueryError::InvalidCity | QueryError::InvalidCount => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(QueryError::InvalidCity.to_string(), "unknown city");
        assert_eq!(QueryError::InvalidCount.to_string(), "incorrect count");
    }

    #[test]
    fn test_into_response_is_bad_request() {
        let response = QueryError::InvalidCount.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
