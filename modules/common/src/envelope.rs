// Response envelope shared by every HTTP surface in the workspace.
//
// All endpoints answer `{success, data?, error?}`; the error branch carries a
// machine-readable code plus a human-readable message.

use serde::{Deserialize, Serialize};

/// Uniform response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Wraps an error body in a failed envelope.
    pub fn err(error: ErrorBody) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Error branch of the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g. "INSUFFICIENT_STOCK")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Error descriptor produced by the gateway before it is wrapped in the
/// envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }

    // -------------------------------------------------------------------------
    // Common error constructors
    // -------------------------------------------------------------------------

    /// Creates a validation error with a custom message.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an unauthorized error (missing or mismatched API key).
    pub fn unauthorized() -> Self {
        Self::new("UNAUTHORIZED", "Missing or invalid API key")
    }

    /// Creates a generic internal error that hides the original cause.
    pub fn internal_error() -> Self {
        Self::new("INTERNAL_ERROR", "Internal error")
    }

    /// Converts into the envelope's error branch.
    pub fn into_body(self) -> ErrorBody {
        ErrorBody {
            code: self.error_code,
            message: self.message,
        }
    }
}

/// Paginated collection response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    /// Builds a page, deriving `total_pages` from the total count.
    pub fn new(items: Vec<T>, total: i64, page: i64, page_size: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_skips_error() {
        let json = serde_json::to_string(&ApiResponse::ok(42)).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":42"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_err_envelope_skips_data() {
        let json =
            serde_json::to_string(&ApiResponse::<()>::err(ErrorResponse::unauthorized().into_body()))
                .unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"code\":\"UNAUTHORIZED\""));
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 7, 1, 3);
        assert_eq!(page.total_pages, 3);

        let exact = PaginatedResponse::new(vec![1, 2], 6, 1, 3);
        assert_eq!(exact.total_pages, 2);
    }
}
