/// Report lines

pub const STATUS_CODE: &str = "Status Code:";
pub const RESPONSE_JSON: &str = "Response JSON:";
pub const RESPONSE_BODY: &str = "Response body:";
pub const ALL_TESTS_COMPLETED: &str = "--- All tests completed. ---";

/// Diagnostic prefixes

pub const AN_ERROR_OCCURRED: &str = "An error occurred:";
pub const HTTP_ERROR: &str = "HTTP Error:";
pub const CONNECTION_ERROR: &str = "Connection Error:";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred:";
