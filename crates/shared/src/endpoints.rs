//! Paths, headers and form field names of the order tracker API

/// Combined service-type and add-on catalog (GET).
pub const SERVICE_TYPES_PATH: &str = "/tracker/api/orders/service-types/";

/// Order update from corrected extraction data (POST, multipart).
pub const UPDATE_FROM_EXTRACTION_PATH: &str = "/tracker/api/orders/update-from-extraction/";

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Hidden inputs the page provides to the wizard.
pub mod page_fields {
    pub const ORDER_ID: &str = "order_id";
    pub const ORDER_TYPE: &str = "order_type";
    pub const CSRF_TOKEN: &str = "csrfmiddlewaretoken";
    /// JSON object of the extractor's header values
    pub const EXTRACTION_HEADER: &str = "extraction_header";
}

/// Headers of the catalog request. The token header is only sent when the
/// page has a token.
pub fn catalog_request_headers(csrf_token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![(
        REQUESTED_WITH_HEADER.to_string(),
        REQUESTED_WITH_VALUE.to_string(),
    )];
    if let Some(token) = csrf_token.filter(|token| !token.is_empty()) {
        headers.push((CSRF_HEADER.to_string(), token.to_string()));
    }
    headers
}

/// Join a base URL and an API path without doubling slashes.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
