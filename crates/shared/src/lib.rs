//! Tracker Shared - wire contract of the order tracker API
//!
//! This crate contains the types exchanged with the backend:
//! - Endpoint paths, header names and page field names
//! - Response DTOs and their conversion into domain types
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, thiserror and tracing
//! 2. **No business logic** - Parsing and conversion only
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod endpoints;
pub mod error;
pub mod responses;

pub use endpoints::{
    catalog_request_headers, join_url, page_fields, CSRF_HEADER, REQUESTED_WITH_HEADER,
    REQUESTED_WITH_VALUE, SERVICE_TYPES_PATH, UPDATE_FROM_EXTRACTION_PATH,
};
pub use error::ProtocolError;
pub use responses::{
    ExtractionHeader, OptionIdData, ServiceCatalogResponse, ServiceOptionData, UpdateResponse,
};
