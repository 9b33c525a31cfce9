//! Application services - one per backend endpoint

mod catalog_service;
mod submission_service;

pub use catalog_service::CatalogService;
pub use submission_service::SubmissionService;
