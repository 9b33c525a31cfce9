//! Port traits implemented by infrastructure adapters

pub mod outbound;
