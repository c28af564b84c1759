//! SurgiHub storefront client: backend API, session handling and the
//! checkout, review, quote and admin use cases.

pub mod api;
pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
pub mod session;
