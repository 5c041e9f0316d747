//! # jobtrack-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/api/applications`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and error kinds into HTTP responses
//! - Apply the CORS policy that lets the browser front-end call the API
//!
//! ## Dependency rule
//! Depends on `jobtrack-app` (for port traits and services) and `jobtrack-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod cors;
pub mod error;
pub mod router;
pub mod state;
