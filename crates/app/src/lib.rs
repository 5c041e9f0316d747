//! # jobtrack-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ApplicationRepository` — create, list, get and delete job applications
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ApplicationService` — submit, list, get and remove applications
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `jobtrack-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
