//! # jobtrack-domain
//!
//! Pure domain model for the jobtrack job application tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, calendar dates
//! - Define **Applications** (one job application: company, position,
//!   status, date applied, notes)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod application;
