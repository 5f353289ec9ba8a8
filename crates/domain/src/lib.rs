//! # roster-domain
//!
//! Pure domain model for the roster user service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **User** record and its mutable **profile**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod user;
