//! # stockroom-domain
//!
//! Pure domain model for the stockroom inventory service.
//!
//! ## Responsibilities
//! - Foundational types: the integer [`ItemId`](id::ItemId) and error conventions
//! - Define the **Item** record (an opaque JSON object carrying an `id`)
//! - Enforce the collection invariants: unique ids, `max + 1` assignment,
//!   wholesale replacement on update
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod item;
