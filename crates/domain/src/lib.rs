//! # zhi-domain
//!
//! Pure domain model for the Zhi-Server administration console.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define the **route table** of the console (`/admin/...`) and which
//!   routes live inside the authenticated shell
//! - Define the **navigation items** shown in the sidebar and their
//!   active-state rule
//! - Define the **theme tokens** that can be applied process-wide
//! - Hold the static **palette reference data** (swatches, CSS variables)
//! - Produce the placeholder **dashboard metrics**
//! - Model the two-phase **login screen** as a state machine
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Persistence of UI state is expressed as traits in the `app` crate (ports).

pub mod error;

pub mod login;
pub mod metrics;
pub mod nav;
pub mod palette;
pub mod route;
pub mod theme;
