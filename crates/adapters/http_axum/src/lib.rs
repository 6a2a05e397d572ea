//! # zhi-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled admin console (the Leptos bundle) under `/admin`
//! - Fall back to `index.html` for client-side routes so deep links work;
//!   known console routes answer `200`, unknown ones `404`
//! - Redirect `/` to the console's dashboard
//! - Expose a `/health` probe
//!
//! ## Dependency rule
//! Depends on `zhi-domain` for the route table. Never leaks axum types into
//! the domain.

pub mod error;
pub mod router;
pub mod spa;
pub mod state;
