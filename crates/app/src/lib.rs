//! # zhi-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ThemeStore` — load & save the selected theme token
//! - Define **driving/inbound** use-case structs:
//!   - `ThemeService` — owns the process-wide active theme, with a single
//!     mutation entry point
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`InMemoryThemeStore`)
//!
//! ## Dependency rule
//! Depends on `zhi-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_store;
pub mod ports;
pub mod services;
