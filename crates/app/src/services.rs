//! Application services — use-case orchestration.

pub mod theme_service;
