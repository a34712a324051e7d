//! HTTP API: read-only JSON surface over the dashboard core.

pub mod app;
pub mod config;
pub mod middleware;
