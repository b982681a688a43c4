// ABOUTME: Nacscope CLI library - API server wiring
// ABOUTME: Exposes the router and config so integration tests can drive the API in-process

pub mod api;
pub mod config;
