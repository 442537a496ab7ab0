// ABOUTME: Library root for kivotos - typed subprocess bridge for container CLIs.
// ABOUTME: Runs a management tool, streams its output, decodes JSON into records.

pub mod decode;
pub mod error;
pub mod exec;
pub mod polling;
pub mod services;
pub mod tool;
pub mod types;
