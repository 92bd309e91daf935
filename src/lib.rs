//! ecs-demo: a deployment smoke-test HTTP service.
//!
//! Serves two fixed-text endpoints under `/demo` plus a liveness probe, so a
//! freshly deployed container can be checked with nothing more than curl.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
