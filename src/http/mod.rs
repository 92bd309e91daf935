//! HTTP server module.
//!
//! The service listens on plain HTTP; TLS is terminated by the load balancer
//! in front of the ECS task. The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT with connection draining

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
