//! Deployment smoke-test endpoints under `/demo`.
//!
//! Both handlers return a fixed body and log that the request arrived, which is
//! enough to confirm from the outside (curl) and the inside (container logs)
//! that a deployed task is serving traffic.

use crate::config::{DEMO_DATA_MESSAGE, DEMO_MESSAGE};

/// `GET /demo/data`
pub async fn get_data() -> &'static str {
    tracing::info!("Request received for /demo/data");
    DEMO_DATA_MESSAGE
}

/// `GET /demo/message`
pub async fn get_message() -> &'static str {
    tracing::info!("Request received for /demo/message");
    DEMO_MESSAGE
}

