//! HTTP API module for the Shipping Quote Engine.
//!
//! This module provides the REST endpoints for quoting ZIP-to-ZIP parcel
//! shipments and for health checks.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequestBody;
pub use response::{ApiError, ApiErrorResponse, QuoteDisplay, QuoteResponse};
pub use state::AppState;
