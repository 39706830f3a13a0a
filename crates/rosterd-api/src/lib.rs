//! # rosterd-api
//!
//! HTTP surface for rosterd: request/response DTOs, handlers, and route
//! configuration. All endpoints live under the `/v1/api` prefix.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use error::ApiError;
pub use routes::configure_routes;

use rosterd_store::Store;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Store,
    /// Page size applied when the `size` query parameter is absent.
    pub default_page_size: u32,
    /// Hard cap on the `size` query parameter.
    pub max_page_size: u32,
}

impl ApiContext {
    pub fn new(store: Store, default_page_size: u32, max_page_size: u32) -> Self {
        Self {
            store,
            default_page_size,
            max_page_size,
        }
    }

    /// Context with the stock pagination policy (20 default / 100 max).
    pub fn with_defaults(store: Store) -> Self {
        Self::new(
            store,
            rosterd_commons::pagination::DEFAULT_PAGE_SIZE,
            rosterd_commons::pagination::MAX_PAGE_SIZE,
        )
    }

    /// Builds the clamped page request for a listing endpoint.
    pub fn page_request(&self, page: Option<u32>, size: Option<u32>) -> rosterd_commons::PageRequest {
        rosterd_commons::PageRequest::from_params_with(
            page,
            size,
            self.default_page_size,
            self.max_page_size,
        )
    }
}
