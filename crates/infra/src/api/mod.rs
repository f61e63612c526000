//! Inventory backend REST client
//!
//! Bearer-authenticated JSON calls on top of [`crate::http::HttpClient`],
//! and the [`InventoryApiClient`] adapter for the core inventory port.

pub mod auth;
pub mod client;
pub mod errors;
pub mod inventory;

pub use auth::{AccessTokenProvider, SessionTokenProvider};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
pub use inventory::InventoryApiClient;
