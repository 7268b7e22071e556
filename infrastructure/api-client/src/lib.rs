//! REST client of the GearGuard backend.
//!
//! [`ApiClient`] implements every repository trait of `domain-maintenance`
//! and is bound to one explicit [`Session`](domain_maintenance::model::vo::Session).

mod client;
pub mod config;
pub mod error;
mod repository;

#[rustfmt::skip]
pub use {
    client::ApiClient,
    config::ApiConfig,
    error::ApiError,
};
