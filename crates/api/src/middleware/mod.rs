//! Request extractors guarding the API.
//!
//! - [`auth::ApiConsumer`] -- Resolves the calling consumer from its `X-API-KEY` header.

pub mod auth;
