//! Blog-article service: article domain, create/list/get-by-id use cases,
//! in-memory and Postgres stores, and the Axum HTTP surface.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
