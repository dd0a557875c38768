//! A small todo list service.
//!
//! Items live in an in-memory [`store::Store`] that is created once at startup
//! and handed to [`api::create_router`], which exposes it as a JSON HTTP API.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
