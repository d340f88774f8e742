//! Notekeep API server library.
//!
//! Exposes the building blocks (config, state, auth, services, routes, error
//! handling) so integration tests and the binary entrypoint share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
