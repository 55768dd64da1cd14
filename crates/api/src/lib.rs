//! HTTP surface: server bootstrap, routing, and request/response mapping.

pub mod app;
pub mod config;
pub mod server;

pub use config::ServerConfig;
pub use server::{BoundServer, Server, ServerError};
