//! Bootstrap layer for the payment-gateway backend: process configuration,
//! database schema migration, and client address resolution.
//!
//! The crate owns no HTTP routes and no payment logic. It hands a validated
//! [`Config`] and a migrated database to the serving and persistence
//! collaborators, and exposes [`resolve_client_ip`] for anything that needs
//! the originating address of a request (logging, fraud scoring).

pub mod client_ip;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;

pub use client_ip::{resolve_client_ip, resolve_client_ip_from_socket, UNKNOWN_ADDR};
pub use config::{Config, PaymentMethod};
pub use db::Database;
pub use error::{AppError, Result};
