//! High-level Odoo API client
//!
//! This crate provides a type-safe client for Odoo's external XML-RPC API.
//! It uses the private `xmlrpc-client` crate for the low-level XML-RPC
//! communication.
//!
//! Connecting authenticates against `/xmlrpc/2/common` and keeps the
//! returned uid for the session; the CRUD-style operations (`search`,
//! `read`, `search_read`, `create`, `write`) are forwarded through
//! `/xmlrpc/2/object`'s `execute_kw` dispatcher. Remote faults surface as
//! [`ApiError::Fault`].
//!
//! ```rust,no_run
//! use odoo_api::{CallOptions, ClientConfig, Domain, OdooClient};
//!
//! # fn main() -> odoo_api::Result<()> {
//! let client = OdooClient::connect(ClientConfig::from_env().expect("config"))?;
//!
//! // Operate on a model directly...
//! let partners = client.search_read(
//!     "res.partner",
//!     Domain::new().filter("is_company", "=", true),
//!     &["name", "country_id"],
//!     CallOptions::new().limit(5),
//! )?;
//!
//! // ...or through a model-bound handle
//! let partner = client.model("res.partner");
//! let ids = partner.search(Domain::new(), CallOptions::new())?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod operation;
pub mod operations;
pub mod service;

pub use client::{ModelClient, OdooClient};
pub use config::{ClientConfig, ConfigError};
pub use domain::Domain;
pub use error::{ApiError, Result};
pub use operation::{CallOptions, OdooOperation, Record};
pub use service::{Service, ServiceInfo};

// Re-exported so callers can build field values without importing the
// transport crate directly
pub use xmlrpc_client::Value;
