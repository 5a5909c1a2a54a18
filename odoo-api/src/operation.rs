//! Core trait and shared types for `execute_kw` operations
//!
//! Every method the client forwards to the object service is described by
//! one `OdooOperation` implementation: it knows the remote method name, how
//! to marshal its request into positional and keyword arguments, and how to
//! read the result value back into a typed response.

use std::collections::BTreeMap;

use xmlrpc_client::Value;

use crate::error::ApiError;

/// One record as returned by the server: a field name to value map
///
/// The client deliberately models no Odoo schema of its own; fields come
/// back exactly as the remote sent them.
pub type Record = BTreeMap<String, Value>;

/// Base trait for all operations executed through `execute_kw`
///
/// Implementations are stateless marker types; credentials, database and
/// target model are supplied by the client at call time.
pub trait OdooOperation {
    /// The request type for this operation
    type Request;

    /// The response type for this operation
    type Response;

    /// The remote method name (`search`, `read`, ...)
    const METHOD: &'static str;

    /// Build the positional argument list from the request data
    fn build_args(request: &Self::Request) -> Vec<Value>;

    /// Build the keyword arguments from the request data
    fn build_kwargs(request: &Self::Request) -> BTreeMap<String, Value>;

    /// Parse the result value into the typed response
    fn parse_response(value: &Value) -> Result<Self::Response, ApiError>;
}

/// Optional keyword arguments shared by the query operations
///
/// `extra` is the open-ended remainder for any keyword the server accepts
/// beyond the common three (e.g. `context`).
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub order: Option<String>,
    pub extra: BTreeMap<String, Value>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Add an arbitrary keyword argument
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Render as the keyword argument map; empty options contribute nothing
    pub fn kwargs(&self) -> BTreeMap<String, Value> {
        let mut kwargs = self.extra.clone();
        if let Some(offset) = self.offset {
            kwargs.insert("offset".to_string(), Value::Int(offset as i64));
        }
        if let Some(limit) = self.limit {
            kwargs.insert("limit".to_string(), Value::Int(limit as i64));
        }
        if let Some(order) = &self.order {
            kwargs.insert("order".to_string(), Value::from(order.as_str()));
        }
        kwargs
    }
}
