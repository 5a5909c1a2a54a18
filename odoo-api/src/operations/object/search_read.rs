//! SearchRead operation: search and read in a single round-trip

use std::collections::BTreeMap;

use xmlrpc_client::Value;

use crate::domain::Domain;
use crate::error::ApiError;
use crate::operation::{CallOptions, OdooOperation, Record};

use super::{fields_value, parse_records};

/// SearchRead operation
pub struct SearchReadOperation;

/// Request for the search_read operation
pub struct SearchReadRequest {
    pub domain: Domain,
    pub fields: Vec<String>,
    pub options: CallOptions,
}

impl OdooOperation for SearchReadOperation {
    type Request = SearchReadRequest;
    type Response = Vec<Record>;

    const METHOD: &'static str = "search_read";

    fn build_args(request: &Self::Request) -> Vec<Value> {
        vec![request.domain.to_value()]
    }

    fn build_kwargs(request: &Self::Request) -> BTreeMap<String, Value> {
        let mut kwargs = request.options.kwargs();
        kwargs.insert("fields".to_string(), fields_value(&request.fields));
        kwargs
    }

    fn parse_response(value: &Value) -> Result<Self::Response, ApiError> {
        parse_records(value)
    }
}
