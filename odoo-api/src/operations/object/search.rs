//! Search operation: find record ids matching a domain

use std::collections::BTreeMap;

use xmlrpc_client::Value;

use crate::domain::Domain;
use crate::error::ApiError;
use crate::operation::{CallOptions, OdooOperation};

/// Search operation
pub struct SearchOperation;

/// Request for the search operation
pub struct SearchRequest {
    pub domain: Domain,
    pub options: CallOptions,
}

impl OdooOperation for SearchOperation {
    type Request = SearchRequest;
    type Response = Vec<i64>;

    const METHOD: &'static str = "search";

    fn build_args(request: &Self::Request) -> Vec<Value> {
        vec![request.domain.to_value()]
    }

    fn build_kwargs(request: &Self::Request) -> BTreeMap<String, Value> {
        request.options.kwargs()
    }

    fn parse_response(value: &Value) -> Result<Self::Response, ApiError> {
        let items = value.as_array().ok_or_else(|| {
            ApiError::UnexpectedResponse("search result is not an array".to_string())
        })?;

        items
            .iter()
            .map(|item| {
                item.as_i64().ok_or_else(|| {
                    ApiError::UnexpectedResponse("non-integer id in search result".to_string())
                })
            })
            .collect()
    }
}
