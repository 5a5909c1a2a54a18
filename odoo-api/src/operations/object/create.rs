//! Create operation: insert one record and return its id

use std::collections::BTreeMap;

use xmlrpc_client::Value;

use crate::error::ApiError;
use crate::operation::{CallOptions, OdooOperation, Record};

/// Create operation
pub struct CreateOperation;

/// Request for the create operation
pub struct CreateRequest {
    pub values: Record,
    pub options: CallOptions,
}

impl OdooOperation for CreateOperation {
    type Request = CreateRequest;
    type Response = i64;

    const METHOD: &'static str = "create";

    fn build_args(request: &Self::Request) -> Vec<Value> {
        vec![Value::Struct(request.values.clone())]
    }

    fn build_kwargs(request: &Self::Request) -> BTreeMap<String, Value> {
        request.options.kwargs()
    }

    fn parse_response(value: &Value) -> Result<Self::Response, ApiError> {
        value.as_i64().ok_or_else(|| {
            ApiError::UnexpectedResponse("create result is not a record id".to_string())
        })
    }
}
