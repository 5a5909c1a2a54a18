//! Write operation: update fields on existing records

use std::collections::BTreeMap;

use xmlrpc_client::Value;

use crate::error::ApiError;
use crate::operation::{CallOptions, OdooOperation, Record};

use super::ids_value;

/// Write operation
pub struct WriteOperation;

/// Request for the write operation
pub struct WriteRequest {
    pub ids: Vec<i64>,
    pub values: Record,
    pub options: CallOptions,
}

impl OdooOperation for WriteOperation {
    type Request = WriteRequest;
    type Response = bool;

    const METHOD: &'static str = "write";

    fn build_args(request: &Self::Request) -> Vec<Value> {
        vec![ids_value(&request.ids), Value::Struct(request.values.clone())]
    }

    fn build_kwargs(request: &Self::Request) -> BTreeMap<String, Value> {
        request.options.kwargs()
    }

    fn parse_response(value: &Value) -> Result<Self::Response, ApiError> {
        value.as_bool().ok_or_else(|| {
            ApiError::UnexpectedResponse("write result is not a boolean".to_string())
        })
    }
}
