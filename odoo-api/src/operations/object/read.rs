//! Read operation: fetch fields for known record ids

use std::collections::BTreeMap;

use xmlrpc_client::Value;

use crate::error::ApiError;
use crate::operation::{CallOptions, OdooOperation, Record};

use super::{fields_value, ids_value, parse_records};

/// Read operation
pub struct ReadOperation;

/// Request for the read operation
pub struct ReadRequest {
    pub ids: Vec<i64>,
    pub fields: Vec<String>,
    pub options: CallOptions,
}

impl OdooOperation for ReadOperation {
    type Request = ReadRequest;
    type Response = Vec<Record>;

    const METHOD: &'static str = "read";

    fn build_args(request: &Self::Request) -> Vec<Value> {
        vec![ids_value(&request.ids)]
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

#[cfg(test)]
mod tests {
    use super::*;

    fn request(ids: Vec<i64>, fields: &[&str]) -> ReadRequest {
        ReadRequest {
            ids,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            options: CallOptions::new(),
        }
    }

    #[test]
    fn test_read_args_carry_the_ids() {
        let args = ReadOperation::build_args(&request(vec![1, 2], &["name"]));
        assert_eq!(
            args,
            vec![Value::Array(vec![Value::Int(1), Value::Int(2)])]
        );
    }

    #[test]
    fn test_read_kwargs_carry_the_field_list() {
        let kwargs = ReadOperation::build_kwargs(&request(vec![1], &["name", "email"]));
        assert_eq!(
            kwargs["fields"],
            Value::Array(vec![Value::from("name"), Value::from("email")])
        );
    }

    #[test]
    fn test_read_options_merge_with_fields() {
        let mut req = request(vec![1], &["name"]);
        req.options = CallOptions::new().extra("load", "_classic_read");
        let kwargs = ReadOperation::build_kwargs(&req);
        assert!(kwargs.contains_key("fields"));
        assert_eq!(kwargs["load"], Value::from("_classic_read"));
    }

    #[test]
    fn test_read_response_parsing() {
        let mut record = BTreeMap::new();
        record.insert("id".to_string(), Value::Int(1));
        record.insert("name".to_string(), Value::from("Azure Interior"));
        let value = Value::Array(vec![Value::Struct(record)]);

        let records = ReadOperation::parse_response(&value).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], Value::from("Azure Interior"));
    }

    #[test]
    fn test_read_response_rejects_non_struct_items() {
        let value = Value::Array(vec![Value::Int(1)]);
        let result = ReadOperation::parse_response(&value);
        assert!(matches!(result, Err(ApiError::UnexpectedResponse(_))));
    }
}
