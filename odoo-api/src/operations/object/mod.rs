//! Operations executed on the object service via `execute_kw`

mod create;
mod read;
mod search;
mod search_read;
mod write;

pub use create::{CreateOperation, CreateRequest};
pub use read::{ReadOperation, ReadRequest};
pub use search::{SearchOperation, SearchRequest};
pub use search_read::{SearchReadOperation, SearchReadRequest};
pub use write::{WriteOperation, WriteRequest};

use xmlrpc_client::Value;

use crate::error::ApiError;
use crate::operation::Record;

/// Decode an array-of-structs result into records
///
/// Shared by `read` and `search_read`, which both return record lists.
fn parse_records(value: &Value) -> Result<Vec<Record>, ApiError> {
    let items = value
        .as_array()
        .ok_or_else(|| ApiError::UnexpectedResponse("result is not a record list".to_string()))?;

    items
        .iter()
        .map(|item| {
            item.as_struct()
                .cloned()
                .ok_or_else(|| ApiError::UnexpectedResponse("record is not a struct".to_string()))
        })
        .collect()
}

/// Encode a list of record ids as an XML-RPC array
fn ids_value(ids: &[i64]) -> Value {
    Value::Array(ids.iter().map(|id| Value::Int(*id)).collect())
}

/// Encode a field name list as an XML-RPC array
fn fields_value(fields: &[String]) -> Value {
    Value::Array(fields.iter().map(|f| Value::from(f.as_str())).collect())
}
