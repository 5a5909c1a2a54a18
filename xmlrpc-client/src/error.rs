//! Error types for the XML-RPC client

use thiserror::Error;

/// Errors that can occur during XML-RPC communication
#[derive(Debug, Error)]
pub enum XmlRpcError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// XML parsing error
    #[error("XML parsing error: {0}")]
    Parse(String),

    /// Fault returned by the server
    #[error("XML-RPC fault {code}: {message}")]
    Fault { code: i32, message: String },
}
