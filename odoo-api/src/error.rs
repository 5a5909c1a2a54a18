use thiserror::Error;
use xmlrpc_client::XmlRpcError;

/// High-level API errors for Odoo operations
///
/// This enum provides domain-specific error types that abstract away the
/// underlying XML-RPC communication details and give meaningful error
/// information for the common failure scenarios when talking to an Odoo
/// server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// This error occurs when there are network-level issues communicating
    /// with the server, such as connection timeouts, DNS resolution
    /// failures, or the server being unreachable.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsing error
    ///
    /// This error occurs when the server returns a response whose XML
    /// cannot be parsed into a method response envelope or value.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Fault raised by the server
    ///
    /// The remote side rejected the call; `message` carries the server's
    /// fault string verbatim.
    #[error("Server fault {code}: {message}")]
    Fault { code: i32, message: String },

    /// The login handshake returned a falsy user id
    #[error("Authentication failed: server rejected the credentials")]
    AuthenticationFailed,

    /// The call succeeded but the result had the wrong shape for the
    /// operation, e.g. a non-array result from `search`
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<XmlRpcError> for ApiError {
    fn from(error: XmlRpcError) -> Self {
        match error {
            XmlRpcError::Network(msg) => ApiError::Network(msg),
            XmlRpcError::Parse(msg) => ApiError::Parse(msg),
            XmlRpcError::Fault { code, message } => ApiError::Fault { code, message },
        }
    }
}
