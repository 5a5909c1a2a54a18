/// The external XML-RPC services exposed by an Odoo server
///
/// Every Odoo instance exposes the external API as two endpoints: a
/// meta/login service and the object execution service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Common service - login handshake and server metadata
    Common,

    /// Object service - model method execution via `execute_kw`
    Object,
}

/// Contains the endpoint information for an Odoo service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// The HTTP endpoint path for this service (relative to the server base URL)
    pub endpoint: &'static str,
}

impl Service {
    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            Service::Common => "Common",
            Service::Object => "Object",
        }
    }

    /// Get the endpoint information for this service
    pub fn info(&self) -> ServiceInfo {
        match self {
            Service::Common => ServiceInfo {
                endpoint: "xmlrpc/2/common",
            },
            Service::Object => ServiceInfo {
                endpoint: "xmlrpc/2/object",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_endpoints() {
        assert_eq!(Service::Common.info().endpoint, "xmlrpc/2/common");
        assert_eq!(Service::Object.info().endpoint, "xmlrpc/2/object");
    }

    #[test]
    fn test_service_names() {
        assert_eq!(Service::Common.name(), "Common");
        assert_eq!(Service::Object.name(), "Object");
    }
}
