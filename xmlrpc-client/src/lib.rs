//! Private XML-RPC client for Odoo server communication
//!
//! This crate provides a minimal XML-RPC client specifically designed for
//! talking to Odoo's external API endpoints. It builds `<methodCall>`
//! envelopes, parses `<methodResponse>` envelopes, and surfaces server-side
//! `<fault>` payloads as typed errors.

mod error;
mod value;

pub use error::XmlRpcError;
pub use value::Value;

use std::time::Duration;
use xmltree::Element;

/// A minimal XML-RPC client for Odoo server communication
#[derive(Debug, Clone)]
pub struct XmlRpcClient {
    agent: ureq::Agent,
}

impl XmlRpcClient {
    /// Create a new XML-RPC client with default configuration
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
        }
    }

    /// Send an XML-RPC request and return the decoded result value
    pub fn call(&self, url: &str, method: &str, params: &[Value]) -> Result<Value, XmlRpcError> {
        let body = build_request(method, params);

        let response = self
            .agent
            .post(url)
            .set("Content-Type", "text/xml")
            .send_string(&body)
            .map_err(|e| XmlRpcError::Network(e.to_string()))?;

        let xml_text = response
            .into_string()
            .map_err(|e| XmlRpcError::Network(e.to_string()))?;

        let xml = Element::parse(xml_text.as_bytes())
            .map_err(|e| XmlRpcError::Parse(e.to_string()))?;

        // Extract the result or surface a fault
        self.extract_response(&xml)
    }

    fn extract_response(&self, xml: &Element) -> Result<Value, XmlRpcError> {
        // A well-formed response carries either a fault or params, never both
        if let Some(fault) = xml.get_child("fault") {
            let value = fault
                .get_child("value")
                .ok_or_else(|| XmlRpcError::Parse("Missing value element in fault".to_string()))?;
            return Err(decode_fault(&Value::from_element(value)?));
        }

        let value = xml
            .get_child("params")
            .and_then(|p| p.get_child("param"))
            .and_then(|p| p.get_child("value"))
            .ok_or_else(|| XmlRpcError::Parse("Missing params in method response".to_string()))?;

        Value::from_element(value)
    }
}

impl Default for XmlRpcClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a complete `<methodCall>` request body
fn build_request(method: &str, params: &[Value]) -> String {
    let mut body = String::from("<?xml version=\"1.0\"?><methodCall><methodName>");
    for c in method.chars() {
        match c {
            '&' => body.push_str("&amp;"),
            '<' => body.push_str("&lt;"),
            '>' => body.push_str("&gt;"),
            _ => body.push(c),
        }
    }
    body.push_str("</methodName><params>");
    for param in params {
        body.push_str("<param>");
        param.write_xml(&mut body);
        body.push_str("</param>");
    }
    body.push_str("</params></methodCall>");
    body
}

/// Decode a fault struct into an `XmlRpcError::Fault`
///
/// Odoo reports `faultCode` as an int on the `/xmlrpc/2/` endpoints, but
/// string codes exist in the wild; those are parsed leniently and fall back
/// to 0.
fn decode_fault(value: &Value) -> XmlRpcError {
    let members = match value.as_struct() {
        Some(members) => members,
        None => {
            return XmlRpcError::Parse("Fault value is not a struct".to_string());
        }
    };

    let code = match members.get("faultCode") {
        Some(Value::Int(code)) => *code as i32,
        Some(Value::String(code)) => code.parse().unwrap_or(0),
        _ => 0,
    };

    let message = match members.get("faultString") {
        Some(Value::String(message)) => message.clone(),
        _ => String::new(),
    };

    XmlRpcError::Fault { code, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let _client = XmlRpcClient::new();
        let _default_client = XmlRpcClient::default();
    }

    #[test]
    fn test_build_request_with_params() {
        let body = build_request("authenticate", &[Value::from("mydb"), Value::Int(2)]);
        assert_eq!(
            body,
            "<?xml version=\"1.0\"?><methodCall><methodName>authenticate</methodName>\
             <params><param><value><string>mydb</string></value></param>\
             <param><value><int>2</int></value></param></params></methodCall>"
        );
    }

    #[test]
    fn test_build_request_escapes_method_name() {
        let body = build_request("a<b", &[]);
        assert!(body.contains("<methodName>a&lt;b</methodName>"));
    }

    #[test]
    fn test_extract_response_with_valid_result() {
        let client = XmlRpcClient::new();

        let xml_str = r#"
            <methodResponse>
                <params>
                    <param>
                        <value><int>7</int></value>
                    </param>
                </params>
            </methodResponse>
        "#;

        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        let result = client.extract_response(&xml).unwrap();
        assert_eq!(result, Value::Int(7));
    }

    #[test]
    fn test_extract_response_with_fault() {
        let client = XmlRpcClient::new();

        let xml_str = r#"
            <methodResponse>
                <fault>
                    <value>
                        <struct>
                            <member>
                                <name>faultCode</name>
                                <value><int>2</int></value>
                            </member>
                            <member>
                                <name>faultString</name>
                                <value><string>Access Denied</string></value>
                            </member>
                        </struct>
                    </value>
                </fault>
            </methodResponse>
        "#;

        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        let result = client.extract_response(&xml);

        match result.unwrap_err() {
            XmlRpcError::Fault { code, message } => {
                assert_eq!(code, 2);
                assert_eq!(message, "Access Denied");
            }
            _ => panic!("Expected XmlRpcError::Fault"),
        }
    }

    #[test]
    fn test_extract_response_with_string_fault_code() {
        let client = XmlRpcClient::new();

        let xml_str = r#"
            <methodResponse>
                <fault>
                    <value>
                        <struct>
                            <member>
                                <name>faultCode</name>
                                <value><string>AccessDenied</string></value>
                            </member>
                            <member>
                                <name>faultString</name>
                                <value><string>Access Denied</string></value>
                            </member>
                        </struct>
                    </value>
                </fault>
            </methodResponse>
        "#;

        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        match client.extract_response(&xml).unwrap_err() {
            XmlRpcError::Fault { code, message } => {
                assert_eq!(code, 0); // Unparseable string code
                assert_eq!(message, "Access Denied");
            }
            _ => panic!("Expected XmlRpcError::Fault"),
        }
    }

    #[test]
    fn test_extract_response_missing_params() {
        let client = XmlRpcClient::new();

        let xml_str = r#"<methodResponse></methodResponse>"#;

        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        let result = client.extract_response(&xml);

        match result.unwrap_err() {
            XmlRpcError::Parse(msg) => assert!(msg.contains("Missing params")),
            _ => panic!("Expected XmlRpcError::Parse"),
        }
    }

    #[test]
    fn test_extract_response_fault_without_struct() {
        let client = XmlRpcClient::new();

        let xml_str = r#"
            <methodResponse>
                <fault>
                    <value><string>broken</string></value>
                </fault>
            </methodResponse>
        "#;

        let xml = Element::parse(xml_str.as_bytes()).unwrap();
        match client.extract_response(&xml).unwrap_err() {
            XmlRpcError::Parse(msg) => assert!(msg.contains("not a struct")),
            _ => panic!("Expected XmlRpcError::Parse"),
        }
    }
}
