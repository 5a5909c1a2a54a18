//! Dynamic value model for XML-RPC parameters and results

use std::collections::BTreeMap;

use xmltree::{Element, XMLNode};

use crate::XmlRpcError;

/// A dynamically typed XML-RPC value
///
/// Covers the scalar and compound types the protocol defines, plus the
/// widely deployed `<nil/>` extension. Date/time values are kept as the
/// ISO-8601 text the server sent, without interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Double(f64),
    String(String),
    DateTime(String),
    Array(Vec<Value>),
    Struct(BTreeMap<String, Value>),
    Nil,
}

impl Value {
    /// Serialize this value as a `<value>` element into `out`
    pub fn write_xml(&self, out: &mut String) {
        out.push_str("<value>");
        match self {
            Value::Int(i) => {
                out.push_str("<int>");
                out.push_str(&i.to_string());
                out.push_str("</int>");
            }
            Value::Bool(b) => {
                out.push_str("<boolean>");
                out.push(if *b { '1' } else { '0' });
                out.push_str("</boolean>");
            }
            Value::Double(d) => {
                out.push_str("<double>");
                out.push_str(&d.to_string());
                out.push_str("</double>");
            }
            Value::String(s) => {
                out.push_str("<string>");
                push_escaped(out, s);
                out.push_str("</string>");
            }
            Value::DateTime(s) => {
                out.push_str("<dateTime.iso8601>");
                push_escaped(out, s);
                out.push_str("</dateTime.iso8601>");
            }
            Value::Array(items) => {
                out.push_str("<array><data>");
                for item in items {
                    item.write_xml(out);
                }
                out.push_str("</data></array>");
            }
            Value::Struct(members) => {
                out.push_str("<struct>");
                for (name, value) in members {
                    out.push_str("<member><name>");
                    push_escaped(out, name);
                    out.push_str("</name>");
                    value.write_xml(out);
                    out.push_str("</member>");
                }
                out.push_str("</struct>");
            }
            Value::Nil => out.push_str("<nil/>"),
        }
        out.push_str("</value>");
    }

    /// Decode a `<value>` element into a `Value`
    ///
    /// A `<value>` with no type element decodes as a string, per the
    /// protocol's default-type rule.
    pub fn from_element(element: &Element) -> Result<Value, XmlRpcError> {
        let typed = element.children.iter().find_map(XMLNode::as_element);

        let Some(typed) = typed else {
            let text = element.get_text().map(|t| t.to_string()).unwrap_or_default();
            return Ok(Value::String(text));
        };

        let text = || typed.get_text().map(|t| t.to_string()).unwrap_or_default();

        match typed.name.as_str() {
            "i4" | "int" => text()
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| XmlRpcError::Parse(format!("Invalid integer value: {}", text()))),
            "boolean" => match text().trim() {
                "0" => Ok(Value::Bool(false)),
                "1" => Ok(Value::Bool(true)),
                other => Err(XmlRpcError::Parse(format!("Invalid boolean value: {other}"))),
            },
            "double" => text()
                .trim()
                .parse::<f64>()
                .map(Value::Double)
                .map_err(|_| XmlRpcError::Parse(format!("Invalid double value: {}", text()))),
            "string" => Ok(Value::String(text())),
            "dateTime.iso8601" => Ok(Value::DateTime(text())),
            "nil" => Ok(Value::Nil),
            "array" => {
                let data = typed
                    .get_child("data")
                    .ok_or_else(|| XmlRpcError::Parse("Missing data element in array".to_string()))?;
                let items = data
                    .children
                    .iter()
                    .filter_map(XMLNode::as_element)
                    .map(Value::from_element)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(items))
            }
            "struct" => {
                let mut members = BTreeMap::new();
                for member in typed.children.iter().filter_map(XMLNode::as_element) {
                    if member.name != "member" {
                        continue;
                    }
                    let name = member
                        .get_child("name")
                        .and_then(|n| n.get_text())
                        .ok_or_else(|| {
                            XmlRpcError::Parse("Missing name element in struct member".to_string())
                        })?
                        .to_string();
                    let value = member.get_child("value").ok_or_else(|| {
                        XmlRpcError::Parse("Missing value element in struct member".to_string())
                    })?;
                    members.insert(name, Value::from_element(value)?);
                }
                Ok(Value::Struct(members))
            }
            other => Err(XmlRpcError::Parse(format!("Unknown value type: {other}"))),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Struct(members) => Some(members),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(members: BTreeMap<String, Value>) -> Self {
        Value::Struct(members)
    }
}

/// Append `s` to `out` with the XML special characters escaped
fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &Value) -> String {
        let mut out = String::new();
        value.write_xml(&mut out);
        out
    }

    fn decode(xml: &str) -> Result<Value, XmlRpcError> {
        let element = Element::parse(xml.as_bytes()).unwrap();
        Value::from_element(&element)
    }

    #[test]
    fn test_scalar_encoding() {
        assert_eq!(encode(&Value::Int(42)), "<value><int>42</int></value>");
        assert_eq!(encode(&Value::Bool(true)), "<value><boolean>1</boolean></value>");
        assert_eq!(encode(&Value::Bool(false)), "<value><boolean>0</boolean></value>");
        assert_eq!(encode(&Value::Double(1.5)), "<value><double>1.5</double></value>");
        assert_eq!(encode(&Value::Nil), "<value><nil/></value>");
    }

    #[test]
    fn test_string_encoding_escapes_markup() {
        let value = Value::String("a & b <c>".to_string());
        assert_eq!(
            encode(&value),
            "<value><string>a &amp; b &lt;c&gt;</string></value>"
        );
    }

    #[test]
    fn test_array_encoding() {
        let value = Value::Array(vec![Value::Int(1), Value::from("x")]);
        assert_eq!(
            encode(&value),
            "<value><array><data><value><int>1</int></value><value><string>x</string></value></data></array></value>"
        );
    }

    #[test]
    fn test_struct_encoding() {
        let mut members = BTreeMap::new();
        members.insert("limit".to_string(), Value::Int(5));
        let value = Value::Struct(members);
        assert_eq!(
            encode(&value),
            "<value><struct><member><name>limit</name><value><int>5</int></value></member></struct></value>"
        );
    }

    #[test]
    fn test_scalar_decoding() {
        assert_eq!(decode("<value><int>7</int></value>").unwrap(), Value::Int(7));
        assert_eq!(decode("<value><i4>-3</i4></value>").unwrap(), Value::Int(-3));
        assert_eq!(decode("<value><boolean>1</boolean></value>").unwrap(), Value::Bool(true));
        assert_eq!(decode("<value><double>2.5</double></value>").unwrap(), Value::Double(2.5));
        assert_eq!(
            decode("<value><string>hello</string></value>").unwrap(),
            Value::String("hello".to_string())
        );
        assert_eq!(decode("<value><nil/></value>").unwrap(), Value::Nil);
    }

    #[test]
    fn test_bare_text_decodes_as_string() {
        assert_eq!(
            decode("<value>untyped</value>").unwrap(),
            Value::String("untyped".to_string())
        );
    }

    #[test]
    fn test_empty_values_decode_as_empty_string() {
        assert_eq!(decode("<value></value>").unwrap(), Value::String(String::new()));
        assert_eq!(
            decode("<value><string></string></value>").unwrap(),
            Value::String(String::new())
        );
    }

    #[test]
    fn test_datetime_kept_verbatim() {
        assert_eq!(
            decode("<value><dateTime.iso8601>20240131T10:20:30</dateTime.iso8601></value>").unwrap(),
            Value::DateTime("20240131T10:20:30".to_string())
        );
    }

    #[test]
    fn test_nested_array_decoding() {
        let xml = r#"
            <value>
                <array>
                    <data>
                        <value><int>1</int></value>
                        <value>
                            <array>
                                <data>
                                    <value><string>name</string></value>
                                </data>
                            </array>
                        </value>
                    </data>
                </array>
            </value>
        "#;
        let decoded = decode(xml).unwrap();
        let items = decoded.as_array().unwrap();
        assert_eq!(items[0], Value::Int(1));
        assert_eq!(
            items[1].as_array().unwrap()[0],
            Value::String("name".to_string())
        );
    }

    #[test]
    fn test_struct_decoding() {
        let xml = r#"
            <value>
                <struct>
                    <member>
                        <name>id</name>
                        <value><int>9</int></value>
                    </member>
                    <member>
                        <name>name</name>
                        <value><string>Azure Interior</string></value>
                    </member>
                </struct>
            </value>
        "#;
        let decoded = decode(xml).unwrap();
        let members = decoded.as_struct().unwrap();
        assert_eq!(members["id"], Value::Int(9));
        assert_eq!(members["name"], Value::String("Azure Interior".to_string()));
    }

    #[test]
    fn test_invalid_boolean_rejected() {
        let result = decode("<value><boolean>yes</boolean></value>");
        assert!(matches!(result, Err(XmlRpcError::Parse(_))));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = decode("<value><base64>AAEC</base64></value>");
        match result {
            Err(XmlRpcError::Parse(msg)) => assert!(msg.contains("base64")),
            _ => panic!("Expected XmlRpcError::Parse"),
        }
    }

    #[test]
    fn test_struct_member_missing_value_rejected() {
        let xml = "<value><struct><member><name>id</name></member></struct></value>";
        let result = decode(xml);
        match result {
            Err(XmlRpcError::Parse(msg)) => assert!(msg.contains("Missing value")),
            _ => panic!("Expected XmlRpcError::Parse"),
        }
    }

    #[test]
    fn test_roundtrip_of_compound_value() {
        let mut members = BTreeMap::new();
        members.insert("name".to_string(), Value::from("Deco & Sons"));
        members.insert("ids".to_string(), Value::Array(vec![Value::Int(1), Value::Int(2)]));
        let original = Value::Struct(members);

        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded, original);
    }
}
