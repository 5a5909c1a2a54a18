//! Typed construction of Odoo search domains
//!
//! A search domain is a polish-notation list of condition triples
//! `(field, operator, value)` optionally prefixed by the logical operators
//! `&`, `|` and `!`. The server evaluates the domain; this module only
//! builds the wire shape, so the operator strings pass through verbatim.

use xmlrpc_client::Value;

/// An Odoo search domain
///
/// An empty domain matches every record of the model.
///
/// # Example
/// ```
/// use odoo_api::Domain;
///
/// let domain = Domain::new()
///     .or()
///     .filter("is_company", "=", true)
///     .filter("customer_rank", ">", 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Domain {
    items: Vec<DomainItem>,
}

#[derive(Debug, Clone, PartialEq)]
enum DomainItem {
    Condition {
        field: String,
        operator: String,
        value: Value,
    },
    Prefix(&'static str),
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a condition triple
    pub fn filter(
        mut self,
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.items.push(DomainItem::Condition {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        });
        self
    }

    /// Push the `&` prefix operator (both following terms must match)
    pub fn and(mut self) -> Self {
        self.items.push(DomainItem::Prefix("&"));
        self
    }

    /// Push the `|` prefix operator (either following term may match)
    pub fn or(mut self) -> Self {
        self.items.push(DomainItem::Prefix("|"));
        self
    }

    /// Push the `!` prefix operator (negates the following term)
    pub fn negate(mut self) -> Self {
        self.items.push(DomainItem::Prefix("!"));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Encode as the array-of-arrays shape `execute_kw` expects
    pub fn to_value(&self) -> Value {
        let items = self
            .items
            .iter()
            .map(|item| match item {
                DomainItem::Condition {
                    field,
                    operator,
                    value,
                } => Value::Array(vec![
                    Value::from(field.as_str()),
                    Value::from(operator.as_str()),
                    value.clone(),
                ]),
                DomainItem::Prefix(op) => Value::from(*op),
            })
            .collect();
        Value::Array(items)
    }
}
