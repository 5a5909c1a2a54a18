use tracing::debug;
use xmlrpc_client::{Value, XmlRpcClient};

use crate::config::ClientConfig;
use crate::domain::Domain;
use crate::error::{ApiError, Result};
use crate::operation::{CallOptions, OdooOperation, Record};
use crate::operations::object::{
    CreateOperation, CreateRequest, ReadOperation, ReadRequest, SearchOperation, SearchReadOperation,
    SearchReadRequest, SearchRequest, WriteOperation, WriteRequest,
};
use crate::service::Service;

/// A client for executing operations against one Odoo server
///
/// Connecting performs the login handshake against the common service; every
/// operation afterwards goes through the object service's `execute_kw`
/// dispatcher with the stored uid. The client bridges the stateless
/// operation definitions and the actual network requests, using the
/// xmlrpc-client crate for the underlying XML-RPC communication.
///
/// ```rust,no_run
/// use odoo_api::{ClientConfig, Domain, CallOptions, OdooClient};
///
/// # fn main() -> odoo_api::Result<()> {
/// let config = ClientConfig::new("https://erp.example.com", "mydb", "admin", "secret");
/// let client = OdooClient::connect(config)?;
///
/// let ids = client.search(
///     "res.partner",
///     Domain::new().filter("is_company", "=", true),
///     CallOptions::new().limit(10),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OdooClient {
    config: ClientConfig,
    transport: XmlRpcClient,
    uid: i64,
}

impl OdooClient {
    /// Connect and authenticate with a default transport
    pub fn connect(config: ClientConfig) -> Result<Self> {
        Self::connect_with_transport(config, XmlRpcClient::new())
    }

    /// Connect and authenticate with a custom transport (for advanced use
    /// cases and tests)
    pub fn connect_with_transport(config: ClientConfig, transport: XmlRpcClient) -> Result<Self> {
        let url = config.endpoint_url(Service::Common);
        debug!(url = %url, db = %config.db, "authenticating");

        let params = [
            Value::from(config.db.as_str()),
            Value::from(config.username.as_str()),
            Value::from(config.password.as_str()),
            Value::Struct(Default::default()),
        ];
        let result = transport.call(&url, "authenticate", &params)?;

        // A falsy result means the server rejected the credentials without
        // raising a fault
        let uid = match result {
            Value::Int(uid) if uid > 0 => uid,
            Value::Int(_) | Value::Bool(false) => return Err(ApiError::AuthenticationFailed),
            other => {
                return Err(ApiError::UnexpectedResponse(format!(
                    "authenticate returned {other:?}"
                )))
            }
        };

        debug!(uid, "authenticated");
        Ok(Self {
            config,
            transport,
            uid,
        })
    }

    /// The user id the server assigned at login
    pub fn uid(&self) -> i64 {
        self.uid
    }

    /// Execute an operation against a model
    ///
    /// Assembles the canonical `execute_kw` parameter list
    /// `[db, uid, password, model, method, args, kwargs]`, performs the
    /// call on the object service, and parses the result.
    pub fn execute<Op: OdooOperation>(
        &self,
        model: &str,
        request: &Op::Request,
    ) -> Result<Op::Response> {
        let url = self.config.endpoint_url(Service::Object);
        let args = Op::build_args(request);
        let kwargs = Op::build_kwargs(request);

        debug!(model, method = Op::METHOD, "executing");

        let params = [
            Value::from(self.config.db.as_str()),
            Value::Int(self.uid),
            Value::from(self.config.password.as_str()),
            Value::from(model),
            Value::from(Op::METHOD),
            Value::Array(args),
            Value::Struct(kwargs),
        ];
        let value = self.transport.call(&url, "execute_kw", &params)?;

        debug!(model, method = Op::METHOD, "completed");
        Op::parse_response(&value)
    }

    /// Find the ids of records matching a domain
    pub fn search(&self, model: &str, domain: Domain, options: CallOptions) -> Result<Vec<i64>> {
        self.execute::<SearchOperation>(model, &SearchRequest { domain, options })
    }

    /// Fetch the given fields for known record ids
    pub fn read(
        &self,
        model: &str,
        ids: &[i64],
        fields: &[&str],
        options: CallOptions,
    ) -> Result<Vec<Record>> {
        self.execute::<ReadOperation>(
            model,
            &ReadRequest {
                ids: ids.to_vec(),
                fields: owned_fields(fields),
                options,
            },
        )
    }

    /// Search and read in a single round-trip
    pub fn search_read(
        &self,
        model: &str,
        domain: Domain,
        fields: &[&str],
        options: CallOptions,
    ) -> Result<Vec<Record>> {
        self.execute::<SearchReadOperation>(
            model,
            &SearchReadRequest {
                domain,
                fields: owned_fields(fields),
                options,
            },
        )
    }

    /// Create one record, returning its id
    pub fn create(&self, model: &str, values: Record) -> Result<i64> {
        self.execute::<CreateOperation>(
            model,
            &CreateRequest {
                values,
                options: CallOptions::new(),
            },
        )
    }

    /// Update fields on existing records
    pub fn write(&self, model: &str, ids: &[i64], values: Record) -> Result<bool> {
        self.execute::<WriteOperation>(
            model,
            &WriteRequest {
                ids: ids.to_vec(),
                values,
                options: CallOptions::new(),
            },
        )
    }

    /// A handle bound to one model
    ///
    /// The handle exposes the same operations without the repeated `model`
    /// parameter; binding the model once also makes it impossible to name a
    /// conflicting model per call.
    pub fn model(&self, name: impl Into<String>) -> ModelClient<'_> {
        ModelClient {
            client: self,
            model: name.into(),
        }
    }
}

fn owned_fields(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// An `OdooClient` view bound to a single model
#[derive(Debug, Clone)]
pub struct ModelClient<'a> {
    client: &'a OdooClient,
    model: String,
}

impl ModelClient<'_> {
    /// The model this handle is bound to
    pub fn name(&self) -> &str {
        &self.model
    }

    pub fn search(&self, domain: Domain, options: CallOptions) -> Result<Vec<i64>> {
        self.client.search(&self.model, domain, options)
    }

    pub fn read(&self, ids: &[i64], fields: &[&str], options: CallOptions) -> Result<Vec<Record>> {
        self.client.read(&self.model, ids, fields, options)
    }

    pub fn search_read(
        &self,
        domain: Domain,
        fields: &[&str],
        options: CallOptions,
    ) -> Result<Vec<Record>> {
        self.client.search_read(&self.model, domain, fields, options)
    }

    pub fn create(&self, values: Record) -> Result<i64> {
        self.client.create(&self.model, values)
    }

    pub fn write(&self, ids: &[i64], values: Record) -> Result<bool> {
        self.client.write(&self.model, ids, values)
    }
}
