//! The request/response layer shared by every device.
//!
//! [`DeviceClient`] is bound to a single device instance and exposes the two primitives the typed
//! device wrappers are built on: [`DeviceClient::get`] and [`DeviceClient::put`]. Each call is one
//! blocking HTTP round trip; nothing is retried.

mod params;
pub use params::{ASCOMParam, Params};
pub(crate) use params::{ASCOMEnumParam, params};

mod response;
pub(crate) use response::check_response;
pub use response::Envelope;

mod transaction;
use transaction::{RequestTransaction, RequestWithTransaction};

use crate::api::DeviceType;
use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// Alpaca API version used unless configured otherwise.
pub const DEFAULT_API_VERSION: u32 = 1;

/// URL scheme used to reach the Alpaca server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Scheme {
    /// Plain HTTP.
    #[default]
    #[display("http")]
    Http,
    /// HTTP over TLS.
    #[display("https")]
    Https,
}

/// HTTP method of an Alpaca endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Method {
    /// Read a property; parameters go into the query string.
    #[display("GET")]
    Get,
    /// Set a property or run a command; parameters go into a form-encoded body.
    #[display("PUT")]
    Put,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Put => Self::PUT,
        }
    }
}

/// Settings shared by device handles.
///
/// ```
/// use alpaca_client::{ClientConfig, Scheme};
///
/// let config = ClientConfig::default()
///     .with_scheme(Scheme::Https)
///     .with_client_id(7);
/// assert_eq!(config.api_version, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL scheme.
    pub scheme: Scheme,
    /// Alpaca API version, must be at least 1.
    pub api_version: u32,
    /// Value sent as `ClientID`; random per handle if unset.
    pub client_id: Option<u32>,
    /// HTTP client to reuse across handles; a new one is built per handle if unset.
    pub http_client: Option<reqwest::blocking::Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            api_version: DEFAULT_API_VERSION,
            client_id: None,
            http_client: None,
        }
    }
}

impl ClientConfig {
    /// Set the URL scheme.
    #[must_use]
    pub const fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the Alpaca API version.
    #[must_use]
    pub const fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Set the `ClientID` sent with every request.
    #[must_use]
    pub const fn with_client_id(mut self, client_id: u32) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Reuse an existing HTTP client (connection pool, proxies, timeouts).
    #[must_use]
    pub fn with_http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }
}

/// Which device a handle talks to and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    address: String,
    device_type: DeviceType,
    device_number: u32,
    scheme: Scheme,
    api_version: u32,
    base_url: String,
}

impl DeviceIdentity {
    /// Validate the parts and compute the base URL.
    pub fn new(
        address: impl Into<String>,
        device_type: DeviceType,
        device_number: u32,
        scheme: Scheme,
        api_version: u32,
    ) -> Result<Self> {
        let address = address.into();

        if address.is_empty()
            || address.contains(['/', '?', '#'])
            || address.contains(char::is_whitespace)
        {
            return Err(Error::InvalidArgument(format!(
                "{address:?} is not a host[:port] address"
            )));
        }
        if api_version == 0 {
            return Err(Error::InvalidArgument(
                "API version must be at least 1".to_owned(),
            ));
        }

        let base_url =
            format!("{scheme}://{address}/api/v{api_version}/{device_type}/{device_number}");

        if let Err(err) = reqwest::Url::parse(&base_url) {
            return Err(Error::InvalidArgument(format!(
                "{base_url} is not a valid URL: {err}"
            )));
        }

        Ok(Self {
            address,
            device_type,
            device_number,
            scheme,
            api_version,
            base_url,
        })
    }

    /// `host[:port]` of the Alpaca server.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Device category.
    pub const fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Zero-based index of the device within its category on the server.
    pub const fn device_number(&self) -> u32 {
        self.device_number
    }

    /// URL scheme.
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Alpaca API version.
    pub const fn api_version(&self) -> u32 {
        self.api_version
    }

    /// `{scheme}://{address}/api/v{api_version}/{device_type}/{device_number}`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// A handle to one device on an Alpaca server.
///
/// Handles are immutable, so they can be shared between threads and used concurrently.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    identity: DeviceIdentity,
    http: reqwest::blocking::Client,
    client_id: u32,
}

impl DeviceClient {
    /// Create a handle with the default configuration.
    pub fn new(
        address: impl Into<String>,
        device_type: DeviceType,
        device_number: u32,
    ) -> Result<Self> {
        Self::with_config(address, device_type, device_number, &ClientConfig::default())
    }

    /// Create a handle with the given configuration.
    pub fn with_config(
        address: impl Into<String>,
        device_type: DeviceType,
        device_number: u32,
        config: &ClientConfig,
    ) -> Result<Self> {
        let identity = DeviceIdentity::new(
            address,
            device_type,
            device_number,
            config.scheme,
            config.api_version,
        )?;

        let http = match &config.http_client {
            Some(http) => http.clone(),
            None => reqwest::blocking::Client::builder().build()?,
        };

        Ok(Self {
            identity,
            http,
            client_id: config.client_id.unwrap_or_else(rand::random),
        })
    }

    /// The device this handle is bound to.
    pub const fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// Shorthand for [`DeviceIdentity::base_url`].
    pub fn base_url(&self) -> &str {
        self.identity.base_url()
    }

    /// `ClientID` sent with every request.
    pub const fn client_id(&self) -> u32 {
        self.client_id
    }

    /// GET `{base_url}/{endpoint}` and return the raw `Value`.
    pub fn get(&self, endpoint: &str, params: &Params) -> Result<serde_json::Value> {
        self.request(Method::Get, endpoint, params)
            .map(|envelope| envelope.value)
    }

    /// PUT `{base_url}/{endpoint}` and return the whole decoded body.
    pub fn put(&self, endpoint: &str, params: &Params) -> Result<Envelope> {
        self.request(Method::Put, endpoint, params)
    }

    /// [`Self::get`] with `Value` deserialized into `T`.
    pub fn get_as<T: 'static + DeserializeOwned>(&self, endpoint: &str, params: &Params) -> Result<T> {
        self.exec(Method::Get, endpoint, params)
    }

    /// [`Self::put`] with `Value` deserialized into `T`.
    pub fn put_as<T: 'static + DeserializeOwned>(&self, endpoint: &str, params: &Params) -> Result<T> {
        self.exec(Method::Put, endpoint, params)
    }

    pub(crate) fn exec<T: 'static + DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
    ) -> Result<T> {
        self.request(method, endpoint, params)?.value_as(endpoint)
    }

    fn request(&self, method: Method, endpoint: &str, params: &Params) -> Result<Envelope> {
        let transaction = RequestTransaction::new(self.client_id);

        let span = tracing::debug_span!(
            "Alpaca transaction",
            %method,
            endpoint,
            ?params,
            device = %self.identity.base_url,
            client_transaction_id = transaction.client_transaction_id,
            client_id = transaction.client_id,
        );
        let _enter = span.enter();

        let result = (|| -> Result<Envelope> {
            let wire_params = RequestWithTransaction {
                transaction,
                params,
            };

            let request = self.http.request(
                method.into(),
                format!("{}/{endpoint}", self.identity.base_url),
            );
            let request = match method {
                Method::Get => request.query(&wire_params),
                Method::Put => request.form(&wire_params),
            };

            let response = request.send()?;
            let status = response.status();
            let body = response.text()?;
            let envelope = check_response(status, &body)?;

            tracing::debug!(
                %status,
                server_transaction_id = envelope.server_transaction_id,
                "Received response",
            );
            transaction.check_echo(&envelope);

            Ok(envelope)
        })();

        match &result {
            Err(Error::Device(err)) => tracing::debug!(%err, "Device reported an error"),
            Err(err) => tracing::error!(%err, "Alpaca request failed"),
            Ok(_) => {}
        }

        result
    }
}
