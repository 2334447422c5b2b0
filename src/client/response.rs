use crate::{ASCOMError, ASCOMErrorCode, Error, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::any::TypeId;

/// Decoded Alpaca response body.
///
/// Every field is optional on the wire: pure commands may omit `Value`, and some servers omit the
/// error fields on success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The payload; its type depends on the endpoint.
    #[serde(rename = "Value", default)]
    pub value: serde_json::Value,
    /// `0` on success, a server-defined error number otherwise.
    #[serde(rename = "ErrorNumber", default)]
    pub error_number: ASCOMErrorCode,
    /// Human-readable error detail, empty on success.
    #[serde(rename = "ErrorMessage", default)]
    pub error_message: String,
    /// Echo of the transaction id sent by the client.
    #[serde(
        rename = "ClientTransactionID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_transaction_id: Option<u32>,
    /// Server-side transaction id.
    #[serde(
        rename = "ServerTransactionID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub server_transaction_id: Option<u32>,
}

impl Envelope {
    /// Deserialize `Value` into the type documented for `endpoint`.
    ///
    /// `()` accepts and discards any value, since command endpoints differ in what they put there.
    pub fn value_as<T: 'static + DeserializeOwned>(self, endpoint: &str) -> Result<T> {
        let value = if TypeId::of::<T>() == TypeId::of::<()>() {
            serde_json::Value::Null
        } else {
            self.value
        };

        serde_json::from_value(value).map_err(|source| Error::UnexpectedValue {
            endpoint: endpoint.to_owned(),
            source,
        })
    }
}

/// HTTP statuses that signal a failure even when `ErrorNumber` is `0`.
fn is_failure_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::INTERNAL_SERVER_ERROR
    )
}

/// Validate a raw response.
///
/// A non-zero `ErrorNumber` wins over the status line. A 400/500 status with `ErrorNumber == 0`
/// becomes [`Error::Status`] carrying `Value` as the message; Alpaca servers often answer those
/// with plain text, in which case the body itself is the message.
pub(crate) fn check_response(status: StatusCode, body: &str) -> Result<Envelope> {
    let envelope = match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => envelope,
        Err(_) if is_failure_status(status) => {
            // Plain text, or a bare JSON string instead of an envelope.
            let message = match serde_json::from_str::<serde_json::Value>(body) {
                Ok(serde_json::Value::String(message)) => message,
                _ => body.trim().to_owned(),
            };
            return Err(Error::Status { status, message });
        }
        Err(err) => return Err(err.into()),
    };

    if !envelope.error_number.is_ok() {
        return Err(ASCOMError::new(envelope.error_number, envelope.error_message).into());
    }

    if is_failure_status(status) {
        return Err(Error::Status {
            status,
            message: match envelope.value {
                serde_json::Value::String(message) => message,
                other => other.to_string(),
            },
        });
    }

    Ok(envelope)
}
