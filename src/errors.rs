use crate::date_time::DateTimeError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// Alpaca representation of an ASCOM error code.
///
/// Servers are free to report any non-zero number, so decoding never rejects a code.
/// Use [`TryFrom`] when you need to check that a code lies in the range reserved by ASCOM.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ASCOMErrorCode(i32);

impl TryFrom<i32> for ASCOMErrorCode {
    type Error = eyre::Error;

    /// Convert a raw error code into an `ASCOMErrorCode` if it's in the valid range.
    fn try_from(raw: i32) -> eyre::Result<Self> {
        let range = BASE..=MAX;
        eyre::ensure!(
            range.contains(&raw),
            "Error code {raw:#X} is out of valid range ({range:#X?})",
        );
        Ok(Self(raw))
    }
}

/// The starting value for error numbers.
const BASE: i32 = 0x400;
/// The starting value for driver-specific error numbers.
const DRIVER_BASE: i32 = 0x500;
/// The maximum value for error numbers.
const MAX: i32 = 0xFFF;

impl ASCOMErrorCode {
    /// Wrap a raw error number exactly as received from a server.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Generate ASCOM error code from a zero-based driver error code.
    ///
    /// Will panic if the driver error code is larger than the maximum allowed (2815).
    #[allow(clippy::as_conversions)] // lossless, `From` isn't const
    pub const fn new_for_driver(driver_code: u16) -> Self {
        const DRIVER_MAX: u16 = 0xFFF - 0x500;

        assert!(driver_code <= DRIVER_MAX, "Driver error code is too large");

        Self(DRIVER_BASE + driver_code as i32)
    }

    /// Get the driver-specific error code.
    ///
    /// Returns `Ok` with `0`-based driver error code if this is a driver error.
    /// Returns `Err` with raw error code if not a driver error.
    pub const fn as_driver_error(self) -> Result<i32, i32> {
        if self.0 >= DRIVER_BASE && self.0 <= MAX {
            Ok(self.0 - DRIVER_BASE)
        } else {
            Err(self.0)
        }
    }

    /// Get the raw error code.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whether this is the "no error" code.
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }
}

/// ASCOM error reported by the device through the `ErrorNumber` / `ErrorMessage` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Error {}: {}", .code.raw(), .message)]
pub struct ASCOMError {
    /// Error number.
    #[serde(rename = "ErrorNumber")]
    pub code: ASCOMErrorCode,
    /// Error message.
    #[serde(rename = "ErrorMessage")]
    pub message: Cow<'static, str>,
}

impl ASCOMError {
    /// Create a new `ASCOMError` from given error code and a message.
    pub fn new(code: ASCOMErrorCode, message: impl std::fmt::Display) -> Self {
        Self {
            code,
            message: message.to_string().into(),
        }
    }
}

macro_rules! ascom_error_codes {
    ($(#[doc = $doc:literal] $name:ident = $value:literal,)*) => {
        impl ASCOMErrorCode {
            $(
                #[doc = $doc]
                pub const $name: Self = Self($value);
            )*
        }

        impl std::fmt::Debug for ASCOMErrorCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match *self {
                    $(
                        Self::$name => f.write_str(stringify!($name)),
                    )*
                    _ => match self.as_driver_error() {
                        Ok(driver_code) => write!(f, "DRIVER_ERROR[{driver_code}]"),
                        Err(raw_code) => write!(f, "{raw_code:#X}"),
                    },
                }
            }
        }

        impl std::fmt::Display for ASCOMErrorCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

ascom_error_codes! {
    #[doc = "Success"]
    OK = 0,
    #[doc = "Property or method not implemented"]
    NOT_IMPLEMENTED = 0x400,
    #[doc = "Invalid value"]
    INVALID_VALUE = 0x401,
    #[doc = "A value has not been set"]
    VALUE_NOT_SET = 0x402,
    #[doc = "The communications channel is not connected"]
    NOT_CONNECTED = 0x407,
    #[doc = "The attempted operation is invalid because the mount is currently in a Parked state"]
    INVALID_WHILE_PARKED = 0x408,
    #[doc = "The attempted operation is invalid because the mount is currently in a Slaved state"]
    INVALID_WHILE_SLAVED = 0x409,
    #[doc = "The requested operation can not be undertaken at this time"]
    INVALID_OPERATION = 0x40B,
    #[doc = "The requested action is not implemented in this driver"]
    ACTION_NOT_IMPLEMENTED = 0x40C,
}

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The device reported a non-zero `ErrorNumber`.
    #[error(transparent)]
    Device(#[from] ASCOMError),

    /// The server answered with HTTP 400 or 500 while leaving `ErrorNumber` at zero.
    ///
    /// `message` holds whatever the server put into `Value` (or the raw body if it wasn't JSON).
    #[error("{message}")]
    Status {
        /// HTTP status of the response.
        status: reqwest::StatusCode,
        /// Message sent by the server.
        message: String,
    },

    /// A timestamp couldn't be parsed or converted.
    #[error(transparent)]
    DateTime(#[from] DateTimeError),

    /// An argument can't be used to address a device or build a request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The `Value` field doesn't have the type documented for the endpoint.
    #[error("Unexpected value returned by {endpoint}: {source}")]
    UnexpectedValue {
        /// Endpoint that returned the value.
        endpoint: String,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP request itself failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not a valid Alpaca JSON envelope.
    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The ASCOM error code if this is an error reported by the device.
    pub const fn ascom_code(&self) -> Option<ASCOMErrorCode> {
        match self {
            Self::Device(err) => Some(err.code),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numeric_error() {
        let err = ASCOMError::new(ASCOMErrorCode::from_raw(1025), "Not connected");
        assert_eq!(err.to_string(), "Error 1025: Not connected");

        // Wrapping in the crate error must not change the message.
        assert_eq!(Error::from(err).to_string(), "Error 1025: Not connected");
    }

    #[test]
    fn code_debug_names() {
        assert_eq!(format!("{:?}", ASCOMErrorCode::NOT_CONNECTED), "NOT_CONNECTED");
        assert_eq!(
            format!("{:?}", ASCOMErrorCode::new_for_driver(3)),
            "DRIVER_ERROR[3]"
        );
        assert_eq!(format!("{:?}", ASCOMErrorCode::from_raw(0x4AB)), "0x4AB");
    }

    #[test]
    fn driver_codes() {
        assert_eq!(ASCOMErrorCode::new_for_driver(7).as_driver_error(), Ok(7));
        assert_eq!(
            ASCOMErrorCode::INVALID_VALUE.as_driver_error(),
            Err(0x401)
        );
    }

    #[test]
    fn checked_conversion() {
        assert!(ASCOMErrorCode::try_from(0x407).is_ok());
        assert!(ASCOMErrorCode::try_from(0).is_err());
        assert!(ASCOMErrorCode::try_from(0x1000).is_err());
    }

    #[test]
    fn status_error_displays_message() {
        let err = Error::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            message: "bad request".to_owned(),
        };
        assert_eq!(err.to_string(), "bad request");
        assert_eq!(err.ascom_code(), None);
    }
}
