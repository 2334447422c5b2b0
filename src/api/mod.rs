/*!
Typed wrappers for the ASCOM Alpaca Device API v1.

**Alpaca Device API URLs** are of the form **http(s)://host:port/api/v1/{device_type}/{device_number}/{method}**,
e.g. a telescope "Interface Version" method URL would be **http://192.168.1.89:7843/api/v1/telescope/0/interfaceversion**.

URLs are case sensitive and all elements must be in lower case. For GET operations, parameters are placed in the
URL query string and for PUT operations they are placed in the form-encoded body of the message.
Responses are returned in JSON format and always include an error number and an error message;
a successful transaction has `ErrorNumber` zero.

## HTTP Status Codes and ASCOM Error codes
A `200` status does not necessarily mean that the operation completed as expected, so the `ErrorNumber` field is
always checked first. An HTTP status code of `400` indicates that the device could not interpret the request and
`500` indicates an unexpected error within the device; both are reported as [`Error::Status`](crate::Error::Status).
*/

#![allow(clippy::doc_markdown)]

#[macro_use]
mod macros;

/// Types related to the general [`Device`] trait.
pub mod device;
pub use device::Device;

rpc_mod! {
    #[cfg(feature = "dome")]
    Dome,

    #[cfg(feature = "filter_wheel")]
    FilterWheel,

    #[cfg(feature = "safety_monitor")]
    SafetyMonitor,

    #[cfg(feature = "switch")]
    Switch,

    #[cfg(feature = "telescope")]
    Telescope,
}

/// Alpaca device category, rendered as the lower-case token used in URLs.
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    derive_more::Display,
)]
#[expect(missing_docs)] // self-explanatory variants
pub enum DeviceType {
    #[display("camera")]
    Camera,
    #[display("covercalibrator")]
    CoverCalibrator,
    #[display("dome")]
    Dome,
    #[display("filterwheel")]
    FilterWheel,
    #[display("focuser")]
    Focuser,
    #[display("observingconditions")]
    ObservingConditions,
    #[display("rotator")]
    Rotator,
    #[display("safetymonitor")]
    SafetyMonitor,
    #[display("switch")]
    Switch,
    #[display("telescope")]
    Telescope,
}

#[cfg(test)]
mod tests {
    use super::DeviceType;

    const fn assert_send_sync<T: Send + Sync>() {}

    // Handles are shared across threads without extra synchronization.
    const _: () = {
        assert_send_sync::<crate::DeviceClient>();
        #[cfg(feature = "dome")]
        assert_send_sync::<super::Dome>();
        #[cfg(feature = "filter_wheel")]
        assert_send_sync::<super::FilterWheel>();
        #[cfg(feature = "safety_monitor")]
        assert_send_sync::<super::SafetyMonitor>();
        #[cfg(feature = "switch")]
        assert_send_sync::<super::Switch>();
        #[cfg(feature = "telescope")]
        assert_send_sync::<super::Telescope>();
    };

    #[test]
    fn url_tokens() {
        assert_eq!(DeviceType::Telescope.to_string(), "telescope");
        assert_eq!(DeviceType::FilterWheel.to_string(), "filterwheel");
        assert_eq!(DeviceType::SafetyMonitor.to_string(), "safetymonitor");
        assert_eq!(
            DeviceType::ObservingConditions.to_string(),
            "observingconditions"
        );
    }
}
