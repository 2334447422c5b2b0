/*!
Blocking client for the [ASCOM Alpaca](https://ascom-standards.org/api/) REST API.

Every device handle is bound to one device on one Alpaca server and exposes one method per Alpaca endpoint.
Each method performs a single HTTP round trip and either returns the decoded `Value` or an [`Error`].

```no_run
use alpaca_client::{Device, Telescope};

let telescope = Telescope::new("localhost:11111", 0)?;
println!("{} tracking: {}", telescope.name()?, telescope.tracking()?);
telescope.slew_to_coordinates_async(5.5, -12.25)?;
# Ok::<_, alpaca_client::Error>(())
```

Devices without a typed wrapper can be reached through [`DeviceClient::get`] / [`DeviceClient::put`].

## Features

Each typed device is behind a cargo feature named after it (`telescope`, `dome`, `filter_wheel`, `switch`,
`safety_monitor`); `all-devices` enables all of them and is on by default.
*/

mod macros;

pub mod api;
pub mod client;
mod date_time;
mod errors;

#[cfg(test)]
mod test;

pub use api::{Device, DeviceType};
#[cfg(feature = "dome")]
pub use api::Dome;
#[cfg(feature = "filter_wheel")]
pub use api::FilterWheel;
#[cfg(feature = "safety_monitor")]
pub use api::SafetyMonitor;
#[cfg(feature = "switch")]
pub use api::Switch;
#[cfg(feature = "telescope")]
pub use api::Telescope;
pub use client::{
    ASCOMParam, ClientConfig, DEFAULT_API_VERSION, DeviceClient, DeviceIdentity, Envelope, Method,
    Params, Scheme,
};
pub use date_time::{DateTime, DateTimeError, UtcDate};
pub use errors::{ASCOMError, ASCOMErrorCode, Error, Result};
