use crate::Result;
use macro_rules_attribute::apply;
use serde::{Deserialize, Deserializer, Serialize};

/// ASCOM Methods Common To All Devices.
#[apply(rpc_trait)]
pub trait Device {
    /// Actions and SupportedActions are a standardised means for drivers to extend functionality beyond the built-in capabilities of the ASCOM device interfaces.
    ///
    /// The key advantage of using Actions is that drivers can expose any device specific functionality required. The downside is that, in order to use these unique features, every application author would need to create bespoke code to present or exploit them.
    ///
    /// The Action parameter and return strings are deceptively simple, but can support transmission of arbitrarily complex data structures, for example through JSON encoding.
    ///
    /// The list of Action commands supported by a driver can be discovered through the SupportedActions property.
    #[http("action", method = Put)]
    fn action(
        &self,

        #[http("Action")] action: &str,

        #[http("Parameters")] parameters: &str,
    ) -> Result<String>;

    /// Transmits an arbitrary string to the device and does not wait for a response.
    ///
    /// Optionally, protocol framing characters may be added to the string before transmission.
    #[http("commandblind", method = Put)]
    #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
    fn command_blind(
        &self,

        #[http("Command")] command: &str,

        #[http("Raw")] raw: bool,
    ) -> Result<()>;

    /// Transmits an arbitrary string to the device and waits for a boolean response.
    ///
    /// Optionally, protocol framing characters may be added to the string before transmission.
    #[http("commandbool", method = Put)]
    #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
    fn command_bool(
        &self,

        #[http("Command")] command: &str,

        #[http("Raw")] raw: bool,
    ) -> Result<bool>;

    /// Transmits an arbitrary string to the device and waits for a string response.
    ///
    /// Optionally, protocol framing characters may be added to the string before transmission.
    #[http("commandstring", method = Put)]
    #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
    fn command_string(
        &self,

        #[http("Command")] command: &str,

        #[http("Raw")] raw: bool,
    ) -> Result<String>;

    /// Retrieves the connected state of the device.
    #[http("connected", method = Get)]
    fn connected(&self) -> Result<bool>;

    /// Sets the connected state of the device.
    #[http("connected", method = Put)]
    fn set_connected(&self, #[http("Connected")] connected: bool) -> Result<()>;

    /// Starts connecting to the device; poll [`connecting`](Self::connecting) for completion.
    ///
    /// _Platform 7 onward._
    #[http("connect", method = Put)]
    fn connect(&self) -> Result<()>;

    /// Starts disconnecting from the device; poll [`connecting`](Self::connecting) for completion.
    ///
    /// _Platform 7 onward._
    #[http("disconnect", method = Put)]
    fn disconnect(&self) -> Result<()>;

    /// Returns true while the device is connecting or disconnecting.
    ///
    /// _Platform 7 onward._
    #[http("connecting", method = Get)]
    fn connecting(&self) -> Result<bool>;

    /// The description of the device.
    #[http("description", method = Get)]
    fn description(&self) -> Result<String>;

    /// Operational values that are definitively known; entries with unknown values are omitted.
    ///
    /// _Platform 7 onward._
    #[http("devicestate", method = Get)]
    fn device_state(&self) -> Result<Vec<DeviceStateItem>>;

    /// The description of the driver, split into its comma-separated parts.
    #[http("driverinfo", method = Get, via = DriverInfo)]
    fn driver_info(&self) -> Result<Vec<String>>;

    /// A string containing only the major and minor version of the driver.
    ///
    /// This must be in the form "n.n".
    #[http("driverversion", method = Get)]
    fn driver_version(&self) -> Result<String>;

    /// The version of the ASCOM device interface contract to which this device complies.
    #[http("interfaceversion", method = Get)]
    fn interface_version(&self) -> Result<i32>;

    /// The name of the device.
    #[http("name", method = Get)]
    fn name(&self) -> Result<String>;

    /// Returns the list of action names supported by this driver.
    #[http("supportedactions", method = Get)]
    fn supported_actions(&self) -> Result<Vec<String>>;
}

/// A DeviceState object representing an operational property of this device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceStateItem {
    /// The property name.
    ///
    /// The name casing must match the casing in the relevant interface definition.
    pub name: String,

    /// The corresponding value of the named operational property.
    ///
    /// This is a dynamically-typed value that can hold one of several basic types including Int16, Int32, Single, Double, String, Boolean and DateTime (returned as an ISO 8601 format string).
    pub value: serde_json::Value,
}

struct DriverInfo(Vec<String>);

impl<'de> Deserialize<'de> for DriverInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let info = String::deserialize(deserializer)?;
        Ok(Self(
            info.split(',').map(|part| part.trim().to_owned()).collect(),
        ))
    }
}

impl From<DriverInfo> for Vec<String> {
    fn from(info: DriverInfo) -> Self {
        info.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{success_body, test_config};
    use crate::{DeviceClient, DeviceType};
    use mockito::Matcher;

    struct Generic(DeviceClient);

    impl Device for Generic {
        fn client(&self) -> &DeviceClient {
            &self.0
        }
    }

    fn rotator(server: &mockito::Server) -> eyre::Result<Generic> {
        Ok(Generic(DeviceClient::with_config(
            server.host_with_port(),
            DeviceType::Rotator,
            0,
            &test_config()?,
        )?))
    }

    #[test]
    fn description_hits_its_own_endpoint() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/rotator/0/description")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!("Simulated rotator")))
            .create();

        assert_eq!(rotator(&server)?.description()?, "Simulated rotator");
        mock.assert();

        Ok(())
    }

    #[test]
    fn driver_info_is_split() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/v1/rotator/0/driverinfo")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!(
                "ASCOM Rotator Simulator, Version 6.6 , (c) ASCOM"
            )))
            .create();

        assert_eq!(
            rotator(&server)?.driver_info()?,
            ["ASCOM Rotator Simulator", "Version 6.6", "(c) ASCOM"]
        );

        Ok(())
    }

    #[test]
    fn action_returns_value() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/v1/rotator/0/action")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Action".into(), "Lamp".into()),
                Matcher::UrlEncoded("Parameters".into(), "on".into()),
            ]))
            .with_body(success_body(serde_json::json!("ok")))
            .create();

        assert_eq!(rotator(&server)?.action("Lamp", "on")?, "ok");
        mock.assert();

        Ok(())
    }

    #[test]
    #[expect(deprecated)]
    fn raw_commands_send_booleans() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/v1/rotator/0/commandbool")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Command".into(), ":GR#".into()),
                Matcher::UrlEncoded("Raw".into(), "True".into()),
            ]))
            .with_body(success_body(serde_json::json!(false)))
            .create();

        assert!(!rotator(&server)?.command_bool(":GR#", true)?);
        mock.assert();

        Ok(())
    }

    #[test]
    fn device_state() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/v1/rotator/0/devicestate")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!([
                {"Name": "IsMoving", "Value": false},
                {"Name": "Position", "Value": 12.5},
            ])))
            .create();

        let state = rotator(&server)?.device_state()?;
        assert_eq!(
            state,
            [
                DeviceStateItem {
                    name: "IsMoving".to_owned(),
                    value: serde_json::json!(false),
                },
                DeviceStateItem {
                    name: "Position".to_owned(),
                    value: serde_json::json!(12.5),
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn set_connected() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/v1/rotator/0/connected")
            .match_body(Matcher::UrlEncoded("Connected".into(), "True".into()))
            .with_body(success_body(serde_json::Value::Null))
            .create();

        rotator(&server)?.set_connected(true)?;
        mock.assert();

        Ok(())
    }
}
