use crate::{ASCOMErrorCode, Result};
use macro_rules_attribute::apply;

/// Switch Specific Methods.
#[apply(rpc_trait)]
pub trait Switch: Device {
    /// Returns the number of switch devices managed by this driver.
    ///
    /// Devices are numbered from 0 to MaxSwitch - 1.
    #[http("maxswitch", method = Get)]
    fn max_switch(&self) -> Result<i32>;

    /// This endpoint must be implemented and indicates whether the given switch can operate asynchronously.
    ///
    /// _ISwitchV3 and later._
    #[http("canasync", method = Get)]
    fn can_async(&self, #[http("Id")] id: i32) -> Result<bool>;

    /// Reports if the specified switch device can be written to, default true.
    ///
    /// This is false if the device cannot be written to, for example a limit switch or a sensor.  Devices are numbered from 0 to MaxSwitch - 1.
    #[http("canwrite", method = Get)]
    fn can_write(&self, #[http("Id")] id: i32) -> Result<bool>;

    /// Return the state of switch device id as a boolean.  Devices are numbered from 0 to MaxSwitch - 1.
    #[http("getswitch", method = Get)]
    fn get_switch(&self, #[http("Id")] id: i32) -> Result<bool>;

    /// Gets the description of the specified switch device.
    ///
    /// This is to allow a fuller description of the device to be returned, for example for a tool tip. Devices are numbered from 0 to MaxSwitch - 1.
    #[http("getswitchdescription", method = Get)]
    fn get_switch_description(&self, #[http("Id")] id: i32) -> Result<String>;

    /// Gets the name of the specified switch device.
    ///
    /// Devices are numbered from 0 to MaxSwitch - 1.
    #[http("getswitchname", method = Get)]
    fn get_switch_name(&self, #[http("Id")] id: i32) -> Result<String>;

    /// Gets the value of the specified switch device as a double.
    ///
    /// Devices are numbered from 0 to MaxSwitch - 1, The value of this switch is expected to be between MinSwitchValue and MaxSwitchValue.
    #[http("getswitchvalue", method = Get)]
    fn get_switch_value(&self, #[http("Id")] id: i32) -> Result<f64>;

    /// Gets the minimum value of the specified switch device as a double.
    ///
    /// Devices are numbered from 0 to MaxSwitch - 1.
    #[http("minswitchvalue", method = Get)]
    fn min_switch_value(&self, #[http("Id")] id: i32) -> Result<f64>;

    /// Gets the maximum value of the specified switch device as a double.
    ///
    /// Devices are numbered from 0 to MaxSwitch - 1.
    #[http("maxswitchvalue", method = Get)]
    fn max_switch_value(&self, #[http("Id")] id: i32) -> Result<f64>;

    /// This is an asynchronous method that must return as soon as the state change operation has been successfully started,  with StateChangeComplete(Int16) for the given switch Id = False.  After the state change has completed StateChangeComplete(Int16) becomes True.
    ///
    /// _ISwitchV3 and later._
    #[http("setasync", method = Put)]
    fn set_async(
        &self,
        #[http("Id")] id: i32,
        #[http("State")] state: bool,
    ) -> Result<()>;

    /// This is an asynchronous method that must return as soon as the state change operation has been successfully started,  with StateChangeComplete(Int16) for the given switch Id = False.  After the state change has completed StateChangeComplete(Int16) becomes True.
    ///
    /// _ISwitchV3 and later._
    #[http("setasyncvalue", method = Put)]
    fn set_async_value(
        &self,

        #[http("Id")] id: i32,

        #[http("Value")] value: f64,
    ) -> Result<()>;

    /// Sets a switch controller device to the specified state, true or false.
    #[http("setswitch", method = Put)]
    fn set_switch(
        &self,
        #[http("Id")] id: i32,
        #[http("State")] state: bool,
    ) -> Result<()>;

    /// Sets a switch device name to the specified value.
    #[http("setswitchname", method = Put)]
    fn set_switch_name(
        &self,

        #[http("Id")] id: i32,

        #[http("Name")] name: &str,
    ) -> Result<()>;

    /// Sets a switch device value to the specified value.
    #[http("setswitchvalue", method = Put)]
    fn set_switch_value(
        &self,

        #[http("Id")] id: i32,

        #[http("Value")] value: f64,
    ) -> Result<()>;

    /// True if the state of the specified switch is changing, otherwise false.
    ///
    /// _ISwitchV3 and later._
    #[http("statechangecomplete", method = Get)]
    fn state_change_complete(&self, #[http("Id")] id: i32) -> Result<bool>;

    /// Returns the step size that this device supports (the difference between successive values of the device).
    ///
    /// Devices are numbered from 0 to MaxSwitch - 1.
    #[http("switchstep", method = Get)]
    fn switch_step(&self, #[http("Id")] id: i32) -> Result<f64>;
}

/// Operational properties of one device connected to the switch.
///
/// A field is `None` if the device reports that query as not implemented.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct SwitchDeviceState {
    /// Result of [`Switch::get_switch`].
    pub get_switch: Option<bool>,
    /// Result of [`Switch::get_switch_value`].
    pub get_switch_value: Option<f64>,
    /// Result of [`Switch::state_change_complete`].
    pub state_change_complete: Option<bool>,
}

/// Map `NOT_IMPLEMENTED` to `None`, pass every other outcome through.
fn unless_not_implemented<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.ascom_code() == Some(ASCOMErrorCode::NOT_IMPLEMENTED) => Ok(None),
        Err(err) => Err(err),
    }
}

impl SwitchDeviceState {
    fn gather(switch: &Switch, id: i32) -> Result<Self> {
        Ok(Self {
            get_switch: unless_not_implemented(switch.get_switch(id))?,
            get_switch_value: unless_not_implemented(switch.get_switch_value(id))?,
            state_change_complete: unless_not_implemented(switch.state_change_complete(id))?,
        })
    }
}

impl Switch {
    /// Query the state of every switch device, indexed by ID.
    ///
    /// Stops at the first failure, except for queries the device doesn't implement.
    pub fn switch_states(&self) -> Result<Vec<SwitchDeviceState>> {
        (0_i32..self.max_switch()?)
            .map(|id| SwitchDeviceState::gather(self, id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::test::{success_body, test_config};
    use mockito::Matcher;

    fn switch(server: &mockito::Server) -> eyre::Result<Switch> {
        Ok(Switch::with_config(server.host_with_port(), 0, &test_config()?)?)
    }

    #[test]
    fn queries_by_id() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/switch/0/getswitchname")
            .match_query(Matcher::UrlEncoded("Id".into(), "1".into()))
            .with_body(success_body(serde_json::json!("Dew heater")))
            .create();

        assert_eq!(switch(&server)?.get_switch_name(1)?, "Dew heater");
        mock.assert();

        Ok(())
    }

    #[test]
    fn sets_state_with_alpaca_booleans() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/v1/switch/0/setswitch")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Id".into(), "0".into()),
                Matcher::UrlEncoded("State".into(), "False".into()),
            ]))
            .with_body(success_body(serde_json::Value::Null))
            .create();

        switch(&server)?.set_switch(0, false)?;
        mock.assert();

        Ok(())
    }

    #[test]
    fn gathers_switch_states() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let _max = server
            .mock("GET", "/api/v1/switch/0/maxswitch")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!(2)))
            .create();
        let _get_switch = server
            .mock("GET", "/api/v1/switch/0/getswitch")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!(true)))
            .create();
        let _get_switch_value = server
            .mock("GET", "/api/v1/switch/0/getswitchvalue")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!(0.5)))
            .create();
        let _state_change_complete = server
            .mock("GET", "/api/v1/switch/0/statechangecomplete")
            .match_query(Matcher::Any)
            .with_body(r#"{"ErrorNumber": 1024, "ErrorMessage": "Not implemented"}"#)
            .create();

        let expected = SwitchDeviceState {
            get_switch: Some(true),
            get_switch_value: Some(0.5),
            state_change_complete: None,
        };
        assert_eq!(switch(&server)?.switch_states()?, [expected, expected]);

        Ok(())
    }

    #[test]
    fn switch_states_surface_server_failures() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let _max = server
            .mock("GET", "/api/v1/switch/0/maxswitch")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!(2)))
            .create();
        let _get_switch = server
            .mock("GET", "/api/v1/switch/0/getswitch")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("internal server error")
            .create();

        let err = switch(&server)?.switch_states().expect_err("must fail");
        assert!(
            matches!(&err, Error::Status { message, .. } if message == "internal server error"),
            "{err:?}"
        );

        Ok(())
    }
}
