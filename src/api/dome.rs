use crate::client::ASCOMEnumParam;
use macro_rules_attribute::{apply, macro_rules_derive};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Dome Specific Methods.
#[apply(rpc_trait)]
pub trait Dome: Device {
    /// The dome altitude (degrees, horizon zero and increasing positive to 90 zenith).
    #[http("altitude", method = Get)]
    fn altitude(&self) -> Result<f64>;

    /// Indicates whether the dome is in the home position.
    ///
    /// This is normally used following a FindHome()  operation. The value is reset with any azimuth slew operation that moves the dome away from the home position. AtHome may also become true durng normal slew operations, if the dome passes through the home position and the dome controller hardware is capable of detecting that; or at the end of a slew operation if the dome comes to rest at the home position.
    #[http("athome", method = Get)]
    fn at_home(&self) -> Result<bool>;

    /// True if the dome is in the programmed park position.
    ///
    /// Set only following a Park() operation and reset with any slew operation.
    #[http("atpark", method = Get)]
    fn at_park(&self) -> Result<bool>;

    /// Returns the dome azimuth (degrees, North zero and increasing clockwise, i.e., 90 East, 180 South, 270 West).
    #[http("azimuth", method = Get)]
    fn azimuth(&self) -> Result<f64>;

    /// True if the dome can move to the home position.
    #[http("canfindhome", method = Get)]
    fn can_find_home(&self) -> Result<bool>;

    /// True if the dome is capable of programmed parking (Park() method).
    #[http("canpark", method = Get)]
    fn can_park(&self) -> Result<bool>;

    /// True if driver is capable of setting the dome altitude.
    #[http("cansetaltitude", method = Get)]
    fn can_set_altitude(&self) -> Result<bool>;

    /// True if driver is capable of setting the dome azimuth.
    #[http("cansetazimuth", method = Get)]
    fn can_set_azimuth(&self) -> Result<bool>;

    /// True if driver is capable of setting the dome park position.
    #[http("cansetpark", method = Get)]
    fn can_set_park(&self) -> Result<bool>;

    /// True if driver is capable of automatically operating shutter.
    #[http("cansetshutter", method = Get)]
    fn can_set_shutter(&self) -> Result<bool>;

    /// True if driver is capable of slaving to a telescope.
    #[http("canslave", method = Get)]
    fn can_slave(&self) -> Result<bool>;

    /// True if driver is capable of synchronizing the dome azimuth position using the SyncToAzimuth(Double) method.
    #[http("cansyncazimuth", method = Get)]
    fn can_sync_azimuth(&self) -> Result<bool>;

    /// Returns the status of the dome shutter or roll-off roof.
    #[http("shutterstatus", method = Get)]
    fn shutter_status(&self) -> Result<ShutterState>;

    /// True if the dome is slaved to the telescope in its hardware, else False.
    #[http("slaved", method = Get)]
    fn slaved(&self) -> Result<bool>;

    /// Enables or disables slaving of the dome to the telescope.
    #[http("slaved", method = Put)]
    fn set_slaved(&self, #[http("Slaved")] slaved: bool) -> Result<()>;

    /// True if any part of the dome is currently moving, False if all dome components are steady.
    #[http("slewing", method = Get)]
    fn slewing(&self) -> Result<bool>;

    /// Calling this method will immediately disable hardware slewing (Slaved will become False).
    #[http("abortslew", method = Put)]
    fn abort_slew(&self) -> Result<()>;

    /// Close the shutter or otherwise shield telescope from the sky.
    #[http("closeshutter", method = Put)]
    fn close_shutter(&self) -> Result<()>;

    /// After Home position is established initializes Azimuth to the default value and sets the AtHome flag.
    #[http("findhome", method = Put)]
    fn find_home(&self) -> Result<()>;

    /// Open shutter or otherwise expose telescope to the sky.
    #[http("openshutter", method = Put)]
    fn open_shutter(&self) -> Result<()>;

    /// After assuming programmed park position, sets AtPark flag.
    #[http("park", method = Put)]
    fn park(&self) -> Result<()>;

    /// Set the current azimuth, altitude position of dome to be the park position.
    #[http("setpark", method = Put)]
    fn set_park(&self) -> Result<()>;

    /// Slew the dome to the given altitude position.
    #[http("slewtoaltitude", method = Put)]
    fn slew_to_altitude(&self, #[http("Altitude")] altitude: f64) -> Result<()>;

    /// Slew the dome to the given azimuth position.
    #[http("slewtoazimuth", method = Put)]
    fn slew_to_azimuth(&self, #[http("Azimuth")] azimuth: f64) -> Result<()>;

    /// Synchronize the current position of the dome to the given azimuth.
    #[http("synctoazimuth", method = Put)]
    fn sync_to_azimuth(&self, #[http("Azimuth")] azimuth: f64) -> Result<()>;
}

/// Indicates the current state of the shutter or roof.
#[macro_rules_derive(ASCOMEnumParam)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize_repr,
    Deserialize_repr,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(i32)]
pub enum ShutterState {
    /// The shutter or roof is open.
    Open = 0,

    /// The shutter or roof is closed.
    Closed = 1,

    /// The shutter or roof is opening.
    Opening = 2,

    /// The shutter or roof is closing.
    Closing = 3,

    /// The shutter or roof has encountered a problem.
    Error = 4,
}
