use crate::client::ASCOMEnumParam;
use crate::{DateTime, UtcDate};
use macro_rules_attribute::{apply, macro_rules_derive};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::ops::RangeInclusive;

/// Telescope Specific Methods.
#[apply(rpc_trait)]
pub trait Telescope: Device {
    /// Returns the alignment mode of the mount (Alt/Az, Polar, German Polar).
    #[http("alignmentmode", method = Get)]
    fn alignment_mode(&self) -> Result<AlignmentMode>;

    /// The altitude above the local horizon of the mount's current position (degrees, positive up).
    #[http("altitude", method = Get)]
    fn altitude(&self) -> Result<f64>;

    /// The area of the telescope's aperture, taking into account any obstructions (square meters).
    #[http("aperturearea", method = Get)]
    fn aperture_area(&self) -> Result<f64>;

    /// The telescope's effective aperture diameter (meters).
    #[http("aperturediameter", method = Get)]
    fn aperture_diameter(&self) -> Result<f64>;

    /// True if the mount is stopped in the Home position.
    ///
    /// Set only following a FindHome()  operation, and reset with any slew operation. This property must be False if the telescope does not support homing.
    #[http("athome", method = Get)]
    fn at_home(&self) -> Result<bool>;

    /// True if the telescope has been put into the parked state by the seee Park()  method.
    ///
    /// Set False by calling the Unpark() method.
    #[http("atpark", method = Get)]
    fn at_park(&self) -> Result<bool>;

    /// The azimuth at the local horizon of the mount's current position (degrees, North-referenced, positive East/clockwise).
    #[http("azimuth", method = Get)]
    fn azimuth(&self) -> Result<f64>;

    /// True if this telescope is capable of programmed finding its home position (FindHome()  method).
    #[http("canfindhome", method = Get)]
    fn can_find_home(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed parking (Park() method).
    #[http("canpark", method = Get)]
    fn can_park(&self) -> Result<bool>;

    /// True if this telescope is capable of software-pulsed guiding (via the PulseGuide(GuideDirections, Int32) method).
    #[http("canpulseguide", method = Get)]
    fn can_pulse_guide(&self) -> Result<bool>;

    /// True if the DeclinationRate property can be changed to provide offset tracking in the declination axis.
    #[http("cansetdeclinationrate", method = Get)]
    fn can_set_declination_rate(&self) -> Result<bool>;

    /// True if the guide rate properties used for PulseGuide(GuideDirections, Int32) can ba adjusted.
    #[http("cansetguiderates", method = Get)]
    fn can_set_guide_rates(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed setting of its park position (SetPark() method).
    #[http("cansetpark", method = Get)]
    fn can_set_park(&self) -> Result<bool>;

    /// True if the SideOfPier property can be set, meaning that the mount can be forced to flip.
    #[http("cansetpierside", method = Get)]
    fn can_set_pier_side(&self) -> Result<bool>;

    /// True if the RightAscensionRate property can be changed to provide offset tracking in the right ascension axis. .
    #[http("cansetrightascensionrate", method = Get)]
    fn can_set_right_ascension_rate(&self) -> Result<bool>;

    /// True if the Tracking property can be changed, turning telescope sidereal tracking on and off.
    #[http("cansettracking", method = Get)]
    fn can_set_tracking(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed slewing (synchronous or asynchronous) to equatorial coordinates.
    #[http("canslew", method = Get)]
    fn can_slew(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed slewing (synchronous or asynchronous) to local horizontal coordinates.
    #[http("canslewaltaz", method = Get)]
    fn can_slew_alt_az(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed asynchronous slewing to local horizontal coordinates.
    #[http("canslewaltazasync", method = Get)]
    fn can_slew_alt_az_async(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed asynchronous slewing to equatorial coordinates.
    #[http("canslewasync", method = Get)]
    fn can_slew_async(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed synching to equatorial coordinates.
    #[http("cansync", method = Get)]
    fn can_sync(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed synching to local horizontal coordinates.
    #[http("cansyncaltaz", method = Get)]
    fn can_sync_alt_az(&self) -> Result<bool>;

    /// True if this telescope is capable of programmed unparking (UnPark() method).
    #[http("canunpark", method = Get)]
    fn can_unpark(&self) -> Result<bool>;

    /// The declination (degrees) of the mount's current equatorial coordinates, in the coordinate system given by the EquatorialSystem property.
    ///
    /// Reading the property will raise an error if the value is unavailable.
    #[http("declination", method = Get)]
    fn declination(&self) -> Result<f64>;

    /// The declination tracking rate (arcseconds per SI second, default = 0.0).
    ///
    /// Please note that rightascensionrate units are arcseconds per sidereal second.
    #[http("declinationrate", method = Get)]
    fn declination_rate(&self) -> Result<f64>;

    /// Sets the declination tracking rate (arcseconds per SI second).
    ///
    /// Please note that rightascensionrate units are arcseconds per sidereal second.
    #[http("declinationrate", method = Put)]
    fn set_declination_rate(
        &self,

        #[http("DeclinationRate")] declination_rate: f64,
    ) -> Result<()>;

    /// True if the telescope or driver applies atmospheric refraction to coordinates.
    #[http("doesrefraction", method = Get)]
    fn does_refraction(&self) -> Result<bool>;

    /// Causes the rotator to move Position degrees relative to the current Position value.
    #[http("doesrefraction", method = Put)]
    fn set_does_refraction(
        &self,

        #[http("DoesRefraction")] does_refraction: bool,
    ) -> Result<()>;

    /// Returns the current equatorial coordinate system used by this telescope (e.g. Topocentric or J2000).
    #[http("equatorialsystem", method = Get)]
    fn equatorial_system(&self) -> Result<EquatorialCoordinateType>;

    /// The telescope's focal length in meters.
    #[http("focallength", method = Get)]
    fn focal_length(&self) -> Result<f64>;

    /// The current Declination movement rate offset for telescope guiding (degrees/sec).
    #[http("guideratedeclination", method = Get)]
    fn guide_rate_declination(&self) -> Result<f64>;

    /// Sets the current Declination movement rate offset for telescope guiding (degrees/sec).
    #[http("guideratedeclination", method = Put)]
    fn set_guide_rate_declination(
        &self,

        #[http("GuideRateDeclination")] guide_rate_declination: f64,
    ) -> Result<()>;

    /// The current RightAscension movement rate offset for telescope guiding (degrees/sec).
    #[http("guideraterightascension", method = Get)]
    fn guide_rate_right_ascension(&self) -> Result<f64>;

    /// Sets the current RightAscension movement rate offset for telescope guiding (degrees/sec).
    #[http("guideraterightascension", method = Put)]
    fn set_guide_rate_right_ascension(
        &self,

        #[http("GuideRateRightAscension")] guide_rate_right_ascension: f64,
    ) -> Result<()>;

    /// True if a PulseGuide(GuideDirections, Int32) command is in progress, False otherwise.
    #[http("ispulseguiding", method = Get)]
    fn is_pulse_guiding(&self) -> Result<bool>;

    /// The right ascension (hours) of the mount's current equatorial coordinates, in the coordinate system given by the EquatorialSystem property.
    #[http("rightascension", method = Get)]
    fn right_ascension(&self) -> Result<f64>;

    /// The right ascension tracking rate (arcseconds per sidereal second, default = 0.0).
    ///
    /// Please note that the declinationrate units are arcseconds per SI second.
    #[http("rightascensionrate", method = Get)]
    fn right_ascension_rate(&self) -> Result<f64>;

    /// Sets the right ascension tracking rate (arcseconds per sidereal second).
    ///
    /// Please note that the declinationrate units are arcseconds per SI second.
    #[http("rightascensionrate", method = Put)]
    fn set_right_ascension_rate(
        &self,

        #[http("RightAscensionRate")] right_ascension_rate: f64,
    ) -> Result<()>;

    /// Indicates the pointing state of the mount.
    #[http("sideofpier", method = Get)]
    fn side_of_pier(&self) -> Result<PierSide>;

    /// Sets the pointing state of the mount.
    #[http("sideofpier", method = Put)]
    fn set_side_of_pier(
        &self,
        #[http("SideOfPier")] side_of_pier: PierSide,
    ) -> Result<()>;

    /// The local apparent sidereal time from the telescope's internal clock (hours, sidereal).
    #[http("siderealtime", method = Get)]
    fn sidereal_time(&self) -> Result<f64>;

    /// The elevation above mean sea level (meters) of the site at which the telescope is located.
    #[http("siteelevation", method = Get)]
    fn site_elevation(&self) -> Result<f64>;

    /// Sets the elevation above mean sea level (metres) of the site at which the telescope is located.
    #[http("siteelevation", method = Put)]
    fn set_site_elevation(
        &self,

        #[http("SiteElevation")] site_elevation: f64,
    ) -> Result<()>;

    /// The geodetic(map) latitude (degrees, positive North, WGS84) of the site at which the telescope is located.
    #[http("sitelatitude", method = Get)]
    fn site_latitude(&self) -> Result<f64>;

    /// Sets the observing site's latitude (degrees).
    #[http("sitelatitude", method = Put)]
    fn set_site_latitude(
        &self,
        #[http("SiteLatitude")] site_latitude: f64,
    ) -> Result<()>;

    /// The longitude (degrees, positive East, WGS84) of the site at which the telescope is located.
    #[http("sitelongitude", method = Get)]
    fn site_longitude(&self) -> Result<f64>;

    /// Sets the observing site's longitude (degrees, positive East, WGS84).
    #[http("sitelongitude", method = Put)]
    fn set_site_longitude(
        &self,

        #[http("SiteLongitude")] site_longitude: f64,
    ) -> Result<()>;

    /// True if telescope is currently moving in response to one of the Slew methods or the MoveAxis(TelescopeAxes, Double) method, False at all other times.
    #[http("slewing", method = Get)]
    fn slewing(&self) -> Result<bool>;

    /// Returns the post-slew settling time (sec.).
    #[http("slewsettletime", method = Get)]
    fn slew_settle_time(&self) -> Result<i32>;

    /// Sets the  post-slew settling time (integer sec.).
    #[http("slewsettletime", method = Put)]
    fn set_slew_settle_time(
        &self,

        #[http("SlewSettleTime")] slew_settle_time: i32,
    ) -> Result<()>;

    /// The declination (degrees, positive North) for the target of an equatorial slew or sync operation.
    #[http("targetdeclination", method = Get)]
    fn target_declination(&self) -> Result<f64>;

    /// Sets the declination (degrees, positive North) for the target of an equatorial slew or sync operation.
    #[http("targetdeclination", method = Put)]
    fn set_target_declination(
        &self,

        #[http("TargetDeclination")] target_declination: f64,
    ) -> Result<()>;

    /// The right ascension (hours) for the target of an equatorial slew or sync operation.
    #[http("targetrightascension", method = Get)]
    fn target_right_ascension(&self) -> Result<f64>;

    /// Sets the right ascension (hours) for the target of an equatorial slew or sync operation.
    #[http("targetrightascension", method = Put)]
    fn set_target_right_ascension(
        &self,

        #[http("TargetRightAscension")] target_right_ascension: f64,
    ) -> Result<()>;

    /// Returns the state of the telescope's sidereal tracking drive.
    #[http("tracking", method = Get)]
    fn tracking(&self) -> Result<bool>;

    /// Sets the state of the telescope's sidereal tracking drive.
    #[http("tracking", method = Put)]
    fn set_tracking(&self, #[http("Tracking")] tracking: bool) -> Result<()>;

    /// The current tracking rate of the telescope's sidereal drive.
    #[http("trackingrate", method = Get)]
    fn tracking_rate(&self) -> Result<DriveRate>;

    /// Sets the tracking rate of the telescope's sidereal drive.
    #[http("trackingrate", method = Put)]
    fn set_tracking_rate(
        &self,

        #[http("TrackingRate")] tracking_rate: DriveRate,
    ) -> Result<()>;

    /// Returns an array of supported DriveRates values that describe the permissible values of the TrackingRate property for this telescope type.
    #[http("trackingrates", method = Get)]
    fn tracking_rates(&self) -> Result<Vec<DriveRate>>;

    /// Returns the UTC date/time of the telescope's internal clock.
    ///
    /// Use [`DateTime::to_offset_date_time`] or [`DateTime::to_system_time`] for calendar arithmetic.
    #[http("utcdate", method = Get)]
    fn utc_date(&self) -> Result<DateTime>;

    /// Sets the UTC date/time of the telescope's internal clock.
    ///
    /// Accepts an ISO-8601 string (sent verbatim), a [`DateTime`], a [`time::OffsetDateTime`] or a [`std::time::SystemTime`].
    #[http("utcdate", method = Put)]
    fn set_utc_date(
        &self,

        #[http("UTCDate", via = UtcDate)] utc_date: impl Into<UtcDate>,
    ) -> Result<()>;

    /// Immediately Stops a slew in progress.
    #[http("abortslew", method = Put)]
    fn abort_slew(&self) -> Result<()>;

    /// The rates at which the telescope may be moved about the specified axis by the MoveAxis(TelescopeAxes, Double) method.
    #[http("axisrates", method = Get)]
    fn axis_rates(
        &self,
        #[http("Axis")] axis: TelescopeAxis,
    ) -> Result<Vec<AxisRate>>;

    /// True if this telescope can move the requested axis.
    #[http("canmoveaxis", method = Get)]
    fn can_move_axis(&self, #[http("Axis")] axis: TelescopeAxis) -> Result<bool>;

    /// Predicts the pointing state that a German equatorial mount will be in if it slews to the given coordinates.
    #[http("destinationsideofpier", method = Get)]
    fn destination_side_of_pier(
        &self,

        #[http("RightAscension")] right_ascension: f64,

        #[http("Declination")] declination: f64,
    ) -> Result<PierSide>;

    /// Locates the telescope's "home" position (synchronous).
    #[http("findhome", method = Put)]
    fn find_home(&self) -> Result<()>;

    /// Move the telescope in one axis at the given rate.
    #[http("moveaxis", method = Put)]
    fn move_axis(
        &self,

        #[http("Axis")] axis: TelescopeAxis,

        #[http("Rate")] rate: f64,
    ) -> Result<()>;

    /// Move the telescope to its park position, stop all motion (or restrict to a small safe range), and set AtPark to True. ).
    #[http("park", method = Put)]
    fn park(&self) -> Result<()>;

    /// Moves the scope in the given direction for the given interval or time at the rate given by the corresponding guide rate property.
    #[http("pulseguide", method = Put)]
    fn pulse_guide(
        &self,

        #[http("Direction")] direction: GuideDirection,

        #[http("Duration")] duration: i32,
    ) -> Result<()>;

    /// Sets the telescope's park position to be its current position.
    #[http("setpark", method = Put)]
    fn set_park(&self) -> Result<()>;

    /// Move the telescope to the given local horizontal coordinates, return when slew is complete.
    #[http("slewtoaltaz", method = Put)]
    fn slew_to_alt_az(
        &self,

        #[http("Azimuth")] azimuth: f64,

        #[http("Altitude")] altitude: f64,
    ) -> Result<()>;

    /// Move the telescope to the given local horizontal coordinates, return immediately after the slew starts.
    ///
    /// The client can poll the Slewing method to determine when the mount reaches the intended coordinates.
    #[http("slewtoaltazasync", method = Put)]
    fn slew_to_alt_az_async(
        &self,

        #[http("Azimuth")] azimuth: f64,

        #[http("Altitude")] altitude: f64,
    ) -> Result<()>;

    /// Move the telescope to the given equatorial coordinates, return when slew is complete.
    #[http("slewtocoordinates", method = Put)]
    fn slew_to_coordinates(
        &self,

        #[http("RightAscension")] right_ascension: f64,

        #[http("Declination")] declination: f64,
    ) -> Result<()>;

    /// Move the telescope to the given equatorial coordinates, return immediatley after the slew starts.
    ///
    /// The client can poll the Slewing method to determine when the mount reaches the intended coordinates.
    #[http("slewtocoordinatesasync", method = Put)]
    fn slew_to_coordinates_async(
        &self,

        #[http("RightAscension")] right_ascension: f64,

        #[http("Declination")] declination: f64,
    ) -> Result<()>;

    /// **This method is deprecated in favour of [`slew_to_target_async`](Self::slew_to_target_async).**
    ///
    /// Move the telescope to the TargetRightAscension and TargetDeclination equatorial coordinates, return when slew is complete.
    #[http("slewtotarget", method = Put)]
    fn slew_to_target(&self) -> Result<()>;

    /// Move the telescope to the TargetRightAscension and TargetDeclination equatorial coordinates, return immediatley after the slew starts.
    ///
    /// The client can poll the Slewing method to determine when the mount reaches the intended coordinates.
    #[http("slewtotargetasync", method = Put)]
    fn slew_to_target_async(&self) -> Result<()>;

    /// Matches the scope's local horizontal coordinates to the given local horizontal coordinates.
    #[http("synctoaltaz", method = Put)]
    fn sync_to_alt_az(
        &self,

        #[http("Azimuth")] azimuth: f64,

        #[http("Altitude")] altitude: f64,
    ) -> Result<()>;

    /// Matches the scope's equatorial coordinates to the given equatorial coordinates.
    #[http("synctocoordinates", method = Put)]
    fn sync_to_coordinates(
        &self,

        #[http("RightAscension")] right_ascension: f64,

        #[http("Declination")] declination: f64,
    ) -> Result<()>;

    /// Matches the scope's equatorial coordinates to the TargetRightAscension and TargetDeclination equatorial coordinates.
    #[http("synctotarget", method = Put)]
    fn sync_to_target(&self) -> Result<()>;

    /// Takes telescope out of the Parked state.
    #[http("unpark", method = Put)]
    fn unpark(&self) -> Result<()>;
}

/// The alignment mode (geometry) of the mount.
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
pub enum AlignmentMode {
    /// Altitude-Azimuth type mount.
    AltAz = 0,

    /// Polar (equatorial) mount other than German equatorial.
    Polar = 1,

    /// German equatorial type mount.
    GermanPolar = 2,
}

/// The equatorial coordinate system used by the mount.
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
pub enum EquatorialCoordinateType {
    /// Custom or unknown equinox and/or reference frame.
    Other = 0,

    /// Topocentric coordinates.
    Topocentric = 1,

    /// J2000 equator/equinox.
    J2000 = 2,

    /// J2050 equator/equinox.
    J2050 = 3,

    /// B1950 equinox, FK4 reference frame.
    B1950 = 4,
}

/// Returned side of pier.
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
pub enum PierSide {
    /// Normal pointing state - Mount on the East side of pier (looking West).
    East = 0,

    /// Through the pole pointing state - Mount on the West side of pier (looking East).
    West = 1,

    /// Unknown or indeterminate.
    Unknown = -1,
}

/// Integer value corresponding to one of the standard drive rates.
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
pub enum DriveRate {
    /// Sidereal tracking rate (15.041 arcseconds per second).
    Sidereal = 0,

    /// Lunar tracking rate (14.685 arcseconds per second).
    Lunar = 1,

    /// Solar tracking rate (15.0 arcseconds per second).
    Solar = 2,

    /// King tracking rate (15.0369 arcseconds per second).
    King = 3,
}

/// Axis rate object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AxisRate {
    /// The minimum rate (degrees per second).
    ///
    /// This must always be a positive number. It indicates the maximum rate in either direction about the axis.
    pub minimum: f64,

    /// The maximum rate (degrees per second).
    ///
    /// This must always be a positive number. It indicates the maximum rate in either direction about the axis.
    pub maximum: f64,
}

impl AxisRate {
    /// The rate range as `minimum..=maximum`.
    pub const fn range(&self) -> RangeInclusive<f64> {
        self.minimum..=self.maximum
    }
}

/// The axis about which rate information is desired.
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
pub enum TelescopeAxis {
    /// Primary axis (e.g., Right Ascension or Azimuth).
    Primary = 0,

    /// Secondary axis (e.g., Declination or Altitude).
    Secondary = 1,

    /// Tertiary axis (e.g. imager rotator/de-rotator).
    Tertiary = 2,
}

/// The direction in which the guide-rate motion is to be made.
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
pub enum GuideDirection {
    /// North (+ declination/altitude).
    North = 0,

    /// South (- declination/altitude).
    South = 1,

    /// East (+ right ascension/azimuth).
    East = 2,

    /// West (- right ascension/azimuth).
    West = 3,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{success_body, test_config};
    use mockito::Matcher;

    fn telescope(server: &mockito::Server) -> eyre::Result<Telescope> {
        Ok(Telescope::with_config(server.host_with_port(), 0, &test_config()?)?)
    }

    #[test]
    fn reads_utc_date() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/api/v1/telescope/0/utcdate")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!("2016-03-04T17:45:31.1234567Z")))
            .create();

        let utc_date = telescope(&server)?.utc_date()?;
        assert_eq!(utc_date.to_string(), "2016-03-04T17:45:31.1234567Z");
        assert_eq!(utc_date.to_offset_date_time()?.microsecond(), 123_456);

        Ok(())
    }

    #[test]
    fn sets_utc_date_from_any_supported_type() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let verbatim = server
            .mock("PUT", "/api/v1/telescope/0/utcdate")
            .match_body(Matcher::UrlEncoded(
                "UTCDate".into(),
                "2019-06-12T06:12:52.452".into(),
            ))
            .with_body(success_body(serde_json::Value::Null))
            .create();
        let canonical = server
            .mock("PUT", "/api/v1/telescope/0/utcdate")
            .match_body(Matcher::UrlEncoded(
                "UTCDate".into(),
                "2020-01-02T03:04:05.5000000Z".into(),
            ))
            .with_body(success_body(serde_json::Value::Null))
            .expect(2)
            .create();

        let telescope = telescope(&server)?;
        telescope.set_utc_date("2019-06-12T06:12:52.452")?;
        telescope.set_utc_date(time::macros::datetime!(2020-01-02 03:04:05.5 UTC))?;
        telescope.set_utc_date(DateTime::parse("2020-01-02T03:04:05.5000000")?)?;

        verbatim.assert();
        canonical.assert();

        Ok(())
    }

    #[test]
    fn axis_rates() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/telescope/0/axisrates")
            .match_query(Matcher::UrlEncoded("Axis".into(), "1".into()))
            .with_body(success_body(serde_json::json!([
                {"Minimum": 0.0, "Maximum": 0.5},
                {"Minimum": 1.0, "Maximum": 4.0},
            ])))
            .create();

        let rates = telescope(&server)?.axis_rates(TelescopeAxis::Secondary)?;
        assert_eq!(
            rates.iter().map(AxisRate::range).collect::<Vec<_>>(),
            [0.0..=0.5, 1.0..=4.0]
        );
        mock.assert();

        Ok(())
    }

    #[test]
    fn enums_travel_as_integers() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let pulse_guide = server
            .mock("PUT", "/api/v1/telescope/0/pulseguide")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Direction".into(), "2".into()),
                Matcher::UrlEncoded("Duration".into(), "500".into()),
            ]))
            .with_body(success_body(serde_json::Value::Null))
            .create();
        let _side_of_pier = server
            .mock("GET", "/api/v1/telescope/0/sideofpier")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!(-1)))
            .create();
        let _tracking_rates = server
            .mock("GET", "/api/v1/telescope/0/trackingrates")
            .match_query(Matcher::Any)
            .with_body(success_body(serde_json::json!([0, 2])))
            .create();

        let telescope = telescope(&server)?;
        telescope.pulse_guide(GuideDirection::East, 500)?;
        assert_eq!(telescope.side_of_pier()?, PierSide::Unknown);
        assert_eq!(
            telescope.tracking_rates()?,
            [DriveRate::Sidereal, DriveRate::Solar]
        );
        pulse_guide.assert();

        Ok(())
    }

    #[test]
    fn slews_to_coordinates() -> eyre::Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/api/v1/telescope/0/slewtocoordinatesasync")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("RightAscension".into(), "5.5".into()),
                Matcher::UrlEncoded("Declination".into(), "-30.25".into()),
            ]))
            .with_body(success_body(serde_json::Value::Null))
            .create();

        telescope(&server)?.slew_to_coordinates_async(5.5, -30.25)?;
        mock.assert();

        Ok(())
    }
}
