use std::fmt::Display;

use crate::{dms, twd97::Twd97, Error, ParseCoord};

/// Representation of a WGS84 latitude/longitude point. Can be converted
/// to/from [`Twd97`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use twd97::LatLon;
    ///
    /// let coord = LatLon::create(25.047924, 121.517081);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 25.047924);
    /// assert_eq!(coord.longitude(), 121.517081);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Converts from [`Twd97`] to [`LatLon`]. Set `pkm` when the coordinate
    /// lies in Penghu, Kinmen or Matsu, which use the 119°E central meridian.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularCoord`] if the inverse projection does not
    /// produce finite values.
    ///
    /// # Usage
    ///
    /// ```
    /// use twd97::{LatLon, Twd97};
    ///
    /// let coord_twd97 = Twd97::create(302000.0, 2771000.0).unwrap();
    ///
    /// let converted = LatLon::from_twd97(&coord_twd97, false).unwrap();
    ///
    /// assert!((converted.latitude() - 25.046256).abs() < 1e-6);
    /// assert!((converted.longitude() - 121.515346).abs() < 1e-6);
    /// ```
    pub fn from_twd97(value: &Twd97, pkm: bool) -> Result<LatLon, Error> {
        value.to_latlon(pkm)
    }

    /// Converts from [`LatLon`] to [`Twd97`]. Set `pkm` when the coordinate
    /// lies in Penghu, Kinmen or Matsu, which use the 119°E central meridian.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularCoord`] if the forward projection does not
    /// produce finite values.
    ///
    /// # Usage
    ///
    /// ```
    /// use twd97::LatLon;
    ///
    /// let coord = LatLon::create(25.047924, 121.517081).unwrap();
    ///
    /// let converted = coord.to_twd97(false).unwrap();
    ///
    /// // Check if the converted coordinate is accurate to the millimeter
    /// assert!((converted.easting() - 302174.3475820).abs() < 1e-3);
    /// assert!((converted.northing() - 2771185.4072054).abs() < 1e-3);
    /// ```
    pub fn to_twd97(&self, pkm: bool) -> Result<Twd97, Error> {
        Twd97::from_latlon(self, pkm)
    }
}

impl ParseCoord for LatLon {
    /// Parses a `lat,lng` pair where each component may be decimal degrees,
    /// degree-minute-second (`24°14'13.456"`) or degree-minute-decimal
    /// (`24°14.227'`) text. Whitespace is stripped before parsing.
    fn parse_coord(value: &str) -> Result<LatLon, Error> {
        let cleaned = value.replace(' ', "");
        let (lat, lon) = cleaned
            .split_once(',')
            .ok_or_else(|| Error::InvalidCoord(format!("Expected \"lat,lng\", got \"{value}\"")))?;

        LatLon::create(dms::parse_angle(lat)?, dms::parse_angle(lon)?)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
