use std::fmt::Display;

use crate::{latlon::LatLon, projections::transverse_mercator, Error, ParseCoord};

/// Representation of a TWD97 projected coordinate, in meters east/north of
/// the false origin. Can be converted to/from [`LatLon`].
///
/// TWD97 uses `E0 = 250000 m`, `N0 = 0 m`, `k0 = 0.9999` and a central
/// meridian of 121°E, or 119°E for Penghu, Kinmen and Matsu.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Twd97 {
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl Twd97 {
    pub(crate) fn new(easting: f64, northing: f64) -> Twd97 {
        Self { easting, northing }
    }

    /// Tries to create a projected coordinate from an easting/northing pair.
    /// Any finite value is accepted; far-from-origin coordinates lose
    /// projection accuracy but are not rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either component is not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use twd97::Twd97;
    ///
    /// let coord = Twd97::create(302000.0, 2771000.0);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.easting(), 302000.0);
    /// assert_eq!(coord.northing(), 2771000.0);
    ///
    /// assert!(Twd97::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(easting: f64, northing: f64) -> Result<Twd97, Error> {
        if !easting.is_finite() || !northing.is_finite() {
            Err(Error::InvalidCoord(format!(
                "Easting/northing ({easting}, {northing}) must be finite."
            )))
        } else {
            Ok(Twd97::new(easting, northing))
        }
    }

    /// Returns the easting value in meters.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the northing value in meters.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`LatLon`] to [`Twd97`]. Set `pkm` when the coordinate
    /// lies in Penghu, Kinmen or Matsu, which use the 119°E central meridian.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularCoord`] if the forward projection does not
    /// produce finite values, which happens at the poles.
    ///
    /// # Usage
    ///
    /// ```
    /// use twd97::{LatLon, Twd97};
    ///
    /// let coord = LatLon::create(23.5, 119.6).unwrap();
    ///
    /// let converted = Twd97::from_latlon(&coord, true).unwrap();
    ///
    /// assert!((converted.easting() - 311279.2617430).abs() < 1e-3);
    /// assert!((converted.northing() - 2599779.2935424).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon, pkm: bool) -> Result<Twd97, Error> {
        let tm = transverse_mercator::projection(pkm);
        let (easting, northing) =
            tm.forward(value.latitude().to_radians(), value.longitude().to_radians());

        if easting.is_finite() && northing.is_finite() {
            Ok(Twd97::new(easting, northing))
        } else {
            Err(Error::SingularCoord(format!(
                "Projection of ({}, {}) is not finite.",
                value.latitude(),
                value.longitude()
            )))
        }
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
    /// let coord = Twd97::create(302000.0, 2771000.0).unwrap();
    ///
    /// let converted = coord.to_latlon(false).unwrap();
    ///
    /// // Check if the converted coordinate is accurate to 6 decimals
    /// assert!((converted.latitude() - 25.046256).abs() < 1e-6);
    /// assert!((converted.longitude() - 121.515346).abs() < 1e-6);
    /// ```
    pub fn to_latlon(&self, pkm: bool) -> Result<LatLon, Error> {
        let tm = transverse_mercator::projection(pkm);
        let (lat, lon) = tm.inverse(self.easting, self.northing);
        let (lat, lon) = (lat.to_degrees(), lon.to_degrees());

        if lat.is_finite() && lon.is_finite() {
            Ok(LatLon::new(lat, lon))
        } else {
            Err(Error::SingularCoord(format!(
                "Inverse projection of ({}, {}) is not finite.",
                self.easting, self.northing
            )))
        }
    }
}

impl ParseCoord for Twd97 {
    /// Parses an `EAST,NORTH` pair of plain meter values.
    fn parse_coord(value: &str) -> Result<Twd97, Error> {
        let cleaned = value.replace(' ', "");
        let (easting, northing) = cleaned
            .split_once(',')
            .ok_or_else(|| Error::InvalidCoord(format!("Expected \"EAST,NORTH\", got \"{value}\"")))?;

        let easting = easting
            .parse::<f64>()
            .map_err(|_| Error::InvalidCoord(format!("Easting \"{easting}\" is not a number.")))?;
        let northing = northing
            .parse::<f64>()
            .map_err(|_| Error::InvalidCoord(format!("Northing \"{northing}\" is not a number.")))?;

        Twd97::create(easting, northing)
    }
}

impl Display for Twd97 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{easting} {northing}",
        )
    }
}
