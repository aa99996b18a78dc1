// Semi-major axis a, in kilometers. The whole projection works in
// kilometers and scales to meters at the boundary.
pub(crate) const GRS80_A: f64 = 6_378.137;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

// TWD97 central scale factor
pub(crate) const TWD97_K0: f64 = 9999.0 / 10_000.;

// False origin, in kilometers
pub(crate) const TWD97_FALSE_EASTING: f64 = 250.0;
pub(crate) const TWD97_FALSE_NORTHING: f64 = 0.0;

// Central meridian in degrees, main island vs Penghu/Kinmen/Matsu
pub(crate) const TWD97_LON0: f64 = 121.0;
pub(crate) const TWD97_LON0_PKM: f64 = 119.0;
