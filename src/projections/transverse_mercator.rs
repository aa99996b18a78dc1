use lazy_static::lazy_static;

use crate::{
    constants::{
        GRS80_A, GRS80_F, TWD97_FALSE_EASTING, TWD97_FALSE_NORTHING, TWD97_K0, TWD97_LON0,
        TWD97_LON0_PKM,
    },
    ThisOrThat,
};

/// Krüger series coefficients for the Gauss-Krüger projection, truncated
/// at third order in the third flattening `n`.
///
/// The truncation bounds the achievable accuracy; the omitted higher-order
/// terms matter below the millimeter level for longitudes within a few
/// degrees of the central meridian.
#[derive(Debug, PartialEq)]
pub(crate) struct KrugerCoefficients {
    /// Third flattening, `f / (2 - f)`
    n: f64,
    /// Rectifying radius `A`, in kilometers
    a1: f64,
    alpha: [f64; 3],
    beta: [f64; 3],
    delta: [f64; 3],
}

impl KrugerCoefficients {
    fn new(a: f64, f: f64) -> KrugerCoefficients {
        let n = f / (2. - f);
        let a1 = a / (1. + n) * (1. + n.powi(2) / 4. + n.powi(4) / 64.);

        let alpha = [
            n / 2. - 2. * n.powi(2) / 3. + 5. * n.powi(3) / 16.,
            13. * n.powi(2) / 48. - 3. * n.powi(3) / 5.,
            61. * n.powi(3) / 240.,
        ];
        let beta = [
            n / 2. - 2. * n.powi(2) / 3. + 37. * n.powi(3) / 96.,
            n.powi(2) / 48. + n.powi(3) / 15.,
            17. * n.powi(3) / 480.,
        ];
        let delta = [
            2. * n - 2. * n.powi(2) / 3. - 2. * n.powi(3),
            7. * n.powi(2) / 3. - 8. * n.powi(3) / 5.,
            56. * n.powi(3) / 15.,
        ];

        KrugerCoefficients { n, a1, alpha, beta, delta }
    }
}

/// The TWD97 Transverse Mercator projection for a fixed central meridian.
pub(crate) struct TransverseMercator {
    k0: f64,
    false_easting: f64,
    false_northing: f64,
    /// Central meridian, in radians
    lon0: f64,
    coeff: KrugerCoefficients,
}

impl TransverseMercator {
    fn twd97(lon0_deg: f64) -> TransverseMercator {
        TransverseMercator {
            k0: TWD97_K0,
            false_easting: TWD97_FALSE_EASTING,
            false_northing: TWD97_FALSE_NORTHING,
            lon0: lon0_deg.to_radians(),
            coeff: KrugerCoefficients::new(GRS80_A, GRS80_F),
        }
    }

    /// Forward projection. Takes latitude/longitude in radians and returns
    /// easting/northing in meters.
    ///
    /// Latitudes of exactly ±90° make the conformal latitude blow up; the
    /// caller is responsible for rejecting non-finite outputs.
    pub fn forward(&self, lat: f64, lon: f64) -> (f64, f64) {
        let dlon = lon - self.lon0;

        // Tangent of the conformal latitude; e is the first eccentricity,
        // equal to 2*sqrt(n)/(1+n).
        let e = 2. * self.coeff.n.sqrt() / (1. + self.coeff.n);
        let t = (lat.sin().atanh() - e * (e * lat.sin()).atanh()).sinh();

        let xip = (t / dlon.cos()).atan();
        let etap = (dlon.sin() / t.hypot(dlon.cos())).asinh();

        let mut x = etap;
        let mut y = xip;
        for (j, alpha) in self.coeff.alpha.iter().enumerate() {
            let w = 2. * (j as f64 + 1.);
            x += alpha * (w * xip).cos() * (w * etap).sinh();
            y += alpha * (w * xip).sin() * (w * etap).cosh();
        }

        let easting = (self.false_easting + self.k0 * self.coeff.a1 * x) * 1000.;
        let northing = (self.false_northing + self.k0 * self.coeff.a1 * y) * 1000.;

        (easting, northing)
    }

    /// Inverse projection. Takes easting/northing in meters and returns
    /// latitude/longitude in radians.
    pub fn inverse(&self, easting: f64, northing: f64) -> (f64, f64) {
        let xi = (northing / 1000. - self.false_northing) / (self.k0 * self.coeff.a1);
        let eta = (easting / 1000. - self.false_easting) / (self.k0 * self.coeff.a1);

        // Remove the conformal distortion harmonics.
        let mut xip = xi;
        let mut etap = eta;
        for (j, beta) in self.coeff.beta.iter().enumerate() {
            let w = 2. * (j as f64 + 1.);
            xip -= beta * (w * xi).sin() * (w * eta).cosh();
            etap -= beta * (w * xi).cos() * (w * eta).sinh();
        }

        // Conformal latitude back to geographic latitude.
        let chi = (xip.sin() / etap.cosh()).asin();
        let mut lat = chi;
        for (j, delta) in self.coeff.delta.iter().enumerate() {
            let w = 2. * (j as f64 + 1.);
            lat += delta * (w * chi).sin();
        }

        let lon = self.lon0 + (etap.sinh() / xip.cos()).atan();

        (lat, lon)
    }
}

lazy_static! {
    static ref TM_TAIWAN: TransverseMercator = TransverseMercator::twd97(TWD97_LON0);
    static ref TM_PENGHU_KINMEN_MATSU: TransverseMercator =
        TransverseMercator::twd97(TWD97_LON0_PKM);
}

/// Returns the process-wide projection for the requested central meridian.
/// Both instances are built once and shared read-only afterwards.
pub(crate) fn projection(pkm: bool) -> &'static TransverseMercator {
    pkm.ternary(&*TM_PENGHU_KINMEN_MATSU, &*TM_TAIWAN)
}
