#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod dms;
pub mod latlon;
pub mod twd97;

pub use latlon::LatLon;
pub use twd97::Twd97;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Angle text is not in a recognized format: {0}")]
    UnparsableAngle(String),
    #[error("Input lies on a projection singularity: {0}")]
    SingularCoord(String),
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
