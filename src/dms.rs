//! Degree-minute and degree-minute-second representations of angles.
//!
//! These are only used at the parsing/formatting boundary; all of the
//! projection math works on decimal degrees.

use std::fmt::Display;

use crate::{Error, ThisOrThat};

/// Sign of an angle, carried separately so that values between -1° and 0°
/// keep their sign through the degree/minute split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn of(value: f64) -> Sign {
        value.is_sign_negative().ternary(Sign::Negative, Sign::Positive)
    }

    fn apply(self, magnitude: f64) -> f64 {
        match self {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

/// Output presentation of a latitude or longitude in decimal degrees.
///
/// Every variant maps to exactly one rendering; there is no fallback for
/// unknown names, unlike a stringly-typed dispatch would allow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// `DDD.DDDDDD`
    DegDec,
    /// `(DDD, MM.MMMMMM)`
    MinDec,
    /// `DDD°MM.MMMMMM'`
    MinDecStr,
    /// `(DDD, MM, SS.SSSSSS)`
    Dms,
    /// `DDD°MM'SS.SSSSSS"`
    DmsStr,
}

impl Presentation {
    /// Renders a decimal-degree value in the selected presentation.
    ///
    /// # Usage
    ///
    /// ```
    /// use twd97::dms::Presentation;
    ///
    /// assert_eq!(Presentation::DegDec.format(24.237117), "24.237117");
    /// assert_eq!(Presentation::MinDecStr.format(24.237117), "24°14.227020'");
    /// assert_eq!(Presentation::DmsStr.format(-24.5), "-24°30'0.000000\"");
    /// ```
    pub fn format(self, degrees: f64) -> String {
        match self {
            Presentation::DegDec => format!("{degrees:.6}"),
            Presentation::MinDec => {
                let dm = DegMin::from_degrees(degrees);
                format!("({}, {:.6})", dm.degrees(), dm.minutes())
            }
            Presentation::MinDecStr => DegMin::from_degrees(degrees).to_string(),
            Presentation::Dms => {
                let dms = DegMinSec::from_degrees(degrees);
                format!("({}, {}, {:.6})", dms.degrees(), dms.minutes(), dms.seconds())
            }
            Presentation::DmsStr => DegMinSec::from_degrees(degrees).to_string(),
        }
    }
}

/// Degree-minute-decimal split of an angle. The sign lives on the degree
/// component only; minutes are a magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegMin {
    sign: Sign,
    degrees: i32,
    minutes: f64,
}

impl DegMin {
    /// Splits a decimal-degree value into whole degrees and decimal minutes.
    ///
    /// # Usage
    ///
    /// ```
    /// use twd97::dms::DegMin;
    ///
    /// let dm = DegMin::from_degrees(-24.5);
    /// assert_eq!(dm.degrees(), -24);
    /// assert_eq!(dm.minutes(), 30.0);
    /// ```
    pub fn from_degrees(value: f64) -> DegMin {
        let magnitude = value.abs();
        DegMin {
            sign: Sign::of(value),
            degrees: magnitude.trunc() as i32,
            minutes: magnitude.fract() * 60.,
        }
    }

    /// Returns the signed degree component.
    #[inline]
    pub fn degrees(&self) -> i32 {
        match self.sign {
            Sign::Positive => self.degrees,
            Sign::Negative => -self.degrees,
        }
    }

    /// Returns the decimal minutes, always non-negative.
    #[inline]
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Recombines the split into decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.sign.apply(f64::from(self.degrees) + self.minutes / 60.)
    }
}

impl Display for DegMin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = (self.sign == Sign::Negative).ternary("-", "");
        write!(f, "{sign}{}°{:.6}'", self.degrees, self.minutes)
    }
}

/// Degree-minute-second split of an angle. As with [`DegMin`], only the
/// degree component is signed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegMinSec {
    sign: Sign,
    degrees: i32,
    minutes: i32,
    seconds: f64,
}

impl DegMinSec {
    /// Splits a decimal-degree value into whole degrees, whole minutes and
    /// decimal seconds.
    ///
    /// # Usage
    ///
    /// ```
    /// use twd97::dms::DegMinSec;
    ///
    /// let dms = DegMinSec::from_degrees(24.237071111111113);
    /// assert_eq!(dms.degrees(), 24);
    /// assert_eq!(dms.minutes(), 14);
    /// assert!((dms.seconds() - 13.456).abs() < 1e-9);
    /// ```
    pub fn from_degrees(value: f64) -> DegMinSec {
        let dm = DegMin::from_degrees(value);
        DegMinSec {
            sign: dm.sign,
            degrees: dm.degrees,
            minutes: dm.minutes.trunc() as i32,
            seconds: dm.minutes.fract() * 60.,
        }
    }

    /// Returns the signed degree component.
    #[inline]
    pub fn degrees(&self) -> i32 {
        match self.sign {
            Sign::Positive => self.degrees,
            Sign::Negative => -self.degrees,
        }
    }

    /// Returns the whole minutes, always non-negative.
    #[inline]
    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// Returns the decimal seconds, always non-negative.
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Recombines the split into decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.sign.apply(
            f64::from(self.degrees) + f64::from(self.minutes) / 60. + self.seconds / 3600.,
        )
    }
}

impl Display for DegMinSec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = (self.sign == Sign::Negative).ternary("-", "");
        write!(f, "{sign}{}°{}'{:.6}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Parses an angle into decimal degrees.
///
/// Accepts plain decimal degrees (`24.237071`), degree-minute-second text
/// (`24°14'13.456"`) and degree-minute-decimal text (`24°14.227'`). A single
/// space is tolerated after the `°` and `'` separators, and surrounding text
/// is ignored as long as it does not run into the numeric fields.
///
/// # Errors
///
/// Returns [`Error::UnparsableAngle`] when the input matches none of the
/// three formats.
///
/// # Usage
///
/// ```
/// use twd97::dms::parse_angle;
///
/// assert_eq!(parse_angle("24.237071").unwrap(), 24.237071);
///
/// let dms = parse_angle("24°14'13.456\"").unwrap();
/// assert!((dms - (24. + 14. / 60. + 13.456 / 3600.)).abs() < 1e-12);
///
/// let mindec = parse_angle("24°14.227'").unwrap();
/// assert!((mindec - (24. + 14.227 / 60.)).abs() < 1e-12);
///
/// assert!(parse_angle("not an angle").is_err());
/// ```
pub fn parse_angle(value: &str) -> Result<f64, Error> {
    if let Ok(parsed) = value.trim().parse::<f64>() {
        return Ok(parsed);
    }

    parse_pattern(value).ok_or_else(|| Error::UnparsableAngle(value.to_string()))
}

fn parse_pattern(value: &str) -> Option<f64> {
    let deg_end = value.find('°')?;

    // Signed run of digits immediately before the degree symbol.
    let head = &value[..deg_end];
    let bytes = head.as_bytes();
    let mut start = head.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == head.len() {
        return None;
    }
    let negative = start > 0 && bytes[start - 1] == b'-';
    if negative || (start > 0 && bytes[start - 1] == b'+') {
        start -= 1;
    }
    let degrees = head[start..].parse::<f64>().ok()?.abs();

    let rest = &value[deg_end + '°'.len_utf8()..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let (minute_text, rest) = rest.split_once('\'')?;
    let minutes = parse_magnitude(minute_text)?;

    // Seconds are only present when the minute field is a whole number and
    // the tail carries a SS.SSS" group.
    let magnitude = if minute_text.bytes().all(|b| b.is_ascii_digit()) {
        let tail = rest.strip_prefix(' ').unwrap_or(rest);
        match tail.split_once('"').and_then(|(text, _)| parse_magnitude(text)) {
            Some(seconds) => degrees + minutes / 60. + seconds / 3600.,
            None => degrees + minutes / 60.,
        }
    } else {
        degrees + minutes / 60.
    };

    Some(negative.ternary(-magnitude, magnitude))
}

fn parse_magnitude(text: &str) -> Option<f64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_formats() {
        assert_eq!(parse_angle("24.237071").unwrap(), 24.237071);
        assert!(
            (parse_angle("24°14'13.456\"").unwrap() - 24.237_071_111_111_113).abs() < 1e-12
        );
        assert!((parse_angle("24°14.227'").unwrap() - 24.237_116_666_666_665).abs() < 1e-12);
    }

    #[test]
    fn tolerates_spaces_and_surrounding_text() {
        assert!((parse_angle("24° 14' 13.456\"").unwrap() - 24.237_071_111_111_113).abs() < 1e-12);
        assert!((parse_angle("lat: 24°14.227' N").unwrap() - 24.237_116_666_666_665).abs() < 1e-12);
    }

    #[test]
    fn parses_signed_angles() {
        assert!((parse_angle("-24°30'0.0\"").unwrap() - -24.5).abs() < 1e-12);
        assert!((parse_angle("+24°30.0'").unwrap() - 24.5).abs() < 1e-12);
        assert!((parse_angle("-0°30.0'").unwrap() - -0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_angle("").is_err());
        assert!(parse_angle("twenty four degrees").is_err());
        assert!(parse_angle("°14.227'").is_err());
        assert!(parse_angle("24°1a.2'").is_err());
    }

    #[test]
    fn sign_stays_on_the_degree_component() {
        let dm = DegMin::from_degrees(-24.5);
        assert_eq!(dm.degrees(), -24);
        assert_eq!(dm.minutes(), 30.0);

        let dms = DegMinSec::from_degrees(-24.5);
        assert_eq!(dms.degrees(), -24);
        assert_eq!(dms.minutes(), 30);
        assert_eq!(dms.seconds(), 0.0);
    }

    #[test]
    fn formatting_round_trips_through_the_parser() {
        let mut x = -90.0_f64;
        while x <= 90.0 {
            let dms = parse_angle(&DegMinSec::from_degrees(x).to_string()).unwrap();
            assert!((dms - x).abs() < 1e-8, "dms round trip failed for {x}");

            let dm = parse_angle(&DegMin::from_degrees(x).to_string()).unwrap();
            assert!((dm - x).abs() < 1e-8, "mindec round trip failed for {x}");

            x += 0.37;
        }
    }

    #[test]
    fn splits_recombine_exactly() {
        for x in [-89.75, -24.5, -0.25, 0.0, 0.25, 24.237071, 89.75] {
            assert!((DegMin::from_degrees(x).to_degrees() - x).abs() < 1e-12);
            assert!((DegMinSec::from_degrees(x).to_degrees() - x).abs() < 1e-12);
        }
    }

    #[test]
    fn presentation_formatting_is_exhaustive() {
        assert_eq!(Presentation::DegDec.format(24.237117), "24.237117");
        assert_eq!(Presentation::MinDec.format(24.237117), "(24, 14.227020)");
        assert_eq!(Presentation::MinDecStr.format(24.237117), "24°14.227020'");
        assert_eq!(
            Presentation::Dms.format(24.237_071_111_111_113),
            "(24, 14, 13.456000)"
        );
        assert_eq!(
            Presentation::DmsStr.format(24.237_071_111_111_113),
            "24°14'13.456000\""
        );
    }
}
