use std::{fmt, ops::Add};

use serde::{Deserialize, Serialize};

use super::{VolumeError, conversion};

/// Fixed-point software volume
///
/// The raw value maps cubically onto a linear amplitude factor:
/// `linear = (raw / NORM)^3`.
/// - `MUTED` (0) = silence, -inf dB
/// - `NORM` (0x10000) = unity gain, 0 dB
/// - `MAX` (`u32::MAX / 2`) = saturation ceiling
///
/// Raw values above `MAX` cannot be constructed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Volume(u32);

impl Volume {
    /// Silence
    pub const MUTED: Volume = Volume(0);

    /// Unity gain (100%)
    pub const NORM: Volume = Volume(0x10000);

    /// Largest representable volume
    pub const MAX: Volume = Volume(u32::MAX / 2);

    /// Upper bound of the range considered safe for playback (200%)
    pub const SAFE_MAX: Volume = Volume(0x20000);

    /// Create a volume from its raw fixed-point value
    ///
    /// # Errors
    /// Returns error if `raw` exceeds `Volume::MAX`.
    pub const fn new(raw: u32) -> Result<Self, VolumeError> {
        if raw > Self::MAX.0 {
            return Err(VolumeError::OutOfRange {
                raw,
                max: Self::MAX.0,
            });
        }
        Ok(Self(raw))
    }

    /// Create a volume from a raw value, clamping to `Volume::MAX`
    pub const fn saturating(raw: u64) -> Self {
        if raw > Self::MAX.0 as u64 {
            Self::MAX
        } else {
            Self(raw as u32)
        }
    }

    /// Raw fixed-point value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if the volume is silent
    pub const fn is_muted(self) -> bool {
        self.0 == Self::MUTED.0
    }

    /// Check if the volume is exactly unity gain
    pub const fn is_norm(self) -> bool {
        self.0 == Self::NORM.0
    }

    /// Convert a linear factor, rejecting negative or NaN input
    ///
    /// # Errors
    /// Returns error if `factor` is negative or NaN.
    pub fn try_from_linear(factor: f64) -> Result<Self, VolumeError> {
        Ok(conversion::linear_to_volume(LinearFactor::new(factor)?))
    }

    /// Convert a decibel value, rejecting NaN input
    ///
    /// # Errors
    /// Returns error if `db` is NaN.
    pub fn try_from_db(db: f64) -> Result<Self, VolumeError> {
        Ok(conversion::db_to_volume(Decibels::new(db)?))
    }

    /// Linear amplitude factor of this volume
    pub fn to_linear(self) -> LinearFactor {
        conversion::volume_to_linear(self)
    }

    /// Decibel value of this volume
    pub fn to_db(self) -> Decibels {
        conversion::volume_to_db(self)
    }

    /// Create a volume from a percentage of the raw `NORM` value
    ///
    /// 100% is `NORM`; percentages are proportional to the raw value, not to
    /// the linear amplitude.
    ///
    /// # Errors
    /// Returns error if `percent` is negative or NaN.
    pub fn from_percent(percent: f64) -> Result<Self, VolumeError> {
        if percent.is_nan() {
            return Err(VolumeError::NotANumber);
        }
        if percent < 0.0 {
            return Err(VolumeError::NegativeFactor { factor: percent });
        }

        let raw = (percent / 100.0 * f64::from(Self::NORM.0)).round();
        if raw >= f64::from(Self::MAX.0) {
            tracing::warn!("Volume {percent}% clamped to maximum");
            return Ok(Self::MAX);
        }

        Ok(Self(raw as u32))
    }

    /// Volume as a percentage of `NORM`
    pub fn percent(self) -> f64 {
        f64::from(self.0) * 100.0 / f64::from(Self::NORM.0)
    }

    /// Raise the volume by `step`, never exceeding `limit`
    ///
    /// `limit` itself is capped at `Volume::MAX`.
    pub fn saturating_add(self, step: Volume, limit: Volume) -> Self {
        let limit = limit.min(Self::MAX);
        let raised = Self::saturating(u64::from(self.0) + u64::from(step.0));
        if raised > limit {
            tracing::debug!(
                volume = self.0,
                step = step.0,
                limit = limit.0,
                "volume increase clamped"
            );
        }
        raised.min(limit)
    }

    /// Lower the volume by `step`, stopping at `MUTED`
    pub fn saturating_sub(self, step: Volume) -> Self {
        Self(self.0.saturating_sub(step.0))
    }

    /// Format as decibels with two decimals, e.g. `-6.02 dB` or `-inf dB`
    pub fn display_db(self) -> String {
        format!("{:.2}", self.to_db())
    }

    /// Format raw value, percentage and decibels, e.g. `65536 / 100% / 0.00 dB`
    pub fn display_verbose(self) -> String {
        format!("{} / {} / {}", self.0, self, self.display_db())
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.percent())
    }
}

impl TryFrom<u32> for Volume {
    type Error = VolumeError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Volume> for u32 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

/// Linear amplitude multiplier
///
/// 0.0 is silence, 1.0 unity gain. Always non-negative and never NaN;
/// positive infinity is accepted and saturates on conversion.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct LinearFactor(f64);

impl LinearFactor {
    /// Silence
    pub const SILENT: LinearFactor = LinearFactor(0.0);

    /// Unity gain
    pub const UNITY: LinearFactor = LinearFactor(1.0);

    /// Create a linear factor
    ///
    /// # Errors
    /// Returns error if `factor` is negative or NaN.
    pub fn new(factor: f64) -> Result<Self, VolumeError> {
        if factor.is_nan() {
            return Err(VolumeError::NotANumber);
        }
        if factor < 0.0 {
            return Err(VolumeError::NegativeFactor { factor });
        }
        Ok(Self(factor))
    }

    /// The underlying multiplier
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Decibel value of this factor
    pub fn to_db(self) -> Decibels {
        if self.0 <= 0.0 {
            Decibels::Silent
        } else {
            Decibels::Finite(20.0 * self.0.log10())
        }
    }
}

impl std::ops::Mul for LinearFactor {
    type Output = LinearFactor;

    fn mul(self, rhs: LinearFactor) -> LinearFactor {
        // inf * 0 is the only NaN source; silence wins
        if self.0 == 0.0 || rhs.0 == 0.0 {
            return LinearFactor::SILENT;
        }
        LinearFactor(self.0 * rhs.0)
    }
}

impl TryFrom<f64> for LinearFactor {
    type Error = VolumeError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Self::new(factor)
    }
}

impl From<LinearFactor> for f64 {
    fn from(factor: LinearFactor) -> Self {
        factor.0
    }
}

/// Gain in decibels relative to unity
///
/// Silence is its own variant instead of an IEEE negative infinity, so
/// arithmetic on decibels cannot produce NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Decibels {
    /// -inf dB
    Silent,
    /// Finite or positive-infinite decibel value
    Finite(f64),
}

impl Decibels {
    /// Unity gain
    pub const UNITY: Decibels = Decibels::Finite(0.0);

    /// Attenuation floor in dB: anything at or below it converts to
    /// `Volume::MUTED`
    ///
    /// Sits just under -288.99 dB, the level of raw volume 1, so requests
    /// quieter than the quietest audible volume are never rounded up to it.
    pub const FLOOR: f64 = -289.0;

    /// Create a decibel value; negative infinity becomes `Silent`
    ///
    /// # Errors
    /// Returns error if `db` is NaN.
    pub fn new(db: f64) -> Result<Self, VolumeError> {
        if db.is_nan() {
            return Err(VolumeError::NotANumber);
        }
        if db == f64::NEG_INFINITY {
            return Ok(Self::Silent);
        }
        Ok(Self::Finite(db))
    }

    /// Value as `f64`, with `Silent` mapped to negative infinity
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Silent => f64::NEG_INFINITY,
            Self::Finite(db) => db,
        }
    }

    /// Check if this is the silent sentinel
    pub fn is_silent(self) -> bool {
        matches!(self, Self::Silent)
    }

    /// Linear amplitude factor, `10^(db / 20)`
    pub fn to_linear(self) -> LinearFactor {
        match self {
            Self::Silent => LinearFactor::SILENT,
            Self::Finite(db) => LinearFactor(10.0_f64.powf(db / 20.0)),
        }
    }
}

impl Add for Decibels {
    type Output = Decibels;

    fn add(self, rhs: Decibels) -> Decibels {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => {
                let sum = a + b;
                // +inf + -inf cannot happen (Silent is never Finite(-inf)),
                // but overflow towards -inf is still silence
                if sum == f64::NEG_INFINITY || sum.is_nan() {
                    Self::Silent
                } else {
                    Self::Finite(sum)
                }
            }
            _ => Self::Silent,
        }
    }
}

impl fmt::Display for Decibels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        match self {
            Self::Silent => write!(f, "-inf dB"),
            Self::Finite(db) => write!(f, "{db:.precision$} dB"),
        }
    }
}
