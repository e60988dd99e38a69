//! Balance, fade and LFE balance over a channel volume.
//!
//! All three are the same computation along a different axis: the channels
//! of a map are split into a negative and a positive side, each side is
//! reduced to the average of its volumes, and the balance expresses how much
//! the quieter side is attenuated relative to the louder one.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ChannelMap, ChannelPositionMask, ChannelVolume};
use crate::volume::{Volume, VolumeError};

/// Relative attenuation between two sides, in `[-1.0, 1.0]`
///
/// For left/right balance `-1.0` is full left, `0.0` centered and `1.0`
/// full right.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Balance(f64);

impl Balance {
    /// Both sides at equal volume
    pub const CENTER: Balance = Balance(0.0);

    /// Only the negative side audible
    pub const FULL_NEGATIVE: Balance = Balance(-1.0);

    /// Only the positive side audible
    pub const FULL_POSITIVE: Balance = Balance(1.0);

    /// Create a balance value
    ///
    /// # Errors
    /// Returns error if `value` is NaN or outside `[-1.0, 1.0]`.
    pub fn new(value: f64) -> Result<Self, VolumeError> {
        if value.is_nan() {
            return Err(VolumeError::NotANumber);
        }
        if !(-1.0..=1.0).contains(&value) {
            return Err(VolumeError::BalanceOutOfRange { balance: value });
        }
        Ok(Self(value))
    }

    /// The underlying value
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.precision$}", self.0)
    }
}

impl TryFrom<f64> for Balance {
    type Error = VolumeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Balance> for f64 {
    fn from(balance: Balance) -> Self {
        balance.0
    }
}

/// Pair of position classes a balance is measured between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    /// Side reported by negative balance values
    pub negative: ChannelPositionMask,
    /// Side reported by positive balance values
    pub positive: ChannelPositionMask,
}

impl Axis {
    /// Left (negative) versus right (positive)
    pub const LEFT_RIGHT: Axis = Axis {
        negative: ChannelPositionMask::LEFT,
        positive: ChannelPositionMask::RIGHT,
    };

    /// Rear (negative) versus front (positive)
    pub const REAR_FRONT: Axis = Axis {
        negative: ChannelPositionMask::REAR,
        positive: ChannelPositionMask::FRONT,
    };

    /// Full range (negative) versus subwoofer (positive)
    ///
    /// `-1.0` silences the subwoofer, `1.0` leaves only the subwoofer.
    pub const LFE_HFE: Axis = Axis {
        negative: ChannelPositionMask::HFE,
        positive: ChannelPositionMask::LFE,
    };

    fn is_available(&self, map: &ChannelMap) -> bool {
        map.has_any(self.negative) && map.has_any(self.positive)
    }
}

/// Left/right balance of `volume`
///
/// Returns `Balance::CENTER` when the map lacks a left or a right channel,
/// or when both sides are equally loud (both muted included).
///
/// # Errors
/// Returns error if `volume` and `map` have different channel counts.
pub fn get_balance(volume: &ChannelVolume, map: &ChannelMap) -> Result<Balance, VolumeError> {
    get_axis_balance(volume, map, Axis::LEFT_RIGHT)
}

/// Attenuate the left or right side so that `get_balance` reports `balance`
///
/// The louder side keeps its volume; channels that are neither left nor
/// right are untouched. Maps without both sides return `volume` unchanged.
///
/// # Errors
/// Returns error if `volume` and `map` have different channel counts.
pub fn set_balance(
    volume: &ChannelVolume,
    map: &ChannelMap,
    balance: Balance,
) -> Result<ChannelVolume, VolumeError> {
    set_axis_balance(volume, map, Axis::LEFT_RIGHT, balance)
}

/// Rear/front fade of `volume`
///
/// # Errors
/// Returns error if `volume` and `map` have different channel counts.
pub fn get_fade(volume: &ChannelVolume, map: &ChannelMap) -> Result<Balance, VolumeError> {
    get_axis_balance(volume, map, Axis::REAR_FRONT)
}

/// Attenuate the rear or front side so that `get_fade` reports `fade`
///
/// # Errors
/// Returns error if `volume` and `map` have different channel counts.
pub fn set_fade(
    volume: &ChannelVolume,
    map: &ChannelMap,
    fade: Balance,
) -> Result<ChannelVolume, VolumeError> {
    set_axis_balance(volume, map, Axis::REAR_FRONT, fade)
}

/// Full-range versus subwoofer balance of `volume`
///
/// Negative values mean a quieter subwoofer; `-1.0` is a muted subwoofer.
///
/// # Errors
/// Returns error if `volume` and `map` have different channel counts.
pub fn get_lfe_balance(volume: &ChannelVolume, map: &ChannelMap) -> Result<Balance, VolumeError> {
    get_axis_balance(volume, map, Axis::LFE_HFE)
}

/// Attenuate the subwoofer or the full-range channels so that
/// `get_lfe_balance` reports `balance`
///
/// # Errors
/// Returns error if `volume` and `map` have different channel counts.
pub fn set_lfe_balance(
    volume: &ChannelVolume,
    map: &ChannelMap,
    balance: Balance,
) -> Result<ChannelVolume, VolumeError> {
    set_axis_balance(volume, map, Axis::LFE_HFE, balance)
}

/// Balance of `volume` along an arbitrary axis
///
/// # Errors
/// Returns error if `volume` and `map` have different channel counts.
pub fn get_axis_balance(
    volume: &ChannelVolume,
    map: &ChannelMap,
    axis: Axis,
) -> Result<Balance, VolumeError> {
    check_compatible(volume, map)?;

    if !axis.is_available(map) {
        return Ok(Balance::CENTER);
    }

    let (negative, positive) = side_averages(volume, map, axis);
    if negative == positive {
        return Ok(Balance::CENTER);
    }

    let negative = f64::from(negative.raw());
    let positive = f64::from(positive.raw());

    let value = if negative > positive {
        -1.0 + positive / negative
    } else {
        1.0 - negative / positive
    };

    Ok(Balance(value))
}

/// Apply `balance` to `volume` along an arbitrary axis
///
/// # Errors
/// Returns error if `volume` and `map` have different channel counts.
pub fn set_axis_balance(
    volume: &ChannelVolume,
    map: &ChannelMap,
    axis: Axis,
    balance: Balance,
) -> Result<ChannelVolume, VolumeError> {
    check_compatible(volume, map)?;

    if !axis.is_available(map) {
        tracing::debug!(%map, "channel map cannot be balanced along {axis:?}");
        return Ok(*volume);
    }

    let (negative, positive) = side_averages(volume, map, axis);
    let loudest = negative.max(positive);
    let attenuated =
        |fraction: f64| Volume::saturating((fraction * f64::from(loudest.raw())) as u64);

    let (new_negative, new_positive) = if balance.get() <= 0.0 {
        (loudest, attenuated(balance.get() + 1.0))
    } else {
        (attenuated(1.0 - balance.get()), loudest)
    };

    let mut result = *volume;
    for (index, position) in map.as_slice().iter().enumerate() {
        let mask = position.mask();
        let (old, new) = if axis.negative.intersects(mask) {
            (negative, new_negative)
        } else if axis.positive.intersects(mask) {
            (positive, new_positive)
        } else {
            continue;
        };

        let current = volume.get(index).unwrap_or(Volume::MUTED);
        let updated = if old.is_muted() {
            new
        } else {
            Volume::saturating(
                u64::from(current.raw()) * u64::from(new.raw()) / u64::from(old.raw()),
            )
        };
        result.set_channel(index, updated)?;
    }

    Ok(result)
}

fn check_compatible(volume: &ChannelVolume, map: &ChannelMap) -> Result<(), VolumeError> {
    if !volume.is_compatible_with(map) {
        return Err(VolumeError::ChannelMapMismatch {
            volumes: volume.channels(),
            map: map.channels(),
        });
    }
    Ok(())
}

/// Average volume of each side; a side without channels counts as `NORM`
fn side_averages(volume: &ChannelVolume, map: &ChannelMap, axis: Axis) -> (Volume, Volume) {
    let mut negative = (0u64, 0u64);
    let mut positive = (0u64, 0u64);

    for (value, position) in volume.as_slice().iter().zip(map.as_slice()) {
        let mask = position.mask();
        if axis.negative.intersects(mask) {
            negative.0 += u64::from(value.raw());
            negative.1 += 1;
        } else if axis.positive.intersects(mask) {
            positive.0 += u64::from(value.raw());
            positive.1 += 1;
        }
    }

    let average = |(sum, count): (u64, u64)| {
        if count == 0 {
            Volume::NORM
        } else {
            Volume::saturating(sum / count)
        }
    };

    (average(negative), average(positive))
}
