use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CHANNELS_MAX, ChannelMap};
use crate::volume::{Volume, VolumeError, divide_volume, multiply_volume};

/// Per-channel software volumes
///
/// Fixed-capacity and allocation-free: up to [`CHANNELS_MAX`] volumes are
/// stored inline next to the count of valid channels. Slots beyond
/// `channels()` are kept at `Volume::MUTED` and ignored by comparisons.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "Vec<Volume>", into = "Vec<Volume>")]
pub struct ChannelVolume {
    channels: u8,
    values: [Volume; CHANNELS_MAX],
}

/// Fill `count` channels with the same volume
///
/// # Errors
/// Returns error if `count` is zero or exceeds `CHANNELS_MAX`.
pub fn channel_volume_set(count: usize, value: Volume) -> Result<ChannelVolume, VolumeError> {
    ChannelVolume::set(count, value)
}

impl ChannelVolume {
    /// Fill `count` channels with the same volume
    ///
    /// # Errors
    /// Returns error if `count` is zero or exceeds `CHANNELS_MAX`.
    pub fn set(count: usize, value: Volume) -> Result<Self, VolumeError> {
        check_count(count)?;

        let mut values = [Volume::MUTED; CHANNELS_MAX];
        values[..count].fill(value);

        Ok(Self {
            channels: count as u8,
            values,
        })
    }

    /// Create from explicit per-channel volumes
    ///
    /// # Errors
    /// Returns error if `volumes` is empty or longer than `CHANNELS_MAX`.
    pub fn from_slice(volumes: &[Volume]) -> Result<Self, VolumeError> {
        check_count(volumes.len())?;

        let mut values = [Volume::MUTED; CHANNELS_MAX];
        values[..volumes.len()].copy_from_slice(volumes);

        Ok(Self {
            channels: volumes.len() as u8,
            values,
        })
    }

    /// Number of valid channels
    pub fn channels(&self) -> usize {
        usize::from(self.channels)
    }

    /// Volume of channel `index`, if valid
    pub fn get(&self, index: usize) -> Option<Volume> {
        self.as_slice().get(index).copied()
    }

    /// Set the volume of a single channel
    ///
    /// # Errors
    /// Returns error if `index` is not a valid channel.
    pub fn set_channel(&mut self, index: usize, volume: Volume) -> Result<(), VolumeError> {
        let channels = self.channels();
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or(VolumeError::InvalidChannel {
                channel: index,
                channels,
            })?;

        *slot = volume;
        Ok(())
    }

    /// Volumes of all valid channels
    pub fn as_slice(&self) -> &[Volume] {
        &self.values[..self.channels()]
    }

    fn as_mut_slice(&mut self) -> &mut [Volume] {
        let channels = self.channels();
        &mut self.values[..channels]
    }

    /// Arithmetic mean of the raw channel values
    pub fn average(&self) -> Volume {
        let sum: u64 = self.as_slice().iter().map(|v| u64::from(v.raw())).sum();
        Volume::saturating(sum / self.channels.max(1) as u64)
    }

    /// Loudest channel
    pub fn max(&self) -> Volume {
        self.as_slice()
            .iter()
            .copied()
            .max()
            .unwrap_or(Volume::MUTED)
    }

    /// Quietest channel
    pub fn min(&self) -> Volume {
        self.as_slice()
            .iter()
            .copied()
            .min()
            .unwrap_or(Volume::MUTED)
    }

    /// Check if every channel is muted
    pub fn is_muted(&self) -> bool {
        self.as_slice().iter().all(|v| v.is_muted())
    }

    /// Check if every channel is at unity gain
    pub fn is_norm(&self) -> bool {
        self.as_slice().iter().all(|v| v.is_norm())
    }

    /// Rescale so the loudest channel becomes `max`, keeping the ratios
    /// between channels
    ///
    /// If every channel is muted, all channels are set to `max`.
    pub fn scale(&self, max: Volume) -> Self {
        let current = self.max();
        let mut scaled = *self;

        if current.is_muted() {
            scaled.as_mut_slice().fill(max);
            return scaled;
        }

        for value in scaled.as_mut_slice() {
            *value = Volume::saturating(
                u64::from(value.raw()) * u64::from(max.raw()) / u64::from(current.raw()),
            );
        }
        scaled
    }

    /// Multiply channel by channel
    ///
    /// # Errors
    /// Returns error if the channel counts differ.
    pub fn multiply(&self, other: &ChannelVolume) -> Result<Self, VolumeError> {
        if self.channels != other.channels {
            return Err(VolumeError::ChannelCountMismatch {
                left: self.channels(),
                right: other.channels(),
            });
        }

        let mut product = *self;
        for (value, factor) in product.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *value = multiply_volume(*value, *factor);
        }
        Ok(product)
    }

    /// Multiply every channel by the same gain
    pub fn multiply_scalar(&self, factor: Volume) -> Self {
        let mut product = *self;
        for value in product.as_mut_slice() {
            *value = multiply_volume(*value, factor);
        }
        product
    }

    /// Divide every channel by the same gain
    pub fn divide_scalar(&self, divisor: Volume) -> Self {
        let mut quotient = *self;
        for value in quotient.as_mut_slice() {
            *value = divide_volume(*value, divisor);
        }
        quotient
    }

    /// Check if the volume has one value per channel of `map`
    pub fn is_compatible_with(&self, map: &ChannelMap) -> bool {
        self.channels() == map.channels()
    }

    /// Format every channel in decibels, e.g. `0: 0.00 dB 1: -18.06 dB`
    pub fn display_db(&self) -> String {
        self.as_slice()
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{i}: {}", v.display_db()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format every channel with its position name, e.g.
    /// `front-left: 100% front-right: 50%`
    ///
    /// # Errors
    /// Returns error if the map has a different channel count.
    pub fn display_with_map(&self, map: &ChannelMap) -> Result<String, VolumeError> {
        if !self.is_compatible_with(map) {
            return Err(VolumeError::ChannelMapMismatch {
                volumes: self.channels(),
                map: map.channels(),
            });
        }

        Ok(self
            .as_slice()
            .iter()
            .zip(map.as_slice())
            .map(|(v, position)| format!("{position}: {v}"))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

fn check_count(count: usize) -> Result<(), VolumeError> {
    if count == 0 || count > CHANNELS_MAX {
        return Err(VolumeError::InvalidChannelCount {
            count,
            max: CHANNELS_MAX,
        });
    }
    Ok(())
}

impl PartialEq for ChannelVolume {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ChannelVolume {}

impl fmt::Debug for ChannelVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChannelVolume")
            .field(&self.as_slice())
            .finish()
    }
}

impl fmt::Display for ChannelVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{i}: {value}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Volume>> for ChannelVolume {
    type Error = VolumeError;

    fn try_from(volumes: Vec<Volume>) -> Result<Self, Self::Error> {
        Self::from_slice(&volumes)
    }
}

impl From<ChannelVolume> for Vec<Volume> {
    fn from(volume: ChannelVolume) -> Self {
        volume.as_slice().to_vec()
    }
}
