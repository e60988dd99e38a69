use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{CHANNELS_MAX, ChannelPosition, ChannelPositionMask};
use crate::volume::VolumeError;

use super::ChannelPosition::{
    FrontCenter, FrontLeft, FrontRight, Lfe, Mono, RearLeft, RearRight, SideLeft, SideRight,
};

const SURROUND_21: &[ChannelPosition] = &[FrontLeft, FrontRight, Lfe];
const SURROUND_40: &[ChannelPosition] = &[FrontLeft, FrontRight, RearLeft, RearRight];
const SURROUND_41: &[ChannelPosition] = &[FrontLeft, FrontRight, RearLeft, RearRight, Lfe];
const SURROUND_50: &[ChannelPosition] = &[FrontLeft, FrontRight, RearLeft, RearRight, FrontCenter];
const SURROUND_51: &[ChannelPosition] = &[
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
    FrontCenter,
    Lfe,
];
const SURROUND_71: &[ChannelPosition] = &[
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
    FrontCenter,
    Lfe,
    SideLeft,
    SideRight,
];

/// Assignment of speaker positions to channel slots
///
/// Holds up to [`CHANNELS_MAX`] positions inline; slots beyond
/// `channels()` are unused and ignored by comparisons.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelMap {
    channels: u8,
    positions: [ChannelPosition; CHANNELS_MAX],
}

impl ChannelMap {
    /// Create a map from a list of positions
    ///
    /// # Errors
    /// Returns error if `positions` is empty or longer than `CHANNELS_MAX`.
    pub fn new(positions: &[ChannelPosition]) -> Result<Self, VolumeError> {
        if positions.is_empty() || positions.len() > CHANNELS_MAX {
            return Err(VolumeError::InvalidChannelCount {
                count: positions.len(),
                max: CHANNELS_MAX,
            });
        }

        let mut map = Self {
            channels: positions.len() as u8,
            positions: [ChannelPosition::default(); CHANNELS_MAX],
        };
        map.positions[..positions.len()].copy_from_slice(positions);

        Ok(map)
    }

    /// Single mono channel
    pub fn mono() -> Self {
        Self {
            channels: 1,
            positions: [Mono; CHANNELS_MAX],
        }
    }

    /// Front left and front right
    pub fn stereo() -> Self {
        let mut positions = [ChannelPosition::default(); CHANNELS_MAX];
        positions[0] = FrontLeft;
        positions[1] = FrontRight;

        Self {
            channels: 2,
            positions,
        }
    }

    /// Default ALSA layout for the given channel count
    ///
    /// # Errors
    /// Returns error if ALSA defines no layout for `channels` (0, 7, or more
    /// than 8).
    pub fn alsa(channels: usize) -> Result<Self, VolumeError> {
        match channels {
            1 => Ok(Self::mono()),
            2 => Ok(Self::stereo()),
            3 => Self::new(SURROUND_21),
            4 => Self::new(SURROUND_40),
            5 => Self::new(SURROUND_50),
            6 => Self::new(SURROUND_51),
            8 => Self::new(SURROUND_71),
            _ => Err(VolumeError::InvalidChannelMap {
                input: format!("alsa:{channels}"),
                reason: format!("no default ALSA layout for {channels} channels"),
            }),
        }
    }

    /// Number of valid channels
    pub fn channels(&self) -> usize {
        usize::from(self.channels)
    }

    /// Position of channel `index`, if valid
    pub fn get(&self, index: usize) -> Option<ChannelPosition> {
        self.as_slice().get(index).copied()
    }

    /// Positions of all valid channels
    pub fn as_slice(&self) -> &[ChannelPosition] {
        &self.positions[..self.channels()]
    }

    /// Union of the masks of all positions in the map
    pub fn mask(&self) -> ChannelPositionMask {
        self.as_slice()
            .iter()
            .fold(ChannelPositionMask::empty(), |acc, position| {
                acc | position.mask()
            })
    }

    /// Check if any channel is at one of the positions in `mask`
    pub fn has_any(&self, mask: ChannelPositionMask) -> bool {
        self.mask().intersects(mask)
    }

    /// Check if the map has both a left and a right channel
    pub fn can_balance(&self) -> bool {
        self.has_any(ChannelPositionMask::LEFT) && self.has_any(ChannelPositionMask::RIGHT)
    }

    /// Check if the map has both a front and a rear channel
    pub fn can_fade(&self) -> bool {
        self.has_any(ChannelPositionMask::FRONT) && self.has_any(ChannelPositionMask::REAR)
    }

    /// Check if the map has both a subwoofer and a full-range channel
    pub fn can_lfe_balance(&self) -> bool {
        self.has_any(ChannelPositionMask::LFE) && self.has_any(ChannelPositionMask::HFE)
    }
}

impl PartialEq for ChannelMap {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ChannelMap {}

impl fmt::Debug for ChannelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChannelMap")
            .field(&self.as_slice())
            .finish()
    }
}

impl fmt::Display for ChannelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{position}")?;
        }
        Ok(())
    }
}

/// Parses either a layout shortcut (`stereo`, `surround-51`, ...) or a
/// comma-separated list of position names.
impl FromStr for ChannelMap {
    type Err = VolumeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let shortcut = match input.trim() {
            "mono" => Some(Self::mono()),
            "stereo" => Some(Self::stereo()),
            "surround-21" => Some(Self::new(SURROUND_21)?),
            "surround-40" => Some(Self::new(SURROUND_40)?),
            "surround-41" => Some(Self::new(SURROUND_41)?),
            "surround-50" => Some(Self::new(SURROUND_50)?),
            "surround-51" => Some(Self::new(SURROUND_51)?),
            "surround-71" => Some(Self::new(SURROUND_71)?),
            _ => None,
        };
        if let Some(map) = shortcut {
            return Ok(map);
        }

        let mut positions = [ChannelPosition::default(); CHANNELS_MAX];
        let mut channels = 0;

        for name in input.split(',') {
            if channels == CHANNELS_MAX {
                return Err(VolumeError::InvalidChannelMap {
                    input: input.to_string(),
                    reason: format!("more than {CHANNELS_MAX} channels"),
                });
            }
            positions[channels] = name.parse()?;
            channels += 1;
        }

        Self::new(&positions[..channels])
    }
}

impl TryFrom<String> for ChannelMap {
    type Error = VolumeError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl From<ChannelMap> for String {
    fn from(map: ChannelMap) -> Self {
        map.to_string()
    }
}
