use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::volume::VolumeError;

/// Number of auxiliary channel positions
pub const AUX_CHANNELS: u8 = 32;

/// Semantic speaker position of a channel slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChannelPosition {
    /// Single channel without placement
    #[default]
    Mono,
    /// Front left
    FrontLeft,
    /// Front right
    FrontRight,
    /// Front center
    FrontCenter,
    /// Rear center
    RearCenter,
    /// Rear left
    RearLeft,
    /// Rear right
    RearRight,
    /// Low-frequency effects (subwoofer)
    Lfe,
    /// Front left of center
    FrontLeftOfCenter,
    /// Front right of center
    FrontRightOfCenter,
    /// Side left
    SideLeft,
    /// Side right
    SideRight,
    /// Auxiliary channel, 0-31
    Aux(u8),
    /// Top center
    TopCenter,
    /// Top front left
    TopFrontLeft,
    /// Top front right
    TopFrontRight,
    /// Top front center
    TopFrontCenter,
    /// Top rear left
    TopRearLeft,
    /// Top rear right
    TopRearRight,
    /// Top rear center
    TopRearCenter,
}

impl ChannelPosition {
    /// Numeric index of the position, also its bit in [`ChannelPositionMask`]
    pub fn index(self) -> u32 {
        match self {
            Self::Mono => 0,
            Self::FrontLeft => 1,
            Self::FrontRight => 2,
            Self::FrontCenter => 3,
            Self::RearCenter => 4,
            Self::RearLeft => 5,
            Self::RearRight => 6,
            Self::Lfe => 7,
            Self::FrontLeftOfCenter => 8,
            Self::FrontRightOfCenter => 9,
            Self::SideLeft => 10,
            Self::SideRight => 11,
            Self::Aux(n) => 12 + u32::from(n.min(AUX_CHANNELS - 1)),
            Self::TopCenter => 44,
            Self::TopFrontLeft => 45,
            Self::TopFrontRight => 46,
            Self::TopFrontCenter => 47,
            Self::TopRearLeft => 48,
            Self::TopRearRight => 49,
            Self::TopRearCenter => 50,
        }
    }

    /// Single-bit mask of this position
    pub fn mask(self) -> ChannelPositionMask {
        ChannelPositionMask::from_bits_retain(1u64 << self.index())
    }

    /// Canonical name, e.g. `front-left` or `aux3`
    pub fn name(self) -> String {
        let name = match self {
            Self::Mono => "mono",
            Self::FrontLeft => "front-left",
            Self::FrontRight => "front-right",
            Self::FrontCenter => "front-center",
            Self::RearCenter => "rear-center",
            Self::RearLeft => "rear-left",
            Self::RearRight => "rear-right",
            Self::Lfe => "lfe",
            Self::FrontLeftOfCenter => "front-left-of-center",
            Self::FrontRightOfCenter => "front-right-of-center",
            Self::SideLeft => "side-left",
            Self::SideRight => "side-right",
            Self::Aux(n) => return format!("aux{n}"),
            Self::TopCenter => "top-center",
            Self::TopFrontLeft => "top-front-left",
            Self::TopFrontRight => "top-front-right",
            Self::TopFrontCenter => "top-front-center",
            Self::TopRearLeft => "top-rear-left",
            Self::TopRearRight => "top-rear-right",
            Self::TopRearCenter => "top-rear-center",
        };
        name.to_string()
    }

    /// Check if the position is on the left side
    pub fn is_left(self) -> bool {
        ChannelPositionMask::LEFT.intersects(self.mask())
    }

    /// Check if the position is on the right side
    pub fn is_right(self) -> bool {
        ChannelPositionMask::RIGHT.intersects(self.mask())
    }
}

impl fmt::Display for ChannelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for ChannelPosition {
    type Err = VolumeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let position = match name.trim() {
            "mono" => Self::Mono,
            "front-left" | "left" => Self::FrontLeft,
            "front-right" | "right" => Self::FrontRight,
            "front-center" | "center" => Self::FrontCenter,
            "rear-center" => Self::RearCenter,
            "rear-left" => Self::RearLeft,
            "rear-right" => Self::RearRight,
            "lfe" | "subwoofer" => Self::Lfe,
            "front-left-of-center" => Self::FrontLeftOfCenter,
            "front-right-of-center" => Self::FrontRightOfCenter,
            "side-left" => Self::SideLeft,
            "side-right" => Self::SideRight,
            "top-center" => Self::TopCenter,
            "top-front-left" => Self::TopFrontLeft,
            "top-front-right" => Self::TopFrontRight,
            "top-front-center" => Self::TopFrontCenter,
            "top-rear-left" => Self::TopRearLeft,
            "top-rear-right" => Self::TopRearRight,
            "top-rear-center" => Self::TopRearCenter,
            other => {
                let aux = other
                    .strip_prefix("aux")
                    .and_then(|n| n.parse::<u8>().ok())
                    .filter(|n| *n < AUX_CHANNELS);

                match aux {
                    Some(n) => Self::Aux(n),
                    None => {
                        return Err(VolumeError::InvalidPosition {
                            name: name.to_string(),
                        });
                    }
                }
            }
        };

        Ok(position)
    }
}

impl TryFrom<String> for ChannelPosition {
    type Error = VolumeError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<ChannelPosition> for String {
    fn from(position: ChannelPosition) -> Self {
        position.name()
    }
}

bitflags! {
    /// Set of channel positions, one bit per position index.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelPositionMask: u64 {
        /// Mono
        const MONO = 1 << 0;
        /// Front left
        const FRONT_LEFT = 1 << 1;
        /// Front right
        const FRONT_RIGHT = 1 << 2;
        /// Front center
        const FRONT_CENTER = 1 << 3;
        /// Rear center
        const REAR_CENTER = 1 << 4;
        /// Rear left
        const REAR_LEFT = 1 << 5;
        /// Rear right
        const REAR_RIGHT = 1 << 6;
        /// Low-frequency effects
        const LFE = 1 << 7;
        /// Front left of center
        const FRONT_LEFT_OF_CENTER = 1 << 8;
        /// Front right of center
        const FRONT_RIGHT_OF_CENTER = 1 << 9;
        /// Side left
        const SIDE_LEFT = 1 << 10;
        /// Side right
        const SIDE_RIGHT = 1 << 11;
        /// All auxiliary positions
        const AUX = 0xFFFF_FFFF << 12;
        /// Top center
        const TOP_CENTER = 1 << 44;
        /// Top front left
        const TOP_FRONT_LEFT = 1 << 45;
        /// Top front right
        const TOP_FRONT_RIGHT = 1 << 46;
        /// Top front center
        const TOP_FRONT_CENTER = 1 << 47;
        /// Top rear left
        const TOP_REAR_LEFT = 1 << 48;
        /// Top rear right
        const TOP_REAR_RIGHT = 1 << 49;
        /// Top rear center
        const TOP_REAR_CENTER = 1 << 50;

        /// Positions on the listener's left
        const LEFT = Self::FRONT_LEFT.bits()
            | Self::REAR_LEFT.bits()
            | Self::FRONT_LEFT_OF_CENTER.bits()
            | Self::SIDE_LEFT.bits()
            | Self::TOP_FRONT_LEFT.bits()
            | Self::TOP_REAR_LEFT.bits();

        /// Positions on the listener's right
        const RIGHT = Self::FRONT_RIGHT.bits()
            | Self::REAR_RIGHT.bits()
            | Self::FRONT_RIGHT_OF_CENTER.bits()
            | Self::SIDE_RIGHT.bits()
            | Self::TOP_FRONT_RIGHT.bits()
            | Self::TOP_REAR_RIGHT.bits();

        /// Positions on the center line
        const CENTER = Self::FRONT_CENTER.bits()
            | Self::REAR_CENTER.bits()
            | Self::TOP_CENTER.bits()
            | Self::TOP_FRONT_CENTER.bits()
            | Self::TOP_REAR_CENTER.bits();

        /// Positions in front of the listener
        const FRONT = Self::FRONT_LEFT.bits()
            | Self::FRONT_RIGHT.bits()
            | Self::FRONT_CENTER.bits()
            | Self::TOP_FRONT_LEFT.bits()
            | Self::TOP_FRONT_RIGHT.bits()
            | Self::TOP_FRONT_CENTER.bits()
            | Self::FRONT_LEFT_OF_CENTER.bits()
            | Self::FRONT_RIGHT_OF_CENTER.bits();

        /// Positions behind the listener
        const REAR = Self::REAR_LEFT.bits()
            | Self::REAR_RIGHT.bits()
            | Self::REAR_CENTER.bits()
            | Self::TOP_REAR_LEFT.bits()
            | Self::TOP_REAR_RIGHT.bits()
            | Self::TOP_REAR_CENTER.bits();

        /// Side positions and the top center
        const SIDE_OR_TOP_CENTER = Self::SIDE_LEFT.bits()
            | Self::SIDE_RIGHT.bits()
            | Self::TOP_CENTER.bits();

        /// Positions above the listener
        const TOP = Self::TOP_CENTER.bits()
            | Self::TOP_FRONT_LEFT.bits()
            | Self::TOP_FRONT_RIGHT.bits()
            | Self::TOP_FRONT_CENTER.bits()
            | Self::TOP_REAR_LEFT.bits()
            | Self::TOP_REAR_RIGHT.bits()
            | Self::TOP_REAR_CENTER.bits();

        /// Every position except the subwoofer
        const HFE = Self::MONO.bits()
            | Self::FRONT_LEFT.bits()
            | Self::FRONT_RIGHT.bits()
            | Self::FRONT_CENTER.bits()
            | Self::REAR_CENTER.bits()
            | Self::REAR_LEFT.bits()
            | Self::REAR_RIGHT.bits()
            | Self::FRONT_LEFT_OF_CENTER.bits()
            | Self::FRONT_RIGHT_OF_CENTER.bits()
            | Self::SIDE_LEFT.bits()
            | Self::SIDE_RIGHT.bits()
            | Self::AUX.bits()
            | Self::TOP.bits();
    }
}
