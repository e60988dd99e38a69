//! Multi-channel volumes and the speaker layouts they apply to.

mod balance;
mod map;
mod position;
mod volume;


/// Maximum number of channels in a map or channel volume
pub const CHANNELS_MAX: usize = 32;

pub use balance::{
    Axis, Balance, get_axis_balance, get_balance, get_fade, get_lfe_balance, set_axis_balance,
    set_balance, set_fade, set_lfe_balance,
};
pub use map::ChannelMap;
pub use position::{AUX_CHANNELS, ChannelPosition, ChannelPositionMask};
pub use volume::{ChannelVolume, channel_volume_set};
