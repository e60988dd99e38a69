/// Volume-related errors
///
/// Every variant describes a caller-supplied value outside the documented
/// domain of an operation. Rounding drift between conversion paths is never
/// reported here.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum VolumeError {
    /// Linear factor below zero
    #[error("Linear factor {factor} is negative (must be >= 0.0)")]
    NegativeFactor {
        /// Rejected factor
        factor: f64,
    },

    /// NaN supplied where a number was required
    #[error("Value is not a number")]
    NotANumber,

    /// Raw software volume above the representable maximum
    #[error("Raw volume {raw} exceeds the maximum {max}")]
    OutOfRange {
        /// Rejected raw value
        raw: u32,
        /// Largest accepted raw value
        max: u32,
    },

    /// Channel count of zero or above the supported maximum
    #[error("Invalid channel count {count} (must be 1-{max})")]
    InvalidChannelCount {
        /// Rejected channel count
        count: usize,
        /// Largest supported channel count
        max: usize,
    },

    /// Channel index outside the valid channels
    #[error("Invalid channel index {channel} for {channels} channel(s)")]
    InvalidChannel {
        /// Channel index
        channel: usize,
        /// Number of valid channels
        channels: usize,
    },

    /// Two channel vectors that must line up do not
    #[error("Channel count mismatch: {left} vs {right}")]
    ChannelCountMismatch {
        /// Channels on the left-hand side
        left: usize,
        /// Channels on the right-hand side
        right: usize,
    },

    /// Channel volume and channel map disagree on the channel count
    #[error("Channel volume has {volumes} channel(s) but the map has {map}")]
    ChannelMapMismatch {
        /// Channels in the volume
        volumes: usize,
        /// Channels in the map
        map: usize,
    },

    /// Balance outside [-1.0, 1.0]
    #[error("Balance {balance} is out of range (must be -1.0 to 1.0)")]
    BalanceOutOfRange {
        /// Rejected balance
        balance: f64,
    },

    /// Volume string that matches none of the accepted forms
    #[error("Cannot parse volume '{input}' (expected e.g. '50%', '-6dB', '0.5' or '#65536')")]
    InvalidVolumeSyntax {
        /// Rejected input
        input: String,
    },

    /// Unknown channel position name
    #[error("Unknown channel position '{name}'")]
    InvalidPosition {
        /// Rejected name
        name: String,
    },

    /// Channel map that cannot be built
    #[error("Invalid channel map '{input}': {reason}")]
    InvalidChannelMap {
        /// Rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },
}
