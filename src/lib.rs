//! softvol - fixed-point software volume arithmetic.
//!
//! Software volumes are 32-bit fixed-point values where `0x10000` is unity
//! gain and the raw value maps cubically onto a linear amplitude. This crate
//! provides:
//!
//! - Conversions between raw volumes, linear factors and decibels
//! - Multiplication and division of volumes as cascaded gains
//! - Per-channel volumes with balance, fade and LFE balance over a channel map
//! - A diagnostic sweep measuring rounding drift across the volume range
//! - A command-line interface over all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use softvol::{
//!     channel::{Balance, ChannelMap, channel_volume_set, get_balance, set_balance},
//!     volume::{Volume, multiply_volume},
//! };
//!
//! let half: Volume = "50%".parse()?;
//! assert_eq!(multiply_volume(Volume::NORM, half), half);
//!
//! let map = ChannelMap::stereo();
//! let volume = channel_volume_set(2, Volume::NORM)?;
//! let panned = set_balance(&volume, &map, Balance::new(-0.5)?)?;
//! assert_eq!(get_balance(&panned, &map)?, Balance::new(-0.5)?);
//! # Ok::<(), softvol::volume::VolumeError>(())
//! ```

/// Fixed-point volume, linear and decibel conversions.
pub mod volume;

/// Channel positions, maps, per-channel volumes and balance.
pub mod channel;

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Sweeps checking conversion and balance accuracy.
pub mod diagnostics;

/// Command-line interface over the volume operations.
pub mod cli;

/// Logging setup for the binaries.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{Result, SoftvolError};
