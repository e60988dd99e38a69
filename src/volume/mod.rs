//! Software volume arithmetic.
//!
//! Three representations of the same gain are modelled as distinct types so
//! they cannot be mixed up: the fixed-point [`Volume`], the linear
//! [`LinearFactor`] and the logarithmic [`Decibels`].

mod conversion;
mod error;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use conversion::{
    db_to_volume, divide_volume, linear_to_volume, multiply_volume, volume_to_db,
    volume_to_linear,
};
pub use error::VolumeError;
pub use types::{Decibels, LinearFactor, Volume};
