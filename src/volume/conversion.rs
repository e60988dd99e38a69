//! Conversions between software volume, linear factors and decibels.
//!
//! The fixed-point scale is cubic: a raw volume `v` corresponds to the
//! amplitude factor `(v / NORM)^3`. Multiplying two raw volumes therefore
//! multiplies their linear factors, and adds their decibel values.

use super::{Decibels, LinearFactor, Volume};

const NORM: u64 = Volume::NORM.raw() as u64;

/// Convert a linear amplitude factor to a software volume
///
/// `0.0` maps to `Volume::MUTED` and `1.0` to exactly `Volume::NORM`.
/// Factors beyond the representable range saturate at `Volume::MAX`.
pub fn linear_to_volume(factor: LinearFactor) -> Volume {
    let factor = factor.get();
    if factor <= 0.0 {
        return Volume::MUTED;
    }
    if factor == 1.0 {
        return Volume::NORM;
    }

    let scaled = (factor.cbrt() * NORM as f64).round();
    if scaled >= f64::from(Volume::MAX.raw()) {
        tracing::warn!(factor, "linear factor saturated at maximum volume");
        return Volume::MAX;
    }

    Volume::saturating(scaled as u64)
}

/// Convert a software volume to its linear amplitude factor
///
/// `Volume::MUTED` maps to exactly `0.0` and `Volume::NORM` to exactly `1.0`.
pub fn volume_to_linear(volume: Volume) -> LinearFactor {
    if volume.is_muted() {
        return LinearFactor::SILENT;
    }
    if volume.is_norm() {
        return LinearFactor::UNITY;
    }

    let f = f64::from(volume.raw()) / NORM as f64;
    // cube of a finite non-negative value: always a valid factor
    LinearFactor::new(f * f * f).unwrap_or(LinearFactor::SILENT)
}

/// Convert a software volume to decibels relative to unity gain
///
/// `Volume::MUTED` is `Decibels::Silent`; `Volume::NORM` is exactly 0 dB.
pub fn volume_to_db(volume: Volume) -> Decibels {
    if volume.is_muted() {
        return Decibels::Silent;
    }
    if volume.is_norm() {
        return Decibels::UNITY;
    }

    volume_to_linear(volume).to_db()
}

/// Convert decibels to a software volume
///
/// `Decibels::Silent` and anything at or below [`Decibels::FLOOR`] map to
/// `Volume::MUTED`; 0 dB is exactly `Volume::NORM`.
pub fn db_to_volume(db: Decibels) -> Volume {
    match db {
        Decibels::Silent => Volume::MUTED,
        Decibels::Finite(value) if value <= Decibels::FLOOR => Volume::MUTED,
        Decibels::Finite(value) if value == 0.0 => Volume::NORM,
        Decibels::Finite(_) => linear_to_volume(db.to_linear()),
    }
}

/// Combine two gains
///
/// Equivalent to multiplying linear factors or adding decibels, computed in
/// integer arithmetic with round-half-up. `Volume::NORM` is the identity and
/// `Volume::MUTED` absorbs.
pub fn multiply_volume(a: Volume, b: Volume) -> Volume {
    let product = (u64::from(a.raw()) * u64::from(b.raw()) + NORM / 2) / NORM;
    Volume::saturating(product)
}

/// Remove gain `b` from `a`
///
/// Inverse of [`multiply_volume`]. Dividing by `Volume::MUTED` yields
/// `Volume::MUTED`.
pub fn divide_volume(a: Volume, b: Volume) -> Volume {
    if b.is_muted() {
        return Volume::MUTED;
    }

    let divisor = u64::from(b.raw());
    let quotient = (u64::from(a.raw()) * NORM + divisor / 2) / divisor;
    Volume::saturating(quotient)
}
