//! Sweeps over the representable volume range that check the conversion
//! and balance invariants.
//!
//! Rounding drift between the integer, linear and decibel paths is expected;
//! the sweeps measure it and compare it against fixed bounds rather than
//! treating any single deviation as an error.

mod report;

#[cfg(test)]
mod tests;

pub use report::{BalanceReport, BalanceSample, MultiplicationReport, RoundTripReport, SweepReport};

use tracing::{debug, info, instrument};

use crate::{
    channel::{Balance, ChannelMap, ChannelVolume, get_balance, set_balance},
    config::DiagnosticsConfig,
    volume::{
        Volume, db_to_volume, linear_to_volume, multiply_volume, volume_to_db, volume_to_linear,
    },
};

/// How far below the requested balance a round trip may land
pub const BALANCE_TOLERANCE_BELOW: f64 = 0.05;

/// How far above the requested balance a round trip may land
pub const BALANCE_TOLERANCE_ABOVE: f64 = 0.5;

/// Upper end of the swept range, twice unity gain
pub const SWEEP_LIMIT: u32 = 2 * Volume::NORM.raw();

/// Balance targets checked for every channel volume pair: -1.0 to 1.0 in
/// steps of 0.2
pub fn balance_targets() -> impl Iterator<Item = Balance> {
    (0..=10).filter_map(|i| Balance::new((-1.0 + 0.2 * f64::from(i)).clamp(-1.0, 1.0)).ok())
}

/// Check that a balance read back after setting `wanted` is acceptable
pub fn balance_within_tolerance(wanted: Balance, got: Balance) -> bool {
    got.get() >= wanted.get() - BALANCE_TOLERANCE_BELOW
        && got.get() <= wanted.get() + BALANCE_TOLERANCE_ABOVE
}

/// Run every sweep with the given parameters
#[instrument(skip_all)]
pub fn run(config: &DiagnosticsConfig) -> SweepReport {
    let report = SweepReport {
        round_trip: check_round_trips(config.round_trip_step),
        multiplication: check_multiplication(
            config.multiply_step_a,
            config.multiply_step_b,
            config.max_mismatches,
        ),
        balance: check_balance(config.balance_step),
    };

    info!(passed = report.passed(), "diagnostic sweep finished");
    report
}

/// Check `linear -> volume` and `dB -> volume` round trips for every
/// `step`-th raw volume in `[MUTED, 2 * NORM]`
pub fn check_round_trips(step: u32) -> RoundTripReport {
    let mut report = RoundTripReport::default();

    for raw in (0..=SWEEP_LIMIT).step_by(step.max(1) as usize) {
        let volume = Volume::saturating(u64::from(raw));
        report.checked += 1;

        let via_linear = linear_to_volume(volume_to_linear(volume));
        let via_db = db_to_volume(volume_to_db(volume));

        if via_linear != volume {
            report.linear_failures += 1;
            debug!(raw, got = via_linear.raw(), "linear round trip failed");
        }
        if via_db != volume {
            report.db_failures += 1;
            debug!(raw, got = via_db.raw(), "decibel round trip failed");
        }
        if (via_linear != volume || via_db != volume) && report.first_failure.is_none() {
            report.first_failure = Some(raw);
        }
    }

    info!(
        checked = report.checked,
        linear_failures = report.linear_failures,
        db_failures = report.db_failures,
        "round-trip sweep finished"
    );
    report
}

/// Compare the integer product of every pair against the linear-space
/// product and the decibel-space sum
///
/// `a` runs over `[MUTED, 2 * NORM]` in steps of `step_a`, `b` over
/// `[MUTED, 2 * NORM)` in steps of `step_b`.
pub fn check_multiplication(
    step_a: u32,
    step_b: u32,
    max_mismatches: u64,
) -> MultiplicationReport {
    let mut report = MultiplicationReport {
        max_mismatches,
        ..MultiplicationReport::default()
    };

    for a in (0..=SWEEP_LIMIT).step_by(step_a.max(1) as usize) {
        let a = Volume::saturating(u64::from(a));

        if multiply_volume(Volume::NORM, a) != a
            || multiply_volume(Volume::MUTED, a) != Volume::MUTED
        {
            report.identity_failures += 1;
        }

        for b in (0..SWEEP_LIMIT).step_by(step_b.max(1) as usize) {
            let b = Volume::saturating(u64::from(b));
            report.pairs += 1;

            let product = multiply_volume(a, b);
            let linear = linear_to_volume(volume_to_linear(a) * volume_to_linear(b));
            let db = db_to_volume(volume_to_db(a) + volume_to_db(b));

            let linear_deviation = linear.raw().abs_diff(product.raw());
            let db_deviation = db.raw().abs_diff(product.raw());

            report.max_linear_deviation = report.max_linear_deviation.max(linear_deviation);
            report.max_db_deviation = report.max_db_deviation.max(db_deviation);

            if linear_deviation != 0 || db_deviation != 0 {
                report.mismatches += 1;
            }
        }
    }

    info!(
        pairs = report.pairs,
        mismatches = report.mismatches,
        max_linear_deviation = report.max_linear_deviation,
        max_db_deviation = report.max_db_deviation,
        "multiplication sweep finished"
    );
    report
}

/// Set and read back every balance target on every stereo volume pair in
/// `[MUTED, 2 * NORM]` with the given step
///
/// The all-muted pair has no audible side to keep, so instead of a round
/// trip it is only checked for reading back as centered.
pub fn check_balance(step: u32) -> BalanceReport {
    let map = ChannelMap::stereo();
    let mut report = BalanceReport::default();

    for left in (0..=SWEEP_LIMIT).step_by(step.max(1) as usize) {
        for right in (0..=SWEEP_LIMIT).step_by(step.max(1) as usize) {
            let pair = [
                Volume::saturating(u64::from(left)),
                Volume::saturating(u64::from(right)),
            ];
            let Ok(volume) = ChannelVolume::from_slice(&pair) else {
                continue;
            };

            if volume.is_muted() {
                if get_balance(&volume, &map).ok() != Some(Balance::CENTER) {
                    report.muted_not_centered += 1;
                }
                continue;
            }

            for wanted in balance_targets() {
                report.checked += 1;

                let got = set_balance(&volume, &map, wanted)
                    .and_then(|balanced| get_balance(&balanced, &map));

                let within = matches!(got, Ok(got) if balance_within_tolerance(wanted, got));
                if !within {
                    report.out_of_tolerance += 1;
                    let sample = BalanceSample {
                        left,
                        right,
                        wanted: wanted.get(),
                        got: got.map(Balance::get).unwrap_or(f64::NAN),
                    };
                    debug!(?sample, "balance round trip out of tolerance");
                    if report.first_failure.is_none() {
                        report.first_failure = Some(sample);
                    }
                }
            }
        }
    }

    info!(
        checked = report.checked,
        out_of_tolerance = report.out_of_tolerance,
        "balance sweep finished"
    );
    report
}
