use serde::Serialize;

/// Outcome of the linear and decibel round-trip sweep
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoundTripReport {
    /// Volumes checked
    pub checked: u64,
    /// Volumes that did not survive `volume -> linear -> volume`
    pub linear_failures: u64,
    /// Volumes that did not survive `volume -> dB -> volume`
    pub db_failures: u64,
    /// Raw value of the first failing volume
    pub first_failure: Option<u32>,
}

impl RoundTripReport {
    /// Check if every volume round-tripped exactly
    pub fn passed(&self) -> bool {
        self.linear_failures == 0 && self.db_failures == 0
    }
}

/// Outcome of the pairwise multiplication sweep
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiplicationReport {
    /// Pairs checked
    pub pairs: u64,
    /// Pairs where either approximation differs from the integer product
    pub mismatches: u64,
    /// Largest distance between the linear-space product and the integer product
    pub max_linear_deviation: u32,
    /// Largest distance between the dB-space sum and the integer product
    pub max_db_deviation: u32,
    /// Pairs where `NORM` was not the identity or `MUTED` did not absorb
    pub identity_failures: u64,
    /// Tolerated number of mismatches
    pub max_mismatches: u64,
}

impl MultiplicationReport {
    /// Largest tolerated distance between any approximation and the product
    pub const MAX_DEVIATION: u32 = 1;

    /// Check if drift stayed within bounds
    pub fn passed(&self) -> bool {
        self.max_linear_deviation <= Self::MAX_DEVIATION
            && self.max_db_deviation <= Self::MAX_DEVIATION
            && self.identity_failures == 0
            && self.mismatches <= self.max_mismatches
    }
}

/// A single balance round trip that missed its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceSample {
    /// Raw left volume before balancing
    pub left: u32,
    /// Raw right volume before balancing
    pub right: u32,
    /// Requested balance
    pub wanted: f64,
    /// Balance read back
    pub got: f64,
}

/// Outcome of the balance round-trip sweep
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BalanceReport {
    /// Round trips checked
    pub checked: u64,
    /// Round trips whose result left the tolerance window
    pub out_of_tolerance: u64,
    /// All-muted inputs whose balance was not centered
    pub muted_not_centered: u64,
    /// First round trip that left the tolerance window
    pub first_failure: Option<BalanceSample>,
}

impl BalanceReport {
    /// Check if every round trip landed in the tolerance window
    pub fn passed(&self) -> bool {
        self.out_of_tolerance == 0 && self.muted_not_centered == 0
    }
}

/// Combined outcome of every sweep
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SweepReport {
    /// Round-trip sweep
    pub round_trip: RoundTripReport,
    /// Multiplication sweep
    pub multiplication: MultiplicationReport,
    /// Balance sweep
    pub balance: BalanceReport,
}

impl SweepReport {
    /// Check if every sweep passed
    pub fn passed(&self) -> bool {
        self.round_trip.passed() && self.multiplication.passed() && self.balance.passed()
    }

    /// Multi-line human-readable summary
    pub fn summary(&self) -> String {
        let verdict = |passed: bool| if passed { "ok" } else { "FAILED" };
        let round_trip = &self.round_trip;
        let multiplication = &self.multiplication;
        let balance = &self.balance;

        [
            format!(
                "round trip:     {} ({} volumes, {} linear / {} dB failures)",
                verdict(round_trip.passed()),
                round_trip.checked,
                round_trip.linear_failures,
                round_trip.db_failures,
            ),
            format!(
                "multiplication: {} ({} pairs, {} mismatches of {} allowed, max deviation {}/{})",
                verdict(multiplication.passed()),
                multiplication.pairs,
                multiplication.mismatches,
                multiplication.max_mismatches,
                multiplication.max_linear_deviation,
                multiplication.max_db_deviation,
            ),
            format!(
                "balance:        {} ({} round trips, {} out of tolerance)",
                verdict(balance.passed()),
                balance.checked,
                balance.out_of_tolerance,
            ),
        ]
        .join("\n")
    }
}
