use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters of the diagnostic sweep over the volume range.
///
/// The defaults reproduce the reference sweep: round trips every 51 raw
/// units, multiplication pairs at 51 x 37, balance pairs every 4096.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Raw step between volumes checked for linear and decibel round trips.
    pub round_trip_step: u32,

    /// Raw step of the first operand in the multiplication sweep.
    pub multiply_step_a: u32,

    /// Raw step of the second operand in the multiplication sweep.
    pub multiply_step_b: u32,

    /// Raw step between channel volumes in the balance sweep.
    pub balance_step: u32,

    /// Largest tolerated number of multiplication pairs where an
    /// approximation differs from the integer product.
    pub max_mismatches: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            round_trip_step: 51,
            multiply_step_a: 51,
            multiply_step_b: 37,
            balance_step: 4096,
            max_mismatches: 253,
        }
    }
}
