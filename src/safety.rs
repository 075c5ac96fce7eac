//! Temperature and radiation interlocks
//!
//! Evaluated once per tick, after the physics step. The checks are
//! level-triggered: a verdict repeats every tick its condition holds,
//! and consumers decide whether to suppress duplicates.

use crate::config::SimConfig;

/// Outcome of the per-tick temperature check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyVerdict {
    /// Temperature within normal operating range.
    Nominal,
    /// Above the warning threshold; warn only, no intervention.
    Elevated,
    /// Above the critical threshold; the simulator must force a SCRAM
    /// (full rod insertion, reactor stopped).
    Critical,
}

/// Classify the current temperature. Both comparators are strict:
/// exactly 400 is nominal, exactly 600 is elevated.
pub fn check_temperature(temperature: f64, config: &SimConfig) -> SafetyVerdict {
    if temperature > config.critical_temp_threshold {
        SafetyVerdict::Critical
    } else if temperature > config.warning_temp_threshold {
        SafetyVerdict::Elevated
    } else {
        SafetyVerdict::Nominal
    }
}

/// Radiation warning gate: high dose alone is not alarming (the dose
/// tracks power), only combined with a hot core.
pub fn high_radiation(dose: f64, temperature: f64, config: &SimConfig) -> bool {
    dose > config.high_dose_threshold && temperature > config.high_dose_temp_gate
}
