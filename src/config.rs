//! Simulation tuning constants
//!
//! All cadence, rate and threshold values live in one place so the
//! physics loop and the safety checks stay free of magic numbers.
//! A JSON file can override individual fields; anything it does not
//! name keeps its default.

use serde::{Deserialize, Serialize};
use std::fs;

/// Tunable constants for the plant simulation.
///
/// The defaults reproduce the reference control-room behavior: a
/// 500 ms tick with first-order exponential approach for power,
/// temperature and pressure, and temperature interlocks at 400/600 °C.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    /// Fixed tick cadence [ms]
    pub tick_interval_ms: u64,

    /// Power blend rate per tick while the reactor drives toward its target
    pub power_approach_rate: f64,
    /// Power blend rate per tick while coasting down (stopped, not manual)
    pub coastdown_rate: f64,
    /// Nominal reactivity of the binary on/off regime
    pub base_reactivity: f64,

    /// Ambient temperature [°C], also the initial core temperature
    pub ambient_temp: f64,
    /// Heating contribution per percent of power [°C/%]
    pub heat_per_power: f64,
    /// Temperature blend rate per tick before the cooling factor
    pub temp_approach_rate: f64,
    /// Multiplier on the temperature rate while cooling is enabled.
    /// Cooling slows the approach toward the power-implied target; it
    /// does not lower the target itself.
    pub cooling_slowdown_factor: f64,

    /// Atmospheric baseline pressure [kPa]
    pub base_pressure: f64,
    /// Pressure rise per degree above ambient [kPa/°C]
    pub pressure_per_degree: f64,
    /// Pressure blend rate per tick (slowest quantity, large vessel mass)
    pub pressure_approach_rate: f64,

    /// Background radiation dose [Sv/h]
    pub base_dose: f64,
    /// Dose contribution at full power [Sv/h]
    pub dose_per_full_power: f64,
    /// Temperature above which the core adds to the dose [°C]
    pub dose_temp_onset: f64,
    /// Divisor for the temperature excess in the dose formula
    pub dose_temp_scale: f64,
    /// Multiplier on the scaled temperature excess
    pub dose_temp_weight: f64,

    /// Temperature above which a warning is raised [°C], strict comparison
    pub warning_temp_threshold: f64,
    /// Temperature above which an automatic SCRAM trips [°C], strict comparison
    pub critical_temp_threshold: f64,
    /// Dose level that, combined with high temperature, raises a radiation warning [Sv/h]
    pub high_dose_threshold: f64,
    /// Temperature gate for the radiation warning [°C]
    pub high_dose_temp_gate: f64,

    /// Rod insertion after reset [%]
    pub initial_rod_position: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            power_approach_rate: 0.03,
            coastdown_rate: 0.08,
            base_reactivity: 0.85,
            ambient_temp: 20.0,
            heat_per_power: 0.12,
            temp_approach_rate: 0.04,
            cooling_slowdown_factor: 0.7,
            base_pressure: 101.3,
            pressure_per_degree: 0.5,
            pressure_approach_rate: 0.02,
            base_dose: 0.2,
            dose_per_full_power: 0.8,
            dose_temp_onset: 100.0,
            dose_temp_scale: 500.0,
            dose_temp_weight: 1.5,
            warning_temp_threshold: 400.0,
            critical_temp_threshold: 600.0,
            high_dose_threshold: 2.5,
            high_dose_temp_gate: 300.0,
            initial_rod_position: 50.0,
        }
    }
}

impl SimConfig {
    /// Seconds of simulated time covered by one tick.
    pub fn tick_seconds(&self) -> f64 {
        self.tick_interval_ms as f64 / 1000.0
    }

    /// Load the configuration from the first readable config file,
    /// falling back to the built-in defaults.
    pub fn load_or_default() -> Self {
        let config_paths = [
            "config/simulation.json",
            "../config/simulation.json",
        ];

        for path in &config_paths {
            if let Ok(content) = fs::read_to_string(path) {
                match serde_json::from_str::<SimConfig>(&content) {
                    Ok(config) => {
                        log::info!("loaded simulation config from {}", path);
                        return config;
                    }
                    Err(err) => {
                        log::warn!("invalid simulation config {}: {}", path, err);
                    }
                }
            }
        }

        log::info!("no simulation config found, using defaults");
        SimConfig::default()
    }
}
