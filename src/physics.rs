//! Plant physics step
//!
//! Pure functions only; the simulator owns the state and applies the
//! results. Power, temperature and pressure follow a first-order
//! exponential approach toward their targets
//! (`value += (target - value) * rate` with rate in (0,1), which never
//! overshoots a fixed target). The radiation dose is recomputed from
//! scratch each tick, not integrated.

use crate::config::SimConfig;

/// Control inputs read by the stepper. All fields come from the
/// previous tick's snapshot of the simulation state.
#[derive(Debug, Clone, Copy)]
pub struct ControlInputs {
    /// Rod insertion [%], 0 = fully withdrawn, 100 = fully inserted
    pub rod_position: f64,
    pub manual_mode_enabled: bool,
    pub cooling_enabled: bool,
    pub running: bool,
}

/// Physical quantities produced by one tick.
#[derive(Debug, Clone, Copy)]
pub struct StepResult {
    pub power: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub radiation_dose: f64,
    /// Reactivity used for this tick, for the read model / gauges
    pub reactivity: f64,
}

/// Compute the instantaneous reactivity coefficient in [0,1].
///
/// Manual mode derives reactivity from rod insertion; otherwise the
/// reactor runs a binary on/off regime independent of rod position.
/// The two models are mutually exclusive, never blended.
pub fn compute_reactivity(inputs: &ControlInputs, config: &SimConfig) -> f64 {
    if inputs.manual_mode_enabled {
        (100.0 - inputs.rod_position) / 100.0
    } else if inputs.running {
        config.base_reactivity
    } else {
        0.0
    }
}

/// Advance power, temperature, pressure and dose by one tick.
///
/// Each integrated quantity reads only the previous tick's values:
/// the temperature target uses the previous power, the pressure target
/// the previous temperature. The dose alone reads the freshly updated
/// power and temperature, since it is a derived display quantity.
pub fn step_physics(
    prev_power: f64,
    prev_temperature: f64,
    prev_pressure: f64,
    inputs: &ControlInputs,
    config: &SimConfig,
) -> StepResult {
    let reactivity = compute_reactivity(inputs, config);

    let power = if inputs.running || inputs.manual_mode_enabled {
        prev_power + (reactivity * 100.0 - prev_power) * config.power_approach_rate
    } else {
        prev_power + (0.0 - prev_power) * config.coastdown_rate
    };

    let temp_target = config.ambient_temp + prev_power * config.heat_per_power;
    let cooling_factor = if inputs.cooling_enabled {
        config.cooling_slowdown_factor
    } else {
        1.0
    };
    let temperature = prev_temperature
        + (temp_target - prev_temperature) * config.temp_approach_rate * cooling_factor;

    let pressure_target = config.base_pressure
        + (prev_temperature - config.ambient_temp).max(0.0) * config.pressure_per_degree;
    let pressure =
        prev_pressure + (pressure_target - prev_pressure) * config.pressure_approach_rate;

    let radiation_dose = compute_dose(power, temperature, config);

    StepResult {
        power,
        temperature,
        pressure,
        radiation_dose,
        reactivity,
    }
}

/// Radiation dose as a function of power and temperature.
pub fn compute_dose(power: f64, temperature: f64, config: &SimConfig) -> f64 {
    let power_dose = power / 100.0 * config.dose_per_full_power;
    let temp_dose =
        ((temperature - config.dose_temp_onset) / config.dose_temp_scale).max(0.0)
            * config.dose_temp_weight;
    config.base_dose + power_dose + temp_dose
}
