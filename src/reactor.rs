//! Plant simulation state and command surface
//!
//! This module owns the mutable simulation state. Physics and safety
//! logic are pure functions in their own modules; everything here is
//! orchestration: operator commands mutate the control inputs, `step`
//! advances one tick and lets the safety pass override the controls
//! when the core overheats.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::config::SimConfig;
use crate::events::SimEvent;
use crate::physics::{self, ControlInputs};
use crate::safety::{self, SafetyVerdict};

/// Complete simulation state.
///
/// Serialized field names match the read model polled by renderers:
/// `{ power, temperature, pressure, radiationDose, rodPosition,
/// running, manualModeEnabled, coolingEnabled }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    /// Simulation time [s]
    pub time: f64,

    // Control inputs
    /// Rod insertion [%]: 0 = fully withdrawn, 100 = fully inserted
    pub rod_position: f64,
    /// Manual mode derives reactivity from the rods; off means the
    /// binary on/off regime driven by `running`
    pub manual_mode_enabled: bool,
    pub cooling_enabled: bool,
    /// Operator-commanded reactor-on flag
    pub running: bool,

    // Physical quantities
    /// Power [% of nominal]
    pub power: f64,
    /// Core temperature [°C]
    pub temperature: f64,
    /// Vessel pressure [kPa]
    pub pressure: f64,
    /// Radiation dose [Sv/h], derived each tick
    pub radiation_dose: f64,
    /// Reactivity coefficient used for the last tick, for gauges
    pub reactivity: f64,

    /// Events raised since the start of the last tick; cleared when
    /// the next tick begins. Commands between ticks append here.
    #[serde(default)]
    pub events: Vec<SimEvent>,
}

impl SimulationState {
    fn initial(config: &SimConfig) -> Self {
        Self {
            time: 0.0,
            rod_position: config.initial_rod_position,
            manual_mode_enabled: false,
            cooling_enabled: true,
            running: false,
            power: 0.0,
            temperature: config.ambient_temp,
            pressure: config.base_pressure,
            radiation_dose: config.base_dose,
            reactivity: 0.0,
            events: Vec::new(),
        }
    }

    fn control_inputs(&self) -> ControlInputs {
        ControlInputs {
            rod_position: self.rod_position,
            manual_mode_enabled: self.manual_mode_enabled,
            cooling_enabled: self.cooling_enabled,
            running: self.running,
        }
    }
}

/// Plant simulation engine: state behind a single mutex so that each
/// command and each whole tick is one atomic critical section.
pub struct PlantSimulator {
    pub state: Mutex<SimulationState>,
    config: SimConfig,
}

impl Default for PlantSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantSimulator {
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        Self {
            state: Mutex::new(SimulationState::initial(&config)),
            config,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Advance the simulation by one tick: physics step, then safety
    /// pass. Events raised during the previous tick are dropped here;
    /// renderers poll once per tick.
    pub fn step(&self) {
        let mut state = self.state.lock().unwrap();
        state.events.clear();

        // Physics reads the previous tick's snapshot throughout.
        let result = physics::step_physics(
            state.power,
            state.temperature,
            state.pressure,
            &state.control_inputs(),
            &self.config,
        );

        state.power = result.power;
        state.temperature = result.temperature;
        state.pressure = result.pressure;
        state.radiation_dose = result.radiation_dose;
        state.reactivity = result.reactivity;

        // Safety pass may override the control inputs. Power is not
        // zeroed on a trip; it decays naturally once running is false.
        match safety::check_temperature(state.temperature, &self.config) {
            SafetyVerdict::Critical => {
                state.rod_position = 100.0;
                state.running = false;
                state.events.push(SimEvent::CriticalTemperatureAlarm);
                log::error!("{}", SimEvent::CriticalTemperatureAlarm);
            }
            SafetyVerdict::Elevated => {
                state.events.push(SimEvent::ElevatedTemperatureWarning);
                log::warn!("{}", SimEvent::ElevatedTemperatureWarning);
            }
            SafetyVerdict::Nominal => {}
        }

        if safety::high_radiation(state.radiation_dose, state.temperature, &self.config) {
            state.events.push(SimEvent::HighRadiationWarning);
            log::warn!("{}", SimEvent::HighRadiationWarning);
        }

        state.time += self.config.tick_seconds();
    }

    /// Run several ticks back to back (batch/demo use).
    pub fn run(&self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Start the reactor. In manual mode the flag is still recorded;
    /// reactivity ignores it until manual mode is disabled.
    pub fn start(&self) {
        let mut state = self.state.lock().unwrap();
        if state.running {
            return;
        }
        state.running = true;
        log::info!("reactor started");
    }

    /// Stop the reactor; power coasts down.
    pub fn stop(&self) {
        let mut state = self.state.lock().unwrap();
        state.running = false;
        log::info!("reactor stopped");
    }

    pub fn set_cooling(&self, enabled: bool) {
        let mut state = self.state.lock().unwrap();
        state.cooling_enabled = enabled;
        log::info!("cooling {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn set_manual_mode(&self, enabled: bool) {
        let mut state = self.state.lock().unwrap();
        state.manual_mode_enabled = enabled;
        log::info!(
            "manual control {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Apply a manual rod position. Only honored while manual mode is
    /// active; otherwise the command is logged and ignored.
    pub fn apply_manual_rods(&self, value: f64) {
        let mut state = self.state.lock().unwrap();
        if !state.manual_mode_enabled {
            log::warn!("manual control is disabled, rod command ignored");
            return;
        }
        state.rod_position = value.clamp(0.0, 100.0);
        let event = SimEvent::ManualControlApplied {
            rod_position: state.rod_position,
        };
        log::info!("{}", event);
        state.events.push(event);
    }

    /// AZ-5: unconditional emergency shutdown. Same resulting state as
    /// an automatic trip, and idempotent.
    pub fn emergency_shutdown(&self) {
        let mut state = self.state.lock().unwrap();
        state.rod_position = 100.0;
        state.running = false;
        state.events.push(SimEvent::EmergencyShutdownTriggered);
        log::error!("{}", SimEvent::EmergencyShutdownTriggered);
    }

    /// Reinitialize every field to its documented default and tell
    /// collaborators to clear latched alarm state.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        *state = SimulationState::initial(&self.config);
        state.events.push(SimEvent::Reset);
        log::info!("{}", SimEvent::Reset);
    }

    /// Snapshot of the current state for renderers.
    pub fn get_state(&self) -> SimulationState {
        self.state.lock().unwrap().clone()
    }
}
