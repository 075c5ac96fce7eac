//! Outbound simulation events
//!
//! Collaborators (annunciator lamps, siren audio, log panel) consume
//! these; the core never decides presentation. Events are buffered on
//! the state for one tick and drained by whoever polls the snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event emitted by the physics/safety pass or by an operator command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SimEvent {
    /// Temperature passed the critical threshold; automatic SCRAM was forced.
    /// Level-triggered: repeats every tick the condition holds.
    CriticalTemperatureAlarm,
    /// Temperature is elevated but below the critical threshold.
    ElevatedTemperatureWarning,
    /// Radiation dose is high while the core is hot.
    HighRadiationWarning,
    /// Manual rod command accepted; carries the clamped insertion percentage.
    #[serde(rename_all = "camelCase")]
    ManualControlApplied { rod_position: f64 },
    /// Operator pressed AZ-5.
    EmergencyShutdownTriggered,
    /// Simulation returned to its initial state; latched collaborator
    /// state (lamps, sirens) must clear.
    Reset,
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::CriticalTemperatureAlarm => {
                write!(f, "ALARM: critical temperature - SCRAM triggered")
            }
            SimEvent::ElevatedTemperatureWarning => {
                write!(f, "WARNING: temperature above 400 degrees")
            }
            SimEvent::HighRadiationWarning => {
                write!(f, "WARNING: high radiation dose")
            }
            SimEvent::ManualControlApplied { rod_position } => {
                write!(f, "manual control: rods set to {:.0}%", rod_position)
            }
            SimEvent::EmergencyShutdownTriggered => {
                write!(f, "AZ-5 pressed! Emergency shutdown active")
            }
            SimEvent::Reset => write!(f, "system reset to initial state"),
        }
    }
}
