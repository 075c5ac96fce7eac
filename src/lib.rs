//! Control Room Simulator Library
//!
//! Educational simulation of a power-plant control room core: a toy
//! physics loop (power, temperature, pressure, radiation dose) driven
//! by operator commands, with threshold-triggered automatic SCRAM.
//! Rendering, audio and other control-room dressing live outside this
//! crate and consume the state snapshot and event surface.

pub mod config;
pub mod events;
pub mod physics;
pub mod reactor;
pub mod safety;

pub use config::SimConfig;
pub use events::SimEvent;
pub use reactor::{PlantSimulator, SimulationState};
