//! Pyrocanvas: a fireworks show for the terminal.
//!
//! Shells launch from the bottom centre, accelerate toward a target and
//! burst into sparks that fall, slow down and fade. The frame is painted on
//! an RGBA [`canvas::Canvas`] that is only partially erased every frame, so
//! everything leaves a trail. The [`doodle`] module is a separate generator
//! for a pure-CSS firework page.

pub mod canvas;
pub mod cli;
pub mod color;
pub mod config;
pub mod doodle;
pub mod effects;
pub mod error;
pub mod firework;
pub mod geometry;
pub mod particle;
pub mod scheduler;
pub mod simulation;
pub mod surface;
pub mod trail;

pub use config::ShowConfig;
pub use error::{Error, Result};
pub use simulation::Simulation;
