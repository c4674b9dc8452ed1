use crossterm::event::Event;
use std::io::Write;

use crate::config::ShowConfig;

pub mod fireworks;

/// Something the terminal driver can step and draw.
pub trait Effect {
    fn new(width: usize, height: usize, config: &ShowConfig) -> Self
    where
        Self: Sized;
    /// Advance one fixed step.
    fn update(&mut self, dt: f32);
    fn render<W: Write>(&mut self, out: &mut W) -> std::io::Result<()>;
    fn handle_event(&mut self, _event: &Event) {}
}
