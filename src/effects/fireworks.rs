use super::Effect;
use crate::canvas::Canvas;
use crate::config::ShowConfig;
use crate::geometry::Point;
use crate::simulation::Simulation;
use crate::surface::Surface;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use std::io::Write;

/// The canvas show on a terminal: one raster pixel per half cell.
pub struct FireworksEffect {
    width: usize,
    height: usize,
    scale: f64,
    background: (u8, u8, u8),
    simulation: Simulation,
    canvas: Canvas,
    output_buf: Vec<u8>,
}

impl FireworksEffect {
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Centre of a terminal cell, in canvas units. `row` addresses cells, so
    /// it covers two raster rows.
    fn cell_to_canvas(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f64 + 0.5) * self.scale,
            (row as f64 * 2.0 + 1.0) * self.scale,
        )
    }
}

impl Effect for FireworksEffect {
    fn new(width: usize, height: usize, config: &ShowConfig) -> Self {
        let canvas = Canvas::new(width, height, config.scale);
        let (w, h) = canvas.dimensions();

        Self {
            width,
            height,
            scale: config.scale,
            background: config.background,
            simulation: Simulation::new(w, h, config),
            canvas,
            output_buf: Vec::with_capacity(width * height * 25),
        }
    }

    fn update(&mut self, _dt: f32) {
        // Shell and spark physics are per frame, not per second
        self.simulation.frame(&mut self.canvas);
    }

    fn render<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let bg_color = self.background;
        let mut prev_top_color: (u8, u8, u8) = (255, 255, 255);
        let mut prev_bot_color: (u8, u8, u8) = (255, 255, 255);

        // Render using half-blocks
        for y in (0..self.height).step_by(2) {
            for x in 0..self.width {
                let top_color = self.canvas.shade(x, y, bg_color);
                let bot_color = if y + 1 < self.height {
                    self.canvas.shade(x, y + 1, bg_color)
                } else {
                    top_color
                };

                if top_color != prev_top_color {
                    write!(
                        self.output_buf,
                        "\x1b[48;2;{};{};{}m",
                        top_color.0, top_color.1, top_color.2
                    )?;
                    prev_top_color = top_color;
                }
                if bot_color != prev_bot_color {
                    write!(
                        self.output_buf,
                        "\x1b[38;2;{};{};{}m",
                        bot_color.0, bot_color.1, bot_color.2
                    )?;
                    prev_bot_color = bot_color;
                }

                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_top_color = (255, 255, 255);
            prev_bot_color = (255, 255, 255);
            if y + 2 < self.height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()?;
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::Mouse(mouse_event) = event {
            let at = self.cell_to_canvas(mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    self.simulation.pointer_moved(at);
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    self.simulation.pointer_moved(at);
                    self.simulation.pointer_down();
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    self.simulation.pointer_up();
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn effect() -> FireworksEffect {
        FireworksEffect::new(
            20,
            10,
            &ShowConfig {
                seed: Some(9),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_simulation_spans_scaled_raster() {
        let fx = effect();
        assert_eq!(fx.simulation().dimensions(), (80.0, 40.0));
        assert_eq!(fx.canvas().size(), (20, 10));
    }

    #[test]
    fn test_mouse_events_drive_pointer() {
        let mut fx = effect();
        fx.handle_event(&mouse(MouseEventKind::Moved, 3, 2));
        assert_eq!(fx.simulation().pointer().position, Some(Point::new(14.0, 20.0)));
        assert!(!fx.simulation().pointer().pressed);

        fx.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
        assert!(fx.simulation().pointer().pressed);
        assert_eq!(fx.simulation().pointer().position, Some(Point::new(22.0, 12.0)));

        fx.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 6, 1));
        assert_eq!(fx.simulation().pointer().position, Some(Point::new(26.0, 12.0)));

        fx.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 6, 1));
        assert!(!fx.simulation().pointer().pressed);
    }

    #[test]
    fn test_right_button_is_ignored() {
        let mut fx = effect();
        fx.handle_event(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1));
        assert!(!fx.simulation().pointer().pressed);
        assert_eq!(fx.simulation().pointer().position, None);
    }

    #[test]
    fn test_render_emits_one_glyph_per_cell() {
        let mut fx = effect();
        for _ in 0..120 {
            fx.update(1.0 / 60.0);
        }
        let mut out = Vec::new();
        fx.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[H"));
        assert_eq!(text.matches('▄').count(), 20 * 5);
        assert_eq!(text.matches("\r\n").count(), 4);
    }
}
