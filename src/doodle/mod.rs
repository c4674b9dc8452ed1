//! The CSS firework doodle.
//!
//! A one-shot generator: [`FireworkDoodle::start`] writes a stylesheet of
//! randomised keyframes plus a matching element tree into a [`Document`] and
//! lets the browser animate it. When the longest-running spark finishes its
//! opacity animation the doodle removes everything it injected.

pub mod document;
pub mod palette;
pub mod plan;
pub mod stylesheet;

use std::path::Path;

use log::{debug, info};

use crate::error::Result;

pub use document::{Document, NodeId};
pub use palette::ColorScheme;
pub use plan::DoodlePlan;

use stylesheet::{FIRE_CLASS, LINE_CLASS, OPACITY_ANIMATION_PREFIX, SHELL_CLASS, SPARK_CLASS, STAGE_CLASS};

pub const ANIMATION_END: &str = "animationend";

const HIDDEN_TOP: &str = "-9999px";

/// What the doodle put into the document.
#[derive(Debug, Clone, Copy)]
struct Injected {
    stylesheet: NodeId,
    container: NodeId,
    finale: Option<NodeId>,
}

pub struct FireworkDoodle {
    scheme: ColorScheme,
    rng: fastrand::Rng,
    injected: Option<Injected>,
}

impl FireworkDoodle {
    pub fn new(scheme: ColorScheme, rng: fastrand::Rng) -> Self {
        Self {
            scheme,
            rng,
            injected: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.injected.is_some()
    }

    /// The spark whose `animationend` ends the show.
    pub fn finale_target(&self) -> Option<NodeId> {
        self.injected.and_then(|i| i.finale)
    }

    /// Generate a fresh show and inject it. A show still running is cleared
    /// first.
    pub fn start(&mut self, doc: &mut Document) -> DoodlePlan {
        if self.is_active() {
            self.clear(doc);
        }

        let plan = DoodlePlan::generate(self.scheme, &mut self.rng);
        let stylesheet = doc.append_style(stylesheet::render(&plan));

        let finale_shell = plan.longest_shell();
        let mut finale = None;
        let mut container = doc.create_element(STAGE_CLASS);

        for (fc, shell) in plan.shells.iter().enumerate() {
            let mut shell_el = doc.create_element(SHELL_CLASS);
            for lc in 0..shell.lines.len() {
                let fire = doc.create_element(FIRE_CLASS);
                let mut spark = doc.create_element(SPARK_CLASS);
                let mut line = doc.create_element(LINE_CLASS);

                if lc == 0 && Some(fc) == finale_shell {
                    finale = Some(spark.id());
                }

                spark.append(fire);
                line.append(spark);
                shell_el.append(line);
            }
            container.append(shell_el);
        }

        let container = doc.append_to_body(container);
        if let Some(target) = finale {
            doc.add_listener(target, ANIMATION_END);
        }

        info!(
            "doodle started: {} shells, {} lines, perspective {}px",
            plan.shells.len(),
            plan.line_count(),
            plan.perspective
        );

        self.injected = Some(Injected {
            stylesheet,
            container,
            finale,
        });
        plan
    }

    /// Handle an `animationend` from the finale spark. Returns `true` when
    /// it ended the show.
    pub fn on_animation_end(&mut self, doc: &mut Document, animation_name: &str) -> bool {
        if animation_name.starts_with(OPACITY_ANIMATION_PREFIX) {
            self.clear(doc)
        } else {
            false
        }
    }

    pub fn stop(&mut self, doc: &mut Document) {
        self.clear(doc);
    }

    /// Remove the injected stylesheet and container. Does nothing when no
    /// show is injected; returns whether anything was removed.
    pub fn clear(&mut self, doc: &mut Document) -> bool {
        let Some(injected) = self.injected.take() else {
            debug!("doodle clear without a container");
            return false;
        };

        doc.remove_from_body(injected.container);
        doc.remove_style(injected.stylesheet);
        info!("doodle cleared");
        true
    }

    /// Move the container off screen without stopping the animations.
    pub fn hide(&self, doc: &mut Document) {
        self.set_container_top(doc, Some(HIDDEN_TOP.to_string()));
    }

    pub fn show_after_hide(&self, doc: &mut Document) {
        self.set_container_top(doc, None);
    }

    fn set_container_top(&self, doc: &mut Document, top: Option<String>) {
        let Some(injected) = self.injected else {
            return;
        };
        if let Some(el) = doc.element_mut(injected.container) {
            el.top = top;
        }
    }
}

/// Run one doodle against a fresh document and save it as an HTML page.
pub fn write_page(scheme: ColorScheme, rng: fastrand::Rng, path: &Path) -> Result<DoodlePlan> {
    let mut doc = Document::new();
    doc.append_style(stylesheet::BASE_CSS.to_string());

    let mut doodle = FireworkDoodle::new(scheme, rng);
    let plan = doodle.start(&mut doc);

    let background = if scheme.is_dark() { "#000" } else { "#fff" };
    std::fs::write(path, doc.to_html("Fireworks", background))?;
    info!("doodle page written to {}", path.display());
    Ok(plan)
}
