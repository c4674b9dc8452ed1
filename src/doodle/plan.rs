//! Randomised parameters of one doodle show.
//!
//! A plan is plain data; [`super::stylesheet`] turns it into CSS text and
//! [`super::FireworkDoodle`] builds the matching element tree.

use super::palette::ColorScheme;

#[derive(Debug, Clone, PartialEq)]
pub struct DoodlePlan {
    /// Stage perspective in px
    pub perspective: u32,
    pub shells: Vec<ShellPlan>,
}

/// One firework: a ring of lines spinning out from a common centre.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellPlan {
    /// Stage offset as (vw, vh, vmin)
    pub offset: (f64, f64, f64),
    /// Seconds, zero or negative
    pub spark_delay: f64,
    pub fore_color: String,
    pub back_color: String,
    /// Seconds
    pub spark_duration: f64,
    pub lines: Vec<LinePlan>,
}

impl ShellPlan {
    /// Wall time until this shell's sparks finish.
    pub fn running_time(&self) -> f64 {
        self.spark_duration + self.spark_delay
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePlan {
    /// Degrees around the vertical axis
    pub rotate_y: f64,
    pub spark: SparkPath,
    pub opacity: OpacityCurve,
    pub fire: FireSpin,
}

/// Spark keyframes: rise from below, pause at the centre, fly outward.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkPath {
    /// px below the centre at 0%
    pub rise: u32,
    pub spin_z: f64,
    pub spin_y: f64,
    /// px travelled outward at 100%
    pub reach: u32,
}

/// Keyframe percentages: visible while rising, dark at the burst, visible
/// while flying out, fading at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityCurve {
    pub rise_in: f64,
    pub rise_out: f64,
    pub burst_in: f64,
    pub burst_out: f64,
}

/// The glowing head tumbling along a spark.
#[derive(Debug, Clone, PartialEq)]
pub struct FireSpin {
    pub duration_ms: f64,
    /// Applied as a negative delay
    pub delay_ms: f64,
    pub width_em: f64,
    pub height_em: f64,
    /// Full turns about x, y and z
    pub turns: [u32; 3],
}

impl DoodlePlan {
    pub fn generate(scheme: ColorScheme, rng: &mut fastrand::Rng) -> Self {
        let perspective = 400 + (rng.f64() * 400.0).round() as u32;
        let shell_count = 3 + (rng.f64() * 4.0).round() as usize;

        let shells = (0..shell_count)
            .map(|index| ShellPlan::generate(index == 0, scheme, rng))
            .collect();

        Self {
            perspective,
            shells,
        }
    }

    /// Index of the shell that finishes last; the first one wins ties.
    pub fn longest_shell(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, shell) in self.shells.iter().enumerate() {
            let time = shell.running_time();
            if time > 0.0 && best.is_none_or(|(_, t)| time > t) {
                best = Some((index, time));
            }
        }
        best.map(|(index, _)| index)
    }

    pub fn line_count(&self) -> usize {
        self.shells.iter().map(|s| s.lines.len()).sum()
    }
}

impl ShellPlan {
    fn generate(first: bool, scheme: ColorScheme, rng: &mut fastrand::Rng) -> Self {
        let offset = (
            -15.0 + rng.f64() * 30.0,
            -rng.f64() * 20.0,
            -15.0 + rng.f64() * 30.0,
        );
        let spark_delay = if first { 0.0 } else { -rng.f64() };
        let (fore_color, back_color) = scheme.sample_pair(rng);
        let spark_duration = 3.5 + rng.f64() * 3.0;
        let line_count = 50 + (rng.f64() * 50.0).round() as usize;

        Self {
            offset,
            spark_delay,
            fore_color,
            back_color,
            spark_duration,
            lines: (0..line_count).map(|_| LinePlan::generate(rng)).collect(),
        }
    }
}

impl LinePlan {
    fn generate(rng: &mut fastrand::Rng) -> Self {
        let rotate_y = rng.f64() * 360.0;
        let spark = SparkPath {
            spin_z: rng.f64() * 360.0,
            spin_y: rng.f64() * 360.0,
            rise: (rng.f64() * 150.0 + 500.0).round() as u32,
            reach: (rng.f64() * 200.0 + 100.0).round() as u32,
        };
        let opacity = OpacityCurve {
            rise_in: 10.0 + rng.f64() * 20.0,
            rise_out: 40.0 + rng.f64() * 5.0,
            burst_in: 55.0 + rng.f64() * 10.0,
            burst_out: 85.0 + rng.f64() * 10.0,
        };
        let duration_ms = rng.f64() * 1000.0 + 1000.0;
        let delay_ms = rng.f64() * duration_ms;
        let fire = FireSpin {
            duration_ms,
            delay_ms,
            width_em: 0.25 + rng.f64() * 0.15,
            height_em: 0.25 + rng.f64() * 0.15,
            turns: [rng.u32(1..=3), rng.u32(1..=3), rng.u32(1..=3)],
        };

        Self {
            rotate_y,
            spark,
            opacity,
            fire,
        }
    }
}

impl FireSpin {
    /// Horizontal offset keeping the head centred on its line.
    pub fn left_em(&self) -> f64 {
        self.width_em / 2.0
    }
}
