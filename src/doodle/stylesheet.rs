//! CSS text for a [`DoodlePlan`].

use std::fmt::Write;

use super::plan::{DoodlePlan, LinePlan, ShellPlan};

pub const STAGE_CLASS: &str = "frwdStage";
pub const SHELL_CLASS: &str = "frwdFireworks";
pub const LINE_CLASS: &str = "frwdLine";
pub const SPARK_CLASS: &str = "frwdSpark";
pub const FIRE_CLASS: &str = "frwdFire";

/// Prefix of the per-line opacity animations; their end marks the end of a
/// spark's flight.
pub const OPACITY_ANIMATION_PREFIX: &str = "frwdOpacity";

const SPARK_EASING: &str = "cubic-bezier(0.39, 0.575, 0.565, 1)";

/// Layout rules the generated sheet relies on. Not part of the generated
/// output; pages exporting a doodle include it once.
pub const BASE_CSS: &str = "\
.frwdStage { position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
display: flex; align-items: center; justify-content: center; \
transform-style: preserve-3d; pointer-events: none; }
.frwdFireworks, .frwdLine, .frwdSpark { position: absolute; transform-style: preserve-3d; }
.frwdFire { position: absolute; border-radius: 50%; transform-style: preserve-3d; }
.frwdFire::before { content: ''; position: absolute; inset: 0; border-radius: 50%; \
transform: rotate3d(0,1,0,90deg); }
";

/// Serialize every rule and keyframe block of `plan`.
pub fn render(plan: &DoodlePlan) -> String {
    let mut css = String::with_capacity(plan.line_count() * 900);
    // Writing into a String cannot fail
    let _ = write_plan(&mut css, plan);
    css
}

fn write_plan(css: &mut String, plan: &DoodlePlan) -> std::fmt::Result {
    writeln!(css, ".{STAGE_CLASS} {{ perspective: {}px; }}", plan.perspective)?;

    for (i, shell) in plan.shells.iter().enumerate() {
        write_shell(css, i + 1, shell)?;
    }
    Ok(())
}

fn write_shell(css: &mut String, fc: usize, shell: &ShellPlan) -> std::fmt::Result {
    let (fx, fy, fz) = shell.offset;
    let sel = format!(".{SHELL_CLASS}:nth-child({fc})");

    writeln!(
        css,
        "{sel} {{ transform: translate3d({fx}vw, {fy}vh, {fz}vmin); }}"
    )?;
    if fc > 1 {
        writeln!(
            css,
            "{sel} .{LINE_CLASS} .{SPARK_CLASS} {{ animation-delay: {}s; }}",
            shell.spark_delay
        )?;
    }
    writeln!(
        css,
        "{sel} .{LINE_CLASS} .{SPARK_CLASS} .{FIRE_CLASS} {{ background: {}; }}",
        shell.fore_color
    )?;
    writeln!(
        css,
        "{sel} .{LINE_CLASS} .{SPARK_CLASS} .{FIRE_CLASS}::before {{ background: {}; }}",
        shell.back_color
    )?;

    for (j, line) in shell.lines.iter().enumerate() {
        write_line(css, &sel, fc, j + 1, shell.spark_duration, line)?;
    }
    Ok(())
}

fn write_line(
    css: &mut String,
    sel: &str,
    fc: usize,
    lc: usize,
    duration: f64,
    line: &LinePlan,
) -> std::fmt::Result {
    let line_sel = format!("{sel} .{LINE_CLASS}:nth-child({lc})");

    writeln!(
        css,
        "{line_sel} {{ transform: rotate3d(0,1,0,{}deg); }}",
        line.rotate_y
    )?;
    writeln!(
        css,
        "{line_sel} .{SPARK_CLASS} {{ animation: {SPARK_CLASS}-{fc}-{lc} {duration}s {SPARK_EASING} forwards, \
         {OPACITY_ANIMATION_PREFIX}-{fc}-{lc} {duration}s ease-out forwards; }}"
    )?;

    let spark = &line.spark;
    writeln!(
        css,
        "@keyframes {SPARK_CLASS}-{fc}-{lc} {{ \
         0% {{ transform: translate3d(0,{}px,0); }} \
         50% {{ transform: translate3d(0,0,0); }} \
         100% {{ transform: rotate3d(0,0,1,{}deg) rotate3d(0,1,0,{}deg) translate3d({}px,0,0); }} }}",
        spark.rise, spark.spin_z, spark.spin_y, spark.reach
    )?;

    let o = &line.opacity;
    writeln!(
        css,
        "@keyframes {OPACITY_ANIMATION_PREFIX}-{fc}-{lc} {{ \
         0% {{ opacity: 0; }} {}% {{ opacity: 1; }} {}% {{ opacity: 0; }} 50% {{ opacity: 0; }} \
         {}% {{ opacity: 1; }} {}% {{ opacity: 1; }} 100% {{ opacity: 0; }} }}",
        o.rise_in, o.rise_out, o.burst_in, o.burst_out
    )?;

    let fire = &line.fire;
    writeln!(
        css,
        "{line_sel} .{FIRE_CLASS} {{ animation: {FIRE_CLASS}-{fc}-{lc} {}ms -{}ms linear infinite; \
         left: -{}em; width: {}em; height: {}em; }}",
        fire.duration_ms,
        fire.delay_ms,
        fire.left_em(),
        fire.width_em,
        fire.height_em
    )?;

    let [tx, ty, tz] = fire.turns.map(|t| t * 360);
    writeln!(
        css,
        "@keyframes {FIRE_CLASS}-{fc}-{lc} {{ \
         0% {{ transform: rotate3d(1,0,0,0deg) rotate3d(0,1,0,0deg) rotate3d(0,0,1,0deg); }} \
         100% {{ transform: rotate3d(1,0,0,{tx}deg) rotate3d(0,1,0,{ty}deg) rotate3d(0,0,1,{tz}deg); }} }}"
    )
}
