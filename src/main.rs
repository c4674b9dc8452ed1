use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::{BufWriter, stdout};
use std::time::{Duration, Instant};

use pyrocanvas::cli::{Cli, Command, DoodleArgs};
use pyrocanvas::config::ShowConfig;
use pyrocanvas::doodle::{self, ColorScheme};
use pyrocanvas::effects::{Effect, fireworks::FireworksEffect};
use pyrocanvas::Result;

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        // Anything on stderr would tear through the show
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run_effect<E: Effect>(config: &ShowConfig) -> Result<()> {
    let stdout = stdout();
    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout);

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All), EnableMouseCapture)?;

    let result = show_loop::<E, _>(&mut stdout, config);

    execute!(stdout, Show, LeaveAlternateScreen, DisableMouseCapture)?;
    terminal::disable_raw_mode()?;

    result
}

fn show_loop<E: Effect, W: std::io::Write>(stdout: &mut W, config: &ShowConfig) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    info!("show started on {cols}x{rows} cells");
    let mut effect = E::new(cols as usize, rows as usize * 2, config);

    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;
    // No display-refresh signal in a terminal; step at a fixed 60 Hz
    const FIXED_DT: f32 = 1.0 / 60.0;

    loop {
        if event::poll(Duration::from_millis(1))? {
            let event = event::read()?;
            match &event {
                Event::Key(key_event) => {
                    if key_event.code == KeyCode::Char('q')
                        || key_event.code == KeyCode::Esc
                        || (key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(event::KeyModifiers::CONTROL))
                    {
                        break;
                    }
                    effect.handle_event(&event);
                }
                Event::Resize(cols, rows) => {
                    debug!("terminal resized to {cols}x{rows}, restarting show");
                    effect = E::new(*cols as usize, *rows as usize * 2, config);
                    execute!(stdout, Clear(ClearType::All))?;
                }
                _ => {
                    effect.handle_event(&event);
                }
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        accumulator += frame_time;
        if accumulator > FIXED_DT * 3.0 {
            accumulator = FIXED_DT * 3.0;
        }

        while accumulator >= FIXED_DT {
            effect.update(FIXED_DT);
            accumulator -= FIXED_DT;
        }

        effect.render(stdout)?;
    }

    info!("show stopped");
    Ok(())
}

fn run_doodle(args: &DoodleArgs, seed: Option<u64>) -> Result<()> {
    let scheme = ColorScheme::from_flags(args.high_contrast, !args.light_background);
    let rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let plan = doodle::write_page(scheme, rng, &args.out)?;
    println!(
        "Wrote {} ({} fireworks, {} sparks)",
        args.out.display(),
        plan.shells.len(),
        plan.line_count()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match &cli.command {
        Some(Command::Doodle(args)) => run_doodle(args, cli.seed),
        None => {
            let config = cli.show_config()?;
            info!("config: {config:?}");
            run_effect::<FireworksEffect>(&config)
        }
    }
}
