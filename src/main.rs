//! Headless host for the Duo Pong simulation.
//!
//! Drives the engine at a fixed rate from a scripted key sequence and logs
//! what happens. A windowed front end would replace the script with real
//! keyboard events and draw each snapshot via `duo_pong::hud`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use duo_pong::hud;
use duo_pong::platform::{FixedTimestep, Key, KeyboardLatch, SimThread};
use duo_pong::settings::HostMode;
use duo_pong::{Settings, SimulationEngine, Snapshot};

/// Ticks between direction changes in the scripted input
const SWING_TICKS: u64 = 45;

fn main() -> ExitCode {
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !rust_log_set {
        log::set_max_level(LevelFilter::Info);
    }

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let settings = Settings::load(&path);
    if !rust_log_set {
        log::set_max_level(settings.level_filter());
    }

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!(
        "Duo Pong (headless) starting: seed {}, {} Hz, {} mode",
        seed,
        settings.effective_tick_hz(),
        settings.mode.as_str()
    );
    log::info!("Controls: {}", hud::CONTROLS_HELP);

    let engine = SimulationEngine::new(seed);
    let result = match settings.mode {
        HostMode::Inline => run_inline(engine, &settings),
        HostMode::Threaded => run_threaded(engine, &settings),
    };

    match result {
        Ok(last) => {
            log::info!("Final score {}", hud::score_text(&last));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Host failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// True if tick `at` falls in `[from, to)`
fn crosses(at: u64, from: u64, to: u64) -> bool {
    from <= at && at < to
}

/// Key events for ticks `[from, to)`: both paddles sweep up and down out of
/// phase. Midway through the run the window "loses focus", which drops every
/// held key and pauses; play resumes a swing later.
fn script(latch: &mut KeyboardLatch, from: u64, to: u64, total: u64) {
    let midpoint = total / 2;
    if crosses(midpoint, from, to) {
        latch.clear();
        latch.press(Key::Space);
        latch.release(Key::Space);
    }
    if crosses(midpoint + SWING_TICKS, from, to) {
        latch.press(Key::Space);
        latch.release(Key::Space);
    }

    let down = (to.saturating_sub(1) / SWING_TICKS) % 2 == 0;
    let (press, release) = if down { (Key::S, Key::W) } else { (Key::W, Key::S) };
    latch.release(release);
    latch.press(press);
    let (press, release) = if down { (Key::Up, Key::Down) } else { (Key::Down, Key::Up) };
    latch.release(release);
    latch.press(press);
}

fn log_change(prev: &Snapshot, next: &Snapshot) {
    if prev.paused != next.paused {
        log::info!("{}", hud::overlay(next).unwrap_or("RESUMED"));
    }
    if (prev.left_score, prev.right_score) != (next.left_score, next.right_score) {
        log::info!("Score {}", hud::score_text(next));
    }
}

fn run_inline(mut engine: SimulationEngine, settings: &Settings) -> io::Result<Snapshot> {
    let mut timestep = FixedTimestep::from_hz(settings.effective_tick_hz(), settings.max_substeps.max(1));
    let mut latch = KeyboardLatch::new();
    let frame = Duration::from_secs_f32(timestep.tick_dt());

    let mut last = engine.snapshot();
    let mut scripted = 0u64;
    let mut last_time = Instant::now();

    while timestep.ticks_run() < settings.demo_ticks {
        thread::sleep(frame);
        let now = Instant::now();
        let frame_dt = now.duration_since(last_time).as_secs_f32();
        last_time = now;

        let upcoming = timestep.ticks_run() + 1;
        script(&mut latch, scripted, upcoming, settings.demo_ticks);
        scripted = upcoming;
        if let Some(next) = timestep.run_frame(&mut engine, latch.sample(), frame_dt) {
            log_change(&last, &next);
            last = next;
        }
    }

    log::info!("Simulated {} running ticks", engine.state().time_ticks);
    Ok(last)
}

fn run_threaded(engine: SimulationEngine, settings: &Settings) -> io::Result<Snapshot> {
    let tick_dt = settings.tick_dt();
    let sim = SimThread::spawn(engine, tick_dt, 4)?;
    let mut latch = KeyboardLatch::new();
    let frame = Duration::from_secs_f32(tick_dt);
    let mut last = Snapshot::default();

    for n in 0..settings.demo_ticks {
        script(&mut latch, n, n + 1, settings.demo_ticks);
        sim.send(latch.sample())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "logic thread stopped"))?;

        if let Some(next) = sim.latest() {
            log_change(&last, &next);
            last = next;
        }
        thread::sleep(frame);
    }

    match sim.shutdown() {
        Some(state) => {
            log::info!("Simulated {} running ticks", state.time_ticks);
            Ok(state.snapshot())
        }
        None => Err(io::Error::other("logic thread panicked")),
    }
}
