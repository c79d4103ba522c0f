//! Native headless runner
//!
//! Drives a session at a fixed 60 Hz with a sleeping frame governor and a
//! small scripted input, logging HUD snapshots along the way and printing
//! the final session result as JSON. Usage:
//!
//! ```text
//! edge-swarm [survival|radial12|radial8] [seed]
//! ```

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use edge_swarm::consts::TICK_RATE;
use edge_swarm::sim::{Phase, SessionState, TickInput, tick};
use edge_swarm::tuning::Tuning;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next().as_deref() {
        None | Some("survival") => Tuning::survival(),
        Some("radial12") => Tuning::radial_dense(),
        Some("radial8") => Tuning::radial_sparse(),
        Some(other) => {
            log::error!("unknown variant {other:?}, expected survival|radial12|radial8");
            std::process::exit(2);
        }
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(wall_clock_seed);

    log::info!("starting {:?} session with seed {seed}", tuning.mode);
    let mut state = SessionState::new(tuning, seed);
    let tick_budget = Duration::from_secs(1) / TICK_RATE;

    while state.phase == Phase::Running {
        let frame_start = Instant::now();

        let input = patrol_input(state.clock.ticks);
        tick(&mut state, &input);
        for event in state.drain_events() {
            log::debug!("event: {event:?}");
        }
        if state.clock.ticks % (TICK_RATE as u64 * 10) == 0 {
            let hud = state.hud();
            log::info!(
                "t={}s score={} hearts={}",
                state.clock.now_ms() / 1000,
                hud.score,
                hud.hearts
            );
        }

        // Frame governor: sleep out the rest of the tick budget
        if let Some(rest) = tick_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    if let Some(result) = state.result() {
        match serde_json::to_string(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to encode session result: {err}"),
        }
    }
}

/// Scripted input: hold fire and patrol a slow square so a headless run
/// exercises movement, clamping and both fire policies
fn patrol_input(ticks: u64) -> TickInput {
    let mut input = TickInput {
        fire: true,
        ..TickInput::default()
    };
    match (ticks / 120) % 4 {
        0 => input.right = true,
        1 => input.down = true,
        2 => input.left = true,
        _ => input.up = true,
    }
    input
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
