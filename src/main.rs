//! Asteroids entry point
//!
//! Native builds run a headless session: an autopilot flies the ship until
//! it dies or the frame budget runs out, then the result is printed as JSON.
//! The browser entry point is `asteroids::web`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use asteroids::audio::LogSink;
    use asteroids::platform::FrameClock;
    use asteroids::sim::{ActorKind, GameRng, GameState, Ship, any_live};
    use asteroids::{JsonFileStore, KeyStatus, ScreenBounds, Session, Tuning, normalize_degrees};
    use clap::Parser;

    const DEFAULT_FRAMES: u64 = 60 * 60;
    /// Frames to keep animating after the ship dies
    const WIND_DOWN_FRAMES: u32 = 120;

    /// Heading error (degrees) inside which the autopilot opens fire
    const AIM_TOLERANCE: f32 = 8.0;
    /// Thrust toward targets farther than this
    const CHASE_DISTANCE: f32 = 250.0;

    #[derive(Parser, Debug)]
    #[command(name = "asteroids")]
    #[command(about = "Headless Asteroids session flown by an autopilot")]
    struct Cli {
        /// Frame budget for the session
        #[arg(long, default_value_t = DEFAULT_FRAMES)]
        frames: u64,
        /// Seed for a reproducible session (entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Use the wall clock and sleep between frames instead of a fixed 60Hz step
        #[arg(long)]
        realtime: bool,
        /// Silence sound effects
        #[arg(long)]
        muted: bool,
        /// Tuning file; missing means defaults
        #[arg(long, default_value = "asteroids.json")]
        tuning: PathBuf,
        /// Top score file
        #[arg(long, default_value = "asteroids-topscore.json")]
        scores: PathBuf,
    }

    /// Turn toward the nearest asteroid, shoot when lined up, chase when far
    fn autopilot(state: &GameState, ship: &Ship) -> KeyStatus {
        let nearest = state
            .live(ActorKind::Asteroid)
            .map(|a| a.pos() - ship.body.pos)
            .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()));
        let Some(offset) = nearest else {
            return KeyStatus::default();
        };

        // Rotation 0 faces -y; headings grow clockwise on screen
        let desired = normalize_degrees(offset.x.atan2(-offset.y).to_degrees());
        let error = normalize_degrees(desired - ship.rotation);
        let turn_right = error < 180.0;
        let off_by = if turn_right { error } else { 360.0 - error };

        KeyStatus {
            left: !turn_right && off_by > AIM_TOLERANCE,
            right: turn_right && off_by > AIM_TOLERANCE,
            up: offset.length() > CHASE_DISTANCE,
            down: false,
            space: off_by <= AIM_TOLERANCE,
        }
    }

    fn load_tuning(cli: &Cli, bounds: &ScreenBounds) -> Tuning {
        let tuning = match Tuning::load(&cli.tuning) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Bad tuning file, using defaults: {}", e);
                return Tuning::default();
            }
        };
        match tuning.fits(bounds) {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Tuning does not fit the screen, using defaults: {}", e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        env_logger::init();
        let cli = Cli::parse();
        log::info!("Asteroids (headless) starting...");

        let bounds = ScreenBounds::default();
        let tuning = load_tuning(&cli, &bounds);
        let rng = match cli.seed {
            Some(seed) => {
                log::info!("Using seed {}", seed);
                GameRng::seeded(seed)
            }
            None => GameRng::from_entropy(),
        };
        let mut clock = if cli.realtime {
            FrameClock::Realtime
        } else {
            FrameClock::fixed(60.0)
        };

        let store = JsonFileStore::new(cli.scores.clone());
        let mut session = Session::new(tuning, store, LogSink, rng, bounds);
        session.audio_mut().set_muted(cli.muted);
        session.start();

        let mut frames_after_death = 0;
        for _ in 0..cli.frames {
            let state = session.state();
            let keys = state
                .ship()
                .map(|ship| autopilot(state, ship))
                .unwrap_or_default();
            session.set_keys(keys);
            session.step(clock.next_frame());

            let state = session.state();
            if !state.in_game() {
                // Let the explosion finish before stopping
                frames_after_death += 1;
                let settled = !any_live(state, ActorKind::Particle);
                if settled || frames_after_death > WIND_DOWN_FRAMES {
                    break;
                }
            }
            if cli.realtime {
                std::thread::sleep(std::time::Duration::from_millis(16));
            }
        }

        let board = session.scoreboard();
        log::info!(
            "Stopped after {} frames: score {}, top {}",
            session.state().frame,
            board.score,
            board.top_score
        );
        if let Some(verdict) = board.verdict {
            log::info!("{}", verdict.message());
        }
        match serde_json::to_string(&board) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not encode scoreboard: {}", e),
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is asteroids::web::wasm_start, this is just to satisfy the compiler
}
