//! Disc Arena headless runner
//!
//! Usage: `disc-arena [SETTINGS_JSON] [FRAMES]`
//!
//! Loads settings (defaults when no file is given), runs the frame loop with
//! a pointer sweeping across the arena, kicks halfway through and logs where
//! the highlighted particle went. Set `RUST_LOG=debug` for per-frame detail.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = native::run(std::env::args().skip(1).collect()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use disc_arena::platform::FrameLoop;
    use disc_arena::{Error, Result, Settings, Simulator, Vector2};

    const DEFAULT_FRAMES: u64 = 600;

    fn parse_frames(raw: &str) -> Result<u64> {
        raw.parse().map_err(|e| {
            Error::InvalidConfiguration(format!("FRAMES must be a whole number, got {raw:?}: {e}"))
        })
    }

    pub fn run(args: Vec<String>) -> Result<()> {
        let settings = match args.first() {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                log::info!("Loaded settings from {}", path);
                Settings::from_json(&json)?
            }
            None => Settings::default(),
        };
        let frames = match args.get(1) {
            Some(raw) => parse_frames(raw)?,
            None => DEFAULT_FRAMES,
        };

        let mut sim = Simulator::new(settings)?;
        log::info!("Disc Arena (native) starting, seed {}", sim.seed());

        let bound = sim.settings().arena_bound;
        let sweep_speed = bound / frames.max(1) as f32;

        sim.start();
        let ran = FrameLoop::new(frames).run_with(&mut sim, |sim, i| {
            if i == frames / 2 {
                sim.kick();
            }

            // Pointer crosses the arena diagonally
            let t = i as f32 * sweep_speed;
            sim.on_pointer_move(Vector2::new(t, t), Vector2::new(sweep_speed, sweep_speed));

            if i % 60 == 0 {
                if let Some(first) = sim.first_particle() {
                    log::info!("frame {:>5}: first particle at {}", i, first.position());
                }
            }
        });
        sim.stop();

        log::info!(
            "Ran {} frames with {} particles; total momentum {}",
            ran,
            sim.particles().len(),
            sim.total_momentum()
        );
        Ok(())
    }

}
