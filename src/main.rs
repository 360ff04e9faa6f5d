//! Space Shooter entry point
//!
//! Native headless driver: runs the autopilot through the fixed-timestep
//! frame loop, renders every frame into a draw list and logs the HUD.

use space_shooter::audio::LogSink;
use space_shooter::consts::{SIM_DT, TICK_RATE};
use space_shooter::renderer::{DrawList, RenderSink, Starfield};
use space_shooter::sim::{GamePhase, SeededRng, TickInput, TickOutcome};
use space_shooter::{Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Space Shooter (headless) starting...");

    let mut settings = Settings::load();
    if let Ok(name) = std::env::var(Settings::QUALITY_ENV) {
        settings.override_quality(&name);
    }

    let mut game = Game::new(&settings, LogSink::default());
    let mut draw = DrawList::new(settings.max_particles());
    if settings.quality.starfield_enabled() {
        // Separate stream so the background never perturbs the simulation
        let stars = SeededRng::new(game.seed().rotate_left(32));
        draw = draw.with_starfield(Starfield::new(stars));
    }

    let autopilot = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut restarted = false;

    for frame in 0..settings.demo_frames {
        let mut input = autopilot.clone();
        if game.phase() == GamePhase::GameOver {
            // One restart, then quit on the next game over
            if restarted {
                input.quit = true;
            } else {
                input.restart = true;
                restarted = true;
            }
        }

        if game.frame(SIM_DT, &input) == TickOutcome::Quit {
            break;
        }

        draw.render(&game.snapshot());

        if frame % TICK_RATE == 0 {
            let hud = &game.snapshot().hud;
            log::info!(
                "t={}s score={} level={} ship={} hp={}/{} power={} boss={:?} shapes={}",
                frame / TICK_RATE,
                hud.score,
                hud.level,
                hud.ship_level,
                hud.health,
                hud.max_health,
                hud.bullet_power,
                hud.boss_health,
                draw.shapes.len()
            );
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "Finished after {} frames: score {} (seed {}, {} cues)",
        draw.frames,
        snapshot.hud.score,
        game.seed(),
        game.audio().sink().cues_played
    );
    match serde_json::to_string(&snapshot.hud) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Could not serialize HUD: {}", e),
    }
}
