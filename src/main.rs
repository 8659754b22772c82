//! Bullet Bill entry point
//!
//! Without a window backend this runs headless: it loads settings and assets,
//! then plays a scripted volley through the same frame pump a windowed build
//! would use, logging every shot.
//!
//! Usage: `bullet-bill [settings.json] [shapes|sprites]`

use std::path::PathBuf;

use glam::Vec2;

use bullet_bill::assets::Assets;
use bullet_bill::consts::ANCHOR;
use bullet_bill::settings::SETTINGS_FILE;
use bullet_bill::sim::{InputEvent, KeyAction};
use bullet_bill::{DisplayMode, Host, Settings};

/// Render cadence of the pretend display (deliberately not 60 Hz)
const FRAME_DT: f32 = 1.0 / 144.0;
/// Give up on a shot that has not landed after this long
const SHOT_TIMEOUT_FRAMES: u32 = 144 * 20;

/// Drag offsets from the cannon for the demo volley
const VOLLEY: [Vec2; 5] = [
    Vec2::new(160.0, -260.0),
    Vec2::new(190.0, -240.0),
    Vec2::new(120.0, -120.0),
    Vec2::new(320.0, -180.0),
    Vec2::new(0.0, 0.0),
];

fn main() {
    env_logger::init();
    log::info!("Bullet Bill (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let mut settings = Settings::load_from(&settings_path);
    if let Some(mode) = args.next() {
        match DisplayMode::from_str(&mode) {
            Some(mode) => settings.display_mode = mode,
            None => log::warn!("Unknown display mode '{}', keeping {}", mode, settings.display_mode.as_str()),
        }
    }
    let assets = Assets::load(&settings.asset_root);
    if !assets.missing().is_empty() {
        log::warn!("Running with {} unbound assets", assets.missing().len());
    }

    let mut host = Host::new(settings);
    let mut frames = 0u64;

    for (shot, offset) in VOLLEY.iter().enumerate() {
        // Tweak gravity between shots to show the indicator moving
        if shot == 2 {
            host.push_event(InputEvent::Key(KeyAction::IncreaseGravity));
        }
        if shot == 3 {
            host.push_event(InputEvent::Key(KeyAction::ToggleDisplayMode));
        }

        let pointer = ANCHOR + *offset;
        host.push_event(InputEvent::PointerDown(ANCHOR));
        host.push_event(InputEvent::PointerMove(pointer));
        let guide = host.frame().sprites.len();
        log::debug!("Aiming shot {} at {:?} ({} sprites with guide)", shot + 1, pointer, guide);
        host.push_event(InputEvent::PointerUp(pointer));

        let mut waited = 0;
        while host.state().is_flying() && waited < SHOT_TIMEOUT_FRAMES {
            host.update(FRAME_DT);
            let _frame = host.frame();
            frames += 1;
            waited += 1;
        }
        if host.state().is_flying() {
            log::warn!("Shot {} still flying after {} frames", shot + 1, waited);
        }
    }

    host.push_event(InputEvent::Key(KeyAction::Exit));
    if host.exit_requested() {
        log::info!("Exit requested, shutting down");
    }

    let score = host.state().score;
    log::info!(
        "Done after {} frames ({} ticks, {:.1}s simulated): {} hits, {} misses",
        frames,
        host.state().time_ticks,
        host.state().sim_time,
        score.hits,
        score.misses
    );
    println!("Hits: {}  Misses: {}", score.hits, score.misses);
}
