/*!
Status Balls app binary.

Wires the plugin stack around a windowed Bevy app:
* Config loading (native layered + wasm embed) using sb_config::AnimConfig.
* Validation warnings logging.
* CLI overrides for the displayed status code and an extra config layer.
*/

use bevy::prelude::*;
use clap::Parser;
use sb_core::{AnimConfigRes, CorePlugin, StatusCode};
use sb_physics::PhysicsPlugin;
use sb_rendering::RenderingPlugin;
use sb_session::SessionPlugin;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render an HTTP status code as an animated ball field", long_about = None)]
struct Args {
    /// Status code to display (overrides the configured default).
    #[arg(long)]
    code: Option<u32>,
    /// Extra config layer applied on top of the defaults.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

// ---------------- Config Loading ----------------

#[cfg(target_arch = "wasm32")]
fn load_config(_extra: Option<&std::path::Path>) -> sb_config::AnimConfig {
    // Embed base config (no layered local override on wasm).
    const RAW: &str = include_str!("../../assets/config/anim.ron");
    ron::from_str(RAW).unwrap_or_else(|e| {
        warn!("CONFIG (wasm) parse failure: {e}; using defaults");
        sb_config::AnimConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(extra: Option<&std::path::Path>) -> sb_config::AnimConfig {
    let mut layers: Vec<std::path::PathBuf> = vec![
        "assets/config/anim.ron".into(),
        "assets/config/anim.local.ron".into(),
    ];
    if let Some(p) = extra {
        layers.push(p.to_path_buf());
    }
    let (cfg, used, errors) = sb_config::AnimConfig::load_layered(layers);
    for e in errors {
        warn!("CONFIG LOAD ISSUE: {e}");
    }
    if used.is_empty() {
        info!("No config layers found; using defaults");
    } else {
        info!(?used, "Config layers loaded");
    }
    cfg
}

// ---------------- Main ----------------

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref());
    if let Some(code) = args.code {
        cfg.status_code = code;
    }

    // Log validation warnings (non-fatal)
    for w in cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }
    info!(?cfg.window, "Window config");
    info!(
        code = cfg.status_code,
        balls = sb_glyphs::seed_count(cfg.status_code),
        "Runtime summary"
    );

    let window_title = cfg.window.title.clone();
    let status = StatusCode(cfg.status_code);

    let mut app = App::new();
    app.insert_resource(AnimConfigRes(cfg.clone()))
        .insert_resource(status)
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: window_title,
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..Default::default()
                }),
                ..Default::default()
            }),
        )
        .add_plugins(CorePlugin)
        .add_plugins(PhysicsPlugin)
        .add_plugins(RenderingPlugin)
        .add_plugins(SessionPlugin);

    app.run();
}
