use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use serde_json::json;
use spindle_config::{SettingsLoad, SettingsLoader};
use spindle_core::model::SettleStrategy;
use spindle_core::{InteractionController, InteractionPhase};
use tracing::{info, warn};

use crate::host::CommandLog;

/// Simulated display refresh for engine-driven tweens.
const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: u32 = 10_000;

fn load_settings(
    config: Option<PathBuf>,
    env_file: Option<PathBuf>,
) -> Result<SettingsLoad> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = env_file {
        loader = loader.with_env_file(path);
    }
    loader.load().context("failed to load spindle settings")
}

fn build_controller(
    load: &SettingsLoad,
    items: usize,
) -> InteractionController<usize> {
    for warning in load.warnings.iter() {
        warn!(hint = warning.hint.as_deref(), "{}", warning.message);
    }
    InteractionController::new(
        (0..items).collect(),
        load.settings.to_configuration(),
    )
    .with_chrome(load.settings.to_chrome())
    .with_settle_strategy(load.settings.to_settle_strategy())
}

fn ensure_bounds(width: f32, height: f32) -> Result<()> {
    ensure!(
        width.is_finite() && height.is_finite(),
        "--width and --height must be finite numbers"
    );
    Ok(())
}

pub fn run_layout(
    width: f32,
    height: f32,
    items: usize,
    config: Option<PathBuf>,
) -> Result<()> {
    ensure_bounds(width, height)?;
    let load = load_settings(config, None)?;
    let mut carousel = build_controller(&load, items);
    carousel.on_bounds_changed(width, height, &mut CommandLog::new());

    let metrics = carousel
        .metrics()
        .copied()
        .context("carousel produced no layout")?;
    let (scroll_min, scroll_max) =
        metrics.content.scroll_range(metrics.item_size.width);
    let current_index = carousel.current_index();

    let report = json!({
        "source": load.source.to_string(),
        "container": metrics.container,
        "item_count": items,
        "scale_factor": metrics.scale_factor,
        "item_size": metrics.item_size,
        "content": {
            "total_width": metrics.content.total_width,
            "inset_left": metrics.content.inset_left,
            "inset_right": metrics.content.inset_right,
            "content_width": metrics.content.content_width(),
        },
        "scroll_range": [scroll_min, scroll_max],
        "current_index": current_index,
        "initial_offset": current_index.map(|_| carousel.state().scroll_offset),
        "frames": (0..items).map(|index| metrics.item_frame(index)).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn run_check(
    config: Option<PathBuf>,
    env_file: Option<PathBuf>,
) -> Result<()> {
    let load = load_settings(config, env_file)?;

    println!("Source: {}", load.source);
    if load.env_file_loaded {
        println!("Env file: loaded");
    }
    if !load.warnings.is_empty() {
        println!("Warnings:");
        for warning in load.warnings.iter() {
            match &warning.hint {
                Some(hint) => {
                    println!("  - {} (hint: {})", warning.message, hint)
                }
                None => println!("  - {}", warning.message),
            }
        }
    }

    let effective = toml::to_string_pretty(&load.settings)
        .context("failed to render effective settings")?;
    println!("Effective settings:\n{effective}");
    println!("[ok] settings pass guard rails");
    Ok(())
}

pub fn run_simulate(
    width: f32,
    height: f32,
    items: usize,
    release_at: f32,
    config: Option<PathBuf>,
) -> Result<()> {
    ensure_bounds(width, height)?;
    ensure!(release_at.is_finite(), "--release-at must be a finite number");

    let load = load_settings(config, None)?;
    let mut carousel = build_controller(&load, items);
    let mut host = CommandLog::new();

    carousel.on_bounds_changed(width, height, &mut host);
    carousel.on_drag_started(&mut host);

    if let Some(metrics) = carousel.metrics().copied() {
        let released =
            release_at * metrics.item_size.width - metrics.content.inset_left;
        carousel.on_scroll_offset_changed(released, &mut host);

        let started = Instant::now();
        let target =
            carousel.on_drag_will_end_at(0.0, released, started, &mut host);

        match carousel.settle_strategy() {
            SettleStrategy::HostAnimated => {
                if matches!(carousel.phase(), InteractionPhase::Settling { .. }) {
                    // Stand in for the host's animation landing on the target.
                    carousel.on_scroll_offset_changed(target, &mut host);
                    carousel.on_scroll_animation_finished();
                }
            }
            SettleStrategy::Tweened { .. } => {
                for frame in 1..=MAX_FRAMES {
                    if !carousel.tick_at(started + FRAME * frame, &mut host) {
                        break;
                    }
                }
            }
            SettleStrategy::Immediate => {}
        }
    }

    info!(
        current_index = carousel.current_index(),
        commands = host.commands().len(),
        "simulation finished"
    );

    let mut stdout = io::stdout().lock();
    for command in host.commands() {
        serde_json::to_writer(&mut stdout, command)?;
        writeln!(stdout)?;
    }
    Ok(())
}
