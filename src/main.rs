use std::time::Duration;

use anyhow::Result;
use glam::{IVec2, Vec2};
use log::info;

use rusted_kit::core::{try_convert, EnumCoercion, EnumValue, FloatExt};
use rusted_kit::engine::{CountdownTimer, FrameClock};
use rusted_kit::ui::{AnchorPreset, RectLayout};
use rusted_kit::KitConfig;

/// Simulated frame length for the demo countdown
const DEMO_FRAME: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = KitConfig {
        timer_duration: 3.0,
        ..KitConfig::default()
    };
    info!("Starting rusted-kit demo with {:?}", config);

    run_countdown(&config)?;
    run_layout(&config);

    Ok(())
}

fn run_countdown(config: &KitConfig) -> Result<()> {
    let mut clock = FrameClock::new();
    let mut timer = CountdownTimer::from_config(config);
    timer.start();

    while timer.is_running() {
        let delta = clock.advance_by(DEMO_FRAME);
        timer.advance(delta);

        let progress = (config.timer_duration - timer.remaining())
            .normalize_extremum(0.0, config.timer_duration, config.tolerance)?;
        info!(
            "frame {:>2}: {} left ({:.0}% done)",
            clock.frame_count(),
            config.format_seconds(timer.remaining().max(0.0))?,
            progress * 100.0
        );
    }

    info!(
        "Countdown finished after {} of game time",
        config.format_seconds(clock.game_time())?
    );
    Ok(())
}

fn run_layout(config: &KitConfig) {
    let mut rect = RectLayout::default();

    // Presets usually arrive as serialized integers
    for index in [0_i64, 15, 42, -1] {
        match try_convert::<AnchorPreset>(index, EnumCoercion::from_config(config)) {
            Some(EnumValue::Named(preset)) => {
                rect.set_anchor(preset, IVec2::new(10, -10));
                info!(
                    "{:?}: anchors {} .. {}, pivot {}, offsets {} .. {}",
                    preset,
                    rect.anchor_min(),
                    rect.anchor_max(),
                    rect.pivot(),
                    rect.offset_min(),
                    rect.offset_max()
                );
            }
            Some(EnumValue::Unnamed(raw)) => {
                info!("Index {} is not a known preset ({})", index, raw);
            }
            None => info!("Index {} cannot be an anchor preset", index),
        }
    }

    rect.set_anchor(AnchorPreset::MiddleLeft, IVec2::ZERO);
    rect.set_size_delta(Vec2::new(200.0, 60.0));
    rect.set_padding_size(IVec2::new(20, 10));
    info!(
        "After padding: size {}, position {}",
        rect.size_delta(),
        rect.anchored_position()
    );
}
