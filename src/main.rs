use anyhow::{anyhow, Context, Result};
use log::{error, info};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::{AssetLoader, SpriteSheetIndex};
use engine::game_loop::FrameClock;
use engine::input::InputManager;
use engine::renderer::{Renderer, SpriteBatch};
use game::{GameConfig, GameWorld};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting bombr...");

    let config = GameConfig::from_env();
    let assets = AssetLoader::new(config.asset_dir());

    // Load the sheet once; everything below reads it
    let sheet = SpriteSheetIndex::build(
        assets.resolve_path(&config.sheet_file),
        assets.resolve_path(&config.descriptor_file),
        config.frame_width,
    )
    .with_context(|| format!("Failed to load sprite sheet from {}", assets.base_path().display()))?;

    let mut world = GameWorld::new(&config, &sheet)
        .context("Sprite sheet descriptor is incomplete")?;
    let mut input = InputManager::new(config.input.clone());
    let mut batch = SpriteBatch::new(sheet.width(), sheet.height());

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        &sheet,
        config.clear_color,
    ))
    .context("Failed to initialize renderer")?;

    let mut clock = FrameClock::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Close requested after {} frames, shutting down...",
                    clock.frame_count()
                );
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are not delivered while unfocused
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let dt = clock.begin_frame();
                world.tick(dt, input.control());

                batch.clear();
                world.draw(&mut batch);

                if let Err(e) = renderer.render(&batch) {
                    error!("Failed to render frame: {:#}", e);
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow!("Event loop error: {}", e))?;

    Ok(())
}
