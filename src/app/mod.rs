//! SDL2 front end: window, event loop and frame pacing
//!
//! Everything here is plumbing between SDL and the world simulation.
//! SDL events are mapped onto the world's own key enum; measured frame
//! deltas drive [`World::update`].

pub mod assets;
pub mod render;
pub mod text;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use tracing::info;

use crate::error::{GameError, Result};
use crate::world::{Key, World};

pub use assets::{AssetManifest, TextureStore};
pub use text::TextCache;

/// Target frame time, circa 60 FPS
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Window and run parameters for the SDL front end
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Use a borderless fullscreen window
    pub fullscreen: bool,
    /// Synchronize presentation with the display
    pub vsync: bool,
    /// Directory holding textures and the HUD font
    pub assets_dir: PathBuf,
    /// World seed
    pub seed: u64,
}

/// Map an SDL keycode onto a world key
fn map_key(code: Keycode) -> Option<Key> {
    match code {
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Space => Some(Key::Release),
        Keycode::R => Some(Key::Restart),
        Keycode::Return => Some(Key::Confirm),
        _ => None,
    }
}

/// Open the window and run the game until the player quits
pub fn run(options: &AppOptions) -> Result<()> {
    info!(
        width = options.width,
        height = options.height,
        fullscreen = options.fullscreen,
        seed = options.seed,
        "starting"
    );

    let sdl = sdl2::init().map_err(GameError::sdl)?;
    let video = sdl.video().map_err(GameError::sdl)?;

    #[cfg(feature = "textures")]
    let _image = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(GameError::sdl)?;
    #[cfg(feature = "text")]
    let ttf = sdl2::ttf::init().map_err(|e| GameError::font(e.to_string()))?;

    let mut window_builder = video.window("Arkanoid", options.width, options.height);
    window_builder.position_centered();
    if options.fullscreen {
        window_builder.fullscreen_desktop();
    }
    let window = window_builder.build()?;

    let mut canvas_builder = window.into_canvas().accelerated();
    if options.vsync {
        canvas_builder = canvas_builder.present_vsync();
    }
    let mut canvas = canvas_builder.build()?;

    #[cfg(any(feature = "textures", feature = "text"))]
    let texture_creator = canvas.texture_creator();

    #[cfg(feature = "textures")]
    let textures = if options.assets_dir.is_dir() {
        TextureStore::load(&texture_creator, &options.assets_dir)?
    } else {
        tracing::warn!(
            dir = %options.assets_dir.display(),
            "asset directory missing; drawing filled rectangles"
        );
        TextureStore::empty()
    };
    #[cfg(not(feature = "textures"))]
    let textures = TextureStore::empty();

    #[cfg(feature = "text")]
    let mut text_cache = {
        let font_path = options.assets_dir.join(assets::FONT_FILE);
        if font_path.is_file() {
            TextCache::new(&ttf, &texture_creator, &font_path)?
        } else {
            tracing::warn!(path = %font_path.display(), "font missing; HUD text disabled");
            TextCache::disabled()
        }
    };
    #[cfg(not(feature = "text"))]
    let mut text_cache = TextCache::disabled();

    let mut pump = sdl.event_pump().map_err(GameError::sdl)?;
    let mut world = World::new(options.seed);
    let mut paused = false;
    let mut last_frame = Instant::now();

    'running: loop {
        for event in pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    repeat: false,
                    ..
                } => {
                    paused = !paused;
                    info!(paused, "pause toggled");
                }
                Event::KeyDown {
                    keycode: Some(code),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_key(code) {
                        world.handle_key(key, true);
                    }
                }
                Event::KeyUp {
                    keycode: Some(code),
                    ..
                } => {
                    if let Some(key) = map_key(code) {
                        world.handle_key(key, false);
                    }
                }
                _ => {}
            }
        }

        let frame_start = Instant::now();
        let delta = frame_start - last_frame;
        last_frame = frame_start;

        if !paused {
            world.update(delta);
        }

        let clear = render::CLEAR_COLOR;
        canvas.set_draw_color(sdl2::pixels::Color::RGBA(clear.r, clear.g, clear.b, clear.a));
        canvas.clear();
        render::draw_frame(&mut canvas, &world, &textures, &mut text_cache)?;
        canvas.present();

        // FPS lock on circa 60 FPS
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - elapsed);
        }
    }

    info!("shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(Keycode::Left), Some(Key::Left));
        assert_eq!(map_key(Keycode::Right), Some(Key::Right));
        assert_eq!(map_key(Keycode::Space), Some(Key::Release));
        assert_eq!(map_key(Keycode::R), Some(Key::Restart));
        assert_eq!(map_key(Keycode::Return), Some(Key::Confirm));
        assert_eq!(map_key(Keycode::A), None);
    }
}
