//! Drawing the world onto an SDL canvas
//!
//! The world simulates in its own unit space; everything here scales
//! world rectangles onto the current output size, so resizing the
//! window never touches the simulation.

use sdl2::pixels;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::{GameError, Result};
use crate::world::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::world::{palette, Color, Phase, World};

use super::assets::TextureStore;
use super::text::TextCache;

/// Background clear color
pub const CLEAR_COLOR: Color = palette::WHITE;

/// HUD margin from the window edges, in pixels
const HUD_MARGIN: i32 = 10;

/// Scale a world rectangle into view coordinates, rounding to pixels
pub fn world_to_view(output: (u32, u32), rect: crate::world::RectF) -> Rect {
    let width_ratio = output.0 as f32 / WORLD_WIDTH;
    let height_ratio = output.1 as f32 / WORLD_HEIGHT;

    Rect::new(
        (rect.x * width_ratio).round() as i32,
        (rect.y * height_ratio).round() as i32,
        (rect.w * width_ratio).round() as u32,
        (rect.h * height_ratio).round() as u32,
    )
}

fn sdl_color(c: Color) -> pixels::Color {
    pixels::Color::RGBA(c.r, c.g, c.b, c.a)
}

/// Draw one frame of the world. The caller clears and presents.
pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    world: &World,
    textures: &TextureStore,
    text: &mut TextCache,
) -> Result<()> {
    let output = canvas.output_size().map_err(GameError::sdl)?;

    draw_tiles(canvas, world, textures, output)?;
    draw_ball(canvas, world, textures, output)?;
    draw_paddle(canvas, world, output)?;
    draw_pickups(canvas, world, output)?;

    if world.phase() == Phase::Running {
        draw_hud(canvas, world, text, output)?;
    } else {
        draw_overlay(canvas, world, textures, text, output)?;
    }

    text.evict_unused();
    Ok(())
}

fn draw_tiles(
    canvas: &mut Canvas<Window>,
    world: &World,
    textures: &TextureStore,
    output: (u32, u32),
) -> Result<()> {
    let tile_texture = textures.get("tile");

    for tile in world.tiles() {
        let rect = world_to_view(output, tile.body);
        canvas.set_draw_color(sdl_color(tile.color));
        canvas.fill_rect(rect).map_err(GameError::sdl)?;

        if let Some(texture) = tile_texture {
            canvas.copy(texture, None, rect).map_err(GameError::sdl)?;
        }
    }
    Ok(())
}

fn draw_ball(
    canvas: &mut Canvas<Window>,
    world: &World,
    textures: &TextureStore,
    output: (u32, u32),
) -> Result<()> {
    let Some(ball) = world.ball() else {
        return Ok(());
    };
    let rect = world_to_view(output, ball.bounding_rect());

    match textures.get("ball") {
        Some(texture) => canvas.copy(texture, None, rect).map_err(GameError::sdl)?,
        None => {
            canvas.set_draw_color(sdl_color(palette::BLACK));
            canvas.fill_rect(rect).map_err(GameError::sdl)?;
        }
    }
    Ok(())
}

fn draw_paddle(canvas: &mut Canvas<Window>, world: &World, output: (u32, u32)) -> Result<()> {
    let rect = world_to_view(output, world.paddle().body);
    canvas.set_draw_color(sdl_color(palette::BLACK));
    canvas.fill_rect(rect).map_err(GameError::sdl)
}

fn draw_pickups(canvas: &mut Canvas<Window>, world: &World, output: (u32, u32)) -> Result<()> {
    for pickup in world.pickups() {
        let rect = world_to_view(output, pickup.body);
        canvas.set_draw_color(sdl_color(pickup.color));
        canvas.fill_rect(rect).map_err(GameError::sdl)?;
    }
    Ok(())
}

/// Score and remaining balls along the top edge
fn draw_hud(
    canvas: &mut Canvas<Window>,
    world: &World,
    text: &mut TextCache,
    output: (u32, u32),
) -> Result<()> {
    let score = format!("Score: {}", world.score());
    if let Some(texture) = text.texture_for(&score, palette::GRAY)? {
        let q = texture.query();
        let rect = Rect::new(HUD_MARGIN, HUD_MARGIN, q.width, q.height);
        canvas.copy(texture, None, rect).map_err(GameError::sdl)?;
    }

    let balls = format!("Balls: {}", world.remaining_balls());
    if let Some(texture) = text.texture_for(&balls, palette::GRAY)? {
        let q = texture.query();
        let x = output.0 as i32 - q.width as i32 - HUD_MARGIN;
        let rect = Rect::new(x, HUD_MARGIN, q.width, q.height);
        canvas.copy(texture, None, rect).map_err(GameError::sdl)?;
    }

    Ok(())
}

/// Full-screen overlay for the splash, game-over and win screens.
/// Uses the matching texture when present and falls back to a dimmed
/// screen with a text banner.
fn draw_overlay(
    canvas: &mut Canvas<Window>,
    world: &World,
    textures: &TextureStore,
    text: &mut TextCache,
    output: (u32, u32),
) -> Result<()> {
    let (texture_name, banner) = match world.phase() {
        Phase::Splash => ("arkanoid", "ARKANOID"),
        Phase::GameOver => ("game_over", "GAME OVER"),
        Phase::Won => ("you_won", "YOU WON"),
        Phase::Running => return Ok(()),
    };

    if let Some(texture) = textures.get(texture_name) {
        return canvas.copy(texture, None, None).map_err(GameError::sdl);
    }

    // no overlay art: dim the scene and center a banner
    canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
    canvas.set_draw_color(pixels::Color::RGBA(
        palette::GRAY.r,
        palette::GRAY.g,
        palette::GRAY.b,
        0xC0,
    ));
    canvas.fill_rect(None).map_err(GameError::sdl)?;
    canvas.set_blend_mode(sdl2::render::BlendMode::None);

    if let Some(texture) = text.texture_for(banner, palette::WHITE)? {
        let q = texture.query();
        let rect = Rect::new(
            (output.0 as i32 - q.width as i32) / 2,
            (output.1 as i32 - q.height as i32) / 2,
            q.width,
            q.height,
        );
        canvas.copy(texture, None, rect).map_err(GameError::sdl)?;
    }

    Ok(())
}
