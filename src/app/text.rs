//! Rendered-text texture cache
//!
//! Text rendering goes through SDL_ttf behind the `text` cargo feature.
//! Rendered strings are cached as textures; entries that have not been
//! drawn for a while are evicted so a changing score does not accumulate
//! textures forever. A disabled cache renders nothing, which is also the
//! fallback when the font file is missing or the feature is compiled
//! out.

use std::time::Duration;

use crate::error::Result;

/// Font point size for HUD and banner text
#[cfg(feature = "text")]
pub const FONT_POINT_SIZE: u16 = 28;

/// A cached string texture is evicted after going unused this long
pub const MAX_UNUSED: Duration = Duration::from_secs(5);

#[cfg(feature = "text")]
struct Entry<'a> {
    last_used: std::time::Instant,
    texture: sdl2::render::Texture<'a>,
}

#[cfg(feature = "text")]
type Renderer<'a, 'ttf> = (
    sdl2::ttf::Font<'ttf, 'static>,
    &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
);

/// Cache of text rendered into textures, keyed by the string
pub struct TextCache<'a, 'ttf> {
    #[cfg(feature = "text")]
    renderer: Option<Renderer<'a, 'ttf>>,
    #[cfg(feature = "text")]
    entries: std::collections::HashMap<String, Entry<'a>>,
    #[cfg(not(feature = "text"))]
    _marker: std::marker::PhantomData<(&'a (), &'ttf ())>,
}

#[cfg(feature = "text")]
impl<'a, 'ttf> TextCache<'a, 'ttf> {
    /// Open the HUD font and create an empty cache
    pub fn new(
        ttf: &'ttf sdl2::ttf::Sdl2TtfContext,
        creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        font_path: &std::path::Path,
    ) -> Result<Self> {
        use crate::error::GameError;

        let font = ttf
            .load_font(font_path, FONT_POINT_SIZE)
            .map_err(GameError::font)?;

        tracing::debug!(path = %font_path.display(), "font loaded");

        Ok(Self {
            renderer: Some((font, creator)),
            entries: std::collections::HashMap::new(),
        })
    }

    /// Create a cache that never renders anything
    pub fn disabled() -> Self {
        Self {
            renderer: None,
            entries: std::collections::HashMap::new(),
        }
    }

    /// Get the texture for a string, rendering and caching it on first
    /// use. Returns `None` when the cache is disabled.
    pub fn texture_for(
        &mut self,
        text: &str,
        color: crate::world::Color,
    ) -> Result<Option<&sdl2::render::Texture<'a>>> {
        use crate::error::GameError;

        let Some((font, creator)) = &self.renderer else {
            return Ok(None);
        };
        // copy the creator reference back out so the rendered texture
        // borrows the creator for 'a, not for this call
        let creator = *creator;

        if !self.entries.contains_key(text) {
            let sdl_color = sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a);
            let surface = font
                .render(text)
                .blended(sdl_color)
                .map_err(|e| GameError::font(e.to_string()))?;
            let mut texture = creator
                .create_texture_from_surface(&surface)
                .map_err(|e| GameError::font(e.to_string()))?;
            texture.set_blend_mode(sdl2::render::BlendMode::Blend);

            self.entries.insert(
                text.to_string(),
                Entry {
                    last_used: std::time::Instant::now(),
                    texture,
                },
            );
        }

        match self.entries.get_mut(text) {
            Some(entry) => {
                entry.last_used = std::time::Instant::now();
                Ok(Some(&entry.texture))
            }
            None => Ok(None),
        }
    }

    /// Drop cached strings that have not been drawn recently
    pub fn evict_unused(&mut self) {
        self.entries
            .retain(|_, entry| entry.last_used.elapsed() < MAX_UNUSED);
    }

    /// Number of cached strings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(not(feature = "text"))]
impl<'a, 'ttf> TextCache<'a, 'ttf> {
    /// Create a cache that never renders anything; text rendering is
    /// compiled out
    pub fn disabled() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }

    /// Always `None`
    pub fn texture_for(
        &mut self,
        _text: &str,
        _color: crate::world::Color,
    ) -> Result<Option<&sdl2::render::Texture<'a>>> {
        Ok(None)
    }

    /// No-op
    pub fn evict_unused(&mut self) {}

    /// Always zero
    pub fn len(&self) -> usize {
        0
    }

    /// Always true
    pub fn is_empty(&self) -> bool {
        true
    }
}
