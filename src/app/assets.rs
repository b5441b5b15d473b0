//! Asset discovery and texture loading
//!
//! The manifest scan works without any SDL context so the `check`
//! command can validate an asset directory headlessly. Actual texture
//! loading sits behind the `textures` cargo feature.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
#[cfg(feature = "textures")]
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{GameError, Result};

/// Texture stems the renderer looks up by name
pub const TEXTURE_STEMS: [&str; 5] = ["tile", "ball", "arkanoid", "game_over", "you_won"];

/// Font file the HUD renders text with
pub const FONT_FILE: &str = "font.ttf";

/// What an asset directory scan found
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Directory that was scanned
    pub dir: PathBuf,
    /// Stems of the `.png` files found
    pub textures: Vec<String>,
    /// Whether the HUD font is present
    pub has_font: bool,
    /// Expected entries that were not found
    pub missing: Vec<String>,
}

impl AssetManifest {
    /// Scan a directory for the game's assets
    pub fn scan(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(GameError::assets_not_found(dir));
        }

        let mut textures = BTreeSet::new();
        let mut has_font = false;

        for entry in WalkDir::new(dir).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let is_png = path
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));

            if is_png {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    textures.insert(stem.to_string());
                }
            } else if entry.file_name() == FONT_FILE {
                has_font = true;
            }
        }

        let mut missing: Vec<String> = TEXTURE_STEMS
            .iter()
            .filter(|stem| !textures.contains(**stem))
            .map(|stem| format!("{stem}.png"))
            .collect();
        if !has_font {
            missing.push(FONT_FILE.to_string());
        }

        debug!(
            dir = %dir.display(),
            textures = textures.len(),
            has_font,
            missing = missing.len(),
            "asset scan finished"
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            textures: textures.into_iter().collect(),
            has_font,
            missing,
        })
    }

    /// True when every expected asset is present
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Paths of the `.png` files in the manifest
    pub fn texture_paths(&self) -> Vec<PathBuf> {
        self.textures
            .iter()
            .map(|stem| self.dir.join(format!("{stem}.png")))
            .collect()
    }
}

/// Textures loaded from the asset directory, looked up by file stem.
///
/// Without the `textures` feature the store is always empty and the
/// renderer falls back to filled rectangles.
pub struct TextureStore<'a> {
    #[cfg(feature = "textures")]
    entries: std::collections::HashMap<String, sdl2::render::Texture<'a>>,
    #[cfg(not(feature = "textures"))]
    _marker: std::marker::PhantomData<&'a ()>,
}

impl<'a> TextureStore<'a> {
    /// Load every `.png` in the asset directory as a texture
    #[cfg(feature = "textures")]
    pub fn load(
        creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        dir: &Path,
    ) -> Result<Self> {
        use sdl2::image::LoadTexture;

        let manifest = AssetManifest::scan(dir)?;
        if !manifest.is_complete() {
            warn!(missing = ?manifest.missing, "asset directory is incomplete");
        }

        let mut entries = std::collections::HashMap::new();
        for path in manifest.texture_paths() {
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };

            debug!(texture = %stem, "loading texture");
            let mut texture = creator
                .load_texture(&path)
                .map_err(|e| GameError::texture(&stem, e))?;
            texture.set_blend_mode(sdl2::render::BlendMode::Blend);
            entries.insert(stem, texture);
        }

        Ok(Self { entries })
    }

    /// Create a store with no textures
    pub fn empty() -> Self {
        #[cfg(feature = "textures")]
        {
            Self {
                entries: std::collections::HashMap::new(),
            }
        }
        #[cfg(not(feature = "textures"))]
        {
            Self {
                _marker: std::marker::PhantomData,
            }
        }
    }

    /// Look up a texture by file stem
    pub fn get(&self, name: &str) -> Option<&sdl2::render::Texture<'a>> {
        #[cfg(feature = "textures")]
        {
            self.entries.get(name)
        }
        #[cfg(not(feature = "textures"))]
        {
            let _ = name;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_scan_complete_directory() {
        let dir = tempfile::tempdir().unwrap();
        for stem in TEXTURE_STEMS {
            touch(dir.path(), &format!("{stem}.png"));
        }
        touch(dir.path(), FONT_FILE);

        let manifest = AssetManifest::scan(dir.path()).unwrap();
        assert!(manifest.is_complete());
        assert!(manifest.has_font);
        assert_eq!(manifest.textures.len(), TEXTURE_STEMS.len());
    }

    #[test]
    fn test_scan_reports_missing_assets() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "tile.png");
        touch(dir.path(), "ball.png");

        let manifest = AssetManifest::scan(dir.path()).unwrap();
        assert!(!manifest.is_complete());
        assert!(manifest.missing.contains(&"arkanoid.png".to_string()));
        assert!(manifest.missing.contains(&FONT_FILE.to_string()));
    }

    #[test]
    fn test_scan_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "tile.PNG");

        let manifest = AssetManifest::scan(dir.path()).unwrap();
        assert_eq!(manifest.textures, vec!["tile".to_string()]);
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(AssetManifest::scan(&gone).is_err());
    }

    #[test]
    fn test_empty_store_has_no_textures() {
        let store = TextureStore::empty();
        assert!(store.get("tile").is_none());
    }
}
