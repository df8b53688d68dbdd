//! Sprite loading
//!
//! Images are decoded once at startup into RGB surfaces and shared by
//! every actor that uses them.

use std::path::Path;
use std::rc::Rc;

use image::ImageFormat;

use crate::error::GameError;
use crate::renderer::Surface;
use crate::settings::Settings;

/// Fail early if the decoder cannot read any of `paths`' formats
pub fn check_capabilities<P: AsRef<Path>>(paths: &[P]) -> Result<(), GameError> {
    for path in paths {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).map_err(|_| GameError::CapabilityMissing {
            format: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_else(|| "<no extension>".to_string()),
        })?;
        if !format.reading_enabled() {
            return Err(GameError::CapabilityMissing {
                format: format!("{format:?}"),
            });
        }
    }
    Ok(())
}

/// Decode `path` into a surface. With `transparent`, the top-left pixel
/// becomes the color key.
pub fn load_image(path: &Path, transparent: bool) -> Result<Surface, GameError> {
    let decoded = image::open(path).map_err(|source| GameError::AssetLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        })
        .collect();

    let mut surface = Surface::from_pixels(width as i32, height as i32, pixels);
    if transparent {
        surface.set_color_key(surface.get(0, 0));
    }
    log::debug!(
        "Loaded {} ({}x{}, key {:?})",
        path.display(),
        width,
        height,
        surface.color_key()
    );
    Ok(surface)
}

/// Every image the game uses
#[derive(Debug, Clone)]
pub struct Assets {
    /// Tiled across the top of the background
    pub background: Rc<Surface>,
    pub patroller: Rc<Surface>,
    pub player: Rc<Surface>,
}

impl Assets {
    pub fn load(settings: &Settings) -> Result<Self, GameError> {
        let background = settings.asset_path(&settings.background_image);
        let patroller = settings.asset_path(&settings.patroller_image);
        let player = settings.asset_path(&settings.player_image);
        check_capabilities(&[&background, &patroller, &player])?;

        let assets = Self {
            background: Rc::new(load_image(&background, false)?),
            patroller: Rc::new(load_image(&patroller, true)?),
            player: Rc::new(load_image(&player, true)?),
        };
        log::info!("Assets loaded from {}", settings.asset_dir.display());
        Ok(assets)
    }
}
