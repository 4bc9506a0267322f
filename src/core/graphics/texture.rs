//=========================================================================
// Textures
//=========================================================================
//
// CPU-side RGBA images and the image subsystem that decodes them.
//
// Architecture:
//   TextureLoader::init()   (fails at startup if PNG/JPEG decoding is off)
//     ├─ load(path)          image::open → RGBA8 → Texture
//     ├─ load_resource(name) resolved against the resource directory
//     └─ shutdown()          later loads fail with SubsystemClosed
//
// The loader is an owned engine field handed to scene factories, so
// scenes load their textures at construction time.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::Color;
use crate::core::math::Vector2;
use crate::core::platform_bridge::StartupError;

//=== Texture =============================================================

/// Decoded RGBA image, row-major, top-left origin.
#[derive(Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Texture {
    /// Builds a texture by evaluating `pixel(x, y)` for every texel.
    pub fn from_fn<F>(width: u32, height: u32, mut pixel: F) -> Self
    where
        F: FnMut(u32, u32) -> Color,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel(x, y));
            }
        }
        Self { width, height, pixels }
    }

    /// Builds a texture from tightly packed RGBA8 bytes.
    ///
    /// Returns `None` if `rgba.len() != width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Option<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return None;
        }

        Some(Self {
            width,
            height,
            pixels: pixels_from_rgba8(rgba),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size as a vector `(width, height)`.
    pub fn dimensions(&self) -> Vector2 {
        Vector2::new(self.width as f32, self.height as f32)
    }

    /// Texel at `(x, y)`; `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

//=== TextureError ========================================================

/// Texture loading failures.
#[derive(Debug)]
pub enum TextureError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },

    /// The file was read but is not a decodable PNG/JPEG image.
    Decode { path: PathBuf, source: ImageError },

    /// `load_resource` was called but no resource directory was found.
    NoResourceDirectory,

    /// The image subsystem has already been shut down.
    SubsystemClosed,
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to load texture {}: {}", path.display(), source)
            }
            Self::Decode { path, source } => {
                write!(f, "Failed to decode texture {}: {}", path.display(), source)
            }
            Self::NoResourceDirectory => write!(f, "No resource directory available"),
            Self::SubsystemClosed => write!(f, "Image subsystem has been shut down"),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

//=== Decoding ============================================================

fn pixels_from_rgba8(rgba: &[u8]) -> Vec<Color> {
    rgba.chunks_exact(4)
        .map(|px| Color::rgba(px[0], px[1], px[2], px[3]))
        .collect()
}

/// Decodes an image file into `(rgba8 bytes, width, height)`.
pub(crate) fn decode_rgba8(path: &Path) -> Result<(Vec<u8>, u32, u32), TextureError> {
    let image = image::open(path).map_err(|e| match e {
        ImageError::IoError(source) => TextureError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => TextureError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

//=== TextureLoader =======================================================

/// Image subsystem: decodes PNG and JPEG files into [`Texture`]s.
#[derive(Debug)]
pub struct TextureLoader {
    resource_dir: Option<PathBuf>,
    open: bool,
    /// Receives `"textures:shutdown"` when the subsystem closes.
    #[cfg(test)]
    pub(crate) shutdown_log: Option<std::rc::Rc<std::cell::RefCell<Vec<String>>>>,
}

impl TextureLoader {
    //--- Construction -----------------------------------------------------

    /// Starts the image subsystem.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::ImageSubsystem`] if PNG or JPEG decoding is
    /// not compiled into the `image` crate.
    pub fn init(resource_dir: Option<PathBuf>) -> Result<Self, StartupError> {
        for format in [ImageFormat::Png, ImageFormat::Jpeg] {
            if !format.reading_enabled() {
                return Err(StartupError::ImageSubsystem(format!(
                    "{:?} decoding is not enabled",
                    format
                )));
            }
        }

        info!(target: "engine", "Image subsystem initialised (PNG, JPEG)");
        Ok(Self {
            resource_dir,
            open: true,
            #[cfg(test)]
            shutdown_log: None,
        })
    }

    //--- Loading ----------------------------------------------------------

    /// Decodes the image at `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Texture, TextureError> {
        if !self.open {
            return Err(TextureError::SubsystemClosed);
        }

        let path = path.as_ref();
        debug!(target: "engine", "Loading {}", path.display());

        let (rgba, width, height) = decode_rgba8(path)?;
        Ok(Texture {
            width,
            height,
            pixels: pixels_from_rgba8(&rgba),
        })
    }

    /// Decodes `name` relative to the resource directory.
    pub fn load_resource(&self, name: impl AsRef<Path>) -> Result<Texture, TextureError> {
        let dir = self
            .resource_dir
            .as_deref()
            .ok_or(TextureError::NoResourceDirectory)?;
        self.load(dir.join(name))
    }

    //--- Queries ----------------------------------------------------------

    pub fn resource_dir(&self) -> Option<&Path> {
        self.resource_dir.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    //--- Teardown ---------------------------------------------------------

    /// Shuts the subsystem down. Idempotent.
    pub fn shutdown(&mut self) {
        if self.open {
            self.open = false;
            info!(target: "engine", "Image subsystem shut down");

            #[cfg(test)]
            if let Some(log) = &self.shutdown_log {
                log.borrow_mut().push("textures:shutdown".to_string());
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let image = image::RgbaImage::from_fn(width, height, |x, _| {
            image::Rgba([x as u8 * 10, 0, 0, 255])
        });
        image.save(&path).unwrap();
        path
    }

    //=====================================================================
    // Texture Tests
    //=====================================================================

    #[test]
    fn from_fn_fills_row_major() {
        let texture = Texture::from_fn(3, 2, |x, y| Color::rgb(x as u8, y as u8, 0));

        assert_eq!(texture.width(), 3);
        assert_eq!(texture.height(), 2);
        assert_eq!(texture.pixel(2, 1), Some(Color::rgb(2, 1, 0)));
        assert_eq!(texture.pixel(3, 0), None);
    }

    #[test]
    fn from_rgba8_rejects_wrong_length() {
        assert!(Texture::from_rgba8(2, 2, &[0; 15]).is_none());
        assert!(Texture::from_rgba8(2, 2, &[0; 16]).is_some());
    }

    #[test]
    fn dimensions_as_vector() {
        let texture = Texture::from_fn(8, 4, |_, _| Color::BLACK);
        assert_eq!(texture.dimensions(), Vector2::new(8.0, 4.0));
    }

    //=====================================================================
    // TextureLoader Tests
    //=====================================================================

    #[test]
    fn loads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "strip.png", 4, 2);

        let loader = TextureLoader::init(None).unwrap();
        let texture = loader.load(&path).unwrap();

        assert_eq!((texture.width(), texture.height()), (4, 2));
        assert_eq!(texture.pixel(3, 0), Some(Color::rgb(30, 0, 0)));
    }

    #[test]
    fn load_resource_joins_resource_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "tile.png", 2, 2);

        let loader = TextureLoader::init(Some(dir.path().to_path_buf())).unwrap();
        assert!(loader.load_resource("tile.png").is_ok());
    }

    #[test]
    fn load_resource_without_directory_fails() {
        let loader = TextureLoader::init(None).unwrap();
        assert!(matches!(
            loader.load_resource("tile.png"),
            Err(TextureError::NoResourceDirectory)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = TextureLoader::init(None).unwrap();

        let result = loader.load(dir.path().join("missing.png"));
        assert!(matches!(result, Err(TextureError::Io { .. })));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let loader = TextureLoader::init(None).unwrap();
        assert!(matches!(loader.load(&path), Err(TextureError::Decode { .. })));
    }

    #[test]
    fn shutdown_rejects_further_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "late.png", 1, 1);

        let mut loader = TextureLoader::init(None).unwrap();
        loader.shutdown();
        loader.shutdown();

        assert!(!loader.is_open());
        assert!(matches!(loader.load(&path), Err(TextureError::SubsystemClosed)));
    }
}
