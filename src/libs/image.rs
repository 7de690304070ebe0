//! Attachment image downscaling ahead of upload.
//!
//! Call sheets, receipts and set photos are attached to a timesheet day as
//! images straight off a phone camera. Before upload they are downscaled to a
//! bounded longest side and re-encoded as JPEG so a day's attachments stay a
//! few hundred kilobytes instead of tens of megabytes.
//!
//! Resizing goes through a two-tier strategy: a SIMD-accelerated fast path
//! when the decoded pixel layout supports it, and the generic `image` crate
//! resampling otherwise or whenever the fast path fails. The whole pipeline
//! absorbs its own failures: a file that cannot be decoded, resized or
//! re-encoded is passed through unchanged, so the upload path never breaks on
//! a bad image. Non-image files are returned untouched.

use fast_image_resize::images::Image as SimdImage;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, GenericImageView, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use std::time::SystemTime;
use thiserror::Error;

/// Default longest-side cap for uploaded attachments.
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;

/// Default JPEG quality (0-100) for re-encoded attachments.
pub const DEFAULT_QUALITY: u8 = 60;

/// Media type of every re-encoded attachment.
pub const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

/// A file-shaped blob carried through the attachment pipeline.
#[derive(Debug, Clone)]
pub struct MediaFile {
    /// Original file name, preserved across re-encoding.
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub content_type: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
    /// Last-modified timestamp; refreshed when the file is re-encoded.
    pub modified: SystemTime,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
            modified: SystemTime::now(),
        }
    }

    /// Whether the declared media type marks this file as an image.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Guesses a media type from the file extension.
///
/// Unknown extensions map to `application/octet-stream`, which the
/// downscaler passes through untouched.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_ascii_lowercase()).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Failure while producing the compressed variant.
///
/// Never escapes this module: every failure resolves to a pass-through of
/// the original file.
#[derive(Debug, Error)]
enum DownscaleError {
    #[error("image codec failed: {0}")]
    Codec(#[from] image::ImageError),
    #[error("resize failed: {0}")]
    Resize(String),
}

/// How a particular image gets resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResizePath {
    /// SIMD convolution via `fast_image_resize`.
    Simd,
    /// Generic resampling via `image::imageops`.
    ImageOps,
}

/// Probes which resize path can handle the decoded image.
///
/// The SIMD resizer operates on fixed 8-bit pixel layouts; 16-bit and
/// float-sample images go straight to the generic path.
fn select_path(decoded: &DynamicImage) -> ResizePath {
    match decoded {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => ResizePath::Simd,
        _ => ResizePath::ImageOps,
    }
}

/// Downscales an image file to `max_dimension` on its longest side and
/// re-encodes it as JPEG at `quality`.
///
/// Non-image inputs are returned unchanged. Images already within bounds are
/// not upscaled but are still re-encoded. Any failure in decode, resize or
/// encode yields the original file back; the worst case is a no-op, never an
/// error. The pixel work runs on a blocking worker and keeps running to
/// completion even if the returned future is dropped.
pub async fn downscale(file: MediaFile, max_dimension: u32, quality: u8) -> MediaFile {
    if !file.is_image() {
        return file;
    }

    let original = file.clone();
    let worker = tokio::task::spawn_blocking(move || downscale_blocking(file, max_dimension, quality));

    match worker.await {
        Ok(Ok(compressed)) => compressed,
        Ok(Err(err)) => {
            tracing::debug!("attachment kept as-is: {}", err);
            original
        }
        Err(_) => original,
    }
}

fn downscale_blocking(file: MediaFile, max_dimension: u32, quality: u8) -> Result<MediaFile, DownscaleError> {
    let decoded = image::load_from_memory(&file.data)?;
    let (width, height) = decoded.dimensions();
    let (target_width, target_height) = target_dimensions(width, height, max_dimension);

    let resized = if (target_width, target_height) == (width, height) {
        decoded
    } else {
        match select_path(&decoded) {
            ResizePath::Simd => resize_simd(&decoded, target_width, target_height)
                .unwrap_or_else(|_| resize_generic(&decoded, target_width, target_height)),
            ResizePath::ImageOps => resize_generic(&decoded, target_width, target_height),
        }
    };

    let mut encoded = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut encoded, quality);
    resized.to_rgb8().write_with_encoder(encoder)?;

    Ok(MediaFile {
        name: file.name,
        content_type: OUTPUT_CONTENT_TYPE.to_string(),
        data: encoded.into_inner(),
        modified: SystemTime::now(),
    })
}

/// Aspect-preserving target dimensions capped at `max_dimension` on the
/// longer side. Images already within bounds keep their dimensions.
fn target_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width >= height {
        if width <= max_dimension {
            return (width, height);
        }
        let scaled = (height as f64 * max_dimension as f64 / width as f64).round().max(1.0) as u32;
        (max_dimension, scaled)
    } else {
        if height <= max_dimension {
            return (width, height);
        }
        let scaled = (width as f64 * max_dimension as f64 / height as f64).round().max(1.0) as u32;
        (scaled, max_dimension)
    }
}

fn resize_simd(decoded: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage, DownscaleError> {
    let rgba = decoded.to_rgba8();
    let (src_width, src_height) = rgba.dimensions();

    let source = SimdImage::from_vec_u8(src_width, src_height, rgba.into_raw(), PixelType::U8x4)
        .map_err(|e| DownscaleError::Resize(e.to_string()))?;
    let mut target = SimdImage::new(width, height, PixelType::U8x4);

    let mut resizer = Resizer::new();
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer
        .resize(&source, &mut target, &options)
        .map_err(|e| DownscaleError::Resize(e.to_string()))?;

    let buffer = RgbaImage::from_raw(width, height, target.into_vec())
        .ok_or_else(|| DownscaleError::Resize("resized buffer has unexpected length".to_string()))?;
    Ok(DynamicImage::ImageRgba8(buffer))
}

fn resize_generic(decoded: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    decoded.resize_exact(width, height, imageops::FilterType::Lanczos3)
}
