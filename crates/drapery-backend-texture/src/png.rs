//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so identical buffers always encode to
//! byte-identical files and therefore identical BLAKE3 hashes.

use std::io::Write;

use drapery_spec::BackendError;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::maps::{GrayscaleBuffer, TextureBuffer};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl BackendError for PngError {
    fn code(&self) -> &'static str {
        match self {
            PngError::Io(_) => "PNG_001",
            PngError::Encoding(_) => "PNG_002",
            PngError::InvalidDimensions(_) => "PNG_003",
        }
    }

    fn category(&self) -> &'static str {
        "png"
    }
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Pixel layout of an encoded map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEncoding {
    /// Single 8-bit channel.
    Gray,
    /// 8-bit RGB.
    Rgb,
    /// 8-bit RGBA; grayscale maps are replicated across RGB with opaque alpha.
    Rgba,
}

impl MapEncoding {
    fn color_type(self) -> ColorType {
        match self {
            MapEncoding::Gray => ColorType::Grayscale,
            MapEncoding::Rgb => ColorType::Rgb,
            MapEncoding::Rgba => ColorType::Rgba,
        }
    }

    fn channels(self) -> usize {
        match self {
            MapEncoding::Gray => 1,
            MapEncoding::Rgb => 3,
            MapEncoding::Rgba => 4,
        }
    }
}

/// Write raw 8-bit pixel bytes to any writer.
pub fn write_raw_to_writer<W: Write>(
    data: &[u8],
    width: u32,
    height: u32,
    encoding: MapEncoding,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if width == 0 || height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "image must be at least 1x1, got {}x{}",
            width, height
        )));
    }

    let expected_size = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(encoding.channels()))
        .ok_or_else(|| {
            PngError::InvalidDimensions(format!("{}x{} is too large", width, height))
        })?;

    if data.len() != expected_size {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} bytes for {}x{} {:?}, got {}",
            expected_size,
            width,
            height,
            encoding,
            data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(encoding.color_type());
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate writes no timestamps or other variable metadata.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;

    Ok(())
}

/// Write a grayscale buffer, either as one channel or replicated to RGB(A).
pub fn write_grayscale_to_writer<W: Write>(
    buffer: &GrayscaleBuffer,
    encoding: MapEncoding,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let data = match encoding {
        MapEncoding::Gray => buffer.to_bytes(),
        MapEncoding::Rgb => buffer.to_texture_buffer().to_rgb8(),
        MapEncoding::Rgba => buffer.to_texture_buffer().to_rgba8(),
    };
    write_raw_to_writer(&data, buffer.width, buffer.height, encoding, writer, config)
}

/// Write a color buffer as RGB or RGBA.
pub fn write_texture_to_writer<W: Write>(
    buffer: &TextureBuffer,
    encoding: MapEncoding,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let data = match encoding {
        MapEncoding::Rgba => buffer.to_rgba8(),
        MapEncoding::Rgb => buffer.to_rgb8(),
        MapEncoding::Gray => {
            return Err(PngError::InvalidDimensions(
                "color buffers cannot be written as single-channel images".to_string(),
            ))
        }
    };
    write_raw_to_writer(&data, buffer.width, buffer.height, encoding, writer, config)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode a grayscale buffer to a Vec<u8> and return it with its hash.
pub fn write_grayscale_to_vec_with_hash(
    buffer: &GrayscaleBuffer,
    encoding: MapEncoding,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_grayscale_to_writer(buffer, encoding, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Encode a color buffer to a Vec<u8> and return it with its hash.
pub fn write_texture_to_vec_with_hash(
    buffer: &TextureBuffer,
    encoding: MapEncoding,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_texture_to_writer(buffer, encoding, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
