//! Logo loading for the report.
//!
//! Every PNG flavour is accepted: palette and sub-byte images are expanded,
//! 16-bit samples are cut to 8 bits and interlaced images come out
//! deinterlaced. Pixels are split into a colour plane and an optional alpha
//! plane, both deflated for a PDF `FlateDecode` image stream.

use crate::errors::{AppError, AppResult};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use png::{ColorType, Decoder, Limits, Transformations};
use std::io::{Cursor, Write};
use std::path::Path;

/// Largest accepted logo side, in pixels.
pub const MAX_LOGO_SIDE: u32 = 4096;

/// Working memory the decoder may use besides the output buffer.
const DECODER_MEMORY: usize = 32 * 1024 * 1024;

/// Decoded logo ready to be embedded in a PDF.
#[derive(Debug, Clone)]
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    pub grayscale: bool,
    /// zlib-compressed colour samples (1 or 3 per pixel)
    pub color: Vec<u8>,
    /// zlib-compressed alpha samples, when the image carries transparency
    pub alpha: Option<Vec<u8>>,
}

fn asset_err<T: std::fmt::Display>(path: &Path, msg: T) -> AppError {
    AppError::Asset(format!("{}: {}", path.display(), msg))
}

/// Read and decode the logo at `path`.
pub fn load_logo(path: &Path) -> AppResult<LogoImage> {
    if !path.is_file() {
        return Err(asset_err(path, "logo file not found"));
    }

    let bytes = std::fs::read(path)?;
    decode_png(&bytes).map_err(|msg| asset_err(path, msg))
}

/// Decode PNG bytes; errors are plain messages, wrapped by the caller.
pub fn decode_png(bytes: &[u8]) -> Result<LogoImage, String> {
    let mut limits = Limits::default();
    limits.bytes = DECODER_MEMORY;

    let mut decoder = Decoder::new_with_limits(Cursor::new(bytes), limits);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("not a readable PNG file: {}", e))?;

    // the output buffer is sized from the header, so check it first
    let (width, height) = reader.info().size();
    if width == 0 || height == 0 {
        return Err("empty image".into());
    }
    if width > MAX_LOGO_SIDE || height > MAX_LOGO_SIDE {
        return Err(format!(
            "logo is {}x{} pixels, at most {} per side is supported",
            width, height, MAX_LOGO_SIDE
        ));
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("corrupt image data: {}", e))?;
    let pixels = &buf[..frame.buffer_size()];

    let (channels, has_alpha) = match frame.color_type {
        ColorType::Grayscale => (1, false),
        ColorType::GrayscaleAlpha => (2, true),
        ColorType::Rgb => (3, false),
        ColorType::Rgba => (4, true),
        ColorType::Indexed => return Err("palette image was not expanded".into()),
    };
    let color_channels = if has_alpha { channels - 1 } else { channels };

    let mut color = Vec::with_capacity(pixels.len());
    let mut alpha = Vec::new();
    for px in pixels.chunks_exact(channels) {
        color.extend_from_slice(&px[..color_channels]);
        if has_alpha {
            alpha.push(px[channels - 1]);
        }
    }

    Ok(LogoImage {
        width,
        height,
        grayscale: color_channels == 1,
        color: deflate(&color)?,
        alpha: if has_alpha { Some(deflate(&alpha)?) } else { None },
    })
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, String> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).map_err(|e| e.to_string())?;
    enc.finish().map_err(|e| e.to_string())
}
