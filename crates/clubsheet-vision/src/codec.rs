// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Codec boundary — the only place the pipeline touches encoded image
// formats. Keeps the pixel algorithms portable and testable against raw
// PixelBuffer fixtures.

use std::io::Cursor;

use clubsheet_core::error::{ClubsheetError, Result};
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use tracing::{debug, instrument};

use crate::pixel::PixelBuffer;

/// Decode camera/gallery bytes (JPEG, PNG, ...) into a `PixelBuffer`.
///
/// The channel count is preserved as far as the source format allows:
/// grayscale sources become 1-channel, alpha-carrying sources 4-channel,
/// everything else 3-channel RGB.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode(data: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(data)
        .map_err(|err| ClubsheetError::Decode(format!("failed to decode image: {err}")))?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(ClubsheetError::Dimension { width, height });
    }
    debug!(width, height, color = ?img.color(), "Image decoded");

    let color = img.color();
    if !color.has_color() {
        PixelBuffer::from_raw(width, height, 1, img.to_luma8().into_raw())
    } else if color.has_alpha() {
        PixelBuffer::from_raw(width, height, 4, img.to_rgba8().into_raw())
    } else {
        PixelBuffer::from_raw(width, height, 3, img.to_rgb8().into_raw())
    }
}

/// Encode a `PixelBuffer` as PNG — lossless, so the OCR service receives
/// the exact binarized pixels the pipeline produced.
#[instrument(skip(buffer), fields(
    width = buffer.width(),
    height = buffer.height(),
    channels = buffer.channels(),
))]
pub fn encode(buffer: PixelBuffer) -> Result<Vec<u8>> {
    let (w, h) = (buffer.width(), buffer.height());
    let channels = buffer.channels();
    let samples = buffer.into_samples();

    let dynamic = match channels {
        1 => GrayImage::from_raw(w, h, samples).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(w, h, samples).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, samples).map(DynamicImage::ImageRgba8),
        _ => None,
    }
    .ok_or_else(|| ClubsheetError::Image("buffer/raster size mismatch".into()))?;

    let mut bytes = Vec::new();
    dynamic
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|err| ClubsheetError::Image(format!("PNG encoding failed: {err}")))?;

    debug!(encoded_len = bytes.len(), "PNG encoded");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ClubsheetError::Decode(_)));
    }

    #[test]
    fn empty_input_fails_to_decode() {
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn grayscale_png_round_trips_exactly() {
        let samples: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        let buf = PixelBuffer::from_raw(8, 8, 1, samples.clone()).unwrap();

        let png = encode(buf).unwrap();
        let back = decode(&png).unwrap();

        assert_eq!(back.channels(), 1);
        assert_eq!((back.width(), back.height()), (8, 8));
        assert_eq!(back.samples(), samples.as_slice());
    }

    #[test]
    fn rgb_png_round_trips_exactly() {
        let samples: Vec<u8> = (0..48).map(|i| (i * 5) as u8).collect();
        let buf = PixelBuffer::from_raw(4, 4, 3, samples.clone()).unwrap();

        let png = encode(buf).unwrap();
        let back = decode(&png).unwrap();

        assert_eq!(back.channels(), 3);
        assert_eq!(back.samples(), samples.as_slice());
    }

    #[test]
    fn binarized_pixels_survive_encoding_untouched() {
        // The OCR contract: no resampling or quality loss at this stage.
        let mut buf = PixelBuffer::new(16, 16, 1).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                buf.set_intensity(x, y, if (x + y) % 2 == 0 { 0 } else { 255 });
            }
        }
        let expected = buf.clone();

        let png = encode(buf).unwrap();
        let back = decode(&png).unwrap();
        assert_eq!(back, expected);
    }
}
