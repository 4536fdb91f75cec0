// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometry stage — orientation correction and resize-to-bound. Runs before
// any pixel analysis so the rest of the pipeline sees upright images of a
// bounded size.

use clubsheet_core::error::{ClubsheetError, Result};
use clubsheet_core::types::Orientation;
use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage, RgbaImage};
use tracing::{debug, instrument};

use crate::pixel::PixelBuffer;

/// Apply the orientation transform, then scale uniformly so that the long
/// edge is at most `max_dimension`.
///
/// A buffer already within bound passes through unchanged (behaviorally
/// identical to scaling by 1.0, without the allocation). Resampling uses
/// bilinear interpolation (`FilterType::Triangle`) — this choice is
/// observable in pixel-exact tests.
#[instrument(skip(buffer), fields(
    width = buffer.width(),
    height = buffer.height(),
    ?orientation,
    max_dimension,
))]
pub fn normalize(
    buffer: PixelBuffer,
    orientation: Orientation,
    max_dimension: u32,
) -> Result<PixelBuffer> {
    if max_dimension == 0 {
        return Err(ClubsheetError::Image(
            "max_dimension must be positive".into(),
        ));
    }

    let oriented = reorient(buffer, orientation)?;

    if oriented.long_edge() <= max_dimension {
        debug!("Image already within bound, skipping resize");
        return Ok(oriented);
    }

    let scale = max_dimension as f64 / oriented.long_edge() as f64;
    let new_width = ((oriented.width() as f64 * scale).round() as u32).max(1);
    let new_height = ((oriented.height() as f64 * scale).round() as u32).max(1);
    debug!(new_width, new_height, "Resizing to bound");

    resample(oriented, new_width, new_height)
}

/// Rotate/flip by remapping sample indices. Width and height swap for the
/// quarter-turn cases.
fn reorient(buffer: PixelBuffer, orientation: Orientation) -> Result<PixelBuffer> {
    if orientation == Orientation::Normal {
        return Ok(buffer);
    }

    let (w, h) = (buffer.width(), buffer.height());
    let channels = buffer.channels();
    let (out_w, out_h) = if orientation.swaps_dimensions() {
        (h, w)
    } else {
        (w, h)
    };

    let mut out = vec![0u8; out_w as usize * out_h as usize * channels as usize];
    let stride = channels as usize;

    for y in 0..out_h {
        for x in 0..out_w {
            let (src_x, src_y) = match orientation {
                Orientation::Normal => (x, y),
                Orientation::Rotate90 => (y, h - 1 - x),
                Orientation::Rotate180 => (w - 1 - x, h - 1 - y),
                Orientation::Rotate270 => (w - 1 - y, x),
                Orientation::FlipHorizontal => (w - 1 - x, y),
                Orientation::FlipVertical => (x, h - 1 - y),
            };
            let src = (src_y as usize * w as usize + src_x as usize) * stride;
            let dst = (y as usize * out_w as usize + x as usize) * stride;
            for c in 0..stride {
                out[dst + c] = buffer.samples()[src + c];
            }
        }
    }

    PixelBuffer::from_raw(out_w, out_h, channels, out)
}

/// Bilinear resample via the `image` crate, dispatching on channel count.
fn resample(buffer: PixelBuffer, new_width: u32, new_height: u32) -> Result<PixelBuffer> {
    let (w, h) = (buffer.width(), buffer.height());
    let channels = buffer.channels();
    let samples = buffer.into_samples();

    let resized = match channels {
        1 => {
            let img = GrayImage::from_raw(w, h, samples)
                .ok_or_else(|| ClubsheetError::Image("buffer/raster size mismatch".into()))?;
            imageops::resize(&img, new_width, new_height, FilterType::Triangle).into_raw()
        }
        3 => {
            let img = RgbImage::from_raw(w, h, samples)
                .ok_or_else(|| ClubsheetError::Image("buffer/raster size mismatch".into()))?;
            imageops::resize(&img, new_width, new_height, FilterType::Triangle).into_raw()
        }
        4 => {
            let img = RgbaImage::from_raw(w, h, samples)
                .ok_or_else(|| ClubsheetError::Image("buffer/raster size mismatch".into()))?;
            imageops::resize(&img, new_width, new_height, FilterType::Triangle).into_raw()
        }
        other => {
            return Err(ClubsheetError::Image(format!(
                "unsupported channel count {other} in resample"
            )));
        }
    };

    PixelBuffer::from_raw(new_width, new_height, channels, resized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let samples: Vec<u8> = (0..width as usize * height as usize)
            .map(|i| (i % 251) as u8)
            .collect();
        PixelBuffer::from_raw(width, height, 1, samples).unwrap()
    }

    #[test]
    fn within_bound_passes_through_unchanged() {
        let buf = gradient(100, 60);
        let expected = buf.clone();
        let out = normalize(buf, Orientation::Normal, 2048).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn long_edge_is_bounded_and_aspect_preserved() {
        let buf = gradient(400, 300);
        let out = normalize(buf, Orientation::Normal, 100).unwrap();
        assert_eq!(out.width(), 100);
        assert_eq!(out.height(), 75);
        assert!(out.long_edge() <= 100);
    }

    #[test]
    fn aspect_ratio_rounds_within_one_pixel() {
        // 997x501 scaled to bound 200: exact height would be 100.50...
        let buf = gradient(997, 501);
        let out = normalize(buf, Orientation::Normal, 200).unwrap();
        assert_eq!(out.width(), 200);
        let exact = 501.0 * (200.0 / 997.0);
        assert!((out.height() as f64 - exact).abs() <= 1.0);
    }

    #[test]
    fn quarter_turns_swap_dimensions() {
        let buf = gradient(5, 3);
        let out = normalize(buf, Orientation::Rotate90, 2048).unwrap();
        assert_eq!((out.width(), out.height()), (3, 5));

        let buf = gradient(5, 3);
        let out = normalize(buf, Orientation::Rotate270, 2048).unwrap();
        assert_eq!((out.width(), out.height()), (3, 5));
    }

    #[test]
    fn rotate90_moves_top_left_to_top_right() {
        // 2x1 image [a, b]; a 90° clockwise turn yields a 1x2 column [a; b].
        let buf = PixelBuffer::from_raw(2, 1, 1, vec![10, 20]).unwrap();
        let out = normalize(buf, Orientation::Rotate90, 2048).unwrap();
        assert_eq!((out.width(), out.height()), (1, 2));
        assert_eq!(out.intensity(0, 0), 10);
        assert_eq!(out.intensity(0, 1), 20);
    }

    #[test]
    fn rotate180_reverses_samples() {
        let buf = PixelBuffer::from_raw(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
        let out = normalize(buf, Orientation::Rotate180, 2048).unwrap();
        assert_eq!(out.samples(), &[4, 3, 2, 1]);
    }

    #[test]
    fn flips_mirror_the_expected_axis() {
        let buf = PixelBuffer::from_raw(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
        let out = normalize(buf, Orientation::FlipHorizontal, 2048).unwrap();
        assert_eq!(out.samples(), &[2, 1, 4, 3]);

        let buf = PixelBuffer::from_raw(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
        let out = normalize(buf, Orientation::FlipVertical, 2048).unwrap();
        assert_eq!(out.samples(), &[3, 4, 1, 2]);
    }

    #[test]
    fn rotation_preserves_multi_channel_pixels() {
        // 2x1 RGB: red then blue. Rotating 180° swaps them intact.
        let buf = PixelBuffer::from_raw(2, 1, 3, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let out = normalize(buf, Orientation::Rotate180, 2048).unwrap();
        assert_eq!(out.samples(), &[0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn zero_bound_is_an_error() {
        let buf = gradient(4, 4);
        assert!(normalize(buf, Orientation::Normal, 0).is_err());
    }

    #[test]
    fn tiny_bound_never_collapses_to_zero() {
        let buf = gradient(1000, 2);
        let out = normalize(buf, Orientation::Normal, 10).unwrap();
        assert_eq!(out.width(), 10);
        assert!(out.height() >= 1);
    }
}
