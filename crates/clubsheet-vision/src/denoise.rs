// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Denoise stage — 3x3 median filter. Removes isolated sensor/compression
// noise while keeping stroke edges, which averaging filters would smear.

use clubsheet_core::error::Result;
use tracing::{debug, instrument};

use crate::pixel::PixelBuffer;

/// Replace every interior pixel with the median of its 3x3 neighbourhood.
///
/// The outermost 1-pixel ring is copied unchanged from the input — no
/// reflection or clamping at the edges. This is a deliberate edge-quality
/// trade-off: handwritten strokes never sit on the photo border, and it
/// keeps the kernel loop branch-free.
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn median_filter(buffer: PixelBuffer) -> Result<PixelBuffer> {
    buffer.require_single_channel("median filter")?;

    let (w, h) = (buffer.width(), buffer.height());
    // Too small to have interior pixels; the whole image is border.
    if w < 3 || h < 3 {
        debug!("Image smaller than kernel, returning unchanged");
        return Ok(buffer);
    }

    let mut output = buffer.clone();
    let mut window = [0u8; 9];

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut i = 0;
            for dy in 0..3 {
                for dx in 0..3 {
                    window[i] = buffer.intensity(x + dx - 1, y + dy - 1);
                    i += 1;
                }
            }
            window.sort_unstable();
            output.set_intensity(x, y, window[4]);
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, value: u8) -> PixelBuffer {
        PixelBuffer::from_raw(
            width,
            height,
            1,
            vec![value; width as usize * height as usize],
        )
        .unwrap()
    }

    #[test]
    fn isolated_noise_pixels_are_removed() {
        let mut buf = uniform(7, 7, 128);
        buf.set_intensity(3, 3, 0); // pepper
        buf.set_intensity(5, 3, 255); // salt

        let out = median_filter(buf).unwrap();
        assert_eq!(out.intensity(3, 3), 128);
        assert_eq!(out.intensity(5, 3), 128);
    }

    #[test]
    fn border_ring_is_copied_unchanged() {
        let samples: Vec<u8> = (0..25).map(|i| (i * 10) as u8).collect();
        let buf = PixelBuffer::from_raw(5, 5, 1, samples).unwrap();
        let input = buf.clone();
        let out = median_filter(buf).unwrap();

        for x in 0..5 {
            assert_eq!(out.intensity(x, 0), input.intensity(x, 0));
            assert_eq!(out.intensity(x, 4), input.intensity(x, 4));
        }
        for y in 0..5 {
            assert_eq!(out.intensity(0, y), input.intensity(0, y));
            assert_eq!(out.intensity(4, y), input.intensity(4, y));
        }
    }

    #[test]
    fn interior_takes_fifth_smallest() {
        // 3x3 image: the single interior pixel sees all nine values.
        let buf = PixelBuffer::from_raw(3, 3, 1, vec![9, 1, 8, 2, 7, 3, 6, 4, 5]).unwrap();
        let out = median_filter(buf).unwrap();
        assert_eq!(out.intensity(1, 1), 5);
    }

    #[test]
    fn edges_survive_filtering() {
        // Vertical step edge at x=3 must remain a step edge.
        let mut buf = uniform(8, 8, 0);
        for y in 0..8 {
            for x in 4..8 {
                buf.set_intensity(x, y, 255);
            }
        }
        let out = median_filter(buf).unwrap();
        for y in 1..7 {
            assert_eq!(out.intensity(2, y), 0);
            assert_eq!(out.intensity(5, y), 255);
        }
    }

    #[test]
    fn tiny_images_pass_through() {
        let buf = PixelBuffer::from_raw(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
        let expected = buf.clone();
        assert_eq!(median_filter(buf).unwrap(), expected);
    }

    #[test]
    fn multi_channel_input_is_rejected() {
        let buf = PixelBuffer::new(4, 4, 3).unwrap();
        assert!(median_filter(buf).is_err());
    }
}
