// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscale stage — channel reduction removing color/ink-color variance
// before thresholding.

use clubsheet_core::error::Result;
use tracing::{debug, instrument};

use crate::pixel::PixelBuffer;

/// Reduce a 3/4-channel buffer to a single luma channel.
///
/// Uses the BT.601 weights `0.299 R + 0.587 G + 0.114 B`, rounded to the
/// nearest integer. Downstream threshold values depend on this weighting, so
/// it must stay consistent. Alpha is ignored. Single-channel input is the
/// identity.
#[instrument(skip(buffer), fields(channels = buffer.channels()))]
pub fn to_grayscale(buffer: PixelBuffer) -> Result<PixelBuffer> {
    if buffer.channels() == 1 {
        debug!("Input already single-channel");
        return Ok(buffer);
    }

    let (w, h) = (buffer.width(), buffer.height());
    let stride = buffer.channels() as usize;
    let mut out = Vec::with_capacity(w as usize * h as usize);

    for pixel in buffer.samples().chunks_exact(stride) {
        let gray = 0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32;
        out.push(gray.round().clamp(0.0, 255.0) as u8);
    }

    PixelBuffer::from_raw(w, h, 1, out)
}
