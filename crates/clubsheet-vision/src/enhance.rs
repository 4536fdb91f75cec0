// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contrast/sharpen stage — linear post-enhancement strengthening stroke
// edges before handoff to the OCR service.

use clubsheet_core::error::Result;
use tracing::instrument;

use crate::pixel::PixelBuffer;

/// Sharpen parameters: a stronger linear boost standing in for an
/// unsharp-mask convolution. Kept as the linear formula for pixel-exact
/// parity with the original scan pipeline.
const SHARPEN_CONTRAST: f32 = 1.5;
const SHARPEN_BRIGHTNESS: f32 = -40.0;

/// Linear contrast/brightness transform, applied identically to every
/// channel: `clamp(intensity * contrast + brightness, 0, 255)`.
///
/// Channel-uniform scaling never introduces new hue.
#[instrument(skip(buffer), fields(contrast, brightness))]
pub fn enhance(buffer: PixelBuffer, contrast: f32, brightness: f32) -> Result<PixelBuffer> {
    let mut out = buffer;
    for sample in out.samples_mut() {
        let value = *sample as f32 * contrast + brightness;
        *sample = value.clamp(0.0, 255.0) as u8;
    }
    Ok(out)
}

/// Sharpen via a strong linear boost (contrast 1.5, brightness -40).
///
/// Strictly increases local contrast at edges; mid-tones spread apart while
/// the extremes saturate.
#[instrument(skip(buffer))]
pub fn sharpen(buffer: PixelBuffer) -> Result<PixelBuffer> {
    enhance(buffer, SHARPEN_CONTRAST, SHARPEN_BRIGHTNESS)
}
