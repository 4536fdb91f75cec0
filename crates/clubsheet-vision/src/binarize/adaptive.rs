// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptive local binarization — the primary path. The threshold follows the
// local neighbourhood mean, so shadows and uneven lighting across a
// photographed scoreboard do not swallow whole regions the way a global
// threshold can.

use clubsheet_core::error::{ClubsheetError, Result};
use tracing::{debug, instrument};

use crate::binarize::integral::IntegralTable;
use crate::pixel::PixelBuffer;

/// Binarize against a per-pixel local-mean threshold.
///
/// For every pixel the mean intensity of the `block_size`-sided window
/// around it (clipped to the image) is computed from a summed-area table in
/// O(1); the pixel becomes ink (0) when it is more than `offset` below that
/// mean, background (255) otherwise.
///
/// With `offset > 0` a window of pure ink re-classifies as background — the
/// literal consequence of the local-mean formula, relevant only to images
/// with ink regions wider than `block_size`.
#[instrument(skip(buffer), fields(
    width = buffer.width(),
    height = buffer.height(),
    block_size,
    offset,
))]
pub fn adaptive_threshold(
    buffer: PixelBuffer,
    block_size: u32,
    offset: i32,
) -> Result<PixelBuffer> {
    buffer.require_single_channel("adaptive binarization")?;
    if block_size == 0 {
        return Err(ClubsheetError::Image(
            "adaptive block_size must be positive".into(),
        ));
    }

    let integral = IntegralTable::build(&buffer)?;
    let half = block_size / 2;
    let (w, h) = (buffer.width(), buffer.height());

    let mut out = buffer;
    for y in 0..h {
        for x in 0..w {
            let local_mean = integral.window_mean(x, y, half);
            let value = out.intensity(x, y) as i64;
            let binary = if value < local_mean - offset as i64 {
                0
            } else {
                255
            };
            out.set_intensity(x, y, binary);
        }
    }

    debug!("Adaptive binarization complete");
    Ok(out)
}
