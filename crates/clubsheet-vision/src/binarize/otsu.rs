// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Otsu global binarization — variance-maximizing histogram search. The
// fallback path when lighting is even enough for a single threshold.

use clubsheet_core::error::Result;
use tracing::{debug, instrument};

use crate::pixel::PixelBuffer;

/// Binarize with a single global threshold chosen by Otsu's method.
///
/// Pixels strictly above the threshold become background (255), all others
/// become ink (0). A uniform image selects threshold 0, so all-black input
/// stays all-ink and all-white input stays all-background.
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn otsu_binarize(buffer: PixelBuffer) -> Result<PixelBuffer> {
    buffer.require_single_channel("Otsu binarization")?;

    let threshold = otsu_threshold(&buffer);
    debug!(threshold, "Otsu threshold computed");

    let mut out = buffer;
    for sample in out.samples_mut() {
        *sample = if *sample > threshold { 255 } else { 0 };
    }
    Ok(out)
}

/// Find the threshold maximizing between-class variance.
///
/// Scans the 256-bin histogram left to right, keeping the first threshold
/// that attains the maximum (strictly-greater comparison). Thresholds with
/// an empty background class are skipped and the scan stops once the
/// foreground class empties, so no weight is ever divided by zero.
pub fn otsu_threshold(buffer: &PixelBuffer) -> u8 {
    let mut histogram = [0u64; 256];
    for &sample in buffer.samples() {
        histogram[sample as usize] += 1;
    }

    let total_pixels = buffer.width() as u64 * buffer.height() as u64;

    let mut sum_total: f64 = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_total += i as f64 * count as f64;
    }

    let mut sum_background: f64 = 0.0;
    let mut weight_background: u64 = 0;
    let mut max_variance: f64 = 0.0;
    let mut best_threshold: u8 = 0;

    for (t, &count) in histogram.iter().enumerate() {
        weight_background += count;
        if weight_background == 0 {
            continue;
        }
        let weight_foreground = total_pixels - weight_background;
        if weight_foreground == 0 {
            break;
        }

        sum_background += t as f64 * count as f64;
        let mean_background = sum_background / weight_background as f64;
        let mean_foreground = (sum_total - sum_background) / weight_foreground as f64;

        let between_variance = weight_background as f64
            * weight_foreground as f64
            * (mean_background - mean_foreground).powi(2);

        if between_variance > max_variance {
            max_variance = between_variance;
            best_threshold = t as u8;
        }
    }

    best_threshold
}
