// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// clubsheet-vision — Scoreboard photo preprocessing for Clubsheet.
//
// Turns an arbitrary photographed handwritten scoreboard into a clean,
// high-contrast, binarized raster for the OCR service: orientation
// correction and bounding, grayscale reduction, median denoising, adaptive
// (integral-table) or Otsu binarization, and linear contrast/sharpen.

pub mod binarize;
pub mod codec;
pub mod denoise;
pub mod enhance;
pub mod geometry;
pub mod grayscale;
pub mod pixel;
pub mod pipeline;

// Re-export the primary surface so callers can use `clubsheet_vision::preprocess` etc.
pub use binarize::{BinarizeMethod, IntegralTable, adaptive_threshold, otsu_binarize};
pub use pipeline::{ScanPreprocessor, preprocess};
pub use pixel::PixelBuffer;
