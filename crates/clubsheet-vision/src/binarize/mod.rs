// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binarization — two interchangeable algorithms producing strictly
// two-valued output (0 = ink, 255 = background), an invariant the
// downstream stages and the OCR service rely on.

pub mod adaptive;
pub mod integral;
pub mod otsu;

use clubsheet_core::error::Result;
use serde::{Deserialize, Serialize};

use crate::pixel::PixelBuffer;

pub use adaptive::adaptive_threshold;
pub use integral::IntegralTable;
pub use otsu::{otsu_binarize, otsu_threshold};

/// Which binarization algorithm the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinarizeMethod {
    /// Per-pixel local-mean threshold — robust to uneven lighting, the
    /// default for scoreboard photos.
    Adaptive { block_size: u32, offset: i32 },
    /// Single global Otsu threshold — fallback for evenly lit sheets.
    Otsu,
}

impl Default for BinarizeMethod {
    fn default() -> Self {
        Self::Adaptive {
            block_size: 25,
            offset: 10,
        }
    }
}

/// Run the selected binarization algorithm.
pub fn binarize(buffer: PixelBuffer, method: BinarizeMethod) -> Result<PixelBuffer> {
    match method {
        BinarizeMethod::Adaptive { block_size, offset } => {
            adaptive_threshold(buffer, block_size, offset)
        }
        BinarizeMethod::Otsu => otsu_binarize(buffer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_method_is_adaptive_with_tuned_parameters() {
        assert_eq!(
            BinarizeMethod::default(),
            BinarizeMethod::Adaptive {
                block_size: 25,
                offset: 10
            }
        );
    }

    #[test]
    fn both_methods_produce_binary_output() {
        let samples: Vec<u8> = (0..64).map(|i| (i * 13 % 256) as u8).collect();
        for method in [BinarizeMethod::default(), BinarizeMethod::Otsu] {
            let buf = PixelBuffer::from_raw(8, 8, 1, samples.clone()).unwrap();
            let out = binarize(buf, method).unwrap();
            assert!(out.samples().iter().all(|&s| s == 0 || s == 255));
        }
    }
}
