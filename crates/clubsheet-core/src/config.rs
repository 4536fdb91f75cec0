// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application and scan-pipeline configuration.

use serde::{Deserialize, Serialize};

/// Call-time parameters for the scoreboard preprocessing pipeline.
///
/// These are not persisted by the pipeline itself — the caller hands a config
/// to each invocation. The defaults are the values tuned against handwritten
/// scoreboard photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Upper bound for the long edge of the image after resizing (pixels).
    pub max_dimension: u32,
    /// Side length of the local-mean window for adaptive binarization.
    pub block_size: u32,
    /// Subtracted from the local mean before classifying a pixel as ink.
    pub offset: i32,
    /// Linear contrast factor applied after binarization.
    pub contrast: f32,
    /// Brightness added alongside the contrast factor.
    pub brightness: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            max_dimension: 2048,
            block_size: 25,
            offset: 10,
            contrast: 1.4,
            brightness: 10.0,
        }
    }
}

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preprocessing parameters used when scanning scoreboards.
    pub preprocess: PreprocessConfig,
    /// Whether recognized scores are held for review before being stored.
    pub review_before_save: bool,
    /// Keep the original scoreboard photo alongside the parsed scores.
    pub keep_original_photos: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preprocess: PreprocessConfig::default(),
            review_before_save: true,
            keep_original_photos: true,
        }
    }
}
