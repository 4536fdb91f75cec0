// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scoreboard preprocessing pipeline — decode, orient, bound, grayscale,
// denoise, binarize, enhance, encode. One synchronous pass, no shared
// state between invocations; any stage failure aborts the run with no
// partial output.

use clubsheet_core::config::PreprocessConfig;
use clubsheet_core::error::Result;
use clubsheet_core::types::Orientation;
use tracing::{info, instrument};

use crate::binarize::{self, BinarizeMethod};
use crate::codec;
use crate::denoise;
use crate::enhance;
use crate::geometry;
use crate::grayscale;
use crate::pixel::PixelBuffer;

/// Chainable preprocessing over a working buffer.
///
/// Every stage consumes `self` and returns a new preprocessor, so each
/// intermediate buffer has exactly one owner and is dropped as soon as the
/// next stage replaces it.
///
/// ```ignore
/// let png = ScanPreprocessor::from_bytes(&photo)?
///     .normalize(orientation, 2048)?
///     .grayscale()?
///     .denoise()?
///     .binarize(BinarizeMethod::default())?
///     .encode()?;
/// ```
pub struct ScanPreprocessor {
    buffer: PixelBuffer,
}

impl ScanPreprocessor {
    // -- Construction ---------------------------------------------------------

    /// Decode raw camera/gallery bytes.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let buffer = codec::decode(data)?;
        info!(
            width = buffer.width(),
            height = buffer.height(),
            channels = buffer.channels(),
            "Scoreboard photo decoded"
        );
        Ok(Self { buffer })
    }

    /// Wrap an already-decoded buffer (used by tests and callers that
    /// produce their own fixtures).
    pub fn from_buffer(buffer: PixelBuffer) -> Self {
        Self { buffer }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn as_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    // -- Stages (consume self, return new Self) -------------------------------

    /// Orientation correction + resize so the long edge fits `max_dimension`.
    pub fn normalize(self, orientation: Orientation, max_dimension: u32) -> Result<Self> {
        Ok(Self {
            buffer: geometry::normalize(self.buffer, orientation, max_dimension)?,
        })
    }

    /// Reduce to a single luma channel.
    pub fn grayscale(self) -> Result<Self> {
        Ok(Self {
            buffer: grayscale::to_grayscale(self.buffer)?,
        })
    }

    /// 3x3 median filter.
    pub fn denoise(self) -> Result<Self> {
        Ok(Self {
            buffer: denoise::median_filter(self.buffer)?,
        })
    }

    /// Binarize with the selected algorithm.
    pub fn binarize(self, method: BinarizeMethod) -> Result<Self> {
        Ok(Self {
            buffer: binarize::binarize(self.buffer, method)?,
        })
    }

    /// Linear contrast/brightness boost.
    pub fn enhance(self, contrast: f32, brightness: f32) -> Result<Self> {
        Ok(Self {
            buffer: enhance::enhance(self.buffer, contrast, brightness)?,
        })
    }

    /// Linear sharpen approximation.
    pub fn sharpen(self) -> Result<Self> {
        Ok(Self {
            buffer: enhance::sharpen(self.buffer)?,
        })
    }

    // -- Output ---------------------------------------------------------------

    /// Lossless PNG for the OCR service.
    pub fn encode(self) -> Result<Vec<u8>> {
        codec::encode(self.buffer)
    }
}

/// Run the full preprocessing pipeline on raw photo bytes.
///
/// Geometry → Grayscale → Denoise → Adaptive binarization → Contrast →
/// Sharpen → PNG. A missing orientation hint falls back to `Normal`
/// (missing EXIF metadata is not an error). Returns the lossless-encoded
/// single-channel bytes ready for the OCR service, or the first stage
/// failure with no partial output.
#[instrument(skip(raw, config), fields(raw_len = raw.len()))]
pub fn preprocess(
    raw: &[u8],
    orientation_hint: Option<Orientation>,
    config: &PreprocessConfig,
) -> Result<Vec<u8>> {
    let orientation = orientation_hint.unwrap_or_default();
    info!(?orientation, max_dimension = config.max_dimension, "Preprocessing scoreboard photo");

    let bytes = ScanPreprocessor::from_bytes(raw)?
        .normalize(orientation, config.max_dimension)?
        .grayscale()?
        .denoise()?
        .binarize(BinarizeMethod::Adaptive {
            block_size: config.block_size,
            offset: config.offset,
        })?
        .enhance(config.contrast, config.brightness)?
        .sharpen()?
        .encode()?;

    info!(encoded_len = bytes.len(), "Preprocessing complete");
    Ok(bytes)
}
