// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PixelBuffer — the addressable 2D sample grid every pipeline stage reads
// and writes. Row-major, top-left origin, 1/3/4 channels.

use clubsheet_core::error::{ClubsheetError, Result};

/// An owned raster of 8-bit samples.
///
/// Each pipeline stage consumes a `PixelBuffer` and returns a new one, so
/// ownership of intermediate buffers moves linearly through the pipeline —
/// no stage retains a reference to a buffer after handing it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    ///
    /// `channels` must be 1 (grayscale), 3 (RGB) or 4 (RGBA), and both
    /// dimensions must be non-zero.
    pub fn new(width: u32, height: u32, channels: u8) -> Result<Self> {
        validate_shape(width, height, channels)?;
        let len = width as usize * height as usize * channels as usize;
        Ok(Self {
            width,
            height,
            channels,
            samples: vec![0; len],
        })
    }

    /// Wrap existing row-major samples.
    ///
    /// Fails if the sample count does not match `width * height * channels`.
    pub fn from_raw(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Result<Self> {
        validate_shape(width, height, channels)?;
        let expected = width as usize * height as usize * channels as usize;
        if samples.len() != expected {
            return Err(ClubsheetError::Image(format!(
                "sample count {} does not match {}x{}x{} ({} expected)",
                samples.len(),
                width,
                height,
                channels,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Length of the long edge, the quantity the geometry stage bounds.
    pub fn long_edge(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Consume the buffer and return the raw samples.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Sample at `(x, y)` in channel `c`. Caller must stay in bounds.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, c: u8) -> u8 {
        let idx = (y as usize * self.width as usize + x as usize) * self.channels as usize
            + c as usize;
        self.samples[idx]
    }

    /// Intensity at `(x, y)` of a single-channel buffer.
    #[inline]
    pub fn intensity(&self, x: u32, y: u32) -> u8 {
        debug_assert_eq!(self.channels, 1, "intensity() is for single-channel buffers");
        self.samples[y as usize * self.width as usize + x as usize]
    }

    /// Set the intensity at `(x, y)` of a single-channel buffer.
    #[inline]
    pub fn set_intensity(&mut self, x: u32, y: u32, value: u8) {
        debug_assert_eq!(self.channels, 1, "set_intensity() is for single-channel buffers");
        self.samples[y as usize * self.width as usize + x as usize] = value;
    }

    /// Ensure the buffer is single-channel, as binarization and denoising
    /// require.
    pub fn require_single_channel(&self, stage: &str) -> Result<()> {
        if self.channels != 1 {
            return Err(ClubsheetError::Image(format!(
                "{stage} requires a single-channel buffer, got {} channels",
                self.channels
            )));
        }
        Ok(())
    }
}

fn validate_shape(width: u32, height: u32, channels: u8) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ClubsheetError::Dimension { width, height });
    }
    if !matches!(channels, 1 | 3 | 4) {
        return Err(ClubsheetError::Image(format!(
            "unsupported channel count {channels} (expected 1, 3 or 4)"
        )));
    }
    Ok(())
}
