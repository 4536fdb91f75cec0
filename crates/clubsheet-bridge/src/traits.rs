// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities and the
// external OCR collaborator. The scan pipeline itself never touches these;
// the surrounding app wires them together.

use clubsheet_core::error::Result;
use clubsheet_core::types::{Orientation, RecognizedRow};

/// Unified bridge that groups all native capabilities.
///
/// Platforms lacking a capability return
/// `ClubsheetError::PlatformUnavailable` from the stub implementation.
pub trait PlatformBridge: NativeCamera + NativePhotoLibrary + NativeShare {
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;
}

/// A photo captured by the device camera, with the orientation hint read
/// from its EXIF metadata by the platform layer.
#[derive(Debug, Clone)]
pub struct CapturedPhoto {
    /// Encoded image bytes (JPEG on every current platform).
    pub data: Vec<u8>,
    /// Orientation derived from EXIF; `Normal` when metadata is missing.
    pub orientation: Orientation,
}

/// Capture scoreboard photos with the device camera.
pub trait NativeCamera {
    /// Launch the system camera and return the captured photo.
    /// Returns Ok(None) if the user cancelled.
    fn capture_photo(&self) -> Result<Option<CapturedPhoto>>;
}

/// Pick scoreboard photos from the device photo library.
pub trait NativePhotoLibrary {
    /// Show the photo picker. Returns the picked photo (with its EXIF
    /// orientation), or None if cancelled.
    fn pick_photo(&self) -> Result<Option<CapturedPhoto>>;
}

/// Share content via the OS share sheet (e.g. tournament result exports).
pub trait NativeShare {
    /// Share a file with other apps via the native share sheet.
    fn share_file(&self, path: &str, mime_type: &str) -> Result<()>;

    /// Share text content (e.g. a result summary).
    fn share_text(&self, text: &str) -> Result<()>;
}

/// The external scoreboard-recognition service.
///
/// Takes the preprocessing pipeline's lossless-encoded bytes and returns
/// the rows it read. How recognition happens is entirely opaque to the
/// app; failures surface as `ClubsheetError::Ocr`.
pub trait ScoreboardOcr {
    fn recognize_rows(&self, preprocessed_png: &[u8]) -> Result<Vec<RecognizedRow>>;
}
