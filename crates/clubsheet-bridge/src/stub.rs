// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are
// unavailable. Every trait method returns `PlatformUnavailable`.

use clubsheet_core::error::{ClubsheetError, Result};
use clubsheet_core::types::RecognizedRow;

use crate::traits::*;

/// No-op bridge returned on non-mobile platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeCamera for StubBridge {
    fn capture_photo(&self) -> Result<Option<CapturedPhoto>> {
        tracing::warn!("NativeCamera::capture_photo called on stub bridge");
        Err(ClubsheetError::PlatformUnavailable)
    }
}

impl NativePhotoLibrary for StubBridge {
    fn pick_photo(&self) -> Result<Option<CapturedPhoto>> {
        tracing::warn!("NativePhotoLibrary::pick_photo called on stub bridge");
        Err(ClubsheetError::PlatformUnavailable)
    }
}

impl NativeShare for StubBridge {
    fn share_file(&self, _path: &str, _mime_type: &str) -> Result<()> {
        tracing::warn!("NativeShare::share_file called on stub bridge");
        Err(ClubsheetError::PlatformUnavailable)
    }

    fn share_text(&self, _text: &str) -> Result<()> {
        Err(ClubsheetError::PlatformUnavailable)
    }
}

impl ScoreboardOcr for StubBridge {
    fn recognize_rows(&self, _preprocessed_png: &[u8]) -> Result<Vec<RecognizedRow>> {
        tracing::warn!("ScoreboardOcr::recognize_rows called on stub bridge");
        Err(ClubsheetError::PlatformUnavailable)
    }
}
