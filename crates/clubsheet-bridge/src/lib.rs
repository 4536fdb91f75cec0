// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// clubsheet-bridge — Native platform bridge abstractions for Clubsheet.
//
// Defines the traits through which the app reaches the camera, photo
// library, share sheet, and the external scoreboard OCR service. The
// mobile shells provide the real implementations; desktop/CI builds get
// the stub.

pub mod stub;
pub mod traits;

pub use stub::StubBridge;
pub use traits::{
    CapturedPhoto, NativeCamera, NativePhotoLibrary, NativeShare, PlatformBridge, ScoreboardOcr,
};

/// The bridge implementation for the current build.
///
/// Mobile platform shells register their own `PlatformBridge`; everything
/// else falls back to the stub so non-native builds and tests keep working.
pub fn platform_bridge() -> Box<dyn PlatformBridge> {
    Box::new(StubBridge)
}
