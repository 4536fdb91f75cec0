// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Clubsheet.

use thiserror::Error;

/// Top-level error type for all Clubsheet operations.
#[derive(Debug, Error)]
pub enum ClubsheetError {
    // -- Scan pipeline errors --
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("degenerate image dimensions: {width}x{height}")]
    Dimension { width: u32, height: u32 },

    #[error("image processing failed: {0}")]
    Image(String),

    #[error("scoreboard recognition failed: {0}")]
    Ocr(String),

    // -- Club data errors --
    #[error("member not found: {0}")]
    MemberNotFound(String),

    #[error("tournament not found: {0}")]
    TournamentNotFound(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ClubsheetError>;
