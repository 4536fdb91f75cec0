// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for club volunteers entering scores.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity levels drive UI presentation (retry button vs. manual-entry
// fallback).

use crate::error::ClubsheetError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blurry photo, network blip — retaking the photo or retrying will
    /// usually fix it.
    Transient,
    /// User must do something (grant camera permission, pick another photo).
    ActionRequired,
    /// Cannot be fixed by retrying — enter the scores manually instead.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the app should offer a retry button.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `ClubsheetError` into a `HumanError` a club volunteer can act on.
pub fn humanize_error(err: &ClubsheetError) -> HumanError {
    match err {
        ClubsheetError::Decode(_) => HumanError {
            message: "We couldn't read that photo.".into(),
            suggestion: "Take the photo again, or pick a different one from your gallery.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ClubsheetError::Dimension { .. } => HumanError {
            message: "That photo appears to be empty.".into(),
            suggestion: "Take a new photo of the scoreboard and try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ClubsheetError::Image(_) => HumanError {
            message: "Something went wrong while preparing the photo.".into(),
            suggestion: "Try again. If it keeps failing, enter the scores manually.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ClubsheetError::Ocr(_) => HumanError {
            message: "We couldn't read the scores from the photo.".into(),
            suggestion: "Make sure the scoreboard fills the frame and is well lit, then \
                         retake the photo — or enter the scores manually."
                .into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ClubsheetError::MemberNotFound(name) => HumanError {
            message: format!("We don't know a member called \"{name}\"."),
            suggestion: "Check the spelling on the sheet, or add them as a new member first."
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ClubsheetError::TournamentNotFound(_) => HumanError {
            message: "That tournament no longer exists.".into(),
            suggestion: "Go back to the tournament list and pick the right one.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ClubsheetError::Io(_) => HumanError {
            message: "We couldn't read or save a file.".into(),
            suggestion: "Check that your device has free storage space, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ClubsheetError::Serialization(_) => HumanError {
            message: "Some saved club data looks damaged.".into(),
            suggestion: "Restart the app. If this keeps happening, restore from a backup.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        ClubsheetError::Bridge(_) => HumanError {
            message: "The camera or photo library didn't respond.".into(),
            suggestion: "Check the app's camera and photo permissions in your device settings."
                .into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        ClubsheetError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on this device.".into(),
            suggestion: "Use the mobile app to photograph scoreboards.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
