// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Clubsheet club manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Unique identifier for a club member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TournamentId(pub Uuid);

impl TournamentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TournamentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TournamentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered club member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Current handicap, maintained by the ranking module.
    pub handicap: i32,
    pub joined_at: DateTime<Utc>,
    pub active: bool,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            handicap: 0,
            joined_at: Utc::now(),
            active: true,
        }
    }
}

/// A club tournament on a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub held_at: DateTime<Utc>,
    /// Number of rounds played per member.
    pub rounds: u32,
}

/// A single member's scores within a tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub tournament: TournamentId,
    pub member: MemberId,
    pub scores: Vec<u32>,
    pub recorded_at: DateTime<Utc>,
}

/// Where a scoreboard image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanSource {
    /// Captured with the device camera.
    Camera,
    /// Picked from the photo library.
    Gallery,
}

/// Lifecycle states of a scoreboard scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    /// Photo captured, preprocessing not yet run.
    Pending,
    /// The preprocessing pipeline is running.
    Preprocessing,
    /// Preprocessed bytes handed to the OCR service, awaiting a response.
    AwaitingOcr,
    /// Rows recognized — scores are ready for review/storage.
    Recognized,
    /// Preprocessing or recognition failed; the user can retry or enter
    /// scores manually.
    Failed,
}

/// A scoreboard-photo scan moving through the recognition workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanJob {
    pub id: Uuid,
    pub tournament: TournamentId,
    pub source: ScanSource,
    pub status: ScanStatus,
    /// SHA-256 hash of the original photo bytes.
    pub photo_hash: String,
    pub captured_at: DateTime<Utc>,
    pub error_message: Option<String>,
}

impl ScanJob {
    pub fn new(tournament: TournamentId, source: ScanSource, photo: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(photo);
        let photo_hash = hex::encode(hasher.finalize());
        Self {
            id: Uuid::new_v4(),
            tournament,
            source,
            status: ScanStatus::Pending,
            photo_hash,
            captured_at: Utc::now(),
            error_message: None,
        }
    }
}

/// One recognized scoreboard row returned by the OCR service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedRow {
    /// Player name as written on the sheet (may need matching to a member).
    pub player_name: String,
    /// Scores read left to right across the row.
    pub scores: Vec<u32>,
    /// Recognition confidence in [0.0, 1.0].
    pub confidence: f32,
}

/// Orientation of a photographed image, derived from EXIF metadata.
///
/// Consumed once by the geometry stage of the scan pipeline and then
/// discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
    FlipHorizontal,
    FlipVertical,
}

impl Orientation {
    /// Map a raw EXIF orientation tag value (1..=8) to an `Orientation`.
    ///
    /// Unknown or out-of-range values (including the transpose/transverse
    /// cases 5 and 7, which phone cameras do not emit) fall back to
    /// `Normal`. Missing or corrupt metadata is not an error.
    pub fn from_exif(value: u16) -> Self {
        match value {
            1 => Self::Normal,
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            6 => Self::Rotate90,
            8 => Self::Rotate270,
            _ => Self::Normal,
        }
    }

    /// Whether this orientation swaps width and height.
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}
