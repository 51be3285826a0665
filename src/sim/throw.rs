//! Radius update rule for a single dart
//!
//! A dart at distance d from the center of a disk of radius r:
//! - d < r: the disk shrinks to radius d (the half-chord through the hit point
//!   perpendicular to the radius, seen from the tangent point)
//! - hit exactly at the center: the disk keeps its radius
//! - d == r: border hit, the disk collapses to radius 0
//! - d > r: miss, the game is over

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Where a dart landed relative to the current disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// Exactly (0, 0)
    Bullseye,
    /// Strictly inside the disk, off center
    Interior,
    /// Exactly on the boundary circle
    Border,
    /// Strictly outside the disk
    Outside,
}

impl Region {
    /// Outcome of a dart at (x, y) already classified against radius `r`
    pub fn outcome(self, x: f64, y: f64, r: f64) -> ThrowOutcome {
        match self {
            Region::Bullseye => ThrowOutcome::Landed { radius: r },
            Region::Interior => ThrowOutcome::Landed {
                radius: DVec2::new(x, y).length(),
            },
            Region::Border => ThrowOutcome::Landed { radius: 0.0 },
            Region::Outside => ThrowOutcome::Missed,
        }
    }
}

/// Result of applying one dart to the disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// Dart hit the disk; play continues with the new radius
    Landed { radius: f64 },
    /// Dart fell outside the disk
    Missed,
}

impl ThrowOutcome {
    /// New radius, if the game continues
    #[inline]
    pub fn radius(&self) -> Option<f64> {
        match *self {
            ThrowOutcome::Landed { radius } => Some(radius),
            ThrowOutcome::Missed => None,
        }
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, ThrowOutcome::Missed)
    }
}

/// Classify a dart at (x, y) against a disk of radius `r` centered on the origin.
///
/// Comparisons are made on squared distances so that a dart placed exactly on
/// an axis at distance `r` is a border hit.
pub fn classify(x: f64, y: f64, r: f64) -> Region {
    let d2 = DVec2::new(x, y).length_squared();
    let r2 = r * r;

    if d2 < r2 {
        if x == 0.0 && y == 0.0 {
            Region::Bullseye
        } else {
            Region::Interior
        }
    } else if d2 == r2 {
        Region::Border
    } else {
        Region::Outside
    }
}

/// Apply a dart at (x, y) to a disk of radius `r` (`r >= 0`).
///
/// Total over all inputs: returns the unchanged radius on a bullseye, the hit
/// distance on an interior hit, zero on a border hit and `Missed` otherwise.
pub fn update_radius(x: f64, y: f64, r: f64) -> ThrowOutcome {
    classify(x, y, r).outcome(x, y, r)
}
