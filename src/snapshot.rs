//! Owned snapshots of accumulated histogram state.
//!
//! A [`Snapshot`] decouples the counts from the borrowed boundary slice so
//! they can be serialized, shipped off-device, and later restored into a
//! histogram constructed over the same boundaries. Counts are widened to
//! `i64` in the snapshot, so one snapshot format covers every counter width.
//!
//! Restore validates shape and range before touching any state: a failed
//! [`restore`](crate::Histogram::restore) leaves the histogram exactly as it
//! was.

use serde::{Deserialize, Serialize};

use crate::counter::Counter;
use crate::histogram::Histogram;

/// Serializable capture of a histogram's accumulated state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Boundary values the counts were accumulated against.
    pub bounds: Vec<f64>,
    /// Raw bucket counts, widened to `i64`.
    pub counts: Vec<i64>,
    /// Total successful add/sub operations.
    pub total: u64,
}

/// Snapshot restore validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot has {got} buckets, histogram has {expected}")]
    BucketCountMismatch { expected: usize, got: usize },

    #[error("snapshot boundaries do not match the histogram's boundaries")]
    BoundaryMismatch,

    #[error("bucket {index} count {value} is outside the counter's saturation range")]
    CountOutOfRange { index: usize, value: i64 },

    #[error("cannot restore into a histogram with no buckets")]
    InertTarget,
}

impl<C: Counter> Histogram<'_, C> {
    /// Capture the current state, or `None` for an inert histogram.
    pub fn snapshot(&self) -> Option<Snapshot> {
        if self.is_inert() {
            return None;
        }
        Some(Snapshot {
            bounds: self.bounds().to_vec(),
            counts: self.counts().iter().map(|c| c.to_i64()).collect(),
            total: self.count(),
        })
    }

    /// Replace the current state with a previously captured snapshot.
    ///
    /// The snapshot must carry the same boundaries and bucket count, and
    /// every count must fit the counter's saturation range. Validation runs
    /// before any mutation, so an `Err` leaves the histogram unchanged.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if self.is_inert() {
            return Err(SnapshotError::InertTarget);
        }
        if snapshot.counts.len() != self.size() {
            return Err(SnapshotError::BucketCountMismatch {
                expected: self.size(),
                got: snapshot.counts.len(),
            });
        }
        if snapshot.bounds != self.bounds() {
            return Err(SnapshotError::BoundaryMismatch);
        }

        let mut decoded = Vec::with_capacity(snapshot.counts.len());
        for (index, &value) in snapshot.counts.iter().enumerate() {
            match C::from_i64(value) {
                Some(count) => decoded.push(count),
                None => return Err(SnapshotError::CountOutOfRange { index, value }),
            }
        }

        self.restore_state(&decoded, snapshot.total);
        Ok(())
    }
}
