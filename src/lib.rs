//! freqhist: a fixed-bucket frequency histogram for streaming scalar data.
//!
//! Samples are classified into a small number of ordered buckets defined by
//! ascending boundary values; each bucket counts occurrences with an
//! overflow-safe saturating counter, and probability mass, cumulative
//! distribution, and quantile queries are derived from the accumulated
//! counts. Designed for resource-constrained hosts: the boundary slice is
//! borrowed, the per-bucket counter width is chosen by the caller, and every
//! operation is allocation-free after construction.
//!
//! # Key Types
//!
//! - [`Histogram`] - the classification and counting engine, generic over
//!   the counter width ([`Histogram8`] through [`Histogram64`] aliases)
//! - [`Status`] - per-operation result code; saturation is reported, never
//!   fatal
//! - [`Snapshot`] - serializable capture of accumulated state
//!
//! # Example
//!
//! ```
//! use freqhist::{Histogram16, Status};
//!
//! // Six buckets over five die-face boundaries.
//! let bounds = [1.5, 2.5, 3.5, 4.5, 5.5];
//! let mut hist = Histogram16::new(&bounds);
//!
//! for roll in [1.0, 3.0, 3.0, 6.0, 2.0] {
//!     assert_eq!(hist.add(roll), Status::Ok);
//! }
//!
//! assert_eq!(hist.count(), 5);
//! assert_eq!(hist.bucket(2), 2);          // the two 3.0 rolls
//! assert!((hist.pmf(3.0) - 0.4).abs() < 1e-12);
//! ```
//!
//! # Saturation
//!
//! Bucket counters never wrap: an increment on a bucket at its ceiling (or a
//! decrement at its floor) is rejected with [`Status::Overflow`] /
//! [`Status::Underflow`] and leaves the histogram untouched. The moment a
//! bucket reaches a bound, the operation reports [`Status::Full`] once.
//!
//! # Concurrency
//!
//! Single-threaded by design. All mutation goes through `&mut self`; wrap a
//! histogram in a lock if several execution contexts need to feed it.

pub mod counter;
pub mod histogram;
pub mod snapshot;
pub mod status;

pub use counter::Counter;
pub use histogram::{Histogram, Histogram16, Histogram32, Histogram64, Histogram8};
pub use snapshot::{Snapshot, SnapshotError};
pub use status::{Saturation, Status, StatusError};
