//! Operation result codes.
//!
//! Every mutating histogram operation reports a [`Status`] and persists it as
//! the histogram's last status. Saturation is a reportable, recoverable
//! condition: nothing here panics, and rejected operations leave the
//! histogram unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result code of a mutating histogram operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    /// Operation succeeded without reaching a saturation bound.
    #[default]
    Ok,
    /// Operation succeeded and the affected bucket now sits exactly at a
    /// saturation bound. A one-shot notification, not sticky.
    Full,
    /// Rejected: the target bucket was already at its positive ceiling.
    Overflow,
    /// Rejected: the target bucket was already at its negative floor.
    Underflow,
    /// Rejected: the histogram has no buckets, or the index is out of range.
    LengthError,
}

impl Status {
    /// `true` for the two success codes ([`Ok`](Status::Ok) and
    /// [`Full`](Status::Full)).
    #[inline]
    pub fn is_ok(self) -> bool {
        matches!(self, Status::Ok | Status::Full)
    }

    /// `true` when the operation was rejected and state was left unchanged.
    #[inline]
    pub fn is_rejected(self) -> bool {
        !self.is_ok()
    }

    /// Bridge into `?`-style error handling.
    ///
    /// Success codes map to a [`Saturation`] outcome, rejection codes to a
    /// [`StatusError`].
    pub fn as_result(self) -> Result<Saturation, StatusError> {
        match self {
            Status::Ok => Ok(Saturation::Unsaturated),
            Status::Full => Ok(Saturation::JustFull),
            Status::Overflow => Err(StatusError::Overflow),
            Status::Underflow => Err(StatusError::Underflow),
            Status::LengthError => Err(StatusError::LengthError),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "ok",
            Status::Full => "full",
            Status::Overflow => "overflow",
            Status::Underflow => "underflow",
            Status::LengthError => "length error",
        };
        f.write_str(name)
    }
}

/// Saturation outcome of a successful operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saturation {
    /// The affected bucket has headroom left.
    Unsaturated,
    /// The affected bucket just reached a saturation bound.
    JustFull,
}

/// Rejection codes of [`Status`], as a proper error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("bucket counter is already at its positive saturation ceiling")]
    Overflow,
    #[error("bucket counter is already at its negative saturation floor")]
    Underflow,
    #[error("histogram has no buckets or the index is out of range")]
    LengthError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_rejection_split() {
        assert!(Status::Ok.is_ok());
        assert!(Status::Full.is_ok());
        assert!(Status::Overflow.is_rejected());
        assert!(Status::Underflow.is_rejected());
        assert!(Status::LengthError.is_rejected());
    }

    #[test]
    fn as_result_mapping() {
        assert_eq!(Status::Ok.as_result(), Ok(Saturation::Unsaturated));
        assert_eq!(Status::Full.as_result(), Ok(Saturation::JustFull));
        assert_eq!(Status::Overflow.as_result(), Err(StatusError::Overflow));
        assert_eq!(Status::Underflow.as_result(), Err(StatusError::Underflow));
        assert_eq!(Status::LengthError.as_result(), Err(StatusError::LengthError));
    }

    #[test]
    fn default_is_ok() {
        assert_eq!(Status::default(), Status::Ok);
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Status::Overflow).unwrap();
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Status::Overflow);
    }

    #[test]
    fn display_names() {
        assert_eq!(Status::Ok.to_string(), "ok");
        assert_eq!(Status::LengthError.to_string(), "length error");
    }
}
