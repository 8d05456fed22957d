//! Precheck provides precondition checks that raise a descriptive error when violated.
//!
//! Each check is a pure function: it evaluates a predicate against its input and either
//! returns `Ok(())` or raises an [`AssertionViolation`] carrying a formatted message.
//! Checks are meant to guard the entry points of other code:
//!
//! ```
//! use precheck::assert::{in_range, is_not_null};
//! use precheck::AssertionViolation;
//!
//! fn set_volume(level: Option<&u8>) -> Result<(), AssertionViolation> {
//!     is_not_null(level, Some("level"), None)?;
//!     in_range(*level.unwrap(), 0, 100, Some("level"), None)?;
//!     Ok(())
//! }
//!
//! assert!(set_volume(Some(&50)).is_ok());
//! assert_eq!(
//!     set_volume(None).unwrap_err().message(),
//!     "\"level\" cannot be null.",
//! );
//! ```

pub mod assert;
pub mod error;
pub mod format;

pub use crate::error::AssertionViolation;
