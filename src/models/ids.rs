//! Strongly-typed ID wrappers for ledger entities
//!
//! Ids are integer millisecond timestamps taken when the entity is created,
//! which keeps the persisted documents compatible with the numeric ids the
//! stores have always used. Newtype wrappers keep record ids and budget ids
//! from being mixed up at compile time.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap an existing raw id
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the underlying integer
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Allocate a fresh id from the current clock
            ///
            /// `last` is the largest id already in use. When the clock has not
            /// moved past it, the next integer is used instead.
            pub fn next_after(last: Option<Self>) -> Self {
                let now = Utc::now().timestamp_millis();
                match last {
                    Some(last) if last.0 >= now => Self(last.0 + 1),
                    _ => Self(now),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(RecordId, "rec-");
define_id!(BudgetId, "bud-");
