//! Pattern subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     Pattern / "/path" / Regex shorthand
//!     → pattern.rs (normalize shorthand, resolve legacy aliases)
//!     → stored unchanged in the registry entry
//!
//! Dispatch:
//!     (FieldPattern, observed FieldValue) per request field
//!     → matcher.rs (wildcard / literal / regex test)
//!     → bool, AND-combined across fields by the dispatcher
//! ```
//!
//! # Design Decisions
//! - Absent field = wildcard (a fully empty pattern matches every request)
//! - Literals compare with strict typed equality, no coercion across types
//! - Regex tests the observed value's string form
//! - A present constraint against an absent observed value never matches
//! - Deterministic and side-effect free; safe with absent values on either side

pub mod matcher;
pub mod pattern;

pub use matcher::{matches, FieldPattern, FieldValue};
pub use pattern::Pattern;
