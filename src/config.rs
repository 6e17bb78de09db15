//! Switch construction options.
//!
//! All types derive Serde traits so an embedding application can carry them
//! inside its own configuration file.

use serde::{Deserialize, Serialize};

/// Options recognized at switch construction.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SwitchOptions {
    /// Strip exactly one trailing `/` from the observed pathname before
    /// matching. The root pathname `/` is never trimmed.
    pub trim_trailing_slash: bool,
}
