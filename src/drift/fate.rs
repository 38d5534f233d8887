use serde::{Deserialize, Serialize};
use std::fmt;

/// Drift below this recovers
pub const RECOVER_CEILING: f64 = 0.2;
/// Drift at or above this collapses
pub const COLLAPSE_FLOOR: f64 = 0.6;

/// Terminal classification (ψ) of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fate {
    Recover,
    Rebase,
    Collapse,
}

impl Fate {
    /// Upper-cased status label
    pub fn label(&self) -> &'static str {
        match self {
            Fate::Recover => "RECOVER",
            Fate::Rebase => "REBASE",
            Fate::Collapse => "COLLAPSE",
        }
    }

    /// Fixed advisory sentence shown next to the label
    pub fn advisory(&self) -> &'static str {
        match self {
            Fate::Recover => "System likely to recover original alignment.",
            Fate::Rebase => "System likely to shift to a new attractor.",
            Fate::Collapse => "System likely to collapse from symbolic drift.",
        }
    }
}

impl fmt::Display for Fate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a drift value onto half-open bands: [.., 0.2) recover,
/// [0.2, 0.6) rebase, [0.6, ..) collapse.
///
/// NaN fails both comparisons and lands in `Collapse`.
pub fn classify_fate(drift: f64) -> Fate {
    if drift < RECOVER_CEILING {
        Fate::Recover
    } else if drift < COLLAPSE_FLOOR {
        Fate::Rebase
    } else {
        Fate::Collapse
    }
}
