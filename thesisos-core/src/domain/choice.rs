//! Closed option sets behind every select control.
//!
//! Each select is a fieldless enum implementing [`Choice`], so a value
//! outside the option list cannot be constructed. Cycling wraps in both
//! directions.

use serde::{Deserialize, Serialize};

/// A select control's option set.
pub trait Choice: Copy + Eq + 'static {
    /// Every option, in display order. The first one is the default.
    const ALL: &'static [Self];

    /// Label shown in the UI.
    fn label(self) -> &'static str;

    /// Position of this option in [`Choice::ALL`].
    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Step `delta` options forward (or back), wrapping around.
    fn cycle(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i64;
        let idx = (self.position() as i64 + delta as i64).rem_euclid(len);
        Self::ALL[idx as usize]
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <$name as Choice>::ALL[0]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum! {
    /// Qualitative investment time frame.
    Horizon {
        Short => "Short",
        Medium => "Medium",
        Long => "Long",
    }
}

choice_enum! {
    InflationTrend {
        Rising => "Rising",
        Falling => "Falling",
        Sticky => "Sticky",
    }
}

choice_enum! {
    RatesOutlook {
        Tightening => "Tightening",
        Neutral => "Neutral",
        Easing => "Easing",
    }
}

choice_enum! {
    /// Commodity exposure; the commodities section holds a set of these.
    Commodity {
        Oil => "Oil",
        NaturalGas => "Natural Gas",
        Copper => "Copper",
        Aluminum => "Aluminum",
        Agriculture => "Agriculture",
        Metals => "Metals",
    }
}

choice_enum! {
    Decision {
        Accumulate => "Accumulate",
        Watch => "Watch",
        Avoid => "Avoid",
    }
}

impl Horizon {
    /// Parse a case-insensitive label (`short`, `Medium`, ...).
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|h| h.label().eq_ignore_ascii_case(s.trim()))
    }
}
