//! The divide-by-zero qualifier lattice.
//!
//! Four values form a diamond:
//!
//! ```text
//!          Top
//!         /   \
//!    ZeroInt  NonZeroInt
//!         \   /
//!         Bottom
//! ```
//!
//! Subtype means "more specific than or equal to". `ZeroInt` and
//! `NonZeroInt` are incomparable siblings.

/// Abstract zero-ness of an integer-typed expression.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub enum Qualifier {
    /// Any int, zero or non-zero. Least information; supertype of all.
    Top,
    /// Provably non-zero.
    NonZeroInt,
    /// Provably exactly zero.
    ZeroInt,
    /// Unreachable; no possible value. Subtype of all.
    Bottom,
}

impl Qualifier {
    /// All qualifiers, for exhaustive enumeration.
    pub const ALL: [Qualifier; 4] = [
        Qualifier::Top,
        Qualifier::NonZeroInt,
        Qualifier::ZeroInt,
        Qualifier::Bottom,
    ];

    /// Whether `self ⊑ other`.
    ///
    /// Total over all 16 ordered pairs; incomparable pairs answer false
    /// in both directions.
    pub fn is_subtype_of(self, other: Qualifier) -> bool {
        match (self, other) {
            (Qualifier::Bottom, _) => true,
            (_, Qualifier::Top) => true,
            (a, b) => a == b,
        }
    }

    /// Least upper bound.
    ///
    /// `Bottom` is the identity element; joining the incomparable
    /// siblings gives `Top`.
    pub fn join(self, other: Qualifier) -> Qualifier {
        match (self, other) {
            (a, b) if a == b => a,
            (Qualifier::Bottom, q) | (q, Qualifier::Bottom) => q,
            _ => Qualifier::Top,
        }
    }

    /// Greatest lower bound, the dual of [`join`](Self::join).
    pub fn meet(self, other: Qualifier) -> Qualifier {
        match (self, other) {
            (a, b) if a == b => a,
            (Qualifier::Top, q) | (q, Qualifier::Top) => q,
            _ => Qualifier::Bottom,
        }
    }

    /// Qualifier of an integer literal.
    pub fn of_literal(value: i64) -> Qualifier {
        if value == 0 {
            Qualifier::ZeroInt
        } else {
            Qualifier::NonZeroInt
        }
    }
}

impl std::fmt::Display for Qualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Qualifier::Top => "Top",
            Qualifier::NonZeroInt => "NonZeroInt",
            Qualifier::ZeroInt => "ZeroInt",
            Qualifier::Bottom => "Bottom",
        };
        f.write_str(name)
    }
}

/// Join any number of qualifiers, e.g. when merging control-flow paths.
///
/// Empty input yields `Bottom` (the join identity).
pub fn join_all(iter: impl IntoIterator<Item = Qualifier>) -> Qualifier {
    iter.into_iter().fold(Qualifier::Bottom, Qualifier::join)
}
