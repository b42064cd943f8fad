//! Expression classification: where qualifiers come from.
//!
//! The checker never infers qualifiers itself. It asks a
//! [`QualifierSource`] — the host's type-annotation layer — for a verdict
//! per expression. The contract has no absent case: when the source cannot
//! decide, it answers [`Qualifier::Top`].

use divsafe_core::Qualifier;
use indexmap::IndexMap;

use crate::ast::{Expr, ExprId, ExprKind};

/// Source of qualifier facts for expressions.
///
/// Pure read. Must return a concrete qualifier for every expression it is
/// asked about; `Top` when undecided, never an absent answer.
pub trait QualifierSource {
    fn qualifier_of(&self, expr: &Expr) -> Qualifier;
}

impl<S: QualifierSource + ?Sized> QualifierSource for &S {
    fn qualifier_of(&self, expr: &Expr) -> Qualifier {
        (*self).qualifier_of(expr)
    }
}

/// Table-backed qualifier source keyed by expression id.
///
/// Lookup misses fall back to literal self-classification, then `Top`,
/// so the no-absent-answer contract holds for any tree.
#[derive(Debug, Clone, Default)]
pub struct QualifierTable {
    map: IndexMap<ExprId, Qualifier>,
}

impl QualifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ExprId, qualifier: Qualifier) {
        self.map.insert(id, qualifier);
    }

    /// The recorded qualifier, without fallbacks.
    pub fn get(&self, id: ExprId) -> Option<Qualifier> {
        self.map.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(ExprId, Qualifier)> for QualifierTable {
    fn from_iter<T: IntoIterator<Item = (ExprId, Qualifier)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl QualifierSource for QualifierTable {
    fn qualifier_of(&self, expr: &Expr) -> Qualifier {
        if let Some(q) = self.get(expr.id) {
            return q;
        }
        match &expr.kind {
            ExprKind::Literal(lit) => Qualifier::of_literal(lit.value),
            _ => Qualifier::Top,
        }
    }
}
