#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Divsafe: divide-by-zero checking over host-supplied typed expression
//! trees.
//!
//! The host front end parses and type-checks its language, then hands
//! this crate a read-only [`ast::Root`] plus a
//! [`classifier::QualifierSource`] answering "what do we know about the
//! zero-ness of this expression?". The checker walks the tree and flags
//! divisions whose divisor may be zero, and assignments that widen a
//! qualifier unsoundly.
//!
//! # Example
//!
//! ```
//! use divsafe_lib::ast::{BinaryOp, Expr, ExprId, PrimitiveKind, Root};
//! use divsafe_lib::{Qualifier, QualifierTable, check_root};
//! use rowan::TextRange;
//!
//! // x / y, with nothing known about y
//! let source = "x / y";
//! let x = Expr::var(ExprId(0), PrimitiveKind::Int, TextRange::new(0.into(), 1.into()), "x");
//! let y = Expr::var(ExprId(1), PrimitiveKind::Int, TextRange::new(4.into(), 5.into()), "y");
//! let div = Expr::binary(
//!     ExprId(2),
//!     PrimitiveKind::Int,
//!     TextRange::new(0.into(), 5.into()),
//!     BinaryOp::Div,
//!     x,
//!     y,
//! );
//! let root = Root { exprs: vec![div] };
//!
//! let mut qualifiers = QualifierTable::new();
//! qualifiers.insert(ExprId(0), Qualifier::Top);
//! qualifiers.insert(ExprId(1), Qualifier::Top);
//!
//! let diagnostics = check_root(&root, &qualifiers);
//! assert_eq!(diagnostics.error_count(), 1);
//! eprintln!("{}", diagnostics.printer().source(source).render());
//! ```

pub mod ast;
pub mod check;
pub mod classifier;
pub mod diagnostics;
pub mod visitor;


pub use check::{DivByZeroChecker, check_root};
pub use classifier::{QualifierSource, QualifierTable};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use divsafe_core::{Qualifier, join_all};

/// Errors that can fail a whole checking pass.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The pass completed but produced error-severity findings.
    #[error("checking failed with {} errors", .0.error_count())]
    CheckFailed(Diagnostics),
}

/// Result type for checking passes.
pub type Result<T> = std::result::Result<T, Error>;

/// Run the checking pass and fail when any finding is an error.
///
/// The walk itself never aborts; all findings are collected first
/// (available through [`Error::CheckFailed`] on the failure path).
pub fn check(root: &ast::Root, source: &impl QualifierSource) -> Result<Diagnostics> {
    let diag = check_root(root, source);
    if diag.has_errors() {
        Err(Error::CheckFailed(diag))
    } else {
        Ok(diag)
    }
}
