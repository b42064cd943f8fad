//! The divide-by-zero and assignment-compatibility rules.
//!
//! Two independent rules, both decided per node with no cross-node state:
//!
//! - **Divisor rule**: a divide or remainder node with integral type
//!   reports when the right operand's qualifier is not `NonZeroInt`.
//! - **Assignment rule**: an assignment reports when the source
//!   qualifier is not a subtype of the target qualifier.
//!
//! A compound divide/remainder assignment can trip both rules; both
//! findings are kept, in no guaranteed order.
//!
//! The decision predicates are pure functions of (node, classifier), so
//! hosts with their own traversal can call them directly and skip
//! [`DivByZeroChecker`].

use divsafe_core::Qualifier;

use crate::ast::{Assign, Binary, Expr, Root};
use crate::classifier::QualifierSource;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::visitor::{Visitor, walk_assign, walk_binary};

/// Whether a divisor with this qualifier must be rejected.
///
/// `Top` fails because "possibly zero" has to fail safe. `Bottom`
/// (unreachable) is also rejected: a dead divisor stays visible rather
/// than silently passing. Only `NonZeroInt` divides cleanly.
pub fn is_unsafe_divisor(qualifier: Qualifier) -> bool {
    matches!(
        qualifier,
        Qualifier::ZeroInt | Qualifier::Top | Qualifier::Bottom
    )
}

/// Decide the divisor rule for one binary or compound-assignment node.
///
/// Operators outside the divide/remainder set and non-integral nodes are
/// ignored without consulting the classifier.
pub fn divisor_error(expr: &Expr, bin: &Binary, source: &impl QualifierSource) -> bool {
    if !bin.op.is_division() || !expr.ty.is_integral() {
        return false;
    }
    is_unsafe_divisor(source.qualifier_of(&bin.rhs))
}

/// Decide the assignment rule for a (target, source-expression) pair.
pub fn assignment_error(target: &Expr, value: &Expr, source: &impl QualifierSource) -> bool {
    !source
        .qualifier_of(value)
        .is_subtype_of(source.qualifier_of(target))
}

/// Tree-walking checker applying both rules to every matching node.
///
/// Holds only the classifier reference and the diagnostics sink; no
/// per-node state survives between visits.
pub struct DivByZeroChecker<'a, S> {
    source: &'a S,
    diag: &'a mut Diagnostics,
}

impl<'a, S: QualifierSource> DivByZeroChecker<'a, S> {
    pub fn new(source: &'a S, diag: &'a mut Diagnostics) -> Self {
        Self { source, diag }
    }

    /// Entry point for one binary or compound-assignment node.
    ///
    /// Reports the divisor rule at the node's range. For compound
    /// assignments the assignment rule also runs, with the whole node as
    /// the source expression (its qualifier is the operation's result).
    pub fn check_binary(&mut self, expr: &Expr, bin: &Binary) {
        if divisor_error(expr, bin, self.source) {
            let divisor = self.source.qualifier_of(&bin.rhs);
            self.diag
                .report(DiagnosticKind::DivideByZero, expr.range)
                .message(divisor.to_string())
                .emit();
        }

        if bin.op.is_compound_assignment() && assignment_error(&bin.lhs, expr, self.source) {
            self.report_assignment(&bin.lhs, expr);
        }
    }

    /// Entry point for one plain assignment node.
    ///
    /// Reports at the source expression's range, with the target as
    /// related context.
    pub fn check_assignment(&mut self, target: &Expr, value: &Expr) {
        if assignment_error(target, value, self.source) {
            self.report_assignment(target, value);
        }
    }

    fn report_assignment(&mut self, target: &Expr, value: &Expr) {
        let value_q = self.source.qualifier_of(value);
        let target_q = self.source.qualifier_of(target);
        self.diag
            .report(DiagnosticKind::Assignment, value.range)
            .message(format!("`{value_q}` is not a subtype of `{target_q}`"))
            .related_to(format!("target is `{target_q}`"), target.range)
            .emit();
    }
}

impl<S: QualifierSource> Visitor for DivByZeroChecker<'_, S> {
    fn visit_binary(&mut self, expr: &Expr, bin: &Binary) {
        self.check_binary(expr, bin);
        walk_binary(self, bin);
    }

    fn visit_assign(&mut self, _expr: &Expr, assign: &Assign) {
        self.check_assignment(&assign.target, &assign.value);
        walk_assign(self, assign);
    }
}

/// Run both rules over every expression in the root.
///
/// Findings accumulate; the walk never aborts early.
pub fn check_root(root: &Root, source: &impl QualifierSource) -> Diagnostics {
    let mut diag = Diagnostics::new();
    let mut checker = DivByZeroChecker::new(source, &mut diag);
    checker.visit_root(root);
    diag
}
