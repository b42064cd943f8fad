//! Expression tree visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override `visit_*` methods to add
//! logic. Call `walk_*` within your override to continue recursion (or
//! omit it to stop).
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_binary(&mut self, expr: &Expr, bin: &Binary) {
//!         // Pre-order logic
//!         walk_binary(self, bin);
//!         // Post-order logic
//!     }
//! }
//! ```

use crate::ast::{Assign, Binary, Expr, ExprKind, Literal, Root, Var};

pub trait Visitor: Sized {
    fn visit_root(&mut self, root: &Root) {
        walk_root(self, root);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_literal(&mut self, _expr: &Expr, _lit: &Literal) {
        // Leaf node
    }

    fn visit_var(&mut self, _expr: &Expr, _var: &Var) {
        // Leaf node
    }

    fn visit_binary(&mut self, _expr: &Expr, bin: &Binary) {
        walk_binary(self, bin);
    }

    fn visit_assign(&mut self, _expr: &Expr, assign: &Assign) {
        walk_assign(self, assign);
    }
}

pub fn walk_root<V: Visitor>(visitor: &mut V, root: &Root) {
    for expr in &root.exprs {
        visitor.visit_expr(expr);
    }
}

pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    match &expr.kind {
        ExprKind::Literal(lit) => visitor.visit_literal(expr, lit),
        ExprKind::Var(var) => visitor.visit_var(expr, var),
        ExprKind::Binary(bin) => visitor.visit_binary(expr, bin),
        ExprKind::Assign(assign) => visitor.visit_assign(expr, assign),
    }
}

pub fn walk_binary<V: Visitor>(visitor: &mut V, bin: &Binary) {
    visitor.visit_expr(&bin.lhs);
    visitor.visit_expr(&bin.rhs);
}

pub fn walk_assign<V: Visitor>(visitor: &mut V, assign: &Assign) {
    visitor.visit_expr(&assign.target);
    visitor.visit_expr(&assign.value);
}
