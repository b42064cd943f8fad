//! The typed expression surface this crate checks.
//!
//! The host front end (parser + type inference) builds these nodes and
//! hands them over read-only. The checker never mutates the tree, and the
//! tree carries no qualifier information itself; qualifiers come from a
//! [`QualifierSource`](crate::classifier::QualifierSource) looked up by
//! [`ExprId`].

use rowan::TextRange;
use serde::{Deserialize, Serialize};

/// Stable identity of one expression node within a checking pass.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ExprId(pub u32);

/// Binary and compound-assignment operators surfaced by the host.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    /// `x + y`
    Add,
    /// `x - y`
    Sub,
    /// `x * y`
    Mul,
    /// `x / y`
    Div,
    /// `x % y`
    Rem,
    /// `x += y`
    AddAssign,
    /// `x -= y`
    SubAssign,
    /// `x *= y`
    MulAssign,
    /// `x /= y`
    DivAssign,
    /// `x %= y`
    RemAssign,
}

impl BinaryOp {
    /// Operators whose right operand acts as a divisor.
    pub fn is_division(self) -> bool {
        matches!(
            self,
            Self::Div | Self::DivAssign | Self::Rem | Self::RemAssign
        )
    }

    /// Operators that also assign into their left operand.
    pub fn is_compound_assignment(self) -> bool {
        matches!(
            self,
            Self::AddAssign | Self::SubAssign | Self::MulAssign | Self::DivAssign | Self::RemAssign
        )
    }
}

/// Static primitive kind of an expression, as reported by the host.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PrimitiveKind {
    Int,
    Long,
    Float,
    Double,
    Bool,
}

impl PrimitiveKind {
    /// Whether the divisor rules apply to this kind.
    ///
    /// Only integral division can fault; floating-point division by zero
    /// is well-defined.
    pub fn is_integral(self) -> bool {
        matches!(self, Self::Int | Self::Long)
    }
}

/// One expression node.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Expr {
    pub id: ExprId,
    /// Static type of the whole expression.
    pub ty: PrimitiveKind,
    /// Byte range in the host's source text, for diagnostics.
    pub range: TextRange,
    pub kind: ExprKind,
}

/// The syntactic shapes the checker distinguishes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Var(Var),
    Binary(Binary),
    Assign(Assign),
}

/// Integer (or other primitive) literal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Literal {
    pub value: i64,
}

/// Named variable reference.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Var {
    pub name: String,
}

/// Binary or compound-assignment operation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Binary {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

/// Plain assignment, `target = value`.
///
/// Declarations with initializers surface here too: the host passes the
/// declared variable as `target` carrying its declared qualifier.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Assign {
    pub target: Box<Expr>,
    pub value: Box<Expr>,
}

/// One checking pass's worth of top-level expressions.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Root {
    pub exprs: Vec<Expr>,
}

impl Expr {
    pub fn literal(id: ExprId, ty: PrimitiveKind, range: TextRange, value: i64) -> Expr {
        Expr {
            id,
            ty,
            range,
            kind: ExprKind::Literal(Literal { value }),
        }
    }

    pub fn var(id: ExprId, ty: PrimitiveKind, range: TextRange, name: impl Into<String>) -> Expr {
        Expr {
            id,
            ty,
            range,
            kind: ExprKind::Var(Var { name: name.into() }),
        }
    }

    pub fn binary(
        id: ExprId,
        ty: PrimitiveKind,
        range: TextRange,
        op: BinaryOp,
        lhs: Expr,
        rhs: Expr,
    ) -> Expr {
        Expr {
            id,
            ty,
            range,
            kind: ExprKind::Binary(Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }),
        }
    }

    pub fn assign(id: ExprId, ty: PrimitiveKind, range: TextRange, target: Expr, value: Expr) -> Expr {
        Expr {
            id,
            ty,
            range,
            kind: ExprKind::Assign(Assign {
                target: Box::new(target),
                value: Box::new(value),
            }),
        }
    }
}
