//! Unary operator semantics.

use minic_ir::UnaryOp;

use crate::operators::is_truthy;

pub fn evaluate_unary(op: UnaryOp, operand: i64) -> i64 {
    match op {
        UnaryOp::Plus => operand,
        UnaryOp::Neg => operand.wrapping_neg(),
        UnaryOp::Not => i64::from(!is_truthy(operand)),
    }
}
