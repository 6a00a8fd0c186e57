//! Binary operator semantics.
//!
//! Arithmetic wraps on overflow. Division and remainder truncate toward
//! zero, and a zero divisor yields 0 instead of trapping. Relational and
//! logical operators produce 1 or 0. `&&` and `||` receive both operand
//! values already evaluated; nothing here short-circuits.

use minic_ir::BinaryOp;

#[inline]
pub fn is_truthy(value: i64) -> bool {
    value != 0
}

pub fn evaluate_binary(op: BinaryOp, left: i64, right: i64) -> i64 {
    match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Div => {
            if right == 0 {
                0
            } else {
                left.wrapping_div(right)
            }
        }
        BinaryOp::Mod => {
            if right == 0 {
                0
            } else {
                left.wrapping_rem(right)
            }
        }
        BinaryOp::Lt => i64::from(left < right),
        BinaryOp::Gt => i64::from(left > right),
        BinaryOp::LtEq => i64::from(left <= right),
        BinaryOp::GtEq => i64::from(left >= right),
        BinaryOp::Eq => i64::from(left == right),
        BinaryOp::NotEq => i64::from(left != right),
        BinaryOp::And => i64::from(is_truthy(left) && is_truthy(right)),
        BinaryOp::Or => i64::from(is_truthy(left) || is_truthy(right)),
    }
}
