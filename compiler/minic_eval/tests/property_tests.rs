//! Arithmetic laws and determinism, checked over generated inputs.

use minic_eval::{eval_program, evaluate_binary};
use minic_ir::{BinaryOp, Node, Position};
use proptest::prelude::*;

/// `int main() { return <left> <op> <right>; }` built directly from factories.
fn program_returning(op: BinaryOp, left: i64, right: i64) -> Node {
    let pos = Position::new(1, 1);
    let expr = Node::binary(op, Node::number(left, pos), Node::number(right, pos), pos);
    let body = Node::compound(Some(Node::list_append(None, Node::return_stmt(expr, pos))), pos);
    let main = Node::func_def("main", Some(Node::empty_list()), body, pos);
    Node::program(Some(main))
}

fn any_op() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
        Just(BinaryOp::Mod),
        Just(BinaryOp::Lt),
        Just(BinaryOp::Gt),
        Just(BinaryOp::LtEq),
        Just(BinaryOp::GtEq),
        Just(BinaryOp::Eq),
        Just(BinaryOp::NotEq),
        Just(BinaryOp::And),
        Just(BinaryOp::Or),
    ]
}

proptest! {
    #[test]
    fn division_truncates_toward_zero(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        prop_assume!(!(a == i64::MIN && b == -1));
        prop_assert_eq!(evaluate_binary(BinaryOp::Div, a, b), a / b);
    }

    #[test]
    fn remainder_takes_sign_of_dividend(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        prop_assume!(!(a == i64::MIN && b == -1));
        let r = evaluate_binary(BinaryOp::Mod, a, b);
        prop_assert_eq!(r, a % b);
        prop_assert!(r == 0 || (r < 0) == (a < 0));
        prop_assert!(r.unsigned_abs() < b.unsigned_abs());
    }

    #[test]
    fn zero_divisor_yields_zero(a in any::<i64>()) {
        prop_assert_eq!(evaluate_binary(BinaryOp::Div, a, 0), 0);
        prop_assert_eq!(evaluate_binary(BinaryOp::Mod, a, 0), 0);
    }

    #[test]
    fn boolean_operators_yield_zero_or_one(op in any_op(), a in any::<i64>(), b in any::<i64>()) {
        let result = evaluate_binary(op, a, b);
        let arithmetic = matches!(
            op,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
        );
        if !arithmetic {
            prop_assert!(result == 0 || result == 1);
        }
    }

    #[test]
    fn program_result_matches_operator(op in any_op(), a in any::<i64>(), b in any::<i64>()) {
        let program = program_returning(op, a, b);
        prop_assert_eq!(eval_program(Some(&program)).value, evaluate_binary(op, a, b));
    }

    #[test]
    fn evaluation_is_deterministic(op in any_op(), a in -1000i64..1000, b in -1000i64..1000) {
        let program = program_returning(op, a, b);
        let first = eval_program(Some(&program));
        let second = eval_program(Some(&program));
        prop_assert_eq!(first, second);
    }
}
