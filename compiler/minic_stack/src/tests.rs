use super::*;

enum Nest {
    Leaf(i64),
    Paren(Box<Nest>),
}

fn nest(depth: usize) -> Nest {
    (0..depth).fold(Nest::Leaf(7), |inner, _| Nest::Paren(Box::new(inner)))
}

fn depth_of(node: &Nest) -> usize {
    ensure_sufficient_stack(|| match node {
        Nest::Leaf(_) => 0,
        Nest::Paren(inner) => depth_of(inner) + 1,
    })
}

fn drop_iteratively(mut node: Nest) {
    while let Nest::Paren(inner) = node {
        node = *inner;
    }
}

#[test]
fn test_passes_through_value() {
    assert_eq!(ensure_sufficient_stack(|| 1 + 2), 3);
}

#[test]
fn test_passes_through_result() {
    let result: Result<i64, String> = ensure_sufficient_stack(|| Err("unexpected".to_string()));
    assert_eq!(result, Err("unexpected".to_string()));
}

#[test]
fn test_shallow_nesting() {
    let tree = nest(16);
    assert_eq!(depth_of(&tree), 16);
    drop_iteratively(tree);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let tree = nest(200_000);
    assert_eq!(depth_of(&tree), 200_000);
    drop_iteratively(tree);
}
