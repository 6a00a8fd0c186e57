use std::panic::{catch_unwind, AssertUnwindSafe};

use super::*;

#[test]
fn test_guard_pops_on_normal_exit() {
    let mut interp = Interpreter::new();
    let global = interp.current_scope();
    assert_eq!(interp.env.depth(), 1);

    {
        let scoped = interp.scoped();
        assert_eq!(scoped.env.depth(), 2);
        assert_ne!(scoped.current_scope(), global);
    }

    assert_eq!(interp.env.depth(), 1);
    assert_eq!(interp.current_scope(), global);
}

#[test]
fn test_bindings_die_with_scope() {
    let mut interp = Interpreter::new();
    interp.with_env_scope(|scoped| {
        let here = scoped.current_scope();
        scoped.env.define(here, "tmp", 9);
        assert_eq!(scoped.lookup("tmp"), Some(9));
    });
    assert_eq!(interp.lookup("tmp"), None);
}

#[test]
fn test_nested_scopes_unwind_in_order() {
    let mut interp = Interpreter::new();
    let depth = interp.with_env_scope(|a| {
        a.with_env_scope(|b| b.with_env_scope(|c| c.env.depth()))
    });
    assert_eq!(depth, 4);
    assert_eq!(interp.env.depth(), 1);
}

#[test]
fn test_guard_pops_on_panic() {
    let mut interp = Interpreter::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        interp.with_env_scope(|outer| {
            outer.with_env_scope(|_inner| {
                panic!("unwinding through two scopes");
            })
        })
    }));
    assert!(result.is_err());
    assert_eq!(interp.env.depth(), 1);
}
