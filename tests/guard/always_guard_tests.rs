/*!
 * Always Guard Tests
 */

use super::{during_unwind, raise, unwinds};
use pretty_assertions::assert_eq;
use scope_exit::{defer, scope_exit, GuardError, GuardState};
use std::cell::{Cell, RefCell};

#[test]
fn test_runs_on_fall_through() {
    let hits = Cell::new(0);
    {
        let _guard = defer(|| hits.set(hits.get() + 1));
        assert_eq!(hits.get(), 0);
    }
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_runs_on_early_return() {
    fn work(hits: &Cell<u32>, bail: bool) -> u32 {
        scope_exit!(|| hits.set(hits.get() + 1));
        if bail {
            return 0;
        }
        42
    }

    let hits = Cell::new(0);
    assert_eq!(work(&hits, true), 0);
    assert_eq!(work(&hits, false), 42);
    assert_eq!(hits.get(), 2);
}

#[test]
fn test_runs_on_question_mark() {
    fn parse(input: &str, closed: &Cell<bool>) -> Result<i32, std::num::ParseIntError> {
        scope_exit!(|| closed.set(true));
        let value = input.parse::<i32>()?;
        Ok(value * 2)
    }

    let closed = Cell::new(false);
    assert!(parse("nope", &closed).is_err());
    assert!(closed.get());
}

#[test]
fn test_runs_on_panic() {
    let hits = Cell::new(0);
    let unwound = unwinds(|| {
        scope_exit!(|| hits.set(hits.get() + 1));
        raise();
    });

    assert!(unwound);
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_runs_during_foreign_unwind() {
    let hits = Cell::new(0);
    during_unwind(|| {
        scope_exit!(|| hits.set(hits.get() + 1));
    });
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_nested_scopes_unwind_inside_out() {
    let order = RefCell::new(Vec::new());
    {
        scope_exit!(|| order.borrow_mut().push("outer"));
        {
            scope_exit!(|| order.borrow_mut().push("inner"));
            order.borrow_mut().push("body");
        }
        order.borrow_mut().push("between");
    }
    assert_eq!(*order.borrow(), ["body", "inner", "between", "outer"]);
}

#[test]
fn test_action_panic_propagates() {
    let after = Cell::new(false);
    let unwound = unwinds(|| {
        {
            scope_exit!(|| raise());
        }
        after.set(true);
    });

    assert!(unwound);
    assert!(!after.get());
}

#[test]
fn test_disarmed_guard_never_fires() {
    let hits = Cell::new(0);
    {
        scope_exit!(let guard = || hits.set(hits.get() + 1));
        assert_eq!(guard.state(), GuardState::Armed);
        guard.disarm().unwrap();
        assert_eq!(guard.state(), GuardState::Disarmed);
        assert_eq!(
            guard.disarm(),
            Err(GuardError::AlreadyDisarmed { policy: "always" })
        );
    }
    assert_eq!(hits.get(), 0);
}
