/*!
 * OnFailure Guard Tests
 */

use super::{during_unwind, raise, unwinds};
use pretty_assertions::assert_eq;
use scope_exit::{make_guard, on_failure, scope_failure, OnFailure};
use std::cell::Cell;

#[test]
fn test_fires_on_new_panic() {
    let rolled_back = Cell::new(false);
    let unwound = unwinds(|| {
        let _rollback = on_failure(|| rolled_back.set(true));
        raise();
    });

    assert!(unwound);
    assert!(rolled_back.get());
}

#[test]
fn test_skipped_on_normal_exit() {
    let rolled_back = Cell::new(false);
    {
        let _rollback = on_failure(|| rolled_back.set(true));
    }
    assert!(!rolled_back.get());
}

#[test]
fn test_skipped_on_err_return() {
    // Returned errors are values, not unwinds
    fn step(rolled_back: &Cell<bool>) -> Result<(), &'static str> {
        scope_failure!(|| rolled_back.set(true));
        Err("declined")
    }

    let rolled_back = Cell::new(false);
    assert_eq!(step(&rolled_back), Err("declined"));
    assert!(!rolled_back.get());
}

#[test]
fn test_preexisting_unwind_does_not_count() {
    let rolled_back = Cell::new(false);
    during_unwind(|| {
        scope_failure!(|| rolled_back.set(true));
    });
    assert!(!rolled_back.get());
}

#[test]
fn test_panic_caught_inside_scope_does_not_count() {
    let rolled_back = Cell::new(false);
    {
        scope_failure!(|| rolled_back.set(true));
        assert!(unwinds(|| raise()));
    }
    assert!(!rolled_back.get());
}

#[test]
fn test_fires_for_panic_in_nested_scope() {
    let outer = Cell::new(false);
    let inner = Cell::new(false);
    let unwound = unwinds(|| {
        scope_failure!(|| outer.set(true));
        {
            scope_failure!(|| inner.set(true));
            raise();
        }
    });

    assert!(unwound);
    assert!(inner.get());
    assert!(outer.get());
}

#[test]
fn test_counter_scenario() {
    fn run(count: &mut i32, fail: bool) {
        let _guard = make_guard(OnFailure::new(), |c: &mut i32| *c += 1, (count,));
        if fail {
            raise();
        }
    }

    let mut count = 0;
    assert!(unwinds(|| run(&mut count, true)));
    assert_eq!(count, 1);

    let mut count = 0;
    run(&mut count, false);
    assert_eq!(count, 0);
}

#[test]
fn test_disarm_after_partial_work() {
    let rolled_back = Cell::new(false);
    let unwound = unwinds(|| {
        scope_failure!(let rollback = || rolled_back.set(true));
        rollback.disarm().unwrap();
        raise();
    });

    assert!(unwound);
    assert!(!rolled_back.get());
}

#[test]
fn test_new_panic_inside_foreign_unwind_is_not_detected() {
    // ThreadPanics saturates at 1: a panic raised and caught while an outer
    // unwind is already in flight leaves the reading unchanged
    let rolled_back = Cell::new(false);
    let inner_unwound = Cell::new(false);

    during_unwind(|| {
        inner_unwound.set(unwinds(|| {
            scope_failure!(|| rolled_back.set(true));
            raise();
        }));
    });

    assert!(inner_unwound.get());
    assert!(!rolled_back.get());
}
