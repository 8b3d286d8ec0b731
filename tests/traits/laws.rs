//! Algebraic properties of the combinators, checked over small value sets.

use std::cell::Cell;

use railway_rail::{failure, success, Error, RailExt, Result};

fn samples() -> Vec<Result<i32>> {
    vec![
        success(0),
        success(-7),
        success(42),
        failure(Error::new("E1", "m1")),
        failure(Error::NONE),
    ]
}

#[test]
fn factories_set_track_and_error() {
    for v in [-1, 0, 1, i32::MAX] {
        let r = success(v);
        assert!(r.is_success());
        assert_eq!(r.error(), &Error::NONE);
    }

    for e in [Error::new("A", "a"), Error::new("", "msg"), Error::NONE] {
        let r = failure::<i32>(e.clone());
        assert!(!r.is_success());
        assert_eq!(r.error(), &e);
    }
}

#[test]
fn map_identity() {
    for r in samples() {
        assert_eq!(r.clone().map(|x| x), r);
    }
}

#[test]
fn map_composition() {
    let f = |x: i32| x.wrapping_mul(3);
    let g = |x: i32| x.wrapping_sub(4);

    for r in samples() {
        assert_eq!(r.clone().map(f).map(g), r.map(|x| g(f(x))));
    }
}

#[test]
fn bind_left_identity() {
    let f = |x: i32| {
        if x >= 0 {
            success(x * 2)
        } else {
            failure(Error::new("NEG", "negative"))
        }
    };

    for v in [-3, 0, 5] {
        assert_eq!(success(v).bind(f), f(v));
    }
}

#[test]
fn bind_right_identity() {
    for r in samples() {
        assert_eq!(r.clone().bind(success), r);
    }
}

#[test]
fn bind_associativity() {
    let f = |x: i32| if x % 2 == 0 { success(x / 2) } else { failure(Error::new("ODD", "odd")) };
    let g = |x: i32| if x > 10 { failure(Error::new("BIG", "big")) } else { success(x + 1) };

    for r in samples() {
        assert_eq!(r.clone().bind(f).bind(g), r.bind(|x| f(x).bind(g)));
    }
}

#[test]
fn bind_short_circuit_never_invokes_probe() {
    let probe = Cell::new(0);
    let e = Error::new("E", "boom");

    let r = failure::<i32>(e.clone()).bind(|x| {
        probe.set(probe.get() + 1);
        success(x)
    });

    assert_eq!(r, Err(e));
    assert_eq!(probe.get(), 0);
}

#[test]
fn ensure_matches_predicate() {
    let err = Error::new("NEG", "negative");
    let p = |x: &i32| *x >= 0;

    for v in [-2, 0, 9] {
        let expected = if p(&v) { success(v) } else { failure(err.clone()) };
        assert_eq!(success(v).ensure(p, err.clone()), expected);
    }
}

#[test]
fn match_is_exclusive() {
    for r in samples() {
        let branches = Cell::new(0);
        let expect_success = r.is_success();

        let took_success = r.match_with(
            |_| {
                branches.set(branches.get() + 1);
                true
            },
            |_| {
                branches.set(branches.get() + 1);
                false
            },
        );

        assert_eq!(branches.get(), 1);
        assert_eq!(took_success, expect_success);
    }
}
