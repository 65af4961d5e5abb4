// Host-side tests for the initialization/disposal state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct Probe {
    released: Rc<Cell<u32>>,
}

impl Release for Probe {
    fn release(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

fn probe() -> (Probe, Rc<Cell<u32>>) {
    let counter = Rc::new(Cell::new(0));
    (
        Probe {
            released: counter.clone(),
        },
        counter,
    )
}

#[test]
fn zero_box_stays_pending() {
    let mut lc: Lifecycle<Probe> = Lifecycle::new();
    assert_eq!(lc.begin_init(0.0, 300.0), None);
    assert_eq!(lc.begin_init(300.0, 0.0), None);
    assert_eq!(lc.begin_init(f64::NAN, 10.0), None);
    assert!(lc.is_pending());
    assert!(!lc.is_running());
}

#[test]
fn deferred_init_happens_exactly_once() {
    let mut lc: Lifecycle<Probe> = Lifecycle::new();
    assert_eq!(lc.begin_init(0.0, 0.0), None);
    assert_eq!(lc.begin_init(640.0, 360.0), Some((640.0, 360.0)));
    // later visibility/resize signals must not restart it
    assert_eq!(lc.begin_init(800.0, 600.0), None);
    let (p, _) = probe();
    assert!(lc.finish_init(p).is_ok());
    assert_eq!(lc.begin_init(800.0, 600.0), None);
    assert!(lc.is_running());
}

#[test]
fn dispose_before_init_allocates_nothing_and_is_final() {
    let mut lc: Lifecycle<Probe> = Lifecycle::new();
    assert!(lc.dispose().is_none());
    assert!(lc.is_disposed());
    assert_eq!(lc.begin_init(100.0, 100.0), None);
    assert!(!lc.is_pending());
}

#[test]
fn dispose_during_init_hands_value_back() {
    let mut lc: Lifecycle<Probe> = Lifecycle::new();
    lc.begin_init(10.0, 10.0);
    assert!(lc.dispose().is_none());
    let (p, counter) = probe();
    let mut late = lc.finish_init(p).expect_err("disposed lifecycle must refuse");
    late.release();
    assert_eq!(counter.get(), 1);
    assert!(lc.is_disposed());
}

#[test]
fn dispose_releases_running_value_once() {
    let mut lc: Lifecycle<Probe> = Lifecycle::new();
    lc.begin_init(10.0, 10.0);
    let (p, counter) = probe();
    lc.finish_init(p).expect("initializing lifecycle accepts value");
    assert!(lc.running().is_some());
    if let Some(mut v) = lc.dispose() {
        v.release();
    }
    assert!(lc.dispose().is_none());
    assert!(lc.running().is_none());
    assert_eq!(counter.get(), 1);
}

#[test]
fn failed_init_is_inert() {
    let mut lc: Lifecycle<Probe> = Lifecycle::new();
    lc.begin_init(10.0, 10.0);
    lc.fail_init();
    assert!(lc.is_disposed());
    assert!(lc.running().is_none());
    let (p, _) = probe();
    assert!(lc.finish_init(p).is_err());
}

#[test]
fn fail_init_outside_initializing_is_ignored() {
    let mut lc: Lifecycle<Probe> = Lifecycle::default();
    lc.fail_init();
    assert!(lc.is_pending());
    assert_eq!(lc.begin_init(10.0, 10.0), Some((10.0, 10.0)));
}

#[test]
fn positive_box_rejects_non_finite_and_non_positive() {
    assert_eq!(positive_box(1.0, 2.0), Some((1.0, 2.0)));
    assert_eq!(positive_box(-1.0, 2.0), None);
    assert_eq!(positive_box(f64::INFINITY, 2.0), None);
    assert_eq!(positive_box(0.0, 0.0), None);
}
