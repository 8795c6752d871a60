// Host-side tests for the one-shot load notification.

use heart_core::LoadSignal;
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, LoadSignal) {
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    (calls, LoadSignal::new(move || c.set(c.get() + 1)))
}

#[test]
fn fire_runs_callback_once() {
    let (calls, signal) = counter();
    signal.fire();
    assert_eq!(calls.get(), 1);
}

#[test]
fn dropping_unfired_signal_still_notifies() {
    let (calls, signal) = counter();
    drop(signal);
    assert_eq!(calls.get(), 1);
}

#[test]
fn debug_reports_pending() {
    let (_calls, signal) = counter();
    assert!(format!("{signal:?}").contains("pending: true"));
}
