use super::*;

fn collector() -> (Rc<RefCell<Vec<i32>>>, Debouncer<i32>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let debouncer = Debouncer::new(Duration::from_millis(300), move |value| {
        sink.borrow_mut().push(value);
    });
    (seen, debouncer)
}

#[test]
fn burst_delivers_only_the_last_value() {
    let (seen, debouncer) = collector();
    debouncer.call(1);
    debouncer.call(2);
    debouncer.call(3);
    let seq = debouncer.pending.borrow().seq;
    debouncer.fire(seq);
    assert_eq!(*seen.borrow(), vec![3]);
}

#[test]
fn stale_timer_does_not_deliver() {
    let (seen, debouncer) = collector();
    debouncer.call(1);
    let stale = debouncer.pending.borrow().seq;
    debouncer.call(2);
    debouncer.fire(stale);
    assert!(seen.borrow().is_empty());
}

#[test]
fn fire_consumes_the_pending_value_once() {
    let (seen, debouncer) = collector();
    debouncer.call(7);
    let seq = debouncer.pending.borrow().seq;
    debouncer.fire(seq);
    debouncer.fire(seq);
    assert_eq!(*seen.borrow(), vec![7]);
}

#[test]
fn each_call_advances_the_sequence() {
    let (_seen, debouncer) = collector();
    debouncer.call(1);
    debouncer.call(2);
    assert_eq!(debouncer.pending.borrow().seq, 2);
}

#[test]
fn clones_share_pending_state() {
    let (seen, debouncer) = collector();
    let other = debouncer.clone();
    debouncer.call(1);
    other.call(2);
    let seq = other.pending.borrow().seq;
    debouncer.fire(seq);
    assert_eq!(*seen.borrow(), vec![2]);
}

#[test]
fn wait_reports_the_configured_window() {
    let (_seen, debouncer) = collector();
    assert_eq!(debouncer.wait(), Duration::from_millis(300));
}
