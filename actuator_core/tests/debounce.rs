use actuator_core::Debounce;

#[test]
fn press_is_accepted_only_after_the_debounce_delay() {
    // active level high, 10 ms delay
    let mut sw = Debounce::new(true, 10);

    sw.update(false, 0);
    assert!(!sw.is_pressed());

    // Raw goes high at t=5; not accepted before t=15.
    sw.update(true, 5);
    assert!(!sw.is_pressed());
    sw.update(true, 12);
    assert!(!sw.is_pressed());
    sw.update(true, 14);
    assert!(!sw.is_pressed());

    sw.update(true, 15);
    assert!(sw.is_pressed());
    sw.update(true, 20);
    assert!(sw.is_pressed());
}

#[test]
fn chatter_keeps_restarting_the_window() {
    let mut sw = Debounce::new(true, 10);

    // Contact bounce: each raw flip restarts the debounce window.
    sw.update(true, 0);
    sw.update(false, 4);
    sw.update(true, 8);
    sw.update(false, 12);
    sw.update(true, 16);
    assert!(!sw.is_pressed());

    // Quiet from t=16 on; accepted at t=26.
    sw.update(true, 25);
    assert!(!sw.is_pressed());
    sw.update(true, 26);
    assert!(sw.is_pressed());
}

#[test]
fn active_low_switch_presses_on_low() {
    let mut sw = Debounce::new(false, 5);
    assert!(!sw.is_pressed());

    sw.update(false, 0);
    sw.update(false, 5);
    assert!(sw.is_pressed());

    sw.update(true, 10);
    sw.update(true, 15);
    assert!(!sw.is_pressed());
}

#[test]
fn just_pressed_fires_once_per_accepted_press() {
    let mut sw = Debounce::new(true, 5);
    assert!(!sw.just_pressed());

    sw.update(true, 0);
    sw.update(true, 5);
    assert!(sw.is_pressed());

    // true then false with no state change in between
    assert!(sw.just_pressed());
    assert!(!sw.just_pressed());

    sw.update(false, 10);
    sw.update(false, 15);
    assert!(sw.just_released());
    assert!(!sw.just_released());
}

#[test]
fn is_pressed_does_not_consume_the_edge() {
    let mut sw = Debounce::new(true, 5);
    sw.update(true, 0);
    sw.update(true, 5);

    // Plain state queries never touch the edge memory.
    assert!(sw.is_pressed());
    assert!(sw.is_pressed());
    assert!(sw.just_pressed());
    assert!(!sw.just_pressed());
}

#[test]
fn interleaved_edge_queries_share_one_memory() {
    // The documented single-consumer hazard: a just_released() call after a
    // press consumes the same memory just_pressed() would have used.
    let mut sw = Debounce::new(true, 5);
    sw.update(true, 0);
    sw.update(true, 5);

    assert!(!sw.just_released()); // consumes the press edge as a side effect
    assert!(!sw.just_pressed()); // the edge is gone
}

#[test]
fn never_updated_filter_reports_the_released_baseline() {
    let sw = Debounce::new(true, 50);
    assert!(!sw.is_pressed());
}
