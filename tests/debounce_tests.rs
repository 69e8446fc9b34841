// Host-side tests for the trailing-edge resize debounce.

use folio_core::constants::RESIZE_DEBOUNCE_MS;
use folio_core::Debouncer;

#[test]
fn idle_debouncer_never_fires() {
    let mut d = Debouncer::default();
    assert!(!d.is_pending());
    assert_eq!(d.remaining_ms(1000.0), None);
    assert!(!d.poll(1000.0));
}

#[test]
fn default_window_is_200ms() {
    assert_eq!(Debouncer::default().quiet_ms(), RESIZE_DEBOUNCE_MS as f64);
    assert_eq!(Debouncer::default().quiet_ms(), 200.0);
}

#[test]
fn fires_once_after_quiet_window() {
    let mut d = Debouncer::new(200);
    d.event(1000.0);
    assert!(!d.poll(1100.0));
    assert!(!d.poll(1199.9));
    assert!(d.poll(1200.0));
    assert!(!d.is_pending());
    assert!(!d.poll(1300.0));
}

#[test]
fn burst_coalesces_to_one_firing_after_last_event() {
    let mut d = Debouncer::new(200);
    let mut fired = Vec::new();
    // Resize events every 16 ms for half a second, polled every ms.
    for t in 0..=1500 {
        let now = t as f64;
        if t <= 500 && t % 16 == 0 {
            d.event(now);
        }
        if d.poll(now) {
            fired.push(now);
        }
    }
    // Last event lands at 496 ms.
    assert_eq!(fired, vec![696.0]);
}

#[test]
fn separate_bursts_fire_separately() {
    let mut d = Debouncer::new(200);
    d.event(0.0);
    d.event(50.0);
    assert!(d.poll(250.0));
    d.event(1000.0);
    assert!(!d.poll(1150.0));
    assert!(d.poll(1201.0));
}

#[test]
fn remaining_tracks_the_latest_event() {
    let mut d = Debouncer::new(200);
    d.event(100.0);
    assert_eq!(d.remaining_ms(150.0), Some(150.0));
    d.event(180.0);
    assert_eq!(d.remaining_ms(200.0), Some(180.0));
    assert_eq!(d.remaining_ms(500.0), Some(0.0));
}
