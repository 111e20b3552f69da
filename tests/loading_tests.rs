// Host-side tests for asset loading, the readiness latch and the overlay.

mod common;

use common::*;
use idol_core::constants::*;
use idol_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn progress_is_published_per_asset() {
    let mut s = session(3);
    for i in 0..3 {
        s.handle(Signal::AssetLoaded(AssetId(i)), ms(10 * i as u64));
    }
    assert_eq!(s.host().progress(), vec![33, 66, 100]);
    assert_eq!(s.load_state().loaded_assets, 3);
    assert!(!s.load_state().ready);
}

#[test]
fn extra_completions_never_pass_the_total() {
    let mut s = session(2);
    for _ in 0..4 {
        s.handle(Signal::AssetLoaded(AssetId(0)), ms(0));
    }
    let state = s.load_state();
    assert_eq!(state.loaded_assets, 2);
    assert!(state.loaded_assets <= state.total_assets);
    assert_eq!(s.host().progress(), vec![50, 100, 100, 100]);
}

#[test]
fn two_asset_scenario_runs_in_order() {
    let mut s = session(2);
    s.handle(Signal::AssetLoaded(AssetId(0)), ms(20));
    s.handle(Signal::AssetLoaded(AssetId(1)), ms(40));
    assert_eq!(s.host().progress(), vec![50, 100]);

    s.handle(Signal::SceneLoaded, ms(100));
    assert!(s.load_state().ready);

    // settle delay not over yet
    s.tick(ms(100) + SETTLE_DELAY - ms(1));
    assert_eq!(s.host().count(|c| matches!(c, Call::OverlayOpacity(_))), 0);
    assert!(s.host().mounted().is_empty());

    s.tick(ms(100) + SETTLE_DELAY);
    assert!(s.host().calls.contains(&Call::OverlayOpacity(0.0)));
    assert_eq!(
        s.host().mounted(),
        vec![(NotificationKind::Info, MSG_LOADED.to_string())]
    );
    assert!(!s.host().calls.contains(&Call::OverlayRemoved));

    s.tick(ms(100) + SETTLE_DELAY + OVERLAY_REMOVE_DELAY - ms(1));
    assert!(!s.host().calls.contains(&Call::OverlayRemoved));
    s.tick(ms(100) + SETTLE_DELAY + OVERLAY_REMOVE_DELAY);
    assert!(s.host().calls.contains(&Call::OverlayRemoved));

    let fade_at = ms(100) + SETTLE_DELAY;
    let opacity = s
        .host()
        .calls
        .iter()
        .position(|c| *c == Call::OverlayOpacity(0.0));
    let removed = s.host().calls.iter().position(|c| *c == Call::OverlayRemoved);
    assert!(opacity < removed);
    assert_eq!(s.notifications()[0].created_at, fade_at);
}

#[test]
fn late_tick_keeps_the_timeline() {
    // one tick long after everything was due still runs each step once
    let mut s = session(1);
    s.handle(Signal::SceneLoaded, ms(0));
    s.tick(ms(60_000));
    let h = s.host();
    assert_eq!(h.count(|c| matches!(c, Call::OverlayOpacity(_))), 1);
    assert_eq!(h.count(|c| *c == Call::OverlayRemoved), 1);
    assert_eq!(h.count(|c| matches!(c, Call::Unmount(_))), 1);
    assert!(s.notifications().is_empty());
}

#[test]
fn readiness_fires_exactly_once() {
    let mut s = session(1);
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    s.on_ready(move || *h.borrow_mut() += 1);

    for t in [0, 5, 500, 1500] {
        s.handle(Signal::SceneLoaded, ms(t));
    }
    s.tick(ms(10_000));

    assert_eq!(*hits.borrow(), 1);
    let host = s.host();
    assert_eq!(host.count(|c| matches!(c, Call::OverlayOpacity(_))), 1);
    assert_eq!(host.count(|c| *c == Call::OverlayRemoved), 1);
    assert_eq!(
        host.mounted()
            .iter()
            .filter(|(_, m)| m == MSG_LOADED)
            .count(),
        1
    );
}

#[test]
fn ready_hooks_fire_in_attachment_order() {
    let mut s = session(0);
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in ["tracker", "interaction", "layout"] {
        let o = order.clone();
        s.on_ready(move || o.borrow_mut().push(tag));
    }
    s.handle(Signal::SceneLoaded, ms(0));
    assert_eq!(*order.borrow(), vec!["tracker", "interaction", "layout"]);

    // late subscribers run straight away
    let o = order.clone();
    s.on_ready(move || o.borrow_mut().push("late"));
    assert_eq!(order.borrow().last(), Some(&"late"));
}

#[test]
fn model_error_is_surfaced_and_not_retried() {
    let mut s = session(2);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    s.on_error(move |f| sink.borrow_mut().push(f.kind));

    s.handle(Signal::ModelError("404 idol.glb".into()), ms(30));
    assert_eq!(s.host().errors(), vec![MSG_MODEL_ERROR.to_string()]);
    assert_eq!(*seen.borrow(), vec![FailureKind::FatalLoad]);

    // nothing is retried: no scene commands, no timers besides the message
    s.tick(ms(30) + ERROR_DISPLAY + NOTIFICATION_FADE);
    assert!(s.notifications().is_empty());
    assert_eq!(s.pending_timers(), 0);
    assert_eq!(s.host().count(|c| matches!(c, Call::Apply(..))), 0);
}

#[test]
fn missing_object_is_fatal_and_leaves_interaction_off() {
    let host = FakeHost {
        entities: vec![],
        ..Default::default()
    };
    let mut s = session_with(host, SessionConfig::default(), 1);
    s.handle(Signal::SceneLoaded, ms(0));
    assert_eq!(s.host().errors(), vec![MSG_MODEL_MISSING.to_string()]);
    assert!(!s.interaction().is_armed());

    s.handle(Signal::ObjectClicked, ms(10));
    s.handle(Signal::Resized, ms(20));
    assert_eq!(s.host().count(|c| matches!(c, Call::Apply(..))), 0);
    assert_eq!(s.host().plays(Track::Background), 0);
}

#[test]
fn startup_readiness_then_late_loaded_event_reveals_once() {
    // scene reported loaded at startup, before any asset listener fired
    let mut s = session(2);
    let hits = Rc::new(RefCell::new(0));
    s.handle(Signal::SceneLoaded, ms(0));
    let h = hits.clone();
    s.on_ready(move || *h.borrow_mut() += 1);
    assert_eq!(*hits.borrow(), 1);

    // the engine's own `loaded` event still arrives afterwards
    s.handle(Signal::SceneLoaded, ms(40));
    s.tick(ms(10_000));
    assert_eq!(*hits.borrow(), 1);
    assert!(s.interaction().is_armed());
    assert_eq!(s.host().count(|c| *c == Call::OverlayRemoved), 1);
    assert_eq!(s.host().positions(Entity::Object).len(), 1);
}
