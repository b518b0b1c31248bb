use mimosa_energy::config::DashboardConfig;
use mimosa_energy::{
    DashboardController, EntityId, EventController, EventFilter, EventKind, ScriptedSensor,
};

fn controller() -> (DashboardController, EventController) {
    let cfg = DashboardConfig::default();
    let mut c = DashboardController::with_source(&cfg, Box::new(ScriptedSensor::constant(1.0)));
    let events = EventController::new();
    c.set_event_controller(events.clone());
    (c, events)
}

#[test]
fn touch_emits_touch_then_sample_then_baseline_return() {
    let (mut c, events) = controller();
    let rx = events.subscribe(EventFilter::only(
        EventKind::TOUCH | EventKind::BASELINE_RETURN,
    ));

    c.touch(EntityId::SinglePlant);
    c.advance_to(3000);

    let kinds: Vec<EventKind> = rx.try_iter().map(|e| e.kinds).collect();
    assert_eq!(kinds, vec![EventKind::TOUCH, EventKind::BASELINE_RETURN]);
}

#[test]
fn sample_events_carry_stored_value() {
    let (mut c, events) = controller();
    let rx = events.subscribe(EventFilter::only(EventKind::SAMPLE));

    c.set_plant_count(EntityId::Custom, 4).unwrap();
    c.start(EntityId::Custom);

    let samples: Vec<_> = rx.try_iter().collect();
    assert_eq!(samples.len(), 2);
    assert!(samples.iter().all(|e| e.entity == Some(EntityId::Custom)));
    assert_eq!(samples[0].value, Some(2.0));
    assert_eq!(samples[1].value, Some(4.0));
}

#[test]
fn battery_full_fires_once() {
    let (mut c, events) = controller();
    let rx = events.subscribe(EventFilter::only(EventKind::BATTERY_FULL));

    // 45_000 per tick on top of the 10_000 start: full on the second tick.
    c.set_plant_count(EntityId::Custom, 90_000).unwrap();
    c.advance_to(10_000);

    let full: Vec<_> = rx.try_iter().collect();
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].at_ms, 2000);
}

#[test]
fn dropped_subscribers_are_pruned() {
    let (mut c, events) = controller();
    let rx = events.subscribe_all();
    assert_eq!(events.subscriber_count(), 1);
    drop(rx);
    c.touch(EntityId::HundredPlants);
    assert_eq!(events.subscriber_count(), 0);
}
