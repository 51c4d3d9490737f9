//! Integration tests: a fake host loop driving monitors on pooled objects.

use std::cell::RefCell;
use std::rc::Rc;

use uniprep_core::{from_fn, InstanceId, InstancePool};
use uniprep_monitor::{HookPoint, MonitorRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Collider {
    layer: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Collision {
    impulse: u32,
}

#[test]
fn test_host_loop_drives_every_monitor() {
    let ticks = Rc::new(RefCell::new(Vec::new()));
    let mut registry: MonitorRegistry<u32, Collider, Collision> = MonitorRegistry::new();

    for object in 1..=3 {
        let log = Rc::clone(&ticks);
        registry.add_monitor(object).handle_update(move || log.borrow_mut().push(object));
    }
    // Attached but silent
    registry.add_monitor(4);

    assert_eq!(registry.dispatch_update(), 3);
    assert_eq!(registry.dispatch_fixed_update(), 0);

    let mut seen = ticks.borrow().clone();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_physics_events_reach_only_their_object() {
    let hits = Rc::new(RefCell::new(Vec::new()));
    let mut registry: MonitorRegistry<u32, Collider, Collision> = MonitorRegistry::new();

    let log = Rc::clone(&hits);
    registry
        .add_monitor(10)
        .handle_collision_enter(move |c| log.borrow_mut().push((10, c.impulse)));
    let log = Rc::clone(&hits);
    registry
        .add_monitor(20)
        .handle_collision_enter(move |c| log.borrow_mut().push((20, c.impulse)));

    assert!(registry.collision_enter(&20, &Collision { impulse: 5 }));
    assert!(!registry.trigger_enter(&20, &Collider { layer: 1 }));
    assert!(!registry.collision_enter(&30, &Collision { impulse: 9 }));

    assert_eq!(*hits.borrow(), vec![(20, 5)]);
}

#[test]
fn test_resubscribing_recycled_object() {
    // Pooled bullets keep their monitor across reuse; the new owner rebinds.
    let mut next = 0_u32;
    let mut bullets = InstancePool::new(from_fn(move || {
        next += 1;
        next
    }));
    let mut registry: MonitorRegistry<InstanceId, Collider, Collision> = MonitorRegistry::new();
    let owners = Rc::new(RefCell::new(Vec::new()));

    let bullet = bullets.get();
    let log = Rc::clone(&owners);
    registry
        .add_monitor(bullet)
        .handle_trigger_enter(move |c| log.borrow_mut().push(("player", c.layer)));
    assert!(registry.trigger_enter(&bullet, &Collider { layer: 2 }));
    bullets.free(bullet);

    let reused = bullets.get();
    assert_eq!(reused, bullet);
    let log = Rc::clone(&owners);
    registry
        .add_monitor(reused)
        .handle_trigger_enter(move |c| log.borrow_mut().push(("enemy", c.layer)));
    assert!(registry.trigger_enter(&reused, &Collider { layer: 3 }));

    assert_eq!(registry.len(), 1);
    assert_eq!(*owners.borrow(), vec![("player", 2), ("enemy", 3)]);
}

#[test]
fn test_evicted_object_drops_its_monitor() {
    let mut bullets = InstancePool::new(from_fn(|| 0_u8));
    let mut registry: MonitorRegistry<InstanceId, Collider, Collision> = MonitorRegistry::new();

    let bullet = bullets.get();
    registry.add_monitor(bullet).handle_update(|| {});
    bullets.free(bullet);

    assert_eq!(bullets.remove(bullet), Some(0));
    let monitor = registry.remove(&bullet).unwrap();
    assert!(monitor.is_subscribed(HookPoint::Update));
    assert!(registry.is_empty());
    assert_eq!(registry.dispatch_update(), 0);
}
