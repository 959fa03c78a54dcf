//! Scene teardown through a bevy `World`.

use bevy_ecs::prelude::*;

use gameaction::action::{GameAction, Handler, RaiseType};
use gameaction::events::sceneteardown::{SceneTeardownEvent, scene_teardown_observer};
use gameaction::resources::destroysignal::DestroySignal;

fn make_world(signal: DestroySignal) -> World {
    let mut world = World::new();
    world.insert_non_send_resource(signal);
    world.add_observer(scene_teardown_observer);
    world.flush();
    world
}

fn teardown(world: &mut World, scene: &str) {
    world.trigger(SceneTeardownEvent {
        scene: scene.to_string(),
    });
}

#[test]
fn scene_teardown_clears_linked_actions() {
    let mut signal = DestroySignal::new();
    let jump: GameAction<(f32,)> = GameAction::new("Jump").linked_to(&mut signal);
    let hit: GameAction<(u32, u32)> =
        GameAction::with_raise("Hit", || {}, RaiseType::All).linked_to(&mut signal);
    jump.subscribe(&Handler::new("JumpHandler", |_: f32| {}));
    hit.subscribe(&Handler::new("HitHandler", |_: u32, _: u32| {}));

    let mut world = make_world(signal);
    teardown(&mut world, "level1");

    assert!(jump.is_empty());
    assert!(hit.is_empty());
    assert!(hit.has_pre_raise());
}

#[test]
fn scene_teardown_twice_is_noop() {
    let mut signal = DestroySignal::new();
    let jump: GameAction = GameAction::new("Jump").linked_to(&mut signal);
    jump.subscribe(&Handler::new("JumpHandler", || {}));

    let mut world = make_world(signal);
    teardown(&mut world, "level1");
    teardown(&mut world, "level1");

    assert!(jump.is_empty());
    assert_eq!(world.non_send_resource::<DestroySignal>().listener_count(), 1);
}

#[test]
fn scene_teardown_prunes_dropped_actions() {
    let mut signal = DestroySignal::new();
    let kept: GameAction = GameAction::new("Kept").linked_to(&mut signal);
    drop(GameAction::<()>::new("Gone").linked_to(&mut signal));

    let mut world = make_world(signal);
    teardown(&mut world, "level2");

    assert_eq!(world.non_send_resource::<DestroySignal>().listener_count(), 1);
    assert!(kept.is_empty());
}

#[test]
fn scene_teardown_without_signal_does_not_panic() {
    let mut world = World::new();
    world.add_observer(scene_teardown_observer);
    world.flush();
    teardown(&mut world, "empty");
}

#[test]
fn actions_linked_after_insert_are_torn_down() {
    let mut world = make_world(DestroySignal::new());
    let late: GameAction = {
        let mut signal = world.non_send_resource_mut::<DestroySignal>();
        GameAction::new("Late").linked_to(&mut signal)
    };
    late.subscribe(&Handler::new("LateHandler", || {}));

    teardown(&mut world, "level3");
    assert!(late.is_empty());
}
