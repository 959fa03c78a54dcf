//! Scene teardown event and observer.
//!
//! Triggering a [`SceneTeardownEvent`] fires the world's [`DestroySignal`],
//! clearing the subscribers of every action linked to it. The signal is a
//! non-send resource because actions and their handlers are `!Send`.
//!
//! ```ignore
//! world.insert_non_send_resource(DestroySignal::new());
//! world.add_observer(scene_teardown_observer);
//! world.trigger(SceneTeardownEvent { scene: "level1".into() });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::destroysignal::DestroySignal;

/// Event emitted when a scene is unloaded.
#[derive(Event, Debug, Clone)]
pub struct SceneTeardownEvent {
    /// Name of the scene being torn down.
    pub scene: String,
}

/// Observer that fires the [`DestroySignal`] non-send resource.
pub fn scene_teardown_observer(
    trigger: On<SceneTeardownEvent>,
    signal: Option<NonSendMut<DestroySignal>>,
) {
    let scene = &trigger.event().scene;
    match signal {
        Some(mut signal) => {
            info!("Tearing down scene '{}'", scene);
            signal.fire();
        }
        None => warn!(
            "SceneTeardownEvent for '{}' but no DestroySignal resource is present",
            scene
        ),
    }
}
