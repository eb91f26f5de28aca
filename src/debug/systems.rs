//! Debug domain: hotkeys that mutate the motion config at runtime.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::{ActiveProfile, MotionProfiles};
use crate::core::GameplayPaused;
use crate::debug::state::{CHASING_RATE_STEP, DebugAction, DebugState, SPEED_STEP};
use crate::movement::{MotionController, Player};
use crate::sprites::AnimationStateChanged;

const PAUSE_SOURCE: &str = "debug";

/// Map Ctrl+key chords to debug actions.
pub(crate) fn read_debug_hotkeys(keyboard: &ButtonInput<KeyCode>) -> Vec<DebugAction> {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return Vec::new();
    }

    let bindings = [
        (KeyCode::KeyC, DebugAction::ToggleConstMove),
        (KeyCode::KeyV, DebugAction::ToggleChasing),
        (KeyCode::BracketLeft, DebugAction::ChasingRate(-CHASING_RATE_STEP)),
        (KeyCode::BracketRight, DebugAction::ChasingRate(CHASING_RATE_STEP)),
        (KeyCode::Minus, DebugAction::JumpSpeed(-SPEED_STEP)),
        (KeyCode::Equal, DebugAction::JumpSpeed(SPEED_STEP)),
        (KeyCode::Comma, DebugAction::MoveSpeed(-SPEED_STEP)),
        (KeyCode::Period, DebugAction::MoveSpeed(SPEED_STEP)),
        (KeyCode::KeyN, DebugAction::NextProfile),
        (KeyCode::KeyP, DebugAction::TogglePause),
        (KeyCode::KeyT, DebugAction::ToggleAnimationTrace),
        (KeyCode::KeyL, DebugAction::LogState),
    ];

    bindings
        .into_iter()
        .filter(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, action)| action)
        .collect()
}

/// Apply one action to a controller. Returns a status line for the log.
pub(crate) fn apply_to_controller(
    action: DebugAction,
    controller: &mut MotionController,
) -> Option<String> {
    let config = *controller.config();
    let result = match action {
        DebugAction::ToggleConstMove => {
            controller.set_const_move(!config.const_move);
            Ok(())
        }
        DebugAction::ToggleChasing => {
            controller.set_chasing(!config.chasing);
            Ok(())
        }
        DebugAction::ChasingRate(delta) => controller.set_chasing_rate(config.chasing_rate + delta),
        DebugAction::JumpSpeed(delta) => {
            controller.set_jump_speed((config.jump_speed + delta).max(0.0))
        }
        DebugAction::MoveSpeed(delta) => {
            controller.set_move_speed((config.move_speed + delta).max(0.0))
        }
        _ => return None,
    };

    Some(match result {
        Ok(()) => format!("{:?} -> {:?}", action, controller.config()),
        Err(e) => format!("{:?} rejected: {}", action, e),
    })
}

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut paused: ResMut<GameplayPaused>,
    profiles: Option<Res<MotionProfiles>>,
    mut active: ResMut<ActiveProfile>,
    mut player_query: Query<&mut MotionController, With<Player>>,
) {
    for action in read_debug_hotkeys(&keyboard) {
        match action {
            DebugAction::TogglePause => {
                let now_paused = paused.toggle(PAUSE_SOURCE);
                info!("[DEBUG] Pause {}", if now_paused { "ON" } else { "OFF" });
            }
            DebugAction::ToggleAnimationTrace => {
                debug_state.trace_animation = !debug_state.trace_animation;
                info!("[DEBUG] Animation trace {}", debug_state.trace_animation);
            }
            DebugAction::NextProfile => {
                let Some(profiles) = profiles.as_deref() else {
                    warn!("[DEBUG] No motion profiles loaded");
                    continue;
                };
                let next = match active.id.as_deref() {
                    Some(id) => profiles.next_after(id),
                    None => profiles.first(),
                };
                let Some(next) = next else {
                    continue;
                };
                for mut controller in &mut player_query {
                    if let Err(e) = controller.set_config(next.motion) {
                        warn!("[DEBUG] Profile '{}' rejected: {}", next.id, e);
                    }
                }
                info!("[DEBUG] Switched to motion profile '{}'", next.id);
                active.id = Some(next.id.clone());
            }
            DebugAction::LogState => {
                for controller in &player_query {
                    info!(
                        "[DEBUG] jumps={}, held={}, contacts={:?}, anim={:?}, facing={:?}, config={:?}",
                        controller.jump_count(),
                        controller.jump_held(),
                        controller.contacts(),
                        controller.anim(),
                        controller.facing(),
                        controller.config()
                    );
                }
            }
            _ => {
                for mut controller in &mut player_query {
                    if let Some(status) = apply_to_controller(action, &mut controller) {
                        info!("[DEBUG] {}", status);
                    }
                }
            }
        }
    }
}

pub(crate) fn trace_animation_changes(
    debug_state: Res<DebugState>,
    mut changes: MessageReader<AnimationStateChanged>,
) {
    for change in changes.read() {
        if debug_state.trace_animation {
            info!(
                "[DEBUG] {:?} animation {:?} -> {:?}",
                change.entity, change.from, change.to
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::MotionConfig;

    fn controller() -> MotionController {
        MotionController::new(MotionConfig::default()).expect("default config is valid")
    }

    #[test]
    fn hotkeys_need_ctrl() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyC);
        assert!(read_debug_hotkeys(&keyboard).is_empty());

        keyboard.press(KeyCode::ControlLeft);
        keyboard.clear();
        keyboard.press(KeyCode::KeyV);
        assert_eq!(read_debug_hotkeys(&keyboard), vec![DebugAction::ToggleChasing]);
    }

    #[test]
    fn toggles_flip_runtime_config() {
        let mut controller = controller();
        apply_to_controller(DebugAction::ToggleConstMove, &mut controller);
        apply_to_controller(DebugAction::ToggleChasing, &mut controller);
        assert!(controller.config().const_move);
        assert!(controller.config().chasing);
    }

    #[test]
    fn speed_steps_clamp_at_zero() {
        let mut controller = controller();
        for _ in 0..10 {
            apply_to_controller(DebugAction::MoveSpeed(-SPEED_STEP), &mut controller);
        }
        assert_eq!(controller.config().move_speed, 0.0);

        apply_to_controller(DebugAction::JumpSpeed(SPEED_STEP), &mut controller);
        assert_eq!(controller.config().jump_speed, 7.0 + SPEED_STEP);
    }

    #[test]
    fn non_controller_actions_are_skipped() {
        let mut controller = controller();
        assert!(apply_to_controller(DebugAction::TogglePause, &mut controller).is_none());
    }
}
