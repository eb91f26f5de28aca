//! Movement domain: frame input and fixed-step motion systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{Facing, JumpTriggered, MotionController, MovementInput, PhysicsStep, Player};
use crate::sprites::AnimatorParams;

/// Feed the frame's input snapshot to every player's controller.
pub(crate) fn apply_frame_input(
    input: Res<MovementInput>,
    mut query: Query<(Entity, &mut MotionController), With<Player>>,
    mut jump_events: MessageWriter<JumpTriggered>,
) {
    for (entity, mut controller) in &mut query {
        let output = controller.on_frame(&input);

        if output.jump_triggered {
            jump_events.write(JumpTriggered {
                entity,
                jumps_remaining: controller.jump_count(),
            });
        }
    }
}

/// Run one motion step per fixed tick and write the result to the body.
pub(crate) fn step_motion(
    time: Res<Time>,
    gravity: Res<Gravity>,
    mut query: Query<(
        &mut MotionController,
        &mut LinearVelocity,
        Option<&mut AnimatorParams>,
    )>,
) {
    let dt = time.delta_secs();

    for (mut controller, mut velocity, animator) in &mut query {
        let output = controller.on_physics_step(&PhysicsStep {
            velocity: velocity.0,
            gravity: gravity.0,
            dt,
        });

        velocity.0 = output.velocity;

        if let Some(mut animator) = animator {
            animator.set_if_neq(AnimatorParams {
                state: output.anim,
                speed: output.speed,
            });
        }
    }
}

/// Mirror the sprite when the controller's facing changes.
pub(crate) fn sync_facing(
    mut query: Query<(&MotionController, &mut Sprite), Changed<MotionController>>,
) {
    for (controller, mut sprite) in &mut query {
        let flip = controller.facing() == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
