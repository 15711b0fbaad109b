//! Variable-delta simulation stepping
//!
//! Each frame's elapsed time is consumed in sub-steps no longer than
//! `max_step`, and short enough that the actor moves at most
//! `max_substep_travel` at its current speed. Within a sub-step: kinematics
//! first, then world contacts, then at most one pickup, then the clamp.

use super::collision;
use super::state::{GameEvent, GameState};
use crate::consts::COLLECTIBLE_SCORE;

/// Length of the next sub-step given the time still to consume
pub fn substep_length(state: &GameState, remaining: f32) -> f32 {
    let settings = &state.settings;
    let mut step = remaining.min(settings.max_step);

    let vel = state.actor.vel;
    let max_speed = vel.x.abs().max(vel.y.abs());
    if max_speed > 0.0 {
        step = step.min(settings.max_substep_travel / max_speed);
    }
    step
}

/// Consume `delta` seconds of simulated time, returning the sub-step count
///
/// The budget is tracked in `f64` so long frames still drain. A budget too
/// large for a sub-step to reduce is dropped with a warning.
pub fn advance(state: &mut GameState, delta: f64) -> u32 {
    let mut remaining = delta;
    let mut count = 0;

    while remaining > 0.0 {
        let budget = remaining as f32;
        if !(budget > 0.0) {
            // Below f32 resolution
            break;
        }
        let step = substep_length(state, budget);
        if !(step > 0.0) {
            log::warn!(
                "Sub-step collapsed (velocity {:?}); dropping {:.4}s",
                state.actor.vel,
                remaining
            );
            break;
        }

        // The last sub-step takes whatever is left, rounding included
        let left = if step >= budget {
            0.0
        } else {
            remaining - step as f64
        };
        if left >= remaining {
            log::warn!("Frame of {:e}s cannot be sub-stepped; dropping it", remaining);
            break;
        }

        substep(state, step);
        remaining = left;
        count += 1;
    }

    if count > 0 {
        log::trace!("Advanced {:.4}s in {} sub-steps", delta, count);
    }
    count
}

/// One bounded integration step followed by collision resolution
pub fn substep(state: &mut GameState, step: f32) {
    state.actor.advance(step);
    state.world.advance(step);

    resolve_world(state);
    collect(state);
    clamp_to_field(state);

    state.time += step as f64;
    state.substeps += 1;
}

/// Push the actor out of every solid shape it overlaps
fn resolve_world(state: &mut GameState) {
    let GameState {
        actor,
        world,
        events,
        ..
    } = state;

    let mut supported = false;
    for shape in &world.shapes {
        if !shape.is_solid() {
            continue;
        }
        let contact = collision::test(actor.polygon(), &shape.polygon);
        if !contact.overlap {
            continue;
        }

        actor.set_pos(actor.pos() + contact.correction());

        let n = contact.normal;
        if n.x != 0.0 {
            actor.vel.x = 0.0;
        }
        if n.y != 0.0 {
            if n.y < 0.0 && actor.vel.y > 0.0 {
                log::debug!("Bumped head on shape {}", shape.id);
                events.push(GameEvent::Bumped { shape_id: shape.id });
            }
            actor.vel.y = 0.0;
        }
        if n.y > 0.0 {
            if !actor.standing {
                log::debug!("Landed on shape {} at {:?}", shape.id, actor.pos());
                events.push(GameEvent::Landed { shape_id: shape.id });
            }
            actor.land();
            supported = true;
        }

        actor.advance(0.0);
    }

    if !supported {
        actor.standing = false;
    }
}

/// Consume the first collectible the actor touches, if any
fn collect(state: &mut GameState) {
    let actor = state.actor.polygon();
    let hit = state
        .world
        .collectibles
        .iter()
        .position(|c| collision::test(actor, &c.polygon).overlap);

    if let Some(index) = hit {
        let taken = state.world.take_collectible(index);
        state.actor.score += COLLECTIBLE_SCORE;
        log::debug!(
            "Collected {} ({:?}), score {}",
            taken.id,
            taken.shape,
            state.actor.score
        );
        state.events.push(GameEvent::Collected {
            id: taken.id,
            shape: taken.shape,
            score: state.actor.score,
        });
    }
}

/// Keep the actor inside the horizontal play-field bounds
fn clamp_to_field(state: &mut GameState) {
    let min_x = state.settings.field_min_x;
    let max_x = state.settings.field_max_x;
    let mut pos = state.actor.pos();
    if pos.x < min_x {
        pos.x = min_x;
    } else if pos.x > max_x {
        pos.x = max_x;
    } else {
        return;
    }
    state.actor.set_pos(pos);
}

/// Frame driver: turns monotonic clock readings into simulated time
#[derive(Debug, Clone, Default)]
pub struct Stepper {
    last_time: Option<f64>,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stepper whose clock starts at `now`
    pub fn starting_at(now: f64) -> Self {
        Self {
            last_time: Some(now),
        }
    }

    /// Last clock reading consumed
    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }

    /// Advance the state by the time elapsed since the previous call
    ///
    /// `now` is a monotonic clock reading in seconds. The first reading only
    /// starts the clock. Non-finite readings are ignored. Returns the number
    /// of sub-steps taken.
    pub fn frame(&mut self, state: &mut GameState, now: f64) -> u32 {
        if !now.is_finite() {
            log::warn!("Non-finite clock reading {}; ignoring frame", now);
            return 0;
        }
        let Some(last) = self.last_time else {
            self.last_time = Some(now);
            return 0;
        };

        let delta = now - last;
        if delta < 0.0 {
            log::warn!("Clock went backwards by {:.4}s; ignoring frame", -delta);
            return 0;
        }
        self.last_time = Some(now);
        advance(state, delta)
    }
}
