//! Per-frame simulation: player movement, ghost pursuit, portal transitions
//! and the win/lose conditions.
//!
//! Everything here is deterministic given the intent sequence and the RNG,
//! so a single tick can be replayed in tests without a browser.

use rand::Rng;

use crate::geometry::{Rect, Vec2, center, circles_overlap, clamp_square};
use crate::hallway::{GhostSpawn, HallwayDesc, HallwayId, hallway, hallways};
use crate::input::Intent;

pub const PLAYER_START: Vec2 = Vec2::new(150.0, 150.0);
pub const PLAYER_SIZE: f64 = 32.0;
pub const PLAYER_SPEED: f64 = 5.0;

/// Ghosts closer than this stop moving (avoids jitter on top of the player).
pub const GHOST_MIN_STEP_DISTANCE: f64 = 2.0;
/// Relocated ghosts try to land at least this far from the player.
pub const GHOST_SAFE_DISTANCE: f64 = 150.0;
/// Samples checked against [`GHOST_SAFE_DISTANCE`] before giving up.
pub const GHOST_RELOCATION_ATTEMPTS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Won,
    Lost,
}

/// What happened during one [`step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// Game already over; nothing was updated.
    Idle,
    Moved,
    Entered(HallwayId),
    Won,
    Lost,
}

impl StepEvent {
    pub fn is_terminal(self) -> bool {
        matches!(self, StepEvent::Won | StepEvent::Lost)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: f64,
    pub speed: f64,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, size: PLAYER_SIZE, speed: PLAYER_SPEED }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        center(self.pos, self.size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ghost {
    pub pos: Vec2,
    pub size: f64,
    pub speed: f64,
    pub color: &'static str,
}

impl From<&GhostSpawn> for Ghost {
    fn from(spawn: &GhostSpawn) -> Self {
        Self { pos: spawn.pos, size: spawn.size, speed: spawn.speed, color: spawn.color }
    }
}

impl Ghost {
    /// Move one step straight towards `target` and stay inside `bounds`.
    fn chase(&mut self, target: Vec2, bounds: &Rect) {
        let to_target = target - self.pos;
        if to_target.length() <= GHOST_MIN_STEP_DISTANCE {
            return;
        }
        if let Some(dir) = to_target.normalized() {
            self.pos = clamp_square(self.pos + dir * self.speed, self.size, bounds);
        }
    }
}

/// Runtime game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub hallway: HallwayId,
    pub phase: Phase,
    pub player: Player,
    ghosts: Vec<Ghost>, // one per hallway, indexed by HallwayId::index
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            hallway: HallwayId::FIRST,
            phase: Phase::Active,
            player: Player::new(PLAYER_START),
            ghosts: hallways().iter().map(|h| Ghost::from(&h.ghost)).collect(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn current_hallway(&self) -> &'static HallwayDesc {
        hallway(self.hallway)
    }

    /// The only ghost that is drawn and dangerous.
    pub fn active_ghost(&self) -> &Ghost {
        &self.ghosts[self.hallway.index()]
    }

    pub fn ghost(&self, id: HallwayId) -> &Ghost {
        &self.ghosts[id.index()]
    }

    pub fn ghost_mut(&mut self, id: HallwayId) -> &mut Ghost {
        &mut self.ghosts[id.index()]
    }

    /// Switch to `to`, placing the player at its entry corner and moving its
    /// ghost away from them.
    pub fn enter_hallway<R: Rng + ?Sized>(&mut self, to: HallwayId, rng: &mut R) {
        self.hallway = to;
        let hall = hallway(to);
        self.player.pos = hall.entry_position();
        let player_pos = self.player.pos;
        let ghost = &mut self.ghosts[to.index()];
        let span_x = (hall.bounds.width - ghost.size).max(0.0);
        let span_y = (hall.bounds.height - ghost.size).max(0.0);
        ghost.pos = ghost_spawn_point(player_pos, || {
            Vec2::new(
                hall.bounds.x + rng.gen_range(0.0..1.0) * span_x,
                hall.bounds.y + rng.gen_range(0.0..1.0) * span_y,
            )
        });
    }
}

/// Pick a ghost position from `sample`, preferring one at least
/// [`GHOST_SAFE_DISTANCE`] from `player`.
///
/// At most [`GHOST_RELOCATION_ATTEMPTS`] samples are checked; if all of them
/// are too close one more sample is taken and used as is.
pub fn ghost_spawn_point<F>(player: Vec2, mut sample: F) -> Vec2
where
    F: FnMut() -> Vec2,
{
    for _attempt in 0..GHOST_RELOCATION_ATTEMPTS {
        let candidate = sample();
        if candidate.distance(player) >= GHOST_SAFE_DISTANCE {
            return candidate;
        }
    }
    log::debug!("no ghost spawn point {GHOST_SAFE_DISTANCE} away from the player, using fallback");
    sample()
}

/// Advance the simulation by one frame.
pub fn step<R: Rng + ?Sized>(state: &mut GameState, intent: Intent, rng: &mut R) -> StepEvent {
    if !state.is_active() {
        return StepEvent::Idle;
    }

    let mut event = StepEvent::Moved;
    let hall = state.current_hallway();
    let player = &mut state.player;
    let moved = player.pos + Vec2::new(f64::from(intent.dx), f64::from(intent.dy)) * player.speed;
    player.pos = clamp_square(moved, player.size, &hall.bounds);

    if player.rect().overlaps(&hall.portal) {
        match hall.exit {
            Some(exit) => {
                state.enter_hallway(exit.to, rng);
                event = StepEvent::Entered(exit.to);
            }
            None => {
                state.phase = Phase::Won;
                return StepEvent::Won;
            }
        }
    }

    let hall = state.current_hallway();
    let player_pos = state.player.pos;
    let player_size = state.player.size;
    let ghost = state.ghost_mut(hall.id);
    ghost.chase(player_pos, &hall.bounds);

    if circles_overlap(player_pos, player_size, ghost.pos, ghost.size) {
        state.phase = Phase::Lost;
        return StepEvent::Lost;
    }
    event
}
