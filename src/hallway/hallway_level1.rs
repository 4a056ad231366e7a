// Hallway 1 definition
// Long corridor along the top of the school. Exits right into hallway 2.
use super::{Direction, EntryCorner, Exit, GhostSpawn, HallwayDesc, HallwayId};
use crate::geometry::{Rect, Vec2};

pub static HALLWAY1: HallwayDesc = HallwayDesc {
    id: HallwayId(1),
    bounds: Rect::new(100.0, 100.0, 600.0, 100.0),
    exit: Some(Exit { direction: Direction::Right, to: HallwayId(2) }),
    portal: Rect::new(650.0, 130.0, 40.0, 40.0),
    ghost: GhostSpawn {
        pos: Vec2::new(400.0, 150.0),
        size: 25.0,
        speed: 2.0,
        color: "rgba(200, 200, 255, 0.7)",
    },
    // Nobody enters hallway 1; the player spawns at `game::PLAYER_START`.
    entry: EntryCorner::TopLeft,
};
