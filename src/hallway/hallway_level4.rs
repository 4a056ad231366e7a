// Hallway 4 definition
// Wide stairwell, climbed from the bottom. Exits up into hallway 5.
use super::{Direction, EntryCorner, Exit, GhostSpawn, HallwayDesc, HallwayId};
use crate::geometry::{Rect, Vec2};

pub static HALLWAY4: HallwayDesc = HallwayDesc {
    id: HallwayId(4),
    bounds: Rect::new(100.0, 200.0, 200.0, 400.0),
    exit: Some(Exit { direction: Direction::Up, to: HallwayId(5) }),
    portal: Rect::new(130.0, 200.0, 40.0, 40.0),
    ghost: GhostSpawn {
        pos: Vec2::new(150.0, 300.0),
        size: 25.0,
        speed: 2.6,
        color: "rgba(180, 255, 200, 0.7)",
    },
    entry: EntryCorner::BottomLeft,
};
