// Hallway 3 definition
// Bottom corridor, walked right to left. Exits left into hallway 4.
use super::{Direction, EntryCorner, Exit, GhostSpawn, HallwayDesc, HallwayId};
use crate::geometry::{Rect, Vec2};

pub static HALLWAY3: HallwayDesc = HallwayDesc {
    id: HallwayId(3),
    bounds: Rect::new(200.0, 400.0, 500.0, 100.0),
    exit: Some(Exit { direction: Direction::Left, to: HallwayId(4) }),
    portal: Rect::new(200.0, 430.0, 40.0, 40.0),
    ghost: GhostSpawn {
        pos: Vec2::new(400.0, 450.0),
        size: 25.0,
        speed: 2.4,
        color: "rgba(255, 200, 200, 0.7)",
    },
    entry: EntryCorner::TopRight,
};
