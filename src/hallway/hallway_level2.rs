// Hallway 2 definition
// Narrow vertical shaft on the left wing. Exits down into hallway 3.
use super::{Direction, EntryCorner, Exit, GhostSpawn, HallwayDesc, HallwayId};
use crate::geometry::{Rect, Vec2};

pub static HALLWAY2: HallwayDesc = HallwayDesc {
    id: HallwayId(2),
    bounds: Rect::new(100.0, 200.0, 100.0, 300.0),
    exit: Some(Exit { direction: Direction::Down, to: HallwayId(3) }),
    portal: Rect::new(130.0, 460.0, 40.0, 40.0),
    ghost: GhostSpawn {
        pos: Vec2::new(150.0, 300.0),
        size: 25.0,
        speed: 2.2,
        color: "rgba(220, 180, 255, 0.7)",
    },
    entry: EntryCorner::TopLeft,
};
