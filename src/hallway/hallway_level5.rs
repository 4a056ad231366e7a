// Hallway 5 definition
// Final room with the school's way out. No exit: its portal wins the game.
use super::{EntryCorner, GhostSpawn, HallwayDesc, HallwayId};
use crate::geometry::{Rect, Vec2};

pub static HALLWAY5: HallwayDesc = HallwayDesc {
    id: HallwayId(5),
    bounds: Rect::new(300.0, 100.0, 200.0, 200.0),
    exit: None,
    portal: Rect::new(400.0, 180.0, 40.0, 40.0),
    ghost: GhostSpawn {
        pos: Vec2::new(350.0, 200.0),
        size: 25.0,
        speed: 3.0,
        color: "rgba(255, 255, 180, 0.7)",
    },
    entry: EntryCorner::TopLeft,
};
