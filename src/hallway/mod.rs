//! Level data: the five hallways of the school, their portals, the ghost that
//! haunts each one and where the player appears on arrival.
//!
//! Each hallway lives in its own file (`hallway_levelN.rs`) as an immutable
//! `HallwayDesc`; [`hallways()`] returns them in play order.

use crate::geometry::{Rect, Vec2};

mod hallway_level1;
mod hallway_level2;
mod hallway_level3;
mod hallway_level4;
mod hallway_level5;

pub use hallway_level1::HALLWAY1;
pub use hallway_level2::HALLWAY2;
pub use hallway_level3::HALLWAY3;
pub use hallway_level4::HALLWAY4;
pub use hallway_level5::HALLWAY5;

pub const HALLWAY_COUNT: usize = 5;

/// Distance from the hallway wall used by entry corners.
pub const ENTRY_INSET: f64 = 20.0;
/// Inset from the far wall (leaves room for the player sprite plus margin).
pub const ENTRY_FAR_INSET: f64 = 60.0;

/// Hallway number, always within `1..=HALLWAY_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HallwayId(u8);

impl HallwayId {
    pub const FIRST: HallwayId = HallwayId(1);

    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n as usize <= HALLWAY_COUNT { Some(HallwayId(n)) } else { None }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in [`hallways()`].
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for HallwayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The single way out of a hallway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exit {
    pub direction: Direction,
    pub to: HallwayId,
}

/// Corner of a hallway where the player is placed when entering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryCorner {
    TopLeft,
    TopRight,
    BottomLeft,
}

/// Initial state of a hallway's ghost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GhostSpawn {
    pub pos: Vec2,
    pub size: f64,
    pub speed: f64,
    pub color: &'static str,
}

/// Hallway descriptor (immutable).
#[derive(Debug)]
pub struct HallwayDesc {
    pub id: HallwayId,
    pub bounds: Rect,
    pub exit: Option<Exit>, // None marks the final room
    pub portal: Rect,
    pub ghost: GhostSpawn,
    pub entry: EntryCorner,
}

impl HallwayDesc {
    /// Top-left position for a newly arrived player.
    pub fn entry_position(&self) -> Vec2 {
        let b = &self.bounds;
        match self.entry {
            EntryCorner::TopLeft => Vec2::new(b.x + ENTRY_INSET, b.y + ENTRY_INSET),
            EntryCorner::TopRight => Vec2::new(b.right() - ENTRY_FAR_INSET, b.y + ENTRY_INSET),
            EntryCorner::BottomLeft => Vec2::new(b.x + ENTRY_INSET, b.bottom() - ENTRY_FAR_INSET),
        }
    }

    pub fn is_final(&self) -> bool {
        self.exit.is_none()
    }
}

static HALLWAYS: [&HallwayDesc; HALLWAY_COUNT] =
    [&HALLWAY1, &HALLWAY2, &HALLWAY3, &HALLWAY4, &HALLWAY5];

/// All hallways in play order.
pub fn hallways() -> &'static [&'static HallwayDesc] {
    &HALLWAYS
}

pub fn hallway(id: HallwayId) -> &'static HallwayDesc {
    HALLWAYS[id.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hallway_id_rejects_out_of_range() {
        assert_eq!(HallwayId::new(0), None);
        assert_eq!(HallwayId::new(6), None);
        assert_eq!(HallwayId::new(5).map(HallwayId::get), Some(5));
    }

    #[test]
    fn lookup_matches_id() {
        for (i, h) in hallways().iter().enumerate() {
            assert_eq!(h.id.index(), i);
            assert!(std::ptr::eq(hallway(h.id), *h));
        }
    }

    #[test]
    fn entry_corners_follow_hallway_bounds() {
        assert_eq!(HALLWAY2.entry_position(), Vec2::new(120.0, 220.0));
        assert_eq!(HALLWAY3.entry_position(), Vec2::new(640.0, 420.0));
        assert_eq!(HALLWAY4.entry_position(), Vec2::new(120.0, 540.0));
        assert_eq!(HALLWAY5.entry_position(), Vec2::new(320.0, 120.0));
    }

    #[test]
    fn only_last_hallway_is_final() {
        let finals: Vec<u8> = hallways().iter().filter(|h| h.is_final()).map(|h| h.id.get()).collect();
        assert_eq!(finals, vec![5]);
    }
}
