//! Frame rendering. [`render_frame`] is a read-only pass over the game state
//! that issues draw calls against a [`Surface`]; the browser implements it
//! with a 2D canvas context.

use crate::game::{GameState, Ghost};
use crate::geometry::{Rect, Vec2, center};

pub const HALLWAY_COLOR: &str = "#f0f0f0";
pub const PORTAL_COLOR: &str = "#e63946";
pub const PLAYER_FALLBACK_COLOR: &str = "#2c3e50";
pub const EYE_COLOR: &str = "white";
pub const PUPIL_COLOR: &str = "black";
pub const HUD_COLOR: &str = "black";
pub const HUD_FONT: &str = "20px Arial";
pub const HUD_POS: Vec2 = Vec2::new(20.0, 30.0);

/// Points on the wavy hem between its two shoulders.
const HEM_SEGMENTS: usize = 4;

/// Drawing capability used by the renderer.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn fill_ellipse(&mut self, shape: Ellipse, color: &str);
    fn fill_polygon(&mut self, points: &[Vec2], color: &str);
    /// Draw the player sprite into `rect`; false if it is not loaded yet.
    fn draw_sprite(&mut self, rect: Rect) -> bool;
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn circle(center: Vec2, r: f64) -> Self {
        Self { center, rx: r, ry: r }
    }
}

/// Procedural ghost geometry for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GhostShape {
    pub float_offset: f64,
    pub body: Ellipse,
    pub hem: Vec<Vec2>,
    pub eyes: [Ellipse; 2],
    pub pupils: [Ellipse; 2],
}

impl GhostShape {
    pub fn compute(ghost: &Ghost, look_at: Vec2, now_ms: f64) -> Self {
        let (x, y, s) = (ghost.pos.x, ghost.pos.y, ghost.size);
        let float = (now_ms / 200.0).sin() * 3.0;

        let body = Ellipse {
            center: Vec2::new(x + s / 2.0, y + s / 2.0 + float),
            rx: s / 2.0,
            ry: s / 1.5,
        };

        let mut hem = Vec::with_capacity(HEM_SEGMENTS + 3);
        hem.push(Vec2::new(x, y + s / 1.2 + float));
        for i in 0..=HEM_SEGMENTS {
            let wave = (i as f64 + now_ms / 300.0).sin() * 5.0;
            hem.push(Vec2::new(x + s / HEM_SEGMENTS as f64 * i as f64, y + s + wave + float));
        }
        hem.push(Vec2::new(x + s, y + s / 1.2 + float));

        // Eye anchors without the float: pupils track the player, not the bob.
        let anchors = [Vec2::new(x + s / 3.0, y + s / 2.0), Vec2::new(x + s * 2.0 / 3.0, y + s / 2.0)];
        let bob = Vec2::new(0.0, float);
        let eyes = anchors.map(|a| Ellipse::circle(a + bob, s / 6.0));
        let pupil_offset = s / 12.0;
        let pupils = anchors.map(|a| {
            let angle = (look_at.y - a.y).atan2(look_at.x - a.x);
            let shift = Vec2::new(angle.cos(), angle.sin()) * pupil_offset;
            Ellipse::circle(a + shift + bob, s / 12.0)
        });

        Self { float_offset: float, body, hem, eyes, pupils }
    }
}

pub fn draw_ghost(surface: &mut impl Surface, ghost: &Ghost, look_at: Vec2, now_ms: f64) {
    let shape = GhostShape::compute(ghost, look_at, now_ms);
    surface.fill_ellipse(shape.body, ghost.color);
    surface.fill_polygon(&shape.hem, ghost.color);
    for eye in shape.eyes {
        surface.fill_ellipse(eye, EYE_COLOR);
    }
    for pupil in shape.pupils {
        surface.fill_ellipse(pupil, PUPIL_COLOR);
    }
}

pub fn hud_label(state: &GameState) -> String {
    format!("Hallway {}", state.hallway)
}

/// Draw one frame: hallway, portal, ghost, player, HUD.
pub fn render_frame(surface: &mut impl Surface, state: &GameState, now_ms: f64) {
    let hall = state.current_hallway();
    surface.clear();
    surface.fill_rect(hall.bounds, HALLWAY_COLOR);
    surface.fill_rect(hall.portal, PORTAL_COLOR);

    let player = &state.player;
    draw_ghost(surface, state.active_ghost(), center(player.pos, player.size), now_ms);

    let player_rect = player.rect();
    if !surface.draw_sprite(player_rect) {
        surface.fill_rect(player_rect, PLAYER_FALLBACK_COLOR);
    }

    surface.fill_text(&hud_label(state), HUD_POS, HUD_FONT, HUD_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hallway::HallwayId;
    use std::f64::consts::PI;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Rect(Rect, String),
        Ellipse(Ellipse, String),
        Polygon(usize, String),
        Sprite(Rect),
        Text(String),
    }

    #[derive(Default)]
    struct Recorder {
        sprite_loaded: bool,
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn fill_rect(&mut self, rect: Rect, color: &str) {
            self.ops.push(Op::Rect(rect, color.to_string()));
        }
        fn fill_ellipse(&mut self, shape: Ellipse, color: &str) {
            self.ops.push(Op::Ellipse(shape, color.to_string()));
        }
        fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
            self.ops.push(Op::Polygon(points.len(), color.to_string()));
        }
        fn draw_sprite(&mut self, rect: Rect) -> bool {
            if self.sprite_loaded {
                self.ops.push(Op::Sprite(rect));
            }
            self.sprite_loaded
        }
        fn fill_text(&mut self, text: &str, _pos: Vec2, _font: &str, _color: &str) {
            self.ops.push(Op::Text(text.to_string()));
        }
    }

    fn ghost_at(x: f64, y: f64) -> Ghost {
        Ghost { pos: Vec2::new(x, y), size: 24.0, speed: 2.0, color: "red" }
    }

    #[test]
    fn frame_draw_order() {
        let state = GameState::new();
        let mut rec = Recorder::default();
        render_frame(&mut rec, &state, 0.0);
        let hall = state.current_hallway();
        assert_eq!(rec.ops[0], Op::Clear);
        assert_eq!(rec.ops[1], Op::Rect(hall.bounds, HALLWAY_COLOR.to_string()));
        assert_eq!(rec.ops[2], Op::Rect(hall.portal, PORTAL_COLOR.to_string()));
        assert!(matches!(rec.ops[3], Op::Ellipse(_, ref c) if c == state.active_ghost().color));
        assert!(matches!(rec.ops[4], Op::Polygon(7, _)));
        // 2 eyes + 2 pupils
        assert_eq!(rec.ops[5..9].iter().filter(|o| matches!(o, Op::Ellipse(..))).count(), 4);
        assert_eq!(rec.ops[9], Op::Rect(state.player.rect(), PLAYER_FALLBACK_COLOR.to_string()));
        assert_eq!(rec.ops[10], Op::Text("Hallway 1".to_string()));
        assert_eq!(rec.ops.len(), 11);
    }

    #[test]
    fn loaded_sprite_replaces_fallback_square() {
        let state = GameState::new();
        let mut rec = Recorder { sprite_loaded: true, ..Recorder::default() };
        render_frame(&mut rec, &state, 0.0);
        assert_eq!(rec.ops[9], Op::Sprite(state.player.rect()));
    }

    #[test]
    fn hud_shows_current_hallway() {
        let mut state = GameState::new();
        state.hallway = HallwayId::new(4).unwrap();
        assert_eq!(hud_label(&state), "Hallway 4");
    }

    #[test]
    fn pupils_look_at_player() {
        let g = ghost_at(100.0, 100.0);
        // far to the right, level with the eyes
        let shape = GhostShape::compute(&g, Vec2::new(1_000.0, 112.0), 0.0);
        for (eye, pupil) in shape.eyes.iter().zip(shape.pupils.iter()) {
            assert!((pupil.center.x - eye.center.x - 2.0).abs() < 1e-9);
            assert!((pupil.center.y - eye.center.y).abs() < 1e-9);
            assert_eq!(pupil.rx, 2.0);
        }
        // straight above: offset is clamped to size / 12
        let shape = GhostShape::compute(&g, Vec2::new(108.0, -5_000.0), 0.0);
        let d = shape.pupils[0].center.distance(shape.eyes[0].center);
        assert!((d - 2.0).abs() < 1e-9);
    }

    #[test]
    fn ghost_floats_with_time() {
        let g = ghost_at(0.0, 0.0);
        let still = GhostShape::compute(&g, Vec2::ZERO, 0.0);
        assert_eq!(still.float_offset, 0.0);
        let bobbing = GhostShape::compute(&g, Vec2::ZERO, 100.0 * PI);
        assert!((bobbing.float_offset - 3.0).abs() < 1e-9);
        assert!((bobbing.body.center.y - still.body.center.y - 3.0).abs() < 1e-9);
        assert_eq!(bobbing.hem.len(), HEM_SEGMENTS + 3);
    }
}
