//! Host integration settings. All values are compiled in; with the `serde`
//! feature the host page may override them through `start_game_with_config`.

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
pub const CONTAINER_SELECTOR: &str = ".container-game";
pub const PLAYER_SPRITE: &str = "empanadaCute.png";
pub const HUD_TIME_ELEMENT: &str = "time";
pub const HUD_INTERVAL_MS: i32 = 100; // 10 Hz
pub const ENTRY_PAGE: &str = "index.html";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// CSS selector of the element the canvas is appended to.
    pub container_selector: String,
    pub player_sprite: String,
    /// Id of the element showing the running time.
    pub hud_time_element: String,
    pub hud_interval_ms: i32,
    /// Page the restart button navigates to.
    pub entry_page: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            container_selector: CONTAINER_SELECTOR.to_string(),
            player_sprite: PLAYER_SPRITE.to_string(),
            hud_time_element: HUD_TIME_ELEMENT.to_string(),
            hud_interval_ms: HUD_INTERVAL_MS,
            entry_page: ENTRY_PAGE.to_string(),
        }
    }
}

#[cfg(feature = "serde_json")]
impl GameConfig {
    /// Parse a (possibly partial) JSON object; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = GameConfig::default();
        assert_eq!((cfg.canvas_width, cfg.canvas_height), (800, 600));
        assert_eq!(cfg.container_selector, ".container-game");
        assert_eq!(cfg.hud_interval_ms, 100);
        assert_eq!(cfg.entry_page, "index.html");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{"player_sprite":"cat.png"}"#).unwrap();
        assert_eq!(cfg.player_sprite, "cat.png");
        assert_eq!(cfg.canvas_width, CANVAS_WIDTH);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{not json").is_err());
    }
}
