//! Result of a finished run and the overlay markup shown for it.

use crate::game::Phase;
use crate::timer::{BestTime, KeyValueStore, format_time};

pub const END_SCREEN_ID: &str = "endScreen";
pub const RESTART_BUTTON_ID: &str = "restartButton";

#[derive(Clone, Debug, PartialEq)]
pub struct EndSummary {
    pub won: bool,
    pub run_secs: f64,
    pub best_secs: f64,
    pub new_record: bool,
}

impl EndSummary {
    /// Close the books on a run: a win may improve (and persist) the best time.
    pub fn conclude(
        phase: Phase,
        run_secs: f64,
        best: &mut BestTime,
        store: &mut impl KeyValueStore,
    ) -> Self {
        let won = phase == Phase::Won;
        let new_record = won && best.record_win(run_secs, store);
        Self { won, run_secs, best_secs: best.secs(), new_record }
    }

    pub fn headline(&self) -> &'static str {
        if self.won { "You escaped the school!" } else { "A ghost caught you!" }
    }

    pub fn overlay_html(&self) -> String {
        format!(
            "<h1>{}</h1>\
             <p>Your time: {}</p>\
             <p>Best time: {}</p>\
             <button id=\"{RESTART_BUTTON_ID}\">Back to start</button>",
            self.headline(),
            format_time(self.run_secs),
            format_time(self.best_secs),
        )
    }
}
