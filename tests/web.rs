// Browser tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use hallway_escape::timer::{BEST_TIME_KEY, BestTime, KeyValueStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_storage() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(BEST_TIME_KEY);
    }
}

#[wasm_bindgen_test]
fn start_game_mounts_canvas_into_container() {
    clear_storage();
    let doc = web_sys::window().unwrap().document().unwrap();
    let container = doc.create_element("div").unwrap();
    container.set_class_name("container-game");
    doc.body().unwrap().append_child(&container).unwrap();

    hallway_escape::start_game().unwrap();

    let canvas = doc.query_selector(".container-game canvas").unwrap();
    assert!(canvas.is_some(), "canvas was not appended to the container");
}

struct Local(web_sys::Storage);

impl KeyValueStore for Local {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.0.set_item(key, value).is_ok()
    }
}

#[wasm_bindgen_test]
fn best_time_round_trips_through_local_storage() {
    clear_storage();
    let mut store = Local(web_sys::window().unwrap().local_storage().unwrap().unwrap());
    let mut best = BestTime::load(&store);
    assert!(!best.is_set());
    assert!(best.record_win(12.5, &mut store));
    assert_eq!(BestTime::load(&store).secs(), 12.5);
    clear_storage();
}
