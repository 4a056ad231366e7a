//! Browser host: canvas, keyboard listeners, animation loop, HUD interval,
//! `localStorage` and the end-of-game overlay.
//!
//! The session lives in a thread-local so the `requestAnimationFrame`,
//! interval and event closures can reach it; each callback runs to
//! completion before the next one fires.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, Storage, Window,
    window,
};

use crate::config::GameConfig;
use crate::end_screen::{END_SCREEN_ID, EndSummary, RESTART_BUTTON_ID};
use crate::game::{GameState, StepEvent, step};
use crate::geometry::{Rect, Vec2};
use crate::input::KeyState;
use crate::render::{Ellipse, Surface, render_frame};
use crate::timer::{
    BestTime, Clock, IntervalSlot, KeyValueStore, MemoryStore, Stopwatch, format_time,
};

// --- Capabilities ------------------------------------------------------------

/// `performance.now()` clock.
struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}

/// `localStorage`, falling back to memory when the browser refuses access
/// (private mode, sandboxed iframes).
enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    fn open(win: &Window) -> Self {
        match win.local_storage() {
            Ok(Some(storage)) => BrowserStore::Local(storage),
            _ => {
                log::warn!("localStorage unavailable, best time will not survive a reload");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(mem) => mem.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).is_ok(),
            BrowserStore::Memory(mem) => mem.set(key, value),
        }
    }
}

/// 2D canvas plus the player sprite.
struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sprite: HtmlImageElement,
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_ellipse(&mut self, shape: Ellipse, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .ellipse(shape.center.x, shape.center.y, shape.rx, shape.ry, 0.0, 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.fill();
    }

    fn draw_sprite(&mut self, rect: Rect) -> bool {
        // `complete` is also true for a failed load; natural_width tells them apart.
        if !self.sprite.complete() || self.sprite.natural_width() == 0 {
            return false;
        }
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                &self.sprite,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            )
            .is_ok()
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.fill_text(text, pos.x, pos.y).ok();
    }
}

// --- Session -----------------------------------------------------------------

/// Runtime session state.
struct Session {
    config: GameConfig,
    state: GameState,
    keys: KeyState,
    surface: CanvasSurface,
    clock: PerformanceClock,
    stopwatch: Stopwatch,
    hud_interval: IntervalSlot<i32>,
    best: BestTime,
    store: BrowserStore,
    rng: SmallRng,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

pub fn start(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let surface = create_surface(&doc, &config)?;
    let store = BrowserStore::open(&win);
    let best = BestTime::load(&store);
    let clock = PerformanceClock;
    let stopwatch = Stopwatch::start(&clock);

    SESSION.with(|cell| {
        cell.replace(Some(Session {
            config: config.clone(),
            state: GameState::new(),
            keys: KeyState::new(),
            surface,
            clock,
            stopwatch,
            hud_interval: IntervalSlot::default(),
            best,
            store,
            rng: SmallRng::from_entropy(),
        }))
    });

    install_key_listeners(&win)?;
    let handle = start_hud_interval(&win, config.hud_interval_ms)?;
    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            session.hud_interval = IntervalSlot::new(handle);
        }
    });

    if best.is_set() {
        log::info!("game started, best time {}", format_time(best.secs()));
    } else {
        log::info!("game started, no best time yet");
    }
    start_frame_loop();
    Ok(())
}

fn create_surface(doc: &Document, config: &GameConfig) -> Result<CanvasSurface, JsValue> {
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_width(config.canvas_width);
    canvas.set_height(config.canvas_height);
    match doc.query_selector(&config.container_selector)? {
        Some(container) => {
            container.append_child(&canvas)?;
        }
        None => {
            log::warn!("no element matches {:?}, appending canvas to <body>", config.container_selector);
            doc.body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&canvas)?;
        }
    }
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let sprite = HtmlImageElement::new()?;
    sprite.set_src(&config.player_sprite);

    Ok(CanvasSurface { canvas, ctx, sprite })
}

fn install_key_listeners(win: &Window) -> Result<(), JsValue> {
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            SESSION.with(|cell| {
                if let Some(session) = cell.borrow_mut().as_mut() {
                    session.keys.key_down(&evt.key());
                }
            });
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            SESSION.with(|cell| {
                if let Some(session) = cell.borrow_mut().as_mut() {
                    session.keys.key_up(&evt.key());
                }
            });
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Periodic HUD refresh, independent of the frame rate.
fn start_hud_interval(win: &Window, interval_ms: i32) -> Result<i32, JsValue> {
    let closure = Closure::wrap(Box::new(move || {
        SESSION.with(|cell| {
            if let Some(session) = cell.borrow().as_ref() {
                if session.state.is_active() {
                    update_hud_time(session);
                }
            }
        });
    }) as Box<dyn FnMut()>);
    let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    closure.forget();
    Ok(handle)
}

fn update_hud_time(session: &Session) {
    let text = format_time(session.stopwatch.elapsed_whole_secs(&session.clock));
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id(&session.config.hud_time_element) {
            el.set_text_content(Some(&text));
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let keep_running = SESSION.with(|cell| match cell.borrow_mut().as_mut() {
            Some(session) => session.frame(ts),
            None => false,
        });
        if keep_running {
            request_frame(&f);
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(f: &FrameCallback) {
    if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

impl Session {
    /// One tick: input, simulation, render. Returns whether to keep looping.
    fn frame(&mut self, now: f64) -> bool {
        if !self.state.is_active() {
            return false;
        }
        let event = step(&mut self.state, self.keys.intent(), &mut self.rng);
        if let StepEvent::Entered(id) = event {
            log::info!(
                "entered hallway {id} at {}",
                format_time(self.stopwatch.elapsed_secs(&self.clock))
            );
        }
        render_frame(&mut self.surface, &self.state, now);
        if event.is_terminal() {
            self.finish();
            return false;
        }
        true
    }

    fn finish(&mut self) {
        if let (Some(handle), Some(win)) = (self.hud_interval.take(), window()) {
            win.clear_interval_with_handle(handle);
        }
        let run_secs = self.stopwatch.elapsed_secs(&self.clock);
        let summary = EndSummary::conclude(self.state.phase, run_secs, &mut self.best, &mut self.store);
        log::info!(
            "{} after {}",
            if summary.won { "escaped" } else { "caught" },
            format_time(run_secs)
        );
        if summary.new_record {
            log::info!("new best time {}", format_time(summary.best_secs));
        }
        if let Err(err) = show_end_screen(&summary, &self.config.entry_page) {
            log::warn!("could not show end screen: {err:?}");
        }
    }
}

fn show_end_screen(summary: &EndSummary, entry_page: &str) -> Result<(), JsValue> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let overlay = doc.create_element("div")?;
    overlay.set_id(END_SCREEN_ID);
    overlay.set_inner_html(&summary.overlay_html());
    body.append_child(&overlay)?;

    if let Some(button) = doc.get_element_by_id(RESTART_BUTTON_ID) {
        let target = entry_page.to_string();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            if let Some(w) = window() {
                if let Err(err) = w.location().set_href(&target) {
                    log::warn!("restart navigation failed: {err:?}");
                }
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
