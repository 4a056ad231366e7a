//! Run timer, time formatting and the persisted best time.
//!
//! The browser pieces (performance clock, `localStorage`, interval handles)
//! plug in through [`Clock`] and [`KeyValueStore`] so the bookkeeping can be
//! exercised natively.

use std::collections::HashMap;

/// Storage key of the best time (seconds, float string).
pub const BEST_TIME_KEY: &str = "bestTime";

/// Milliseconds from an arbitrary fixed origin.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Minimal string key-value persistence (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns false when the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// In-memory store, used natively and as a fallback when `localStorage` is
/// unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stopwatch {
    start_ms: f64,
}

impl Stopwatch {
    pub fn start(clock: &impl Clock) -> Self {
        Self { start_ms: clock.now_ms() }
    }

    pub fn elapsed_secs(&self, clock: &impl Clock) -> f64 {
        ((clock.now_ms() - self.start_ms) / 1000.0).max(0.0)
    }

    /// Elapsed time truncated to whole seconds, as shown on the HUD.
    pub fn elapsed_whole_secs(&self, clock: &impl Clock) -> f64 {
        self.elapsed_secs(clock).floor()
    }
}

/// `m:ss` rendering shared by the HUD and the end screen.
///
/// Non-finite values (no best time yet) render as `--:--`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() {
        return "--:--".to_string();
    }
    let secs = secs.max(0.0);
    let minutes = (secs / 60.0).floor() as u64;
    let rest = (secs % 60.0).floor() as u64;
    format!("{minutes}:{rest:02}")
}

/// Fastest winning run, `f64::INFINITY` until the first win.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestTime {
    secs: f64,
}

impl Default for BestTime {
    fn default() -> Self {
        Self { secs: f64::INFINITY }
    }
}

impl BestTime {
    /// Read the stored value; absent or unparsable means no best time yet.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(BEST_TIME_KEY) else {
            return Self::default();
        };
        match raw.trim().parse::<f64>() {
            Ok(secs) if secs.is_finite() && secs >= 0.0 => Self { secs },
            Ok(_) if raw.trim() == "Infinity" => Self::default(),
            _ => {
                log::warn!("ignoring stored best time {raw:?}");
                Self::default()
            }
        }
    }

    pub fn secs(&self) -> f64 {
        self.secs
    }

    pub fn is_set(&self) -> bool {
        self.secs.is_finite()
    }

    /// Record a winning run. Returns true (and persists) when it beats the
    /// current best.
    pub fn record_win(&mut self, run_secs: f64, store: &mut impl KeyValueStore) -> bool {
        if run_secs >= self.secs {
            return false;
        }
        self.secs = run_secs;
        if !store.set(BEST_TIME_KEY, &run_secs.to_string()) {
            log::warn!("could not persist best time {run_secs}");
        }
        true
    }
}

/// Holder for a periodic timer handle that can be taken exactly once.
#[derive(Debug)]
pub struct IntervalSlot<H> {
    handle: Option<H>,
}

impl<H> Default for IntervalSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> IntervalSlot<H> {
    pub fn new(handle: H) -> Self {
        Self { handle: Some(handle) }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Hand out the handle for cancellation; later calls return `None`.
    pub fn take(&mut self) -> Option<H> {
        self.handle.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeClock(Cell<f64>);

    impl Clock for FakeClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    #[test]
    fn format_pads_seconds() {
        assert_eq!(format_time(125.0), "2:05");
        assert_eq!(format_time(59.0), "0:59");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(600.9), "10:00");
        assert_eq!(format_time(61.75), "1:01");
    }

    #[test]
    fn format_unbounded() {
        assert_eq!(format_time(f64::INFINITY), "--:--");
    }

    #[test]
    fn stopwatch_measures_from_start() {
        let clock = FakeClock(Cell::new(1_000.0));
        let sw = Stopwatch::start(&clock);
        clock.0.set(126_400.0);
        assert!((sw.elapsed_secs(&clock) - 125.4).abs() < 1e-9);
        assert_eq!(sw.elapsed_whole_secs(&clock), 125.0);
        assert_eq!(format_time(sw.elapsed_whole_secs(&clock)), "2:05");
    }

    #[test]
    fn best_time_defaults_to_unbounded() {
        let store = MemoryStore::new();
        let best = BestTime::load(&store);
        assert!(!best.is_set());
        assert_eq!(best.secs(), f64::INFINITY);
    }

    #[test]
    fn best_time_ignores_garbage() {
        let mut store = MemoryStore::new();
        store.set(BEST_TIME_KEY, "fast");
        assert!(!BestTime::load(&store).is_set());
        store.set(BEST_TIME_KEY, "Infinity");
        assert!(!BestTime::load(&store).is_set());
    }

    #[test]
    fn only_improvements_are_persisted() {
        let mut store = MemoryStore::new();
        let mut best = BestTime::load(&store);
        assert!(best.record_win(42.5, &mut store));
        assert_eq!(store.get(BEST_TIME_KEY).as_deref(), Some("42.5"));
        assert!(!best.record_win(50.0, &mut store));
        assert_eq!(store.get(BEST_TIME_KEY).as_deref(), Some("42.5"));
        assert!(best.record_win(30.25, &mut store));
        assert_eq!(BestTime::load(&store).secs(), 30.25);
    }

    #[test]
    fn interval_handle_is_taken_once() {
        let mut slot = IntervalSlot::new(7);
        assert!(slot.is_armed());
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_armed());
    }
}
