//! Simulated periodic data-usage reporting.
//!
//! Each reporter is a repeating timer bound to one session. Every tick draws
//! a random megabyte figure in `[0, max_usage_mb)` and posts it to the
//! session's usage endpoint. The first tick fires one full interval after
//! start. A failed tick is logged and the next one still fires on schedule:
//! no backoff, no retry, no failure cutoff.
//!
//! Starting a second reporter for a session that already has one is allowed
//! and yields an independent timer. Reporters run until the page goes away
//! unless explicitly cancelled through the registry.

#[cfg(test)]
#[path = "usage_reporter_test.rs"]
mod usage_reporter_test;

use std::collections::HashMap;

use rand::Rng;

use crate::net::api::ApiError;
use crate::net::types::{UsageReport, UsageResponse};

/// Draw one simulated usage figure in `[0, max_mb)`.
pub fn sample_data_used_mb<R: Rng>(rng: &mut R, max_mb: f64) -> f64 {
    if !(max_mb.is_finite() && max_mb > 0.0) {
        return 0.0;
    }
    rng.random_range(0.0..max_mb)
}

impl UsageReport {
    pub fn sample<R: Rng>(rng: &mut R, max_mb: f64) -> Self {
        Self {
            data_used_mb: sample_data_used_mb(rng, max_mb),
        }
    }
}

/// Log level and line for one tick's result.
#[must_use]
pub fn describe_outcome(session_id: &str, outcome: &Result<UsageResponse, ApiError>) -> (log::Level, String) {
    match outcome {
        Ok(resp) if resp.is_success() => (log::Level::Info, format!("data usage updated for {session_id}: {resp}")),
        Ok(resp) => (log::Level::Warn, format!("data usage not recorded for {session_id}: {resp}")),
        Err(e @ ApiError::Status { .. }) => (log::Level::Warn, format!("error updating data usage for {session_id}: {e}")),
        Err(e) => (log::Level::Error, format!("error updating data usage for {session_id}: {e}")),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReporterId(pub u64);

/// Live reporters keyed by id, each remembering its session.
///
/// `T` is the timer guard; dropping it cancels the schedule.
#[derive(Debug)]
pub struct ReporterRegistry<T> {
    next_id: u64,
    entries: HashMap<ReporterId, (String, T)>,
}

impl<T> Default for ReporterRegistry<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: HashMap::new(),
        }
    }
}

impl<T> ReporterRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, session_id: &str, timer: T) -> ReporterId {
        let id = ReporterId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, (session_id.to_owned(), timer));
        id
    }

    /// Remove one reporter, handing back its timer.
    pub fn cancel(&mut self, id: ReporterId) -> Option<T> {
        self.entries.remove(&id).map(|(_, timer)| timer)
    }

    /// Remove every reporter of `session_id`.
    pub fn cancel_session(&mut self, session_id: &str) -> Vec<T> {
        let mut ids = self
            .entries
            .iter()
            .filter(|(_, (session, _))| session == session_id)
            .map(|(id, _)| *id)
            .collect::<Vec<_>>();
        ids.sort();
        ids.into_iter().filter_map(|id| self.cancel(id)).collect()
    }

    #[must_use]
    pub fn count_for(&self, session_id: &str) -> usize {
        self.entries.values().filter(|(session, _)| session == session_id).count()
    }

    #[must_use]
    pub fn session_of(&self, id: ReporterId) -> Option<&str> {
        self.entries.get(&id).map(|(session, _)| session.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "browser")]
pub use self::browser::{active_for, is_running, start, stop, stop_session};

#[cfg(feature = "browser")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Interval;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::{ReporterId, ReporterRegistry, describe_outcome};
    use crate::config::UiConfig;
    use crate::net::api;
    use crate::net::types::UsageReport;

    thread_local! {
        static REPORTERS: RefCell<ReporterRegistry<Interval>> = RefCell::new(ReporterRegistry::new());
    }

    fn seeded_rng() -> SmallRng {
        SmallRng::seed_from_u64(js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits())
    }

    async fn report_once(config: Rc<UiConfig>, session_id: Rc<str>, report: UsageReport) {
        let outcome = api::post_usage(&config.usage_endpoint_base, &session_id, &report).await;
        let (level, line) = describe_outcome(&session_id, &outcome);
        log::log!(level, "{line}");
    }

    /// Start a reporter for `session_id`. It runs until cancelled.
    pub fn start(session_id: &str, config: Rc<UiConfig>) -> ReporterId {
        let session: Rc<str> = Rc::from(session_id);
        let mut rng = seeded_rng();
        let interval_ms = config.report_interval_ms;
        let tick_session = Rc::clone(&session);
        let interval = Interval::new(interval_ms, move || {
            let report = UsageReport::sample(&mut rng, config.max_usage_mb);
            wasm_bindgen_futures::spawn_local(report_once(Rc::clone(&config), Rc::clone(&tick_session), report));
        });

        let id = REPORTERS.with(|r| r.borrow_mut().register(&session, interval));
        log::info!("usage reporter {} started for {session} every {interval_ms} ms", id.0);
        id
    }

    /// Cancel one reporter. Returns `false` if it was not running.
    pub fn stop(id: ReporterId) -> bool {
        // Drop the interval outside the borrow.
        let timer = REPORTERS.with(|r| r.borrow_mut().cancel(id));
        let stopped = timer.is_some();
        drop(timer);
        if stopped {
            log::info!("usage reporter {} stopped", id.0);
        }
        stopped
    }

    /// Cancel every reporter of `session_id`, returning how many stopped.
    pub fn stop_session(session_id: &str) -> usize {
        let timers = REPORTERS.with(|r| r.borrow_mut().cancel_session(session_id));
        let count = timers.len();
        drop(timers);
        if count > 0 {
            log::info!("stopped {count} usage reporter(s) for {session_id}");
        }
        count
    }

    #[must_use]
    pub fn active_for(session_id: &str) -> usize {
        REPORTERS.with(|r| r.borrow().count_for(session_id))
    }

    #[must_use]
    pub fn is_running(id: ReporterId) -> bool {
        REPORTERS.with(|r| r.borrow().session_of(id).is_some())
    }
}
