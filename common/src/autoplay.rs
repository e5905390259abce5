use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::carousel::CarouselState;
use crate::error::{EstateError, Result};
use crate::showcase::Showcase;

/// A [`Showcase`] with a live autoplay timer.
///
/// At most one timer task exists at a time. After every update the timer is
/// reconciled with [`Showcase::autoplay_schedule`]: the old task is aborted
/// and a fresh one spawned whenever the schedule changes, so entering the
/// grid, opening a modal or tearing down all leave no ticking timer behind.
///
/// Must be created inside a Tokio runtime.
pub struct LiveShowcase {
    session: Arc<Mutex<Showcase>>,
    timer: AutoplayTimer,
}

struct AutoplayTimer {
    task: Option<JoinHandle<()>>,
    generation: Option<u64>,
    period: Duration,
}

impl AutoplayTimer {
    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(generation = ?self.generation, "autoplay timer cancelled");
        }
        self.generation = None;
    }

    fn sync(&mut self, session: &Arc<Mutex<Showcase>>, schedule: Option<u64>) {
        if schedule == self.generation && (schedule.is_none() || self.is_running()) {
            return;
        }
        self.cancel();
        let Some(generation) = schedule else {
            return;
        };

        let session = Arc::clone(session);
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let mut showcase = session.lock().await;
                if !showcase.autoplay_tick(generation) {
                    break;
                }
                trace!(generation, index = showcase.carousel_state().index, "autoplay advanced");
            }
        }));
        self.generation = Some(generation);
        debug!(generation, period_ms = period.as_millis() as u64, "autoplay timer started");
    }
}

impl LiveShowcase {
    /// Wrap a session, ticking at its configured autoplay interval.
    pub fn new(showcase: Showcase) -> Result<Self> {
        let period = showcase.config().autoplay_interval();
        Self::with_period(showcase, period)
    }

    /// Wrap a session with an explicit autoplay period, which must be non-zero.
    pub fn with_period(showcase: Showcase, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(EstateError::Config("autoplay period must be non-zero".into()));
        }
        let schedule = showcase.autoplay_schedule();
        let session = Arc::new(Mutex::new(showcase));
        let mut timer = AutoplayTimer {
            task: None,
            generation: None,
            period,
        };
        timer.sync(&session, schedule);
        Ok(Self { session, timer })
    }

    /// Apply a change to the session, then reconcile the timer with it.
    pub async fn update<R>(&mut self, change: impl FnOnce(&mut Showcase) -> R) -> R {
        let (out, schedule) = {
            let mut showcase = self.session.lock().await;
            let out = change(&mut showcase);
            (out, showcase.autoplay_schedule())
        };
        self.timer.sync(&self.session, schedule);
        out
    }

    pub async fn read<R>(&self, view: impl FnOnce(&Showcase) -> R) -> R {
        let showcase = self.session.lock().await;
        view(&showcase)
    }

    pub async fn carousel_state(&self) -> CarouselState {
        self.read(Showcase::carousel_state).await
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Generation the live timer was scheduled under.
    pub fn timer_generation(&self) -> Option<u64> {
        self.timer.generation
    }

    /// Tear the session down and stop the timer. Later ticks are rejected.
    pub async fn shutdown(&mut self) {
        self.update(Showcase::teardown).await;
        self.timer.cancel();
    }
}

impl Drop for LiveShowcase {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
