use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EstateError, Result};

/// Default minimum viewport width (px) that counts as wide.
pub const WIDE_VIEWPORT_MIN_WIDTH: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselMode {
    /// One card at a time, autoplay allowed.
    Rotating,
    /// Grid of every filtered card, autoplay off.
    ShowAll,
}

/// Observable carousel state.
///
/// `index < max(1, filtered_count)` holds after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub mode: CarouselMode,
    pub index: usize,
    pub items_per_page: usize,
    pub modal_open: bool,
    pub filtered_count: usize,
}

/// Carousel state machine.
///
/// All changes go through the named transitions below. The controller also
/// tracks an autoplay *generation*: it is bumped whenever a mode transition or
/// teardown happens, or whenever the answer to "should autoplay run" flips.
/// A timer carries the generation it was scheduled under, and its ticks are
/// ignored once the generation has moved on.
#[derive(Debug, Clone)]
pub struct CarouselController {
    state: CarouselState,
    viewport_width: Option<u32>,
    wide_min_width: u32,
    generation: u64,
    torn_down: bool,
}

impl CarouselController {
    /// Starts rotating with a narrow (single card) layout until a viewport is reported.
    pub fn new(filtered_count: usize, wide_min_width: u32) -> Self {
        Self {
            state: CarouselState {
                mode: CarouselMode::Rotating,
                index: 0,
                items_per_page: 1,
                modal_open: false,
                filtered_count,
            },
            viewport_width: None,
            wide_min_width,
            generation: 0,
            torn_down: false,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn mode(&self) -> CarouselMode {
        self.state.mode
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether the autoplay timer should currently be running.
    pub fn autoplay_active(&self) -> bool {
        !self.torn_down
            && self.state.mode == CarouselMode::Rotating
            && self.state.items_per_page == 1
            && !self.state.modal_open
            && self.state.filtered_count > 1
    }

    /// The generation a timer must be scheduled under, or `None` if no timer
    /// should exist right now.
    pub fn autoplay_schedule(&self) -> Option<u64> {
        self.autoplay_active().then_some(self.generation)
    }

    /// Timer callback. Advances only if the tick belongs to the current
    /// schedule; returns `false` for stale or inert ticks.
    pub fn autoplay_tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.autoplay_active() {
            debug!(
                tick = generation,
                current = self.generation,
                "ignoring stale autoplay tick"
            );
            return false;
        }
        self.advance(1);
        true
    }

    pub fn enter_show_all(&mut self) {
        self.transition(|s| {
            s.state.mode = CarouselMode::ShowAll;
            s.state.items_per_page = s.state.filtered_count;
            s.state.index = 0;
        });
        self.bump_generation();
    }

    /// Back to rotating from the grid. Does nothing while already rotating.
    pub fn exit_show_all(&mut self) {
        if self.state.mode != CarouselMode::ShowAll {
            return;
        }
        self.transition(|s| {
            s.state.mode = CarouselMode::Rotating;
            s.state.index = 0;
            s.state.items_per_page = s.rotating_items_per_page();
        });
        self.bump_generation();
    }

    pub fn next(&mut self) {
        if self.state.mode == CarouselMode::Rotating {
            self.advance(1);
        }
    }

    pub fn prev(&mut self) {
        if self.state.mode == CarouselMode::Rotating {
            self.advance(-1);
        }
    }

    /// Jump to a card. Only valid while rotating and within the filtered set.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if self.state.mode != CarouselMode::Rotating {
            return Err(EstateError::InvalidTransition {
                operation: "jump_to",
                mode: self.state.mode,
            });
        }
        if index >= self.state.filtered_count {
            return Err(EstateError::OutOfRange {
                index,
                len: self.state.filtered_count,
            });
        }
        self.state.index = index;
        Ok(())
    }

    pub fn on_modal_open(&mut self) {
        self.transition(|s| s.state.modal_open = true);
    }

    pub fn on_modal_close(&mut self) {
        self.transition(|s| s.state.modal_open = false);
    }

    /// Record the new viewport width; the page size only changes while rotating.
    pub fn on_viewport_change(&mut self, width: u32) {
        self.transition(|s| {
            s.viewport_width = Some(width);
            if s.state.mode == CarouselMode::Rotating {
                s.state.items_per_page = s.rotating_items_per_page();
            }
        });
    }

    /// Re-clamp against a new filtered set size.
    pub fn on_filtered_set_changed(&mut self, new_count: usize) {
        self.transition(|s| {
            s.state.filtered_count = new_count;
            s.state.index = if new_count == 0 {
                0
            } else {
                s.state.index.min(new_count - 1)
            };
            s.state.items_per_page = match s.state.mode {
                CarouselMode::ShowAll => new_count,
                CarouselMode::Rotating => s.rotating_items_per_page(),
            };
        });
    }

    /// Permanently stop autoplay; later ticks are all rejected.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.bump_generation();
    }

    fn is_wide(&self) -> bool {
        self.viewport_width
            .is_some_and(|w| w >= self.wide_min_width)
    }

    fn rotating_items_per_page(&self) -> usize {
        if self.is_wide() {
            self.state.filtered_count
        } else {
            1
        }
    }

    fn advance(&mut self, step: isize) {
        let count = self.state.filtered_count;
        if count == 0 {
            self.state.index = 0;
            return;
        }
        let count = count as isize;
        self.state.index = (self.state.index as isize + step).rem_euclid(count) as usize;
    }

    /// Apply a change and bump the generation if it flipped whether autoplay runs.
    fn transition(&mut self, change: impl FnOnce(&mut Self)) {
        let was_active = self.autoplay_active();
        change(self);
        if was_active != self.autoplay_active() {
            self.bump_generation();
        }
    }

    fn bump_generation(&mut self) {
        self.generation += 1;
        debug!(
            generation = self.generation,
            active = self.autoplay_active(),
            "autoplay rescheduled"
        );
    }
}
