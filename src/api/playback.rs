use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ContinentFilter;
use crate::error::{ChartError, ChartResult};

use super::view_state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// Tuning for the playback cadence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Wall-clock seconds between automatic year steps while playing.
    pub frame_interval_seconds: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_interval_seconds: 0.1,
        }
    }
}

/// The time cursor and play/pause state machine.
///
/// The controller owns no timer: hosts either call `step` from their own
/// recurring timer or feed wall-clock deltas into `advance` and let the
/// accumulator decide how many whole frame intervals were crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackController {
    view: ViewState,
    slice_count: usize,
    frame_interval_seconds: f64,
    accumulator_seconds: f64,
}

impl PlaybackController {
    pub fn new(slice_count: usize, config: PlaybackConfig) -> ChartResult<Self> {
        if slice_count == 0 {
            return Err(ChartError::EmptyDataset);
        }
        if !config.frame_interval_seconds.is_finite() || config.frame_interval_seconds <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "playback frame interval must be finite and > 0: {}",
                config.frame_interval_seconds
            )));
        }

        Ok(Self {
            view: ViewState::default(),
            slice_count,
            frame_interval_seconds: config.frame_interval_seconds,
            accumulator_seconds: 0.0,
        })
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.view.playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.view.playing
    }

    #[must_use]
    pub fn year_index(&self) -> usize {
        self.view.year_index
    }

    #[must_use]
    pub fn filter(&self) -> ContinentFilter {
        self.view.filter
    }

    #[must_use]
    pub fn frame_interval_seconds(&self) -> f64 {
        self.frame_interval_seconds
    }

    pub fn play(&mut self) {
        if !self.view.playing {
            self.view.playing = true;
            self.accumulator_seconds = 0.0;
            debug!(year_index = self.view.year_index, "playback started");
        }
    }

    pub fn pause(&mut self) {
        if self.view.playing {
            self.view.playing = false;
            self.accumulator_seconds = 0.0;
            debug!(year_index = self.view.year_index, "playback paused");
        }
    }

    pub fn toggle(&mut self) -> PlaybackState {
        if self.view.playing {
            self.pause();
        } else {
            self.play();
        }
        self.state()
    }

    /// Advances the cursor one year, wrapping past the last slice back to
    /// the first. Returns the new index.
    pub fn step(&mut self) -> usize {
        self.view.year_index = (self.view.year_index + 1) % self.slice_count;
        self.view.year_index
    }

    /// Feeds a wall-clock delta into the playback accumulator.
    ///
    /// Returns the number of whole frame intervals crossed (and stepped);
    /// always zero while paused.
    pub fn advance(&mut self, delta_seconds: f64) -> usize {
        if !self.view.playing || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return 0;
        }

        self.accumulator_seconds += delta_seconds;
        let mut frames = 0usize;
        while self.accumulator_seconds >= self.frame_interval_seconds {
            self.accumulator_seconds -= self.frame_interval_seconds;
            self.step();
            frames += 1;
        }
        frames
    }

    /// Moves the cursor directly to `index` without touching play state.
    pub fn seek(&mut self, index: usize) -> ChartResult<()> {
        if index >= self.slice_count {
            return Err(ChartError::InvalidData(format!(
                "seek index {index} out of range (slices: {})",
                self.slice_count
            )));
        }
        self.view.year_index = index;
        Ok(())
    }

    /// Rewinds to the first year; play/pause state is left unchanged.
    pub fn reset(&mut self) {
        self.view.year_index = 0;
        debug!(playing = self.view.playing, "playback reset");
    }

    pub fn set_filter(&mut self, filter: ContinentFilter) {
        self.view.filter = filter;
    }
}
