use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::core::{
    ContinentFilter, CountryRecord, Dataset, LinearScale, LogScale, Margins, RadiusScale, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ControlEvent, HoverState};
use crate::render::{CirclePrimitive, RenderFrame, Renderer};

use super::json_contract::EngineSnapshot;
use super::palette::OrdinalColorScale;
use super::playback::{PlaybackConfig, PlaybackController, PlaybackState};
use super::reconcile::MarkSet;
use super::scale_registry::ScaleRegistry;
use super::surface::ChartSurface;
use super::tooltip;
use super::transition::TransitionConfig;
use super::view_state::ViewState;

/// Startup configuration for the engine.
///
/// Defaults reproduce the reference chart: an 800x500 viewport, a plot area
/// inset by the axis margins, income on a log scale, life expectancy on an
/// inverted linear scale, and population on a linear-area radius scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub income_domain: (f64, f64),
    pub life_exp_domain: (f64, f64),
    pub population_domain: (f64, f64),
    pub mark_area_range: (f64, f64),
    pub income_tick_values: Vec<f64>,
    pub playback: PlaybackConfig,
    pub transition: TransitionConfig,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(800, 500),
            margins: Margins::new(100.0, 10.0, 10.0, 100.0),
            income_domain: (142.0, 250_000.0),
            life_exp_domain: (0.0, 90.0),
            population_domain: (2_000.0, 1_400_000_000.0),
            mark_area_range: (25.0 * PI, 1_500.0 * PI),
            income_tick_values: vec![400.0, 4_000.0, 40_000.0],
            playback: PlaybackConfig::default(),
            transition: TransitionConfig::default(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_income_domain(mut self, start: f64, end: f64) -> Self {
        self.income_domain = (start, end);
        self
    }

    #[must_use]
    pub fn with_life_exp_domain(mut self, start: f64, end: f64) -> Self {
        self.life_exp_domain = (start, end);
        self
    }

    #[must_use]
    pub fn with_population_domain(mut self, start: f64, end: f64) -> Self {
        self.population_domain = (start, end);
        self
    }

    #[must_use]
    pub fn with_mark_area_range(mut self, start: f64, end: f64) -> Self {
        self.mark_area_range = (start, end);
        self
    }

    #[must_use]
    pub fn with_income_tick_values(mut self, values: Vec<f64>) -> Self {
        self.income_tick_values = values;
        self
    }

    #[must_use]
    pub fn with_playback(mut self, playback: PlaybackConfig) -> Self {
        self.playback = playback;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the normalized dataset, the scale registry, the
/// playback-controlled time cursor, the keyed mark set, and renderer calls.
/// Hosts forward widget input through `handle` and drive time with `tick`
/// or `advance`; the engine owns no timer of its own.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    dataset: Dataset,
    scales: ScaleRegistry,
    surface: ChartSurface,
    playback: PlaybackController,
    marks: MarkSet,
    hover: HoverState,
    viewport: Viewport,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig, dataset: Dataset) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        if !config.margins.is_valid(config.viewport) {
            return Err(ChartError::InvalidConfig(format!(
                "margins leave no plot area inside a {}x{} viewport",
                config.viewport.width, config.viewport.height
            )));
        }
        if dataset.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let plot_width = config.margins.plot_width(config.viewport);
        let plot_height = config.margins.plot_height(config.viewport);

        let x = LogScale::new(
            config.income_domain.0,
            config.income_domain.1,
            0.0,
            plot_width,
        )?;
        let y = LinearScale::new(
            config.life_exp_domain.0,
            config.life_exp_domain.1,
            plot_height,
            0.0,
        )?;
        let radius = RadiusScale::new(
            config.population_domain.0,
            config.population_domain.1,
            config.mark_area_range.0,
            config.mark_area_range.1,
        )?;
        let mut scales = ScaleRegistry::new(
            x,
            y,
            radius,
            OrdinalColorScale::with_default_palette(),
            (config.margins.left, config.margins.top),
        );

        let surface = ChartSurface::new(
            config.viewport,
            config.margins,
            &mut scales,
            &config.income_tick_values,
        )?;
        let playback = PlaybackController::new(dataset.len(), config.playback)?;
        let marks = MarkSet::new(config.transition);

        debug!(
            slices = dataset.len(),
            base_year = dataset.base_year(),
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            dataset,
            scales,
            surface,
            playback,
            marks,
            hover: HoverState::default(),
            viewport: config.viewport,
        })
    }

    /// Dispatches one host input event onto the public operations.
    pub fn handle(&mut self, event: ControlEvent) -> ChartResult<()> {
        match event {
            ControlEvent::PlayToggled => {
                self.toggle_play();
                Ok(())
            }
            ControlEvent::ResetPressed => self.reset(),
            ControlEvent::FilterSelected(filter) => self.set_filter(filter),
            ControlEvent::SliderMoved { year } => self.seek_year(year),
            ControlEvent::PointerMoved { x, y } => self.pointer_move(x, y),
            ControlEvent::PointerLeft => self.pointer_leave(),
        }
    }

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn toggle_play(&mut self) -> PlaybackState {
        self.playback.toggle()
    }

    /// Rewinds to the first year and re-renders; play state is unchanged.
    pub fn reset(&mut self) -> ChartResult<()> {
        self.playback.reset();
        self.render()
    }

    /// Applies a continent filter.
    ///
    /// Re-renders immediately only while paused; while playing, the
    /// recurring tick remains the sole render driver and will pick the new
    /// filter up on its next pass.
    pub fn set_filter(&mut self, filter: ContinentFilter) -> ChartResult<()> {
        self.playback.set_filter(filter);
        if self.playback.is_playing() {
            return Ok(());
        }
        self.render()
    }

    /// Moves the time cursor to a slice index; same conditional-render
    /// contract as `set_filter`.
    pub fn seek(&mut self, year_index: usize) -> ChartResult<()> {
        self.playback.seek(year_index)?;
        if self.playback.is_playing() {
            return Ok(());
        }
        self.render()
    }

    /// Moves the time cursor to a calendar year (the slider's unit).
    pub fn seek_year(&mut self, year: i32) -> ChartResult<()> {
        let index = self.dataset.index_for_year(year).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "year {year} outside dataset range {}..={}",
                self.dataset.base_year(),
                self.dataset.year_at(self.dataset.last_index())
            ))
        })?;
        self.seek(index)
    }

    /// One recurring-timer firing: advances a year and re-renders.
    ///
    /// Each firing stands for one frame interval of wall time, so pending
    /// mark transitions progress by the same amount before the step. A
    /// no-op while paused, so hosts may keep their timer running across
    /// play/pause toggles.
    pub fn tick(&mut self) -> ChartResult<()> {
        if !self.playback.is_playing() {
            return Ok(());
        }
        self.marks.advance(self.playback.frame_interval_seconds());
        self.playback.step();
        self.render()
    }

    /// Feeds a wall-clock delta: steps playback across any crossed frame
    /// intervals, progresses mark transitions, and re-renders.
    ///
    /// Returns the number of year steps taken.
    pub fn advance(&mut self, delta_seconds: f64) -> ChartResult<usize> {
        let frames = self.playback.advance(delta_seconds);
        self.marks.advance(delta_seconds);
        self.render()?;
        Ok(frames)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.hover.on_pointer_move(x, y);
        let target = tooltip::hit_test(&self.marks, x, y).map(str::to_owned);
        self.hover.set_target(target);
        self.render()
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.hover.on_pointer_leave();
        self.render()
    }

    /// Reconciles marks against the current filtered slice and hands the
    /// materialized frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let records = self.filtered_records();
        self.marks.reconcile(&records, &mut self.scales);
        trace!(
            year = self.current_year(),
            marks = self.marks.len(),
            "render pass"
        );
        let frame = self.build_frame(&records)?;
        self.renderer.render(&frame)
    }

    /// Jumps all in-flight mark transitions straight to their targets.
    pub fn settle_transitions(&mut self) {
        self.marks.settle();
    }

    fn filtered_records(&self) -> Vec<CountryRecord> {
        let filter = self.playback.filter();
        let Some(slice) = self.dataset.slice(self.playback.year_index()) else {
            return Vec::new();
        };
        slice
            .records
            .iter()
            .filter(|record| filter.admits(record.continent))
            .cloned()
            .collect()
    }

    fn build_frame(&self, records: &[CountryRecord]) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        self.surface.extend_frame(&mut frame, &self.year_label());

        for (_, mark) in self.marks.iter() {
            let attrs = mark.attrs();
            frame.circles.push(CirclePrimitive::new(
                attrs.cx,
                attrs.cy,
                attrs.radius,
                mark.fill(),
            ));
        }

        if self.hover.visible {
            if let Some(country) = &self.hover.country {
                if let Some(record) = records.iter().find(|record| &record.country == country) {
                    tooltip::extend_frame(
                        &mut frame,
                        self.hover.x,
                        self.hover.y,
                        &tooltip::content_for(record),
                    );
                }
            }
        }

        Ok(frame)
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.playback.view()
    }

    #[must_use]
    pub fn year_index(&self) -> usize {
        self.playback.year_index()
    }

    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.dataset.year_at(self.playback.year_index())
    }

    /// Display text for the year marker and any external year readout.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.current_year().to_string()
    }

    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Caption for the host's play/pause button.
    #[must_use]
    pub fn play_button_label(&self) -> &'static str {
        if self.playback.is_playing() {
            "Pause"
        } else {
            "Play"
        }
    }

    #[must_use]
    pub fn filter(&self) -> ContinentFilter {
        self.playback.filter()
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn scales(&self) -> &ScaleRegistry {
        &self.scales
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            year: self.current_year(),
            year_index: self.playback.year_index(),
            playing: self.playback.is_playing(),
            filter: self.playback.filter(),
            mark_count: self.marks.len(),
            viewport: self.viewport,
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
