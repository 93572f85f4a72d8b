use serde::{Deserialize, Serialize};

use crate::core::ContinentFilter;

/// Host-side input forwarded to the engine.
///
/// Bindings stay thin adapters: a widget callback builds the event and the
/// engine's `handle` dispatches it onto the public operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// Play/pause button activation.
    PlayToggled,
    /// Reset button activation; rewinds to the first year.
    ResetPressed,
    /// Continent dropdown selection.
    FilterSelected(ContinentFilter),
    /// Year slider drag, in calendar years.
    SliderMoved { year: i32 },
    /// Pointer motion over the chart, in viewport pixels.
    PointerMoved { x: f64, y: f64 },
    /// Pointer left the chart.
    PointerLeft,
}

/// Public hover state exposed to host applications.
///
/// `country` is the key of the mark currently under the pointer, when any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub country: Option<String>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            country: None,
        }
    }
}

impl HoverState {
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.visible = false;
        self.country = None;
    }

    pub fn set_target(&mut self, country: Option<String>) {
        self.visible = country.is_some();
        self.country = country;
    }
}
