use serde::{Deserialize, Serialize};

use crate::core::ContinentFilter;

/// Mutable session state read by every rendered frame.
///
/// Owned by the playback controller; the only writers are its defined
/// transitions (play/pause, step, seek, reset, filter selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub year_index: usize,
    pub playing: bool,
    pub filter: ContinentFilter,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            year_index: 0,
            playing: false,
            filter: ContinentFilter::All,
        }
    }
}
