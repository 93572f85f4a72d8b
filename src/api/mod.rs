mod engine;
mod format;
mod json_contract;
mod palette;
mod playback;
mod reconcile;
mod scale_registry;
mod surface;
mod tooltip;
mod transition;
mod view_state;

pub use engine::{ChartEngine, ChartEngineConfig};
pub use json_contract::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
};
pub use palette::{CATEGORICAL_PALETTE, OrdinalColorScale};
pub use playback::{PlaybackConfig, PlaybackController, PlaybackState};
pub use reconcile::{MarkSet, MarkState, ReconcileStats};
pub use scale_registry::ScaleRegistry;
pub use tooltip::TooltipContent;
pub use transition::{Ease, MarkAttrs, Transition, TransitionConfig};
pub use view_state::ViewState;
