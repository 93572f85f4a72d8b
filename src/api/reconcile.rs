use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::core::{Continent, CountryRecord};
use crate::render::Color;

use super::scale_registry::ScaleRegistry;
use super::transition::{MarkAttrs, Transition, TransitionConfig};

/// One keyed mark: a circle whose existence and targets are derived from
/// the current record set, never independently authored.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkState {
    continent: Continent,
    fill: Color,
    attrs: MarkAttrs,
    transition: Option<Transition>,
}

impl MarkState {
    #[must_use]
    pub fn continent(&self) -> Continent {
        self.continent
    }

    /// Fill is assigned once at mark creation and never animated.
    #[must_use]
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Current interpolated attributes.
    #[must_use]
    pub fn attrs(&self) -> MarkAttrs {
        self.attrs
    }

    /// The attributes this mark is heading toward; equals `attrs` once the
    /// transition has settled.
    #[must_use]
    pub fn target_attrs(&self) -> MarkAttrs {
        self.transition
            .map_or(self.attrs, |transition| transition.target())
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transition.is_none()
    }
}

/// Counts for one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileStats {
    pub entered: usize,
    pub retargeted: usize,
    pub removed: usize,
}

/// The keyed mark collection and its diff-and-patch reconciliation.
///
/// Marks are keyed by country name in insertion order, which doubles as
/// paint order: entering marks append at the end and draw on top.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkSet {
    marks: IndexMap<String, MarkState>,
    transition: TransitionConfig,
}

impl MarkSet {
    #[must_use]
    pub fn new(transition: TransitionConfig) -> Self {
        Self {
            marks: IndexMap::new(),
            transition,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[must_use]
    pub fn get(&self, country: &str) -> Option<&MarkState> {
        self.marks.get(country)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MarkState)> {
        self.marks.iter().map(|(key, mark)| (key.as_str(), mark))
    }

    /// Reconciles the mark set against one record list.
    ///
    /// Records without a mark enter (fill assigned once, attributes growing
    /// in from zero); marks without a record are removed immediately;
    /// surviving marks whose target moved are retargeted from their current
    /// interpolated attributes. A repeated call with identical records is a
    /// no-op: nothing enters, nothing is removed, no transition restarts.
    pub fn reconcile(
        &mut self,
        records: &[CountryRecord],
        scales: &mut ScaleRegistry,
    ) -> ReconcileStats {
        let mut stats = ReconcileStats::default();

        let keyed: IndexSet<&str> = records
            .iter()
            .map(|record| record.country.as_str())
            .collect();
        let before = self.marks.len();
        self.marks.retain(|key, _| keyed.contains(key.as_str()));
        stats.removed = before - self.marks.len();

        for record in records {
            let target = scales.attrs_for(record);
            match self.marks.get_mut(&record.country) {
                Some(mark) => {
                    if mark.target_attrs() != target {
                        mark.transition =
                            Some(Transition::new(mark.attrs, target, self.transition));
                        stats.retargeted += 1;
                    }
                }
                None => {
                    let fill = scales.color_for(record.continent);
                    self.marks.insert(
                        record.country.clone(),
                        MarkState {
                            continent: record.continent,
                            fill,
                            attrs: MarkAttrs::ZERO,
                            transition: Some(Transition::new(
                                MarkAttrs::ZERO,
                                target,
                                self.transition,
                            )),
                        },
                    );
                    stats.entered += 1;
                }
            }
        }

        trace!(
            entered = stats.entered,
            retargeted = stats.retargeted,
            removed = stats.removed,
            marks = self.marks.len(),
            "reconciled mark set"
        );

        stats
    }

    /// Advances all in-flight transitions by the host clock delta.
    pub fn advance(&mut self, delta_seconds: f64) {
        for mark in self.marks.values_mut() {
            if let Some(transition) = &mut mark.transition {
                transition.advance(delta_seconds);
                mark.attrs = transition.current();
                if transition.is_settled() {
                    mark.attrs = transition.target();
                    mark.transition = None;
                }
            }
        }
    }

    /// Jumps every in-flight transition straight to its target.
    pub fn settle(&mut self) {
        for mark in self.marks.values_mut() {
            if let Some(transition) = mark.transition.take() {
                mark.attrs = transition.target();
            }
        }
    }
}
