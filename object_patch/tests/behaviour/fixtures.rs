//! Scenario state shared by the behavioural steps.

use object_patch::{MergeOptions, ObjectMap, PatchResult};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Documents, options and outcomes accumulated over one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct PatchState {
    /// The document patched, diffed or flattened.
    pub original: Slot<ObjectMap>,
    /// Snapshot of `original` taken before an in-place merge.
    pub snapshot: Slot<ObjectMap>,
    /// The patch, diff target or filter template.
    pub other: Slot<ObjectMap>,
    /// Merge switches adjusted by the scenario.
    pub options: Slot<MergeOptions>,
    /// A flattened document awaiting expansion.
    pub flat: Slot<ObjectMap>,
    /// Outcome of the last operation.
    pub outcome: Slot<PatchResult<ObjectMap>>,
}

/// Creates an empty state for each scenario.
#[fixture]
pub fn patch_state() -> PatchState {
    PatchState::default()
}
