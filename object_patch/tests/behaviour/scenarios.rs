//! Binds the `object_patch` feature files to the step registry.

use crate::fixtures::{PatchState, patch_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/merge.feature",
    fixtures = [patch_state: PatchState]
);
scenarios!(
    "tests/features/diff_filter.feature",
    fixtures = [patch_state: PatchState]
);
scenarios!(
    "tests/features/flatten.feature",
    fixtures = [patch_state: PatchState]
);
