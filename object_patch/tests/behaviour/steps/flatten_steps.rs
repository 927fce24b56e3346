//! Steps flattening and expanding documents.

use anyhow::{Result, anyhow, ensure};
use object_patch::{expand_object, flatten_object};
use rstest_bdd_macros::{then, when};

use super::document_steps::document;
use crate::fixtures::PatchState;

#[when("the original document is flattened")]
fn flatten_original(patch_state: &PatchState) -> Result<()> {
    let original = patch_state
        .original
        .get()
        .ok_or_else(|| anyhow!("original document missing"))?;
    patch_state.flat.set(flatten_object(&original)?);
    Ok(())
}

#[then("the flat document is {json}")]
fn flat_document_is(patch_state: &PatchState, json: String) -> Result<()> {
    let expected = document(&json)?;
    let flat = patch_state
        .flat
        .get()
        .ok_or_else(|| anyhow!("nothing has been flattened"))?;
    ensure!(flat == expected, "expected {expected:?}, got {flat:?}");
    let keys: Vec<&String> = flat.keys().collect();
    let expected_keys: Vec<&String> = expected.keys().collect();
    ensure!(keys == expected_keys, "flat keys out of order: {keys:?}");
    Ok(())
}

#[when("the flat document is expanded")]
fn expand_flat(patch_state: &PatchState) -> Result<()> {
    let flat = patch_state
        .flat
        .get()
        .ok_or_else(|| anyhow!("nothing has been flattened"))?;
    patch_state.outcome.set(expand_object(&flat));
    Ok(())
}
