//! Steps configuring and running merges.

use anyhow::{Result, anyhow, ensure};
use object_patch::{MergeOptions, PatchError, merge_object, merge_object_in_place};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{normalize_scalar, parse_switch};

use super::document_steps::documents;
use crate::fixtures::PatchState;

#[given("the merge switch {name} is {state}")]
fn merge_switch(patch_state: &PatchState, name: String, state: String) -> Result<()> {
    let on = parse_switch(&state)?;
    let options = patch_state.options.get().unwrap_or_default();
    let updated = match normalize_scalar(&name).as_str() {
        "insertKeys" => options.with_insert_keys(on),
        "insertValues" => options.with_insert_values(on),
        "overwrite" => options.with_overwrite(on),
        "recursive" => options.with_recursive(on),
        "enforceTypes" => options.with_enforce_types(on),
        other => return Err(anyhow!("unknown merge switch '{other}'")),
    };
    patch_state.options.set(updated);
    Ok(())
}

#[when("the other document is merged")]
fn merge_documents(patch_state: &PatchState) -> Result<()> {
    let (original, other) = documents(patch_state)?;
    let options = patch_state.options.get().unwrap_or_default();
    patch_state
        .outcome
        .set(merge_object(&original, &other, options));
    Ok(())
}

#[when("the other document is merged in place")]
fn merge_documents_in_place(patch_state: &PatchState) -> Result<()> {
    let (mut original, other) = documents(patch_state)?;
    let options = patch_state.options.get().unwrap_or_default();
    patch_state.snapshot.set(original.clone());
    let outcome = merge_object_in_place(&mut original, &other, options).map(|()| original.clone());
    patch_state.original.set(original);
    patch_state.outcome.set(outcome);
    Ok(())
}

#[then("the merge fails with a type mismatch at {path}")]
fn merge_fails_with_mismatch(patch_state: &PatchState, path: String) -> Result<()> {
    let expected_key = normalize_scalar(&path);
    let err = patch_state
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no merge has run"))?
        .err()
        .ok_or_else(|| anyhow!("expected the merge to fail"))?;
    ensure!(
        matches!(&*err, PatchError::TypeMismatch { key, .. } if *key == expected_key),
        "unexpected error: {err}"
    );
    Ok(())
}

#[then("the original document is unchanged")]
fn original_unchanged(patch_state: &PatchState) -> Result<()> {
    let snapshot = patch_state
        .snapshot
        .get()
        .ok_or_else(|| anyhow!("no in-place merge has run"))?;
    let current = patch_state
        .original
        .get()
        .ok_or_else(|| anyhow!("original document missing"))?;
    ensure!(current == snapshot, "original changed to {current:?}");
    Ok(())
}
