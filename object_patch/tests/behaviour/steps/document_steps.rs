//! Steps that supply documents, run diff and filter, and check outcomes.

use anyhow::{Result, anyhow, ensure};
use object_patch::{
    DiffOptions, DynamicValue, FilterOptions, ObjectMap, diff_object, filter_object,
};
use rstest_bdd_macros::{given, then, when};
use test_helpers::json::parse_json_object;

use crate::fixtures::PatchState;

/// Parses a quoted JSON placeholder into an object document.
pub(crate) fn document(text: &str) -> Result<ObjectMap> {
    match DynamicValue::from(serde_json::Value::Object(parse_json_object(text)?)) {
        DynamicValue::Object(map) => Ok(map),
        other => Err(anyhow!("expected an object document, found {}", other.coarse_type())),
    }
}

/// Reads both scenario documents, failing when either step was skipped.
pub(crate) fn documents(patch_state: &PatchState) -> Result<(ObjectMap, ObjectMap)> {
    let original = patch_state
        .original
        .get()
        .ok_or_else(|| anyhow!("original document missing"))?;
    let other = patch_state
        .other
        .get()
        .ok_or_else(|| anyhow!("other document missing"))?;
    Ok((original, other))
}

#[given("the original document {json}")]
fn original_document(patch_state: &PatchState, json: String) -> Result<()> {
    ensure!(
        patch_state.original.is_empty(),
        "original document already initialised"
    );
    patch_state.original.set(document(&json)?);
    Ok(())
}

#[given("the other document {json}")]
fn other_document(patch_state: &PatchState, json: String) -> Result<()> {
    ensure!(
        patch_state.other.is_empty(),
        "other document already initialised"
    );
    patch_state.other.set(document(&json)?);
    Ok(())
}

#[when("the other document is diffed against the original")]
fn diff_documents(patch_state: &PatchState) -> Result<()> {
    let (original, other) = documents(patch_state)?;
    patch_state
        .outcome
        .set(Ok(diff_object(&original, &other, DiffOptions::default())));
    Ok(())
}

#[when("the original is filtered by the other document using {source} values")]
fn filter_documents(patch_state: &PatchState, source: String) -> Result<()> {
    let template_values = match test_helpers::text::normalize_scalar(&source).as_str() {
        "source" => false,
        "template" => true,
        other => return Err(anyhow!("unknown value source '{other}'")),
    };
    let (original, other) = documents(patch_state)?;
    let options = FilterOptions::default().with_template_values(template_values);
    patch_state
        .outcome
        .set(Ok(filter_object(&original, &other, options)));
    Ok(())
}

#[then("the result is {json}")]
fn result_is(patch_state: &PatchState, json: String) -> Result<()> {
    let expected = document(&json)?;
    let outcome = patch_state
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no operation has run"))?;
    let actual = outcome.map_err(|err| anyhow!("operation failed: {err}"))?;
    ensure!(actual == expected, "expected {expected:?}, got {actual:?}");
    Ok(())
}
