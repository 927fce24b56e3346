//! Option records read from a caller's JSON configuration, and the errors
//! a configured merge reports.

mod common;

use anyhow::{Result, anyhow, ensure};
use common::{doc, nested};
use object_patch::{
    CoarseType, DiffOptions, FilterOptions, MAX_DEPTH, MergeOptions, PatchError, PathConflict,
    expand_object_reporting, merge_object, merge_object_in_place, object_from_json_str,
};
use rstest::rstest;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SyncProfile {
    merge: MergeOptions,
    #[serde(default)]
    diff: DiffOptions,
    #[serde(default)]
    filter: FilterOptions,
}

#[test]
fn profiles_default_missing_switches() -> Result<()> {
    let profile: SyncProfile = serde_json::from_value(json!({
        "merge": {"overwrite": false, "enforceTypes": true},
        "filter": {"templateValues": true}
    }))?;
    ensure!(
        profile.merge
            == MergeOptions::default()
                .with_overwrite(false)
                .with_enforce_types(true),
        "unexpected merge options {:?}",
        profile.merge
    );
    ensure!(profile.diff == DiffOptions::default(), "diff options not defaulted");
    ensure!(profile.filter.template_values, "filter switch not read");
    ensure!(!profile.filter.keep_special, "filter switch not defaulted");
    Ok(())
}

#[rstest]
#[case::merge_typo(json!({"merge": {"insertKey": false}}))]
#[case::not_a_switch(json!({"merge": {"recursive": "yes"}}))]
fn malformed_profiles_are_rejected(#[case] profile: serde_json::Value) {
    assert!(serde_json::from_value::<SyncProfile>(profile).is_err());
}

#[test]
fn type_errors_name_every_offending_key() -> Result<()> {
    let options = MergeOptions::default().with_enforce_types(true);
    let original = doc(json!({"hp": 10, "meta": {"tags": ["a"], "owner": "x"}}))?;
    let patch = doc(json!({"hp": "ten", "meta": {"tags": {"0": "b"}, "owner": "y"}}))?;
    let err = merge_object(&original, &patch, options)
        .err()
        .ok_or_else(|| anyhow!("expected the merge to fail"))?;
    let PatchError::Aggregate(aggregate) = &*err else {
        return Err(anyhow!("expected an aggregate, got {err:?}"));
    };
    ensure!(aggregate.len() == 2, "expected two mismatches, got {}", aggregate.len());
    let paths: Vec<_> = aggregate.paths().collect();
    ensure!(paths == ["hp", "meta.tags"], "unexpected offending keys {paths:?}");
    let message = err.to_string();
    ensure!(
        message.contains("'hp': existing number, incoming string"),
        "missing hp in {message}"
    );
    ensure!(
        message.contains("'meta.tags': existing array, incoming object"),
        "missing meta.tags in {message}"
    );
    Ok(())
}

#[test]
fn rejected_in_place_merges_leave_the_target_alone() -> Result<()> {
    let mut target = doc(json!({"a": 1, "b": {"c": true}}))?;
    let before = target.clone();
    let patch = doc(json!({"-=a": null, "z": 1, "b": {"c": "no"}}))?;
    let outcome =
        merge_object_in_place(&mut target, &patch, MergeOptions::default().with_enforce_types(true));
    ensure!(outcome.is_err(), "expected a type mismatch");
    ensure!(target == before, "target changed to {target:?}");
    Ok(())
}

#[test]
fn deep_documents_fail_with_a_depth_error() -> Result<()> {
    let deep = nested(MAX_DEPTH + 5);
    let err = merge_object(&deep, &deep, MergeOptions::default())
        .err()
        .ok_or_else(|| anyhow!("expected the depth guard to trip"))?;
    ensure!(
        matches!(&*err, PatchError::RecursionDepthExceeded { limit, .. } if *limit == MAX_DEPTH),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[test]
fn expansion_reports_conflicts_without_failing() -> Result<()> {
    let flat = object_from_json_str(r#"{"a": 1, "a.b": 2, "c.d": 3, "c": 4}"#)?;
    let expansion = expand_object_reporting(&flat)?;
    ensure!(
        expansion.object == doc(json!({"a": {"b": 2}, "c": 4}))?,
        "unexpected expansion {:?}",
        expansion.object
    );
    ensure!(
        expansion.conflicts
            == [
                PathConflict {
                    path: "a.b".into(),
                    displaced: CoarseType::Number,
                },
                PathConflict {
                    path: "c".into(),
                    displaced: CoarseType::Object,
                },
            ],
        "unexpected conflicts {:?}",
        expansion.conflicts
    );
    Ok(())
}
