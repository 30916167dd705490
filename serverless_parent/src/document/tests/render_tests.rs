//! Tests for the print-effective-configuration rendering.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::{Value, json};
use std::path::Path;

use super::to_anyhow;
use crate::{Document, EFFECTIVE_SECTIONS, effective_sections, parse_document, render_effective};

fn doc(value: Value) -> Result<Document> {
    value
        .as_object()
        .cloned()
        .ok_or_else(|| anyhow!("fixture must be a JSON object"))
}

#[rstest]
fn only_whitelisted_sections_are_kept_in_fixed_order() -> Result<()> {
    let document = doc(json!({
        "service": "orders",
        "plugins": ["serverless-offline"],
        "provider": {"name": "aws"},
        "frameworkVersion": "3",
        "custom": {"parent": {"path": "../shared"}},
        "resources": {"Resources": {"Bucket": {"Type": "AWS::S3::Bucket"}}},
        "package": {"individually": true},
        "functions": {"create": {"handler": "h.create"}}
    }))?;

    let sections = effective_sections(&document);
    let keys: Vec<&str> = sections.keys().map(String::as_str).collect();

    ensure!(keys == EFFECTIVE_SECTIONS, "unexpected sections {keys:?}");
    Ok(())
}

#[rstest]
#[case(json!(null))]
#[case(json!({}))]
#[case(json!([]))]
#[case(json!(""))]
fn empty_sections_are_omitted(#[case] empty: Value) -> Result<()> {
    let document = doc(json!({"service": "orders", "functions": empty}))?;

    let sections = effective_sections(&document);

    ensure!(
        !sections.contains_key("functions"),
        "empty functions section should be omitted: {sections:?}"
    );
    ensure!(sections.contains_key("service"), "service should remain");
    Ok(())
}

#[rstest]
fn rendered_output_parses_back_to_the_filtered_document() -> Result<()> {
    let document = doc(json!({
        "service": "orders",
        "provider": {"name": "aws", "stage": "dev"},
        "plugins": ["a"]
    }))?;

    let text = to_anyhow(render_effective(&document))?;
    let reparsed = to_anyhow(parse_document(Path::new("effective.yml"), &text))?;

    ensure!(
        reparsed == effective_sections(&document),
        "unexpected rendering:\n{text}"
    );
    ensure!(!text.contains("plugins"), "plugins leaked into:\n{text}");
    Ok(())
}

#[rstest]
fn nothing_to_render_gives_an_empty_document() -> Result<()> {
    let document = doc(json!({"plugins": ["a"], "frameworkVersion": "3"}))?;
    ensure!(
        effective_sections(&document).is_empty(),
        "expected no effective sections"
    );
    Ok(())
}

#[rstest]
fn sections_declared_without_a_value_are_omitted() -> Result<()> {
    let document = to_anyhow(parse_document(
        Path::new("serverless.yml"),
        "service: orders\nfunctions:\nresources: ~\n",
    ))?;

    let text = to_anyhow(render_effective(&document))?;

    ensure!(
        !text.contains("functions") && !text.contains("resources"),
        "empty sections leaked into:\n{text}"
    );
    ensure!(text.contains("service: orders"), "unexpected rendering:\n{text}");
    Ok(())
}
