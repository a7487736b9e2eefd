//! Emitter tests over buckets produced by the real pipeline

use dtok_core::tokens::loader::parse_token_sets;
use dtok_core::tokens::{Buckets, Pipeline};
use dtok_emit::EmitterRegistry;
use serde_json::Value;

const SOURCE: &str = r##"{
    "primitive/value": {
        "color": {
            "gray": { "50": { "value": "#f8f9fc" }, "900": { "value": "#191b28" } },
            "white": { "value": "#ffffff" }
        },
        "typo": {
            "font-family": { "base": { "value": "Pretendard" } },
            "2xs": { "value": "11" }
        },
        "number": { "unit": { "0": { "value": "0" }, "4": { "value": "4" } } }
    },
    "semantic/brand-1 (Legacy)": {
        "color": { "brand (1)": { "main": { "value": "#5538ee" } } },
        "shape": { "rounded": { "none": { "value": "{number.unit.0}" } } }
    },
    "brand/brand-1": {
        "brand": { "name": { "value": "acme" } }
    },
    "storybook": {
        "color": { "ignored": { "value": "#000000" } }
    }
}"##;

fn buckets() -> Buckets {
    Pipeline::new()
        .run(&parse_token_sets(SOURCE).unwrap())
        .buckets
}

#[test]
fn nested_artifact_covers_every_classified_bucket() {
    let out = EmitterRegistry::with_defaults()
        .emit(&buckets(), "nested-object")
        .unwrap();

    assert!(out.starts_with("/**\n * Do not edit directly"));
    assert!(out.contains("export const color = {"));
    assert!(out.contains("'50': '#f8f9fc'"));
    assert!(out.contains("fontFamily: {"));
    assert!(out.contains("'2xs': '11'"));
    assert!(out.contains("export const rounded = {"));
    // the rewriter fixed the reference before emission
    assert!(out.contains("none: '{number.0}'"));
    assert!(out.contains("export const theme = {"));
    assert!(out.contains("export const brand = {"));
    // the unrecognized set never reaches an artifact
    assert!(!out.contains("ignored"));
}

#[test]
fn flat_artifact_applies_the_path_rules() {
    let out = EmitterRegistry::with_defaults()
        .emit(&buckets(), "css-variables")
        .unwrap();
    let document: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(document["gray-50"]["value"], "#f8f9fc");
    assert_eq!(document["font-family-base"]["value"], "Pretendard");
    assert_eq!(document["number-0"]["value"], "0");
    assert_eq!(document["rounded-none"]["value"], "{number.0}");
    assert_eq!(document["rounded-none"]["attributes"]["type"], "borderRadius");
    // annotation stripped from the semantic brand group
    assert_eq!(document["brand-main"]["value"], "#5538ee");
    assert_eq!(document["brand-name"]["value"], "acme");

    let names: Vec<&String> = document.as_object().unwrap().keys().collect();
    assert!(names.iter().all(|name| !name.starts_with("color-")));
}

#[test]
fn emission_is_deterministic() {
    let registry = EmitterRegistry::with_defaults();
    let buckets = buckets();
    for emitter in ["nested-object", "css-variables"] {
        let first = registry.emit(&buckets, emitter).unwrap();
        let second = registry.emit(&buckets, emitter).unwrap();
        assert_eq!(first, second, "{emitter} output drifted between runs");
    }
}
