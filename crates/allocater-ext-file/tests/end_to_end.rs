//! File-based end-to-end tests: load CSV fixtures, aggregate, write back.

use std::path::PathBuf;

use allocater_core::prelude::*;
use allocater_ext_file::{
    load_allocations, load_allocations_with_diagnostics, load_assets, write_assets, FileError,
};
use approx::assert_relative_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_two_fund_files() {
    let assets = load_assets(fixture("two_fund_assets.csv"), Some("2025-01-31".into())).unwrap();
    let allocations = load_allocations(fixture("two_fund_allocations.csv")).unwrap();

    let result = aggregate(&allocations, &assets);

    assert_eq!(result.names(), vec!["Emerging", "US Equity"]);
    assert_relative_eq!(result.get("US Equity"), 144_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.get("Emerging"), 36_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.principal("US Equity").unwrap(), 120_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.principal("Emerging").unwrap(), 30_000.0, epsilon = 1e-6);
    assert_eq!(result.date(), None);
}

#[test]
fn test_top10_files_complete_undefined() {
    let assets = load_assets(fixture("top10_assets.csv"), None).unwrap();
    let mut diagnostics = Diagnostics::new();
    let allocations =
        load_allocations_with_diagnostics(fixture("top10_allocations.csv"), &mut diagnostics)
            .unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.warnings()[0].name(), "Global Fund");

    let result = aggregate(&allocations, &assets);
    assert_eq!(result.len(), 11);
    assert_relative_eq!(result.get(UNDEFINED_CLASS), 130_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.total_value(), 1_000_000.0, epsilon = 1e-6);
    assert!(result.principals().is_none());
}

#[test]
fn test_mixed_files_partial_principals() {
    let assets = load_assets(fixture("mixed_assets.csv"), None).unwrap();
    let mut diagnostics = Diagnostics::new();
    let allocations = load_allocations(fixture("mixed_allocations.csv")).unwrap();

    assert_eq!(assets.get("Cash"), 0.0);
    assert_eq!(assets.principal("Bond Fund"), None);

    let result = aggregate_with_diagnostics(&allocations, &assets, &mut diagnostics);

    assert_eq!(diagnostics.missing_assets(), vec!["Money Market"]);
    assert_relative_eq!(result.get("Equity"), 150_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.get("Bonds"), 180_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.principal("Equity").unwrap(), 120_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.principal("Bonds").unwrap(), 80_000.0, epsilon = 1e-6);
    assert!(!result.contains("Cash"));
}

#[test]
fn test_aggregate_and_write() {
    let assets = load_assets(fixture("two_fund_assets.csv"), None).unwrap();
    let allocations = load_allocations(fixture("two_fund_allocations.csv")).unwrap();
    let result = aggregate(&allocations, &assets);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("by_class.csv");
    write_assets(&out, &result).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("name,principal,value"));
    assert_eq!(lines.count(), 2);

    let reloaded = load_assets(&out, None).unwrap();
    assert_relative_eq!(reloaded.total_value(), 180_000.0, epsilon = 1e-6);
    assert_relative_eq!(reloaded.total_principal().unwrap(), 150_000.0, epsilon = 1e-6);
}

#[test]
fn test_overflowing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "name,class,ratio\nFund,A,0.6\nFund,B,0.5\n").unwrap();

    let err = load_allocations(&path).unwrap_err();
    match err {
        FileError::Allocation(AllocError::RatioOverflow { name, sum }) => {
            assert_eq!(name, "Fund");
            assert_relative_eq!(sum, 1.1, epsilon = 1e-9);
        }
        other => panic!("unexpected error: {other}"),
    }
}
