use dns_select_application::selectors::{MetadataSelector, Selector};
use dns_select_domain::{QueryMetadata, SelectionResult, SelectorCriteria};

fn select(selector: &MetadataSelector, metadata: &QueryMetadata) -> SelectionResult {
    let criteria = SelectorCriteria::new(metadata, "udp");
    selector.select(&criteria)
}

#[test]
fn test_registered_value_in_options_is_selected() {
    let selector = MetadataSelector::new("region", ["eu", "us"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "us");

    for _ in 0..10 {
        assert_eq!(select(&selector, &metadata), SelectionResult::new("us", 0));
    }
}

#[test]
fn test_scope_propagation() {
    let selector = MetadataSelector::new("region", ["eu", "us"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "eu");
    metadata.set_value("region/_ecs-scope", "24");

    assert_eq!(select(&selector, &metadata), SelectionResult::new("eu", 24));
}

#[test]
fn test_unrecognized_value_yields_default() {
    let selector = MetadataSelector::new("region", ["eu", "us"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "mars");

    let result = select(&selector, &metadata);
    assert_eq!(result, SelectionResult::default());
}

#[test]
fn test_unrecognized_value_still_reports_scope() {
    let selector = MetadataSelector::new("region", ["eu", "us"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "mars");
    metadata.set_value("region/_ecs-scope", "16");

    let result = select(&selector, &metadata);
    assert!(result.option.is_empty());
    assert_eq!(result.ecs_scope_prefix_length, 16);
}

#[test]
fn test_value_is_case_folded() {
    let selector = MetadataSelector::new("region", ["eu", "us"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "EU");

    assert_eq!(select(&selector, &metadata).option, "eu");
}

#[test]
fn test_malformed_scope_yields_zero() {
    let selector = MetadataSelector::new("region", ["eu"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "eu");
    metadata.set_value("region/_ecs-scope", "not-a-number");

    assert_eq!(select(&selector, &metadata), SelectionResult::new("eu", 0));
}

#[test]
fn test_missing_function_yields_default() {
    let selector = MetadataSelector::new("region", ["eu"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region/_ecs-scope", "24");

    assert_eq!(select(&selector, &metadata), SelectionResult::default());
}

#[test]
fn test_empty_value_yields_default() {
    let selector = MetadataSelector::new("region", ["eu", ""]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "");
    metadata.set_value("region/_ecs-scope", "24");

    assert_eq!(select(&selector, &metadata), SelectionResult::default());
}

#[test]
fn test_empty_options_never_match() {
    let selector = MetadataSelector::new("region", Vec::<String>::new());
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "eu");

    assert!(select(&selector, &metadata).option.is_empty());
}

#[test]
fn test_result_is_always_member_of_options() {
    let options = ["eu", "us", "apac"];
    let selector = MetadataSelector::new("region", options);

    for value in ["eu", "US", "Apac", "mars", "", "eu ", "africa"] {
        let mut metadata = QueryMetadata::new();
        metadata.set_value("region", value);

        let result = select(&selector, &metadata);
        assert!(
            result.option.is_empty() || options.contains(&result.option.as_str()),
            "value {value:?} produced {:?}",
            result.option
        );
    }
}

#[test]
fn test_metadata_is_not_modified() {
    let selector = MetadataSelector::new("region", ["eu"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "eu");

    select(&selector, &metadata);

    assert_eq!(metadata.len(), 1);
    assert!(!metadata.contains("region/_ecs-scope"));
}
