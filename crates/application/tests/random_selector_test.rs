use dns_select_application::selectors::{RandomSelector, Selector};
use dns_select_domain::{QueryMetadata, SelectionResult, SelectorCriteria};
use std::collections::HashMap;

#[test]
fn test_empty_options_return_default() {
    let selector = RandomSelector::new(Vec::<String>::new());
    let metadata = QueryMetadata::new();

    let criteria = [
        SelectorCriteria::new(&metadata, "udp"),
        SelectorCriteria::new(&metadata, "tcp").with_src("192.0.2.1".parse().unwrap()),
        SelectorCriteria::new(&metadata, "udp").with_ecs("203.0.113.0/24".parse().unwrap()),
    ];

    for criteria in &criteria {
        for _ in 0..10 {
            assert_eq!(selector.select(criteria), SelectionResult::default());
        }
    }
}

#[test]
fn test_distribution_is_uniform() {
    const DRAWS: usize = 30_000;
    let options = ["a", "b", "c"];
    let selector = RandomSelector::new(options);
    let metadata = QueryMetadata::new();
    let criteria = SelectorCriteria::new(&metadata, "udp");

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..DRAWS {
        let result = selector.select(&criteria);
        assert_eq!(result.ecs_scope_prefix_length, 0);
        *counts.entry(result.option).or_default() += 1;
    }

    assert_eq!(counts.len(), options.len());

    let expected = DRAWS as f64 / options.len() as f64;
    let chi_square: f64 = options
        .iter()
        .map(|o| {
            let observed = counts.get(*o).copied().unwrap_or(0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();

    // Critical value for 2 degrees of freedom at p = 0.0001.
    assert!(chi_square < 18.42, "chi-square {chi_square} for {counts:?}");
}

#[test]
fn test_criteria_do_not_influence_choice_set() {
    let selector = RandomSelector::new(["a", "b"]);
    let mut metadata = QueryMetadata::new();
    metadata.set_value("region", "zz");
    let criteria = SelectorCriteria::new(&metadata, "tcp")
        .with_src("2001:db8::1".parse().unwrap());

    for _ in 0..100 {
        let option = selector.select(&criteria).option;
        assert!(option == "a" || option == "b");
    }
}
