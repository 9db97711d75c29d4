//! Dropdown option projection, ordering and search

use crate::catalog::{Catalog, ReleaseStage};
use crate::messages::Messages;
use std::cmp::Ordering;

/// One selectable dropdown row, derived from a connector definition
#[derive(Debug, Clone, PartialEq)]
pub struct DropDownOption {
    pub label: String,
    /// Connector id
    pub value: String,
    pub icon: Option<String>,
    pub release_stage: Option<ReleaseStage>,
}

impl DropDownOption {
    /// Stage to show as a badge, if any
    pub fn badge_stage(&self) -> Option<&ReleaseStage> {
        self.release_stage.as_ref().filter(|stage| stage.shows_badge())
    }

    /// Uppercase badge text naming the stage, looked up by message key
    pub fn badge_label(&self, messages: &Messages) -> Option<String> {
        self.badge_stage().map(|stage| {
            messages
                .format_or(&stage.message_key(), stage.as_str())
                .to_uppercase()
        })
    }

    /// Case-insensitive substring match against the label
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.label.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Filter, project and sort the catalog into dropdown options
///
/// Connectors whose id is in `excluded` are dropped. The result is ordered by
/// [`default_option_sort`]; equal labels keep catalog order.
pub fn build_options(catalog: &Catalog, excluded: &[String]) -> Vec<DropDownOption> {
    let mut options: Vec<DropDownOption> = catalog
        .definitions()
        .iter()
        .filter(|def| !excluded.iter().any(|id| *id == def.id))
        .map(|def| DropDownOption {
            label: def.name.clone(),
            value: def.id.clone(),
            icon: def.icon.clone(),
            release_stage: def.release_stage.clone(),
        })
        .collect();

    // slice::sort_by is stable
    options.sort_by(default_option_sort);
    options
}

/// Options whose label matches the search query, order preserved
pub fn search_options<'a>(options: &'a [DropDownOption], query: &str) -> Vec<&'a DropDownOption> {
    options
        .iter()
        .filter(|option| option.matches_search(query))
        .collect()
}

/// Default option ordering: natural, case-insensitive comparison of labels
pub fn default_option_sort(a: &DropDownOption, b: &DropDownOption) -> Ordering {
    natural_cmp(&a.label, &b.label)
}

/// Natural string comparison
///
/// Letters compare case-insensitively and runs of ASCII digits compare by
/// numeric value, so "S3" sorts before "S10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let run_a = take_digits(&mut a_chars);
                let run_b = take_digits(&mut b_chars);
                let ordering = compare_digit_runs(&run_a, &run_b);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(ca), Some(cb)) => {
                let ordering = ca.to_lowercase().cmp(cb.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                a_chars.next();
                b_chars.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConnectorDefinition;

    fn option(label: &str) -> DropDownOption {
        DropDownOption {
            label: label.to_string(),
            value: label.to_lowercase(),
            icon: None,
            release_stage: None,
        }
    }

    #[test]
    fn test_natural_cmp_numbers() {
        assert_eq!(natural_cmp("S3", "S10"), Ordering::Less);
        assert_eq!(natural_cmp("v007", "v7"), Ordering::Equal);
        assert_eq!(natural_cmp("file2b", "file2a"), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_ignores_case() {
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("MySQL", "mysql"), Ordering::Equal);
        assert_eq!(natural_cmp("Post", "Postgres"), Ordering::Less);
    }

    #[test]
    fn test_build_options_filters_and_sorts() {
        let catalog = Catalog::new(vec![
            ConnectorDefinition::new("3", "Zendesk"),
            ConnectorDefinition::new("1", "amplitude"),
            ConnectorDefinition::new("2", "Braintree"),
        ]);
        let options = build_options(&catalog, &["2".to_string()]);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["amplitude", "Zendesk"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_labels() {
        let catalog = Catalog::new(vec![
            ConnectorDefinition::new("second-id", "File"),
            ConnectorDefinition::new("a", "Apify"),
            ConnectorDefinition::new("first-id", "file"),
        ]);
        let options = build_options(&catalog, &[]);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["a", "second-id", "first-id"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let options = vec![option("PostgreSQL"), option("MySQL"), option("Postmark")];
        let found: Vec<&str> = search_options(&options, "post")
            .into_iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(found, vec!["PostgreSQL", "Postmark"]);
        assert_eq!(search_options(&options, "  ").len(), 3);
    }

    #[test]
    fn test_badge_stage_hides_generally_available() {
        let mut opt = option("Foo");
        assert!(opt.badge_stage().is_none());
        opt.release_stage = Some(ReleaseStage::GenerallyAvailable);
        assert!(opt.badge_stage().is_none());
        opt.release_stage = Some(ReleaseStage::Custom);
        assert_eq!(opt.badge_stage(), Some(&ReleaseStage::Custom));
    }
}
