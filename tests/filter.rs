//! Tests for group-based node filtering.
mod common;
use authflow_ui::prelude::*;
use common::*;

fn groups_of(nodes: &[&UiNode]) -> Vec<String> {
    nodes.iter().map(|n| n.group.clone()).collect()
}

fn ids_of(nodes: &[&UiNode]) -> Vec<String> {
    nodes.iter().map(|n| resolve_id(n)).collect()
}

#[test]
fn test_no_groups_returns_everything_in_order() {
    let nodes = login_nodes();
    let all_ids: Vec<String> = nodes.iter().map(resolve_id).collect();

    for filtered in [
        filter_by_groups(&nodes, Groups::none(), false),
        filter_by_groups(&nodes, "", false),
        filter_by_groups(&nodes, Vec::<String>::new(), false),
        filter_by_groups(&nodes, None::<&str>, true),
    ] {
        assert_eq!(filtered.len(), nodes.len());
        assert_eq!(ids_of(&filtered), all_ids);
    }
}

#[test]
fn test_default_group_is_included_implicitly() {
    let nodes = login_nodes();
    let filtered = filter_by_groups(&nodes, "password", false);

    assert_eq!(
        ids_of(&filtered),
        vec!["csrf_token", "identifier", "password", "method", "forgot_password"]
    );
    assert!(
        groups_of(&filtered)
            .iter()
            .all(|g| g == "password" || g == "default")
    );
}

#[test]
fn test_exclude_default_group() {
    let nodes = login_nodes();
    let filtered = filter_by_groups(&nodes, "password", true);

    assert_eq!(ids_of(&filtered), vec!["password", "method"]);
    assert!(groups_of(&filtered).iter().all(|g| g == "password"));
}

#[test]
fn test_list_and_comma_string_are_equivalent() {
    let nodes = login_nodes();
    let from_list = filter_by_groups(&nodes, ["password", "oidc"], false);
    let from_string = filter_by_groups(&nodes, "password,oidc", false);

    assert_eq!(ids_of(&from_list), ids_of(&from_string));
    assert_eq!(from_list.len(), nodes.len());

    let from_list = filter_by_groups(&nodes, vec!["oidc".to_string()], true);
    let from_string = filter_by_groups(&nodes, "oidc", true);
    assert_eq!(ids_of(&from_list), ids_of(&from_string));
    assert_eq!(ids_of(&from_list), vec!["provider"]);
}

#[test]
fn test_caller_group_list_is_not_mutated() {
    let nodes = login_nodes();
    let requested = vec!["password".to_string()];

    let first = filter_by_groups(&nodes, &requested, false);
    assert_eq!(requested, vec!["password".to_string()]);

    // Reusing the same list must give the same answer.
    let second = filter_by_groups(&nodes, &requested, false);
    assert_eq!(ids_of(&first), ids_of(&second));
    assert_eq!(requested.len(), 1);

    let slice: &[String] = &requested;
    let _ = filter_by_groups(&nodes, slice, false);
    assert_eq!(slice, ["password".to_string()]);
}

#[test]
fn test_no_duplicates_when_default_requested_explicitly() {
    let nodes = login_nodes();
    let filtered = filter_by_groups(&nodes, "default,default,password", false);

    assert_eq!(
        ids_of(&filtered),
        vec!["csrf_token", "identifier", "password", "method", "forgot_password"]
    );
}

#[test]
fn test_unknown_group_keeps_only_default() {
    let nodes = login_nodes();
    assert_eq!(
        ids_of(&filter_by_groups(&nodes, "passkey", false)),
        vec!["csrf_token", "identifier", "forgot_password"]
    );
    assert!(filter_by_groups(&nodes, "passkey", true).is_empty());
}

#[test]
fn test_groups_are_not_trimmed() {
    let nodes = login_nodes();
    // " oidc" is a different group from "oidc".
    assert!(filter_by_groups(&nodes, "password, oidc", true)
        .iter()
        .all(|n| n.group == "password"));
}

#[test]
fn test_builder_configuration() {
    let filter = GroupFilter::builder()
        .with_group(group::PASSWORD)
        .with_group(group::OIDC)
        .include_default_group(false)
        .build();

    assert!(!filter.is_passthrough());
    assert_eq!(filter.search_groups(), vec!["oidc", "password"]);

    let default_filter = GroupFilter::new("totp");
    assert_eq!(default_filter.search_groups(), vec!["default", "totp"]);

    let passthrough = GroupFilter::builder().include_default_group(false).build();
    assert!(passthrough.is_passthrough());
    assert!(passthrough.search_groups().is_empty());
}

#[test]
fn test_matches_and_retain_agree_with_apply() {
    let nodes = mixed_nodes();
    let filter = GroupFilter::new("password,webauthn");

    let borrowed: Vec<UiNode> = filter.apply(&nodes).into_iter().cloned().collect();
    let owned = filter.retain(nodes.clone());
    assert_eq!(borrowed, owned);

    for node in &nodes {
        assert_eq!(
            filter.matches(node),
            owned.iter().any(|kept| kept == node),
            "mismatch for node in group '{}'",
            node.group
        );
    }
    assert_eq!(owned.len(), 5);
}

#[test]
fn test_groups_conversions() {
    assert_eq!(Groups::parse("a,b").len(), 2);
    assert!(Groups::parse("").is_empty());
    assert_eq!(Groups::from("password,oidc").to_string(), "password,oidc");
    assert_eq!(
        Groups::from(vec!["a".to_string(), "b".to_string()]),
        Groups::from(["a", "b"])
    );
    assert_eq!(Groups::from(Some("x")), Groups::parse("x"));
    assert!(Groups::from(None::<&str>).is_empty());

    let collected: Groups = ["totp", "code"].iter().map(|g| g.to_string()).collect();
    assert_eq!(collected.iter().collect::<Vec<_>>(), vec!["totp", "code"]);
}
