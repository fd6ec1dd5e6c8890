//! Property-based tests for resource paths
//!
//! Uses proptest to verify the path shape for arbitrary owners and IDs.

use ghprojects::Scope;
use ghprojects::projects::{Collection, ProjectPath};
use proptest::prelude::*;

fn scope() -> impl Strategy<Value = Scope> {
    prop_oneof![Just(Scope::Organization), Just(Scope::User)]
}

fn collection() -> impl Strategy<Value = Collection> {
    prop_oneof![Just(Collection::Items), Just(Collection::Fields)]
}

proptest! {
    /// Member paths have exactly six segments in the documented order
    #[test]
    fn member_path_has_documented_shape(
        scope in scope(),
        owner in "[a-zA-Z0-9][a-zA-Z0-9-]{0,38}",
        number in 1u64..1_000_000,
        collection in collection(),
        id in 1i64..i64::MAX,
    ) {
        let path = ProjectPath::project(scope, &owner, number).member(collection, id).to_string();
        let segments: Vec<&str> = path.split('/').collect();
        let expected = [
            scope.segment().to_string(),
            owner.clone(),
            "projectsV2".to_string(),
            number.to_string(),
            collection.segment().to_string(),
            id.to_string(),
        ];
        prop_assert_eq!(segments, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// A project path is always a prefix of its sub-collection paths
    #[test]
    fn project_path_prefixes_collections(
        scope in scope(),
        owner in "[a-z]{1,20}",
        number in 1u64..10_000,
        collection in collection(),
    ) {
        let project = ProjectPath::project(scope, &owner, number).to_string();
        let nested = ProjectPath::project(scope, &owner, number).collection(collection).to_string();
        let prefix = format!("{project}/");
        prop_assert!(nested.starts_with(&prefix));
        prop_assert!(!nested.ends_with('/'));
    }
}
