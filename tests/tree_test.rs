//! Integration tests for expanding layouts into directory trees

use std::path::PathBuf;

use dirlayout::domain::{build_directory_tree, DirectoryTree, DomainError};
use dirlayout::util::testing;
use rstest::rstest;

fn names(tree: &DirectoryTree) -> Vec<&str> {
    tree.children.iter().map(|c| c.name.as_str()).collect()
}

fn paths(layout: &str) -> Vec<PathBuf> {
    testing::init_test_setup();
    build_directory_tree(layout).unwrap().leaf_paths()
}

#[test]
fn given_one_level_when_building_then_single_child() {
    let tree = build_directory_tree("hello").unwrap();
    assert_eq!(names(&tree), vec!["hello"]);
}

#[test]
fn given_one_level_with_count_when_building_then_numbered_children() {
    let tree = build_directory_tree("hello:3").unwrap();
    assert_eq!(names(&tree), vec!["hello 1", "hello 2", "hello 3"]);
}

#[test]
fn given_brackets_and_levels_when_building_then_suffix_attaches_at_every_leaf() {
    let tree = build_directory_tree("[hello:2 > world, earth] > test").unwrap();

    // hello 1, hello 2, earth
    assert_eq!(names(&tree), vec!["hello 1", "hello 2", "earth"]);

    for child in &tree.children[..2] {
        assert_eq!(names(child), vec!["world"]);
        assert_eq!(names(&child.children[0]), vec!["test"]);
    }
    assert_eq!(names(&tree.children[2]), vec!["test"]);
}

#[rstest]
#[case("site:2 > tree:2", &["site 1/tree 1", "site 1/tree 2", "site 2/tree 1", "site 2/tree 2"])]
#[case("[a, b] > c", &["a/c", "b/c"])]
#[case("[a, b > c] > d", &["a/d", "b/c/d"])]
#[case("[a, [b, c] > x] > y", &["a/y", "b/x/y", "c/x/y"])]
#[case("x > [a:0, b]", &["x/b"])]
#[case("chapter:b > section:B", &["chapter a/section A", "chapter a/section B", "chapter b/section A", "chapter b/section B"])]
fn given_layout_when_building_then_leaf_paths_match(#[case] layout: &str, #[case] expected: &[&str]) {
    let expected: Vec<PathBuf> = expected.iter().map(PathBuf::from).collect();
    assert_eq!(paths(layout), expected);
}

#[test]
fn given_chained_levels_when_building_then_branches_do_not_share_children() {
    let mut tree = build_directory_tree("hello:2 > world > deep").unwrap();

    tree.children[1].children[0].children.clear();

    assert_eq!(names(&tree.children[0].children[0]), vec!["deep"]);
    assert!(tree.children[1].children[0].children.is_empty());
}

#[test]
fn given_zero_count_when_building_then_empty_level() {
    let tree = build_directory_tree("empty:0").unwrap();
    assert!(tree.children.is_empty());
    assert_eq!(tree.dir_count(), 0);
}

#[test]
fn given_single_letter_a_count_when_building_then_range_of_one() {
    let tree = build_directory_tree("x:a").unwrap();
    assert_eq!(names(&tree), vec!["x a"]);
}

#[rstest]
#[case("hello:abc")]
#[case("hello:_")]
#[case("hello:z9")]
fn given_malformed_count_when_building_then_expansion_error(#[case] layout: &str) {
    let err = build_directory_tree(layout).unwrap_err();
    assert!(matches!(err, DomainError::Expansion { ref name, .. } if name == "hello"));
}
