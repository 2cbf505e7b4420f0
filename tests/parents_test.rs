//! Tests for ancestor traversal

use rstest::{fixture, rstest};
use simpletree::{NodeId, Tree, ValueSet, UNBOUNDED};

//      foo
//     /   \
//   bar   bar2
//   / \
// baz  blah
struct Family {
    tree: Tree<&'static str>,
    foo: NodeId,
    bar: NodeId,
    bar2: NodeId,
    baz: NodeId,
    blah: NodeId,
}

#[fixture]
fn family() -> Family {
    let mut tree = Tree::new("foo");
    let foo = tree.root_id();
    let bar = tree.add_child(foo, "bar").unwrap();
    let bar2 = tree.add_child(foo, "bar2").unwrap();
    let baz = tree.add_child(bar, "baz").unwrap();
    let blah = tree.add_child(bar, "blah").unwrap();
    Family {
        tree,
        foo,
        bar,
        bar2,
        baz,
        blah,
    }
}

fn values(nodes: Vec<&&'static str>) -> Vec<&'static str> {
    nodes.into_iter().copied().collect()
}

// ============================================================
// Parent iterator
// ============================================================

#[rstest]
fn given_leaf_when_iterating_parents_then_walks_up_to_root(family: Family) {
    let blah = family.tree.node(family.blah).unwrap();
    let mut it = blah.parent_iter();
    assert_eq!(it.next().map(|n| *n.value()), Some("bar"));
    assert_eq!(it.next().map(|n| *n.value()), Some("foo"));
    assert!(it.next().is_none());
    assert!(it.next().is_none());
}

#[rstest]
#[case::bar2("bar2", vec!["foo"])]
#[case::baz("baz", vec!["bar", "foo"])]
#[case::bar("bar", vec!["foo"])]
#[case::foo("foo", vec![])]
fn given_node_when_iterating_parents_then_yields_ancestors_nearest_first(
    family: Family,
    #[case] start: &'static str,
    #[case] expected: Vec<&str>,
) {
    let node = family.tree.root().get_first(&start).unwrap();
    let actual: Vec<&str> = node.parent_iter().map(|n| *n.value()).collect();
    assert_eq!(actual, expected);
}

#[rstest]
fn given_iterator_partially_consumed_when_creating_new_one_then_starts_fresh(family: Family) {
    let blah = family.tree.node(family.blah).unwrap();
    let mut first = blah.parent_iter();
    first.next();

    let second: Vec<&str> = blah.parent_iter().map(|n| *n.value()).collect();
    assert_eq!(second, vec!["bar", "foo"]);
}

// ============================================================
// get_parents / get_parent_values
// ============================================================

#[rstest]
#[case::zero(0, vec![])]
#[case::one(1, vec!["bar"])]
#[case::two(2, vec!["bar", "foo"])]
#[case::beyond_root(10000, vec!["bar", "foo"])]
#[case::unbounded(UNBOUNDED, vec!["bar", "foo"])]
fn given_max_depth_when_getting_parent_values_then_truncates(
    family: Family,
    #[case] max_depth: usize,
    #[case] expected: Vec<&str>,
) {
    let blah = family.tree.node(family.blah).unwrap();
    let none = ValueSet::new();
    assert_eq!(values(blah.get_parent_values(max_depth, &none)), expected);
}

#[rstest]
#[case::root_excluded("foo", vec!["bar"])]
#[case::parent_excluded("bar", vec![])]
#[case::uncle_excluded("bar2", vec!["bar", "foo"])]
#[case::sibling_excluded("baz", vec!["bar", "foo"])]
#[case::self_excluded("blah", vec!["bar", "foo"])]
fn given_exclusion_when_getting_parent_values_then_stops_at_first_match(
    family: Family,
    #[case] excluded: &'static str,
    #[case] expected: Vec<&str>,
) {
    let blah = family.tree.node(family.blah).unwrap();
    let exclude = ValueSet::from([excluded]);
    assert_eq!(values(blah.get_parent_values(UNBOUNDED, &exclude)), expected);
}

#[rstest]
fn given_excluded_parent_when_getting_deeper_ancestors_then_none_beyond_are_returned() {
    // a -> b -> c -> d; excluding c from d stops before b and a
    let mut tree = Tree::new("a");
    let b = tree.add_child(tree.root_id(), "b").unwrap();
    let c = tree.add_child(b, "c").unwrap();
    let d = tree.add_child(c, "d").unwrap();

    let d = tree.node(d).unwrap();
    assert!(d.get_parents(UNBOUNDED, &ValueSet::from(["c"])).is_empty());
    assert_eq!(
        values(d.get_parent_values(UNBOUNDED, &ValueSet::from(["b"]))),
        vec!["c"]
    );
}

#[rstest]
fn given_nodes_when_getting_parent_nodes_then_returns_handles(family: Family) {
    let none = ValueSet::new();
    let baz = family.tree.node(family.baz).unwrap();
    let ids: Vec<NodeId> = baz.get_parents(UNBOUNDED, &none).iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec![family.bar, family.foo]);
}

// ============================================================
// get_parent / get_parent_value
// ============================================================

#[rstest]
fn given_nodes_when_getting_parent_value_then_returns_immediate_parent(family: Family) {
    let none = ValueSet::new();
    let value_of = |id| family.tree.node(id).unwrap().get_parent_value(&none).copied();

    assert_eq!(value_of(family.blah), Some("bar"));
    assert_eq!(value_of(family.foo), None);
    assert_eq!(value_of(family.bar), Some("foo"));
    assert_eq!(value_of(family.bar2), Some("foo"));
    assert_eq!(value_of(family.baz), Some("bar"));
}

#[rstest]
fn given_excluded_parent_when_getting_parent_then_none(family: Family) {
    let bar = family.tree.node(family.bar).unwrap();
    assert!(bar.get_parent(&ValueSet::from(["foo"])).is_none());
    assert_eq!(bar.get_parent(&ValueSet::from(["bar"])).map(|n| n.id()), Some(family.foo));
}

#[rstest]
fn given_any_node_when_getting_parent_then_none_only_for_root(family: Family) {
    let none = ValueSet::new();
    let root = family.tree.root();
    for node in root.get_self_and_children(simpletree::Traversal::BreadthFirst, UNBOUNDED, &none) {
        assert_eq!(node.get_parent(&none).is_none(), node.is_root());
        assert_eq!(node.get_parent(&none).is_none(), node.id() == family.foo);
    }
}

#[rstest]
fn given_unchanged_tree_when_repeating_parent_queries_then_results_are_identical(family: Family) {
    let blah = family.tree.node(family.blah).unwrap();
    let exclude = ValueSet::from(["foo"]);
    let first = blah.get_parents(UNBOUNDED, &exclude);
    let second = blah.get_parents(UNBOUNDED, &exclude);
    assert_eq!(first, second);
}
