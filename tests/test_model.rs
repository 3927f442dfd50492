use phyloxml_writer::model::{AttributeColumn, AttributedTree, ColumnSet, Value};

// --- TESTS TREE ---
#[test]
fn test_building_tree() {
    let mut tree = AttributedTree::new();
    let root = tree.add_root();
    let (a, edge_a) = tree.add_child(root);
    let (b, edge_b) = tree.add_child(root);
    let (c, edge_c) = tree.add_child(a);

    // Counts
    assert_eq!(tree.num_vertices(), 4);
    assert_eq!(tree.num_edges(), 3);
    assert_eq!(tree.num_leaves(), 2);

    // Root
    assert_eq!(tree.root_index(), root);
    assert!(tree.root().is_root());
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.root().incoming_edge(), None);

    // Navigation
    assert_eq!(tree.children(root), &[a, b]);
    assert_eq!(tree.children(a), &[c]);
    assert_eq!(tree.parent(c), Some(a));
    assert!(tree[b].is_leaf());
    assert_eq!(tree[c].incoming_edge(), Some(edge_c));

    // Edges
    assert_eq!(tree.edge_between(root, a), Some(edge_a));
    assert_eq!(tree.edge_between(root, b), Some(edge_b));
    assert_eq!(tree.edge_between(a, c), Some(edge_c));
    assert_eq!(tree.edge_between(root, c), None);
    assert_eq!(tree.edge_between(a, root), None);
    assert_eq!(tree.edge(edge_c).source(), a);
    assert_eq!(tree.edge(edge_c).target(), c);

    assert!(tree.is_valid());
}

#[test]
fn test_pre_order_iter() {
    let mut tree = AttributedTree::new();
    let root = tree.add_root();
    let (a, _) = tree.add_child(root);
    let (b, _) = tree.add_child(root);
    let (c, _) = tree.add_child(a);
    let (d, _) = tree.add_child(a);
    let (e, _) = tree.add_child(b);

    let order: Vec<_> = tree.pre_order_iter().map(|v| v.index()).collect();
    assert_eq!(order, vec![root, a, c, d, b, e]);
}

#[test]
fn test_pre_order_iter_empty_tree() {
    let tree = AttributedTree::new();
    assert_eq!(tree.pre_order_iter().count(), 0);
}

#[test]
fn test_validity_checks_columns() {
    let mut tree = AttributedTree::new();
    let root = tree.add_root();
    tree.add_child(root);
    assert!(tree.is_valid());

    tree.vertex_data_mut().add(AttributeColumn::new("rate", vec![1.0]));
    assert!(!tree.is_valid());

    tree.vertex_data_mut().add(AttributeColumn::new("rate", vec![1.0, 2.0]));
    tree.edge_data_mut().add(AttributeColumn::new("weight", Vec::<f64>::new()));
    assert!(!tree.is_valid());
}

#[test]
fn test_empty_tree_not_valid() {
    assert!(!AttributedTree::new().is_valid());
}

#[test]
#[should_panic]
fn test_second_root_panics() {
    let mut tree = AttributedTree::new();
    tree.add_root();
    tree.add_root();
}

#[test]
#[should_panic]
fn test_child_of_missing_parent_panics() {
    let mut tree = AttributedTree::new();
    tree.add_root();
    tree.add_child(5);
}

// --- TESTS COLUMNS ---
#[test]
fn test_column_values() {
    let column = AttributeColumn::new("height", vec![0.5, 1.0]);

    assert_eq!(column.name(), "height");
    assert_eq!(column.num_components(), 1);
    assert_eq!(column.num_tuples(), 2);
    assert_eq!(column.value_at(1), Some(&Value::Double(1.0)));
    assert_eq!(column.value_at(2), None);
    assert_eq!(column.string_at(0), "0.5");
    assert_eq!(column.string_at(9), "");
}

#[test]
fn test_column_components() {
    let column = AttributeColumn::with_components("color", 3, vec![1u8, 2, 3, 4, 5, 6, 7]);

    // Incomplete trailing tuple is ignored
    assert_eq!(column.num_tuples(), 2);
    assert_eq!(column.value_at(1), Some(&Value::UnsignedChar(4)));
    assert_eq!(column.component(1, 2), Some(&Value::UnsignedChar(6)));
    assert_eq!(column.component(1, 3), None);
    assert_eq!(column.component(2, 0), None);
}

#[test]
fn test_column_metadata() {
    let mut column = AttributeColumn::new("confidence", vec![0.9])
        .with_metadata("type", "bootstrap")
        .with_metadata("unit", "");

    assert_eq!(column.metadata("type"), Some("bootstrap"));
    assert_eq!(column.metadata("unit"), Some(""));
    assert_eq!(column.non_empty_metadata("unit"), None);
    assert_eq!(column.metadata("authority"), None);

    column.set_metadata("type", "probability");
    assert_eq!(column.metadata("type"), Some("probability"));
}

#[test]
#[should_panic]
fn test_zero_components_panics() {
    AttributeColumn::with_components("empty", 0, vec![1]);
}

// --- TESTS COLUMN SET ---
#[test]
fn test_column_set_lookup_and_order() {
    let mut set = ColumnSet::new();
    assert!(set.is_empty());

    assert_eq!(set.add(AttributeColumn::new("b", vec![1])), 0);
    assert_eq!(set.add(AttributeColumn::new("a", vec![2])), 1);

    assert_eq!(set.len(), 2);
    assert!(set.contains("a"));
    assert!(!set.contains("c"));
    assert_eq!(set.position("a"), Some(1));
    assert_eq!(set.get("b").unwrap().string_at(0), "1");
    assert_eq!(set.column(1).unwrap().name(), "a");
    assert!(set.get("c").is_none());

    let names: Vec<&str> = set.iter().map(AttributeColumn::name).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_column_set_replaces_same_name() {
    let mut set = ColumnSet::new();
    set.add(AttributeColumn::new("x", vec![1]));
    set.add(AttributeColumn::new("y", vec![2]));
    assert_eq!(set.add(AttributeColumn::new("x", vec!["one"])), 0);

    assert_eq!(set.len(), 2);
    assert_eq!(set.get("x").unwrap().string_at(0), "one");

    set.get_mut("y").unwrap().set_metadata("unit", "m");
    assert_eq!(set.get("y").unwrap().metadata("unit"), Some("m"));
}
