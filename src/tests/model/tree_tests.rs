use super::*;

fn clip(name: &str) -> Media {
    Media::new(name, "", format!("{}.mp4", name), MediaType::Mp4)
}

/// Home
///   Clip1
///   Shows
///     Ep1
///     Ep2
///   Clip2
fn sample() -> ChannelTree {
    let mut tree = ChannelTree::new("Home");
    let root = NodePath::root();
    tree.push_child(&root, clip("Clip1").into()).unwrap();
    let shows = tree.add_sublist(&root, "Shows", "shows.png").unwrap();
    tree.push_child(&shows, clip("Ep1").into()).unwrap();
    tree.push_child(&shows, clip("Ep2").into()).unwrap();
    tree.push_child(&root, clip("Clip2").into()).unwrap();
    tree
}

fn names(tree: &ChannelTree) -> Vec<String> {
    tree.walk().map(|e| e.node.name().to_string()).collect()
}

fn p(s: &str) -> NodePath {
    s.parse().unwrap()
}

#[test]
fn new_tree_has_empty_root_named_after_channel() {
    let tree = ChannelTree::new("Kids");
    assert_eq!(tree.channel_name(), "Kids");
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root().image_url, "");
}

#[test]
fn from_root_forces_channel_name() {
    let tree = ChannelTree::from_root("Real", Sublist::new("stale", "x.png"));
    assert_eq!(tree.channel_name(), "Real");
    assert_eq!(tree.root().image_url, "x.png");
}

#[test]
fn add_sublist_appends_empty_sublist_at_end() {
    let mut tree = ChannelTree::new("Home");
    tree.push_child(&NodePath::root(), clip("Clip1").into())
        .unwrap();

    let path = tree.add_sublist(&NodePath::root(), "Kids", "").unwrap();

    assert_eq!(path, p("/1"));
    assert_eq!(tree.root().children.len(), 2);
    match &tree.root().children[1] {
        Node::Sublist(s) => {
            assert_eq!(s.name, "Kids");
            assert!(s.children.is_empty());
        }
        other => panic!("expected sublist, got {:?}", other),
    }
}

#[test]
fn add_media_sets_all_fields_and_defaults_loop_off() {
    let mut tree = sample();
    let path = tree
        .add_media(&p("/1"), "Ep3", "ep3.png", "ep3.m4a", MediaType::Audio)
        .unwrap();

    assert_eq!(path, p("/1/2"));
    let media = tree.get(&path).and_then(|n| n.as_media()).unwrap();
    assert_eq!(media.name, "Ep3");
    assert_eq!(media.image_url, "ep3.png");
    assert_eq!(media.media_url, "ep3.m4a");
    assert_eq!(media.media_type, MediaType::Audio);
    assert!(!media.looping);
}

#[test]
fn adding_under_media_fails_and_leaves_tree_unchanged() {
    let mut tree = sample();
    let before = tree.clone();

    let err = tree.add_sublist(&p("/0"), "Nope", "").unwrap_err();
    assert_eq!(err, TreeError::InvalidParentKind { path: p("/0") });

    let err = tree
        .add_media(&p("/1/0"), "Nope", "", "n.mp4", MediaType::Mp4)
        .unwrap_err();
    assert_eq!(err, TreeError::InvalidParentKind { path: p("/1/0") });

    assert_eq!(tree, before);
}

#[test]
fn adding_under_missing_path_is_path_not_found() {
    let mut tree = sample();
    let err = tree.add_sublist(&p("/9"), "x", "").unwrap_err();
    assert_eq!(err, TreeError::PathNotFound { path: p("/9") });

    // Running through a media node is a path that does not exist.
    let err = tree.add_sublist(&p("/0/0"), "x", "").unwrap_err();
    assert_eq!(err, TreeError::PathNotFound { path: p("/0/0") });
}

#[test]
fn modify_media_loop_changes_only_loop() {
    let mut tree = sample();
    let before = tree.get(&p("/0")).and_then(|n| n.as_media()).cloned().unwrap();

    tree.modify(&p("/0"), [FieldUpdate::Loop(true)]).unwrap();

    let after = tree.get(&p("/0")).and_then(|n| n.as_media()).cloned().unwrap();
    assert!(after.looping);
    assert_eq!(
        Media {
            looping: false,
            ..after
        },
        before
    );
}

#[test]
fn modify_sublist_with_media_field_is_rejected_atomically() {
    let mut tree = sample();
    let before = tree.clone();

    let err = tree
        .modify(
            &p("/1"),
            [FieldUpdate::Name("Renamed".into()), FieldUpdate::Loop(true)],
        )
        .unwrap_err();

    assert_eq!(
        err,
        TreeError::UnknownFieldForKind {
            field: "loop",
            kind: NodeKind::Sublist
        }
    );
    // The valid name update listed first was not applied either.
    assert_eq!(tree, before);
}

#[test]
fn modify_applies_multiple_fields() {
    let mut tree = sample();
    tree.modify(
        &p("/1/1"),
        [
            FieldUpdate::Name("Episode 2".into()),
            FieldUpdate::MediaUrl("e2.m4a".into()),
            FieldUpdate::MediaType(MediaType::Audio),
        ],
    )
    .unwrap();

    let m = tree.get(&p("/1/1")).and_then(|n| n.as_media()).unwrap();
    assert_eq!(m.name, "Episode 2");
    assert_eq!(m.media_url, "e2.m4a");
    assert_eq!(m.media_type, MediaType::Audio);
}

#[test]
fn root_image_can_change_but_name_cannot() {
    let mut tree = sample();
    tree.modify(&NodePath::root(), [FieldUpdate::ImageUrl("home.png".into())])
        .unwrap();
    assert_eq!(tree.root().image_url, "home.png");

    let err = tree
        .modify(&NodePath::root(), [FieldUpdate::Name("Other".into())])
        .unwrap_err();
    assert_eq!(err, TreeError::RootRename);
    assert_eq!(tree.channel_name(), "Home");
}

#[test]
fn modify_missing_path_is_path_not_found() {
    let mut tree = sample();
    let err = tree
        .modify(&p("/7"), [FieldUpdate::Name("x".into())])
        .unwrap_err();
    assert_eq!(err, TreeError::PathNotFound { path: p("/7") });
}

#[test]
fn delete_removes_one_node_and_shifts_later_siblings() {
    let mut tree = sample();
    let removed = tree.delete(&NodePath::root(), 0).unwrap();

    assert_eq!(removed.name(), "Clip1");
    assert_eq!(tree.root().children.len(), 2);
    assert_eq!(tree.get(&p("/0")).map(|n| n.name()), Some("Shows"));
    assert_eq!(tree.get(&p("/1")).map(|n| n.name()), Some("Clip2"));
}

#[test]
fn delete_sublist_removes_its_subtree() {
    let mut tree = sample();
    let removed = tree.delete(&NodePath::root(), 1).unwrap();

    match removed {
        Node::Sublist(s) => assert_eq!(s.children.len(), 2),
        other => panic!("expected sublist, got {:?}", other),
    }
    assert_eq!(names(&tree), vec!["Home", "Clip1", "Clip2"]);
}

#[test]
fn delete_out_of_range_reports_length() {
    let mut tree = sample();
    let err = tree.delete(&p("/1"), 2).unwrap_err();
    assert_eq!(err, TreeError::IndexOutOfRange { index: 2, len: 2 });
}

fn nested_to(depth: usize) -> (ChannelTree, NodePath) {
    let mut tree = ChannelTree::new("Deep");
    let mut path = NodePath::root();
    for i in 0..depth {
        path = tree.add_sublist(&path, format!("level{}", i), "").unwrap();
    }
    (tree, path)
}

#[test]
fn nesting_stops_at_max_depth_and_leaves_tree_unchanged() {
    let (mut tree, deepest) = nested_to(MAX_DEPTH);
    assert_eq!(deepest.depth(), MAX_DEPTH);

    let before = tree.clone();
    let err = tree.add_sublist(&deepest, "one too many", "").unwrap_err();
    assert_eq!(
        err,
        TreeError::TooDeep {
            path: deepest.clone(),
            max: MAX_DEPTH
        }
    );
    assert_eq!(
        tree.add_media(&deepest, "clip", "", "c.mp4", MediaType::Mp4)
            .unwrap_err(),
        err
    );
    assert_eq!(tree, before);
}

#[test]
fn pushing_a_subtree_counts_its_own_height() {
    let (mut tree, parent) = nested_to(MAX_DEPTH - 2);

    let mut inner = Sublist::new("inner", "");
    inner.children.push(clip("leaf").into());
    let mut outer = Sublist::new("outer", "");
    outer.children.push(inner.clone().into());
    assert!(matches!(
        tree.push_child(&parent, outer.into()),
        Err(TreeError::TooDeep { .. })
    ));

    // One level shallower fits exactly.
    let path = tree.push_child(&parent, inner.into()).unwrap();
    assert_eq!(path.child(0).depth(), MAX_DEPTH);
}

#[test]
fn deepest_buildable_tree_survives_the_wire() {
    let (tree, deepest) = nested_to(MAX_DEPTH);

    let doc = crate::wire::to_wire_string(&tree);
    let back = crate::wire::from_wire_str("Deep", &doc).unwrap();
    assert_eq!(back.len(), MAX_DEPTH + 1);
    assert_eq!(
        back.get(&deepest).map(|n| n.name().to_string()),
        Some(format!("level{}", MAX_DEPTH - 1))
    );
}

#[test]
fn delete_under_media_is_invalid_parent() {
    let mut tree = sample();
    let err = tree.delete(&p("/0"), 0).unwrap_err();
    assert_eq!(err, TreeError::InvalidParentKind { path: p("/0") });
}

#[test]
fn walk_is_preorder_and_stable() {
    let tree = sample();
    let expected = vec!["Home", "Clip1", "Shows", "Ep1", "Ep2", "Clip2"];
    assert_eq!(names(&tree), expected);
    assert_eq!(names(&tree), expected);

    let paths: Vec<String> = tree.walk().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["/", "/0", "/1", "/1/0", "/1/1", "/2"]);

    let depths: Vec<usize> = tree.walk().map(|e| e.depth).collect();
    assert_eq!(depths, vec![0, 1, 1, 2, 2, 1]);
}

#[test]
fn visible_rows_skip_children_of_collapsed_sublists() {
    let mut tree = sample();
    let visible: Vec<&str> = tree.visible_rows().map(|e| e.node.name()).collect();
    assert_eq!(visible, vec!["Home", "Clip1", "Shows", "Clip2"]);

    assert!(tree.toggle_expanded(&p("/1")).unwrap());
    let visible: Vec<&str> = tree.visible_rows().map(|e| e.node.name()).collect();
    assert_eq!(visible, vec!["Home", "Clip1", "Shows", "Ep1", "Ep2", "Clip2"]);
}

#[test]
fn expanded_flag_is_ui_state_only() {
    let mut tree = sample();
    tree.set_expanded(&p("/1"), true).unwrap();
    assert!(tree.get(&p("/1")).unwrap().expanded());
    assert_eq!(tree.len(), 6);

    let err = tree.set_expanded(&p("/5"), true).unwrap_err();
    assert_eq!(err, TreeError::PathNotFound { path: p("/5") });
}

#[test]
fn sublist_lookup_distinguishes_kind_and_absence() {
    let tree = sample();
    assert_eq!(tree.sublist(&p("/1")).unwrap().name, "Shows");
    assert!(matches!(
        tree.sublist(&p("/0")),
        Err(TreeError::InvalidParentKind { .. })
    ));
    assert!(matches!(
        tree.sublist(&p("/3")),
        Err(TreeError::PathNotFound { .. })
    ));
    assert_eq!(tree.kind_at(&p("/1/0")), Some(NodeKind::Media));
    assert_eq!(tree.kind_at(&p("/1/0/0")), None);
}

#[test]
fn path_parse_and_display() {
    assert_eq!(p("/"), NodePath::root());
    assert_eq!(p(""), NodePath::root());
    assert_eq!(p("0/2/1"), NodePath::from(vec![0, 2, 1]));
    assert_eq!(p("/0/2/1").to_string(), "/0/2/1");
    assert!("/0/x".parse::<NodePath>().is_err());
}

#[test]
fn path_after_removal_rebases_later_siblings() {
    let parent = p("/1");
    assert_eq!(p("/1/3/0").after_removal(&parent, 1), Some(p("/1/2/0")));
    assert_eq!(p("/1/0").after_removal(&parent, 1), Some(p("/1/0")));
    assert_eq!(p("/1/1").after_removal(&parent, 1), None);
    assert_eq!(p("/1/1/4").after_removal(&parent, 1), None);
    // Paths outside the parent and the parent itself are untouched.
    assert_eq!(p("/2/5").after_removal(&parent, 1), Some(p("/2/5")));
    assert_eq!(p("/1").after_removal(&parent, 0), Some(p("/1")));
}
