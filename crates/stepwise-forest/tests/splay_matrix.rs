use stepwise_forest::{print_binary, BinaryShape, SplayTree, StepLog};

async fn tree_of(values: &[i64]) -> SplayTree<i64> {
    let mut tree = SplayTree::new();
    for &v in values {
        tree.insert(v).await;
    }
    tree
}

#[tokio::test]
async fn splay_insert_becomes_root_matrix() {
    let mut tree = SplayTree::new();
    for v in [10, 20, 30] {
        assert!(tree.insert(v).await);
        assert_eq!(tree.root_value(), Some(v));
        tree.assert_valid().unwrap();
    }
    assert_eq!(print_binary(&tree), "30\n└─ 20\n   └─ 10");

    assert!(tree.insert(15).await);
    assert_eq!(tree.root_value(), Some(15));
    assert_eq!(tree.values(), vec![10, 15, 20, 30]);
    tree.assert_valid().unwrap();
}

#[tokio::test]
async fn splay_lookup_moves_key_to_root_matrix() {
    let mut tree = SplayTree::with_hook(StepLog::new());
    for v in [10, 20, 30] {
        tree.insert(v).await;
    }
    let root = tree.root().unwrap();
    let n10 = tree.node(tree.node(root).left.unwrap()).left.unwrap();
    let ids = [tree.id(root), tree.id(n10)];

    tree.hook_mut().clear();
    assert!(tree.lookup(&10).await);
    assert_eq!(tree.root_value(), Some(10));
    // zig-zig: 30 is entered, then 10 two levels down.
    assert_eq!(tree.hook().visited(), ids.to_vec());
    assert_eq!(tree.hook().found(), Some(ids[1]));
    assert_eq!(print_binary(&tree), "10\n├─ ∅\n└─ 20\n   ├─ ∅\n   └─ 30");
    tree.assert_valid().unwrap();
}

#[tokio::test]
async fn splay_lookup_miss_lifts_nearest_matrix() {
    let mut tree = tree_of(&[10, 20, 30]).await;
    assert!(!tree.lookup(&15).await);
    assert_eq!(tree.root_value(), Some(10));
    assert_eq!(tree.values(), vec![10, 20, 30]);
    tree.assert_valid().unwrap();

    let mut empty = SplayTree::<i64>::new();
    assert!(!empty.lookup(&1).await);
}

#[tokio::test]
async fn splay_duplicate_insert_matrix() {
    let mut tree = tree_of(&[5, 1, 9]).await;
    assert!(!tree.insert(9).await);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.root_value(), Some(9));
    let shape = print_binary(&tree);
    assert!(!tree.insert(9).await);
    assert_eq!(print_binary(&tree), shape);
}

#[tokio::test]
async fn splay_delete_matrix() {
    let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]).await;
    assert!(tree.delete(&4).await);
    // The left subtree holds only smaller keys, so its maximum takes over.
    assert_eq!(tree.root_value(), Some(3));
    let root = tree.root().unwrap();
    assert!(tree.node(root).right.is_some_and(|r| tree.node(r).value > 4));
    assert!(tree.node(root).left.is_some_and(|l| tree.node(l).value < 4));
    assert_eq!(tree.values(), vec![1, 2, 3, 5, 6, 7]);
    tree.assert_valid().unwrap();
    assert!(!tree.lookup(&4).await);

    assert!(!tree.delete(&4).await);
    assert_eq!(tree.len(), 6);

    // Minimum has no left subtree: the right child is promoted.
    assert!(tree.delete(&1).await);
    assert_eq!(tree.values(), vec![2, 3, 5, 6, 7]);
    tree.assert_valid().unwrap();

    for v in [2, 3, 5, 6, 7] {
        assert!(tree.delete(&v).await);
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert!(!tree.delete(&2).await);
}

#[tokio::test]
async fn splay_delete_root_without_left_matrix() {
    let mut tree = tree_of(&[3, 2, 1]).await;
    assert_eq!(tree.root_value(), Some(1));
    assert!(tree.delete(&1).await);
    assert_eq!(tree.root_value(), Some(2));
    assert_eq!(tree.values(), vec![2, 3]);
}

#[tokio::test]
async fn splay_clear_matrix() {
    let mut tree = tree_of(&[1, 2]).await;
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.insert(2).await);
    assert_eq!(tree.values(), vec![2]);
}
