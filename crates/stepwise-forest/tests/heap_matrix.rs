use stepwise_forest::{BinaryShape, MaxHeap, StepLog};

fn storage<H>(heap: &MaxHeap<i64, H>) -> Vec<i64> {
    heap.as_slice().iter().map(|n| n.value).collect()
}

async fn heap_of(values: &[i64]) -> MaxHeap<i64> {
    let mut heap = MaxHeap::new();
    for &v in values {
        heap.insert(v).await;
    }
    heap
}

#[tokio::test]
async fn heap_insert_sifts_up_matrix() {
    let heap = heap_of(&[5, 3, 8, 1, 9]).await;
    assert_eq!(storage(&heap), vec![9, 8, 5, 1, 3]);
    assert_eq!(heap.peek(), Some(&9));
    assert_eq!(heap.len(), 5);
    heap.assert_valid().unwrap();
}

#[tokio::test]
async fn heap_delete_sifts_down_matrix() {
    let mut heap = heap_of(&[5, 3, 8, 1, 9]).await;
    assert!(heap.delete(&9).await);
    assert_eq!(storage(&heap), vec![8, 3, 5, 1]);
    heap.assert_valid().unwrap();

    assert!(heap.delete(&3).await);
    assert_eq!(storage(&heap), vec![8, 1, 5]);
    heap.assert_valid().unwrap();
}

#[tokio::test]
async fn heap_delete_sifts_up_matrix() {
    let mut heap = heap_of(&[10, 5, 9, 1, 2, 8, 7]).await;
    assert_eq!(storage(&heap), vec![10, 5, 9, 1, 2, 8, 7]);

    // The last element (7) lands under 5 and must rise.
    assert!(heap.delete(&1).await);
    assert_eq!(storage(&heap), vec![10, 7, 9, 5, 2, 8]);
    heap.assert_valid().unwrap();
}

#[tokio::test]
async fn heap_delete_last_and_missing_matrix() {
    let mut heap = heap_of(&[4, 2]).await;
    assert!(heap.delete(&2).await);
    assert_eq!(storage(&heap), vec![4]);
    assert!(!heap.delete(&2).await);
    assert!(heap.delete(&4).await);
    assert!(heap.is_empty());
    assert!(!heap.delete(&4).await);
    assert_eq!(heap.peek(), None);
}

#[tokio::test]
async fn heap_duplicates_matrix() {
    let mut heap = heap_of(&[4, 4, 1]).await;
    assert!(heap.delete(&4).await);
    assert!(heap.lookup(&4).await);
    assert!(heap.delete(&4).await);
    assert!(!heap.lookup(&4).await);
    assert_eq!(storage(&heap), vec![1]);
}

#[tokio::test]
async fn heap_lookup_steps_matrix() {
    let mut heap = MaxHeap::with_hook(StepLog::new());
    for v in [5, 3, 8, 1, 9] {
        heap.insert(v).await;
    }
    let ids: Vec<_> = heap.as_slice().iter().map(|n| n.id).collect();

    heap.hook_mut().clear();
    assert!(heap.lookup(&5).await);
    assert_eq!(heap.hook().visited(), ids[..3].to_vec());
    assert_eq!(heap.hook().found(), Some(ids[2]));

    heap.hook_mut().clear();
    assert!(!heap.lookup(&7).await);
    assert_eq!(heap.hook().visited(), ids);
    assert_eq!(heap.hook().found(), None);
}

#[tokio::test]
async fn heap_identity_follows_value_matrix() {
    let mut heap = MaxHeap::with_hook(StepLog::new());
    heap.insert(1).await;
    let one = heap.as_slice()[0].id;
    heap.insert(2).await;
    assert_eq!(heap.as_slice()[1].id, one);
    assert_eq!(heap.as_slice()[1].value, 1);
}

#[tokio::test]
async fn heap_view_matrix() {
    let mut heap = heap_of(&[5, 3, 8, 1, 9]).await;
    let view = heap.view();
    assert_eq!(view.len(), 5);
    let root = view.root().unwrap();
    assert_eq!(*view.value(root), 9);
    assert_eq!(view.id(root), heap.as_slice()[0].id);
    let l = view.left(root).unwrap();
    let r = view.right(root).unwrap();
    assert_eq!((*view.value(l), *view.value(r)), (8, 5));
    assert_eq!(view.left(l).map(|i| *view.value(i)), Some(1));
    assert_eq!(view.right(l).map(|i| *view.value(i)), Some(3));

    // The projection is a snapshot.
    heap.delete(&9).await;
    assert_eq!(*view.value(root), 9);
    assert_eq!(*heap.view().value(heap.view().root().unwrap()), 8);

    heap.clear();
    assert!(heap.view().is_empty());
}
