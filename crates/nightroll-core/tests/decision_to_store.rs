use std::sync::Arc;

use nightroll_core::selection::InMemorySelectionRepository;
use nightroll_core::{
    DecisionStack, Direction, GestureDecision, Item, SelectionStore, StackState, SwipeThresholds,
};

fn bar_items() -> Vec<Item> {
    ["1", "2", "3"]
        .iter()
        .map(|id| Item::new(*id, "bar", format!("Bar {id}")))
        .collect()
}

#[test]
fn test_swipes_flow_into_store() {
    let repo = Arc::new(InMemorySelectionRepository::new());
    let mut store = SelectionStore::open(repo.clone());
    let mut stack = DecisionStack::with_items(SwipeThresholds::default(), bar_items());

    let mut forward = |item: &Item, direction: Direction| match direction {
        Direction::Right => {
            store.add_like(&item.category, item.clone());
        }
        Direction::Left => {
            store.add_pass(&item.category, item.clone());
        }
    };

    let releases = [(150.0, 0.0), (30.0, 10.0), (0.0, -900.0), (0.0, 700.0)];
    let decisions: Vec<_> = releases
        .iter()
        .map(|(offset, velocity)| stack.release(*offset, *velocity, &mut forward).unwrap().0)
        .collect();

    assert_eq!(
        decisions,
        vec![
            GestureDecision::CommitRight,
            GestureDecision::Revert,
            GestureDecision::CommitLeft,
            GestureDecision::CommitRight,
        ]
    );
    assert_eq!(stack.state(), StackState::Exhausted);

    let liked: Vec<_> = store.all_liked().into_iter().map(|i| i.id).collect();
    assert_eq!(liked, vec!["1", "3"]);
    assert_eq!(store.passed("bar").len(), 1);
    assert_eq!(repo.record(), Some(store.snapshot()));
}

#[test]
fn test_mutual_exclusion_over_mixed_sequence() {
    let mut store = SelectionStore::open(Arc::new(InMemorySelectionRepository::new()));
    let ops = [
        ("bar", "1", true),
        ("bar", "1", false),
        ("bar", "2", true),
        ("show", "1", false),
        ("bar", "2", true),
        ("bar", "1", true),
        ("show", "1", true),
        ("bar", "2", false),
    ];

    for (category, id, like) in ops {
        let item = Item::new(id, category, "x");
        if like {
            store.add_like(category, item);
        } else {
            store.add_pass(category, item);
        }

        for category in ["bar", "show"] {
            for liked in store.liked(category) {
                assert!(
                    !store.passed(category).iter().any(|p| p.id == liked.id),
                    "{category}/{} is both liked and passed",
                    liked.id
                );
            }
        }
    }

    assert!(store.is_liked("bar", "1"));
    assert!(!store.is_liked("bar", "2"));
    assert!(store.is_liked("show", "1"));
}
