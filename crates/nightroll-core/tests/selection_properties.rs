use std::collections::HashMap;
use std::sync::Arc;

use nightroll_core::selection::InMemorySelectionRepository;
use nightroll_core::{
    DecisionStack, Direction, Item, SelectionStore, Selections, SwipeThresholds,
};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["bar", "show", "random"];

#[derive(Debug, Clone)]
enum Op {
    Like(usize, usize),
    Pass(usize, usize),
    Unlike(usize, usize),
    Clear(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..3usize, 0..6usize).prop_map(|(c, i)| Op::Like(c, i)),
        4 => (0..3usize, 0..6usize).prop_map(|(c, i)| Op::Pass(c, i)),
        1 => (0..3usize, 0..6usize).prop_map(|(c, i)| Op::Unlike(c, i)),
        1 => (0..3usize).prop_map(Op::Clear),
    ]
}

fn item(category: usize, id: usize) -> Item {
    Item::new(id.to_string(), CATEGORIES[category], format!("Item {id}"))
}

fn ids(items: &[Item]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

fn has_duplicates(ids: &[String]) -> bool {
    ids.iter()
        .enumerate()
        .any(|(n, id)| ids[..n].contains(id))
}

proptest! {
    #[test]
    fn prop_repeated_likes_keep_first_position(
        likes in prop::collection::vec((0..3usize, 0..6usize), 0..60)
    ) {
        let mut selections = Selections::new();
        let mut expected: HashMap<usize, Vec<String>> = HashMap::new();

        for (category, id) in likes {
            selections.add_like(CATEGORIES[category], item(category, id));
            let seen = expected.entry(category).or_default();
            if !seen.contains(&id.to_string()) {
                seen.push(id.to_string());
            }
        }

        for (index, category) in CATEGORIES.iter().enumerate() {
            let want = expected.remove(&index).unwrap_or_default();
            prop_assert_eq!(ids(selections.liked(category)), want);
        }
    }

    #[test]
    fn prop_lists_stay_unique_and_exclusive(ops in prop::collection::vec(op(), 0..80)) {
        let mut selections = Selections::new();
        // Last classification per (category, id): Some(true) liked, Some(false) passed.
        let mut model: HashMap<(usize, usize), Option<bool>> = HashMap::new();

        for op in ops {
            match op {
                Op::Like(c, i) => {
                    selections.add_like(CATEGORIES[c], item(c, i));
                    model.insert((c, i), Some(true));
                }
                Op::Pass(c, i) => {
                    selections.add_pass(CATEGORIES[c], item(c, i));
                    model.insert((c, i), Some(false));
                }
                Op::Unlike(c, i) => {
                    selections.remove_like(CATEGORIES[c], &i.to_string());
                    if model.get(&(c, i)) == Some(&Some(true)) {
                        model.insert((c, i), None);
                    }
                }
                Op::Clear(c) => {
                    selections.clear_category(CATEGORIES[c]);
                    model.retain(|(category, _), _| *category != c);
                }
            }

            for category in CATEGORIES {
                let liked = ids(selections.liked(category));
                let passed = ids(selections.passed(category));
                prop_assert!(!has_duplicates(&liked));
                prop_assert!(!has_duplicates(&passed));
                prop_assert!(liked.iter().all(|id| !passed.contains(id)));
            }
        }

        for ((c, i), state) in model {
            let id = i.to_string();
            prop_assert_eq!(selections.is_liked(CATEGORIES[c], &id), state == Some(true));
            prop_assert_eq!(selections.is_passed(CATEGORIES[c], &id), state == Some(false));
        }
    }

    #[test]
    fn prop_store_record_round_trips(ops in prop::collection::vec(op(), 0..40)) {
        let repo = Arc::new(InMemorySelectionRepository::new());
        let mut store = SelectionStore::open(repo.clone());

        for op in ops {
            match op {
                Op::Like(c, i) => {
                    store.add_like(CATEGORIES[c], item(c, i));
                }
                Op::Pass(c, i) => {
                    store.add_pass(CATEGORIES[c], item(c, i));
                }
                Op::Unlike(c, i) => {
                    store.remove_like(CATEGORIES[c], &i.to_string());
                }
                Op::Clear(c) => store.clear_category(CATEGORIES[c]),
            }
        }

        let json = serde_json::to_string(store.selections()).unwrap();
        let decoded: Selections = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&decoded, store.selections());

        let reopened = SelectionStore::open(repo);
        prop_assert_eq!(reopened.all_liked(), store.all_liked());
    }

    #[test]
    fn prop_reused_ticket_commits_once(deck in 1..8usize, repeats in 1..5usize) {
        let items: Vec<Item> = (0..deck).map(|i| item(0, i)).collect();
        let mut stack = DecisionStack::with_items(SwipeThresholds::default(), items);
        let (ticket, _) = stack.front_ticket().unwrap();
        let mut calls = Vec::new();
        let mut record = |item: &Item, _: Direction| calls.push(item.id.clone());

        prop_assert!(stack.commit(ticket, Direction::Right, &mut record).is_ok());
        for _ in 0..repeats {
            let err = stack.commit(ticket, Direction::Right, &mut record).unwrap_err();
            prop_assert!(err.is_invalid_state());
        }

        prop_assert_eq!(stack.len(), deck - 1);
        prop_assert_eq!(calls, vec!["0".to_string()]);
    }
}
