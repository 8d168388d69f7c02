use std::sync::Arc;

use nightroll_application::{SeedCatalog, SessionOutcome, Spinner, SwipeSession};
use nightroll_core::selection::InMemorySelectionRepository;
use nightroll_core::{Direction, Result, SelectionStore, StackState, SwipeThresholds};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn decide_front(
    session: &mut SwipeSession,
    store: &mut SelectionStore,
    direction: Direction,
) -> Result<SessionOutcome> {
    let (ticket, _) = session.front_ticket().unwrap();
    session.decide(store, ticket, direction)
}

#[test]
fn test_swipe_bar_and_show_then_spin() {
    let repo = Arc::new(InMemorySelectionRepository::new());
    let mut store = SelectionStore::open(repo.clone());
    let catalog = SeedCatalog::new();
    let mut rng = StdRng::seed_from_u64(11);

    let mut bar = SwipeSession::start(
        "bar",
        catalog.candidates("bar", &mut rng),
        SwipeThresholds::default(),
    );
    // like, pass, like, revert, pass, like
    bar.release(&mut store, 140.0, 0.0).unwrap();
    bar.release(&mut store, -140.0, 0.0).unwrap();
    bar.release(&mut store, 0.0, 800.0).unwrap();
    bar.release(&mut store, 20.0, 20.0).unwrap();
    decide_front(&mut bar, &mut store, Direction::Left).unwrap();
    let last = decide_front(&mut bar, &mut store, Direction::Right).unwrap();
    assert!(last.exhausted);
    assert_eq!(bar.state(), StackState::Exhausted);

    let mut show = SwipeSession::start(
        "show",
        catalog.candidates("show", &mut rng),
        SwipeThresholds::default(),
    );
    decide_front(&mut show, &mut store, Direction::Right).unwrap();

    let liked = store.all_liked();
    let ids: Vec<_> = liked.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "5", "s1"]);
    let passed: Vec<_> = store.passed("bar").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(passed, vec!["2", "4"]);

    let mut spinner = Spinner::new();
    let picked = spinner.spin(&liked, &mut rng).unwrap();
    let picked_item = liked[picked].clone();

    // Remove an entry other than the pick and keep the highlight on the same item.
    let removed = if picked == 0 { 1 } else { 0 };
    let victim = liked[removed].clone();
    assert!(store.remove_like(&victim.category, &victim.id));
    spinner.on_removed(removed);

    let liked = store.all_liked();
    assert_eq!(spinner.selected_item(&liked), Some(&picked_item));
    assert_eq!(repo.record(), Some(store.snapshot()));
}

#[test]
fn test_reswiping_random_deck_moves_items_between_lists() {
    let mut store = SelectionStore::open(Arc::new(InMemorySelectionRepository::new()));
    let catalog = SeedCatalog::new();
    let deck = catalog.candidates("random", &mut StdRng::seed_from_u64(5));

    let mut first = SwipeSession::start("random", deck.clone(), SwipeThresholds::default());
    while first.front().is_some() {
        decide_front(&mut first, &mut store, Direction::Right).unwrap();
    }
    assert_eq!(store.liked("random").len(), deck.len());

    let mut second = SwipeSession::start("random", deck.clone(), SwipeThresholds::default());
    while second.front().is_some() {
        decide_front(&mut second, &mut store, Direction::Left).unwrap();
    }
    assert!(store.liked("random").is_empty());
    assert_eq!(store.passed("random").len(), deck.len());
}
