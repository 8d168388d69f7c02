//! Built-in candidate decks per category.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use nightroll_core::Item;

/// Number of cards dealt for the mixed deck.
pub const RANDOM_DECK_SIZE: usize = 6;

/// Browsing themes offered on the home screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Bar,
    Show,
    Workout,
    Random,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Bar => "Bar",
            Category::Show => "Show",
            Category::Workout => "Workout",
            Category::Random => "Random",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Bar => "bar",
            Category::Show => "show",
            Category::Workout => "workout",
            Category::Random => "random",
        }
    }

    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
}

const BAR_SEEDS: &[Seed] = &[
    Seed { id: "1", title: "Tony Niks Cafe", subtitle: "Classic cocktails, cozy vibe", image: "/imgs/bar1.png" },
    Seed { id: "2", title: "Columbus Cafe", subtitle: "Views + small plates", image: "/imgs/bar2.png" },
    Seed { id: "3", title: "Boardroom", subtitle: "Password at the door", image: "/imgs/bar3.png" },
    Seed { id: "4", title: "Tupelo", subtitle: "Nightly sets at 9PM", image: "/imgs/bar4.png" },
    Seed { id: "5", title: "Lillie Coit's", subtitle: "Arcade bar", image: "/imgs/bar5.png" },
];

const WORKOUT_SEEDS: &[Seed] = &[
    Seed { id: "w1", title: "Bouldering Gym", subtitle: "Day pass", image: "/imgs/work1.png" },
    Seed { id: "w2", title: "Late Spin Class", subtitle: "45 mins sweat", image: "/imgs/work2.png" },
];

const SHOW_SEEDS: &[Seed] = &[
    Seed { id: "s1", title: "Comedy Night", subtitle: "9PM open mic", image: "/imgs/show1.png" },
    Seed { id: "s2", title: "Indie Band", subtitle: "Local venue", image: "/imgs/show2.png" },
];

/// Fixed seed decks.
///
/// Category slugs are case-insensitive. Unknown slugs get the bar deck under
/// their own (lowercased) category name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl SeedCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes a category slug.
    pub fn normalize(slug: &str) -> String {
        let trimmed = slug.trim();
        if trimmed.is_empty() {
            Category::Random.slug().to_string()
        } else {
            trimmed.to_lowercase()
        }
    }

    /// Display label for `slug`; unknown slugs are their own label.
    pub fn label(&self, slug: &str) -> String {
        let slug = Self::normalize(slug);
        match slug.parse::<Category>() {
            Ok(category) => category.label().to_string(),
            Err(_) => slug,
        }
    }

    /// The candidate deck for `slug`, with every item's category set to it.
    pub fn candidates<R>(&self, slug: &str, rng: &mut R) -> Vec<Item>
    where
        R: Rng + ?Sized,
    {
        let slug = Self::normalize(slug);
        let seeds: Vec<&Seed> = match slug.parse::<Category>() {
            Ok(Category::Workout) => WORKOUT_SEEDS.iter().collect(),
            Ok(Category::Show) => SHOW_SEEDS.iter().collect(),
            Ok(Category::Random) => {
                let mut all: Vec<&Seed> = BAR_SEEDS
                    .iter()
                    .chain(WORKOUT_SEEDS)
                    .chain(SHOW_SEEDS)
                    .collect();
                all.shuffle(rng);
                all.truncate(RANDOM_DECK_SIZE);
                all
            }
            Ok(Category::Bar) | Err(_) => BAR_SEEDS.iter().collect(),
        };

        seeds
            .into_iter()
            .map(|seed| {
                Item::new(seed.id, slug.as_str(), seed.title)
                    .with_subtitle(seed.subtitle)
                    .with_image_ref(seed.image)
            })
            .collect()
    }
}
