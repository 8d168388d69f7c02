use colored::Colorize;

use nightroll_application::{Category, SeedCatalog};
use nightroll_core::Item;

use super::{AppContext, print_item_line};

pub fn likes(ctx: &AppContext, category: Option<&str>) {
    let items: Vec<Item> = match category {
        Some(category) => ctx.store.liked(&SeedCatalog::normalize(category)).to_vec(),
        None => ctx.store.all_liked(),
    };
    print_list("Liked", &items);
}

pub fn passes(ctx: &AppContext, category: Option<&str>) {
    let items: Vec<Item> = match category {
        Some(category) => ctx.store.passed(&SeedCatalog::normalize(category)).to_vec(),
        None => ctx
            .store
            .selections()
            .passes()
            .values()
            .flatten()
            .cloned()
            .collect(),
    };
    print_list("Passed", &items);
}

pub fn unlike(ctx: &mut AppContext, category: &str, id: &str) {
    let category = SeedCatalog::normalize(category);
    if ctx.store.remove_like(&category, id) {
        println!("{} {}/{}", "✓ Removed".green(), category, id);
    } else {
        println!("{}", format!("{}/{} was not liked", category, id).bright_black());
    }
}

pub fn clear(ctx: &mut AppContext, category: &str) {
    let category = SeedCatalog::normalize(category);
    ctx.store.clear_category(&category);
    println!("{} {}", "✓ Cleared".green(), category);
}

pub fn categories() {
    for category in Category::all() {
        println!("{:<10} {}", category.slug(), category.label().bright_black());
    }
}

fn print_list(heading: &str, items: &[Item]) {
    println!("{} {}", format!("{}:", heading).bold(), items.len());
    for (index, item) in items.iter().enumerate() {
        print_item_line(index, item);
    }
}
