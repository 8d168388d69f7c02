use colored::Colorize;

use nightroll_application::Spinner;

use super::{AppContext, print_item_line};

pub fn run(ctx: &AppContext) {
    let liked = ctx.store.all_liked();
    println!("{} {}", "Liked options:".bright_black(), liked.len());

    let mut spinner = Spinner::new();
    match spinner.spin(&liked, &mut rand::thread_rng()) {
        Some(index) => {
            for (i, item) in liked.iter().enumerate() {
                if i == index {
                    println!("{}", "  ↓".yellow());
                }
                print_item_line(i, item);
            }
            if let Some(item) = spinner.selected_item(&liked) {
                println!();
                println!("{} {}", "🎯".yellow(), item.title.bold().yellow());
            }
        }
        None => {
            println!(
                "{}",
                "Nothing to spin yet. Like something with `nightroll swipe <category>`."
                    .bright_black()
            );
        }
    }
}
