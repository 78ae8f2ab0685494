//! Chore checklist commands.
//!
//! The checklist is session-scoped by design -- nothing is persisted.
//! One-shot invocations build a fresh list, so `add` accepts several
//! texts and prints the resulting rows; toggling belongs to the
//! interactive `dashboard` session.

use clap::Subcommand;
use choreboard_core::{render, ChoreList};

#[derive(Subcommand)]
pub enum ChoreAction {
    /// Add one or more chores and print the resulting checklist
    Add {
        /// Chore texts (trimmed; empty entries are rejected)
        #[arg(required = true)]
        text: Vec<String>,
        /// Print the entries as JSON instead of rows
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ChoreAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChoreAction::Add { text, json } => {
            let mut list = ChoreList::new();
            for t in &text {
                let chore = list.add(t)?;
                if !json {
                    println!("Chore added: {}", chore.id);
                }
            }
            if json {
                println!("{}", serde_json::to_string_pretty(list.entries())?);
            } else {
                print!("{}", render::chore_list(&list));
            }
        }
    }
    Ok(())
}
