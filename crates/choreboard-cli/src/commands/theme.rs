use clap::Subcommand;
use choreboard_core::theme::{self, ThemeState};
use choreboard_core::Preferences;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the active theme tag
    Get,
    /// Select a theme and persist it
    Set {
        /// Theme tag (stored verbatim, even if unknown)
        tag: String,
    },
    /// List the stock theme tags
    List,
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ThemeAction::Get => {
            let prefs = Preferences::load()?;
            let state = ThemeState::from_saved(prefs.theme());
            println!("{}", state.active());
        }
        ThemeAction::Set { tag } => {
            let mut prefs = Preferences::load()?;
            prefs.set_theme(&tag);
            prefs.save()?;
            // The tag is stored verbatim either way.
            if !ThemeState::is_known(&tag) {
                eprintln!("note: '{tag}' is not a stock theme");
            }
            println!("ok");
        }
        ThemeAction::List => {
            let prefs = Preferences::load()?;
            let state = ThemeState::from_saved(prefs.theme());
            for tag in theme::KNOWN_TAGS {
                if tag == state.active() {
                    println!("{tag} (active)");
                } else {
                    println!("{tag}");
                }
            }
        }
    }
    Ok(())
}
