//! Quest management commands for CLI.

use clap::Subcommand;
use questlog_core::{Action, App, Difficulty};

use super::print_events;

#[derive(Subcommand)]
pub enum QuestAction {
    /// Add a new quest
    Add {
        /// Quest name
        name: String,
        /// Difficulty: easy, medium, hard, or epic
        #[arg(long, default_value = "medium")]
        difficulty: String,
        /// Free-form category tag
        #[arg(long, default_value = "custom")]
        category: String,
    },
    /// List quests
    List,
    /// Complete a quest and collect the reward
    Complete {
        /// Quest ID
        id: String,
    },
    /// Delete a quest
    Delete {
        /// Quest ID
        id: String,
    },
}

pub fn run(action: QuestAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load();

    match action {
        QuestAction::Add {
            name,
            difficulty,
            category,
        } => {
            let difficulty: Difficulty = difficulty.parse()?;
            let before = app.state().quests.len();
            app.dispatch(Action::AddQuest {
                name,
                difficulty,
                category,
            });
            if app.state().quests.len() == before {
                println!("Quest not added (empty name?).");
            } else {
                let quest = app.state().quests.last().expect("just added");
                println!("Quest added: {}", quest.id);
                println!("{}", serde_json::to_string_pretty(quest)?);
            }
        }
        QuestAction::List => {
            println!("{}", serde_json::to_string_pretty(&app.state().quests)?);
        }
        QuestAction::Complete { id } => {
            let events = app.dispatch(Action::CompleteQuest { id });
            let completed = events
                .iter()
                .any(|e| matches!(e, questlog_core::Event::QuestCompleted { .. }));
            if completed {
                print_events(&events)?;
            } else {
                println!("No such quest.");
            }
        }
        QuestAction::Delete { id } => {
            app.dispatch(Action::DeleteQuest { id });
            println!("{}", serde_json::to_string_pretty(&app.state().quests)?);
        }
    }

    Ok(())
}
