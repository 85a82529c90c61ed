pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "devscope")]
#[command(version, about = "Browse dev.to from your terminal", long_about = None)]
pub struct Cli {
    /// With no subcommand the home feed is shown.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Top posts, ranked over a timeline window
    Top {
        /// day, week, month, year or infinity; prompts if omitted
        timeline: Option<String>,
    },
    /// Posts under a tag
    #[command(alias = "t")]
    Tag {
        /// Tag to browse; prompts from the tag catalog if omitted
        tag: Option<String>,
    },
    /// Most recent posts
    #[command(alias = "l")]
    Latest,
    /// Full-text search
    #[command(alias = "s")]
    Search {
        /// Keyword to search for
        keyword: String,
    },
    /// Posts by an author
    #[command(alias = "a")]
    Author {
        /// The author's username
        username: String,

        /// Show the author's profile instead of their posts
        #[arg(short, long)]
        profile: bool,
    },
}
