pub mod profile;
pub mod spinner;

use std::io;

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Select};

use crate::app::{DevscopeError, Result};
use crate::domain::{Article, Tag, Timeline};

/// Arrow-key picker over article titles. Resolution is by index, so two
/// posts sharing a title can never open the wrong link. `None` means the
/// user dismissed the prompt.
pub fn select_article(articles: &[Article]) -> Result<Option<&Article>> {
    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();

    let picked = guard(
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Pick an article")
            .items(&titles)
            .default(0)
            .interact_opt(),
    )?;

    Ok(picked.map(|index| &articles[index]))
}

pub fn select_timeline() -> Result<Option<Timeline>> {
    let labels: Vec<&str> = Timeline::ALL.iter().map(|w| w.as_str()).collect();

    let picked = guard(
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Top posts from the last")
            .items(&labels)
            .default(0)
            .interact_opt(),
    )?;

    Ok(picked.map(|index| Timeline::ALL[index]))
}

/// Type-to-filter picker over the tag catalog.
pub fn select_tag(tags: &[Tag]) -> Result<Option<String>> {
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();

    let picked = guard(
        FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Pick a tag")
            .items(&names)
            .default(0)
            .interact_opt(),
    )?;

    Ok(picked.map(|index| tags[index].name.clone()))
}

// Prompts hide the cursor while active; put it back before the process
// dies on Ctrl-C so the terminal is left usable.
fn guard<T>(outcome: std::result::Result<Option<T>, dialoguer::Error>) -> Result<Option<T>> {
    match outcome {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            let _ = Term::stderr().show_cursor();
            Err(DevscopeError::Interrupted)
        }
        Err(err) => Err(err.into()),
    }
}
