//! Interactive view command
//!
//! Each input line is the new search field text. An empty line clears the field,
//! and lines starting with `:` are commands.

use super::{loading_spinner, open_view};
use crate::SourceArgs;
use anyhow::{Context, Result};
use shelf_core::render::render;
use shelf_core::ViewState;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Type to search, empty line to clear, :asc / :desc to sort by year, :reload, :quit";

/// What a line of input asks the view to do
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Search(&'a str),
    SortAscending,
    SortDescending,
    Reload,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.strip_prefix(':') {
        Some("asc") | Some("up") => Input::SortAscending,
        Some("desc") | Some("down") => Input::SortDescending,
        Some("reload") => Input::Reload,
        Some("help") => Input::Help,
        Some("quit") | Some("q") => Input::Quit,
        Some(other) => Input::Unknown(other),
        None => Input::Search(line),
    }
}

/// Run the interactive view until `:quit` or end of input
pub async fn view(args: &SourceArgs) -> Result<()> {
    let view = open_view(args)?;
    let mut rx = view.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    view.mount();
    let mut spinner = Some(loading_spinner());

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = (*rx.borrow_and_update()).clone();
                redraw(&state, &mut spinner);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                match parse_input(&line) {
                    Input::Search(text) => view.on_search_change(text),
                    Input::SortAscending => view.on_sort_ascending(),
                    Input::SortDescending => view.on_sort_descending(),
                    Input::Reload => view.reload(),
                    Input::Help => println!("{}", HELP),
                    Input::Quit => break,
                    Input::Unknown(cmd) => println!("Unknown command :{} ({})", cmd, HELP),
                }
            }
        }
    }

    if let Some(spinner) = spinner.take() {
        spinner.finish_and_clear();
    }
    view.unmount();
    Ok(())
}

/// Show the spinner while loading, otherwise print the view
fn redraw(state: &ViewState, spinner: &mut Option<indicatif::ProgressBar>) {
    if state.loading {
        if spinner.is_none() {
            *spinner = Some(loading_spinner());
        }
        return;
    }
    if let Some(spinner) = spinner.take() {
        spinner.finish_and_clear();
    }
    print!("{}", render(state));
}
