//! Interactive browse session.
//!
//! Reads one command per line, forwards it to the controller and re-renders
//! the active view. The `submit` command walks through the required form
//! fields; a failed submission keeps the draft so it can be sent again.

use colored::*;
use eyre::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use martech_hub::controller::{UiEffect, View, ViewController};
use martech_hub::domain::{CategoryId, PriceFilter};
use martech_hub::submission::{DraftField, ToolDraft};

use super::render;

/// A parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCommand {
    Home,
    Tools,
    Search(String),
    Category(Option<CategoryId>),
    Price(PriceFilter),
    Open(u64),
    Back,
    Submit,
    Help,
    Quit,
}

/// Parse a line of input. Errors carry a message for the user.
pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "home" => Ok(BrowseCommand::Home),
        "tools" | "list" => Ok(BrowseCommand::Tools),
        "search" | "/" => Ok(BrowseCommand::Search(rest.to_string())),
        "category" | "cat" => match rest {
            "" => Err("usage: category <id|all>".to_string()),
            "all" => Ok(BrowseCommand::Category(None)),
            id => Ok(BrowseCommand::Category(Some(CategoryId::new(id)))),
        },
        "price" => rest
            .parse::<PriceFilter>()
            .map(BrowseCommand::Price)
            .map_err(|e| format!("{} (try: all, free, entry, pro, enterprise)", e)),
        "open" | "show" => rest
            .parse::<u64>()
            .map(BrowseCommand::Open)
            .map_err(|_| "usage: open <tool id>".to_string()),
        "back" => Ok(BrowseCommand::Back),
        "submit" => Ok(BrowseCommand::Submit),
        "help" | "?" => Ok(BrowseCommand::Help),
        "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command: {} (type help)", other)),
    }
}

/// Whether the session keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply a navigation or filter command. `Submit` only opens the form.
///
/// On the home screen, search and category picks jump to the listing; on the
/// listing they only change the filters.
pub fn apply(controller: &mut ViewController, command: &BrowseCommand) -> Flow {
    let on_listing = controller.current_view() == View::Listing;
    match command {
        BrowseCommand::Home => controller.navigate(View::Home, None),
        BrowseCommand::Tools => controller.navigate(View::Listing, None),
        BrowseCommand::Search(q) if on_listing => controller.set_search_query(q.clone()),
        BrowseCommand::Search(q) => controller.search(q.clone()),
        BrowseCommand::Category(c) if on_listing => controller.set_active_category(c.clone()),
        BrowseCommand::Category(Some(c)) => controller.select_category(c.clone()),
        BrowseCommand::Category(None) => {
            controller.set_active_category(None);
            controller.navigate(View::Listing, None);
        }
        BrowseCommand::Price(p) => controller.set_active_price_filter(*p),
        BrowseCommand::Open(id) => controller.open_tool(*id),
        BrowseCommand::Back => controller.navigate(View::Listing, None),
        BrowseCommand::Submit => {
            controller.reset_submission();
            controller.navigate(View::Submit, None);
        }
        BrowseCommand::Help => {}
        BrowseCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

pub fn help_text() -> String {
    [
        "Commands:",
        "  home                 landing screen",
        "  tools                tool listing",
        "  search <text>        filter by name or pitch",
        "  category <id|all>    filter by category",
        "  price <bucket>       all, free, entry, pro, enterprise",
        "  open <id>            tool profile",
        "  back                 return to the listing",
        "  submit               submit a new tool",
        "  quit",
    ]
    .join("\n")
}

/// Line-driven session over any async reader.
pub struct BrowseSession<R> {
    lines: Lines<R>,
    draft: ToolDraft,
}

impl<R: AsyncBufRead + Unpin> BrowseSession<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            draft: ToolDraft::new(),
        }
    }

    /// Run until `quit` or end of input.
    pub async fn run(&mut self, controller: &mut ViewController) -> Result<()> {
        print!("{}", render::render(controller));
        println!("{}", "Type help for commands.".dimmed());

        while let Some(line) = self.prompt("> ").await? {
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    if !message.is_empty() {
                        println!("{}", message.yellow());
                    }
                    continue;
                }
            };
            log::debug!("browse command: {:?}", command);

            if command == BrowseCommand::Help {
                println!("{}", help_text());
                continue;
            }
            if apply(controller, &command) == Flow::Quit {
                break;
            }
            if command == BrowseCommand::Submit && !self.fill_draft().await? {
                break;
            }
            if command == BrowseCommand::Submit {
                println!("{}", "PROCESSING...".dimmed());
                // Failure is reported through the submission status
                let _ = controller.submit(&self.draft).await;
                if controller.submission_status().is_accepted() {
                    self.draft = ToolDraft::new();
                }
            }

            for effect in controller.take_effects() {
                match effect {
                    UiEffect::ScrollToTop => println!(),
                }
            }
            print!("{}", render::render(controller));
        }
        Ok(())
    }

    async fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        use std::io::Write;
        print!("{}", label);
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }

    /// Ask for each required field, keeping previous answers on empty input.
    /// Returns false when input ends.
    async fn fill_draft(&mut self) -> Result<bool> {
        for field in DraftField::REQUIRED {
            let current = self.draft.field(field).to_string();
            let label = if current.is_empty() {
                format!("{}: ", field.label())
            } else {
                format!("{} [{}]: ", field.label(), current)
            };
            let Some(answer) = self.prompt(&label).await? else {
                return Ok(false);
            };
            let answer = answer.trim();
            if !answer.is_empty() {
                set_field(&mut self.draft, field, answer);
            }
        }
        Ok(true)
    }
}

fn set_field(draft: &mut ToolDraft, field: DraftField, value: &str) {
    let value = value.to_string();
    match field {
        DraftField::Name => draft.name = value,
        DraftField::Category => draft.category = value,
        DraftField::ShortPitch => draft.short_pitch = value,
        DraftField::Description => draft.description = value,
        DraftField::PricingModel => draft.pricing_model = value,
        DraftField::PricingStartingAt => draft.pricing_starting_at = value,
        DraftField::ContactEmail => draft.contact_email = value,
    }
}
