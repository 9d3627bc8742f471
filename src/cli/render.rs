//! Plain-text rendering of the directory's views.

use colored::*;

use martech_hub::controller::{LoadState, SubmissionStatus, View, ViewController};
use martech_hub::domain::{CategorySet, PriceFilter, ToolRecord};

/// Integrations shown on a listing card before "+N"
const CARD_INTEGRATIONS: usize = 3;

/// Render whichever view is active.
pub fn render(controller: &ViewController) -> String {
    if controller.is_loading() {
        return format!("{}\n", "Loading catalog...".dimmed());
    }
    match controller.current_view() {
        View::Home => render_home(controller),
        View::Listing => render_listing(controller),
        View::Profile => match controller.profile() {
            Some(tool) => render_profile(tool, controller.categories()),
            None => format!("{}\n", "No tool selected.".yellow()),
        },
        View::Submit => render_submit(controller.submission_status()),
    }
}

pub fn render_home(controller: &ViewController) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "MARTECH HUB".bold().cyan()));
    out.push_str("The elite directory for growth operations.\n\n");
    if let LoadState::Failed(reason) = controller.load_state() {
        out.push_str(&format!("{} {}\n\n", "Catalog unavailable:".red(), reason));
    }
    out.push_str(&format!("{} {} tools listed\n\n", "Directory:".green(), controller.catalog().len()));
    out.push_str(&render_categories(controller.categories()));
    out
}

pub fn render_categories(categories: &CategorySet) -> String {
    let mut out = format!("{}\n", "Categories".bold());
    for category in categories.iter() {
        out.push_str(&format!("  {} {:<18} ({})\n", category.icon, category.label, category.id));
    }
    out
}

pub fn render_listing(controller: &ViewController) -> String {
    let state = controller.state();
    let tools = controller.visible_tools();
    let mut out = String::new();

    out.push_str(&format!("{}\n", "TECHNOLOGICAL DOSSIER".bold()));
    let noun = if tools.len() == 1 { "tool" } else { "tools" };
    out.push_str(&format!("Found {} {} matching your criteria.\n", tools.len(), noun));

    let mut filters = Vec::new();
    if !state.search_query.is_empty() {
        filters.push(format!("search \"{}\"", state.search_query));
    }
    if let Some(category) = &state.active_category {
        filters.push(format!("category {}", controller.categories().label_for(category)));
    }
    if state.active_price_filter != PriceFilter::All {
        filters.push(format!("price {}", state.active_price_filter.label()));
    }
    if !filters.is_empty() {
        out.push_str(&format!("{} {}\n", "Filters:".dimmed(), filters.join(", ")));
    }
    out.push('\n');

    if tools.is_empty() {
        out.push_str(&format!("{}\n", "No tools found".yellow()));
        out.push_str("Try adjusting your filters or search terms.\n");
        return out;
    }

    for tool in tools {
        out.push_str(&render_card(tool));
    }
    out
}

pub fn render_card(tool: &ToolRecord) -> String {
    let mut out = format!(
        "{} {}  {}\n",
        format!("#{}", tool.id).dimmed(),
        tool.name.bold(),
        tool.pricing_starting_at.cyan()
    );
    out.push_str(&format!("    {} • {}\n", tool.category, tool.offering_type));
    out.push_str(&format!("    {}\n", tool.short_pitch));

    let (shown, hidden) = tool.integration_preview(CARD_INTEGRATIONS);
    if !shown.is_empty() {
        let mut line = shown.join(" · ");
        if hidden > 0 {
            line.push_str(&format!(" +{}", hidden));
        }
        out.push_str(&format!("    {}\n", line.dimmed()));
    }
    out.push('\n');
    out
}

pub fn render_profile(tool: &ToolRecord, categories: &CategorySet) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", tool.name.to_uppercase().bold()));
    out.push_str(&format!(
        "{} • {} • {}\n\n",
        categories.label_for(&tool.category),
        tool.offering_type,
        tool.pricing_starting_at.cyan()
    ));
    out.push_str(&format!("{}\n\n", tool.description));

    if !tool.features.is_empty() {
        out.push_str(&format!("{}\n", "Core Capabilities".bold()));
        for feature in &tool.features {
            out.push_str(&format!("  ✓ {}\n", feature));
        }
        out.push('\n');
    }

    out.push_str(&format!("{} {}\n", "Pricing model:".green(), tool.pricing_model));
    if !tool.location.is_empty() {
        out.push_str(&format!("{} {}\n", "Headquarters:".green(), tool.location));
    }
    if !tool.website_url.is_empty() {
        out.push_str(&format!("{} {}\n", "Website:".green(), tool.website_url));
    }
    if !tool.contact_email.is_empty() {
        out.push_str(&format!("{} {}\n", "Contact:".green(), tool.contact_email));
    }
    if !tool.integrations.is_empty() {
        out.push_str(&format!("{} {}\n", "Integrations:".green(), tool.integrations.join(", ")));
    }
    out
}

pub fn render_submit(status: &SubmissionStatus) -> String {
    match status {
        SubmissionStatus::Idle => format!(
            "{}\nType {} to enter the tool's details.\n",
            "SUBMIT NEW ASSET".bold(),
            "submit".cyan()
        ),
        SubmissionStatus::Submitting => format!("{}\n", "PROCESSING...".dimmed()),
        SubmissionStatus::Accepted { assigned_id } => {
            let id = assigned_id.map(|id| format!(" (reference #{})", id)).unwrap_or_default();
            format!(
                "{}{}\nOur editorial team will review your tool and update the directory within 48 hours.\n",
                "DOSSIER SUBMITTED".bold().green(),
                id
            )
        }
        SubmissionStatus::Rejected { reason } => {
            format!("{} {}\nYour draft was kept; fix it and submit again.\n", "Submission failed:".red(), reason)
        }
    }
}
