//! Interactive shell
//!
//! Sidebar-style tab switching over one session store. Each switch mounts
//! a fresh view, so filters start empty every time.

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use tokio_util::sync::CancellationToken;

use promptaudit::{
    category_options, AuditStatus, MockDataGenerator, Selection, DEFAULT_CATEGORIES,
};

use crate::config::Config;
use crate::session::{self, Store};
use crate::views::{
    render_placeholder, AuditsView, CreateForm, DashboardView, PromptsView, View,
};

/// Run the shell until the user quits
pub async fn run(config: &Config) -> Result<()> {
    let cancel = CancellationToken::new();
    let store = session::start(config, cancel.clone());

    println!("{} {}", "PromptAudit".cyan().bold(), "Audit platform".dimmed());

    let result = navigate(&store, config).await;

    // Abandon the initial load if it is still pending
    cancel.cancel();
    result
}

async fn navigate(store: &Store, config: &Config) -> Result<()> {
    let mut labels: Vec<&str> = View::ALL.iter().map(|v| v.label()).collect();
    labels.push("Quit");

    let mut current = config.default_view;
    loop {
        let default = View::ALL.iter().position(|v| *v == current).unwrap_or(0);
        let choice = Select::new()
            .with_prompt("Go to")
            .items(&labels)
            .default(default)
            .interact()
            .context("Failed to read selection")?;

        let Some(view) = View::ALL.get(choice).copied() else {
            return Ok(());
        };
        current = view;
        tracing::debug!(view = %view, placeholder = view.is_placeholder(), "Mounted view");

        match view {
            View::Dashboard => show_dashboard(store, config).await?,
            View::Prompts => browse_prompts(store).await?,
            View::Audits => browse_audits(store).await?,
            View::Create => create_prompt(store).await?,
            placeholder => println!("{}", render_placeholder(placeholder)),
        }
    }
}

async fn show_dashboard(store: &Store, config: &Config) -> Result<()> {
    let view = DashboardView::new(config.metrics_mode);
    let data = view.load(store).await?;
    println!("{}", view.render(store.is_loading(), &data, Utc::now()));
    Ok(())
}

fn loading_notice(store: &Store) {
    if store.is_loading() {
        println!("{}", "Data is still loading; showing what is available.".yellow());
    }
}

async fn browse_prompts(store: &Store) -> Result<()> {
    let mut view = PromptsView::new();
    loop {
        loading_notice(store);
        let prompts = store.prompts().await?;

        let query: String = Input::new()
            .with_prompt("Search prompts")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read search")?;

        let options = category_options(&prompts);
        let labels: Vec<String> = options
            .iter()
            .map(|o| match o {
                Selection::All => "All categories".to_string(),
                Selection::Only(category) => category.to_string(),
            })
            .collect();
        let picked = Select::new()
            .with_prompt("Category")
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read category")?;

        view.filter_mut().set_query(query);
        view.filter_mut()
            .set_category(options.get(picked).cloned().unwrap_or_default());
        println!("{}", view.render(&prompts));

        if !refine()? {
            return Ok(());
        }
    }
}

async fn browse_audits(store: &Store) -> Result<()> {
    let mut view = AuditsView::new();
    let options: Vec<Selection<AuditStatus>> = std::iter::once(Selection::All)
        .chain(AuditStatus::ALL.into_iter().map(Selection::Only))
        .collect();
    let labels: Vec<&str> = options
        .iter()
        .map(|o| match o {
            Selection::All => "All statuses",
            Selection::Only(status) => status.label(),
        })
        .collect();

    loop {
        loading_notice(store);
        let prompts = store.prompts().await?;
        let audits = store.audits().await?;

        let query: String = Input::new()
            .with_prompt("Search audits")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read search")?;
        let picked = Select::new()
            .with_prompt("Status")
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read status")?;

        view.filter_mut().set_query(query);
        view.filter_mut()
            .set_status(options.get(picked).cloned().unwrap_or_default());
        println!("{}", view.render(&audits, &prompts));

        if !refine()? {
            return Ok(());
        }
    }
}

fn refine() -> Result<bool> {
    Confirm::new()
        .with_prompt("Refine search?")
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

async fn create_prompt(store: &Store) -> Result<()> {
    let mut form = CreateForm::new();
    println!("{}", CreateForm::render_tips());

    form.title = Input::new()
        .with_prompt("Title")
        .interact_text()
        .context("Failed to read title")?;
    form.author = Input::new()
        .with_prompt("Author")
        .interact_text()
        .context("Failed to read author")?;

    let category = Select::new()
        .with_prompt("Category")
        .items(&DEFAULT_CATEGORIES)
        .default(0)
        .interact()
        .context("Failed to read category")?;
    form.category = DEFAULT_CATEGORIES
        .get(category)
        .map(|c| c.to_string())
        .unwrap_or_default();

    let statuses = CreateForm::statuses();
    let status_labels: Vec<&str> = statuses.iter().map(|s| s.label()).collect();
    let status = Select::new()
        .with_prompt("Status")
        .items(&status_labels)
        .default(0)
        .interact()
        .context("Failed to read status")?;
    form.status = statuses.get(status).copied().unwrap_or_default();

    let suggest = Confirm::new()
        .with_prompt("Start from a suggested template?")
        .default(false)
        .interact()
        .context("Failed to read confirmation")?;
    if suggest {
        let template = MockDataGenerator::from_entropy().content_template();
        form.apply_suggestion(template);
    } else {
        form.content = Input::new()
            .with_prompt("Content")
            .interact_text()
            .context("Failed to read content")?;
    }

    form.tags = Input::new()
        .with_prompt("Tags (comma-separated)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read tags")?;

    println!("\n{}", "Preview".bold());
    println!("{}", form.render_preview());

    let save = Confirm::new()
        .with_prompt("Save prompt?")
        .default(true)
        .interact()
        .context("Failed to read confirmation")?;
    if !save {
        println!("{}", "Discarded.".dimmed());
        return Ok(());
    }

    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            return Ok(());
        }
    };
    let prompt = store.add_prompt(draft).await?;
    println!("{} Prompt '{}' created ({})", "✓".green(), prompt.title, prompt.id);
    form.reset();

    Ok(())
}
