//! PromptAudit CLI - Prompt library and audit dashboard
//!
//! Terminal front end over the session store: one-shot views for scripting
//! and an interactive shell for browsing.

mod config;
mod session;
mod shell;
mod views;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use promptaudit::{
    AuditFilter, AuditStatus, Category, DomainError, MockDataGenerator, PromptFilter,
    PromptStatus, Selection,
};

use config::{Config, MetricsMode};
use views::{
    render_placeholder, render_prompt_detail, AuditsView, CreateForm, DashboardView,
    PromptsView, View,
};

#[derive(Parser)]
#[command(name = "promptaudit")]
#[command(about = "PromptAudit - prompt library and quality audit dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the generated data (reproducible runs)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Delay before the initial data loads, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Show metrics recomputed from the current data
    #[arg(long, global = true)]
    live_metrics: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the overview dashboard
    Dashboard,

    /// List prompts
    Prompts {
        /// Text to look for in titles and content
        #[arg(short, long, default_value = "")]
        query: String,
        /// Category to show, or "all"
        #[arg(short, long, default_value = "all")]
        category: Selection<Category>,
        /// Print JSON instead of the formatted list
        #[arg(long)]
        json: bool,
    },

    /// List audits
    Audits {
        /// Text to look for in prompt titles and auditor names
        #[arg(short, long, default_value = "")]
        query: String,
        /// Status to show (pending, completed, in_review), or "all"
        #[arg(short, long, default_value = "all")]
        status: Selection<AuditStatus>,
        /// Print JSON instead of the formatted list
        #[arg(long)]
        json: bool,
    },

    /// Show one prompt and its audits
    Show {
        /// Prompt ID
        id: Uuid,
    },

    /// Create a prompt and list the library
    Create {
        #[arg(long)]
        title: String,
        /// Prompt content (omit with --suggest to use a template)
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: String,
        #[arg(long)]
        author: String,
        /// Initial status (draft, in_review, approved)
        #[arg(long, default_value = "draft")]
        status: PromptStatus,
        /// Tags (comma-separated, e.g., "AI,GPT")
        #[arg(long, default_value = "")]
        tags: String,
        /// Fill the content from a suggested template
        #[arg(long)]
        suggest: bool,
        /// Print the created prompt as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a tab by name (analytics, team, settings, ...)
    View {
        view: View,
    },

    /// Interactive shell
    Shell,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a configuration key (load_delay_ms, seed, metrics_mode, default_view)
    Set { key: String, value: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    apply_overrides(&mut config, &cli);

    match cli.command {
        None | Some(Commands::Shell) => shell::run(&config).await,
        Some(Commands::Dashboard) => cmd_dashboard(&config).await,
        Some(Commands::Prompts { query, category, json }) => {
            cmd_prompts(&config, PromptFilter::new(query, category), json).await
        }
        Some(Commands::Audits { query, status, json }) => {
            cmd_audits(&config, AuditFilter::new(query, status), json).await
        }
        Some(Commands::Show { id }) => cmd_show(&config, id).await,
        Some(Commands::Create {
            title,
            content,
            category,
            author,
            status,
            tags,
            suggest,
            json,
        }) => {
            let form = CreateForm {
                title,
                content: content.unwrap_or_default(),
                category,
                author,
                tags,
                status,
            };
            cmd_create(&config, form, suggest, json).await
        }
        Some(Commands::View { view }) => cmd_view(&config, view).await,
        Some(Commands::Config { action }) => cmd_config(config, action),
    }
}

/// Log to stderr, filtered by PROMPTAUDIT_LOG (default: warn)
fn init_tracing() {
    let _ = dotenvy::dotenv();
    let filter =
        EnvFilter::try_from_env("PROMPTAUDIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(delay) = cli.delay_ms {
        config.load_delay_ms = delay;
    }
    if cli.live_metrics {
        config.metrics_mode = MetricsMode::Live;
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_dashboard(config: &Config) -> Result<()> {
    let store = session::open_ready(config).await?;
    let view = DashboardView::new(config.metrics_mode);
    let data = view.load(&store).await?;
    println!("{}", view.render(store.is_loading(), &data, Utc::now()));
    Ok(())
}

async fn cmd_prompts(config: &Config, filter: PromptFilter, json: bool) -> Result<()> {
    let store = session::open_ready(config).await?;
    let prompts = store.prompts().await?;
    let view = PromptsView::with_filter(filter);

    if json {
        let visible = view.visible(&prompts);
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        println!("{}", view.render(&prompts));
    }
    Ok(())
}

async fn cmd_audits(config: &Config, filter: AuditFilter, json: bool) -> Result<()> {
    let store = session::open_ready(config).await?;
    let prompts = store.prompts().await?;
    let audits = store.audits().await?;
    let view = AuditsView::with_filter(filter);

    if json {
        let visible = view.visible(&audits, &prompts);
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        println!("{}", view.render(&audits, &prompts));
    }
    Ok(())
}

async fn cmd_show(config: &Config, id: Uuid) -> Result<()> {
    let store = session::open_ready(config).await?;
    let prompt = store
        .find_prompt(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Prompt", id))?;
    let audits = store.audits_for_prompt(id).await?;
    println!("{}", render_prompt_detail(&prompt, &audits));
    Ok(())
}

async fn cmd_create(config: &Config, mut form: CreateForm, suggest: bool, json: bool) -> Result<()> {
    if suggest && form.content.trim().is_empty() {
        let template = MockDataGenerator::with_seed(config.seed).content_template();
        form.apply_suggestion(template);
    }
    let draft = form.to_draft().context("Invalid prompt")?;

    let store = session::open_ready(config).await?;
    let prompt = store.add_prompt(draft).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prompt)?);
        return Ok(());
    }

    println!("{} Prompt '{}' created ({})", "✓".green(), prompt.title, prompt.id);
    let prompts = store.prompts().await?;
    println!("\n{}", PromptsView::new().render(&prompts));
    Ok(())
}

async fn cmd_view(config: &Config, view: View) -> Result<()> {
    match view {
        View::Dashboard => cmd_dashboard(config).await,
        View::Prompts => cmd_prompts(config, PromptFilter::default(), false).await,
        View::Audits => cmd_audits(config, AuditFilter::default(), false).await,
        View::Create => {
            println!("{}", CreateForm::render_tips());
            println!("{}", "Use 'promptaudit create' or the shell to add a prompt.".dimmed());
            Ok(())
        }
        placeholder => {
            println!("{}", render_placeholder(placeholder));
            Ok(())
        }
    }
}

fn cmd_config(mut config: Config, action: Option<ConfigAction>) -> Result<()> {
    if let Some(ConfigAction::Set { key, value }) = action {
        // Reload so command-line overrides are not persisted
        let mut stored = Config::load()?;
        stored.set(&key, &value)?;
        stored.save()?;
        println!("{} {} = {}", "✓".green(), key, value);
        config = stored;
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Load delay: {} ms", config.load_delay_ms);
    println!(
        "  Seed: {}",
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string())
            .cyan()
    );
    println!("  Metrics: {}", config.metrics_mode.to_string().cyan());
    println!("  Default view: {}", config.default_view.to_string().cyan());

    Ok(())
}
