//! Views
//!
//! Each view renders store data to a string for the terminal. List views
//! keep their own filter state, created fresh every time the view is
//! mounted.

mod audits;
mod create;
mod dashboard;
pub mod format;
mod prompts;

pub use audits::AuditsView;
pub use create::CreateForm;
pub use dashboard::DashboardView;
pub use prompts::{render_prompt_detail, PromptsView};

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Sidebar tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    Prompts,
    Audits,
    Create,
    Analytics,
    Team,
    Settings,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Prompts,
        View::Audits,
        View::Create,
        View::Analytics,
        View::Team,
        View::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Prompts => "Prompts",
            View::Audits => "Audits",
            View::Create => "Create Prompt",
            View::Analytics => "Analytics",
            View::Team => "Team",
            View::Settings => "Settings",
        }
    }

    /// Tabs that only show a placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, View::Analytics | View::Team | View::Settings)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Dashboard => write!(f, "dashboard"),
            View::Prompts => write!(f, "prompts"),
            View::Audits => write!(f, "audits"),
            View::Create => write!(f, "create"),
            View::Analytics => write!(f, "analytics"),
            View::Team => write!(f, "team"),
            View::Settings => write!(f, "settings"),
        }
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dashboard" => Ok(View::Dashboard),
            "prompts" => Ok(View::Prompts),
            "audits" | "audit" => Ok(View::Audits),
            "create" => Ok(View::Create),
            "analytics" => Ok(View::Analytics),
            "team" => Ok(View::Team),
            "settings" => Ok(View::Settings),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}

/// Panel for tabs that are not built yet
pub fn render_placeholder(view: View) -> String {
    format!(
        "{}\n\n  {}\n",
        view.label().bold(),
        "This feature is under development...".dimmed()
    )
}
