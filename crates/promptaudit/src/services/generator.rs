//! Mock Data Generator
//!
//! Produces the synthetic dataset the dashboard starts with: a fixed number
//! of prompts, audits that reference them, and the load-time metrics snapshot.
//! The output is a pure function of the random source, so a seeded
//! [`StdRng`] gives a reproducible dataset.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

use super::lorem;
use crate::domain::{
    AuditItem, AuditScores, AuditStatus, Category, MetricsSnapshot, Priority, Prompt,
    PromptStatus, DEFAULT_CATEGORIES,
};

/// Number of prompts in a generated dataset
pub const PROMPT_COUNT: usize = 12;

/// Number of audits in a generated dataset
pub const AUDIT_COUNT: usize = 8;

/// Tag vocabulary, drawn without replacement
pub const TAG_VOCABULARY: [&str; 5] = ["AI", "GPT", "Creative", "Analysis", "Automation"];

const MAX_VERSION: u32 = 5;
const SUGGESTION_COUNT: usize = 3;
const PAST_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;
const RECENT_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Fill-in-the-blank templates offered by the create form
pub const CONTENT_TEMPLATES: [&str; 3] = [
    "You are an expert in {field}. Your task is {specific goal}. Consider {important context} and provide {expected kind of result}.",
    "As a {professional role}, analyze {situation/data} and recommend {specific actions} based on {evaluation criteria}.",
    "Write a {kind of content} for {audience} that {content goal}. The tone should be {communication style} and include {specific elements}.",
];

/// A complete generated dataset
#[derive(Debug, Clone, Serialize)]
pub struct MockDataset {
    pub prompts: Vec<Prompt>,
    pub audits: Vec<AuditItem>,
    pub metrics: MetricsSnapshot,
}

/// Generator over any random source
pub struct MockDataGenerator<R: Rng> {
    rng: R,
}

impl MockDataGenerator<StdRng> {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> MockDataGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate prompts, audits over them, and the metrics snapshot
    pub fn generate(&mut self, now: DateTime<Utc>) -> MockDataset {
        let prompts = self.prompts(now);
        let audits = self.audits(&prompts, now);
        let metrics = MetricsSnapshot::snapshot(&prompts, &audits);

        tracing::debug!(
            prompts = prompts.len(),
            audits = audits.len(),
            "Generated mock dataset"
        );

        MockDataset {
            prompts,
            audits,
            metrics,
        }
    }

    /// Generate [`PROMPT_COUNT`] prompts
    pub fn prompts(&mut self, now: DateTime<Utc>) -> Vec<Prompt> {
        (0..PROMPT_COUNT).map(|i| self.prompt(i + 1, now)).collect()
    }

    /// Generate [`AUDIT_COUNT`] audits, each referencing one of `prompts`
    ///
    /// Returns no audits when there is nothing to reference.
    pub fn audits(&mut self, prompts: &[Prompt], now: DateTime<Utc>) -> Vec<AuditItem> {
        if prompts.is_empty() {
            return Vec::new();
        }
        (0..AUDIT_COUNT)
            .filter_map(|_| {
                let prompt_id = prompts.choose(&mut self.rng)?.id;
                Some(self.audit(prompt_id, now))
            })
            .collect()
    }

    /// Pick one of the content templates
    pub fn content_template(&mut self) -> &'static str {
        CONTENT_TEMPLATES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(CONTENT_TEMPLATES[0])
    }

    fn prompt(&mut self, ordinal: usize, now: DateTime<Utc>) -> Prompt {
        let title = format!("Prompt {}: {}", ordinal, lorem::words(&mut self.rng, 4));
        let content = lorem::paragraphs(&mut self.rng, 3);
        let category = DEFAULT_CATEGORIES
            .choose(&mut self.rng)
            .map(|c| Category::new(*c))
            .unwrap_or_else(|| Category::new(DEFAULT_CATEGORIES[0]));
        let author = lorem::full_name(&mut self.rng);
        let created_at = self.past(now);
        let updated_at = self.recent(now);
        let status = PromptStatus::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        let version = self.rng.gen_range(1..=MAX_VERSION);
        let tag_count = self.rng.gen_range(2..=4);
        let tags = TAG_VOCABULARY
            .choose_multiple(&mut self.rng, tag_count)
            .map(|t| t.to_string())
            .collect();

        Prompt {
            id: self.uuid(),
            title,
            content,
            category,
            author,
            created_at,
            updated_at,
            status,
            version,
            tags,
        }
    }

    fn audit(&mut self, prompt_id: Uuid, now: DateTime<Utc>) -> AuditItem {
        let auditor = lorem::full_name(&mut self.rng);
        let audited_at = self.recent(now);
        let score = self.score();
        let scores = AuditScores {
            clarity: self.score(),
            specificity: self.score(),
            context: self.score(),
            structure: self.score(),
            effectiveness: self.score(),
        };
        let comments = lorem::paragraph(&mut self.rng);
        let suggestions = (0..SUGGESTION_COUNT)
            .map(|_| lorem::sentence(&mut self.rng))
            .collect();
        let status = AuditStatus::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        let priority = Priority::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();

        AuditItem {
            id: self.uuid(),
            prompt_id,
            auditor,
            audited_at,
            score,
            scores,
            comments,
            suggestions,
            status,
            priority,
        }
    }

    /// Uniform in [6.0, 10.0] with one decimal place
    fn score(&mut self) -> f64 {
        f64::from(self.rng.gen_range(60u32..=100)) / 10.0
    }

    /// Some instant within the last year
    fn past(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(self.rng.gen_range(1..=PAST_WINDOW_SECS))
    }

    /// Some instant within the last day
    fn recent(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(self.rng.gen_range(1..=RECENT_WINDOW_SECS))
    }

    fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }
}
