use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{fields, parser, BenefitRecord, ConditionField, ConditionSet, ServiceIndex};
use pipeline::filters::{
    CategoryFilter, KeywordFilter, PolicyTypeFilter, CATEGORIES, POLICY_TYPES,
};
use pipeline::{ConditionFilter, FilterPipeline};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Benefit Finder - match public benefit programs against your situation
#[derive(Parser)]
#[command(name = "benefit-finder")]
#[command(about = "Find public benefit programs compatible with a set of personal conditions", long_about = None)]
struct Cli {
    /// Saved service listing page (or a bare JSON array of records)
    #[arg(short, long, default_value = "data/services.json")]
    input: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List services compatible with the given conditions
    Filter {
        #[command(flatten)]
        conditions: ConditionArgs,

        /// Keyword searched in name, content, summary and agency
        #[arg(long)]
        keyword: Option<String>,

        /// Category searched in purpose, service type and policy field
        #[arg(long)]
        category: Option<String>,

        /// Policy type searched in service type and business type
        #[arg(long)]
        policy_type: Option<String>,

        /// Number of matches to print
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Show which condition rules each printed service passed
        #[arg(long)]
        explain: bool,
    },

    /// Show every field of one service
    Show {
        /// Service ID (서비스ID)
        #[arg(long)]
        id: String,
    },

    /// List the allowed values of each condition
    Conditions,
}

/// Condition flags. Flags override values read from `--conditions`.
#[derive(Args)]
struct ConditionArgs {
    /// JSON file with a condition set (camelCase keys)
    #[arg(long)]
    conditions: Option<PathBuf>,

    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// Region, e.g. 서울
    #[arg(long)]
    region: Option<String>,

    /// Employment status, e.g. 미취업
    #[arg(long)]
    employment: Option<String>,

    /// Income bracket, e.g. 중위소득50
    #[arg(long)]
    income: Option<String>,

    /// Education level, e.g. 대졸
    #[arg(long)]
    education: Option<String>,

    /// 있음 or 없음
    #[arg(long)]
    has_children: Option<String>,

    /// 해당 or 비해당
    #[arg(long)]
    disability: Option<String>,
}

impl ConditionArgs {
    fn into_condition_set(self) -> Result<ConditionSet> {
        let mut conditions = match &self.conditions {
            Some(path) => parser::parse_conditions_file(path)
                .with_context(|| format!("Failed to read conditions from {}", path.display()))?,
            None => ConditionSet::new(),
        };

        let overrides = [
            (ConditionField::Age, self.age),
            (ConditionField::Region, self.region),
            (ConditionField::Employment, self.employment),
            (ConditionField::Income, self.income),
            (ConditionField::Education, self.education),
            (ConditionField::HasChildren, self.has_children),
            (ConditionField::Disability, self.disability),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                conditions.set(field, value.trim());
            }
        }

        conditions.validate().context("Invalid conditions")?;
        Ok(conditions)
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter {
            conditions,
            keyword,
            category,
            policy_type,
            limit,
            explain,
        } => {
            let conditions = conditions.into_condition_set()?;
            let stages = Stages {
                keyword,
                category,
                policy_type,
            };
            let index = load_index(&cli.input)?;
            handle_filter(&index, &conditions, stages, limit, explain)?
        }
        Commands::Show { id } => handle_show(&load_index(&cli.input)?, &id)?,
        Commands::Conditions => handle_conditions(),
    }

    Ok(())
}

fn load_index(path: &Path) -> Result<ServiceIndex> {
    println!("Loading services from {}...", path.display());
    let start = Instant::now();
    let index = ServiceIndex::load_from_file(path)
        .with_context(|| format!("Failed to load services from {}", path.display()))?;
    println!(
        "{} Loaded {} services in {:?}",
        "✓".green(),
        index.len(),
        start.elapsed()
    );
    Ok(index)
}

/// Optional substring stages run after the condition filter
struct Stages {
    keyword: Option<String>,
    category: Option<String>,
    policy_type: Option<String>,
}

/// Handle the 'filter' command
fn handle_filter(
    index: &ServiceIndex,
    conditions: &ConditionSet,
    stages: Stages,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let mut pipeline = FilterPipeline::new().add_filter(ConditionFilter::new());
    if let Some(keyword) = stages.keyword {
        pipeline = pipeline.add_filter(KeywordFilter::new(keyword));
    }
    if let Some(category) = stages.category {
        pipeline = pipeline.add_filter(CategoryFilter::new(category));
    }
    if let Some(policy_type) = stages.policy_type {
        pipeline = pipeline.add_filter(PolicyTypeFilter::new(policy_type));
    }

    let (matched, summary) = pipeline
        .apply_with_summary(index.records().to_vec(), conditions)
        .context("Failed to filter services")?;

    print_conditions(conditions);
    println!("{}", summary.to_string().bold().blue());

    let explainer = ConditionFilter::new();
    for (rank, record) in matched.iter().take(limit).enumerate() {
        print_service_line(rank + 1, record);
        if explain {
            for outcome in explainer.explain(record, conditions) {
                let mark = if outcome.passed { "✓".green() } else { "✗".red() };
                println!(
                    "     {} {} = {} ({})",
                    mark, outcome.field, outcome.value, outcome.rule
                );
            }
        }
    }

    if matched.len() > limit {
        println!("... {} more", matched.len() - limit);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(index: &ServiceIndex, id: &str) -> Result<()> {
    let record = index
        .get_service(id)
        .ok_or_else(|| anyhow!("Service {} not found", id))?;

    println!("{}", record.service_name().bold().blue());
    for (name, value) in record.iter() {
        println!("{}{}: {}", "• ".green(), name, display_value(value));
    }
    Ok(())
}

/// Handle the 'conditions' command
fn handle_conditions() {
    println!("{}", "Condition values:".bold().blue());
    for (label, values) in condition_listing() {
        println!("{}{}: {}", "• ".green(), label, values);
    }
}

/// One row per condition flag and per search stage with fixed choices
fn condition_listing() -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = ConditionField::ALL
        .into_iter()
        .map(|field| {
            let values = match field.allowed_values() {
                Some(values) => values.join(", "),
                None => "any whole number of years".to_string(),
            };
            (format!("{} ({})", field, field.key()), values)
        })
        .collect();
    rows.push(("category (--category)".to_string(), CATEGORIES.join(", ")));
    rows.push(("policy type (--policy-type)".to_string(), POLICY_TYPES.join(", ")));
    rows
}

fn print_conditions(conditions: &ConditionSet) {
    if conditions.is_unconstrained() {
        println!("No conditions set; showing every service");
        return;
    }
    let active = conditions
        .active_fields()
        .into_iter()
        .map(|field| format!("{}={}", field.key(), conditions.get(field)))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Conditions: {}", active);
}

fn print_service_line(rank: usize, record: &BenefitRecord) {
    let id = record.service_id().unwrap_or_else(|| "-".to_string());
    let agency = record.field(fields::ADMIN_AGENCY);
    println!(
        "{}. [{}] {} - {}",
        rank.to_string().green(),
        id,
        record.service_name(),
        if agency.is_empty() { "-" } else { agency }
    );
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
