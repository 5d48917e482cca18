//! ProNet CLI: command-line interface for the programmer recommendation network
//!
//! Loads a network document and runs one query against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use pronet::services::{
    DegreesOfSeparation, RankService, RankSource, SeparationService, SkillLookup, SkillsService,
    StrongestTeamService, TeamStrength, TeamStrengthService,
};
use pronet::{load_network, NetworkStore, ProNetConfig, ProgrammerId};
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "pronet", version, about = "ProNet programmer recommendation network CLI")]
struct Cli {
    /// Network document (.json, .yaml or .yml)
    #[arg(long, short = 'n', default_value = "network.yaml", global = true, env = "PRONET_NETWORK")]
    network: PathBuf,

    /// Configuration file (YAML)
    #[arg(long, global = true, env = "PRONET_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log computation details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Degrees of separation between two programmers
    Degrees {
        from: String,
        to: String,

        /// Also show the chain of programmers connecting them
        #[arg(long)]
        path: bool,
    },
    /// Rank of one programmer, or of everyone when omitted
    Rank { programmer: Option<String> },
    /// Strength of a team for a skill; the first programmer leads
    Strength {
        #[arg(long)]
        skill: String,

        #[arg(required = true)]
        team: Vec<String>,
    },
    /// Find the strongest team for a skill
    StrongestTeam {
        #[arg(long)]
        skill: String,

        #[arg(long)]
        size: usize,
    },
    /// Load and validate the network document only
    Validate,
}

/// Tabular result of one command
struct QueryOutput {
    columns: Vec<&'static str>,
    records: Vec<Vec<Value>>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ProNetConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => ProNetConfig::default(),
    };

    let store = load_network(&cli.network)
        .with_context(|| format!("failed to load network {}", cli.network.display()))?;
    debug!(command = ?cli.command, "running command");

    let output = match &cli.command {
        Commands::Degrees { from, to, path } => run_degrees(&store, from, to, *path)?,
        Commands::Rank { programmer } => run_rank(&store, &config, programmer.as_deref())?,
        Commands::Strength { skill, team } => run_strength(&store, &config, skill, team)?,
        Commands::StrongestTeam { skill, size } => {
            run_strongest_team(&store, &config, skill, *size)?
        }
        Commands::Validate => run_validate(&store),
    };

    print_output(&output, &cli.format)
}

fn run_degrees(store: &NetworkStore, from: &str, to: &str, show_path: bool) -> Result<QueryOutput> {
    let separation = SeparationService::new(store);
    let from = ProgrammerId::new(from);
    let to = ProgrammerId::new(to);

    let degrees = separation.degrees_between(&from, &to)?;
    let mut columns = vec!["from", "to", "degrees"];
    let mut row = vec![json!(from.as_str()), json!(to.as_str()), json!(degrees)];

    if show_path {
        let path = separation
            .path_between(&from, &to)?
            .map(|chain| {
                chain
                    .iter()
                    .map(ProgrammerId::as_str)
                    .collect::<Vec<_>>()
                    .join(" -> ")
            })
            .unwrap_or_else(|| "(no connection)".to_string());
        columns.push("path");
        row.push(json!(path));
    }

    Ok(QueryOutput {
        columns,
        records: vec![row],
    })
}

fn run_rank(store: &NetworkStore, config: &ProNetConfig, programmer: Option<&str>) -> Result<QueryOutput> {
    let ranks = RankService::with_config(store, config.rank);
    let skills = SkillsService::new(store);

    let mut rows: Vec<(ProgrammerId, f64)> = match programmer {
        Some(id) => {
            let id = ProgrammerId::new(id);
            let rank = ranks.rank(&id)?;
            vec![(id, rank)]
        }
        None => ranks.ranks().into_iter().collect(),
    };
    // Stable: equal ranks keep network order
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));

    let records = rows
        .into_iter()
        .map(|(id, rank)| {
            let programmer_skills = skills.skills(&id)?;
            Ok(vec![
                json!(id.as_str()),
                json!(rank),
                json!(programmer_skills.join(", ")),
            ])
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QueryOutput {
        columns: vec!["programmer", "rank", "skills"],
        records,
    })
}

fn run_strength(
    store: &NetworkStore,
    config: &ProNetConfig,
    skill: &str,
    team: &[String],
) -> Result<QueryOutput> {
    let separation = SeparationService::new(store);
    let ranks = RankService::with_config(store, config.rank);
    let skills = SkillsService::new(store);
    let strength = TeamStrengthService::new(&separation, &skills, &ranks);

    let team: Vec<ProgrammerId> = team.iter().map(|m| ProgrammerId::new(m.as_str())).collect();
    team_report(&team, skill, &separation, &skills, &ranks, &strength)
}

fn run_strongest_team(
    store: &NetworkStore,
    config: &ProNetConfig,
    skill: &str,
    size: usize,
) -> Result<QueryOutput> {
    let separation = SeparationService::new(store);
    let ranks = RankService::with_config(store, config.rank);
    let skills = SkillsService::new(store);
    let strength = TeamStrengthService::new(&separation, &skills, &ranks);
    let search = StrongestTeamService::new(store, &skills, &ranks, &separation, &strength);

    let team = search.find_strongest_team(skill, size)?;
    team_report(&team, skill, &separation, &skills, &ranks, &strength)
}

/// One row per member plus a closing row with the whole team's strength
fn team_report(
    team: &[ProgrammerId],
    skill: &str,
    separation: &dyn DegreesOfSeparation,
    skills: &dyn SkillLookup,
    ranks: &dyn RankSource,
    strength: &dyn TeamStrength,
) -> Result<QueryOutput> {
    let mut records = Vec::with_capacity(team.len() + 1);

    if let Some(leader) = team.first() {
        for (position, member) in team.iter().enumerate() {
            let role = if position == 0 { "leader" } else { "member" };
            let skill_index = skills.skill_index(member, skill)?;
            let degrees = separation.degrees_between(leader, member)?;
            records.push(vec![
                json!(member.as_str()),
                json!(role),
                json!(skill_index),
                json!(ranks.rank(member)?),
                json!(degrees),
                json!(strength.individual_strength(skill, member)?),
            ]);
        }
    }

    records.push(vec![
        json!("(team)"),
        json!("team"),
        Value::Null,
        Value::Null,
        Value::Null,
        json!(strength.team_strength(skill, team)?),
    ]);

    Ok(QueryOutput {
        columns: vec!["programmer", "role", "skill_index", "rank", "degrees", "strength"],
        records,
    })
}

fn run_validate(store: &NetworkStore) -> QueryOutput {
    QueryOutput {
        columns: vec!["programmers", "recommendations"],
        records: vec![vec![json!(store.len()), json!(store.recommendation_count())]],
    }
}

fn print_output(output: &QueryOutput, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<Value> = output
                .records
                .iter()
                .map(|row| {
                    let object: Map<String, Value> = output
                        .columns
                        .iter()
                        .map(|c| c.to_string())
                        .zip(row.iter().cloned())
                        .collect();
                    Value::Object(object)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("{}", output.columns.join(","));
            for row in &output.records {
                let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if output.records.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&output.columns);

            for row in &output.records {
                let cells: Vec<String> = row.iter().map(format_table_value).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", output.records.len());
        }
    }

    Ok(())
}

fn format_table_value(v: &Value) -> String {
    match v {
        Value::Null => "".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{:.4}", f),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Object(_) | Value::Array(_) => serde_json::to_string(v).unwrap_or_default(),
    }
}

fn format_csv_value(v: &Value) -> String {
    match v {
        Value::Null => "".to_string(),
        Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => {
            let json = serde_json::to_string(v).unwrap_or_default();
            format!("\"{}\"", json.replace('"', "\"\""))
        }
    }
}
