use clap::{Args, Parser, Subcommand, ValueEnum};
use mn_app::{
    AppError, AppResult, AppState, ExplorationConfig, change_compartmentalization,
    change_connection_targets, change_sets_filters, change_sets_search, ensure_simplification,
    execute_query, import_measurements, initialize_state, load_config, load_measurements,
    load_model, set_path_source, set_path_target,
    set_proximity_focus, set_rogue_focus, summarize_model,
};
use mn_core::EntityKind;
use mn_model::ReferenceType;
use mn_network::NetworkElements;
use mn_query::{Combination, PathDirection, ProximityDirection, QueryType};
use mn_sets::SetsEntities;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "mn-cli")]
#[command(about = "metanet CLI - Metabolic network exploration tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate model file syntax and references
    Validate {
        /// Path to the model JSON file
        model_path: PathBuf,
    },
    /// Show compartment and process sets with their cardinalities
    Sets {
        #[command(flatten)]
        session: SessionArgs,
        /// Count reactions instead of metabolites
        #[arg(long)]
        reactions: bool,
        /// Count only entities passing the filters
        #[arg(long)]
        filtered: bool,
        /// Search a set menu, as ATTRIBUTE=TEXT
        #[arg(long, value_name = "ATTRIBUTE=TEXT")]
        search: Vec<String>,
    },
    /// List reaction and metabolite candidates
    Candidates {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Show the assembled network
    Network {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Associate measurements from a TSV file to metabolites
    Measurements {
        #[command(flatten)]
        session: SessionArgs,
        /// TSV file with `reference` and `value` columns
        measurements_path: PathBuf,
        /// Database the references point into
        #[arg(long, value_enum, default_value = "pubchem")]
        reference: ReferenceArg,
    },
    /// Query the network
    #[command(subcommand)]
    Query(QueryCommands),
}

#[derive(Subcommand)]
enum QueryCommands {
    /// Select a single node
    Rogue {
        #[command(flatten)]
        query: QueryArgs,
        /// Node to select
        focus: String,
    },
    /// Select the neighborhood of a node
    Proximity {
        #[command(flatten)]
        query: QueryArgs,
        /// Node at the center of the neighborhood
        focus: String,
        #[arg(long, value_enum, default_value = "successors")]
        direction: ProximityArg,
        /// Number of link hops
        #[arg(long, default_value_t = 1)]
        depth: usize,
    },
    /// Select the shortest paths between two nodes
    Path {
        #[command(flatten)]
        query: QueryArgs,
        source: String,
        target: String,
        #[arg(long, value_enum, default_value = "forward")]
        direction: PathArg,
        /// Number of paths
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Select the shortest paths between every pair of targets
    Connection {
        #[command(flatten)]
        query: QueryArgs,
        #[arg(required = true, num_args = 2..)]
        targets: Vec<String>,
        /// Number of paths per pair
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

/// Arguments shared by every command that derives a network.
#[derive(Args)]
struct SessionArgs {
    /// Path to the model JSON file
    model_path: PathBuf,
    /// Path to an exploration settings YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Filter on a set value, as ATTRIBUTE=VALUE (repeatable)
    #[arg(short, long, value_name = "ATTRIBUTE=VALUE")]
    filter: Vec<String>,
    /// Split metabolite candidates by compartment
    #[arg(long)]
    compartmentalization: bool,
    /// Omit a metabolite candidate (repeatable)
    #[arg(long, value_name = "METABOLITE")]
    omit: Vec<String>,
    /// Replicate a metabolite candidate per reaction (repeatable)
    #[arg(long, value_name = "METABOLITE")]
    replicate: Vec<String>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct QueryArgs {
    #[command(flatten)]
    session: SessionArgs,
    /// Remove the selection from the network instead of collecting it
    #[arg(long)]
    exclude: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProximityArg {
    Successors,
    Neighbors,
    Predecessors,
}

impl From<ProximityArg> for ProximityDirection {
    fn from(arg: ProximityArg) -> Self {
        match arg {
            ProximityArg::Successors => ProximityDirection::Successors,
            ProximityArg::Neighbors => ProximityDirection::Neighbors,
            ProximityArg::Predecessors => ProximityDirection::Predecessors,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReferenceArg {
    Pubchem,
    Hmdb,
    Metanetx,
}

impl From<ReferenceArg> for ReferenceType {
    fn from(arg: ReferenceArg) -> Self {
        match arg {
            ReferenceArg::Pubchem => ReferenceType::Pubchem,
            ReferenceArg::Hmdb => ReferenceType::Hmdb,
            ReferenceArg::Metanetx => ReferenceType::Metanetx,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PathArg {
    Forward,
    Both,
    Reverse,
}

impl From<PathArg> for PathDirection {
    fn from(arg: PathArg) -> Self {
        match arg {
            PathArg::Forward => PathDirection::Forward,
            PathArg::Both => PathDirection::Both,
            PathArg::Reverse => PathDirection::Reverse,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { model_path } => cmd_validate(&model_path),
        Commands::Sets {
            session,
            reactions,
            filtered,
            search,
        } => cmd_sets(&session, reactions, filtered, &search),
        Commands::Candidates { session } => cmd_candidates(&session),
        Commands::Network { session } => cmd_network(&session),
        Commands::Measurements {
            session,
            measurements_path,
            reference,
        } => cmd_measurements(&session, &measurements_path, reference.into()),
        Commands::Query(query_cmd) => cmd_query(query_cmd),
    }
}

fn cmd_validate(model_path: &Path) -> AppResult<()> {
    println!("Validating model: {}", model_path.display());
    let model = load_model(model_path)?;
    let summary = summarize_model(&model);
    println!(
        "✓ Model is valid ({} reactions, {} metabolites, {} compartments, {} processes)",
        summary.reactions, summary.metabolites, summary.compartments, summary.processes
    );
    Ok(())
}

/// Split an `ATTRIBUTE=VALUE` argument.
fn split_pair<'a>(arg: &'a str, flag: &str) -> AppResult<(&'a str, &'a str)> {
    arg.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| AppError::InvalidInput(format!("--{} expects KEY=VALUE, got '{}'", flag, arg)))
}

/// Load the model and settings, then replay the session's intents.
fn open_session(session: &SessionArgs, config: Option<ExplorationConfig>) -> AppResult<AppState> {
    let model = load_model(&session.model_path)?;
    let config = match config {
        Some(config) => config,
        None => session_config(session)?,
    };
    let mut state = initialize_state(model, &config)?;

    for arg in &session.filter {
        let (attribute, value) = split_pair(arg, "filter")?;
        let update = change_sets_filters(&state, attribute, value)?;
        if update.is_empty() {
            return Err(AppError::InvalidInput(format!("unknown filter '{}'", arg)));
        }
        state.submit(update);
    }

    if session.compartmentalization && !state.compartmentalization {
        let update = change_compartmentalization(&state)?;
        state.submit(update);
    }

    for (metabolites, method) in [(&session.omit, "omission"), (&session.replicate, "replication")] {
        for metabolite in metabolites {
            let update = ensure_simplification(&state, metabolite, "metabolites", method)?;
            if update.is_empty() {
                debug!(metabolite, method, "simplification had no effect");
            }
            state.submit(update);
        }
    }

    Ok(state)
}

fn session_config(session: &SessionArgs) -> AppResult<ExplorationConfig> {
    match &session.config {
        Some(path) => load_config(path),
        None => Ok(ExplorationConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_sets(
    session: &SessionArgs,
    reactions: bool,
    filtered: bool,
    search: &[String],
) -> AppResult<()> {
    let mut config = session_config(session)?;
    config.sets_entities = if reactions {
        SetsEntities::Reactions
    } else {
        SetsEntities::Metabolites
    };
    config.sets_filter = filtered;
    let mut state = open_session(session, Some(config))?;

    for arg in search {
        let (attribute, text) = split_pair(arg, "search")?;
        let update = change_sets_search(&state, attribute, text);
        state.submit(update);
    }

    if session.json {
        return print_json(&state.sets_summaries);
    }

    let entities = match state.sets_entities {
        SetsEntities::Metabolites => "metabolites",
        SetsEntities::Reactions => "reactions",
    };
    for (attribute, entries) in &state.sets_summaries.sets_summaries {
        println!("{} ({}):", attribute.as_str(), entities);
        if entries.is_empty() {
            println!("  (none)");
        }
        for entry in entries {
            let marker = if state
                .sets_filters
                .get(attribute)
                .is_some_and(|values| values.contains(&entry.value))
            {
                "*"
            } else {
                " "
            };
            println!(
                " {} {} - {} ({} of {})",
                marker, entry.value, entry.name, entry.count, entry.total
            );
        }
    }
    Ok(())
}

fn cmd_candidates(session: &SessionArgs) -> AppResult<()> {
    let state = open_session(session, None)?;

    if session.json {
        return print_json(&state.candidates_summaries);
    }

    for (category, entries) in &state.candidates_summaries {
        println!("Candidate {} ({}):", category.as_str(), entries.len());
        for entry in entries {
            let designation = state
                .simplifications
                .method(*category, &entry.value)
                .map(|method| format!(" [{}]", method.as_str()))
                .unwrap_or_default();
            println!("  {} - {} ({}){}", entry.value, entry.name, entry.count, designation);
        }
    }
    Ok(())
}

fn cmd_network(session: &SessionArgs) -> AppResult<()> {
    let state = open_session(session, None)?;

    if session.json {
        return print_json(&state.network);
    }

    let summary = &state.network_summary;
    println!(
        "Network: {} nodes ({} reactions, {} metabolites), {} links",
        summary.nodes, summary.nodes_reactions, summary.nodes_metabolites, summary.links
    );
    print_elements(&state.network);
    Ok(())
}

fn cmd_measurements(
    session: &SessionArgs,
    measurements_path: &Path,
    reference: ReferenceType,
) -> AppResult<()> {
    let mut config = session_config(session)?;
    config.measurement_reference = reference;
    let mut state = open_session(session, Some(config))?;
    let measurements = load_measurements(measurements_path)?;
    let update = import_measurements(&state, measurements);
    state.submit(update);

    if session.json {
        return print_json(&state.measurements_summaries);
    }

    println!(
        "Measurements: {} of {} associated by {}",
        state.metabolites_measurements.len(),
        state.measurements.len(),
        reference.as_str()
    );
    for summary in &state.measurements_summaries {
        println!(
            "  {} - {}: {} (scale {:.2})",
            summary.metabolite, summary.name, summary.value, summary.scale
        );
    }
    Ok(())
}

fn print_elements(elements: &NetworkElements) {
    println!("\nNodes:");
    for node in &elements.nodes {
        let kind = match node.entity {
            EntityKind::Reaction => "reaction",
            EntityKind::Metabolite if node.replication => "metabolite, replicate",
            EntityKind::Metabolite => "metabolite",
        };
        println!("  {} - {} ({})", node.identifier, node.name, kind);
    }
    println!("\nLinks:");
    for link in &elements.links {
        println!("  {} -> {} ({})", link.source, link.target, link.role);
    }
}

fn cmd_query(query_cmd: QueryCommands) -> AppResult<()> {
    let args = match &query_cmd {
        QueryCommands::Rogue { query, .. }
        | QueryCommands::Proximity { query, .. }
        | QueryCommands::Path { query, .. }
        | QueryCommands::Connection { query, .. } => query,
    };
    let mut config = session_config(&args.session)?;
    config.query.combination = if args.exclude {
        Combination::Exclusion
    } else {
        Combination::Inclusion
    };

    let (query_type, nodes): (QueryType, Vec<&str>) = match &query_cmd {
        QueryCommands::Rogue { focus, .. } => (QueryType::Rogue, vec![focus.as_str()]),
        QueryCommands::Proximity {
            focus,
            direction,
            depth,
            ..
        } => {
            config.query.proximity_direction = (*direction).into();
            config.query.proximity_depth = *depth;
            (QueryType::Proximity, vec![focus.as_str()])
        }
        QueryCommands::Path {
            source,
            target,
            direction,
            count,
            ..
        } => {
            config.query.path_direction = (*direction).into();
            config.query.path_count = *count;
            (QueryType::Path, vec![source.as_str(), target.as_str()])
        }
        QueryCommands::Connection { targets, count, .. } => {
            config.query.connection_count = *count;
            (
                QueryType::Connection,
                targets.iter().map(String::as_str).collect(),
            )
        }
    };
    if config.query.proximity_depth == 0
        || config.query.path_count == 0
        || config.query.connection_count == 0
    {
        return Err(AppError::InvalidInput(
            "depth and counts must be at least 1".to_string(),
        ));
    }
    config.query.query_type = query_type;

    let mut state = open_session(&args.session, Some(config))?;
    if let Some(node) = nodes.iter().find(|node| !state.network.contains_node(node)) {
        return Err(AppError::InvalidInput(format!("unknown node '{}'", node)));
    }

    match query_type {
        QueryType::Rogue => {
            let update = set_rogue_focus(&state, nodes[0]);
            state.submit(update);
        }
        QueryType::Proximity => {
            let update = set_proximity_focus(&state, nodes[0]);
            state.submit(update);
        }
        QueryType::Path => {
            let update = set_path_source(&state, nodes[0]);
            state.submit(update);
            let update = set_path_target(&state, nodes[1]);
            state.submit(update);
        }
        QueryType::Connection => {
            let targets: Vec<String> = nodes.iter().map(|node| node.to_string()).collect();
            let update = change_connection_targets(&state, &targets);
            state.submit(update);
        }
    }

    let update = execute_query(&state);
    state.submit(update);

    if args.session.json {
        return print_json(&state.subnetwork);
    }

    let summary = &state.subnetwork_summary;
    println!(
        "✓ Subnetwork: {} nodes ({} reactions, {} metabolites), {} links",
        summary.nodes, summary.nodes_reactions, summary.nodes_metabolites, summary.links
    );
    print_elements(&state.subnetwork);
    Ok(())
}
