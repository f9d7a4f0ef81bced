use authflow_ui::prelude::*;
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Output formats supported by the CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Inspect the UI nodes of an authentication flow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a flow, `ui` container or node array JSON file
    path: String,

    /// Comma-separated groups to keep, e.g. "password,oidc"
    #[arg(short, long, default_value = "")]
    groups: String,

    /// Drop nodes of the default group from the selection
    #[arg(long)]
    exclude_default: bool,

    /// How to print the resolved nodes
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

/// What gets printed for each node.
#[derive(Serialize)]
struct ResolvedNode<'a> {
    id: String,
    node_type: &'a str,
    group: &'a str,
    label: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing().unwrap_or_else(|e| exit_with_error(&e));

    let nodes = NodeCollection::from_file(&cli.path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load nodes from '{}': {}", cli.path, e))
    });

    let filter = GroupFilter::builder()
        .with_groups(cli.groups.as_str())
        .include_default_group(!cli.exclude_default)
        .build();
    tracing::info!(
        total = nodes.len(),
        groups = %filter.search_groups().iter().join(","),
        "resolving nodes"
    );

    let resolved: Vec<ResolvedNode> = filter
        .apply(&nodes)
        .into_iter()
        .map(|node| ResolvedNode {
            id: resolve_id(node),
            node_type: node.attributes.tag(),
            group: &node.group,
            label: resolve_label(node),
        })
        .collect();

    match cli.format {
        OutputFormat::Table => print_table(&resolved),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&resolved).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to serialize resolved nodes: {}", e))
            });
            println!("{}", json);
        }
    }
}

fn print_table(rows: &[ResolvedNode]) {
    let id_width = rows.iter().map(|r| r.id.len()).max().unwrap_or(0).max(2);
    let type_width = rows.iter().map(|r| r.node_type.len()).max().unwrap_or(0).max(4);
    let group_width = rows.iter().map(|r| r.group.len()).max().unwrap_or(0).max(5);

    println!(
        "{:<id_width$}  {:<type_width$}  {:<group_width$}  LABEL",
        "ID", "TYPE", "GROUP"
    );
    for row in rows {
        println!(
            "{:<id_width$}  {:<type_width$}  {:<group_width$}  {}",
            row.id, row.node_type, row.group, row.label
        );
    }
    println!("\n{} node(s)", rows.len());
}

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_tracing() -> std::result::Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| format!("Invalid log filter: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {}", e))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
