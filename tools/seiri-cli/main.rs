use clap::{Parser, Subcommand, ValueEnum};
use seiri::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Arrange node graphs into a readable left-to-right execution flow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional layout config JSON file overriding the default spacing
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Extra node kinds to treat as entry points (repeatable)
    #[arg(long = "entry-kind", global = true)]
    entry_kinds: Vec<String>,

    /// How results are printed
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Lay out a graph JSON file and write the arranged graph
    Arrange {
        /// Path to the graph JSON file
        graph_path: PathBuf,
        /// Where to write the arranged graph; defaults to overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Only print the plan, leave files untouched
        #[arg(long)]
        dry_run: bool,
    },
    /// Print node positions and overlapping node pairs of a graph JSON file
    Info {
        /// Path to the graph JSON file
        graph_path: PathBuf,
    },
    /// Run a JSON command against a file of blueprint documents
    Command {
        /// Path to a JSON array of blueprint documents
        store_path: PathBuf,
        /// Command name, e.g. auto_arrange_nodes
        name: String,
        /// JSON parameter object
        #[arg(default_value = "{}")]
        params: String,
        /// Write the (possibly modified) blueprints back to the store file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let engine = build_engine(&cli);

    match cli.action {
        Action::Arrange {
            graph_path,
            output,
            dry_run,
        } => run_arrange(&engine, cli.format, graph_path, output, dry_run),
        Action::Info { graph_path } => run_info(&engine, cli.format, graph_path),
        Action::Command {
            store_path,
            name,
            params,
            save,
        } => run_command(engine, store_path, &name, &params, save),
    }
}

fn build_engine(cli: &Cli) -> LayoutEngine {
    let mut builder = LayoutEngine::builder();
    if let Some(path) = &cli.config {
        let config = LayoutConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e)));
        builder = builder.with_config(config);
    }
    for kind in &cli.entry_kinds {
        builder = builder.with_entry_kind(kind);
    }
    builder.build()
}

fn run_arrange(
    engine: &LayoutEngine,
    format: OutputFormat,
    graph_path: PathBuf,
    output: Option<PathBuf>,
    dry_run: bool,
) {
    let total_start = Instant::now();
    let mut graph = load_graph(&graph_path);

    let layout_start = Instant::now();
    let plan = if dry_run {
        engine.plan(&graph)
    } else {
        engine.arrange(&mut graph)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Layout failed: {}", e)));
    let layout_duration = layout_start.elapsed();

    match format {
        OutputFormat::Text => print!("{}", ReportFormatter::format_plan(&plan)),
        OutputFormat::Json => print_json(&plan),
    }

    if !dry_run {
        let target = output.unwrap_or(graph_path);
        let json = serde_json::to_string_pretty(&graph)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
        fs::write(&target, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", target.display(), e))
        });
        if let OutputFormat::Text = format {
            println!("Wrote arranged graph to '{}'", target.display());
        }
    }

    if let OutputFormat::Text = format {
        println!("\n--- Performance Summary ---");
        println!("Layout:               {:?}", layout_duration);
        println!("Total Execution:      {:?}", total_start.elapsed());
    }
}

fn run_info(engine: &LayoutEngine, format: OutputFormat, graph_path: PathBuf) {
    let graph = load_graph(&graph_path);
    let info = engine
        .layout_info(&graph)
        .unwrap_or_else(|e| exit_with_error(&format!("Layout analysis failed: {}", e)));

    match format {
        OutputFormat::Text => print!("{}", ReportFormatter::format_info(&info)),
        OutputFormat::Json => print_json(&info),
    }
}

fn run_command(engine: LayoutEngine, store_path: PathBuf, name: &str, params: &str, save: bool) {
    let mut store = GraphStore::from_file(&store_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load blueprints from '{}': {}",
            store_path.display(),
            e
        ))
    });
    let registry = CommandRegistry::with_layout_commands(engine);
    println!("{}", registry.execute(&mut store, name, params));

    if save {
        let json = serde_json::to_string_pretty(&store.blueprints())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize blueprints: {}", e)));
        fs::write(&store_path, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", store_path.display(), e))
        });
    }
}

fn load_graph(path: &PathBuf) -> GraphDefinition {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            path.display(),
            e
        ))
    });
    content
        .as_str()
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load graph: {}", e)))
}

fn print_json<T: serde::Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize output: {}", e)));
    println!("{}", json);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
