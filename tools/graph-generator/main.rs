use clap::Parser;
use rand::rngs::ThreadRng;
use rand::{Rng, rng};
use seiri::graph::{GraphDefinition, NodeDefinition, PinDefinition};
use std::fs;

/// A CLI tool to generate random execution graphs for exercising the layout engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// Number of event nodes, each starting its own execution chain
    #[arg(long, default_value_t = 2)]
    events: usize,

    /// The minimum length of each execution chain
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum length of each execution chain
    #[arg(long, default_value_t = 6)]
    max: usize,

    /// Probability that an execution node gets a pure input node
    #[arg(long, default_value_t = 0.5)]
    pure_ratio: f64,

    /// Number of pure nodes nothing reads from
    #[arg(long, default_value_t = 1)]
    orphans: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.pure_ratio) {
        eprintln!("Error: --pure-ratio must be between 0 and 1");
        std::process::exit(1);
    }

    println!(
        "Generating graph with {} event(s), chains of {} to {} nodes...",
        cli.events, cli.min, cli.max
    );

    let mut graph = GraphDefinition::new("EventGraph");
    for event in 0..cli.events {
        generate_chain(&mut graph, &mut rng, event, &cli);
    }
    for orphan in 0..cli.orphans {
        graph.nodes.push(
            NodeDefinition::new(format!("Orphan_{}", orphan), "variableGet")
                .at(scatter(&mut rng), scatter(&mut rng))
                .with_pin(PinDefinition::data_output("Value")),
        );
    }
    println!("-> Generated {} node(s).", graph.nodes.len());

    let json_output = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved graph to '{}'", cli.output);
    Ok(())
}

/// Builds one event followed by a linear chain of call nodes, scattered at random.
fn generate_chain(graph: &mut GraphDefinition, rng: &mut ThreadRng, event: usize, cli: &Cli) {
    let event_id = format!("Event_{}", event);
    graph.nodes.push(
        NodeDefinition::new(&event_id, "event")
            .at(scatter(rng), scatter(rng))
            .with_pin(PinDefinition::exec_output("then")),
    );

    let length = rng.random_range(cli.min..=cli.max);
    let mut previous = event_id;
    for step in 0..length {
        let id = format!("Call_{}_{}", event, step);
        graph.nodes.push(
            NodeDefinition::new(&id, "callFunction")
                .at(scatter(rng), scatter(rng))
                .with_exec_flow()
                .with_pin(PinDefinition::data_input("Arg")),
        );
        graph.link((previous.as_str(), "then"), (id.as_str(), "exec"));

        if rng.random_bool(cli.pure_ratio) {
            let pure_id = format!("Pure_{}_{}", event, step);
            graph.nodes.push(
                NodeDefinition::new(&pure_id, "variableGet")
                    .at(scatter(rng), scatter(rng))
                    .with_pin(PinDefinition::data_output("Value")),
            );
            graph.link((pure_id.as_str(), "Value"), (id.as_str(), "Arg"));
        }
        previous = id;
    }
}

fn scatter(rng: &mut ThreadRng) -> i32 {
    rng.random_range(-2000..2000)
}
