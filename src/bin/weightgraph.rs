use std::{env, path::Path, process};

use tracing::Level;
use weightgraph::{
    GraphError, WeightedGraph,
    client::{Command, CommandLineConfig, execute},
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if config.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let command = match Command::parse(&config.command, &config.command_args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let mut graph = match open_graph(&config) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = run_command(&mut graph, &config, &command) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn open_graph(config: &CommandLineConfig) -> Result<WeightedGraph, GraphError> {
    match config.database.as_deref() {
        None => Ok(WeightedGraph::new()),
        Some(path) => match WeightedGraph::open(path) {
            Err(GraphError::DocumentNotFound(_)) if config.create => Ok(WeightedGraph::new()),
            other => other,
        },
    }
}

fn run_command(
    graph: &mut WeightedGraph,
    config: &CommandLineConfig,
    command: &Command,
) -> Result<(), GraphError> {
    let output = execute(graph, command, config.node_weights)?;
    print!("{output}");
    if command.mutates() {
        if let Some(path) = config.database.as_deref() {
            graph.save_to_path(Path::new(path))?;
        }
    }
    Ok(())
}
