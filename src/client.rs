use crate::{
    algo,
    errors::GraphError,
    graph::WeightedGraph,
    safety,
    shortest_path::{self, ShortestPaths, format_path},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub database: Option<String>,
    pub create: bool,
    pub node_weights: bool,
    pub verbose: bool,
    pub command: String,
    pub command_args: Vec<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut database = None;
        let mut create = false;
        let mut node_weights = false;
        let mut verbose = false;
        let mut command = String::from("status");
        let mut command_args = Vec::new();
        let mut command_set = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            if command_set {
                command_args.push(arg.to_string());
                continue;
            }
            match *arg {
                "--db" | "--database" => {
                    database = Some(
                        iter.next()
                            .ok_or_else(|| "--db requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                    command_set = true;
                }
                "--create" => create = true,
                "--node-weights" => node_weights = true,
                "--verbose" | "-v" => verbose = true,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                    command_set = true;
                }
            }
        }
        Ok(Self {
            database,
            create,
            node_weights,
            verbose,
            command,
            command_args,
        })
    }

    pub fn help() -> &'static str {
        "Usage: weightgraph [--db PATH] [--create] [--node-weights] [--verbose] <command> [args]\n\
         Commands:\n  \
           status | properties | nodes | degrees | validate\n  \
           dijkstra SRC [DST] | bellman-ford SRC [DST]\n  \
           add-node ID NAME WEIGHT | add-edge ID FROM TO WEIGHT\n  \
           remove-node ID | remove-edge ID\n"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Status,
    Properties,
    Nodes,
    Degrees,
    Validate,
    Dijkstra { source: i64, target: Option<i64> },
    BellmanFord { source: i64, target: Option<i64> },
    AddNode { id: i64, name: String, weight: f64 },
    AddEdge { id: i64, from: i64, to: i64, weight: f64 },
    RemoveNode { id: i64 },
    RemoveEdge { id: i64 },
}

impl Command {
    pub fn parse(name: &str, args: &[String]) -> Result<Self, GraphError> {
        let command = match name {
            "status" => Command::Status,
            "properties" => Command::Properties,
            "nodes" => Command::Nodes,
            "degrees" => Command::Degrees,
            "validate" => Command::Validate,
            "dijkstra" => Command::Dijkstra {
                source: int_arg(args, 0, "SRC")?,
                target: optional_int_arg(args, 1, "DST")?,
            },
            "bellman-ford" => Command::BellmanFord {
                source: int_arg(args, 0, "SRC")?,
                target: optional_int_arg(args, 1, "DST")?,
            },
            "add-node" => Command::AddNode {
                id: int_arg(args, 0, "ID")?,
                name: args
                    .get(1)
                    .cloned()
                    .ok_or_else(|| GraphError::invalid_input("add-node requires NAME"))?,
                weight: float_arg(args, 2, "WEIGHT")?,
            },
            "add-edge" => Command::AddEdge {
                id: int_arg(args, 0, "ID")?,
                from: int_arg(args, 1, "FROM")?,
                to: int_arg(args, 2, "TO")?,
                weight: float_arg(args, 3, "WEIGHT")?,
            },
            "remove-node" => Command::RemoveNode {
                id: int_arg(args, 0, "ID")?,
            },
            "remove-edge" => Command::RemoveEdge {
                id: int_arg(args, 0, "ID")?,
            },
            other => {
                return Err(GraphError::invalid_input(format!("unknown command {other}")));
            }
        };
        Ok(command)
    }

    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::AddNode { .. }
                | Command::AddEdge { .. }
                | Command::RemoveNode { .. }
                | Command::RemoveEdge { .. }
        )
    }
}

/// Runs `command` against `graph` and returns the text to print.
pub fn execute(
    graph: &mut WeightedGraph,
    command: &Command,
    node_weights: bool,
) -> Result<String, GraphError> {
    let out = match command {
        Command::Status => format!(
            "nodes={} edges={}\n",
            graph.node_count(),
            graph.edge_count()
        ),
        Command::Properties => {
            let props = graph.properties();
            format!(
                "directed={}\nweighted={}\nselfLooping={}\nconnected={}\n\
                 connectionDegree={}\nnegativeWeights={}\nnegativeCycles={}\n",
                props.directed,
                props.weighted,
                props.self_looping,
                props.connected,
                props.connection_degree,
                props.negative_weights,
                props.negative_cycles,
            )
        }
        Command::Nodes => graph
            .nodes()
            .map(|node| format!("{}:{}:{}\n", node.id, node.name, node.weight))
            .collect(),
        Command::Degrees => algo::nodes_by_degree(graph, true)
            .into_iter()
            .map(|(id, degree)| format!("{id}:{degree}\n"))
            .collect(),
        Command::Validate => {
            let report = safety::run_integrity_checks(graph);
            let json = serde_json::to_string(&report)
                .map_err(|e| GraphError::invalid_input(e.to_string()))?;
            format!("{json}\n")
        }
        Command::Dijkstra { source, target } => {
            let paths = shortest_path::dijkstra(graph, *source, node_weights)?;
            render_paths(graph, &paths, *target)?
        }
        Command::BellmanFord { source, target } => {
            let paths = shortest_path::bellman_ford(graph, *source, node_weights)?;
            paths.check()?;
            render_paths(graph, &paths, *target)?
        }
        Command::AddNode { id, name, weight } => {
            graph.add_node(*id, name.clone(), *weight)?;
            format!("added node {id}\n")
        }
        Command::AddEdge {
            id,
            from,
            to,
            weight,
        } => {
            graph.add_edge(*id, *from, *to, *weight)?;
            format!("added edge {id}\n")
        }
        Command::RemoveNode { id } => match graph.remove_node(*id) {
            Some(_) => format!("removed node {id}\n"),
            None => format!("node {id} not present\n"),
        },
        Command::RemoveEdge { id } => match graph.remove_edge(*id) {
            Some(_) => format!("removed edge {id}\n"),
            None => format!("edge {id} not present\n"),
        },
    };
    Ok(out)
}

fn render_paths(
    graph: &WeightedGraph,
    paths: &ShortestPaths,
    target: Option<i64>,
) -> Result<String, GraphError> {
    let targets = match target {
        Some(id) => vec![id],
        None => graph.node_ids(),
    };
    let mut out = String::new();
    for id in targets {
        if !graph.contains_node(id) {
            return Err(GraphError::not_found(format!("node {id}")));
        }
        let names = paths.path_names(graph, id)?;
        let line = match paths.distance_to(id) {
            Some(dist) => format!("{id}: {dist} via {}\n", format_path(&names)),
            None => format!("{id}: unreachable\n"),
        };
        out.push_str(&line);
    }
    Ok(out)
}

fn int_arg(args: &[String], idx: usize, label: &str) -> Result<i64, GraphError> {
    let raw = args
        .get(idx)
        .ok_or_else(|| GraphError::invalid_input(format!("missing {label}")))?;
    raw.parse()
        .map_err(|_| GraphError::invalid_input(format!("{label} must be an integer, got {raw}")))
}

fn optional_int_arg(args: &[String], idx: usize, label: &str) -> Result<Option<i64>, GraphError> {
    if args.len() <= idx {
        return Ok(None);
    }
    int_arg(args, idx, label).map(Some)
}

fn float_arg(args: &[String], idx: usize, label: &str) -> Result<f64, GraphError> {
    let raw = args
        .get(idx)
        .ok_or_else(|| GraphError::invalid_input(format!("missing {label}")))?;
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            GraphError::invalid_input(format!("{label} must be a finite number, got {raw}"))
        })
}
