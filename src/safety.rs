use std::{fmt, result};

use serde::Serialize;

use crate::{algo, graph::WeightedGraph};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub dangling_endpoints: usize,
    pub adjacency_mismatches: usize,
    pub degree_mismatches: usize,
    pub stale_properties: bool,
}

impl IntegrityReport {
    pub fn merge(&mut self, other: &IntegrityReport) {
        self.total_nodes = self.total_nodes.max(other.total_nodes);
        self.total_edges = self.total_edges.max(other.total_edges);
        self.dangling_endpoints += other.dangling_endpoints;
        self.adjacency_mismatches += other.adjacency_mismatches;
        self.degree_mismatches += other.degree_mismatches;
        self.stale_properties |= other.stale_properties;
    }

    pub fn has_issues(&self) -> bool {
        self.dangling_endpoints > 0
            || self.adjacency_mismatches > 0
            || self.degree_mismatches > 0
            || self.stale_properties
    }
}

#[derive(Debug)]
pub struct IntegrityError {
    pub report: IntegrityReport,
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "integrity violations detected")
    }
}

impl std::error::Error for IntegrityError {}

/// Counts edges whose `from` or `to` is not a node of the graph.
pub fn validate_endpoints(graph: &WeightedGraph) -> IntegrityReport {
    let mut report = base_report(graph);
    report.dangling_endpoints = graph
        .edges()
        .filter(|edge| !graph.contains_node(edge.from) || !graph.contains_node(edge.to))
        .count();
    report
}

/// Checks that adjacency lists mirror the edge map exactly, in both directions.
pub fn validate_adjacency(graph: &WeightedGraph) -> IntegrityReport {
    let mut report = base_report(graph);
    let mut listed_out = 0;
    let mut listed_in = 0;
    for node in graph.nodes() {
        for &edge_id in node.outgoing() {
            listed_out += 1;
            match graph.edge(edge_id) {
                Some(edge) if edge.from == node.id => {}
                _ => report.adjacency_mismatches += 1,
            }
        }
        for &edge_id in node.incoming() {
            listed_in += 1;
            match graph.edge(edge_id) {
                Some(edge) if edge.to == node.id => {}
                _ => report.adjacency_mismatches += 1,
            }
        }
    }
    for edge in graph.edges() {
        let in_from = graph
            .node(edge.from)
            .is_some_and(|node| node.outgoing().contains(&edge.id));
        let in_to = graph
            .node(edge.to)
            .is_some_and(|node| node.incoming().contains(&edge.id));
        if !in_from || !in_to {
            report.adjacency_mismatches += 1;
        }
    }
    if listed_out != graph.edge_count() || listed_in != graph.edge_count() {
        report.degree_mismatches += 1;
    }
    report
}

/// Compares the stored properties with a fresh analysis.
pub fn validate_properties(graph: &WeightedGraph) -> IntegrityReport {
    let mut report = base_report(graph);
    report.stale_properties = algo::analyze(graph) != *graph.properties();
    report
}

pub fn run_integrity_checks(graph: &WeightedGraph) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    report.merge(&validate_endpoints(graph));
    report.merge(&validate_adjacency(graph));
    report.merge(&validate_properties(graph));
    report
}

pub fn run_strict_integrity_checks(graph: &WeightedGraph) -> result::Result<(), IntegrityError> {
    let report = run_integrity_checks(graph);
    if report.has_issues() {
        Err(IntegrityError { report })
    } else {
        Ok(())
    }
}

fn base_report(graph: &WeightedGraph) -> IntegrityReport {
    IntegrityReport {
        total_nodes: graph.node_count(),
        total_edges: graph.edge_count(),
        ..IntegrityReport::default()
    }
}
