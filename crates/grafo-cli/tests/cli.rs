// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const SQUARE: &str = r#"{
    "vertices": ["A", "B", "C", "D"],
    "edges": [
        {"name": "A-B", "endpoint_a": "A", "endpoint_b": "B", "weight": 1},
        {"name": "B-C", "endpoint_a": "B", "endpoint_b": "C", "weight": 2},
        {"name": "C-D", "endpoint_a": "C", "endpoint_b": "D", "weight": 3},
        {"name": "A-D", "endpoint_a": "A", "endpoint_b": "D", "weight": 4},
        {"name": "A-C", "endpoint_a": "A", "endpoint_b": "C", "weight": 5}
    ]
}"#;

const SPLIT: &str = r#"{
    "vertices": ["A", "B", "C", "D"],
    "edges": [
        {"name": "ab", "endpoint_a": "A", "endpoint_b": "B"},
        {"name": "cd", "endpoint_a": "C", "endpoint_b": "D"}
    ]
}"#;

fn doc(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write graph");
    file
}

fn grafo() -> Command {
    Command::cargo_bin("grafo").expect("binary")
}

#[test]
fn show_prints_vertices_then_edges() {
    let g = doc(SQUARE);
    grafo()
        .arg("--graph")
        .arg(g.path())
        .arg("show")
        .assert()
        .success()
        .stdout("A, B, C, D\nA-B, B-C, C-D, A-D, A-C\n");
}

#[test]
fn mst_reports_total_weight() {
    let g = doc(SQUARE);
    for algo in ["kruskal", "prim"] {
        grafo()
            .arg("--graph")
            .arg(g.path())
            .args(["mst", "--algorithm", algo])
            .assert()
            .success()
            .stdout(predicate::str::contains("total weight: 6"))
            .stdout(predicate::str::contains("A-C").not());
    }
}

#[test]
fn mst_on_disconnected_graph_fails() {
    let g = doc(SPLIT);
    grafo()
        .arg("--graph")
        .arg(g.path())
        .arg("mst")
        .assert()
        .failure()
        .stderr(predicate::str::contains("disconnected"));
}

#[test]
fn graph_can_be_piped_on_stdin() {
    grafo()
        .args(["path", "A", "D"])
        .write_stdin(SQUARE)
        .assert()
        .success()
        .stdout("A reaches D: A-D\n");

    grafo()
        .args(["path", "A", "C"])
        .write_stdin(SPLIT)
        .assert()
        .success()
        .stdout("no path between A and C\n");
}

#[test]
fn settings_file_selects_default_algorithm() {
    let g = doc(SQUARE);
    let cfg = doc(r#"{"algorithm": "prim"}"#);
    grafo()
        .arg("--graph")
        .arg(g.path())
        .arg("--config")
        .arg(cfg.path())
        .arg("mst")
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: prim"));
}

#[test]
fn invalid_document_is_rejected() {
    let g = doc(r#"{"vertices": ["A-B"]}"#);
    grafo()
        .arg("--graph")
        .arg(g.path())
        .arg("summary")
        .assert()
        .failure();
}

#[test]
fn summary_and_cycle() {
    let g = doc(SQUARE);
    grafo()
        .arg("--graph")
        .arg(g.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("connected"))
        .stdout(predicate::str::contains("yes"));

    grafo()
        .arg("--graph")
        .arg(g.path())
        .arg("cycle")
        .assert()
        .success()
        .stdout(predicate::str::contains("A-B"));

    let g = doc(SPLIT);
    grafo()
        .arg("--graph")
        .arg(g.path())
        .arg("cycle")
        .assert()
        .success()
        .stdout("no cycle\n");
}
