//! Post-detection invariant tests using generated graphs.
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cyclebasis_bench::correctness;
use cyclebasis_bench::{SizeTier, generate_graph, to_petgraph};
use cyclebasis_core::{DetectionConfig, cycle_space_dimension, find_cycles_with_config};

fn chordless_config() -> DetectionConfig {
    DetectionConfig {
        enable_chordless_filter: true,
        ..DetectionConfig::default()
    }
}

#[test]
fn default_basis_invariants_hold() {
    for tier in [SizeTier::Tiny, SizeTier::Small, SizeTier::Medium] {
        for seed in [42, 123, 999] {
            let graph = generate_graph(&tier.config(seed));
            let output = find_cycles_with_config(&graph, &DetectionConfig::default())
                .expect("detection succeeds");
            correctness::check_basis(&graph, &output)
                .unwrap_or_else(|e| panic!("{tier:?}/seed={seed}: {e}"));
        }
    }
}

#[test]
fn chordless_basis_invariants_hold() {
    for tier in [SizeTier::Tiny, SizeTier::Small] {
        for seed in [42, 123, 999] {
            let graph = generate_graph(&tier.config(seed));
            let output =
                find_cycles_with_config(&graph, &chordless_config()).expect("detection succeeds");
            correctness::check_basis(&graph, &output)
                .unwrap_or_else(|e| panic!("{tier:?}/seed={seed}: {e}"));
            correctness::check_chordless(&graph, &output.cycles)
                .unwrap_or_else(|e| panic!("{tier:?}/seed={seed}: {e}"));
        }
    }
}

#[test]
fn two_component_graph_invariants_hold() {
    let graph = generate_graph(&SizeTier::Large.config(42));
    let output =
        find_cycles_with_config(&graph, &DetectionConfig::default()).expect("detection succeeds");
    correctness::check_basis(&graph, &output).expect("basis invariants hold");
}

#[test]
fn petgraph_input_invariants_hold() {
    // petgraph reports neighbors newest-first, so the basis itself may differ
    // from the adjacency-list run; only the invariants must agree.
    for seed in [42, 123] {
        let pg = to_petgraph(&generate_graph(&SizeTier::Small.config(seed)));
        let output =
            find_cycles_with_config(&pg, &DetectionConfig::default()).expect("detection succeeds");
        correctness::check_basis(&pg, &output)
            .unwrap_or_else(|e| panic!("petgraph/seed={seed}: {e}"));
    }
}

#[test]
fn diagnostics_are_consistent_with_output() {
    let graph = generate_graph(&SizeTier::Small.config(7));
    let config = DetectionConfig {
        collect_diagnostics: true,
        ..DetectionConfig::default()
    };
    let output = find_cycles_with_config(&graph, &config).expect("detection succeeds");
    let info = output.info.as_ref().expect("diagnostics requested");
    assert_eq!(info.final_cycles, output.cycles.len());
    assert_eq!(info.expected_cycles, cycle_space_dimension(&graph));
    assert!(info.cleaned_cycles <= info.raw_cycles);
    assert!(info.final_cycles <= info.cleaned_cycles);
}
