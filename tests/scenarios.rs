use wren::config::AssemblyConfig;
use wren::error::{AssemblyError, Infeasibility};
use wren::graph::{compute_arcs, DeBruijnGraph, EulerianAssembler, LinkPolicy, StartPolicy};
use wren::kmer::{extract_kmers, Alphabet};
use wren::pipeline::assemble_sequences;

#[test]
fn test_repeated_kmer_read_sorted_kmers() {
    let kmers = extract_kmers(4, &["ACGTACGT"], &Alphabet::dna()).unwrap();
    assert_eq!(kmers, vec!["ACGT", "ACGT", "CGTA", "GTAC", "TACG"]);
}

#[test]
fn test_repeated_kmer_read_walk_from_node_zero() {
    // Unchecked walk from node 0 spells the read back; the arc out of the
    // second ACGT node stays unconsumed.
    let output = assemble_sequences(&["ACGTACGT"], &AssemblyConfig::legacy(4)).unwrap();
    assert_eq!(output.sequence, "ACGTACGT");
    assert_eq!(output.path, vec![0, 2, 3, 4, 0]);
    assert_eq!(output.report.arcs, 5);
}

#[test]
fn test_repeated_kmer_read_unchecked_balanced_start() {
    // Without the check the start policy still applies: node 1 is the only
    // node with surplus out-degree.
    let mut config = AssemblyConfig::with_k(4);
    config.check_feasibility = false;
    config.start_policy = StartPolicy::Balanced;
    let output = assemble_sequences(&["ACGTACGT"], &config).unwrap();
    assert_eq!(output.path.first(), Some(&1));
    assert_eq!(output.path, vec![1, 2, 3, 4, 0, 2]);
    assert_eq!(output.sequence, "ACGTACGTA");

    config.start_policy = StartPolicy::FirstNode;
    let output = assemble_sequences(&["ACGTACGT"], &config).unwrap();
    assert_eq!(output.path, vec![0, 2, 3, 4, 0]);
}

#[test]
fn test_repeated_kmer_read_checked_walk() {
    // First-match linking leaves node 1 as the only valid start, and the
    // full trail over all five arcs wraps once more around the repeat.
    let output = assemble_sequences(&["ACGTACGT"], &AssemblyConfig::with_k(4)).unwrap();
    assert_eq!(output.path, vec![1, 2, 3, 4, 0, 2]);
    assert_eq!(output.sequence, "ACGTACGTA");

    let mut config = AssemblyConfig::with_k(4);
    config.link_policy = LinkPolicy::AllMatches;
    let output = assemble_sequences(&["ACGTACGT"], &config).unwrap();
    assert_eq!(output.report.arcs, 6);
    assert_eq!(output.sequence, "TACGTACGTA");
}

#[test]
fn test_no_reads_is_empty_assembly() {
    let reads: Vec<String> = Vec::new();
    for k in [1, 4, 31] {
        let output = assemble_sequences(&reads, &AssemblyConfig::with_k(k)).unwrap();
        assert_eq!(output.sequence, "");
        assert_eq!(output.graph.node_count(), 0);
    }
}

#[test]
fn test_read_shorter_than_k() {
    for config in [AssemblyConfig::with_k(4), AssemblyConfig::legacy(4)] {
        let err = assemble_sequences(&["AC"], &config).unwrap_err();
        assert_eq!(err, AssemblyError::ReadTooShort { read: 0, len: 2, k: 4 });
    }
}

#[test]
fn test_disjoint_reads_are_infeasible() {
    let reads = ["AAAA", "TTTT"];

    // Each homopolymer links to itself; the two loops never meet
    let kmers = extract_kmers(4, &reads, &Alphabet::dna()).unwrap();
    let arcs = compute_arcs(&kmers, 4, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap();
    assert_eq!(arcs.len(), 2);
    assert!(arcs.iter().all(|a| a.source == a.destination));

    let err = assemble_sequences(&reads, &AssemblyConfig::with_k(4)).unwrap_err();
    assert_eq!(
        err,
        AssemblyError::Infeasible(Infeasibility::Unreachable { node: 1, start: 0 })
    );
}

#[test]
fn test_disjoint_reads_unchecked_degenerate_output() {
    // Without the check only the first component is walked: AAAA plus its
    // self loop, and TTTT is silently dropped.
    let output = assemble_sequences(&["AAAA", "TTTT"], &AssemblyConfig::legacy(4)).unwrap();
    assert_eq!(output.path, vec![0, 0]);
    assert_eq!(output.sequence, "AAAAA");
}

#[test]
fn test_disjoint_reads_without_arcs() {
    // Two single-node components and no arcs at all
    let err = assemble_sequences(&["ACG", "TTG"], &AssemblyConfig::with_k(3)).unwrap_err();
    assert_eq!(
        err,
        AssemblyError::Infeasible(Infeasibility::Unreachable { node: 1, start: 0 })
    );

    let output = assemble_sequences(&["ACG", "TTG"], &AssemblyConfig::legacy(3)).unwrap();
    assert_eq!(output.report.arcs, 0);
    assert_eq!(output.path, vec![0]);
    assert_eq!(output.sequence, "ACG");
}

#[test]
fn test_binary_alphabet() {
    let mut config = AssemblyConfig::with_k(2);
    config.alphabet = "01".parse().unwrap();
    let output = assemble_sequences(&["0110"], &config).unwrap();

    assert_eq!(output.graph.node_count(), 3);
    assert_eq!(output.report.arcs, 5);
    assert_eq!(output.path, vec![0, 2, 2, 1, 0, 1]);
    assert_eq!(output.sequence, "0111010");

    let err = assemble_sequences(&["0120"], &config).unwrap_err();
    assert_eq!(err, AssemblyError::InvalidSymbol { read: 0, position: 2, symbol: '2' });
}

#[test]
fn test_exhausted_graph_cannot_be_reused() {
    let kmers = extract_kmers(3, &["GATTACA"], &Alphabet::dna()).unwrap();
    let arcs = compute_arcs(&kmers, 3, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap();
    let mut graph = DeBruijnGraph::build(&kmers, &arcs).unwrap();

    let assembler = EulerianAssembler::new(StartPolicy::Balanced, true);
    let (sequence, _) = assembler.assemble(&mut graph).unwrap();
    assert_eq!(sequence, "GATTACA");
    assert_eq!(graph.arc_count(), 0);
    assert_eq!(assembler.assemble(&mut graph).unwrap_err(), AssemblyError::GraphExhausted);
}
