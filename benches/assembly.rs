use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wren::config::AssemblyConfig;
use wren::graph::{compute_arcs, LinkPolicy};
use wren::kmer::{extract_kmers, Alphabet};
use wren::pipeline::assemble_sequences;

/// Generate a random genome and cut it into overlapping reads
fn generate_reads(genome_len: usize, read_len: usize, step: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(1);
    let bases = ['A', 'C', 'G', 'T'];
    let genome: String = (0..genome_len).map(|_| bases[rng.gen_range(0..4)]).collect();

    (0..=genome_len - read_len)
        .step_by(step)
        .map(|start| genome[start..start + read_len].to_string())
        .collect()
}

fn bench_extract_and_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_stages");
    let alphabet = Alphabet::dna();

    for genome_len in [1_000, 10_000, 50_000] {
        let reads = generate_reads(genome_len, 150, 50);
        let total_bases: usize = reads.iter().map(|s| s.len()).sum();
        group.throughput(Throughput::Bytes(total_bases as u64));

        group.bench_with_input(BenchmarkId::new("extract", genome_len), &reads, |b, reads| {
            b.iter(|| black_box(extract_kmers(31, reads, &alphabet).unwrap()));
        });

        let kmers = extract_kmers(31, &reads, &alphabet).unwrap();
        group.bench_with_input(BenchmarkId::new("overlap", genome_len), &kmers, |b, kmers| {
            b.iter(|| black_box(compute_arcs(kmers, 31, &alphabet, LinkPolicy::FirstMatch).unwrap()));
        });
    }

    group.finish();
}

fn bench_single_read_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");

    for genome_len in [1_000, 10_000, 100_000] {
        // One read covering the whole genome keeps the graph a simple path
        let reads = generate_reads(genome_len, genome_len, 1);
        let config = AssemblyConfig::with_k(31);
        group.throughput(Throughput::Bytes(genome_len as u64));

        group.bench_with_input(BenchmarkId::new("single_read", genome_len), &reads, |b, reads| {
            b.iter(|| black_box(assemble_sequences(reads, &config).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract_and_overlap, bench_single_read_assembly);
criterion_main!(benches);
