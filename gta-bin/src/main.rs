mod cli;

use astargta::{stats::SearchStats, HmmGraphSearch, TransitionCache};
use clap::Parser;
use cli::{build_graph, load_model, load_seeds, Cli, SeedSpec};
use itertools::Itertools;
use rayon::prelude::*;
use std::io::Write;

fn main() {
    let cli = Cli::parse();

    let forward_hmm = load_model(&cli.forward_model);
    let reverse_hmm = load_model(&cli.reverse_model);
    let (graph, skipped) = build_graph(&cli.reads, cli.k);
    if skipped > 0 {
        eprintln!("skipped {skipped} reads with bytes outside the alphabet");
    }
    let seeds = load_seeds(&cli.seeds);

    let cache = TransitionCache::new();
    let run_seed = |(count, spec): (usize, &SeedSpec)| {
        // One engine, hence one arena and one open/closed state, per seed.
        let mut search = HmmGraphSearch::new(cli.pruning);
        search
            .assemble(
                &forward_hmm,
                &reverse_hmm,
                &graph,
                &spec.seed,
                spec.start_state,
                &cache,
            )
            .map(|(contig, stats)| (contig.fasta(&spec.gene, count), stats))
            .map_err(|e| (spec.gene.clone(), e))
    };

    let results: Vec<_> = if cli.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cli.jobs)
            .build()
            .unwrap();
        pool.install(|| {
            seeds
                .iter()
                .enumerate()
                .collect_vec()
                .into_par_iter()
                .map(&run_seed)
                .collect()
        })
    } else {
        seeds.iter().enumerate().map(&run_seed).collect()
    };

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .unwrap_or_else(|e| panic!("cannot create {}: {e}", path.display())),
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut totals = SearchStats::default();
    let mut failures = 0usize;
    for result in results {
        match result {
            Ok((record, stats)) => {
                writeln!(out, "{record}").expect("write failed");
                totals += stats;
            }
            Err((gene, e)) => {
                eprintln!("{gene}: {e}");
                failures += 1;
            }
        }
    }

    if !cli.silent && totals.sample_size > 0 {
        totals.print();
    }
    if failures > 0 {
        std::process::exit(1);
    }
}
