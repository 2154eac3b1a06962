use astargta::DEFAULT_HEURISTIC_PRUNING;
use bio::io::fasta;
use clap::{value_parser, Parser};
use gta_graph::HashDbg;
use gta_hmm::{Alphabet, ProfileHmm, NUM_TRANSITIONS};
use gta_types::{dna, Score};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::PathBuf};

#[derive(Parser)]
#[clap(author, about)]
pub struct Cli {
    /// Forward profile HMM as a JSON model document.
    #[clap(long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub forward_model: PathBuf,

    /// Reverse profile HMM as a JSON model document.
    #[clap(long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub reverse_model: PathBuf,

    /// FASTA file of reads; each read and its reverse complement go into
    /// the graph.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub reads: PathBuf,

    /// Seeds file: `gene<TAB>seed<TAB>start_state` per line; `#` comments.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub seeds: PathBuf,

    /// k-mer size of the graph.
    #[clap(short, default_value_t = 45)]
    pub k: usize,

    /// Branch-pruning threshold on consecutive non-positive columns;
    /// 0 disables pruning.
    #[clap(long, default_value_t = DEFAULT_HEURISTIC_PRUNING)]
    pub pruning: u32,

    /// Worker threads for the seed loop. With more than one, contig
    /// content may vary across runs as searches race on the shared cache.
    #[clap(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Write contigs here instead of stdout.
    #[clap(short, long, value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Skip the aggregate stats line on stderr.
    #[clap(long)]
    pub silent: bool,
}

/// On-disk model document. Transitions are per state in the order
/// MM, MI, MD, IM, II, DM, DD; `null` marks an impossible transition.
#[derive(Serialize, Deserialize)]
pub struct ModelDoc {
    pub alphabet: String,
    pub match_emissions: Vec<Vec<Score>>,
    pub insert_emissions: Vec<Vec<Score>>,
    pub transitions: Vec<[Option<Score>; NUM_TRANSITIONS]>,
}

impl ModelDoc {
    pub fn into_hmm(self) -> ProfileHmm {
        let alphabet = match self.alphabet.as_str() {
            "dna" => Alphabet::Dna,
            "protein" => Alphabet::Protein,
            other => panic!("unknown alphabet {other:?}; expected \"dna\" or \"protein\""),
        };
        let transitions = self
            .transitions
            .into_iter()
            .map(|row| row.map(|t| t.unwrap_or(Score::NEG_INFINITY)))
            .collect();
        ProfileHmm::new(
            alphabet,
            self.match_emissions,
            self.insert_emissions,
            transitions,
        )
    }
}

pub fn load_model(path: &PathBuf) -> ProfileHmm {
    let file = File::open(path).unwrap_or_else(|e| panic!("cannot open {}: {e}", path.display()));
    let doc: ModelDoc = serde_json::from_reader(BufReader::new(file))
        .unwrap_or_else(|e| panic!("malformed model {}: {e}", path.display()));
    doc.into_hmm()
}

/// One seed task from the seeds file.
pub struct SeedSpec {
    pub gene: String,
    pub seed: Vec<u8>,
    pub start_state: usize,
}

pub fn load_seeds(path: &PathBuf) -> Vec<SeedSpec> {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot open {}: {e}", path.display()));
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|line| {
            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(gene), Some(seed), Some(start)) => SeedSpec {
                    gene: gene.to_string(),
                    seed: seed.as_bytes().to_vec(),
                    start_state: start
                        .parse()
                        .unwrap_or_else(|_| panic!("bad start state in {line:?}")),
                },
                _ => panic!("expected gene<TAB>seed<TAB>start_state, got {line:?}"),
            }
        })
        .collect()
}

/// Build the graph from the reads file, both strands. Reads containing
/// bytes outside the alphabet are skipped; returns the skip count.
pub fn build_graph(path: &PathBuf, k: usize) -> (HashDbg, usize) {
    let reader = fasta::Reader::new(BufReader::new(
        File::open(path).unwrap_or_else(|e| panic!("cannot open {}: {e}", path.display())),
    ));
    let mut graph = HashDbg::new(k);
    let mut skipped = 0;
    for record in reader.records() {
        let record = record.expect("malformed FASTA record");
        match dna::encode_seq(record.seq()) {
            Ok(codes) => graph.add_seq_with_rc(&codes),
            Err(_) => skipped += 1,
        }
    }
    (graph, skipped)
}

#[cfg(test)]
mod tests {
    #[test]
    fn cli_parses() {
        <super::Cli as clap::CommandFactory>::command().debug_assert();
    }
}
