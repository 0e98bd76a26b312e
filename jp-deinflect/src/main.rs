use std::io::{self, BufRead};

use clap::Parser;
use jp_deinflect_lib::{output, Deinflector, UnconjugateOptions};

#[derive(Parser)]
#[command(name = "jp-deinflect", about = "Japanese deinflection engine")]
struct Cli {
    /// Conjugated word to analyze. If omitted, reads words from stdin,
    /// one per line.
    input: Option<String>,

    /// Retry with progressively truncated input when nothing matches.
    #[arg(long)]
    fuzzy: bool,

    /// Print human-readable derivation chains instead of JSON.
    #[arg(long)]
    chain: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Show top N candidates.
    #[arg(short = 'n', long = "top", default_value = "10")]
    top: usize,

    /// Maximum recursion depth of the suffix search.
    #[arg(long, default_value_t = jp_deinflect_lib::DEFAULT_DEPTH_LIMIT)]
    depth_limit: u32,
}

fn main() {
    let cli = Cli::parse();
    let deinflector = Deinflector::new();

    match cli.input {
        Some(ref word) => process_line(word, &deinflector, &cli),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.expect("failed to read stdin");
                if !line.trim().is_empty() {
                    process_line(line.trim(), &deinflector, &cli);
                }
            }
        }
    }
}

fn process_line(word: &str, deinflector: &Deinflector, cli: &Cli) {
    let options = UnconjugateOptions {
        fuzzy: cli.fuzzy,
        depth_limit: cli.depth_limit,
    };
    let mut candidates = deinflector.unconjugate_with(word, &options);
    candidates.truncate(cli.top);

    if cli.chain {
        for candidate in &candidates {
            let chain = output::render_chain(candidate);
            if chain.is_empty() {
                println!("{}", candidate.base);
            } else {
                println!("{}: {}", candidate.base, output::chain_to_string(&chain));
            }
        }
    } else {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&candidates)
        } else {
            serde_json::to_string(&candidates)
        };
        println!("{}", json.expect("candidate serialization failed"));
    }
}
