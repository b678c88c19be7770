use std::env;
use std::process;

use log::{error, info, warn};

use pair_huffman::run::run_encode;
use pair_huffman::tree::TreeMode;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <input_file> <encoding_file> <output_file> [--table=PATH] [--canonical]",
            args[0]
        );
        eprintln!("  <input_file>:    file to encode.");
        eprintln!("  <encoding_file>: sample file the code is derived from.");
        eprintln!("  <output_file>:   where the encoded bitstream is written.");
        eprintln!("  --table=PATH:    code table file path. Defaults to 'tableFile.txt'.");
        eprintln!("  --canonical:     use canonical min-heap Huffman instead of level pairing.");
        process::exit(1);
    }

    let input_filepath = &args[1];
    let encoding_filepath = &args[2];
    let output_filepath = &args[3];

    let mut table_filepath = String::from("tableFile.txt");
    let mut mode = TreeMode::LevelPaired;

    for arg in &args[4..] {
        if let Some(path) = arg.strip_prefix("--table=") {
            table_filepath = path.to_string();
        } else if arg == "--canonical" {
            mode = TreeMode::Canonical;
        } else {
            warn!("Ignoring unknown argument: {}", arg);
        }
    }

    info!("--- Start Encoding ---");

    match run_encode(
        input_filepath,
        encoding_filepath,
        output_filepath,
        &table_filepath,
        mode,
    ) {
        Ok(report) => {
            info!(
                "Alphabet: {} characters, {} bits in, {} bits out ({:.2}% savings)",
                report.distinct_characters,
                report.stats.original_bits,
                report.stats.encoded_bits,
                report.stats.savings_percent()
            );
            println!("OK");
        }
        Err(e) => {
            error!("Encoding failed: {}", e);
            println!("{}", e.status());
            process::exit(1);
        }
    }
}
