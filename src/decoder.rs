use std::env;
use std::fs;
use std::process;

use log::{error, info};

use pair_huffman::decode::{decode_bits, read_table_file};
use pair_huffman::error::Result;

fn run(table_filepath: &str, input_filepath: &str, output_filepath: &str) -> Result<usize> {
    let table = read_table_file(table_filepath)?;
    info!("Read table with {} entries", table.len());

    let encoded = fs::read_to_string(input_filepath)?;
    let decoded = decode_bits(&encoded, &table)?;

    fs::write(output_filepath, &decoded)?;
    Ok(decoded.chars().count())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <table_file> <encoded_file> <output_file>",
            args[0]
        );
        eprintln!("  <table_file>:   code table written by the encoder.");
        eprintln!("  <encoded_file>: textual bitstream to decode.");
        eprintln!("  <output_file>:  where the decoded text is written.");
        process::exit(1);
    }

    info!("--- Start Decoding ---");

    match run(&args[1], &args[2], &args[3]) {
        Ok(count) => {
            info!("Decoded {} characters to {}", count, args[3]);
            println!("OK");
        }
        Err(e) => {
            error!("Decoding failed: {}", e);
            println!("{}", e.status());
            process::exit(1);
        }
    }
}
