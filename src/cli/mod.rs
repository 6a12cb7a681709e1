mod args;
pub mod logging;

use alphabase::{Alphabet, AlphabetsConfig, decode, encode};
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

pub use args::Cli;

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli.config.as_deref())?;

    if cli.list {
        print_alphabets(&config);
        return Ok(());
    }

    let alphabet = resolve_alphabet(&cli, &config)?;
    let input = read_input(cli.file.as_deref())?;

    let output = if cli.decode {
        let text =
            String::from_utf8(input).map_err(|_| "input must be valid UTF-8 for decoding")?;
        decode(text.trim(), &alphabet)?
    } else {
        let mut encoded = encode(&input, &alphabet);
        encoded.push('\n');
        encoded.into_bytes()
    };

    write_output(cli.output.as_deref(), &output)
}

fn load_config(extra: Option<&Path>) -> Result<AlphabetsConfig, Box<dyn Error>> {
    let mut config = AlphabetsConfig::load_with_overrides()?;
    if let Some(path) = extra {
        let overrides = AlphabetsConfig::load_from_file(path)
            .map_err(|e| format!("{}: {e}", path.display()))?;
        log::info!("loaded {} alphabet(s) from {}", overrides.alphabets.len(), path.display());
        config.merge(overrides);
    }
    Ok(config)
}

fn resolve_alphabet(cli: &Cli, config: &AlphabetsConfig) -> Result<Alphabet, Box<dyn Error>> {
    match &cli.custom {
        Some(symbols) => Ok(Alphabet::new(symbols, cli.padding, cli.case_insensitive)?),
        None => Ok(config.alphabet(cli.alphabet_name())?),
    }
}

fn print_alphabets(config: &AlphabetsConfig) {
    println!("Available alphabets:\n");
    for (name, entry) in &config.alphabets {
        let count = entry.chars.chars().count();
        let preview: String = entry.chars.chars().take(20).collect();
        let suffix = if count > 20 { "..." } else { "" };
        let padding = entry.padding.as_deref().unwrap_or(" ");
        let description = entry.description.as_deref().unwrap_or("");
        println!("  {name:<12} base-{count:<3} {padding}  {preview}{suffix:<3}  {description}");
    }
}

fn read_input(file: Option<&Path>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
