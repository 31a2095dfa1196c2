use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode binary data to text
    Encode(EncodeArgs),
    /// Decode text back to binary data
    Decode(DecodeArgs),
    /// List available alphabets
    List(ListArgs),
}

/// Which alphabet to use: a registry name or literal characters
#[derive(Args, Debug)]
pub struct AlphabetArgs {
    /// Alphabet name (defaults to the configured default alphabet)
    pub alphabet: Option<String>,

    /// Use these characters as the alphabet instead of a named one
    #[arg(long, value_name = "CHARS", conflicts_with = "alphabet")]
    pub chars: Option<String>,
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Input file (reads from stdin if not provided)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Strip trailing '=' padding
    #[arg(long)]
    pub no_padding: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Input file (reads from stdin if not provided)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for listing alphabets
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print only the names
    #[arg(long)]
    pub names: bool,
}
