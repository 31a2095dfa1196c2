mod args;
mod config;
mod global;
mod handlers;
mod logger;

use basen::AlphabetRegistry;
use clap::Parser;

use args::Command;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "basen")]
#[command(version)]
#[command(about = "Encode and decode binary data with RFC 4648 base16, base32 and base64 alphabets", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // Unsafe: environment variable access (not thread-safe)
        // Still single-threaded at this point.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    logger::init(cli.global.quiet, cli.global.verbose)?;

    // Load alphabet configuration with user overrides
    let registry = AlphabetRegistry::load_with_overrides()?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Command::List(args) => handlers::list::handle(args, &registry),
    }
}
