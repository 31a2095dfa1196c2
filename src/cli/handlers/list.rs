use crate::cli::args::ListArgs;
use basen::AlphabetRegistry;

const PREVIEW_CHARS: usize = 20;

pub fn handle(args: ListArgs, registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    if args.names {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let default = registry.settings.default_alphabet.as_deref();

    println!("Available alphabets:\n");
    for name in registry.names() {
        let Some(config) = registry.get_alphabet(name) else {
            continue;
        };

        let count = config.chars.chars().count();
        let preview: String = config.chars.chars().take(PREVIEW_CHARS).collect();
        let suffix = if count > PREVIEW_CHARS { "..." } else { "" };
        let bits = match config.codec() {
            Ok(codec) => format!("{} bits", codec.bits_per_char()),
            Err(_) => "invalid".to_string(),
        };
        let padding = if config.padding { "pad" } else { "nopad" };
        let marker = if default == Some(name) { "*" } else { " " };

        println!(
            "{} {:<15} base-{:<3} {:>7} {:>5}  {}{}",
            marker, name, count, bits, padding, preview, suffix
        );
        if let Some(description) = &config.description {
            println!("  {:<15} {}", "", description);
        }
    }

    Ok(())
}
