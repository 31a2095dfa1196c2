use basen::{AlphabetRegistry, Codec};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::args::AlphabetArgs;
use super::global::GlobalArgs;

/// Resolve the codec selected on the command line.
///
/// Literal `--chars` win over names; with neither, the registry's default
/// alphabet is used.
pub fn resolve_codec(
    args: &AlphabetArgs,
    registry: &AlphabetRegistry,
) -> Result<Codec, Box<dyn std::error::Error>> {
    if let Some(chars) = &args.chars {
        return Ok(Codec::new(chars, true)?);
    }

    let name = args
        .alphabet
        .as_deref()
        .or(registry.settings.default_alphabet.as_deref())
        .ok_or("No alphabet given and no default_alphabet configured")?;

    Ok(registry.codec(name)?)
}

/// Read the whole input from a file or stdin, enforcing --max-size.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len();

            if file_size > global.max_size as u64 {
                if global.force {
                    log::warn!(
                        "Processing large file ({} bytes, limit: {} bytes)",
                        file_size,
                        global.max_size
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    // Check stdin size after reading
    if global.max_size > 0 && buffer.len() > global.max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --file with --force for large inputs.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}
