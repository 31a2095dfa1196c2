use crate::cli::{
    args::DecodeArgs,
    config::{read_input, resolve_codec},
    global::GlobalArgs,
};
use basen::AlphabetRegistry;
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_deref(), global)?;
    let input_text =
        String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;

    let codec = resolve_codec(&args.alphabet, registry)?;
    let data = codec.decode(input_text.trim());

    if let Some(output_path) = &args.output {
        fs::write(output_path, &data)?;
    } else {
        io::stdout().write_all(&data)?;
    }

    Ok(())
}
