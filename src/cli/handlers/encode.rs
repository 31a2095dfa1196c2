use crate::cli::{
    args::EncodeArgs,
    config::{read_input, resolve_codec},
    global::GlobalArgs,
};
use basen::{AlphabetRegistry, Codec};
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_deref(), global)?;

    let mut codec = resolve_codec(&args.alphabet, registry)?;
    if args.no_padding && codec.has_padding() {
        codec = Codec::new(codec.alphabet(), false)?;
    }

    let encoded = codec.encode(&data);

    if let Some(output_path) = &args.output {
        fs::write(output_path, encoded.as_bytes())?;
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", encoded)?;
    }

    Ok(())
}
