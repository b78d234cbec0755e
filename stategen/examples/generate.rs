//! Example generation run over a block-state corpus.
//!
//! Run with: `cargo run --example generate`
//!
//! Without arguments a built-in demo corpus is used and the generated
//! sources are printed. Pass a corpus file and an output directory to
//! generate from captured data instead:
//! `cargo run --example generate -- data.txt src/block_state`

use std::env;
use std::path::Path;

use stategen::prelude::*;

/// Small corpus in the captured line format, including untagged log noise.
const DEMO_CORPUS: &str = "BLOCKINFO --- air - \n\
BLOCKINFO --- stone - \n\
BLOCKINFO --- grass_block - snowy:false \n\
BLOCKINFO --- oak_log - axis:y \n\
BLOCKINFO --- lever - face:wall facing:north powered:false \n\
BLOCKINFO --- cake - bites:0 \n\
[12:03:44] [Server thread/INFO]: Preparing spawn area\n\
ENUMINFO --- Axis - x,y,z\n\
ENUMINFO --- Direction - north,south,west,east\n\
ENUMINFO --- AttachFace - floor,wall,ceiling\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = GeneratorConfig::default();

    let source = match args.get(1) {
        Some(path) => {
            println!("Generating from corpus {}", path);
            generate_from_corpus_file(Path::new(path), &CorpusFormat::blocks(), &config)?
        }
        None => {
            println!("No corpus given, using the built-in demo corpus");
            generate_from_corpus(DEMO_CORPUS, &CorpusFormat::blocks(), &config)?
        }
    };

    match args.get(2) {
        Some(dir) => {
            source.write_to(dir)?;
            println!("Wrote types.rs, list.rs, de.rs and ser.rs to {}", dir);
        }
        None => {
            println!("\n--- types.rs ---\n{}", source.types);
            println!("--- list.rs ---\n{}", source.list);
            println!("--- de.rs ---\n{}", source.de);
            println!("--- ser.rs ---\n{}", source.ser);
        }
    }

    Ok(())
}
