use std::{
    fs::File,
    io::{self, prelude::*, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use huffcode::{frequency, tree, Extractor, SingletonCode, Symbol};

/// Print the Huffman code of every symbol in the input, one `symbol<TAB>code`
/// line each.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file. Reads stdin when absent.
    input: Option<PathBuf>,

    /// Code raw bytes (labelled in hex) instead of UTF-8 characters.
    #[arg(long)]
    bytes: bool,

    /// Code given to the symbol when the input has only one distinct symbol.
    #[arg(long, value_enum, default_value_t)]
    singleton: SingletonCode,

    /// Also print the tree structure to stderr.
    #[arg(long)]
    tree: bool,

    /// Also print the encoded length and alphabet size to stderr.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = read_input(args.input.as_deref())?;
    if args.bytes {
        report(input, &args)
    } else {
        let text = String::from_utf8(input).context("input is not UTF-8 (try --bytes)")?;
        report(text.chars(), &args)
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    let mut buf = vec![];
    match path {
        Some(path) => File::open(path)
            .and_then(|mut f| f.read_to_end(&mut buf))
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?,
    };
    Ok(buf)
}

fn report<S: Symbol>(symbols: impl IntoIterator<Item = S>, args: &Args) -> anyhow::Result<()> {
    let frequencies = frequency::count(symbols);
    let root = tree::build(&frequencies)?;
    if args.tree {
        eprint!("{root}");
    }

    let table = Extractor::new(args.singleton).extract(&root)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    write!(stdout, "{table}")?;
    stdout.flush()?;

    if args.stats {
        eprintln!(
            "{} symbols, {} bits encoded, tree depth {}",
            table.len(),
            table.weighted_length(&frequencies),
            root.depth()
        );
    }

    Ok(())
}
