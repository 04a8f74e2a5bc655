use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use wordmerge::{
    encode_text_as_binary, merge_sorted_words, read_binary_records, Direction, Format,
};

#[derive(Parser)]
#[command(name = "wordmerge")]
#[command(about = "Merge the words of text or binary files, sorted by byte weight")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge and sort the words of one or more source files
    Merge {
        /// Source files to draw words from, in order
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        /// On-disk format shared by the sources and the destination
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Sort heaviest words first
        #[arg(short, long)]
        reverse: bool,
    },

    /// Re-encode a text file as length-prefixed binary records
    Convert {
        /// Text file to read
        input: PathBuf,

        /// Binary file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the records of a binary file, one per line
    Dump {
        /// Binary file to read
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Binary,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Format::Text,
            FormatArg::Binary => Format::Binary,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Merge {
            sources,
            output,
            format,
            reverse,
        } => cmd_merge(sources, output, format.into(), reverse),

        Commands::Convert { input, output } => cmd_convert(input, output),

        Commands::Dump { input } => cmd_dump(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_merge(
    sources: Vec<PathBuf>,
    output: PathBuf,
    format: Format,
    reverse: bool,
) -> wordmerge::Result<()> {
    let direction = if reverse {
        Direction::Descending
    } else {
        Direction::Ascending
    };

    let start = Instant::now();
    let written = merge_sorted_words(format, &output, direction, &sources)?;
    let elapsed = start.elapsed();

    println!(
        "Merged {} words from {} files into {} in {:.3}ms",
        written,
        sources.len(),
        output.display(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}

fn cmd_convert(input: PathBuf, output: PathBuf) -> wordmerge::Result<()> {
    let records = encode_text_as_binary(&input, &output)?;

    println!("Wrote {} records to {}", records, output.display());

    Ok(())
}

fn cmd_dump(input: PathBuf) -> wordmerge::Result<()> {
    for record in read_binary_records(&input)? {
        println!("{}", String::from_utf8_lossy(&record));
    }

    Ok(())
}
