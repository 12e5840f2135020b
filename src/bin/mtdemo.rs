use std::io::{self, BufWriter, Read, Write};
use std::process;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use mt19937::{ByteStream, MT19937};

#[derive(Parser)]
#[command(name = "mtdemo")]
#[command(version, about = "Print or stream MT19937 output for manual inspection")]
struct Cli {
    /// Seed value; only its low 32 bits are used
    #[arg(
        long,
        global = true,
        env = "MT_SEED",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    seed: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print doubles in [0, 1], one per line
    Doubles {
        #[arg(short, long, env = "MT_COUNT", default_value_t = 10)]
        count: usize,
    },

    /// Print raw 32-bit words
    Words {
        #[arg(short, long, env = "MT_COUNT", default_value_t = 10)]
        count: usize,

        /// Words per output line
        #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
        per_line: u16,
    },

    /// Write the little-endian byte stream to stdout
    Stream {
        /// Stop after this many bytes instead of running until the pipe closes
        #[arg(short, long)]
        bytes: Option<u64>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut mt = MT19937::seeded(cli.seed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = match cli.command {
        Commands::Doubles { count } => print_doubles(&mut mt, count, &mut out),
        Commands::Words { count, per_line } => {
            print_words(&mut mt, count, per_line as usize, &mut out)
        }
        Commands::Stream { bytes } => stream_bytes(mt, bytes, &mut out),
    };

    let result = result.and_then(|_| out.flush());
    match result {
        Ok(()) => {}
        // the consumer hung up, e.g. `mtdemo stream | head -c 16`
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("mtdemo: {}", e);
            process::exit(1);
        }
    }
}

fn print_doubles<W: Write>(mt: &mut MT19937, count: usize, out: &mut W) -> io::Result<()> {
    for _ in 0..count {
        writeln!(out, "{:.6}", mt.next_f64())?;
    }
    Ok(())
}

fn print_words<W: Write>(
    mt: &mut MT19937,
    count: usize,
    per_line: usize,
    out: &mut W,
) -> io::Result<()> {
    let words: Vec<u32> = (0..count).map(|_| mt.next_u32()).collect();
    for line in words.chunks(per_line) {
        writeln!(out, "{}", line.iter().format(" "))?;
    }
    Ok(())
}

fn stream_bytes<W: Write>(mt: MT19937, limit: Option<u64>, out: &mut W) -> io::Result<()> {
    let mut stream = ByteStream::new(mt);
    let written = match limit {
        Some(n) => io::copy(&mut Read::take(stream, n), out)?,
        None => io::copy(&mut stream, out)?,
    };
    log::debug!("wrote {} bytes", written);
    Ok(())
}
