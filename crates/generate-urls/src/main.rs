use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use url_sampler::{generate, GenerateRequest};

/// Generate urls whose frequencies follow a provided hits distribution.
///
/// Each output line is PREFIX followed by an index into HITS_FREQUENCY_FILE,
/// e.g. `generate_urls hits_frequency.txt 100 example.com?a= out.txt`.
#[derive(Parser, Debug)]
#[command(name = "generate_urls")]
struct Args {
    /// File with one non-negative hit count per line
    hits_frequency_file: PathBuf,

    /// Number of urls to generate
    n_urls: usize,

    /// String prepended to every index
    prefix: String,

    /// Destination file, replaced atomically on success
    output_file: PathBuf,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_json);
    ExitCode::from(run(args))
}

/// Generate the url file and return the process exit status: 0 on success,
/// 1 on any library error.
fn run(args: Args) -> u8 {
    let request = GenerateRequest {
        weights_path: args.hits_frequency_file,
        n_urls: args.n_urls,
        prefix: args.prefix,
        output_path: args.output_file,
    };

    match generate(&request, &mut rand::thread_rng()) {
        Ok(summary) => {
            tracing::info!(
                output = %request.output_path.display(),
                urls = summary.urls_written,
                distinct = summary.distinct_indexes,
                categories = summary.categories,
                total_weight = summary.total_weight,
                "urls generated"
            );
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "generation failed");
            eprintln!("generate_urls: {e}");
            1
        }
    }
}
