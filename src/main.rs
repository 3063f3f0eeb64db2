// Entry point: program main
// Loads options, then either prints the suggestions for one query (--filter)
// or runs the interactive control and prints the final value.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use typeahead::candidate::demo_candidates;
use typeahead::form::Validation;
use typeahead::options::load_candidates;
use typeahead::suggest::filter;
use typeahead::ui::run as interactive_run;
use typeahead::{Options, highlight::highlight, trace_init};

#[derive(Parser, Debug)]
#[command(name = "typeahead", version, about = "Autocomplete input for the terminal")]
struct Cli {
    /// JSON file with control options (camelCase keys).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of candidates: strings or {"value", "prefix"} objects.
    #[arg(long)]
    candidates: Option<PathBuf>,

    /// Characters to type before the panel opens.
    #[arg(long)]
    min_length: Option<usize>,

    /// Initial value.
    #[arg(long)]
    value: Option<String>,

    #[arg(long)]
    placeholder: Option<String>,

    /// Tag used to mark matches in --filter output.
    #[arg(long)]
    highlight_tag: Option<String>,

    /// Only accept values that are one of the candidates.
    #[arg(long)]
    strict: bool,

    #[arg(long)]
    disabled: bool,

    /// Print the highlighted suggestions for QUERY and exit.
    #[arg(long, value_name = "QUERY")]
    filter: Option<String>,

    /// Directory for the trace log (needs the `trace` feature).
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

fn build_options(cli: &Cli) -> typeahead::Result<Options> {
    let mut options = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(path) = &cli.candidates {
        options.candidates = load_candidates(path)?;
    }
    if options.candidates.is_empty() {
        options.candidates = demo_candidates();
    }
    if let Some(n) = cli.min_length {
        options.min_length = n;
    }
    if let Some(v) = &cli.value {
        options.value = Some(v.clone());
    }
    if let Some(p) = &cli.placeholder {
        options.placeholder = p.clone();
    }
    if let Some(t) = &cli.highlight_tag {
        options.highlight_tag = t.clone();
    }
    if cli.strict {
        options.validation = Validation::MustMatchCandidate;
    }
    if cli.disabled {
        options.disabled = true;
    }
    Ok(options)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    trace_init::init_tracing(&cli.log_dir);

    let options = match build_options(&cli) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    if let Some(query) = &cli.filter {
        for c in filter(&options.candidates, query) {
            let marked = highlight(&c.value, query, &options.highlight_tag);
            match &c.prefix {
                Some(p) => println!("{p} {marked}"),
                None => println!("{marked}"),
            }
        }
        return;
    }

    match interactive_run(options).await {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
