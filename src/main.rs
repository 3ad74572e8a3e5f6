use std::{fs, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, Metadata, Record};
use pemdas::{
    config::{Config, DEFAULT_DECIMAL_PLACES, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LENGTH},
    interpreter::evaluator::core::EvaluationResult,
    report::Report,
    run_with,
    util::format::format_number,
};

/// pemdas evaluates arithmetic expressions and shows every step, in the
/// order you would work them out by hand.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pemdas to read expressions from a file, one per line, instead of
    /// evaluating `contents` directly. Blank lines and lines starting with
    /// `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Prints a JSON report per expression instead of the step listing.
    #[arg(short, long)]
    json: bool,

    /// Deepest nesting of parentheses, negations and exponents accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Longest expression accepted, in characters.
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LENGTH)]
    max_length: usize,

    /// Decimal places shown in steps and results.
    #[arg(short, long, default_value_t = DEFAULT_DECIMAL_PLACES)]
    decimals: usize,

    /// Logs evaluation stages to stderr; repeat for every step.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::default().with_max_depth(args.max_depth)
                                  .with_max_input_length(args.max_length)
                                  .with_decimal_places(args.decimals);

    let expressions = if args.file {
        let Ok(script) = fs::read_to_string(&args.contents) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            return ExitCode::FAILURE;
        };
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .map(String::from)
              .collect()
    } else {
        vec![args.contents]
    };

    let mut failed = false;
    for expression in &expressions {
        let result = run_with(expression, &config);
        failed |= result.is_err();

        if args.json {
            print_json(&result);
        } else {
            if expressions.len() > 1 {
                println!("{expression}");
            }
            print_steps(&result, &config);
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn print_json(result: &EvaluationResult) {
    match Report::from(result).to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize the report: {e}"),
    }
}

fn print_steps(result: &EvaluationResult, config: &Config) {
    match result {
        Ok(evaluation) => {
            if evaluation.has_walkthrough() {
                let width = evaluation.steps
                                      .iter()
                                      .map(|step| step.description.len())
                                      .max()
                                      .unwrap_or_default();
                for step in &evaluation.steps {
                    println!("{:>3}. {:<width$}   {}",
                             step.order, step.description, step.expression_after);
                }
            }
            println!("= {}", format_number(evaluation.value, config.decimal_places));
        },
        Err(e) => eprintln!("Error: {e}"),
    }
}
