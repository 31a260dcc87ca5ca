use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use padcalc::{Evaluator, Keypad, Mode, ResultFormat};

/// Evaluate calculator expressions like `(2+3)*4` or `7.5 % 2`.
#[derive(Parser, Debug)]
#[command(name = "padcalc", version, about)]
struct Options {
    /// Report missing operands and unbalanced parentheses as errors.
    #[arg(long)]
    strict: bool,

    /// Print results with exactly N decimals.
    #[arg(long, value_name = "N")]
    fixed: Option<usize>,

    /// Read lines as keypad presses: C clears, < deletes, = evaluates.
    #[arg(long)]
    keypad: bool,

    /// More logging on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate once. Starts a prompt when missing.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

impl Options {
    fn evaluator(&self) -> Evaluator {
        Evaluator::new(if self.strict { Mode::Strict } else { Mode::Lenient })
    }

    fn format(&self) -> ResultFormat {
        self.fixed.map_or(ResultFormat::Shortest, ResultFormat::Fixed)
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(verbose: u8) {
    // stdout is for results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(verbose))
        .without_time()
        .with_target(false)
        .init();
}

fn repl(opts: &Options) -> Result<()> {
    let evaluator = opts.evaluator();
    let format = opts.format();
    let mut keypad = Keypad::new(evaluator, format);

    let mut rl = rustyline::DefaultEditor::new()?;
    let histpath = dirs::home_dir().map(|h| h.join(".padcalc_history"));
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            debug!("no history yet at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if opts.keypad {
                    println!("{}", keypad.press_all(&line));
                    continue;
                }
                match evaluator.eval(&line) {
                    Err(e) => println!("Eval error: {}", e),
                    Ok(result) => println!("{}", format.render(result)),
                }
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let opts = Options::parse();
    init_logging(opts.verbose);

    if opts.expr.is_empty() {
        return repl(&opts);
    }
    let input = opts.expr.join(" ");
    match opts.evaluator().eval(&input) {
        Ok(result) => println!("{} = {}", input, opts.format().render(result)),
        Err(e) => {
            eprintln!("Eval error: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
