//! Wardbreak CLI
//!
//! Usage:
//!   wardbreak --text "your phrase"                    # Single submission
//!   wardbreak --interactive                           # Interactive duel
//!   wardbreak --classify --strategy stemmed \
//!             --block reveal --text "revealing it"    # One-shot barrier check
//!   wardbreak --serve                                 # HTTP API server
//!   wardbreak --text "phrase" --json                  # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use wardbreak::core::{classify, run_server, synonyms_of, ResistanceEngine, ResponseComposer};
use wardbreak::types::{FilterSpec, FilterStrategy, ResistanceBand, SubmitOutput};
use wardbreak::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "wardbreak",
    version = VERSION,
    about = "Wardbreak - talk a simulated warden out of its secret",
    long_about = "Wardbreak pits your phrasing against a layered text defense.\n\n\
                  A warden guards a generated secret phrase behind a resistance\n\
                  score. Indirection (scales, praise, feigned continuations)\n\
                  erodes it; demands, threats and jailbreak vocabulary harden it.\n\
                  As resistance falls, words of the secret slip out.\n\n\
                  Modes:\n  \
                  --interactive  Duel loop against the warden\n  \
                  --classify     One-shot barrier classification\n  \
                  --serve        HTTP API server mode\n\n\
                  Bands:\n  \
                  FORTIFIED   - Nothing revealed\n  \
                  STRONG      - One word out\n  \
                  WAVERING    - Two words out\n  \
                  WEAKENING   - Three words out\n  \
                  CRITICAL    - Four words out\n  \
                  BROKEN      - The whole secret is out"
)]
struct Args {
    /// Phrase to evaluate (single mode, or with --classify)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive duel mode - read phrases from stdin
    #[arg(short, long)]
    interactive: bool,

    /// One-shot barrier classification (use with --strategy and --block)
    #[arg(short, long)]
    classify: bool,

    /// Barrier strategy name (exact, case_insensitive, stemmed,
    /// synonym_aware, intent_pattern); unknown names degrade to exact
    #[arg(long, default_value = "exact")]
    strategy: String,

    /// Blocklist entry for --classify (repeatable)
    #[arg(long = "block")]
    blocklist: Vec<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Session seed for a reproducible secret and narrative
    #[arg(long)]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show signal breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if args.classify {
        run_classify(&args);
    } else if args.interactive {
        run_interactive(&args);
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Build a session pair from the seed argument
fn new_session(args: &Args) -> (ResistanceEngine, ResponseComposer) {
    match args.seed {
        Some(seed) => (
            ResistanceEngine::with_seed(seed),
            ResponseComposer::with_seed(seed),
        ),
        None => (ResistanceEngine::new(), ResponseComposer::new()),
    }
}

/// Run single submission against a fresh warden
fn run_single(text: &str, args: &Args) {
    let (mut engine, mut composer) = new_session(args);

    let output = engine.submit(text);
    let revealed = engine.revealed_units().to_vec();
    let narrative = composer.compose(&output, &revealed, true);

    if args.json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("serialization error: {}", e),
        }
    } else if args.verbose {
        print_verbose(&output, args.no_color);
        println!("{}", narrative);
    } else {
        if args.no_color {
            println!("{}", output.to_parseable_string());
        } else {
            println!("{}", output.to_terminal_string());
        }
        println!("{}", narrative);
    }
}

/// Run one-shot barrier classification
fn run_classify(args: &Args) {
    let text = match args.text.as_deref() {
        Some(t) => t,
        None => {
            eprintln!("--classify needs --text");
            std::process::exit(2);
        }
    };

    let spec = FilterSpec::new(
        FilterStrategy::from_name(&args.strategy),
        args.blocklist.clone(),
    );
    let verdict = classify(text, &spec);

    if args.json {
        match serde_json::to_string_pretty(&verdict) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("serialization error: {}", e),
        }
        return;
    }

    if verdict.blocked {
        let why = verdict
            .matched_term
            .clone()
            .or_else(|| verdict.reason.map(|r| r.code().to_string()))
            .unwrap_or_default();
        if args.no_color {
            println!("BLOCKED [{}] ({})", spec.strategy, why);
        } else {
            println!("{} [{}] ({})", "BLOCKED".red().bold(), spec.strategy, why);
        }
    } else if args.no_color {
        println!("PASSED [{}]", spec.strategy);
    } else {
        println!("{} [{}]", "PASSED".green().bold(), spec.strategy);
    }
}

/// Run interactive duel mode
fn run_interactive(args: &Args) {
    let (mut engine, mut composer) = new_session(args);

    print_header(args.no_color);
    println!("Speak to the warden and press Enter. Type 'quit' to exit, 'hint' for help.");
    println!("Goal: erode resistance to 0 and hear the whole secret.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(&engine, args.no_color);
        print!("{}", prompt);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Attempts: {}", engine.attempts());
            break;
        }
        if line.eq_ignore_ascii_case("hint") {
            print_hint();
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let is_first = engine.attempts() == 0;
        let output = engine.submit(line);
        let revealed = engine.revealed_units().to_vec();
        let narrative = composer.compose(&output, &revealed, is_first);

        if args.json {
            match serde_json::to_string(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("serialization error: {}", e),
            }
        } else if args.verbose {
            print_verbose(&output, args.no_color);
            println!("{}", narrative);
        } else if args.no_color {
            println!("{}", output.to_parseable_string());
            println!("{}", narrative);
        } else {
            println!("{}", output.to_terminal_string());
            println!("{}", narrative);
        }

        if output.defeated {
            print_defeat_banner(&engine, args.no_color);
            break;
        }
    }
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Wardbreak v{}", VERSION);
        println!("========================================");
    } else {
        println!("{}", "========================================".bold());
        println!("{}", format!("  Wardbreak v{}", VERSION).bold());
        println!("{}", "========================================".bold());
    }
    println!();
}

/// Format the duel prompt
fn format_prompt(engine: &ResistanceEngine, no_color: bool) -> String {
    let band = engine.band();
    if no_color {
        format!("[{} {}/{}] > ", band, engine.revealed_count(), engine.secret_len())
    } else {
        format!(
            "{}{} [{} {}/{}]{} > ",
            band.color_code(),
            band.emoji(),
            band,
            engine.revealed_count(),
            engine.secret_len(),
            ResistanceBand::color_reset()
        )
    }
}

/// Print the hint text (synonym table lookups)
fn print_hint() {
    println!("The warden listens for more than literal words. Some families it knows:");
    for word in ["secret", "reveal", "open"] {
        let alts = synonyms_of(word);
        if !alts.is_empty() {
            println!("  {} ~ {}", word, alts.join(", "));
        }
    }
    println!("Indirection works better than demands. Measuring games unsettle it.");
}

/// Print the defeat banner with the full secret
fn print_defeat_banner(engine: &ResistanceEngine, no_color: bool) {
    println!();
    if no_color {
        println!("==============================================");
        println!("  THE WARDEN BREAKS");
        println!("  Secret: {}", engine.secret_phrase());
        println!("  Attempts: {}", engine.attempts());
        println!("==============================================");
    } else {
        println!("{}", "==============================================".green());
        println!("{}", "  THE WARDEN BREAKS".green().bold());
        println!("  Secret: {}", engine.secret_phrase().yellow().bold());
        println!("  Attempts: {}", engine.attempts());
        println!("{}", "==============================================".green());
    }
}

/// Print verbose signal breakdown
fn print_verbose(output: &SubmitOutput, no_color: bool) {
    let color = if no_color { "" } else { output.band.color_code() };
    let reset = if no_color { "" } else { ResistanceBand::color_reset() };
    let s = &output.signals;

    println!("{}┌─────────────────────────────────────────┐{}", color, reset);
    println!(
        "{}│ resistance = {:>5.1}  (delta {:+.1}){}",
        color, output.score, output.delta, reset
    );
    println!("{}├─────────────────────────────────────────┤{}", color, reset);
    println!("{}│ Signals:{}", color, reset);
    println!("{}│   scale language: {}{}", color, s.has_scale_language, reset);
    println!("{}│   fractions:      {:?} ({:?}){}", color, s.fractions, s.fraction_precision, reset);
    println!("{}│   demonstration:  {}{}", color, s.tactics.demonstration, reset);
    println!("{}│   praise:         {}{}", color, s.tactics.praise, reset);
    println!("{}│   escalation:     {}{}", color, s.tactics.escalation, reset);
    println!("{}│   lost place:     {}{}", color, s.tactics.lost_place, reset);
    println!("{}│   calibration:    {}{}", color, s.tactics.calibration, reset);
    println!("{}│   anchoring:      {}{}", color, s.tactics.anchoring, reset);
    println!("{}│   completion:     {}{}", color, s.tactics.completion, reset);
    println!("{}│   direct demand:  {}{}", color, s.negatives.direct_demand, reset);
    println!("{}│   begging:        {}{}", color, s.negatives.begging, reset);
    println!("{}│   threat:         {}{}", color, s.negatives.threat, reset);
    println!("{}│   override:       {}{}", color, s.negatives.override_language, reset);
    println!("{}│   integers:       {:?} (sequential: {}){}", color, s.mentioned_integers, s.is_sequential, reset);
    println!("{}├─────────────────────────────────────────┤{}", color, reset);
    println!(
        "{}│ Band: {} | Revealed: {}/{}{}",
        color, output.band, output.revealed_count, output.secret_total, reset
    );
    println!("{}└─────────────────────────────────────────┘{}", color, reset);
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!();
    print_header(args.no_color);

    if let Err(e) = run_server(&args.addr).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
