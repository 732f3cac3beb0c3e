//! actorrole CLI
//!
//! Usage:
//!   actorrole --text "your text here"         # Single snippet analysis
//!   actorrole --evidence session.json         # Composite from a JSON session ("-" for stdin)
//!   actorrole --interactive                   # Line-by-line session (WB: / ABE: / OSR: / PROBE ...:)
//!   actorrole --serve                         # HTTP API server
//!   actorrole --text "text" --json            # JSON output

use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use actorrole::core::{parse_evidence_line, read_evidence, run_server, ActorRoleDetector};
use actorrole::types::{
    ActorRoleComposite, AxisLabel, BonusOptions, Candidate, ContentAnalysis, DetectorConfig,
    InputError, SessionEvidence,
};
use actorrole::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "actorrole",
    version = VERSION,
    about = "Actor/Role diagnostic engine - infer driver and presentation style from session feedback",
    long_about = "actorrole scores feedback snippets against twelve Actor (driver) and twelve\n\
                  Role (presentation style) patterns and resolves a named composite.\n\n\
                  Modes:\n  \
                  --text         Analyze one snippet\n  \
                  --evidence     Composite from a JSON session file\n  \
                  --interactive  Build a session line by line\n  \
                  --serve        HTTP API server mode\n\n\
                  Interactive line prefixes:\n  \
                  WB: <text>      Fully confirmed feedback\n  \
                  ABE: <text>     Partially confirmed feedback\n  \
                  OSR: <text>     Rejected or unclear (carried, not scored)\n  \
                  PROBE <DRIVER|ROLE|INCONCLUSIVE> [area] [kind]: <clarification>"
)]
struct Args {
    /// Snippet to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// JSON session evidence file, or "-" for stdin
    #[arg(short, long)]
    evidence: Option<String>,

    /// Interactive session mode - read prefixed lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Detector settings JSON (tieEpsilon, unknownFloor, negationWindow, behaviorLookahead)
    #[arg(long)]
    config: Option<String>,

    /// Aspect note passed through to the composite (repeatable)
    #[arg(long = "aspect-note")]
    aspect_notes: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show candidate breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => fail(&e),
    };

    if args.serve {
        run_serve(&args, config).await;
    } else if let Some(ref path) = args.evidence {
        run_evidence(path, &args, config);
    } else if let Some(ref text) = args.text {
        run_single(text, &args, config);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args, config);
    }
}

fn load_config(args: &Args) -> Result<DetectorConfig, InputError> {
    match args.config {
        Some(ref path) => DetectorConfig::from_file(path),
        None => Ok(DetectorConfig::default()),
    }
}

fn fail(err: &InputError) -> ! {
    eprintln!("{} {}", "error:".red().bold(), err);
    std::process::exit(1);
}

fn bonus_from(args: &Args) -> Option<BonusOptions> {
    if args.aspect_notes.is_empty() {
        None
    } else {
        Some(BonusOptions {
            aspect_notes: args.aspect_notes.clone(),
            ..Default::default()
        })
    }
}

/// Analyze one snippet
fn run_single(text: &str, args: &Args, config: DetectorConfig) {
    let detector = ActorRoleDetector::with_config(config);
    let analysis = detector.analyze_content(text);

    if args.json {
        print_json(&analysis);
    } else {
        print_analysis(&analysis);
    }
}

/// Composite from a JSON session
fn run_evidence(path: &str, args: &Args, config: DetectorConfig) {
    let evidence = match read_evidence(path) {
        Ok(e) => e,
        Err(e) => fail(&e),
    };
    let detector = ActorRoleDetector::with_config(config);
    let composite = detector.generate_composite(&evidence, bonus_from(args).as_ref());
    print_composite(&composite, args);
}

/// Interactive session: the CLI owns the evidence, the detector recomputes per line
fn run_interactive(args: &Args, config: DetectorConfig) {
    let detector = ActorRoleDetector::with_config(config);
    let bonus = bonus_from(args);
    let mut evidence = SessionEvidence::new();

    print_header("Interactive Session");
    println!("Prefix each line with WB:, ABE:, OSR: or PROBE <DRIVER|ROLE|INCONCLUSIVE> [area] [kind]:");
    println!("Example: WB: I launch things fast and speak directly");
    println!("         PROBE DRIVER work: that push is what moves me");
    println!("Type 'reset' to start over, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(&evidence));
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Items: {}", evidence.sample_size());
            break;
        }
        if line.eq_ignore_ascii_case("reset") {
            evidence = SessionEvidence::new();
            println!("{}", "Session cleared.".dimmed());
            continue;
        }
        if line.is_empty() {
            continue;
        }

        match parse_evidence_line(line) {
            Ok(parsed) => parsed.apply(&mut evidence),
            Err(e) => {
                println!("{} {}", "⚠".yellow(), e.to_string().yellow());
                continue;
            }
        }

        let composite = detector.generate_composite(&evidence, bonus.as_ref());
        print_composite(&composite, args);
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args, config: DetectorConfig) {
    print_header("API Server");
    if let Err(e) = run_server(&args.addr, config).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&InputError::Json(e)),
    }
}

fn print_header(mode: &str) {
    let title = format!("actorrole v{} - {}", VERSION, mode);
    println!("{}", "========================================".bold());
    println!("  {}", title.bold());
    println!("{}", "========================================".bold());
    println!();
}

fn format_prompt(evidence: &SessionEvidence) -> String {
    format!(
        "[wb={} abe={} osr={} probes={}] > ",
        evidence.wb_patterns.len(),
        evidence.abe_patterns.len(),
        evidence.osr_patterns.len(),
        evidence.osr_probes.len()
    )
    .cyan()
    .to_string()
}

fn print_analysis(analysis: &ContentAnalysis) {
    println!(
        "actor={} ({:.3}) | role={} ({:.3})",
        analysis.actor.label().bold(),
        analysis.actor_score,
        analysis.role.label().bold(),
        analysis.role_score
    );
}

fn print_composite(composite: &ActorRoleComposite, args: &Args) {
    if args.json {
        print_json(composite);
        return;
    }

    if args.no_color {
        println!("{}", composite.to_parseable_string());
    } else {
        println!("{}", composite.to_terminal_string());
    }

    if let Some(drift) = composite.drift.as_ref() {
        if drift.state_dependent {
            println!("{}", format!("  └─ {}", drift.reason).dimmed());
        }
    }

    if args.verbose {
        print_breakdown("Actor", &composite.actor_breakdown);
        print_breakdown("Role", &composite.role_breakdown);
        if let Some(source) = composite.tie_break {
            println!("  tie-break: {}", source);
        }
        if !composite.actor_signs.is_empty() || !composite.role_signs.is_empty() {
            println!(
                "  signs: {} / {}",
                composite.actor_signs.join(", "),
                composite.role_signs.join(", ")
            );
        }
        for note in &composite.notes {
            println!("  note: {}", note);
        }
        println!("  digest: {}", composite.digest().dimmed());
    }
}

fn print_breakdown<L: AxisLabel>(axis: &str, candidates: &[Candidate<L>]) {
    println!("┌─ {} candidates", axis);
    if candidates.is_empty() {
        println!("│   (none)");
    }
    for c in candidates {
        println!(
            "│   {:<28} {:.4}  wb={:.4} abe={:.4} osr={:.4}",
            c.key.label(),
            c.score,
            c.sources.wb,
            c.sources.abe,
            c.sources.osr
        );
    }
    println!("└─");
}
