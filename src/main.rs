//! Sensei CLI - Educational Code Feedback Engine
//!
//! Evaluates a beginner code snippet and prints structured feedback.

use clap::{Parser, ValueEnum};
use colored::Colorize;
use sensei::config::{ColorMode, Config, OutputFormat};
use sensei::evaluator::Evaluator;
use sensei::language::Language;
use sensei::output::{JsonFormatter, OutputFormatter, TextFormatter};
use sensei::rule::RuleInfo;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sensei",
    version,
    about = "Educational code feedback tool",
    long_about = "Evaluates beginner code snippets with pattern-based checks for \
                  JavaScript, Python, C, and Java, and prints friendly feedback."
)]
struct Cli {
    /// File containing the code snippet (reads stdin if omitted)
    file: Option<PathBuf>,

    /// Language hint (inferred from the file extension if omitted)
    #[arg(short, long)]
    language: Option<String>,

    /// Inline code snippet (overrides FILE and stdin)
    #[arg(short = 'e', long)]
    code: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Disable specific rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    disable: Option<Vec<String>>,

    /// List available rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Show detailed information about a specific rule
    #[arg(long)]
    explain: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Helper function to print a rule in a consistent format
fn print_rule(rule: &RuleInfo) {
    let severity = match rule.severity {
        sensei::Severity::Error => "error".red(),
        sensei::Severity::Warning => "warning".yellow(),
    };

    println!("    {} [{}] {}", rule.id.cyan(), severity, rule.name);
    if let Some(desc) = &rule.description {
        println!("      {}", desc);
    }
}

/// Print detailed rule explanation
fn explain_rule(rule: &RuleInfo) {
    println!("{}", "Rule Details".bold());
    println!();
    println!("  {}: {}", "ID".bold(), rule.id.cyan());
    println!("  {}: {}", "Name".bold(), rule.name);
    println!(
        "  {}: {}",
        "Severity".bold(),
        match rule.severity {
            sensei::Severity::Error => "error".red(),
            sensei::Severity::Warning => "warning".yellow(),
        }
    );

    if let Some(desc) = &rule.description {
        println!();
        println!("  {}", "Description".bold());
        println!("  {}", desc);
    }

    if let Some(bad) = &rule.example_bad {
        println!();
        println!("  {} {}", "Example".bold(), "(incorrect)".red());
        for line in bad.lines() {
            println!("    {}", line);
        }
    }

    if let Some(good) = &rule.example_good {
        println!();
        println!("  {} {}", "Example".bold(), "(correct)".green());
        for line in good.lines() {
            println!("    {}", line);
        }
    }
}

/// Handle the --explain flag
fn handle_explain(rule_id: &str, evaluator: &Evaluator) {
    match evaluator.find_rule(rule_id) {
        Some(rule) => explain_rule(rule),
        None => {
            eprintln!("{}: Rule '{}' not found", "error".red().bold(), rule_id);
            eprintln!();
            eprintln!("Use {} to see all available rules", "--list-rules".cyan());
            std::process::exit(1);
        }
    }
}

/// Handle the --list-rules flag
fn handle_list_rules(evaluator: &Evaluator) {
    println!("{}", "Available rules:".bold());
    println!();

    for language in [Language::Javascript, Language::Python, Language::C, Language::Java] {
        if let Some(checker) = evaluator.checker(language) {
            println!(
                "  {} ({} rules):",
                format!("{} Checker", language).cyan(),
                checker.rules().len()
            );
            for rule in checker.rules() {
                print_rule(rule);
            }
            println!();
        }
    }
}

/// Read the snippet from --code, a file, or stdin
fn read_source(cli: &Cli) -> std::io::Result<String> {
    if let Some(code) = &cli.code {
        return Ok(code.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path);
    }
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

/// Resolve the language hint from CLI args and the file extension
fn resolve_hint(cli: &Cli) -> String {
    if let Some(language) = &cli.language {
        return language.clone();
    }
    if let Some(path) = &cli.file {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            return format!("{}", Language::from_extension(ext));
        }
    }
    String::new()
}

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        Config::load(config_path).unwrap_or_else(|e| {
            eprintln!("{}: Failed to load config: {}", "error".red().bold(), e);
            std::process::exit(2);
        })
    } else {
        Config::load_default().unwrap_or_default()
    };

    // Merge CLI arguments
    let format = match cli.format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
    };
    config.merge_cli(Some(format), Some(cli.verbose), cli.disable.clone());

    let evaluator = Evaluator::with_default_checkers(config.clone());

    // Handle --explain
    if let Some(rule_id) = &cli.explain {
        handle_explain(rule_id, &evaluator);
        return;
    }

    // Handle --list-rules
    if cli.list_rules {
        handle_list_rules(&evaluator);
        return;
    }

    // Read the snippet
    let source = match read_source(&cli) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: Failed to read input: {}", "error".red().bold(), e);
            std::process::exit(2);
        }
    };

    let hint = resolve_hint(&cli);

    if cli.verbose {
        eprintln!(
            "Evaluating {} bytes ({} hint: '{}')",
            source.len(),
            "language".cyan(),
            hint
        );
    }

    let evaluation = evaluator.evaluate(&source, &hint);

    // Create formatter and print
    let formatter: Box<dyn OutputFormatter> = match config.output.format {
        OutputFormat::Text => {
            let mut f = TextFormatter::new();
            if cli.no_color || config.output.color == ColorMode::Never {
                f = f.without_color();
            }
            Box::new(f)
        }
        OutputFormat::Json => Box::new(JsonFormatter::new().pretty()),
    };

    print!("{}", formatter.format(&evaluation));

    std::process::exit(evaluation.exit_code());
}
