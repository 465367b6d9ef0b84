use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;
use utree::prelude::*;

/// Walks a decision-tree bundle in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the tree bundle directory
    tree_path: Option<PathBuf>,

    /// Optional JSON file with engine settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language to start in
    #[arg(short, long)]
    language: Option<String>,

    /// Fail instead of falling back to an empty tree when the bundle cannot be read
    #[arg(long)]
    strict: bool,

    /// Print engine debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let tree_path = cli
        .tree_path
        .clone()
        .unwrap_or_else(|| match prompt_for_input("Enter tree bundle path", Some(".")) {
            Some(path) => PathBuf::from(path),
            None => exit_with_error("No tree bundle path given."),
        });

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load config '{}': {}", path.display(), e))
        }),
        None => EngineConfig::default(),
    };
    if let Some(language) = cli.language {
        config = config.with_language(language);
    }

    let engine = if cli.strict {
        TreeEngine::try_load(&tree_path, config).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to load tree '{}': {}",
                tree_path.display(),
                e
            ))
        })
    } else {
        TreeEngine::load_with_config(&tree_path, config)
    };

    run_session(engine);
}

fn run_session(mut engine: TreeEngine) {
    println!("--- {} ---", engine.title());
    println!(
        "Language: {} ({}), available: {}",
        engine.current_language(),
        engine.current_language_code(),
        engine.available_languages().join(", ")
    );
    print_help();

    loop {
        print_node(&engine);
        if engine.is_current_end_state() && !engine.is_previous_node_available() {
            break;
        }

        let Some(input) = prompt_for_input("Command", None) else {
            break;
        };
        let (command, argument) = match input.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (input.as_str(), ""),
        };

        match command {
            "n" | "next" => match engine.advance() {
                Advance::Moved => {}
                Advance::Blocked(BlockReason::SelectionRequired) => {
                    println!("Please make a selection first.")
                }
                Advance::Blocked(BlockReason::NoTransition) => {
                    if engine.is_current_end_state() {
                        break;
                    }
                    println!("There is no next node for this answer.")
                }
            },
            "b" | "back" => {
                if let Retreat::AtStart = engine.retreat() {
                    println!("Already at the start.");
                }
            }
            "s" | "select" => match argument.parse::<usize>() {
                Ok(choice) if choice > 0 => {
                    let node = engine.current_node_mut();
                    let changed = if matches!(node, Node::Checklist(_)) {
                        node.toggle(choice - 1)
                    } else {
                        node.select(choice - 1)
                    };
                    if !changed {
                        println!("No option {} here.", choice);
                    }
                }
                _ => println!("Usage: s <option number>"),
            },
            "t" | "type" => {
                if !engine.current_node_mut().set_text_input(argument) {
                    println!("This node takes no text input.");
                }
            }
            "l" | "lang" => {
                if !engine.set_language(argument) {
                    println!("Language '{}' is not available.", argument);
                }
            }
            "h" | "hint" => match engine.hints().hint_for(argument) {
                Some(hint) => println!("{}: {}", argument, hint),
                None => println!("No hint for '{}'.", argument),
            },
            "?" | "help" => print_help(),
            "q" | "quit" => break,
            _ => println!("Unknown command. Type ? for help."),
        }
    }

    print_answers(&engine);
}

fn print_node(engine: &TreeEngine) {
    let node = engine.current_node();
    println!();
    if let Some(image) = node.image() {
        println!("[image: {}]", image.display());
    }
    if let Some(text) = node.text() {
        println!("{}", text);
    }
    if let Some(unit) = node.unit() {
        println!("(unit: {})", unit);
    }

    let selected = node.selected_indices();
    for (i, option) in node.options().iter().enumerate() {
        let mark = if selected.contains(&i) { "x" } else { " " };
        println!("  [{}] {}: {}", mark, i + 1, option);
    }
    if let Some(input) = node.text_input() {
        println!("  > {}", input);
    }
    if let Some(audio) = engine.voice_over_audio().filter(|_| engine.config().voice_over) {
        println!("[voice-over: {}]", audio.display());
    }
}

fn print_help() {
    println!("Commands:");
    println!("  n            next node");
    println!("  b            previous node");
    println!("  s <number>   select (or tick) an option");
    println!("  t <text>     type an answer");
    println!("  l <language> switch language");
    println!("  h <word>     look up a hint");
    println!("  q            quit");
}

fn print_answers(engine: &TreeEngine) {
    if engine.answers().is_empty() {
        return;
    }
    println!("\n--- Answers ---");
    for state in engine.answers() {
        println!(
            "{} -> {} {:?} {}",
            state.node_name,
            state.transition_key,
            state.selected_indices,
            state.text_input.as_deref().unwrap_or_default()
        );
    }
}

/// A helper function to prompt the user and read a line of input.
///
/// Returns `None` once stdin is closed.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> Option<String> {
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout()
        .flush()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to flush stdout: {}", e)));

    read_input(&mut io::stdin().lock(), default)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read line: {}", e)))
}

/// Reads one trimmed line, substituting `default` for a blank one.
fn read_input(reader: &mut impl BufRead, default: Option<&str>) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();

    if trimmed.is_empty() {
        Ok(Some(default.unwrap_or("").to_string()))
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
