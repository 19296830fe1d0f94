//! tokd: learn text patterns from a corpus and match them.

use tokdc::commands::{
    describe_pattern, list_patterns, parse_parse_options, parse_text, parse_train_options,
    train_corpus,
};

fn main() {
    tokdc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "train" => {
            if args.len() < 3 || args[2].starts_with('-') {
                eprintln!("Usage: tokd train <corpus.txt> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --iterations=<n>    Survey/propose rounds (default: 1)");
                eprintln!("  --strategy=<list>   pairs, stretches, holes or all (default: pairs,holes)");
                eprintln!("  --keep=<n>          Experiments kept after each cull (default: 30)");
                eprintln!("  --threshold=<n>     Pair count to exceed before proposing (default: 3)");
                eprintln!("  --min-kind=<kind>   Lowest kind combined into proposals (default: Basics)");
                eprintln!("  --no-cull           Keep every experiment");
                eprintln!("  --report=<n>        Survey rows to print (default: 20)");
                eprintln!("  --save=<path>       Write the learned pattern table");
                std::process::exit(1);
            }
            let options = parse_train_options(&args[3..]);
            train_corpus(&args[2], &options);
        }
        "parse" => {
            let positional: Vec<&String> = args.iter().skip(2).filter(|a| !a.starts_with("--")).collect();
            let [table, text] = positional.as_slice() else {
                eprintln!("Usage: tokd parse <table> <text> [--json] [--min-kind=<kind>]");
                std::process::exit(1);
            };
            let options = parse_parse_options(&args[2..]);
            parse_text(table, text, &options);
        }
        "describe" => {
            if args.len() < 4 {
                eprintln!("Usage: tokd describe <table> <pattern>");
                eprintln!("Example: tokd describe patterns.txt \"<Letter! Letter+\"");
                std::process::exit(1);
            }
            describe_pattern(&args[2], &args[3]);
        }
        "patterns" => {
            if args.len() < 3 {
                eprintln!("Usage: tokd patterns <table>");
                std::process::exit(1);
            }
            list_patterns(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("tokd {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tokd - unsupervised pattern discovery");
    println!();
    println!("Usage: tokd <command> [options]");
    println!();
    println!("Commands:");
    println!("  train <corpus>            Learn patterns from a text corpus");
    println!("  parse <table> <text>      Match a table's patterns against text");
    println!("  describe <table> <pat>    Compile a pattern and show its descriptions");
    println!("  patterns <table>          List the patterns in a table");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Train options:");
    println!("  --iterations=<n>    Survey/propose rounds (default: 1)");
    println!("  --strategy=<list>   pairs, stretches, holes or all (default: pairs,holes)");
    println!("  --keep=<n>          Experiments kept after each cull (default: 30)");
    println!("  --threshold=<n>     Pair count to exceed before proposing (default: 3)");
    println!("  --min-kind=<kind>   Lowest kind combined into proposals (default: Basics)");
    println!("  --no-cull           Keep every experiment");
    println!("  --report=<n>        Survey rows to print (default: 20)");
    println!("  --save=<path>       Write the learned pattern table");
    println!();
    println!("Parse options:");
    println!("  --json              Print match trees as JSON");
    println!("  --min-kind=<kind>   Lowest kind listed (default: Derived)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tokd_train=debug) to trace training.");
    println!();
    println!("Examples:");
    println!("  tokd train corpus.txt --iterations=3 --save=patterns.txt");
    println!("  tokd parse patterns.txt \"the cat sat\" --json");
    println!("  tokd describe patterns.txt \"<Letter! Letter+\"");
}
