use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::process::ExitCode;
use std::sync::Arc;
use stemmer_core::pipeline::{czech_index_pipeline, czech_search_pipeline};
use stemmer_core::Stemmer;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (aff_path, dic_path) = match (args.next(), args.next()) {
        (Some(a), Some(d)) => (a, d),
        _ => {
            eprintln!("usage: stemmer_cli <affix-file> <dictionary-file>");
            return ExitCode::FAILURE;
        }
    };

    let aff = match std::fs::read_to_string(&aff_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[ERROR] Could not read '{}': {}", aff_path, e);
            return ExitCode::FAILURE;
        }
    };
    let dic = match std::fs::read_to_string(&dic_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[ERROR] Could not read '{}': {}", dic_path, e);
            return ExitCode::FAILURE;
        }
    };

    let stemmer = match Stemmer::from_raw(&aff, &dic) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("[ERROR] Could not load stemming data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Czech Smart Stemmer ({} rules, {} dictionary entries). Type 'exit' to quit.",
        stemmer.rules().len(),
        stemmer.dictionary().len()
    );
    println!("---------------------------------------------------------------");
    println!("Enter words (whole lines are fine); each token is trimmed,");
    println!("stop-word filtered and stemmed as it would be at index time.\n");

    let index_pipeline = czech_index_pipeline(stemmer.clone());
    let search_pipeline = czech_search_pipeline(stemmer.clone());

    loop {
        print!("> ");
        if stdout().flush().is_err() {
            break;
        }
        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                break;
            }
        }
        let line = input.trim();
        if line == "exit" {
            break;
        }

        for token in line.split_whitespace() {
            match index_pipeline.run(token) {
                Some(stem) if stem != token => {
                    println!("  {} => {}", token, stem.green());
                }
                Some(stem) => {
                    println!("  {} => {} {}", token, stem, "(unchanged)".dark_grey());
                }
                None => {
                    // Dropped at index time; show the query-side stem so the
                    // index/search symmetry stays visible.
                    let query_stem = search_pipeline.run(token).unwrap_or_default();
                    println!(
                        "  {} => {} query-side stem: {}",
                        token,
                        "(dropped)".dark_grey(),
                        query_stem.yellow()
                    );
                }
            }
        }
    }

    ExitCode::SUCCESS
}
