use std::fs;
use std::path::PathBuf;

use clap::Parser;
use powerset::{automaton::Nfa, stats::ConstructionRecord};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "DIR")]
    input: String,

    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Debug, Serialize)]
struct BenchEntry {
    filename: String,
    #[serde(flatten)]
    record: ConstructionRecord,
}

/// First run of digits embedded in the filename, used to process the files in
/// increasing NFA-size order (`nfa_12_states.txt` sorts after `nfa_9_states.txt`).
fn embedded_number(name: &str) -> Option<usize> {
    let digits = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>();

    digits.parse().ok()
}

fn main() {
    let args = Args::parse();

    let mut files = fs::read_dir(&args.input)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect::<Vec<PathBuf>>();

    files.sort_by_key(|path| {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        (embedded_number(&name).unwrap_or(usize::MAX), name)
    });

    let mut entries = Vec::new();

    for path in &files {
        let nfa = Nfa::builder()
            .text_automaton(path)
            .unwrap()
            .build()
            .unwrap();

        let (_, record) = ConstructionRecord::measure(&nfa);
        let filename = path.file_name().unwrap().to_string_lossy().into_owned();

        eprintln!(
            "{} -> DFA States: {}, Transitions: {}, Time: {:.6}s",
            filename, record.dfa_states, record.dfa_transitions, record.construction_time_sec
        );

        entries.push(BenchEntry { filename, record });
    }

    let json = serde_json::to_string_pretty(&entries).unwrap();

    match &args.output {
        Some(output) => fs::write(output, json).unwrap(),
        None => println!("{}", json),
    }
}
