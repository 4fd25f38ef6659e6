use clap::Parser;
use powerset::{automaton::Nfa, stats::ConstructionRecord};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "AUTOMATON")]
    automaton: String,

    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() {
    let args = Args::parse();

    let nfa = Nfa::builder()
        .text_automaton(&args.automaton)
        .unwrap()
        .build()
        .unwrap();

    let (dfa, record) = ConstructionRecord::measure(&nfa);

    print!("{}", dfa);

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&record).unwrap());
    }
}
