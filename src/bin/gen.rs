use std::fs;
use std::path::PathBuf;

use clap::Parser;
use powerset::generators::{MaxBlowupGenerator, NthFromLastGenerator, RandomNfaGenerator};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum Family {
    Random,
    NthFromLast,
    MaxBlowup,
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::Random => write!(f, "random"),
            Family::NthFromLast => write!(f, "nth-from-last"),
            Family::MaxBlowup => write!(f, "max-blowup"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = Family::Random)]
    family: Family,

    #[arg(short, long)]
    output: String,

    #[arg(long, default_value_t = 2)]
    min: u32,

    #[arg(long, default_value_t = 16)]
    max: u32,

    #[arg(long, short)]
    seed: Option<usize>,

    #[arg(long, default_value_t = 0.3)]
    epsilon_density: f64,
}

fn main() {
    let args = Args::parse();

    assert!(args.min >= 1 && args.min <= args.max);

    fs::create_dir_all(&args.output).unwrap();

    for n in args.min..=args.max {
        let (nfa, filename) = match args.family {
            Family::Random => {
                let mut generator = RandomNfaGenerator::new(n as usize);
                generator.epsilon_density(args.epsilon_density);

                if let Some(seed) = args.seed {
                    generator.seed(seed.wrapping_add(n as usize));
                }

                (generator.generate(), format!("nfa_{}_states.txt", n))
            }
            Family::NthFromLast => (
                NthFromLastGenerator::new(n).generate(),
                format!("nfa_nth_from_last_n{}.txt", n),
            ),
            Family::MaxBlowup => (
                MaxBlowupGenerator::new(n).generate(),
                format!("automaton_n{}.txt", n),
            ),
        };

        let path = PathBuf::from(&args.output).join(filename);
        fs::write(&path, nfa.to_text()).unwrap();
        println!("Generated {}", path.display());
    }
}
