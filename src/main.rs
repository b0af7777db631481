//! Wordle Optimal CLI
//!
//! Builds feedback tables, prices opening guesses against them and coaches a
//! live game.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use wordle_optimal::{
    entropy, Evaluator, FeedbackTable, GuessPolicy, Rules, Session, Solver, SolverOptions, StrategyTree, Vocabulary,
};

const PLAY_USAGE: &str = "Commands:
  <guess> <feedback>   record a guess and its feedback (gybbb, 21000 or a code 0-242)
  suggest | s          compute the best next guess
  remaining | r        list the words still possible
  reset                start a new game
  quit | q             leave";

#[derive(Debug, Parser)]
#[command(name = "wordle-optimal", version, about = "Exact minimum-guess Wordle strategies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Precompute the feedback table from two word lists and save it
    Build {
        /// Possible answers, one per line
        #[arg(long)]
        solutions: PathBuf,
        /// Extra words accepted as guesses, one per line
        #[arg(long)]
        allowed: PathBuf,
        #[arg(long, short)]
        out: PathBuf,
        /// Assign yellows without allocating repeated letters
        #[arg(long)]
        legacy_feedback: bool,
    },
    /// List the most informative opening guesses
    Rank {
        #[arg(long)]
        table: PathBuf,
        #[arg(long, default_value = "10")]
        top: usize,
    },
    /// Average guesses per solution for fixed opening words
    Eval {
        #[command(flatten)]
        search: SearchArgs,
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Find the best opening guess, most informative candidates first
    Sweep {
        #[command(flatten)]
        search: SearchArgs,
        /// Only try this many openers
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the full decision tree for an opening word
    Tree {
        #[command(flatten)]
        search: SearchArgs,
        word: String,
    },
    /// Play a live game: enter guesses with their feedback, ask for the next
    Play {
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long)]
    table: PathBuf,
    /// Allow any word as a follow-up guess, not only words consistent with the
    /// feedback so far
    #[arg(long)]
    unrestricted: bool,
}

impl SearchArgs {
    fn options(&self) -> SolverOptions {
        SolverOptions {
            policy: if self.unrestricted {
                GuessPolicy::Unrestricted
            } else {
                GuessPolicy::Consistent
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            solutions,
            allowed,
            out,
            legacy_feedback,
        } => {
            let vocabulary = Vocabulary::load(&solutions, &allowed)?;
            let rules = if legacy_feedback { Rules::Legacy } else { Rules::Standard };
            let table = FeedbackTable::build(&vocabulary, rules)?;
            table.save(&out)?;
            println!(
                "Saved {} words ({} solutions) to {}",
                table.len(),
                table.solution_count(),
                out.display()
            );
        }
        Command::Rank { table, top } => {
            let table = FeedbackTable::load(&table)?;
            let solutions = table.solutions();
            println!("{:>4} {:>8} {:>10} Answer?", "#", "Word", "Entropy");
            println!("{}", "-".repeat(32));
            for (i, &id) in table.guess_order().iter().take(top).enumerate() {
                println!(
                    "{:>4} {:>8} {:>10.4} {}",
                    i + 1,
                    table.word(id).to_string().to_uppercase(),
                    entropy::entropy(&table, id, &solutions),
                    if table.is_solution(id) { "✓" } else { "" }
                );
            }
        }
        Command::Eval { search, words } => {
            let table = FeedbackTable::load(&search.table)?;
            let evaluator = Evaluator::new(Solver::with_options(&table, search.options()));
            for word in &words {
                let start = Instant::now();
                let average = evaluator.eval(word)?;
                println!(
                    "{}: {:.4} guesses per solution ({:.2?})",
                    word.to_uppercase(),
                    average,
                    start.elapsed()
                );
            }
        }
        Command::Sweep { search, limit } => {
            let table = FeedbackTable::load(&search.table)?;
            let evaluator = Evaluator::new(Solver::with_options(&table, search.options()));
            let openers = &table.guess_order()[..limit.unwrap_or(table.len()).min(table.len())];

            if openers.is_empty() {
                println!("No openers to evaluate.");
                return Ok(());
            }

            let start = Instant::now();
            let sweep = evaluator.sweep(openers);
            match sweep.best {
                Some((opener, cost)) => println!(
                    "Best opener: {} with {} total guesses ({:.4} average) after {} openers in {:.2?}",
                    table.word(opener).to_string().to_uppercase(),
                    cost,
                    cost as f64 / table.solution_count() as f64,
                    sweep.evaluated,
                    start.elapsed()
                ),
                None => println!(
                    "None of the {} openers tried solves every word within six guesses.",
                    sweep.evaluated
                ),
            }
        }
        Command::Tree { search, word } => {
            let table = FeedbackTable::load(&search.table)?;
            let solver = Solver::with_options(&table, search.options());
            let tree = StrategyTree::build(&solver, table.lookup(&word)?)?;

            print!("{}", tree.render(&table));
            println!();
            for (guesses, count) in tree.distribution(&table) {
                println!("  {} guesses: {:>5}", guesses, count);
            }
            if let Some(total) = tree.total_cost(&table) {
                println!(
                    "Average guesses: {:.4}",
                    total as f64 / table.solution_count() as f64
                );
            }
        }
        Command::Play { search } => {
            let table = FeedbackTable::load(&search.table)?;
            play(&table, Session::new(Solver::with_options(&table, search.options())))?;
        }
    }

    Ok(())
}

fn play(table: &FeedbackTable, mut session: Session<'_>) -> io::Result<()> {
    println!("{} possible answers. Type 'help' for commands.", session.candidates().len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => continue,
            ["help" | "h" | "?"] => println!("{PLAY_USAGE}"),
            ["quit" | "exit" | "q"] => break,
            ["reset"] => {
                session.reset();
                println!("New game: {} possible answers.", session.candidates().len());
            }
            ["remaining" | "r"] => {
                let remaining = session.candidates();
                println!("Remaining possibilities: {}", remaining.len());
                for (i, &id) in remaining.iter().take(50).enumerate() {
                    if i > 0 && i % 10 == 0 {
                        println!();
                    }
                    print!("{:>8}", table.word(id).to_string().to_uppercase());
                }
                println!();
            }
            ["suggest" | "s"] => {
                let start = Instant::now();
                let outcome = session.suggest();
                match outcome.guess {
                    Some(guess) if outcome.is_feasible() => println!(
                        "Guess {} ({} more guesses over {} words, {:.2?})",
                        table.word(guess).to_string().to_uppercase(),
                        outcome.cost,
                        session.candidates().len(),
                        start.elapsed()
                    ),
                    _ if session.candidates().is_empty() => {
                        println!("No words match this feedback. Use 'reset' to start over.")
                    }
                    _ => println!("The remaining words cannot all be found within six guesses."),
                }
            }
            [word, feedback] => {
                let before = session.candidates().len();
                match session.play(word, feedback) {
                    Ok(code) => {
                        println!(
                            "{} {}: {} -> {} possible",
                            word.to_uppercase(),
                            code,
                            before,
                            session.candidates().len()
                        );
                        if session.is_solved() {
                            println!("Solved in {} guesses.", session.turn());
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            _ => println!("{PLAY_USAGE}"),
        }
    }

    Ok(())
}
