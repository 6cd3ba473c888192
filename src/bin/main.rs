use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use suggest_core::ingest::format::parse_csv;
use suggest_core::{MatchKind, SuggestEngine};

/// Starter vocabulary in the upload CSV format, a slice of a typical
/// English frequency list.
const SEED_CSV: &str = "\
word,frequency,commonality
the,100000,common
and,95000,common
for,90000,common
that,95000,common
with,85000,common
have,80000,common
this,75000,common
will,70000,common
your,65000,common
from,60000,common
they,55000,common
know,50000,common
want,45000,common
which,70000,common
their,65000,common
would,60000,common
there,55000,common
could,50000,common
other,45000,common
think,25000,common
where,23000,common
being,20000,common
every,18000,common
great,15000,common
might,13000,common
shall,10000,uncommon
algorithm,8000,uncommon
function,12000,common
variable,7000,uncommon
computer,15000,common
software,10000,common
internet,20000,common
website,18000,common
database,9000,uncommon
framework,6000,uncommon
library,8000,uncommon
interface,9000,uncommon
autocomplete,2000,rare
spellcheck,1500,rare
receive,8000,common
believe,12000,common
necessary,10000,common
separate,7000,common
definitely,6000,common
recommend,7000,common
";

fn main() {
    let mut engine = SuggestEngine::new();
    let seed = parse_csv(SEED_CSV).expect("seed vocabulary is well-formed");
    let report = engine.admit_batch(&seed);

    println!("{}", "Smart Suggest demo".bold());
    println!(
        "Seeded {} words ({} skipped). Type a prefix for suggestions.",
        report.admitted, report.rejected
    );
    println!("Commands: ':add word,freq[,commonality]', ':stats', 'exit'.");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        stdout().flush().expect("flush stdout");

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            ":stats" => {
                let stats = engine.stats();
                println!(
                    "{} words | {} common / {} uncommon / {} rare",
                    stats.total_words, stats.common_words, stats.uncommon_words, stats.rare_words
                );
                println!(
                    "avg frequency {} | avg length {}",
                    stats.avg_frequency, stats.avg_length
                );
            }
            s if s.starts_with(":add ") => match parse_csv(&s[5..]) {
                Ok(entries) => {
                    let report = engine.admit_batch(&entries);
                    println!("{} added, {} skipped", report.admitted, report.rejected);
                }
                Err(e) => println!("{} {}", "error:".red(), e),
            },
            query => print_suggestions(&mut engine, query),
        }
    }
}

fn print_suggestions(engine: &mut SuggestEngine, query: &str) {
    let suggestions = engine.lookup(query, 8);
    if suggestions.is_empty() {
        println!("{}", "no suggestions".dark_grey());
        return;
    }
    for suggestion in suggestions {
        let tag = match suggestion.match_kind {
            MatchKind::Autocomplete => "match".green(),
            MatchKind::Spellcheck => "spell".yellow(),
        };
        println!(
            "  [{}] {} (frequency {}, {:?})",
            tag,
            suggestion.word.clone().bold(),
            suggestion.frequency,
            suggestion.commonality
        );
    }
}
