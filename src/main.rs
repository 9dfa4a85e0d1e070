use crate::error::Error;
use crate::flight::{FlightRecord, FlightStatus};
use crate::generator::SampleGenerator;
use crate::logging::{Verbosity, init_logging};
use crate::store::{FlightStore, LoadReport};
use crate::time::{parse_date, parse_timestamp};
use crate::validation::Rejection;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

mod airport;
mod error;
mod flight;
mod generator;
mod logging;
mod render;
mod stats;
mod store;
mod time;
mod validation;

const PAGE_ROWS: usize = 20;

#[derive(Parser)]
struct Args {
    /// JSON file of flights to import at startup
    #[arg(short, long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Number of sample flights to generate at startup
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    sample: usize,

    /// Seed for the sample generator
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

type Shell = Editor<CompleteHelper, DefaultHistory>;

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(pager) => pager,
        Err(_) => {
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn show(flights: Vec<&FlightRecord>) {
    if flights.is_empty() {
        println!("No matching flights found.");
        return;
    }
    let count = flights.len();
    let table = render::flight_table(flights);
    if count > PAGE_ROWS {
        paginate(table);
    } else {
        println!("{}", table);
    }
}

fn print_rejection(flight_number: &str, rejection: &Rejection) {
    println!("{} {}", "Rejected".red(), flight_number);
    for violation in rejection.violations() {
        println!("  - {}", violation);
    }
}

fn print_report(report: &LoadReport) {
    println!("{} flights accepted.", report.accepted.to_string().green());
    for (flight_number, rejection) in &report.rejected {
        print_rejection(flight_number, rejection);
    }
}

fn ask(rl: &mut Shell, label: &str) -> Result<String, Error> {
    Ok(rl.readline(&format!("  {:<28}", format!("{}:", label)))?)
}

/// Prompts for each field of a new flight. Any unparsable answer aborts the entry.
fn read_flight(rl: &mut Shell) -> Result<FlightRecord, Error> {
    let flight_number = ask(rl, "Flight number")?.trim().to_string();
    let airline = ask(rl, "Airline")?.trim().to_string();
    let origin = airport::normalize(&ask(rl, "Origin")?);
    let destination = airport::normalize(&ask(rl, "Destination")?);
    let scheduled_departure = parse_timestamp(&ask(rl, "Sched. departure (MM/dd/yyyy HH:mm)")?)?;
    let scheduled_arrival = parse_timestamp(&ask(rl, "Sched. arrival (MM/dd/yyyy HH:mm)")?)?;
    let actual_departure = parse_timestamp(&ask(rl, "Actual departure (MM/dd/yyyy HH:mm)")?)?;
    let actual_arrival = parse_timestamp(&ask(rl, "Actual arrival (MM/dd/yyyy HH:mm)")?)?;
    let status = ask(rl, "Status")?.parse::<FlightStatus>()?;
    let passengers = ask(rl, "Passenger count")?;
    let passenger_count = passengers
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::invalid_number("passenger count", passengers.trim()))?;
    let aircraft_type = ask(rl, "Aircraft type")?.trim().to_string();

    Ok(FlightRecord {
        flight_number,
        airline,
        origin,
        destination,
        scheduled_departure,
        scheduled_arrival,
        actual_departure,
        actual_arrival,
        status,
        passenger_count,
        aircraft_type,
    })
}

fn generate(store: &mut FlightStore, rng: &mut StdRng, count: usize) {
    let flights = SampleGenerator::default().generate(count, rng);
    print_report(&store.add_all(flights));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(Verbosity::from_flags(args.quiet, args.verbose));

    let mut store = FlightStore::new();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(path) = &args.load {
        println!("Loading flights from {}", path.display());
        print_report(&store.load_from_file(path)?);
    }
    if args.sample > 0 {
        generate(&mut store, &mut rng, args.sample);
    }
    println!("Flight desk ready. {} flights on file. Type 'help' for commands.", store.len());
    if store.is_empty() {
        println!("Use 'gen' for sample flights or 'add' to enter one.");
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: [
            "ls", "add", "airline", "dest", "delayed", "date", "stats", "gen", "help", "exit",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect(),
    };

    let mut rl: Shell = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let (cmd, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
                let rest = rest.trim();
                match cmd {
                    "ls" => show(store.all().iter().collect()),
                    "add" => match read_flight(&mut rl) {
                        Ok(record) => {
                            let flight_number = record.flight_number.clone();
                            match store.add(record) {
                                Ok(()) => println!("{} {}", "Accepted".green(), flight_number),
                                Err(rejection) => print_rejection(&flight_number, &rejection),
                            }
                        }
                        Err(Error::Readline(ReadlineError::Interrupted | ReadlineError::Eof)) => {
                            println!("Entry cancelled.")
                        }
                        Err(e) if e.is_input_error() => println!("{} {}", "Input error:".red(), e),
                        Err(e) => return Err(e.into()),
                    },
                    "airline" => show(store.by_airline(rest)),
                    "dest" => show(store.by_destination(rest)),
                    "delayed" => show(store.delayed()),
                    "date" => match parse_date(rest) {
                        Ok(date) => show(store.on_date(date)),
                        Err(e) => println!("{} {}", "Input error:".red(), e),
                    },
                    "stats" => match stats::statistics(&store.all()) {
                        Some(stats) => println!("{}", render::statistics_report(&stats)),
                        None => println!("No flight data available."),
                    },
                    "gen" => {
                        let count = if rest.is_empty() { Ok(10) } else { rest.parse::<usize>() };
                        match count {
                            Ok(count) => generate(&mut store, &mut rng, count),
                            Err(_) => println!("Usage: gen [count]"),
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - List all flights");
                        println!("  add                 - Enter a new flight field by field");
                        println!("  airline <text>      - Flights whose airline contains <text>");
                        println!("  dest <text>         - Flights whose destination has <text>");
                        println!("  delayed             - Flights more than 15 minutes late");
                        println!("  date <MM/dd/yyyy>   - Flights scheduled to depart on a date");
                        println!("  stats               - Show flight statistics");
                        println!("  gen [n]             - Generate n sample flights (default 10)");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit the desk\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", cmd),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
