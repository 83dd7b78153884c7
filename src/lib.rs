//! Interactive shell around the [routing] crate: loads a city graph from
//! one of two file formats, then loops a menu of search strategies.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use lazy_static::lazy_static;
use thiserror::Error;

use routing::{CityGraph, GreatCircle, Hops, LoadError, Metric, SearchOutcome, Strategy};

type Error = anyhow::Error;

lazy_static! {
    static ref MENU: Vec<(u32, Strategy)> = Strategy::all()
        .iter()
        .enumerate()
        .map(|(index, strategy)| (index as u32 + 1, *strategy))
        .collect();
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("input file not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("{0} is not a menu option")]
    BadSelection(u32),

    #[error("unexpected end of input")]
    InputClosed,
}

pub fn run() -> Result<(), Error> {
    let matches = App::new("cityroute")
        .version("1.0")
        .about("Find routes between cities with six search strategies")
        .arg(
            Arg::with_name("adjacency")
                .long("adjacency")
                .value_name("FILE")
                .help("Adjacency file: two city names per line, both directions implied")
                .takes_value(true)
                .default_value("Adjacencies.txt"),
        )
        .arg(
            Arg::with_name("coordinates")
                .long("coordinates")
                .value_name("FILE")
                .help("Coordinate file: name, latitude, longitude per line")
                .takes_value(true)
                .default_value("coordinates.csv"),
        )
        .arg(
            Arg::with_name("trace")
                .long("trace")
                .help("Print the visit order after each search"),
        )
        .get_matches();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    driver(&mut input, &matches)
}

fn driver<R: BufRead>(input: &mut R, matches: &ArgMatches) -> Result<(), Error> {
    let trace = matches.is_present("trace");

    println!("Please select a data source:");
    println!("1. adjacency file");
    println!("2. coordinate file");
    let selection = read_number(input, "Enter: ")?;

    match selection {
        1 => {
            let path = matches.value_of("adjacency").unwrap_or("Adjacencies.txt");
            let graph = load(path, CityGraph::from_adjacency)?;
            session(input, &graph, &Hops, trace)
        }
        2 => {
            let path = matches.value_of("coordinates").unwrap_or("coordinates.csv");
            let graph = load(path, CityGraph::from_coordinates)?;
            session(input, &graph, &GreatCircle, trace)
        }
        other => Err(ShellError::BadSelection(other).into()),
    }
}

fn load<F>(path: &str, build: F) -> Result<CityGraph, Error>
where
    F: FnOnce(File) -> Result<CityGraph, LoadError>,
{
    let file = File::open(path).map_err(|e| ShellError::InputNotFound(path.to_string(), e))?;
    let graph = build(file).with_context(|| format!("failed to load {}", path))?;
    println!("Loaded {} cities from {}", graph.len(), path);
    Ok(graph)
}

fn session<R, M>(input: &mut R, graph: &CityGraph, metric: &M, trace: bool) -> Result<(), Error>
where
    R: BufRead,
    M: Metric,
{
    loop {
        println!("Please select a search strategy:");
        for (number, strategy) in MENU.iter() {
            println!("{}. {}", number, strategy.label());
        }
        let choice = read_number(input, "Enter: ")?;
        let strategy = Strategy::from_choice(choice).ok_or(ShellError::BadSelection(choice))?;

        let start = prompt(input, "Enter the starting city: ")?;
        let end = prompt(input, "Enter the ending city: ")?;

        let clock = Instant::now();
        match strategy.run(graph, metric, &start, &end) {
            Ok(outcome) => report(&start, &end, &outcome, clock.elapsed(), trace),
            Err(e) => eprintln!("{}", e),
        }

        let answer = prompt(input, "Continue? (Y = continue, N = exit): ")?;
        if answer.eq_ignore_ascii_case("n") {
            return Ok(());
        }
    }
}

fn report(start: &str, end: &str, outcome: &SearchOutcome, elapsed: Duration, trace: bool) {
    if outcome.found {
        println!("Path from {} to {}: {}", start, end, outcome.path.join(" -> "));
        println!("Cost: {:.2}", outcome.total_cost);
    } else {
        println!("No path found from {} to {}", start, end);
    }
    println!("Time: {:?}", elapsed);
    if trace {
        println!("Visited: {}", outcome.visited.join(", "));
    }
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String, Error> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ShellError::InputClosed.into());
    }
    Ok(line.trim().to_string())
}

fn read_number<R: BufRead>(input: &mut R, message: &str) -> Result<u32, Error> {
    let line = prompt(input, message)?;
    line.parse()
        .with_context(|| format!("expected a number, got {:?}", line))
}
