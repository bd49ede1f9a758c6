use crate::config::AppConfig;
use crate::data::snapshot::{load_snapshot, read_snapshot, PoolSnapshot};
use crate::data::validate::validate_snapshot;
use crate::data::SnapshotError;
use crate::logging;
use crate::optimizer::multiset::generate_valid_multisets;
use crate::optimizer::{optimize_snapshot, PoolOutcome};
use crate::parallel::{optimize_pools, WorkerPool};
use crate::server;

const USAGE: &str = "usage: fairway <serve|optimize|multisets|validate|batch>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Optimize,
    Multisets,
    Validate,
    Batch,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("optimize") => Some(Command::Optimize),
        Some("multisets") => Some(Command::Multisets),
        Some("validate") => Some(Command::Validate),
        Some("batch") => Some(Command::Batch),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return 1;
        }
    };
    logging::init(&config.log_filter);

    match command {
        Command::Serve => handle_serve(&config),
        Command::Optimize => handle_optimize(args, &config),
        Command::Multisets => handle_multisets(args, &config),
        Command::Validate => handle_validate(args),
        Command::Batch => handle_batch(args, &config),
    }
}

fn handle_serve(config: &AppConfig) -> i32 {
    match server::run_server(&config.bind_addr, config.min_points) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_optimize(args: &[String], config: &AppConfig) -> i32 {
    let positional = positional_args(args);
    let Some(path) = positional.first() else {
        eprintln!("usage: fairway optimize <snapshot.json|snapshot.csv> [min_points] [--table]");
        return 2;
    };
    let as_table = args.iter().any(|arg| arg == "--table");

    let mut snapshot = match load_or_report(path) {
        Ok(snapshot) => snapshot,
        Err(code) => return code,
    };
    if let Some(raw) = positional.get(1) {
        match raw.parse::<u32>() {
            Ok(min_points) => snapshot.min_points = Some(min_points),
            Err(_) => {
                eprintln!("invalid min_points '{raw}'");
                return 2;
            }
        }
    }

    let outcome = optimize_snapshot(&snapshot, config.min_points);
    if as_table {
        print!("{}", outcome_table(&outcome));
        0
    } else {
        print_json(&outcome, "optimization result")
    }
}

fn handle_multisets(args: &[String], config: &AppConfig) -> i32 {
    let positional = positional_args(args);
    let min_points = match positional.first() {
        None => config.min_points,
        Some(raw) => match raw.parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("invalid min_points '{raw}'");
                return 2;
            }
        },
    };

    let multisets = generate_valid_multisets(min_points);
    if args.iter().any(|arg| arg == "--count") {
        println!("{}", multisets.len());
        return 0;
    }
    for multiset in &multisets {
        let tiers: Vec<String> = multiset.tiers().iter().map(u8::to_string).collect();
        println!("{}\t{}", tiers.join(" "), multiset.points());
    }
    0
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(path) = positional_args(args).first().copied() else {
        eprintln!("usage: fairway validate <snapshot.json|snapshot.csv>");
        return 2;
    };

    // Parse without the load-time validation gate so every diagnostic is shown.
    let snapshot = match read_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    let report = validate_snapshot(&snapshot);
    for diagnostic in &report.diagnostics {
        println!("{diagnostic}");
    }
    if report.has_errors() {
        eprintln!("validation failed: {} error(s)", report.errors().count());
        1
    } else {
        println!("validation passed: {path}");
        0
    }
}

fn handle_batch(args: &[String], config: &AppConfig) -> i32 {
    let mut workers = config.workers;
    let mut paths = Vec::new();
    let mut iter = args.iter().skip(2);
    while let Some(arg) = iter.next() {
        if arg == "--workers" {
            match iter.next().and_then(|raw| raw.parse::<usize>().ok()) {
                Some(value) => workers = value,
                None => {
                    eprintln!("--workers expects a thread count");
                    return 2;
                }
            }
        } else {
            paths.push(arg.as_str());
        }
    }
    if paths.is_empty() {
        eprintln!("usage: fairway batch <snapshot>... [--workers N]");
        return 2;
    }

    let mut snapshots = Vec::with_capacity(paths.len());
    for path in paths {
        match load_or_report(path) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(code) => return code,
        }
    }

    let outcomes = optimize_pools(&snapshots, config.min_points, &WorkerPool::with_workers(workers));
    tracing::info!(
        pools = outcomes.len(),
        solved = outcomes.iter().filter(|o| o.result.is_some()).count(),
        "batch complete"
    );
    print_json(&outcomes, "batch result")
}

fn positional_args(args: &[String]) -> Vec<&str> {
    args.iter()
        .skip(2)
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect()
}

fn load_or_report(path: &str) -> Result<PoolSnapshot, i32> {
    load_snapshot(path).map_err(|err| {
        eprintln!("failed to load snapshot '{path}': {err}");
        if let SnapshotError::Invalid(errors) = &err {
            for diagnostic in errors {
                eprintln!("- {diagnostic}");
            }
        }
        1
    })
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize {what}: {err}");
            1
        }
    }
}

fn outcome_table(outcome: &PoolOutcome) -> String {
    let mut out = String::new();
    out.push_str("pool\tmin_points\ttotal_score\ttotal_points\talternatives\n");
    let Some(team) = &outcome.result else {
        out.push_str(&format!("{}\t{}\t-\t-\t-\n", outcome.pool_id, outcome.min_points));
        out.push_str("no valid team\n");
        return out;
    };
    out.push_str(&format!(
        "{}\t{}\t{}\t{}\t{}\n",
        outcome.pool_id, outcome.min_points, team.total_score, team.total_points, team.alternative_count
    ));
    out.push_str("tier\tgolfer\tscore\tposition\tprogress\tcounted\n");
    for golfer in &team.golfers {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            golfer.tier,
            golfer.name,
            golfer.score,
            golfer.position.as_deref().unwrap_or("-"),
            golfer.progress,
            if golfer.counted { "yes" } else { "no" }
        ));
    }
    out
}
