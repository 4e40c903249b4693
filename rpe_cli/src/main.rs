use clap::{Parser, Subcommand};
use rpe_core::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rpelog")]
#[command(about = "RPE lift tracker and e1RM calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive logging session (default)
    Session,

    /// Estimate a one-rep max from a single set
    Estimate {
        /// Weight lifted
        #[arg(long)]
        weight: f64,

        /// Repetitions performed
        #[arg(long)]
        reps: u32,

        /// Rate of perceived exertion (6-10 in half steps)
        #[arg(long)]
        rpe: f64,
    },

    /// Compute a working weight from a known e1RM
    Target {
        /// Estimated one-rep max
        #[arg(long)]
        e1rm: f64,

        /// Target repetitions
        #[arg(long)]
        reps: u32,

        /// Target RPE
        #[arg(long)]
        rpe: f64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    rpe_core::logging::init_with_filter(rpe_core::logging::CLI_FILTER);

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let unit = config.display.unit.as_str();

    match cli.command {
        Some(Commands::Estimate { weight, reps, rpe }) => {
            println!("e1RM: {}{}", estimate_max(weight, reps, Rpe(rpe)), unit);
            Ok(())
        }
        Some(Commands::Target { e1rm, reps, rpe }) => {
            println!("Target weight: {}{}", weight_for(e1rm, reps, Rpe(rpe)), unit);
            Ok(())
        }
        Some(Commands::Session) | None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_session(stdin.lock(), stdout.lock(), unit)
        }
    }
}

/// A single line of input in the interactive session
#[derive(Debug, PartialEq)]
enum SessionCommand {
    Log {
        exercise: Exercise,
        weight: f64,
        reps: u32,
        rpe: Rpe,
    },
    List,
    /// 1-based position as shown by `list`
    Delete(usize),
    Best,
    Target {
        exercise: Exercise,
        reps: u32,
        rpe: Rpe,
    },
    Export(PathBuf),
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Result<SessionCommand> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((name, args)) = words.split_first() else {
        return Ok(SessionCommand::Empty);
    };

    let command = match (name.to_lowercase().as_str(), args) {
        ("log", [exercise, weight, reps, rpe]) => SessionCommand::Log {
            exercise: exercise.parse()?,
            weight: parse_weight(weight)?,
            reps: parse_number(reps, "reps")?,
            rpe: rpe.parse()?,
        },
        ("log", _) => return Err(usage("log <exercise> <weight> <reps> <rpe>")),
        ("list", []) => SessionCommand::List,
        ("delete", [position]) => SessionCommand::Delete(parse_number(position, "position")?),
        ("delete", _) => return Err(usage("delete <n>")),
        ("best", []) => SessionCommand::Best,
        ("target", [exercise, reps, rpe]) => SessionCommand::Target {
            exercise: exercise.parse()?,
            reps: parse_number(reps, "reps")?,
            rpe: rpe.parse()?,
        },
        ("target", _) => return Err(usage("target <exercise> <reps> <rpe>")),
        ("export", [path]) => SessionCommand::Export(PathBuf::from(*path)),
        ("export", _) => return Err(usage("export <path>")),
        ("help" | "?", _) => SessionCommand::Help,
        ("quit" | "exit", _) => SessionCommand::Quit,
        (other, _) => {
            return Err(Error::Parse(format!(
                "unknown command '{}' (type 'help' for commands)",
                other
            )))
        }
    };

    Ok(command)
}

fn parse_number<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::Parse(format!("invalid {} '{}'", what, raw)))
}

fn parse_weight(raw: &str) -> Result<f64> {
    let weight: f64 = parse_number(raw, "weight")?;
    if !weight.is_finite() {
        return Err(Error::Parse(format!("invalid weight '{}'", raw)));
    }
    Ok(weight)
}

fn usage(text: &str) -> Error {
    Error::Parse(format!("usage: {}", text))
}

/// Drive one session from `input` until `quit` or end of input
fn run_session<R: BufRead, W: Write>(input: R, mut out: W, unit: &str) -> Result<()> {
    let mut tracker = LiftTracker::new();

    writeln!(out, "RPE Lift Tracker - type 'help' for commands")?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        match parse_command(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => execute(command, &mut tracker, &mut out, unit)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    tracing::debug!("Session ended with {} sets logged", tracker.len());
    Ok(())
}

fn execute<W: Write>(
    command: SessionCommand,
    tracker: &mut LiftTracker,
    out: &mut W,
    unit: &str,
) -> Result<()> {
    match command {
        SessionCommand::Log {
            exercise,
            weight,
            reps,
            rpe,
        } => {
            let set = tracker.log_set(exercise, weight, reps, rpe);
            writeln!(
                out,
                "Logged: {} {}{} x{} @{} | e1RM: {}{}",
                exercise,
                weight,
                unit,
                reps,
                rpe,
                set.estimated_max(),
                unit
            )?;
        }

        SessionCommand::List => {
            if tracker.is_empty() {
                writeln!(out, "No lifts logged yet.")?;
            }
            for (position, set) in tracker.sets().iter().enumerate() {
                writeln!(out, "{}. {}", position + 1, describe_set(set, unit))?;
            }
        }

        SessionCommand::Delete(position) => {
            // Position 0 can never match a 1-based listing
            let removed = position
                .checked_sub(1)
                .and_then(|index| tracker.delete(index));
            match removed {
                Some(_) => writeln!(out, "Deleted lift {}.", position)?,
                None => writeln!(out, "No lift at position {}.", position)?,
            }
        }

        SessionCommand::Best => {
            let bests = tracker.personal_bests();
            if bests.is_empty() {
                writeln!(out, "No lifts logged yet.")?;
            }
            for best in bests {
                writeln!(
                    out,
                    "{}: {}{} e1RM ({}{} x{} @{})",
                    best.exercise,
                    best.set.estimated_max(),
                    unit,
                    best.set.weight(),
                    unit,
                    best.set.reps(),
                    best.set.rpe()
                )?;
            }
        }

        SessionCommand::Target {
            exercise,
            reps,
            rpe,
        } => match tracker.target_weight(exercise, reps, rpe) {
            Some(target) => writeln!(out, "Target weight: {}{}", target, unit)?,
            None => writeln!(out, "No data logged for {} yet.", exercise)?,
        },

        SessionCommand::Export(path) => export(tracker, &path, out)?,

        SessionCommand::Help => print_help(out)?,

        SessionCommand::Quit | SessionCommand::Empty => {}
    }

    Ok(())
}

fn export<W: Write>(tracker: &LiftTracker, path: &Path, out: &mut W) -> Result<()> {
    match export_to_path(tracker.sets(), path) {
        Ok(count) => writeln!(out, "✓ Exported {} lifts to {}", count, path.display())?,
        Err(e) => {
            tracing::warn!("Export to {:?} failed: {}", path, e);
            writeln!(out, "Error: {}", e)?;
        }
    }
    Ok(())
}

fn describe_set(set: &LoggedSet, unit: &str) -> String {
    format!(
        "{}: {}{} x{} @{} | e1RM: {}{}",
        set.exercise(),
        set.weight(),
        unit,
        set.reps(),
        set.rpe(),
        set.estimated_max(),
        unit
    )
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "─────────────────────────────────────────")?;
    writeln!(out, "  log <exercise> <weight> <reps> <rpe>")?;
    writeln!(out, "  list")?;
    writeln!(out, "  delete <n>")?;
    writeln!(out, "  best")?;
    writeln!(out, "  target <exercise> <reps> <rpe>")?;
    writeln!(out, "  export <path>")?;
    writeln!(out, "  quit")?;
    writeln!(out, "Exercises: squat, bench, deadlift")?;
    Ok(())
}
