//! Thin command-line front end over the application facade.

use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use readlog::{
    app::{App, AppError, SelectionError},
    paths::AppPaths,
    rules::RuleReport,
    types::{CompletionFilter, SortKey, WorkId},
    work::Work,
};

#[derive(Parser)]
#[command(name = "readlog", version, about = "Track progress through the exam reading list")]
struct Cli {
    /// Keep state and attachments under this directory instead of the
    /// per-user default.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the active reading list.
    List {
        /// Sort by this field.
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// Filter by completion state.
        #[arg(long, value_enum, default_value_t)]
        filter: CompletionFilter,
        /// Show the whole catalog instead of the active list.
        #[arg(long)]
        all: bool,
    },
    /// Show one work with its notes and attachments.
    Show {
        /// Catalog index, as printed by `list --all`.
        index: usize,
    },
    /// Toggle the completed flag of one work.
    Toggle {
        /// Catalog index.
        index: usize,
    },
    /// Replace the notes of one work.
    Note {
        /// Catalog index.
        index: usize,
        /// New notes text.
        text: String,
    },
    /// Copy files into the attachment store of one work.
    Attach {
        /// Catalog index.
        index: usize,
        /// Source files to copy.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Open an attached file with the default application.
    Open {
        /// Catalog index.
        index: usize,
        /// Stored attachment filename, as printed by `show`.
        name: String,
    },
    /// Check a candidate selection against the rules.
    Check {
        /// Catalog indexes of the candidate works.
        #[arg(required = true)]
        picks: Vec<usize>,
    },
    /// Commit a passing candidate selection as the active list.
    Commit {
        /// Catalog indexes of the candidate works.
        #[arg(required = true)]
        picks: Vec<usize>,
    },
    /// Reset the active list to the built-in default twenty.
    Reset,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = match &cli.data_dir {
        Some(dir) => {
            let paths = AppPaths::under_root(dir);
            App::open(paths.state_file, paths.attach_dir)
        }
        None => App::open_default(),
    };

    match run(cli.command, &mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, app: &mut App) -> Result<(), Box<dyn Error>> {
    match command {
        Command::List { sort, filter, all } => {
            let works: Vec<&Work> = if all {
                app.catalog().works().iter().collect()
            } else {
                app.display(sort, filter)
            };
            for work in works {
                let id = work.id();
                let index = app.catalog().position(&id).map_or(0, |i| i + 1);
                let mark = if app.entry(&id).completed { 'x' } else { ' ' };
                println!(
                    "{index:>3}. [{mark}] {} — {} ({}, {})",
                    work.author, work.title, work.genre, work.section
                );
            }
        }
        Command::Show { index } => {
            let (id, work) = work_at(app, index)?;
            let entry = app.entry(&id);
            println!("{} — {}", work.author, work.title);
            println!("{} — {}", work.genre, work.section);
            println!("completed: {}", if entry.completed { "yes" } else { "no" });
            if !entry.notes.is_empty() {
                println!("notes:\n{}", entry.notes);
            }
            if !entry.attachments.is_empty() {
                println!("attachments:");
                for name in &entry.attachments {
                    println!("  {name}");
                }
            }
        }
        Command::Toggle { index } => {
            let (id, work) = work_at(app, index)?;
            let title = work.title.clone();
            let completed = app.toggle_completed(&id)?;
            println!(
                "{title}: {}",
                if completed { "completed" } else { "not completed" }
            );
        }
        Command::Note { index, text } => {
            let (id, _) = work_at(app, index)?;
            app.set_notes(&id, &text)?;
        }
        Command::Attach { index, files } => {
            let (id, _) = work_at(app, index)?;
            let report = app.add_attachments(&id, &files)?;
            for name in &report.stored {
                println!("stored {name}");
            }
            for (source, err) in &report.failed {
                eprintln!("could not copy {}: {err}", source.display());
            }
        }
        Command::Open { index, name } => {
            let (id, _) = work_at(app, index)?;
            if !app.entry(&id).attachments.contains(&name) {
                return Err(format!("no attachment named {name} on this work").into());
            }
            app.open_attachment(&name)?;
        }
        Command::Check { picks } => {
            let ids = ids_from_picks(app, &picks)?;
            let report = app.validate(&ids);
            print_report(&report);
            if !report.passed() {
                return Err("candidate list does not satisfy the rules".into());
            }
        }
        Command::Commit { picks } => {
            let ids = ids_from_picks(app, &picks)?;
            match app.commit_selection(ids) {
                Ok(()) => println!("custom list committed"),
                Err(AppError::Selection(SelectionError::RulesNotSatisfied(report))) => {
                    print_report(&report);
                    return Err("candidate list does not satisfy the rules".into());
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Reset => {
            app.reset_selection()?;
            println!("active list reset to the default twenty");
        }
    }
    Ok(())
}

fn work_at(app: &App, index: usize) -> Result<(WorkId, &Work), String> {
    let works = app.catalog().works();
    if index == 0 || index > works.len() {
        return Err(format!("index out of range: {index} (1..={})", works.len()));
    }
    let work = &works[index - 1];
    Ok((work.id(), work))
}

fn ids_from_picks(app: &App, picks: &[usize]) -> Result<Vec<WorkId>, String> {
    picks
        .iter()
        .map(|&index| work_at(app, index).map(|(id, _)| id))
        .collect()
}

fn print_report(report: &RuleReport) {
    let mark = |ok: bool| if ok { " OK " } else { "FAIL" };
    println!("[{}] {}", mark(report.total.ok), report.total);
    for section in &report.sections {
        println!("[{}] {section}", mark(section.ok));
    }
    println!("[{}] {}", mark(report.genres.ok), report.genres);
    println!("[{}] {}", mark(report.authors.ok), report.authors);
    println!("overall: {}", if report.passed() { "PASS" } else { "FAIL" });
}
