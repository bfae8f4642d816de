mod logic;

use anyhow::{Context, Result};
use clap::Parser;
use questdice_game::{QuestBoard, QuestEngine};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use logic::{BoardReport, FileQuestSource, ReplayPlan, reports};

#[derive(Debug, Parser)]
#[command(name = "questdice-tester", version = "0.1.0")]
#[command(about = "Replay quest progress against a Quest Dice quest book and report the dice tally")]
struct Args {
    /// Quest book JSON to load (defaults to the book bundled with the web app)
    #[arg(long)]
    quests: Option<PathBuf>,

    /// Progress for a quest as NAME=VALUE (repeatable, applied in order)
    #[arg(long = "progress", value_name = "NAME=VALUE")]
    progress: Vec<String>,

    /// Optional quests to include in the totals (repeatable)
    #[arg(long = "include", value_name = "NAME")]
    include: Vec<String>,

    /// Optional quests to exclude from the totals; wins over --include
    #[arg(long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// List the quests in the book and exit
    #[arg(long)]
    list_quests: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let source = FileQuestSource::new(args.quests.clone());
    let described = source.describe();
    let engine = QuestEngine::new(source);
    let book = engine
        .load_book()
        .with_context(|| format!("failed to load quests from {described}"))?;
    log::info!("loaded {} quests from {described}", book.len());

    if args.list_quests {
        let mut output_target = OutputTarget::new(args.output.clone())?;
        write_quest_list(&mut output_target, &book)?;
        output_target.flush_inner()?;
        return Ok(());
    }

    let plan = ReplayPlan::from_args(&args.progress, &args.include, &args.exclude)?;
    let mut board = QuestBoard::new(&book);
    plan.replay(&mut board)?;

    let report = BoardReport::from_board(&described, &board);
    write_reports(&args, &report)
}

fn write_quest_list<W: Write + ?Sized>(
    writer: &mut W,
    book: &questdice_game::QuestBook,
) -> Result<()> {
    writeln!(writer, "Available quests:")?;
    for quest in book {
        let kind = if quest.from_rolling {
            "rolling"
        } else if quest.optional {
            "optional"
        } else {
            "required"
        };
        writeln!(
            writer,
            "  {:25} - {kind}, {} dice",
            quest.name,
            quest.total_dice()
        )?;
    }
    Ok(())
}

fn write_reports(args: &Args, report: &BoardReport) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, report)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, report)?,
        _ => reports::generate_console_report(&mut output_target, report)?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
