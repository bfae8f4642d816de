use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use questdice_game::{DicePair, QuestBoard, QuestRow, RollingSummary};
use serde::Serialize;
use std::io::Write;

/// One tracked quest as it stands after replay.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestLine {
    pub name: String,
    pub optional: bool,
    pub included: bool,
    pub progress: i64,
    pub met: usize,
    pub breakpoints: usize,
    pub earned: u32,
    pub left: u32,
}

impl From<&QuestRow> for QuestLine {
    fn from(row: &QuestRow) -> Self {
        let tally = row.tally();
        Self {
            name: row.name().to_string(),
            optional: row.quest().optional,
            included: row.included(),
            progress: row.progress().0,
            met: tally.met,
            breakpoints: row.quest().breakpoints.len(),
            earned: tally.earned,
            left: tally.left,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardReport {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub quests: Vec<QuestLine>,
    pub totals: DicePair,
    pub rolling: Vec<RollingSummary>,
}

impl BoardReport {
    #[must_use]
    pub fn from_board(source: &str, board: &QuestBoard) -> Self {
        Self {
            source: source.to_string(),
            generated_at: Utc::now(),
            quests: board.rows().iter().map(QuestLine::from).collect(),
            totals: board.totals(),
            rolling: board.rolling().to_vec(),
        }
    }
}

fn range_text(summary: &RollingSummary) -> String {
    summary
        .range
        .map_or_else(|| String::from("-"), |(lo, hi)| format!("{lo}-{hi}"))
}

pub fn generate_console_report<W: Write + ?Sized>(
    writer: &mut W,
    report: &BoardReport,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "🎲 Quest Dice Tally".bright_cyan().bold())?;
    writeln!(writer, "{}", "===================".cyan())?;
    writeln!(writer, "Source: {}", report.source)?;
    writeln!(writer)?;

    for line in &report.quests {
        let status = if !line.included {
            "○ SKIP".dimmed()
        } else if line.left == 0 {
            "✔ DONE".green()
        } else {
            "… OPEN".yellow()
        };
        let tag = if line.optional { " (optional)" } else { "" };
        writeln!(writer, "{status} {}{tag}", line.name.bold())?;
        writeln!(
            writer,
            "   Progress: {}  Breakpoints: {}/{}",
            line.progress, line.met, line.breakpoints
        )?;
        writeln!(writer, "   Earned: {}  Left: {}", line.earned, line.left)?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "Dice earned: {}",
        report.totals.earned.to_string().green()
    )?;
    writeln!(writer, "Dice left: {}", report.totals.left.to_string().red())?;

    if !report.rolling.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", "Rolling quests".bright_yellow().bold())?;
        for summary in &report.rolling {
            writeln!(
                writer,
                "  {:25} {} dice over {}",
                summary.name,
                summary.total_dice,
                range_text(summary)
            )?;
        }
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(writer: &mut W, report: &BoardReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    writer: &mut W,
    report: &BoardReport,
) -> Result<()> {
    writeln!(writer, "# Quest Dice Tally\n")?;
    writeln!(writer, "- **Source**: {}", report.source)?;
    writeln!(
        writer,
        "- **Generated**: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    writeln!(writer, "## Quests\n")?;
    writeln!(
        writer,
        "| Quest | Optional | Included | Progress | Breakpoints | Earned | Left |"
    )?;
    writeln!(writer, "|---|---|---|---:|---:|---:|---:|")?;
    for line in &report.quests {
        writeln!(
            writer,
            "| {} | {} | {} | {} | {}/{} | {} | {} |",
            line.name,
            yes_no(line.optional),
            yes_no(line.included),
            line.progress,
            line.met,
            line.breakpoints,
            line.earned,
            line.left
        )?;
    }

    writeln!(writer, "\n## Totals\n")?;
    writeln!(writer, "- **Dice earned**: {}", report.totals.earned)?;
    writeln!(writer, "- **Dice left**: {}", report.totals.left)?;

    if !report.rolling.is_empty() {
        writeln!(writer, "\n## Rolling quests\n")?;
        for summary in &report.rolling {
            writeln!(
                writer,
                "- {}: {} dice over {}",
                summary.name,
                summary.total_dice,
                range_text(summary)
            )?;
        }
    }
    Ok(())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
