//! Terminal presentation of load reports and the game catalog.

use std::collections::BTreeMap;
use std::io::{self, Write};

use gamehub_core::{GameInfo, LoadOutcome, LoadReport};

/// Human-readable listing, one block per game.
pub fn write_report_text(out: &mut impl Write, report: &LoadReport) -> io::Result<()> {
    for entry in &report.games {
        match &entry.outcome {
            LoadOutcome::Populated { files } => {
                writeln!(out, "{}: {} file(s)", entry.game, files.len())?;
                for file in files {
                    writeln!(
                        out,
                        "  {}\t{}\t{}\t{}",
                        file.name, file.size_human, file.modified, file.url
                    )?;
                }
            }
            LoadOutcome::Empty => writeln!(out, "{}: no files yet", entry.game)?,
            LoadOutcome::Failed { reason } => writeln!(out, "{}: error: {}", entry.game, reason)?,
            LoadOutcome::Skipped => writeln!(out, "{}: skipped", entry.game)?,
        }
    }
    Ok(())
}

/// One JSON object per line, per game.
pub fn write_report_jsonl(out: &mut impl Write, report: &LoadReport) -> io::Result<()> {
    for entry in &report.games {
        let json = serde_json::to_string(entry)?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}

/// Short per-game status line for stderr after `render`.
pub fn summary_line(report: &LoadReport) -> String {
    report
        .games
        .iter()
        .map(|entry| match &entry.outcome {
            LoadOutcome::Populated { files } => format!("{}={}", entry.game, files.len()),
            other => format!("{}={}", entry.game, other.label()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn write_catalog(
    out: &mut impl Write,
    catalog: &BTreeMap<String, GameInfo>,
    json: bool,
) -> io::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog)?)?;
        return Ok(());
    }
    for (id, info) in catalog {
        writeln!(out, "{}\t{}\t{}", id, info.name, info.description)?;
    }
    Ok(())
}
