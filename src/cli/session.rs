//! Interactive session: line-based commands driving a [`MoodJournal`]

use crate::application::MoodJournal;
use crate::cli::output::{
    format_chart, format_insights, format_stats, format_suggestion, format_timeline,
};
use crate::domain::{EntryId, MoodCategory, TimelineFilter};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{EntryRepository, ExportFormat};
use chrono::{DateTime, Local};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
Commands:
  write <text>        set the entry text and show the suggested mood
  mood <name>         choose the mood (happy, sad, stressed, neutral)
  add [text]          save the entry (optionally writing text first)
  delete <id>         remove an entry
  list [period]       show entries (all, today, week, month)
  stats               show totals, streak and mood counts
  chart               show the mood distribution
  insights            show insights
  export [format]     print all entries (toml, json)
  help                show this help
  quit                end the session
";

/// One parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Write(String),
    Mood(MoodCategory),
    Add(Option<String>),
    Delete(EntryId),
    List(TimelineFilter),
    Stats,
    Chart,
    Insights,
    Export(Option<ExportFormat>),
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a non-empty line; the first word is the command name
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then_some(rest);

        match (name.to_lowercase().as_str(), arg) {
            ("write", Some(text)) => Ok(SessionCommand::Write(text.to_string())),
            ("mood", Some(name)) => MoodCategory::from_str(name)
                .map(SessionCommand::Mood)
                .map_err(MoodjourError::InvalidMood),
            ("add", text) => Ok(SessionCommand::Add(text.map(str::to_string))),
            ("delete", Some(id)) => EntryId::from_str(id)
                .map(SessionCommand::Delete)
                .map_err(|_| MoodjourError::InvalidCommand(line.to_string())),
            ("list", None) => Ok(SessionCommand::List(TimelineFilter::All)),
            ("list", Some(period)) => TimelineFilter::from_str(period)
                .map(SessionCommand::List)
                .map_err(MoodjourError::InvalidCommand),
            ("stats", None) => Ok(SessionCommand::Stats),
            ("chart", None) => Ok(SessionCommand::Chart),
            ("insights", None) => Ok(SessionCommand::Insights),
            ("export", None) => Ok(SessionCommand::Export(None)),
            ("export", Some(format)) => ExportFormat::from_str(format)
                .map(|f| SessionCommand::Export(Some(f)))
                .map_err(MoodjourError::Export),
            ("help", None) => Ok(SessionCommand::Help),
            ("quit", None) | ("exit", None) => Ok(SessionCommand::Quit),
            _ => Err(MoodjourError::InvalidCommand(line.to_string())),
        }
    }
}

/// Read commands from `input` until EOF or `quit`, writing results to `output`.
///
/// Command errors are reported and the session continues; only I/O
/// failures on the streams end it early. Invalid UTF-8 is replaced, not fatal.
pub fn run_session<R, I, W, C>(
    journal: &mut MoodJournal<R>,
    mut input: I,
    output: &mut W,
    clock: C,
) -> Result<()>
where
    R: EntryRepository,
    I: BufRead,
    W: Write,
    C: Fn() -> DateTime<Local>,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "Error: {}", e.display_with_suggestions())?;
                continue;
            }
        };

        if command == SessionCommand::Quit {
            break;
        }

        if let Err(e) = execute(journal, command, output, clock()) {
            if let MoodjourError::Io(_) = e {
                return Err(e);
            }
            writeln!(output, "Error: {}", e.display_with_suggestions())?;
        }
    }

    output.flush()?;
    Ok(())
}

fn execute<R: EntryRepository, W: Write>(
    journal: &mut MoodJournal<R>,
    command: SessionCommand,
    output: &mut W,
    now: DateTime<Local>,
) -> Result<()> {
    match command {
        SessionCommand::Write(text) => {
            let suggestion = journal.write(&text);
            match suggestion {
                Some(_) => writeln!(output, "Suggested mood: {}", format_suggestion(suggestion))?,
                None => writeln!(
                    output,
                    "No suggestion (keeping {})",
                    journal.draft().selected().label()
                )?,
            }
        }
        SessionCommand::Mood(mood) => {
            journal.select_mood(mood);
            writeln!(output, "Selected mood: {}", format_suggestion(Some(mood)))?;
        }
        SessionCommand::Add(text) => {
            if let Some(text) = text {
                journal.write(&text);
            }
            let entry = journal.submit(now)?;
            writeln!(
                output,
                "Entry saved successfully! [{}] {}",
                entry.id,
                format_suggestion(Some(entry.mood))
            )?;
        }
        SessionCommand::Delete(id) => {
            if journal.delete(id) {
                writeln!(output, "Deleted entry {}", id)?;
            } else {
                writeln!(output, "No entry with id {}", id)?;
            }
        }
        SessionCommand::List(filter) => {
            writeln!(output, "{}", format_timeline(&journal.timeline(filter, now)).trim_end())?;
        }
        SessionCommand::Stats => {
            write!(output, "{}", format_stats(&journal.stats(now)))?;
        }
        SessionCommand::Chart => {
            write!(output, "{}", format_chart(&journal.stats(now).counts_by_mood))?;
        }
        SessionCommand::Insights => {
            write!(output, "{}", format_insights(&journal.insights(now)))?;
        }
        SessionCommand::Export(format) => {
            let format = format.unwrap_or(journal.config().export_format);
            writeln!(output, "{}", journal.export(format)?.trim_end())?;
        }
        SessionCommand::Help => write!(output, "{}", HELP)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{parse_export, Config, InMemoryStore};
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap()
    }

    fn run(journal: &mut MoodJournal, script: &str) -> String {
        let mut out = Vec::new();
        run_session(journal, script.as_bytes(), &mut out, now).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("write  hello there ").unwrap(),
            SessionCommand::Write("hello there".to_string())
        );
        assert_eq!(
            SessionCommand::parse("MOOD Happy").unwrap(),
            SessionCommand::Mood(MoodCategory::Happy)
        );
        assert_eq!(SessionCommand::parse("add").unwrap(), SessionCommand::Add(None));
        assert_eq!(
            SessionCommand::parse("delete 42").unwrap(),
            SessionCommand::Delete(EntryId(42))
        );
        assert_eq!(
            SessionCommand::parse("list week").unwrap(),
            SessionCommand::List(TimelineFilter::Week)
        );
        assert_eq!(
            SessionCommand::parse("export json").unwrap(),
            SessionCommand::Export(Some(ExportFormat::Json))
        );
        assert_eq!(SessionCommand::parse("exit").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SessionCommand::parse("mood angry"),
            Err(MoodjourError::InvalidMood(_))
        ));
        assert!(matches!(
            SessionCommand::parse("delete abc"),
            Err(MoodjourError::InvalidCommand(_))
        ));
        assert!(matches!(
            SessionCommand::parse("write"),
            Err(MoodjourError::InvalidCommand(_))
        ));
        assert!(matches!(
            SessionCommand::parse("dance"),
            Err(MoodjourError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_write_add_list() {
        let mut journal = MoodJournal::in_memory(Config::default());
        let out = run(
            &mut journal,
            "write What an amazing day\nadd\nlist\n",
        );
        assert!(out.contains("Suggested mood: Happy 😊"));
        assert!(out.contains("Entry saved successfully!"));
        assert!(out.contains("What an amazing day"));
        assert_eq!(journal.entries().len(), 1);
    }

    #[test]
    fn test_short_text_keeps_selection() {
        let mut journal = MoodJournal::in_memory(Config::default());
        let out = run(&mut journal, "mood sad\nwrite meh\nadd\n");
        assert!(out.contains("No suggestion (keeping Sad)"));
        assert_eq!(journal.entries()[0].mood, MoodCategory::Sad);
    }

    #[test]
    fn test_blank_add_reports_error_and_continues() {
        let mut journal = MoodJournal::in_memory(Config::default());
        let out = run(&mut journal, "add\nadd feeling calm and steady\n");
        assert!(out.contains("Error: Entry text is empty"));
        assert_eq!(journal.entries().len(), 1);
        assert_eq!(journal.entries()[0].mood, MoodCategory::Neutral);
    }

    #[test]
    fn test_delete_unknown_is_not_an_error() {
        let mut journal = MoodJournal::in_memory(Config::default());
        let out = run(&mut journal, "delete 99\n");
        assert_eq!(out, "No entry with id 99\n");
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut journal = MoodJournal::in_memory(Config::default());
        run(&mut journal, "add first note\nquit\nadd second note\n");
        assert_eq!(journal.entries().len(), 1);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let mut journal = MoodJournal::in_memory(Config::default());
        let mut script = b"add caf\xe9 was lovely\n".to_vec();
        script.extend_from_slice(b"add second note here\n");
        let mut out = Vec::new();
        run_session(&mut journal, script.as_slice(), &mut out, now).unwrap();

        let entries = journal.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].text, "caf\u{fffd} was lovely");
    }

    #[test]
    fn test_demo_seed_plus_today_makes_three_day_streak() {
        let mut journal =
            MoodJournal::new(InMemoryStore::with_sample_entries(now()), Config::default());
        let out = run(&mut journal, "stats\nadd checking in today\nstats\ninsights\n");
        assert!(out.contains("Current streak: 0 days"));
        assert!(out.contains("Current streak: 3 days"));
        assert!(out.contains("Great Consistency!"));
    }

    #[test]
    fn test_export_output_parses_back() {
        let mut journal = MoodJournal::new(InMemoryStore::with_sample_entries(now()), Config::default());
        let out = run(&mut journal, "export json\n");
        let parsed = parse_export(&out, ExportFormat::Json).unwrap();
        assert_eq!(parsed, journal.entries());
    }

    #[test]
    fn test_stats_and_insights() {
        let mut journal = MoodJournal::in_memory(Config::default());
        let out = run(&mut journal, "insights\nadd so happy and excited\nstats\n");
        assert!(out.contains("[info] Start Your Journey"));
        assert!(out.contains("Total entries: 1"));
        assert!(out.contains("Current streak: 1 day"));
    }
}
