use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use moodlog_core::VERSION;

/// Moodlog - a daily mood journal for the terminal
#[derive(Parser)]
#[command(name = "moodlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal file
    #[arg(short, long, global = true, env = "MOODLOG_PATH")]
    pub journal: Option<String>,

    /// Display language for names and phrases (en, uk)
    #[arg(long, global = true, env = "MOODLOG_LOCALE")]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Storage backend for the journal file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Json,
    Sqlite,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Storage backend (defaults to the path's extension, else json)
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Time zone whose midnight separates days (IANA name or "local")
    #[arg(long)]
    pub timezone: Option<String>,

    /// First day of the calendar week (e.g. monday, sunday)
    #[arg(long)]
    pub week_start: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `log` command
#[derive(Args)]
#[command(group(ArgGroup::new("content").required(true).multiple(true).args(["mood", "text"])))]
pub struct LogArgs {
    /// Mood key or index (see `moodlog moods`)
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Note text for the day
    #[arg(short, long)]
    pub text: Option<String>,

    /// Day to record (YYYY-MM-DD or ISO-8601; defaults to now)
    #[arg(long)]
    pub date: Option<String>,

    /// Output the saved entry as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New mood key or index
    #[arg(short, long, conflicts_with = "clear_mood")]
    pub mood: Option<String>,

    /// Remove the mood from the entry
    #[arg(long)]
    pub clear_mood: bool,

    /// Replace the note text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Move the entry to another day or time
    #[arg(long)]
    pub date: Option<String>,

    /// Output the edited entry as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "date"])))]
pub struct DeleteArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Delete the entry recorded on this day
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Day to show (YYYY-MM-DD, today, yesterday; defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Start date (YYYY-MM-DD or ISO-8601, inclusive)
    #[arg(long, conflicts_with = "month")]
    pub since: Option<String>,

    /// End date (YYYY-MM-DD inclusive, or ISO-8601 exclusive)
    #[arg(long, conflicts_with = "month")]
    pub until: Option<String>,

    /// Month to list (YYYY-MM)
    #[arg(long)]
    pub month: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `calendar` command
#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM; defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Month to summarize (YYYY-MM; defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `quote` command
#[derive(Args)]
pub struct QuoteArgs {
    /// Day to pick the quote for (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `moods` command
#[derive(Args)]
pub struct MoodsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a config file and an empty journal
    Init(InitArgs),

    /// Record today's mood and/or note (updates the day's entry if present)
    Log(LogArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Show the entry for a day
    Show(ShowArgs),

    /// List entries
    List(ListArgs),

    /// Show a month calendar with recorded moods
    Calendar(CalendarArgs),

    /// Show monthly statistics
    Stats(StatsArgs),

    /// Show the quote of the day
    Quote(QuoteArgs),

    /// List mood categories
    Moods(MoodsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_requires_mood_or_text() {
        assert!(Cli::try_parse_from(["moodlog", "log"]).is_err());
        assert!(Cli::try_parse_from(["moodlog", "log", "--mood", "happy"]).is_ok());
        assert!(Cli::try_parse_from(["moodlog", "log", "--text", "hi"]).is_ok());
    }

    #[test]
    fn test_edit_mood_conflicts_with_clear() {
        let result = Cli::try_parse_from(["moodlog", "edit", "abc", "--mood", "1", "--clear-mood"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["moodlog", "-vv", "moods"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
