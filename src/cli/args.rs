use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "psysafe")]
#[command(about = "Psychological safety toolkit: breathing exercises, self-tests and personal records")]
#[command(long_about = "psysafe - psychological safety in the terminal

Guided breathing, a manipulation checklist, a burnout self-test, an emotion
diary, personal boundaries, a self-defense plan and research figures.

QUICK START:
  psysafe breathe              Start the default breathing technique
  psysafe breathe 478          Start the 4-7-8 technique
  psysafe burnout 2 3 1 4 2    Score the burnout self-test
  psysafe diary add \"...\"      Write a diary entry

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a guided breathing exercise
    ///
    /// Opens a full-screen view that cycles through the technique's phases
    /// until you stop it.
    ///
    /// Keys:
    ///   space / s   start or stop
    ///   1 2 3 / tab choose technique
    ///   q / Esc     quit
    ///
    /// Examples:
    ///   psysafe breathe
    ///   psysafe breathe 478
    ///   psysafe breathe belly --plain --duration 2m
    #[command(alias = "b")]
    Breathe(BreatheArgs),

    /// List breathing techniques and their phases
    Techniques,

    /// Score the manipulation awareness checklist
    ///
    /// Pass the numbers (1-6) of the statements that apply to you.
    ///
    /// Examples:
    ///   psysafe checklist
    ///   psysafe checklist 1 4 5
    #[command(alias = "manipulation")]
    Checklist {
        /// Checked item numbers (1-6)
        items: Vec<u8>,
    },

    /// Score the burnout self-test
    ///
    /// Rate each of the five symptoms from 0 (never) to 5 (constantly).
    ///
    /// Example:
    ///   psysafe burnout 2 3 1 4 2
    Burnout {
        /// Five ratings, 0-5 each
        #[arg(num_args = 5, required = true)]
        levels: Vec<u8>,
    },

    /// Emotion diary
    Diary(DiaryArgs),

    /// Personal boundaries
    Boundaries(BoundariesArgs),

    /// Self-defense plan against manipulation
    Plan(PlanArgs),

    /// Show research figures
    ///
    /// Datasets: age, manipulation, effectiveness, stress.
    /// Without a name every dataset is shown.
    Research {
        /// Dataset to show
        dataset: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Example:
    ///   psysafe completions zsh > ~/.zsh/completions/_psysafe
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `breathe`.
#[derive(Args)]
pub struct BreatheArgs {
    /// Technique key: square, 478 (4-7-8), belly
    pub technique: Option<String>,

    /// Print phase changes as lines instead of drawing a screen
    #[arg(long)]
    pub plain: bool,

    /// Stop automatically after this long (e.g. 90s, 5m, 1h)
    #[arg(long, short = 'd')]
    pub duration: Option<String>,
}

/// Arguments for `diary`.
#[derive(Args)]
pub struct DiaryArgs {
    #[command(subcommand)]
    pub command: DiaryCommands,
}

/// Diary subcommands.
#[derive(Subcommand)]
pub enum DiaryCommands {
    /// Write an entry
    ///
    /// Example:
    ///   psysafe diary add "Tough meeting, felt unheard" -e Гнев -e Усталость
    Add {
        /// What happened and how you feel
        text: String,

        /// Emotion tag (repeatable)
        #[arg(long = "emotion", short = 'e')]
        emotions: Vec<String>,
    },

    /// Show saved entries, newest first
    #[command(alias = "list")]
    History,

    /// Delete every entry
    Clear {
        /// Confirm deletion
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for `boundaries`.
#[derive(Args)]
pub struct BoundariesArgs {
    #[command(subcommand)]
    pub command: BoundariesCommands,
}

/// Boundaries subcommands.
#[derive(Subcommand)]
pub enum BoundariesCommands {
    /// Save boundaries; omitted areas keep their saved text
    Set {
        /// Work boundaries
        #[arg(long)]
        work: Option<String>,

        /// Relationship boundaries
        #[arg(long)]
        relationship: Option<String>,

        /// Emotional boundaries
        #[arg(long)]
        emotional: Option<String>,

        /// Digital boundaries
        #[arg(long)]
        digital: Option<String>,
    },

    /// Show saved boundaries
    Show,
}

/// Arguments for `plan`.
#[derive(Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommands,
}

/// Plan subcommands.
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Save the plan; omitted fields keep their saved text
    Set {
        /// Situations and people that trigger manipulation
        #[arg(long)]
        triggers: Option<String>,

        /// Prepared responses
        #[arg(long)]
        auto_responses: Option<String>,

        /// Who to turn to for support
        #[arg(long)]
        support: Option<String>,
    },

    /// Show the saved plan
    Show,
}
