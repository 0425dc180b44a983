//! CLI for SiteTrust lookups and community votes.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sitetrust_core::config;
use sitetrust_core::locale;
use sitetrust_core::model::VoteLabel;

use commands::{
    run_health, run_locales, run_lookup, run_normalize, run_open, run_vote, VoteArgs,
};

/// Top-level CLI for SiteTrust.
#[derive(Debug, Parser)]
#[command(name = "sitetrust")]
#[command(about = "SiteTrust: website trust scores and community votes", long_about = None)]
pub struct Cli {
    /// Trust API base URL (overrides `api_base` in config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// UI language: en, zh, zh-Hant, ja, es. Anything else means English.
    #[arg(long, global = true, value_name = "LANG")]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Vote label as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelArg {
    Safe,
    Suspicious,
    Danger,
}

impl From<LabelArg> for VoteLabel {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Safe => VoteLabel::Safe,
            LabelArg::Suspicious => VoteLabel::Suspicious,
            LabelArg::Danger => VoteLabel::Danger,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up the trust score of a domain or URL.
    Lookup {
        /// Domain or URL, e.g. `example.com` or `https://example.com/page`.
        input: String,

        /// Also print every signal behind the score.
        #[arg(long)]
        signals: bool,
    },

    /// Open a site route such as `/site/example.com?lang=ja`.
    Open {
        /// Path plus optional query.
        route: String,

        /// Also print every signal behind the score.
        #[arg(long)]
        signals: bool,
    },

    /// Submit a community vote for a domain, then show the refreshed score.
    Vote {
        /// Domain or URL to vote on.
        input: String,

        /// How the site looks to you.
        #[arg(long, value_enum)]
        label: LabelArg,

        /// Optional free-text reason.
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Print the canonical hostname for a domain or URL without any network call.
    Normalize {
        input: String,
    },

    /// Check that the trust API is reachable.
    Health,

    /// List supported UI languages.
    Locales,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(base) = cli.api_base {
            cfg.api_base = base;
        }
        tracing::debug!("loaded config: {:?}", cfg);
        let locale = locale::resolve(cli.lang.as_deref());

        match cli.command {
            CliCommand::Lookup { input, signals } => {
                run_lookup(&cfg, locale, &input, signals).await?
            }
            CliCommand::Open { route, signals } => run_open(&cfg, &route, signals).await?,
            CliCommand::Vote {
                input,
                label,
                reason,
            } => {
                let args = VoteArgs {
                    input,
                    label: label.into(),
                    reason,
                };
                run_vote(&cfg, locale, args).await?
            }
            CliCommand::Normalize { input } => run_normalize(locale, &input)?,
            CliCommand::Health => run_health(&cfg, locale).await?,
            CliCommand::Locales => run_locales(locale),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
