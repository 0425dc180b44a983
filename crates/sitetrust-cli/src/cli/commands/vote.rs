//! `sitetrust vote` – look up a host, submit one vote, show the refreshed score.

use anyhow::{bail, Result};
use sitetrust_core::config::ClientConfig;
use sitetrust_core::locale::{translate, Locale};
use sitetrust_core::model::VoteLabel;
use sitetrust_core::orchestrator::{LookupOutcome, RefreshOutcome};
use sitetrust_core::vote::{SubmitOutcome, VoteSubmissionController};

use super::orchestrator;
use crate::cli::render;

#[derive(Debug)]
pub struct VoteArgs {
    pub input: String,
    pub label: VoteLabel,
    pub reason: String,
}

pub async fn run_vote(cfg: &ClientConfig, locale: Locale, args: VoteArgs) -> Result<()> {
    let orch = orchestrator(cfg)?;
    let votes = VoteSubmissionController::new(orch.clone(), cfg.vote_timeout());

    let Ok(outcome) = orch.lookup_input(&args.input).await else {
        bail!("{}", translate("invalidInput", locale));
    };
    // A host the API has not scored yet can still receive votes.
    if let LookupOutcome::Failed(err) = outcome {
        tracing::warn!(error = %err, "voting without a displayed score");
    }

    println!(
        "{}: {} ({}: {})",
        translate("communityVote", locale),
        orch.active_host().map(|h| h.to_string()).unwrap_or_default(),
        translate("label", locale),
        translate(args.label.as_str(), locale),
    );
    println!("{}", translate("submitting", locale));

    match votes.submit_for_active(args.label, args.reason).await? {
        SubmitOutcome::Accepted { receipt, refresh } => {
            if let Some(new_score) = receipt.new_score {
                tracing::debug!(new_score, "backend reported new score");
            }
            match refresh {
                Ok(RefreshOutcome::Applied(_)) => {
                    print!("{}", render::snapshot(&orch.snapshot(), locale, false));
                }
                Ok(RefreshOutcome::Discarded) => {}
                Err(err) => eprintln!("{err}"),
            }
            Ok(())
        }
        SubmitOutcome::Rejected(err) => bail!("{}: {err}", translate("voteFailed", locale)),
        SubmitOutcome::Busy => bail!("{}", translate("submitting", locale)),
    }
}
