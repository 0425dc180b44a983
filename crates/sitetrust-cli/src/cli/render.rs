//! Plain-text rendering of trust snapshots in the active locale.

use std::fmt::Write;

use sitetrust_core::locale::{translate, Locale};
use sitetrust_core::model::{Explanation, SiteScore};
use sitetrust_core::orchestrator::TrustSnapshot;
use sitetrust_core::route::SiteRoute;

/// Score card, GSB alert and optionally the signal list.
pub fn snapshot(snap: &TrustSnapshot, locale: Locale, show_signals: bool) -> String {
    let mut out = String::new();
    if let Some(host) = &snap.host {
        let _ = writeln!(out, "{}: {}", translate("site", locale), host);
    }
    if snap.gsb_flagged {
        let _ = writeln!(out, "!! {}", translate("gsbAlert", locale));
    }
    if let Some(score) = &snap.score {
        score_card(&mut out, score, locale);
    }
    if show_signals {
        if let Some(explanation) = &snap.explanation {
            signals(&mut out, explanation);
        }
    }
    out
}

fn score_card(out: &mut String, score: &SiteScore, locale: Locale) {
    let _ = writeln!(out, "{:.1} ({})", score.score, score.level.as_str());
    let b = &score.breakdown;
    for (key, value) in [
        ("security", b.security),
        ("credibility", b.credibility),
        ("transparency", b.transparency),
    ] {
        let _ = writeln!(out, "  {:<14} {:.2}", translate(key, locale), value);
    }
    let community = translate("community", locale);
    if score.community_pending() {
        let _ = writeln!(out, "  {:<14} {}", community, translate("noVotes", locale));
    } else {
        let _ = writeln!(
            out,
            "  {:<14} {:.2} ({})",
            community, b.community, score.votes_total
        );
    }
    let _ = writeln!(
        out,
        "{}: {}",
        translate("updatedAt", locale),
        score.updated_at.format("%Y-%m-%d %H:%M %:z")
    );
}

fn signals(out: &mut String, explanation: &Explanation) {
    for signal in &explanation.signals {
        let _ = write!(out, "  - {} = {}", signal.key, signal.value);
        if let Some(effect) = &signal.effect {
            let _ = write!(out, " [{effect}]");
        }
        out.push('\n');
    }
}

/// One link per locale for the same host, active locale marked.
pub fn language_links(route: &SiteRoute) -> String {
    Locale::ALL
        .iter()
        .map(|&l| {
            let link = route.with_locale(l).to_path();
            if l == route.locale {
                format!("[{}] {link}", l.label())
            } else {
                format!("{} {link}", l.label())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
