//! Shared fixtures for integration tests: a scripted in-memory backend with
//! simulated latency, and a minimal HTTP server for the curl client.

#![allow(dead_code)]

pub mod api_server;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::json;
use sitetrust_core::backend::{FetchError, TrustBackend};
use sitetrust_core::host::Hostname;
use sitetrust_core::model::{Explanation, SiteScore, Vote, VoteReceipt, GSB_FLAGGED_KEY};

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn host(s: &str) -> Hostname {
    s.parse().expect("test host")
}

pub fn score(host: &str, value: f64) -> SiteScore {
    serde_json::from_value(json!({
        "host": host,
        "score": value,
        "level": if value >= 70.0 { "green" } else if value >= 40.0 { "amber" } else { "red" },
        "breakdown": {"S": 0.9, "C": 0.6, "T": 0.5, "U": 0.0},
        "updated_at": "2024-05-01T12:00:00+00:00",
        "votes_total": 0,
        "u_included": false
    }))
    .expect("fixture score")
}

pub fn explanation(gsb_flagged: bool) -> Explanation {
    serde_json::from_value(json!({
        "signals": [
            {"key": "https_ok", "value": true},
            {"key": GSB_FLAGGED_KEY, "value": gsb_flagged},
            {"key": "community_wilson", "value": 0.5}
        ]
    }))
    .expect("fixture explanation")
}

/// A canned reply: either a value or an HTTP status, after `delay`.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub result: Result<T, u32>,
    pub delay: Duration,
}

impl<T> Reply<T> {
    pub fn ok(value: T, delay: Duration) -> Self {
        Self {
            result: Ok(value),
            delay,
        }
    }

    pub fn status(code: u32, delay: Duration) -> Self {
        Self {
            result: Err(code),
            delay,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteScript {
    pub score: Reply<SiteScore>,
    pub explanation: Reply<Explanation>,
}

/// In-memory backend driven by per-host scripts.
///
/// Accepted votes bump the scripted score for their host, the way the real
/// backend recomputes U after a vote.
pub struct ScriptedBackend {
    sites: Mutex<HashMap<String, SiteScript>>,
    vote_reply: Mutex<Reply<()>>,
    votes: Mutex<Vec<Vote>>,
    pub score_calls: AtomicUsize,
    pub explanation_calls: AtomicUsize,
    pub vote_calls: AtomicUsize,
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self {
            sites: Mutex::new(HashMap::new()),
            vote_reply: Mutex::new(Reply::ok((), ms(10))),
            votes: Mutex::new(Vec::new()),
            score_calls: AtomicUsize::new(0),
            explanation_calls: AtomicUsize::new(0),
            vote_calls: AtomicUsize::new(0),
        }
    }
}

impl ScriptedBackend {
    /// Scripts a host whose score and explanation both succeed.
    pub fn with_site(self, name: &str, value: f64, delay: Duration) -> Self {
        self.set_site(
            name,
            SiteScript {
                score: Reply::ok(score(name, value), delay),
                explanation: Reply::ok(explanation(false), delay),
            },
        );
        self
    }

    pub fn set_site(&self, name: &str, script: SiteScript) {
        self.sites.lock().unwrap().insert(name.to_string(), script);
    }

    pub fn set_score(&self, name: &str, reply: Reply<SiteScore>) {
        self.site_mut(name, |s| s.score = reply);
    }

    pub fn set_explanation(&self, name: &str, reply: Reply<Explanation>) {
        self.site_mut(name, |s| s.explanation = reply);
    }

    pub fn set_vote_reply(&self, reply: Reply<()>) {
        *self.vote_reply.lock().unwrap() = reply;
    }

    pub fn votes(&self) -> Vec<Vote> {
        self.votes.lock().unwrap().clone()
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn site(&self, host: &Hostname) -> Option<SiteScript> {
        self.sites.lock().unwrap().get(host.as_str()).cloned()
    }

    fn site_mut(&self, name: &str, f: impl FnOnce(&mut SiteScript)) {
        let mut sites = self.sites.lock().unwrap();
        let script = sites.get_mut(name).expect("scripted host");
        f(script);
    }
}

impl TrustBackend for ScriptedBackend {
    async fn fetch_score(&self, host: &Hostname) -> Result<SiteScore, FetchError> {
        self.score_calls.fetch_add(1, Ordering::SeqCst);
        let Some(script) = self.site(host) else {
            return Err(FetchError::Status(404));
        };
        tokio::time::sleep(script.score.delay).await;
        script.score.result.map_err(FetchError::Status)
    }

    async fn fetch_explanation(&self, host: &Hostname) -> Result<Explanation, FetchError> {
        self.explanation_calls.fetch_add(1, Ordering::SeqCst);
        let Some(script) = self.site(host) else {
            return Err(FetchError::Status(404));
        };
        tokio::time::sleep(script.explanation.delay).await;
        script.explanation.result.map_err(FetchError::Status)
    }

    async fn submit_vote(&self, vote: &Vote) -> Result<VoteReceipt, FetchError> {
        self.vote_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.vote_reply.lock().unwrap().clone();
        tokio::time::sleep(reply.delay).await;
        reply.result.map_err(FetchError::Status)?;

        self.votes.lock().unwrap().push(vote.clone());
        let mut new_score = None;
        if let Some(script) = self.sites.lock().unwrap().get_mut(vote.host.as_str()) {
            if let Ok(s) = script.score.result.as_mut() {
                s.votes_total += 1;
                s.u_included = true;
                s.breakdown.community = 1.0;
                s.score = (s.score + 5.0).min(100.0);
                new_score = Some(s.score);
            }
        }
        Ok(VoteReceipt {
            ok: Some(true),
            new_score,
        })
    }
}
