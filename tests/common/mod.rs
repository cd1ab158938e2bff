#![allow(dead_code)]

use async_trait::async_trait;
use redirect_resolver::AppError;
use redirect_resolver::domain::entities::RuleRecord;
use redirect_resolver::domain::repositories::RuleSource;
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn record(source: &str, target: &str, code: i32, prefix_relative: bool) -> RuleRecord {
    RuleRecord {
        source_path: Some(source.to_string()),
        target_path: Some(target.to_string()),
        status_code: Some(code),
        prefix_relative,
    }
}

/// The rule set from the production fixtures: two exact campaign
/// redirects and one prefix-relative product redirect.
pub fn campaign_rules() -> Vec<RuleRecord> {
    vec![
        record("/campaignA", "/campaigns/targetcampaign", 302, false),
        record(
            "/campaignB",
            "/campaigns/targetcampaign/channelB",
            302,
            false,
        ),
        record("/product-directory", "/products", 301, true),
    ]
}

/// Rule source that replays a scripted sequence of fetch results.
///
/// Each fetch consumes the next batch; the final batch repeats once the
/// script is exhausted. An optional delay simulates a slow external
/// service, and every fetch is counted so tests can assert how many
/// times the source was actually hit.
pub struct ScriptedSource {
    batches: Mutex<Vec<Result<Vec<RuleRecord>, String>>>,
    fetches: AtomicUsize,
    delay: Duration,
}

impl ScriptedSource {
    pub fn new(batches: Vec<Result<Vec<RuleRecord>, String>>) -> Self {
        assert!(!batches.is_empty(), "scripted source needs at least one batch");
        Self {
            batches: Mutex::new(batches),
            fetches: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RuleSource for ScriptedSource {
    async fn fetch_rules(&self) -> Result<Vec<RuleRecord>, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let batch = {
            let mut batches = self.batches.lock().unwrap();
            if batches.len() > 1 {
                batches.remove(0)
            } else {
                batches[0].clone()
            }
        };

        batch.map_err(|message| AppError::unavailable(message, json!({})))
    }
}
