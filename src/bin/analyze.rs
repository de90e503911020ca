//! One-shot analysis: `insight-analyze "<feedback text>"`.
//!
//! Prints a single JSON object and always exits 0, so callers only ever
//! need to parse stdout.

use std::sync::Arc;

use insight_engine::application::{FeedbackSummary, SummarizeFeedbackHandler};
use insight_engine::bootstrap::build_analyzer;
use insight_engine::config::AppConfig;

fn main() {
    let text = std::env::args().nth(1);

    let summary = match AppConfig::load() {
        Ok(config) => {
            let analyzer = Arc::new(build_analyzer(&config.oneshot));
            SummarizeFeedbackHandler::new(analyzer).handle(text.as_deref())
        }
        Err(e) => FeedbackSummary::failed(e.to_string()),
    };

    println!("{}", summary.to_json());
}
