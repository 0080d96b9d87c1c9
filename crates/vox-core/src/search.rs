//! Web search boundary.
//!
//! The core only depends on a query-in, ranked-snippets-out interface; any
//! provider (Google, Bing, a local index) can sit behind it. No provider
//! implementation lives in this workspace.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single ranked result returned by a search provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSnippet {
    /// Page title.
    pub title: String,
    /// Canonical link to the page.
    pub link: String,
    /// Short excerpt around the match.
    pub snippet: String,
}

/// Abstract search provider used by callers that enrich a round with live
/// context.
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs a query and returns ranked snippets, best first.
    async fn search(&self, query: &str) -> Result<Vec<SearchSnippet>>;
}
