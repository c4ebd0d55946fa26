//! DTOs for link statistics.

use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::LinkStats;
use crate::utils::timestamp::format_rfc3339;

/// Statistics for a specific short link.
///
/// Includes link metadata, total click count, and every recorded click.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_clicks: usize,
    #[serde(rename = "originalURL")]
    pub original_url: String,
    pub created_at: String,
    pub expiry: String,
    pub clicks: Vec<ClickInfo>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            total_clicks: stats.total_clicks(),
            original_url: stats.link.long_url,
            created_at: format_rfc3339(&stats.link.created_at),
            expiry: format_rfc3339(&stats.link.expires_at),
            clicks: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
