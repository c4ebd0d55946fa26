//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// Individual click as reported by the stats endpoint.
///
/// `time` keeps sub-second precision.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub time: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            time: click.clicked_at,
            referrer: click.referrer,
            geo: click.geo,
        }
    }
}
