use crate::common::error::{Result, ScrapeError};
use dailyboard_core::{ServiceState, ServiceStatus};

/// Parses a route's raw status block: a fixed three-character glyph marker,
/// then the heading on the first line and the comment on the second.
///
/// A block with fewer than two lines after the skip is treated as a missing
/// region rather than indexed blindly.
pub fn parse_service_status(raw: &str) -> Result<ServiceStatus> {
    let body: String = raw.chars().skip(3).collect();
    let mut lines = body.lines();
    let heading = lines
        .next()
        .ok_or_else(|| ScrapeError::RegionNotFound("service status heading".to_string()))?
        .to_string();
    let comment = lines
        .next()
        .ok_or_else(|| ScrapeError::RegionNotFound("service status comment".to_string()))?
        .to_string();
    let state = ServiceState::classify(&heading);
    Ok(ServiceStatus {
        heading,
        comment,
        state,
    })
}
