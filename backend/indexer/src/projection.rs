//! Campaign read model folded from indexed events.
//!
//! Mirrors the contract's bookkeeping: pledges add to the aggregate,
//! unpledges and refunds subtract, a claim empties it and a cancel removes
//! the campaign from play.

use serde::Serialize;

use crate::errors::{IndexerError, Result};
use crate::events::{EventKind, EventRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignState {
    /// Launched and not yet resolved by claim or cancel.
    Open,
    Claimed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub campaign_id: String,
    pub creator: Option<String>,
    /// Decimal strings: contract amounts are `i128`.
    pub goal: Option<String>,
    pub pledged: String,
    /// Amount paid to the creator by the claim, if any.
    pub claimed: Option<String>,
    pub backer_events: usize,
    pub state: CampaignState,
}

/// Fold `events` (chain order, one campaign) into a summary.
///
/// Returns `None` when there are no events for the campaign.
pub fn summarize(campaign_id: &str, events: &[EventRecord]) -> Result<Option<CampaignSummary>> {
    if events.is_empty() {
        return Ok(None);
    }

    let mut creator = None;
    let mut goal = None;
    let mut pledged: i128 = 0;
    let mut claimed = None;
    let mut backer_events = 0;
    let mut state = CampaignState::Open;

    for ev in events {
        match EventKind::from_stored(&ev.event_type) {
            EventKind::CampaignLaunched => {
                creator = ev.actor.clone();
                goal = ev.amount.clone();
            }
            EventKind::FundsPledged => {
                let amount = amount_of(campaign_id, ev)?;
                pledged = pledged
                    .checked_add(amount)
                    .ok_or_else(|| overflow(campaign_id, ev))?;
                backer_events += 1;
            }
            EventKind::FundsUnpledged | EventKind::FundsRefunded => {
                let amount = amount_of(campaign_id, ev)?;
                pledged = pledged
                    .checked_sub(amount)
                    .ok_or_else(|| overflow(campaign_id, ev))?;
                backer_events += 1;
            }
            EventKind::CampaignClaimed => {
                claimed = Some(pledged.to_string());
                pledged = 0;
                state = CampaignState::Claimed;
            }
            EventKind::CampaignCancelled => {
                pledged = 0;
                state = CampaignState::Cancelled;
            }
            EventKind::Unknown => {}
        }
    }

    if pledged < 0 {
        return Err(IndexerError::Projection {
            campaign_id: campaign_id.to_string(),
            reason: format!("negative aggregate {pledged}; events are missing"),
        });
    }

    Ok(Some(CampaignSummary {
        campaign_id: campaign_id.to_string(),
        creator,
        goal,
        pledged: pledged.to_string(),
        claimed,
        backer_events,
        state,
    }))
}

fn overflow(campaign_id: &str, ev: &EventRecord) -> IndexerError {
    IndexerError::Projection {
        campaign_id: campaign_id.to_string(),
        reason: format!("event {} overflows the aggregate", ev.event_id),
    }
}

fn amount_of(campaign_id: &str, ev: &EventRecord) -> Result<i128> {
    let raw = ev.amount.as_deref().ok_or_else(|| IndexerError::Projection {
        campaign_id: campaign_id.to_string(),
        reason: format!("event {} has no amount", ev.event_id),
    })?;
    raw.parse().map_err(|_| IndexerError::Projection {
        campaign_id: campaign_id.to_string(),
        reason: format!("event {} has invalid amount {raw:?}", ev.event_id),
    })
}
