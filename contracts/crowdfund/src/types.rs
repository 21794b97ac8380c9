//! # Types
//!
//! Shared data structures used across the crowdfund modules.
//!
//! ## Config / aggregate split
//!
//! A [`Campaign`] is stored as two ledger entries:
//!
//! - [`CampaignConfig`] — written once by `launch`; never mutated.
//! - the pledged aggregate (`i128`) — written on every pledge, unpledge,
//!   claim and refund.
//!
//! The public API exposes the reconstructed [`Campaign`] snapshot.
//!
//! ## Lifecycle
//!
//! [`CampaignStatus`] is derived from the ledger timestamp and never stored:
//!
//! ```text
//! Scheduled ──► Active ──► Ended
//!     └──► (cancelled: entries removed, reads as non-existent)
//! ```

use soroban_sdk::{contracttype, Address};

/// Time window a campaign is in, derived from `now` against its schedule.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// `now < start_time`; may be cancelled, not yet pledged to.
    Scheduled,
    /// `start_time <= now < end_time`; accepting pledges.
    Active,
    /// `now >= end_time`; resolved by claim or refund.
    Ended,
}

/// Immutable campaign parameters, written once at launch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub creator: Address,
    pub goal: i128,
    pub start_time: u64,
    pub end_time: u64,
}

/// Full snapshot of a campaign, as returned by `get_campaign` and carried by
/// the `launched`, `claimed` and `cancelled` events.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Address that launched the campaign and may claim or cancel it.
    pub creator: Address,
    /// Target amount; the campaign succeeds when `pledged >= goal` at the end.
    pub goal: i128,
    /// Ledger timestamp at which pledging opens.
    pub start_time: u64,
    /// Ledger timestamp at which pledging closes and resolution opens.
    pub end_time: u64,
    /// Sum of contributions currently held in escrow for this campaign.
    pub pledged: i128,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, pledged: i128) -> Self {
        Campaign {
            creator: config.creator,
            goal: config.goal,
            start_time: config.start_time,
            end_time: config.end_time,
            pledged,
        }
    }

    pub fn status_at(&self, now: u64) -> CampaignStatus {
        if now < self.start_time {
            CampaignStatus::Scheduled
        } else if now < self.end_time {
            CampaignStatus::Active
        } else {
            CampaignStatus::Ended
        }
    }

    pub fn goal_met(&self) -> bool {
        self.pledged >= self.goal
    }
}
