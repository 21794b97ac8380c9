//! Canonical event types emitted by the CrowdFund contract.
//!
//! These mirror the topics published by `contracts/crowdfund/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the CrowdFund contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A campaign was opened (`launched` topic).
    CampaignLaunched,
    /// A backer committed funds (`pledged` topic).
    FundsPledged,
    /// A backer withdrew their whole pledge (`unpledged` topic).
    FundsUnpledged,
    /// The creator collected a successful campaign (`claimed` topic).
    CampaignClaimed,
    /// A backer recovered funds from a failed campaign (`refunded` topic).
    FundsRefunded,
    /// The creator removed a campaign before it started (`cancelled` topic).
    CampaignCancelled,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "launched" => Self::CampaignLaunched,
            "pledged" => Self::FundsPledged,
            "unpledged" => Self::FundsUnpledged,
            "claimed" => Self::CampaignClaimed,
            "refunded" => Self::FundsRefunded,
            "cancelled" => Self::CampaignCancelled,
            _ => Self::Unknown,
        }
    }

    /// Short identifier stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignLaunched => "campaign_launched",
            Self::FundsPledged => "funds_pledged",
            Self::FundsUnpledged => "funds_unpledged",
            Self::CampaignClaimed => "campaign_claimed",
            Self::FundsRefunded => "funds_refunded",
            Self::CampaignCancelled => "campaign_cancelled",
            Self::Unknown => "unknown",
        }
    }

    /// Inverse of [`EventKind::as_str`]; unrecognised names map to `Unknown`.
    pub fn from_stored(name: &str) -> Self {
        match name {
            "campaign_launched" => Self::CampaignLaunched,
            "funds_pledged" => Self::FundsPledged,
            "funds_unpledged" => Self::FundsUnpledged,
            "campaign_claimed" => Self::CampaignClaimed,
            "funds_refunded" => Self::FundsRefunded,
            "campaign_cancelled" => Self::CampaignCancelled,
            _ => Self::Unknown,
        }
    }
}

/// A decoded CrowdFund event, ready to be stored.
///
/// `amount` is kept as a decimal string: contract amounts are `i128`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    /// RPC-assigned event id, unique per contract event.
    pub event_id: String,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event row as read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
