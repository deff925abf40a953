//! Chain of Responsibility: a purchase-approval pipeline.
//!
//! The classic rendition links polymorphic handler objects, each forwarding
//! to a `next` reference. Here the chain is an ordered list of tiers walked
//! in one explicit loop: each tier owns the amounts strictly above the
//! previous tier's bound, up to and including its own.

use std::fmt;
use thiserror::Error;

// =============================================================================
// Tiers
// =============================================================================

/// One link in the approval chain. A tier approves amounts in
/// `(previous bound, upper]`; `upper = None` marks the open-ended top tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    name: String,
    upper: Option<i64>,
}

impl Tier {
    pub fn bounded(name: impl Into<String>, upper: i64) -> Self {
        Self {
            name: name.into(),
            upper: Some(upper),
        }
    }

    pub fn open_ended(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upper: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("an approval chain needs at least one tier")]
    Empty,

    #[error("tier '{tier}' has upper bound {upper}, which does not exceed the previous bound {previous}")]
    NonIncreasing {
        tier: String,
        upper: i64,
        previous: i64,
    },

    #[error("open-ended tier '{tier}' must be the last tier in the chain")]
    OpenTierNotLast { tier: String },
}

// =============================================================================
// Submission outcomes
// =============================================================================

/// Every submission resolves to exactly one of these; none of them is an
/// error in the `Result` sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    Approved { tier: String, amount: i64 },
    Rejected { amount: i64 },
    NothingToApprove,
}

impl fmt::Display for ApprovalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalOutcome::Approved { tier, amount } => {
                write!(f, "{tier} approves purchase for ${amount}")
            }
            ApprovalOutcome::Rejected { .. } => write!(f, "Request could not be approved."),
            ApprovalOutcome::NothingToApprove => write!(f, "Nothing to approve"),
        }
    }
}

// =============================================================================
// The chain
// =============================================================================

/// An ordered sequence of approval tiers. Structure is fixed at construction;
/// submissions carry no state from one call to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalChain {
    tiers: Vec<Tier>,
}

impl ApprovalChain {
    /// Builds a chain, checking that bounded tiers strictly increase from
    /// zero and that only the final tier may be open-ended. Together the
    /// tiers then cover every positive amount without overlap.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, ChainError> {
        if tiers.is_empty() {
            return Err(ChainError::Empty);
        }

        let last = tiers.len() - 1;
        let mut previous = 0i64;
        for (index, tier) in tiers.iter().enumerate() {
            match tier.upper {
                Some(upper) => {
                    if upper <= previous {
                        return Err(ChainError::NonIncreasing {
                            tier: tier.name.clone(),
                            upper,
                            previous,
                        });
                    }
                    previous = upper;
                }
                None => {
                    if index != last {
                        return Err(ChainError::OpenTierNotLast {
                            tier: tier.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { tiers })
    }

    /// The canonical wiring: Supervisor up to $1000, Manager up to $5000,
    /// Director for everything above.
    pub fn purchase_approvals() -> Self {
        Self {
            tiers: vec![
                Tier::bounded("Supervisor", 1_000),
                Tier::bounded("Manager", 5_000),
                Tier::open_ended("Director"),
            ],
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Runs one amount through the chain. Negative amounts are turned away
    /// before any tier is consulted. Otherwise the tiers are tried in order
    /// and the first match approves; a boundary amount belongs to the lower
    /// tier. If no tier matches, the request is rejected.
    pub fn submit(&self, amount: i64) -> ApprovalOutcome {
        if amount < 0 {
            return ApprovalOutcome::NothingToApprove;
        }

        let mut lower = 0i64;
        for tier in &self.tiers {
            match tier.upper {
                Some(upper) => {
                    if amount > lower && amount <= upper {
                        return ApprovalOutcome::Approved {
                            tier: tier.name.clone(),
                            amount,
                        };
                    }
                    lower = upper;
                }
                None => {
                    if amount > lower {
                        return ApprovalOutcome::Approved {
                            tier: tier.name.clone(),
                            amount,
                        };
                    }
                }
            }
        }

        ApprovalOutcome::Rejected { amount }
    }
}

// =============================================================================
// Tests
// =============================================================================
