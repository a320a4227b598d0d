use crate::model::{ActorId, InboxId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;

/// Type-safe identifier for products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product as loaded for one viewer, at the moment a card is rendered.
///
/// `upvotes` is signed and never clamped: whatever the backend reports is what the card
/// shows. `upvoted_by_user` is absent for anonymous viewers and is read as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub category: String,
    pub upvotes: i64,
    #[serde(default)]
    pub upvoted_by_user: Option<bool>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub badges: Vec<String>,
}

impl ProductSnapshot {
    /// Creates a snapshot with empty display metadata.
    ///
    /// # Arguments
    /// * `id` - Product identifier
    /// * `name` - Display name
    /// * `upvotes` - Durable upvote counter
    /// * `upvoted_by_user` - Whether the viewer has already upvoted
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        upvotes: i64,
        upvoted_by_user: Option<bool>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tagline: String::new(),
            category: String::new(),
            upvotes,
            upvoted_by_user,
            points: 0,
            rank: None,
            badges: Vec::new(),
        }
    }

    pub fn viewer_has_upvoted(&self) -> bool {
        self.upvoted_by_user.unwrap_or(false)
    }
}

/// Payload for submitting a new product.
#[derive(Debug, Clone)]
pub struct ProductSubmission {
    pub name: String,
    pub tagline: String,
    pub category: String,
    /// Inbox of the maker, notified when the product receives a new upvote.
    pub maker_inbox: Option<InboxId>,
}

impl ProductSubmission {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagline: String::new(),
            category: String::new(),
            maker_inbox: None,
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_maker_inbox(mut self, inbox: InboxId) -> Self {
        self.maker_inbox = Some(inbox);
        self
    }
}

/// The durable product row held by the products table.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub tagline: String,
    pub category: String,
    pub maker_inbox: Option<InboxId>,
    pub upvotes: i64,
    pub points: i64,
    pub rank: Option<u32>,
    pub badges: Vec<String>,
    pub voters: HashSet<ActorId>,
}

impl Product {
    pub fn new(id: ProductId, submission: ProductSubmission) -> Self {
        Self {
            id,
            name: submission.name,
            tagline: submission.tagline,
            category: submission.category,
            maker_inbox: submission.maker_inbox,
            upvotes: 0,
            points: 0,
            rank: None,
            badges: Vec::new(),
            voters: HashSet::new(),
        }
    }

    /// Renders the row for `viewer`. Anonymous viewers get no upvote flag.
    pub fn snapshot_for(&self, viewer: Option<&ActorId>) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            tagline: self.tagline.clone(),
            category: self.category.clone(),
            upvotes: self.upvotes,
            upvoted_by_user: viewer.map(|voter| self.voters.contains(voter)),
            points: self.points,
            rank: self.rank,
            badges: self.badges.clone(),
        }
    }
}
