use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a signed-in user, as issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kinds of action that carry a daily limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Upvoting,
    Sharing,
    Following,
    Commenting,
}

impl ActionKind {
    /// Plural noun used in limit messages ("10 upvotes").
    pub fn noun(self) -> &'static str {
        match self {
            ActionKind::Upvoting => "upvotes",
            ActionKind::Sharing => "shares",
            ActionKind::Following => "follows",
            ActionKind::Commenting => "comments",
        }
    }
}

/// Usage counter for one action kind. The backend keeps `used <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub used: u32,
    pub max: u32,
}

impl Quota {
    pub fn new(used: u32, max: u32) -> Self {
        Self { used, max }
    }
}

/// Per-kind daily quotas. A `None` entry means the kind is unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLimits {
    #[serde(default)]
    pub upvoting: Option<Quota>,
    #[serde(default)]
    pub sharing: Option<Quota>,
    #[serde(default)]
    pub following: Option<Quota>,
    #[serde(default)]
    pub commenting: Option<Quota>,
}

impl DailyLimits {
    pub fn get(&self, kind: ActionKind) -> Option<Quota> {
        match kind {
            ActionKind::Upvoting => self.upvoting,
            ActionKind::Sharing => self.sharing,
            ActionKind::Following => self.following,
            ActionKind::Commenting => self.commenting,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, kind: ActionKind, quota: Quota) -> Self {
        let slot = match kind {
            ActionKind::Upvoting => &mut self.upvoting,
            ActionKind::Sharing => &mut self.sharing,
            ActionKind::Following => &mut self.following,
            ActionKind::Commenting => &mut self.commenting,
        };
        *slot = Some(quota);
        self
    }
}

/// The signed-in user as seen by the engagement core.
///
/// A snapshot taken from the session provider; the core never writes to it. Anonymous
/// viewers are represented by the absence of an `Actor` (`Option<Actor>::None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    #[serde(default, rename = "dailyLimits")]
    pub daily_limits: Option<DailyLimits>,
}

impl Actor {
    /// An actor without any daily limits.
    pub fn new(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            daily_limits: None,
        }
    }

    pub fn with_limits(mut self, limits: DailyLimits) -> Self {
        self.daily_limits = Some(limits);
        self
    }

    /// The quota for `kind`, if one is recorded.
    pub fn quota(&self, kind: ActionKind) -> Option<Quota> {
        self.daily_limits.as_ref().and_then(|limits| limits.get(kind))
    }
}
