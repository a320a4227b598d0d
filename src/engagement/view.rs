use crate::model::ProductId;
use serde::Serialize;

/// Display variant of a badge chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

/// Every badge renders with the default variant; the name does not select a style.
pub fn badge_variant(_badge_name: &str) -> BadgeVariant {
    BadgeVariant::Default
}

pub fn rank_label(rank: u32) -> String {
    format!("#{rank}")
}

pub fn points_label(points: i64) -> String {
    format!("{points} pts")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub name: String,
    pub variant: BadgeVariant,
}

/// Everything a product card needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub product_id: ProductId,
    pub name: String,
    pub tagline: String,
    pub upvote_count: i64,
    pub has_upvoted: bool,
    pub is_following: bool,
    /// False for anonymous viewers and while an upvote is in flight.
    pub upvote_enabled: bool,
    pub rank_label: Option<String>,
    pub points_label: String,
    pub badges: Vec<BadgeView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variant_is_total_and_constant() {
        for name in ["Top Hunter", "Early Climber", "", "unknown-badge"] {
            assert_eq!(badge_variant(name), BadgeVariant::Default);
        }
    }

    #[test]
    fn test_labels_take_zero_and_large_values() {
        assert_eq!(rank_label(0), "#0");
        assert_eq!(rank_label(u32::MAX), "#4294967295");
        assert_eq!(points_label(0), "0 pts");
        assert_eq!(points_label(-3), "-3 pts");
        assert_eq!(points_label(9_000_000_000), "9000000000 pts");
    }
}
