use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artist profile as entered through the profile wizard
///
/// Every field the matcher consults is optional free text; artists fill in
/// as much or as little as they like. List-valued fields
/// (`artistic_focus`, `interested_regions`) are comma-separated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "careerStage", default)]
    pub career_stage: Option<String>,
    #[serde(rename = "artisticFocus", default)]
    pub artistic_focus: Option<String>,
    #[serde(rename = "interestedRegions", default)]
    pub interested_regions: Option<String>,
}

/// A funding, exhibition, residency, or prize opportunity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub organizer: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub link: Option<String>,
    pub eligibility: String,
    #[serde(rename = "artTypes", default)]
    pub art_types: Option<String>,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub prize: Option<String>,
}

impl Opportunity {
    /// True when a real prize is attached; the feed uses "NA" as its
    /// no-prize sentinel.
    pub fn has_prize(&self) -> bool {
        matches!(self.prize.as_deref(), Some(p) if !p.is_empty() && p != "NA")
    }
}

/// An opportunity annotated with its match score and the rules that fired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredOpportunity {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Points awarded by each matching rule
///
/// Defaults are the production policy. The overall score is still capped at
/// 100 after all rules fire.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPoints {
    pub location: u8,
    pub region_focus: u8,
    pub open_eligibility: u8,
    pub career_stage: u8,
    pub early_career: u8,
    pub open_mediums: u8,
    pub per_medium: u8,
    pub medium_cap: u8,
    pub prize_funding: u8,
    pub deadline_soon: u8,
    pub deadline_window: u8,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            location: 30,
            region_focus: 25,
            open_eligibility: 20,
            career_stage: 25,
            early_career: 20,
            open_mediums: 20,
            per_medium: 8,
            medium_cap: 25,
            prize_funding: 10,
            deadline_soon: 5,
            deadline_window: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_prize_sentinel() {
        let mut opp = Opportunity {
            id: "1".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            organizer: String::new(),
            location: "Sydney".to_string(),
            kind: "grant".to_string(),
            deadline: Utc::now(),
            link: None,
            eligibility: String::new(),
            art_types: None,
            fee: None,
            prize: Some("NA".to_string()),
        };
        assert!(!opp.has_prize());

        opp.prize = Some("$5,000".to_string());
        assert!(opp.has_prize());

        opp.prize = None;
        assert!(!opp.has_prize());

        opp.prize = Some(String::new());
        assert!(!opp.has_prize());
    }
}
