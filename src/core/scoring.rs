use chrono::{DateTime, Utc};

use crate::core::text::{contains_ci, list_tokens, present};
use crate::models::{ArtistProfile, Opportunity, ScoredOpportunity, ScoringPoints};

/// Final scores are capped here no matter how many rules fire
pub const MAX_SCORE: u8 = 100;

/// Location markers that place an opportunity in Australia: the country
/// name plus state/territory abbreviations, all matched as substrings.
const AUSTRALIAN_REGION_MARKERS: [&str; 9] = [
    "australia", "nsw", "vic", "qld", "wa", "sa", "tas", "nt", "act",
];

/// Opportunity-type bonuses; first containment match wins.
const TYPE_BONUSES: [(&str, u8, &str); 4] = [
    ("grant", 5, "Grant opportunity"),
    ("exhibition", 8, "Exhibition opportunity"),
    ("residency", 7, "Residency opportunity"),
    ("prize", 6, "Prize opportunity"),
];

/// Running tally of fired rules
///
/// The cap is applied once at the end, so a reason is still recorded when
/// the clamp later swallows its points.
#[derive(Debug, Default)]
struct Tally {
    score: u32,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, points: u8, reason: impl Into<String>) {
        self.score += u32::from(points);
        self.reasons.push(reason.into());
    }
}

/// Calculate a match score (0-100) and the reasons that contributed
///
/// Rule groups, evaluated in order:
///     location        +30 direct, +25 Australia focus (independent, both may fire)
///     career stage    +20 open / +25 stage / +20 early-career (else-chain, at most one)
///     mediums         +20 open, or min(25, matches * 8)
///     type bonus      grant +5 / exhibition +8 / residency +7 / prize +6
///     prize attached  +10
///     deadline        +5 within 30 days, +3 within 31-90 days
///
/// Deterministic and side-effect-free: `now` is an explicit argument so
/// deadline urgency can be pinned in tests. Absent optional fields disable
/// their rules rather than erroring; no input combination fails.
pub fn calculate_match_score(
    artist: &ArtistProfile,
    opportunity: &Opportunity,
    points: &ScoringPoints,
    now: DateTime<Utc>,
) -> (u8, Vec<String>) {
    let mut tally = Tally::default();

    score_location(artist, opportunity, points, &mut tally);
    score_career_stage(artist, opportunity, points, &mut tally);
    score_mediums(artist, opportunity, points, &mut tally);
    score_opportunity_type(opportunity, &mut tally);
    score_prize(opportunity, points, &mut tally);
    score_deadline(opportunity, points, now, &mut tally);

    (tally.score.min(u32::from(MAX_SCORE)) as u8, tally.reasons)
}

/// Score one (artist, opportunity) pair, returning the opportunity
/// annotated with its score and reasons
pub fn score_opportunity_match(
    artist: &ArtistProfile,
    opportunity: &Opportunity,
    points: &ScoringPoints,
    now: DateTime<Utc>,
) -> ScoredOpportunity {
    let (match_score, match_reasons) = calculate_match_score(artist, opportunity, points, now);

    ScoredOpportunity {
        opportunity: opportunity.clone(),
        match_score,
        match_reasons,
    }
}

/// Location rules: a direct hit on the artist's location or one of their
/// interested regions, plus an extra boost when the artist wants Australia
/// and the opportunity is there. The two are independent and may both fire.
fn score_location(
    artist: &ArtistProfile,
    opportunity: &Opportunity,
    points: &ScoringPoints,
    tally: &mut Tally,
) {
    let (Some(location), Some(regions)) =
        (present(&artist.location), present(&artist.interested_regions))
    else {
        return;
    };

    let region_tokens = list_tokens(regions);

    if contains_ci(&opportunity.location, location)
        || region_tokens
            .iter()
            .any(|region| contains_ci(&opportunity.location, region))
    {
        tally.add(points.location, "Location match");
    }

    if region_tokens.iter().any(|region| region == "australia")
        && AUSTRALIAN_REGION_MARKERS
            .iter()
            .any(|marker| contains_ci(&opportunity.location, marker))
    {
        tally.add(points.region_focus, "Australia focus");
    }
}

/// Career-stage rules over the opportunity's eligibility text
///
/// The sub-rules are an else-chain: at most one fires per opportunity, and
/// open-to-everyone eligibility wins over a stage-specific hit.
fn score_career_stage(
    artist: &ArtistProfile,
    opportunity: &Opportunity,
    points: &ScoringPoints,
    tally: &mut Tally,
) {
    let Some(stage) = present(&artist.career_stage) else {
        return;
    };

    let eligibility = &opportunity.eligibility;

    if contains_ci(eligibility, "all artists") || contains_ci(eligibility, "any artist") {
        tally.add(points.open_eligibility, "Open to all career stages");
    } else if contains_ci(eligibility, stage) {
        tally.add(points.career_stage, "Career stage match");
    } else if stage.eq_ignore_ascii_case("emerging") && contains_ci(eligibility, "early") {
        tally.add(points.early_career, "Suitable for emerging artists");
    }
}

/// Medium rules: accepted-anything text scores a flat bonus, otherwise
/// each of the artist's mediums found in the accepted list earns points,
/// capped per opportunity.
fn score_mediums(
    artist: &ArtistProfile,
    opportunity: &Opportunity,
    points: &ScoringPoints,
    tally: &mut Tally,
) {
    let (Some(focus), Some(art_types)) =
        (present(&artist.artistic_focus), present(&opportunity.art_types))
    else {
        return;
    };

    if contains_ci(art_types, "all mediums") || contains_ci(art_types, "all medium") {
        tally.add(points.open_mediums, "Open to all mediums");
        return;
    }

    let matches = list_tokens(focus)
        .iter()
        .filter(|medium| contains_ci(art_types, medium))
        .count();

    if matches > 0 {
        let earned = (matches as u32 * u32::from(points.per_medium))
            .min(u32::from(points.medium_cap)) as u8;
        tally.add(earned, format!("Medium match ({matches} matches)"));
    }
}

fn score_opportunity_type(opportunity: &Opportunity, tally: &mut Tally) {
    for (marker, points, reason) in TYPE_BONUSES {
        if contains_ci(&opportunity.kind, marker) {
            tally.add(points, reason);
            return;
        }
    }
}

fn score_prize(opportunity: &Opportunity, points: &ScoringPoints, tally: &mut Tally) {
    if opportunity.has_prize() {
        tally.add(points.prize_funding, "Prize/funding available");
    }
}

/// Deadline urgency: boost opportunities closing soon so time-sensitive
/// matches surface first. Passed deadlines earn nothing.
fn score_deadline(
    opportunity: &Opportunity,
    points: &ScoringPoints,
    now: DateTime<Utc>,
    tally: &mut Tally,
) {
    let days = days_until(opportunity.deadline, now);

    if (1..=30).contains(&days) {
        tally.add(points.deadline_soon, "Deadline approaching");
    } else if (31..=90).contains(&days) {
        tally.add(points.deadline_window, "Good timing");
    }
}

const MS_PER_DAY: i64 = 86_400_000;

/// Whole days until the deadline, rounded up; zero or negative once passed
#[inline]
fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (deadline - now).num_milliseconds();
    ms.div_euclid(MS_PER_DAY) + i64::from(ms.rem_euclid(MS_PER_DAY) != 0)
}

/// Human label for a score band; bands are inclusive at their lower bound
pub fn match_description(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent Match"
    } else if score >= 60 {
        "Good Match"
    } else if score >= 40 {
        "Fair Match"
    } else {
        "Possible Match"
    }
}

/// Display color tag for a score, same bands as [`match_description`]
pub fn match_color(score: u8) -> &'static str {
    if score >= 80 {
        "green"
    } else if score >= 60 {
        "blue"
    } else if score >= 40 {
        "yellow"
    } else {
        "gray"
    }
}
