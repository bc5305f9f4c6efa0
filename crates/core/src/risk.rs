//! The risk classification decision table.

use medirisk_types::{Gender, RiskTier};

type Predicate = fn(usize, Gender, i32) -> bool;

/// Ordered decision table; the first matching rule wins and anything that
/// matches no rule classifies as `None`.
///
/// The Borderline rule is strictly `age > 30` while the two later over-30
/// rules use `age >= 30`: a patient aged exactly 30 with 2 to 5 triggers
/// matches nothing and falls through to `None`. Inherited from the source
/// decision logic and kept as-is pending product confirmation.
const RULES: [(Predicate, RiskTier); 8] = [
    (|triggers, _, _| triggers == 0, RiskTier::None),
    (
        |triggers, _, age| age > 30 && (2..=5).contains(&triggers),
        RiskTier::Borderline,
    ),
    (
        |triggers, gender, age| age < 30 && gender == Gender::Male && (3..5).contains(&triggers),
        RiskTier::InDanger,
    ),
    (
        |triggers, gender, age| age < 30 && gender == Gender::Female && (4..7).contains(&triggers),
        RiskTier::InDanger,
    ),
    (
        |triggers, _, age| age >= 30 && (6..=7).contains(&triggers),
        RiskTier::InDanger,
    ),
    (
        |triggers, gender, age| age < 30 && gender == Gender::Male && triggers >= 5,
        RiskTier::EarlyOnset,
    ),
    (
        |triggers, gender, age| age < 30 && gender == Gender::Female && triggers >= 7,
        RiskTier::EarlyOnset,
    ),
    (
        |triggers, _, age| age >= 30 && triggers >= 8,
        RiskTier::EarlyOnset,
    ),
];

/// Maps a trigger count, gender and age to a risk tier.
///
/// Pure and deterministic. `Gender::Unknown` never satisfies the
/// gender-specific rules, so below 30 it can only classify as `None`.
pub fn classify(trigger_count: usize, gender: Gender, age: i32) -> RiskTier {
    RULES
        .iter()
        .find(|(applies, _)| applies(trigger_count, gender, age))
        .map(|&(_, tier)| tier)
        .unwrap_or(RiskTier::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_triggers_is_always_none() {
        for age in [0, 18, 29, 30, 31, 58, 90] {
            for gender in [Gender::Male, Gender::Female, Gender::Unknown] {
                assert_eq!(classify(0, gender, age), RiskTier::None);
            }
        }
    }

    #[test]
    fn over_thirty_with_two_to_five_triggers_is_borderline() {
        assert_eq!(classify(2, Gender::Male, 58), RiskTier::Borderline);
        assert_eq!(classify(5, Gender::Female, 31), RiskTier::Borderline);
        assert_eq!(classify(5, Gender::Unknown, 31), RiskTier::Borderline);
    }

    #[test]
    fn young_male_in_danger_band() {
        assert_eq!(classify(4, Gender::Male, 18), RiskTier::InDanger);
        assert_eq!(classify(3, Gender::Male, 29), RiskTier::InDanger);
        // Five triggers tips a young male into Early onset.
        assert_eq!(classify(5, Gender::Male, 18), RiskTier::EarlyOnset);
    }

    #[test]
    fn young_female_in_danger_band() {
        assert_eq!(classify(4, Gender::Female, 25), RiskTier::InDanger);
        assert_eq!(classify(6, Gender::Female, 25), RiskTier::InDanger);
        assert_eq!(classify(7, Gender::Female, 25), RiskTier::EarlyOnset);
        // Three triggers is below the female In Danger band.
        assert_eq!(classify(3, Gender::Female, 25), RiskTier::None);
    }

    #[test]
    fn thirty_and_over_bands() {
        assert_eq!(classify(6, Gender::Female, 30), RiskTier::InDanger);
        assert_eq!(classify(7, Gender::Male, 45), RiskTier::InDanger);
        assert_eq!(classify(8, Gender::Unknown, 30), RiskTier::EarlyOnset);
        assert_eq!(classify(11, Gender::Male, 72), RiskTier::EarlyOnset);
    }

    #[test]
    fn age_30_with_3_triggers_falls_through_to_none() {
        // The Borderline rule requires age strictly over 30 and the over-30
        // In Danger rule needs at least 6 triggers.
        for gender in [Gender::Male, Gender::Female, Gender::Unknown] {
            assert_eq!(classify(3, gender, 30), RiskTier::None);
        }
        assert_eq!(classify(2, Gender::Male, 30), RiskTier::None);
        assert_eq!(classify(5, Gender::Female, 30), RiskTier::None);
    }

    #[test]
    fn unknown_gender_under_thirty_never_escalates() {
        for triggers in 1..=11 {
            assert_eq!(classify(triggers, Gender::Unknown, 22), RiskTier::None);
        }
    }
}
