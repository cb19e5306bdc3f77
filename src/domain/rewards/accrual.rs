//! Accrual models converting office attendance into remote-day credit.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DayCredits;

use super::RewardError;

/// How office attendance converts into spendable remote-day credit.
///
/// A closed set: each variant carries exactly the parameters it needs, so
/// adding a model is a source-visible, exhaustively-checked change and an
/// unknown model name fails deserialization instead of silently falling
/// back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum AccrualModel {
    /// Credits `1/ratio` of a day per qualifying office day.
    RatioBased { office_to_remote_ratio: u32 },

    /// The fixed 3:1 policy. Equivalent to `RatioBased` with ratio 3,
    /// retained as a distinct named policy for teams that pin it.
    SimpleThreeToOne,

    /// No per-day credit; a lump bonus lands each time the streak reaches
    /// a multiple of the threshold (the threshold counter resets, the
    /// streak itself does not).
    StreakBased {
        bonus_threshold: u32,
        bonus_amount: DayCredits,
    },
}

/// The credit one qualifying office day produces under a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccrualCredit {
    /// Per-day credit.
    pub base: DayCredits,

    /// Streak bonus, when one fired on this day.
    pub bonus: Option<DayCredits>,
}

impl AccrualCredit {
    /// Total amount to add to the balance.
    pub fn total(&self) -> DayCredits {
        match self.bonus {
            Some(bonus) => self.base.plus(bonus),
            None => self.base,
        }
    }
}

impl AccrualModel {
    /// Checks the model's parameters.
    ///
    /// Zero ratios and zero thresholds would make accrual undefined; they
    /// are configuration defects, not recoverable states.
    pub fn validate(&self) -> Result<(), RewardError> {
        match self {
            AccrualModel::RatioBased {
                office_to_remote_ratio: 0,
            } => Err(RewardError::configuration(
                "office_to_remote_ratio must be at least 1",
            )),
            AccrualModel::StreakBased {
                bonus_threshold: 0, ..
            } => Err(RewardError::configuration(
                "bonus_threshold must be at least 1",
            )),
            _ => Ok(()),
        }
    }

    /// Computes the credit for one qualifying office day at the given
    /// streak (the streak as of this day, already updated).
    pub fn credit_for(&self, streak: u32) -> Result<AccrualCredit, RewardError> {
        self.validate()?;

        match self {
            AccrualModel::RatioBased {
                office_to_remote_ratio,
            } => {
                let base = DayCredits::fraction(1, *office_to_remote_ratio)
                    .map_err(|e| RewardError::configuration(e.to_string()))?;
                Ok(AccrualCredit { base, bonus: None })
            }
            AccrualModel::SimpleThreeToOne => {
                let base = DayCredits::fraction(1, 3)
                    .map_err(|e| RewardError::configuration(e.to_string()))?;
                Ok(AccrualCredit { base, bonus: None })
            }
            AccrualModel::StreakBased {
                bonus_threshold,
                bonus_amount,
            } => {
                let bonus = if streak > 0 && streak % bonus_threshold == 0 {
                    Some(*bonus_amount)
                } else {
                    None
                };
                Ok(AccrualCredit {
                    base: DayCredits::ZERO,
                    bonus,
                })
            }
        }
    }
}

impl Default for AccrualModel {
    fn default() -> Self {
        AccrualModel::SimpleThreeToOne
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_based_credits_the_exact_fraction() {
        let model = AccrualModel::RatioBased {
            office_to_remote_ratio: 4,
        };
        let credit = model.credit_for(1).unwrap();
        assert_eq!(credit.base, DayCredits::fraction(1, 4).unwrap());
        assert!(credit.bonus.is_none());
    }

    #[test]
    fn simple_three_to_one_credits_one_third() {
        let credit = AccrualModel::SimpleThreeToOne.credit_for(1).unwrap();
        assert_eq!(credit.base, DayCredits::fraction(1, 3).unwrap());
    }

    #[test]
    fn zero_ratio_is_a_configuration_error() {
        let model = AccrualModel::RatioBased {
            office_to_remote_ratio: 0,
        };
        assert!(matches!(
            model.credit_for(1),
            Err(RewardError::Configuration { .. })
        ));
        assert!(model.validate().is_err());
    }

    #[test]
    fn zero_threshold_is_a_configuration_error() {
        let model = AccrualModel::StreakBased {
            bonus_threshold: 0,
            bonus_amount: DayCredits::ONE_DAY,
        };
        assert!(matches!(
            model.credit_for(1),
            Err(RewardError::Configuration { .. })
        ));
    }

    #[test]
    fn streak_based_awards_nothing_between_thresholds() {
        let model = AccrualModel::StreakBased {
            bonus_threshold: 5,
            bonus_amount: DayCredits::ONE_DAY,
        };

        for streak in [1, 2, 3, 4, 6, 7, 9] {
            let credit = model.credit_for(streak).unwrap();
            assert_eq!(credit.total(), DayCredits::ZERO, "streak {}", streak);
        }
    }

    #[test]
    fn streak_based_awards_at_every_threshold_multiple() {
        let model = AccrualModel::StreakBased {
            bonus_threshold: 5,
            bonus_amount: DayCredits::ONE_DAY,
        };

        for streak in [5, 10, 15] {
            let credit = model.credit_for(streak).unwrap();
            assert_eq!(credit.bonus, Some(DayCredits::ONE_DAY), "streak {}", streak);
            assert_eq!(credit.total(), DayCredits::ONE_DAY);
        }
    }

    #[test]
    fn accrual_credit_total_sums_base_and_bonus() {
        let credit = AccrualCredit {
            base: DayCredits::fraction(1, 3).unwrap(),
            bonus: Some(DayCredits::fraction(2, 3).unwrap()),
        };
        assert_eq!(credit.total(), DayCredits::ONE_DAY);
    }

    #[test]
    fn serializes_with_model_tag() {
        let model = AccrualModel::RatioBased {
            office_to_remote_ratio: 3,
        };
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"model\":\"ratio_based\""));

        let restored: AccrualModel = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, model);
    }

    #[test]
    fn unknown_model_name_fails_deserialization() {
        let json = r#"{"model":"double_points"}"#;
        let result: Result<AccrualModel, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
