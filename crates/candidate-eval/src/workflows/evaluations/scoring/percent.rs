use super::super::domain::{JobFamily, ScoreSet};
use super::tables::{weights_for, Dimension};

/// Fixed divisor: a rating of 1 normalises to 0.2, not 0.
const NORMALIZATION_DIVISOR: f64 = 5.0;

/// Weighted composite of one score set as a whole percentage.
pub fn score_percent(family: JobFamily, scores: &ScoreSet) -> u8 {
    let weights = weights_for(family);
    let scores = scores.clamped();

    let composite: f64 = Dimension::ALL
        .iter()
        .map(|dimension| {
            let normalized = f64::from(dimension.rating(&scores)) / NORMALIZATION_DIVISOR;
            normalized * weights.weight(*dimension)
        })
        .sum();

    // f64::round is half away from zero, which is half-up for non-negative values.
    (composite * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_ratings_score_one_hundred_for_every_family() {
        for family in JobFamily::ALL {
            assert_eq!(score_percent(family, &ScoreSet::uniform(5)), 100, "{family}");
        }
    }

    #[test]
    fn bottom_ratings_score_twenty_for_every_family() {
        for family in JobFamily::ALL {
            assert_eq!(score_percent(family, &ScoreSet::uniform(1)), 20, "{family}");
        }
    }

    #[test]
    fn midpoint_ratings_score_sixty() {
        assert_eq!(
            score_percent(JobFamily::EngineeringProjects, &ScoreSet::uniform(3)),
            60
        );
    }

    #[test]
    fn weights_shift_the_composite() {
        let scores = ScoreSet {
            technical: 5,
            problem: 3,
            safety: 4,
            communication: 2,
            culture: 3,
        };

        // 100 * (1.0*0.40 + 0.6*0.25 + 0.8*0.15 + 0.4*0.10 + 0.6*0.10) = 77
        assert_eq!(score_percent(JobFamily::EngineeringProjects, &scores), 77);
        // 100 * (1.0*0.25 + 0.6*0.10 + 0.8*0.10 + 0.4*0.35 + 0.6*0.20) = 65
        assert_eq!(score_percent(JobFamily::SalesBd, &scores), 65);
    }

    #[test]
    fn float_noise_lands_on_whole_percent() {
        // 100 * (0.8*0.40 + 0.6*0.30 + 0.6*0.10 + 0.6*0.15 + 0.6*0.05) = 68
        let scores = ScoreSet {
            technical: 4,
            problem: 3,
            safety: 3,
            communication: 3,
            culture: 3,
        };
        assert_eq!(score_percent(JobFamily::DataAnalytics, &scores), 68);

        // 100 * (0.6*0.95 + 0.8*0.05) = 61
        let scores = ScoreSet {
            technical: 3,
            problem: 3,
            safety: 3,
            communication: 3,
            culture: 4,
        };
        assert_eq!(score_percent(JobFamily::DataAnalytics, &scores), 61);
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        let wild = ScoreSet {
            technical: 40,
            problem: 9,
            safety: 6,
            communication: 100,
            culture: 5,
        };
        assert_eq!(score_percent(JobFamily::OperationsPlanning, &wild), 100);

        let negative = ScoreSet::uniform(-4);
        assert_eq!(score_percent(JobFamily::OperationsPlanning, &negative), 20);
    }
}
