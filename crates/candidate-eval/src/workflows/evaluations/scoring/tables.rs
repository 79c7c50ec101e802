use serde::{Deserialize, Serialize};

use super::super::domain::{JobFamily, ScoreSet};

/// Rating dimensions shared by every job family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Technical,
    Problem,
    Safety,
    Communication,
    Culture,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Technical,
        Dimension::Problem,
        Dimension::Safety,
        Dimension::Communication,
        Dimension::Culture,
    ];

    pub fn rating(self, scores: &ScoreSet) -> i32 {
        match self {
            Dimension::Technical => scores.technical,
            Dimension::Problem => scores.problem,
            Dimension::Safety => scores.safety,
            Dimension::Communication => scores.communication,
            Dimension::Culture => scores.culture,
        }
    }
}

/// Per-family dimension weights. A dimension missing from `entries` weighs 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    pub entries: &'static [(Dimension, f64)],
}

impl WeightVector {
    pub fn weight(&self, dimension: Dimension) -> f64 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == dimension)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }
}

/// Percentage cutoffs; `consider_min <= hire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub hire: u8,
    pub consider_min: u8,
}

// qaqc: technical stands in for standards/compliance.
// safety_security: technical stands in for HSE regulations.
// data_analytics: safety stands in for integrity/confidentiality.
// proc_fin_hr_admin: technical stands in for process accuracy.
// sales_bd: technical stands in for market/product knowledge.
pub const WEIGHT_TABLE: [(JobFamily, WeightVector); 7] = [
    (
        JobFamily::EngineeringProjects,
        WeightVector {
            entries: &[
                (Dimension::Technical, 0.40),
                (Dimension::Problem, 0.25),
                (Dimension::Safety, 0.15),
                (Dimension::Communication, 0.10),
                (Dimension::Culture, 0.10),
            ],
        },
    ),
    (
        JobFamily::QaqcMetrology,
        WeightVector {
            entries: &[
                (Dimension::Technical, 0.40),
                (Dimension::Problem, 0.20),
                (Dimension::Safety, 0.20),
                (Dimension::Communication, 0.10),
                (Dimension::Culture, 0.10),
            ],
        },
    ),
    (
        JobFamily::OperationsPlanning,
        WeightVector {
            entries: &[
                (Dimension::Technical, 0.30),
                (Dimension::Problem, 0.25),
                (Dimension::Safety, 0.20),
                (Dimension::Communication, 0.10),
                (Dimension::Culture, 0.15),
            ],
        },
    ),
    (
        JobFamily::SafetySecurity,
        WeightVector {
            entries: &[
                (Dimension::Technical, 0.40),
                (Dimension::Problem, 0.25),
                (Dimension::Safety, 0.15),
                (Dimension::Communication, 0.10),
                (Dimension::Culture, 0.10),
            ],
        },
    ),
    (
        JobFamily::DataAnalytics,
        WeightVector {
            entries: &[
                (Dimension::Technical, 0.40),
                (Dimension::Problem, 0.30),
                (Dimension::Safety, 0.10),
                (Dimension::Communication, 0.15),
                (Dimension::Culture, 0.05),
            ],
        },
    ),
    (
        JobFamily::ProcFinHrAdmin,
        WeightVector {
            entries: &[
                (Dimension::Technical, 0.35),
                (Dimension::Problem, 0.10),
                (Dimension::Safety, 0.20),
                (Dimension::Communication, 0.25),
                (Dimension::Culture, 0.10),
            ],
        },
    ),
    (
        JobFamily::SalesBd,
        WeightVector {
            entries: &[
                (Dimension::Technical, 0.25),
                (Dimension::Problem, 0.10),
                (Dimension::Safety, 0.10),
                (Dimension::Communication, 0.35),
                (Dimension::Culture, 0.20),
            ],
        },
    ),
];

pub const THRESHOLD_TABLE: [(JobFamily, ThresholdPair); 7] = [
    (
        JobFamily::EngineeringProjects,
        ThresholdPair {
            hire: 70,
            consider_min: 60,
        },
    ),
    (
        JobFamily::QaqcMetrology,
        ThresholdPair {
            hire: 75,
            consider_min: 65,
        },
    ),
    (
        JobFamily::OperationsPlanning,
        ThresholdPair {
            hire: 70,
            consider_min: 60,
        },
    ),
    (
        JobFamily::SafetySecurity,
        ThresholdPair {
            hire: 75,
            consider_min: 65,
        },
    ),
    (
        JobFamily::DataAnalytics,
        ThresholdPair {
            hire: 70,
            consider_min: 60,
        },
    ),
    (
        JobFamily::ProcFinHrAdmin,
        ThresholdPair {
            hire: 70,
            consider_min: 60,
        },
    ),
    (
        JobFamily::SalesBd,
        ThresholdPair {
            hire: 70,
            consider_min: 60,
        },
    ),
];

fn lookup<T: Copy>(table: &[(JobFamily, T)], family: JobFamily) -> Option<T> {
    table
        .iter()
        .find(|(entry, _)| *entry == family)
        .map(|(_, value)| *value)
}

pub fn weights_for(family: JobFamily) -> WeightVector {
    lookup(&WEIGHT_TABLE, family)
        .or_else(|| lookup(&WEIGHT_TABLE, JobFamily::FALLBACK))
        .unwrap_or(WeightVector { entries: &[] })
}

pub fn thresholds_for(family: JobFamily) -> ThresholdPair {
    lookup(&THRESHOLD_TABLE, family)
        .or_else(|| lookup(&THRESHOLD_TABLE, JobFamily::FALLBACK))
        .unwrap_or(ThresholdPair {
            hire: 70,
            consider_min: 60,
        })
}
