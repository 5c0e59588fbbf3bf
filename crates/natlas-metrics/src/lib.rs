//! # natlas-metrics: Derived Nation Metrics
//!
//! Pure functions from a [`Nation`] to per-capita ratios and composite
//! 0–100 power indices. Nothing is cached: [`compute_nation_metrics`]
//! recomputes every value on each call and holds no state, so repeated
//! calls on an unchanged nation are bit-identical.
//!
//! ## Power Indices
//!
//! | Index | Composition | Cap |
//! |-------|-------------|-----|
//! | Economic | gdp (≤40) + growth (≤30) + trade surplus (≤15) + low debt (≤15) | 100 |
//! | Military | personnel (≤30) + spending (≤40) + nuclear (20) + posture (10 or 5) | 100 |
//! | Overall | 0.40 × economic + 0.35 × military + 0.25 × soft power | none |
//!
//! The calibration constants below define what counts as a superpower on
//! the 0–100 scale. They have no deeper derivation and must not be tuned
//! without re-baselining every consumer.
//!
//! The overall index needs no cap: each input is at most 100 and the
//! weights sum to 1.

use serde::{Deserialize, Serialize};

use natlas_core::{Economy, Military, MilitaryPosture, Nation};

/// USD per billion, for converting GDP and defense figures.
const BILLION: f64 = 1_000_000_000.0;

/// GDP (billions USD) that earns the full GDP score.
pub const GDP_CEILING_BILLIONS: f64 = 30_000.0;
/// Maximum GDP sub-score.
pub const GDP_SCORE_MAX: f64 = 40.0;
/// Points per percentage point of positive GDP growth.
pub const GROWTH_MULTIPLIER: f64 = 2.0;
/// Maximum growth sub-score.
pub const GROWTH_SCORE_MAX: f64 = 30.0;
/// Trade surplus (billions USD) that earns the full trade score.
pub const TRADE_CEILING_BILLIONS: f64 = 1_000.0;
/// Maximum trade sub-score.
pub const TRADE_SCORE_MAX: f64 = 15.0;
/// Debt sub-score at zero public debt; reaches 0 at 100% of GDP.
pub const DEBT_SCORE_MAX: f64 = 15.0;

/// Active duty headcount that earns the full personnel score.
pub const PERSONNEL_CEILING: f64 = 2_000_000.0;
/// Maximum personnel sub-score.
pub const PERSONNEL_SCORE_MAX: f64 = 30.0;
/// Defense spending (billions USD) that earns the full spending score.
pub const DEFENSE_CEILING_BILLIONS: f64 = 900.0;
/// Maximum spending sub-score.
pub const SPENDING_SCORE_MAX: f64 = 40.0;
/// Flat bonus for possessing nuclear weapons.
pub const NUCLEAR_BONUS: f64 = 20.0;
/// Posture bonus for [`MilitaryPosture::Aggressive`].
pub const AGGRESSIVE_POSTURE_BONUS: f64 = 10.0;
/// Posture bonus for every other posture.
pub const DEFAULT_POSTURE_BONUS: f64 = 5.0;

/// Weight of the economic index in the overall index.
pub const ECONOMIC_WEIGHT: f64 = 0.4;
/// Weight of the military index in the overall index.
pub const MILITARY_WEIGHT: f64 = 0.35;
/// Weight of soft power in the overall index.
pub const SOFT_POWER_WEIGHT: f64 = 0.25;

/// Upper bound of the economic and military indices.
pub const INDEX_MAX: f64 = 100.0;

/// All derived metrics for one nation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationMetrics {
    /// GDP per person in USD.
    pub gdp_per_capita: f64,
    /// Active plus reserve personnel per 1000 population.
    pub military_per_capita: f64,
    /// Defense spending per person in USD.
    pub defense_per_capita: f64,
    pub economic_power_index: f64,
    pub military_power_index: f64,
    pub overall_power_index: f64,
}

/// GDP per capita in USD. Zero when population is zero.
pub fn gdp_per_capita(nation: &Nation) -> f64 {
    per_person(nation.economy.gdp * BILLION, nation.demographics.population)
}

/// Active plus reserve personnel per 1000 population. Zero when population
/// is zero.
pub fn military_per_capita(nation: &Nation) -> f64 {
    let personnel = nation.military.active_duty as f64 + nation.military.reserves as f64;
    per_person(personnel, nation.demographics.population) * 1000.0
}

/// Defense spending per capita in USD. Zero when population is zero.
pub fn defense_per_capita(nation: &Nation) -> f64 {
    per_person(nation.military.defense * BILLION, nation.demographics.population)
}

fn per_person(amount: f64, population: u64) -> f64 {
    if population == 0 {
        return 0.0;
    }
    amount / population as f64
}

/// Economic power index, 0–100.
pub fn economic_power_index(nation: &Nation) -> f64 {
    economic_index(&nation.economy)
}

fn economic_index(economy: &Economy) -> f64 {
    let gdp_score = (economy.gdp / GDP_CEILING_BILLIONS * GDP_SCORE_MAX).min(GDP_SCORE_MAX);
    // Contraction earns nothing rather than a penalty.
    let growth_score = (economy.gdp_growth_rate * GROWTH_MULTIPLIER)
        .max(0.0)
        .min(GROWTH_SCORE_MAX);
    let trade_score = if economy.trade_balance > 0.0 {
        (economy.trade_balance / TRADE_CEILING_BILLIONS * TRADE_SCORE_MAX).min(TRADE_SCORE_MAX)
    } else {
        0.0
    };
    let debt_score = (DEBT_SCORE_MAX - economy.public_debt / 100.0 * DEBT_SCORE_MAX).max(0.0);

    (gdp_score + growth_score + trade_score + debt_score).min(INDEX_MAX)
}

/// Military power index, 0–100.
pub fn military_power_index(nation: &Nation) -> f64 {
    military_index(&nation.military)
}

fn military_index(military: &Military) -> f64 {
    let personnel_score = (military.active_duty as f64 / PERSONNEL_CEILING * PERSONNEL_SCORE_MAX)
        .min(PERSONNEL_SCORE_MAX);
    let spending_score =
        (military.defense / DEFENSE_CEILING_BILLIONS * SPENDING_SCORE_MAX).min(SPENDING_SCORE_MAX);
    let nuclear_bonus = if military.nuclear_weapons {
        NUCLEAR_BONUS
    } else {
        0.0
    };

    (personnel_score + spending_score + nuclear_bonus + posture_bonus(military.military_posture))
        .min(INDEX_MAX)
}

/// Bonus points for a military posture.
///
/// Only `Aggressive` is singled out; the other four postures share the
/// same flat bonus. This is the calibrated behavior, not a graded scale.
pub fn posture_bonus(posture: MilitaryPosture) -> f64 {
    match posture {
        MilitaryPosture::Aggressive => AGGRESSIVE_POSTURE_BONUS,
        MilitaryPosture::Defensive
        | MilitaryPosture::Neutral
        | MilitaryPosture::Expansionist
        | MilitaryPosture::Isolationist => DEFAULT_POSTURE_BONUS,
    }
}

/// Overall power index: weighted blend of the economic index, the military
/// index, and soft power.
pub fn overall_power_index(nation: &Nation) -> f64 {
    economic_power_index(nation) * ECONOMIC_WEIGHT
        + military_power_index(nation) * MILITARY_WEIGHT
        + nation.diplomacy.soft_power * SOFT_POWER_WEIGHT
}

/// Compute every derived metric for `nation`.
pub fn compute_nation_metrics(nation: &Nation) -> NationMetrics {
    NationMetrics {
        gdp_per_capita: gdp_per_capita(nation),
        military_per_capita: military_per_capita(nation),
        defense_per_capita: defense_per_capita(nation),
        economic_power_index: economic_power_index(nation),
        military_power_index: military_power_index(nation),
        overall_power_index: overall_power_index(nation),
    }
}
