#![deny(warnings)]

//! Core domain models and invariants for the runway planner.
//!
//! This crate defines the serializable scenario inputs and projection
//! outputs shared by the simulator and its callers, plus validation and
//! authoring helpers used when scenarios come from files or user edits.

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Projection horizon used when the caller does not pick one.
pub const DEFAULT_HORIZON_MONTHS: u32 = 24;

/// Number of calendar slots in a seasonality profile.
pub const SEASONALITY_PERIOD: usize = 12;

/// Opaque caller-supplied scenario identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub String);

impl ScenarioId {
    /// Generate a UUID-v4 shaped identifier from the supplied RNG.
    ///
    /// Pass a seeded `ChaCha8Rng` to get reproducible ids in tests.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut b = [0u8; 16];
        rng.fill(&mut b[..]);
        b[6] = (b[6] & 0x0f) | 0x40;
        b[8] = (b[8] & 0x3f) | 0x80;
        let hex: String = b.iter().map(|x| format!("{x:02x}")).collect();
        Self(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single-month, non-recurring amount landing on a projected month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeEvent {
    /// Projected month (1-based) the amount lands on.
    pub month: u32,
    /// Amount in USD (>= 0).
    pub amount: Decimal,
    /// Free-form label shown next to the event.
    pub description: String,
}

/// Financial assumptions for one what-if scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    /// Cash on hand at the start of month 1 (>= 0).
    pub current_cash: Decimal,
    /// Recurring monthly revenue before price, growth and seasonality.
    pub monthly_revenue: Decimal,
    /// Base operating expenses excluding team and marketing.
    pub monthly_expenses: Decimal,
    pub team_size: u32,
    /// Average monthly salary per head.
    pub avg_salary: Decimal,
    /// Fixed monthly marketing add-on.
    pub marketing_spend: Decimal,
    /// One-time price change in percent applied to the revenue baseline.
    pub price_increase: Decimal,
    /// Monthly compounding revenue growth in percent.
    pub revenue_growth_rate: Decimal,
    /// Monthly compounding base-expense growth in percent.
    pub expense_growth_rate: Decimal,
    /// Revenue multipliers indexed by `(month - 1) % 12`.
    pub seasonality_factor: [Decimal; SEASONALITY_PERIOD],
    #[serde(default)]
    pub one_time_expenses: Vec<OneTimeEvent>,
    #[serde(default)]
    pub one_time_revenue: Vec<OneTimeEvent>,
}

impl Scenario {
    /// The stock "Base Scenario" users start editing from.
    pub fn base(id: ScenarioId) -> Self {
        Self {
            id,
            name: "Base Scenario".to_string(),
            current_cash: Decimal::new(500_000, 0),
            monthly_revenue: Decimal::new(50_000, 0),
            monthly_expenses: Decimal::new(35_000, 0),
            team_size: 5,
            avg_salary: Decimal::new(8_000, 0),
            marketing_spend: Decimal::new(5_000, 0),
            price_increase: Decimal::ZERO,
            revenue_growth_rate: Decimal::ZERO,
            expense_growth_rate: Decimal::ZERO,
            seasonality_factor: [Decimal::ONE; SEASONALITY_PERIOD],
            one_time_expenses: vec![],
            one_time_revenue: vec![],
        }
    }

    /// Monthly payroll: `team_size * avg_salary`.
    pub fn team_cost(&self) -> Decimal {
        Decimal::from(self.team_size).saturating_mul(self.avg_salary)
    }

    /// Seasonality multiplier for a 1-based projected month; month 13 maps back to slot 0.
    pub fn seasonality_for(&self, month: u32) -> Decimal {
        let idx = (month.saturating_sub(1) as usize) % SEASONALITY_PERIOD;
        self.seasonality_factor[idx]
    }

    /// Copy of this scenario under a new id, named "<name> (Copy)".
    pub fn duplicate(&self, id: ScenarioId) -> Self {
        Self {
            id,
            name: format!("{} (Copy)", self.name),
            ..self.clone()
        }
    }

    pub fn add_one_time_expense(&mut self, event: OneTimeEvent) -> Result<(), ValidationError> {
        validate_new_event(&event)?;
        self.one_time_expenses.push(event);
        Ok(())
    }

    pub fn add_one_time_revenue(&mut self, event: OneTimeEvent) -> Result<(), ValidationError> {
        validate_new_event(&event)?;
        self.one_time_revenue.push(event);
        Ok(())
    }

    /// Remove the expense at `index`, returning it; `None` when out of range.
    pub fn remove_one_time_expense(&mut self, index: usize) -> Option<OneTimeEvent> {
        (index < self.one_time_expenses.len()).then(|| self.one_time_expenses.remove(index))
    }

    /// Remove the revenue entry at `index`, returning it; `None` when out of range.
    pub fn remove_one_time_revenue(&mut self, index: usize) -> Option<OneTimeEvent> {
        (index < self.one_time_revenue.len()).then(|| self.one_time_revenue.remove(index))
    }
}

/// Simulation configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimConfig {
    /// Months to project (default: 24). Zero is treated as one.
    #[serde(default = "default_horizon")]
    pub horizon_months: u32,
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

/// Months of cash left at the current burn rate.
///
/// `Unbounded` is reported when cash is positive and nothing is being
/// spent, and when the month count does not fit in a `u32`. Every
/// `Months(n)` orders below `Unbounded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Runway {
    Months(u32),
    Unbounded,
}

impl Runway {
    /// True when runway is finite and strictly shorter than `months`.
    pub fn is_below(self, months: u32) -> bool {
        matches!(self, Runway::Months(n) if n < months)
    }
}

impl Ord for Runway {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Runway::Months(a), Runway::Months(b)) => a.cmp(b),
            (Runway::Months(_), Runway::Unbounded) => Ordering::Less,
            (Runway::Unbounded, Runway::Months(_)) => Ordering::Greater,
            (Runway::Unbounded, Runway::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Runway {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runway::Months(n) => write!(f, "{n} mo"),
            Runway::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Cash position for one projected month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    /// 1-based month index.
    pub month: u32,
    /// Seasonal recurring revenue plus one-time revenue.
    pub revenue: Decimal,
    /// Base + team + marketing + one-time expenses.
    pub expenses: Decimal,
    /// `revenue - expenses`, signed.
    pub net_cash_flow: Decimal,
    /// Cash balance after this month, floored at zero.
    pub cumulative_cash: Decimal,
    /// Equal to `expenses`.
    pub burn_rate: Decimal,
    pub runway: Runway,
    pub team_cost: Decimal,
    pub marketing_cost: Decimal,
    pub base_expenses: Decimal,
    /// Set only on the month cash first reaches zero.
    pub is_runway_end: bool,
}

/// Aggregate health metrics over a projection sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_runway_months: u32,
    pub break_even_month: Option<u32>,
    pub max_cash_position: Decimal,
    pub min_cash_position: Decimal,
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub average_burn_rate: Decimal,
    pub profitable_months: u32,
}

/// Runway band shown next to the headline runway figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunwayHealth {
    /// More than 12 months.
    Healthy,
    /// More than 6 months.
    Moderate,
    Critical,
}

impl RunwayHealth {
    pub fn from_months(months: u32) -> Self {
        match months {
            m if m > 12 => RunwayHealth::Healthy,
            m if m > 6 => RunwayHealth::Moderate,
            _ => RunwayHealth::Critical,
        }
    }
}

impl fmt::Display for RunwayHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunwayHealth::Healthy => "healthy",
            RunwayHealth::Moderate => "moderate",
            RunwayHealth::Critical => "critical",
        })
    }
}

/// Dashboard ratios derived from a projection and its summary, in percent.
///
/// A ratio whose denominator is zero is `None` rather than infinite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Change from first to last month's revenue; 0 for a single month.
    pub revenue_growth_trend: Option<Decimal>,
    /// Total revenue over total expenses.
    pub expense_efficiency: Option<Decimal>,
    /// First month's revenue over average burn; 0 when nothing is burned.
    pub cash_burn_efficiency: Decimal,
    /// Share of months with positive net cash flow.
    pub profitability_score: Decimal,
    pub runway_health: RunwayHealth,
}

/// Risk advisories, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskFlag {
    CriticalRunway,
    DecliningRevenue,
    ExpensesOutpacingRevenue,
    HighBurnRate,
    HighTeamCostRatio,
}

impl RiskFlag {
    pub const ALL: [RiskFlag; 5] = [
        RiskFlag::CriticalRunway,
        RiskFlag::DecliningRevenue,
        RiskFlag::ExpensesOutpacingRevenue,
        RiskFlag::HighBurnRate,
        RiskFlag::HighTeamCostRatio,
    ];

    pub fn message(self) -> &'static str {
        match self {
            RiskFlag::CriticalRunway => "Critical runway: Less than 6 months of cash remaining",
            RiskFlag::DecliningRevenue => "Declining revenue trend may accelerate cash burn",
            RiskFlag::ExpensesOutpacingRevenue => "Expenses growing faster than revenue",
            RiskFlag::HighBurnRate => "High burn rate relative to revenue",
            RiskFlag::HighTeamCostRatio => "Team costs represent high percentage of revenue",
        }
    }
}

/// Opportunity advisories, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpportunityFlag {
    PriceOptimization,
    RevenueGrowth,
    PathToProfitability,
    MarketingHeadroom,
    PositiveCashGeneration,
}

impl OpportunityFlag {
    pub const ALL: [OpportunityFlag; 5] = [
        OpportunityFlag::PriceOptimization,
        OpportunityFlag::RevenueGrowth,
        OpportunityFlag::PathToProfitability,
        OpportunityFlag::MarketingHeadroom,
        OpportunityFlag::PositiveCashGeneration,
    ];

    pub fn message(self) -> &'static str {
        match self {
            OpportunityFlag::PriceOptimization => "Consider price optimization to improve margins",
            OpportunityFlag::RevenueGrowth => {
                "Revenue growth initiatives could extend runway significantly"
            }
            OpportunityFlag::PathToProfitability => {
                "Strong path to profitability - consider growth investments"
            }
            OpportunityFlag::MarketingHeadroom => {
                "Marketing spend is conservative - growth opportunity exists"
            }
            OpportunityFlag::PositiveCashGeneration => "Scenario shows positive cash generation",
        }
    }
}

// Flags travel as their advisory text so callers see plain string lists.
macro_rules! advisory_string_serde {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.message())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(self.message())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let text = String::deserialize(d)?;
                $ty::ALL
                    .into_iter()
                    .find(|flag| flag.message() == text)
                    .ok_or_else(|| {
                        serde::de::Error::custom(format!("unknown {}: {text}", $what))
                    })
            }
        }
    };
}

advisory_string_serde!(RiskFlag, "risk");
advisory_string_serde!(OpportunityFlag, "opportunity");

/// Full outcome of simulating one scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub projections: Vec<MonthlyProjection>,
    pub summary: Summary,
    pub risks: Vec<RiskFlag>,
    pub opportunities: Vec<OpportunityFlag>,
}

/// Names of the scenarios that won each comparison category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonWinners {
    pub best_runway: String,
    pub best_cash_flow: String,
    pub most_profitable: String,
    pub riskiest: String,
}

/// Side-by-side results; `comparison` is `None` only for an empty input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub results: Vec<ScenarioResult>,
    pub comparison: Option<ComparisonWinners>,
}

/// Validation errors for scenario inputs.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Scenario name must not be blank.
    #[error("scenario name must not be empty")]
    EmptyName,
    /// Money field must be non-negative.
    #[error("negative monetary value in {0}")]
    NegativeMoney(&'static str),
    /// Seasonality multipliers must be non-negative.
    #[error("seasonality factor at index {0} is negative")]
    NegativeSeasonality(usize),
    /// Events are keyed to 1-based months.
    #[error("one-time event month must be >= 1")]
    InvalidEventMonth,
    /// Newly added events need a positive amount.
    #[error("one-time event amount must be > 0")]
    NonPositiveEventAmount,
    /// Newly added events need a label.
    #[error("one-time event description must not be empty")]
    EmptyEventDescription,
}

fn validate_new_event(e: &OneTimeEvent) -> Result<(), ValidationError> {
    if e.month == 0 {
        return Err(ValidationError::InvalidEventMonth);
    }
    if e.amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveEventAmount);
    }
    if e.description.trim().is_empty() {
        return Err(ValidationError::EmptyEventDescription);
    }
    Ok(())
}

/// Validate a stored event (zero amounts are tolerated, negative are not).
pub fn validate_event(e: &OneTimeEvent) -> Result<(), ValidationError> {
    if e.month == 0 {
        return Err(ValidationError::InvalidEventMonth);
    }
    if e.amount < Decimal::ZERO {
        return Err(ValidationError::NegativeMoney("one-time event"));
    }
    Ok(())
}

/// Validate a scenario loaded from an untrusted source.
///
/// The simulator accepts any scenario; this is for callers that want to
/// reject nonsensical input before running it.
pub fn validate_scenario(s: &Scenario) -> Result<(), ValidationError> {
    if s.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let money = [
        ("currentCash", s.current_cash),
        ("monthlyRevenue", s.monthly_revenue),
        ("monthlyExpenses", s.monthly_expenses),
        ("avgSalary", s.avg_salary),
        ("marketingSpend", s.marketing_spend),
    ];
    for (field, value) in money {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeMoney(field));
        }
    }
    if let Some(i) = s.seasonality_factor.iter().position(|f| *f < Decimal::ZERO) {
        return Err(ValidationError::NegativeSeasonality(i));
    }
    for e in s.one_time_expenses.iter().chain(&s.one_time_revenue) {
        validate_event(e)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn base() -> Scenario {
        Scenario::base(ScenarioId("base".to_string()))
    }

    fn event(month: u32, amount: i64, description: &str) -> OneTimeEvent {
        OneTimeEvent {
            month,
            amount: Decimal::new(amount, 0),
            description: description.to_string(),
        }
    }

    #[test]
    fn base_scenario_is_valid() {
        let s = base();
        validate_scenario(&s).unwrap();
        assert_eq!(s.team_cost(), Decimal::new(40_000, 0));
    }

    #[test]
    fn serde_roundtrip_uses_camel_case() {
        let mut s = base();
        s.add_one_time_expense(event(6, 100_000, "Office move")).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"currentCash\""));
        assert!(json.contains("\"oneTimeExpenses\""));
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn scenario_accepts_numeric_json() {
        let json = r#"{
            "id": "abc", "name": "From UI",
            "currentCash": 1000, "monthlyRevenue": 10.5, "monthlyExpenses": 0,
            "teamSize": 2, "avgSalary": 100, "marketingSpend": 0,
            "priceIncrease": -5, "revenueGrowthRate": 0, "expenseGrowthRate": 0,
            "seasonalityFactor": [1,1,1,1,1,1,1,1,1,1,1,1.5]
        }"#;
        let s: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(s.monthly_revenue, Decimal::new(105, 1));
        assert_eq!(s.seasonality_factor[11], Decimal::new(15, 1));
        assert!(s.one_time_revenue.is_empty());
    }

    #[test]
    fn seasonality_cycles_every_twelve_months() {
        let mut s = base();
        s.seasonality_factor[0] = Decimal::new(2, 0);
        assert_eq!(s.seasonality_for(1), Decimal::new(2, 0));
        assert_eq!(s.seasonality_for(13), Decimal::new(2, 0));
        assert_eq!(s.seasonality_for(12), Decimal::ONE);
    }

    #[test]
    fn random_ids_are_seeded_and_uuid_shaped() {
        let a = ScenarioId::random(&mut ChaCha8Rng::seed_from_u64(7));
        let b = ScenarioId::random(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.0.len(), 36);
        assert_eq!(a.0.as_bytes()[14], b'4');
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_ne!(ScenarioId::random(&mut rng), ScenarioId::random(&mut rng));
    }

    #[test]
    fn duplicate_renames_and_reids() {
        let s = base();
        let copy = s.duplicate(ScenarioId("other".to_string()));
        assert_eq!(copy.name, "Base Scenario (Copy)");
        assert_eq!(copy.id.0, "other");
        assert_eq!(copy.current_cash, s.current_cash);
    }

    #[test]
    fn add_event_rejects_incomplete_entries() {
        let mut s = base();
        assert_eq!(
            s.add_one_time_expense(event(3, 0, "nothing")),
            Err(ValidationError::NonPositiveEventAmount)
        );
        assert_eq!(
            s.add_one_time_revenue(event(3, 10, "  ")),
            Err(ValidationError::EmptyEventDescription)
        );
        assert_eq!(
            s.add_one_time_revenue(event(0, 10, "grant")),
            Err(ValidationError::InvalidEventMonth)
        );
        s.add_one_time_revenue(event(3, 10, "grant")).unwrap();
        assert_eq!(s.one_time_revenue.len(), 1);
    }

    #[test]
    fn remove_event_by_index() {
        let mut s = base();
        s.add_one_time_expense(event(2, 5, "a")).unwrap();
        s.add_one_time_expense(event(4, 6, "b")).unwrap();
        assert_eq!(s.remove_one_time_expense(5), None);
        let removed = s.remove_one_time_expense(0).unwrap();
        assert_eq!(removed.description, "a");
        assert_eq!(s.one_time_expenses[0].description, "b");
        assert_eq!(s.remove_one_time_revenue(0), None);
    }

    #[test]
    fn validation_rejects_negative_inputs() {
        let mut s = base();
        s.marketing_spend = Decimal::new(-1, 0);
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::NegativeMoney("marketingSpend"))
        );
        let mut s = base();
        s.seasonality_factor[4] = Decimal::new(-1, 1);
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::NegativeSeasonality(4))
        );
        let mut s = base();
        s.name = String::new();
        assert_eq!(validate_scenario(&s), Err(ValidationError::EmptyName));
    }

    #[test]
    fn runway_ordering_and_threshold() {
        assert!(Runway::Months(1_000) < Runway::Unbounded);
        assert!(Runway::Months(3) < Runway::Months(4));
        assert!(Runway::Months(5).is_below(6));
        assert!(!Runway::Months(6).is_below(6));
        assert!(!Runway::Unbounded.is_below(6));
    }

    #[test]
    fn flags_serialize_as_advisory_text() {
        let json = serde_json::to_string(&vec![RiskFlag::CriticalRunway]).unwrap();
        assert_eq!(
            json,
            "[\"Critical runway: Less than 6 months of cash remaining\"]"
        );
        let back: Vec<RiskFlag> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![RiskFlag::CriticalRunway]);
        assert!(serde_json::from_str::<OpportunityFlag>("\"nope\"").is_err());
    }

    #[test]
    fn runway_health_bands() {
        assert_eq!(RunwayHealth::from_months(13), RunwayHealth::Healthy);
        assert_eq!(RunwayHealth::from_months(12), RunwayHealth::Moderate);
        assert_eq!(RunwayHealth::from_months(7), RunwayHealth::Moderate);
        assert_eq!(RunwayHealth::from_months(6), RunwayHealth::Critical);
        assert_eq!(RunwayHealth::from_months(0), RunwayHealth::Critical);
    }

    #[test]
    fn default_summary_is_zeroed() {
        let s = Summary::default();
        assert_eq!(s.total_runway_months, 0);
        assert_eq!(s.break_even_month, None);
        assert_eq!(s.average_burn_rate, Decimal::ZERO);
        assert_eq!(s.max_cash_position, Decimal::ZERO);
    }

    #[test]
    fn sim_config_defaults_horizon() {
        let cfg: SimConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SimConfig::default());
        assert_eq!(cfg.horizon_months, 24);
    }

    proptest! {
        #[test]
        fn seasonality_index_wraps(month in 1u32..10_000) {
            let mut s = base();
            for (i, f) in s.seasonality_factor.iter_mut().enumerate() {
                *f = Decimal::from(i as u32);
            }
            let expected = Decimal::from((month - 1) % 12);
            prop_assert_eq!(s.seasonality_for(month), expected);
        }

        #[test]
        fn non_negative_money_validates(cash in 0i64..10_000_000,
                                        revenue in 0i64..1_000_000,
                                        team in 0u32..500) {
            let mut s = base();
            s.current_cash = Decimal::new(cash, 0);
            s.monthly_revenue = Decimal::new(revenue, 0);
            s.team_size = team;
            prop_assert!(validate_scenario(&s).is_ok());
        }
    }
}
