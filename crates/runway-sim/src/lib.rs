#![deny(warnings)]

//! Scenario simulator: monthly cash projection and derived advisories.
//!
//! Everything here is a pure function of its inputs:
//! - `simulate` projects cash month by month and stops when it runs out
//! - `summarize` folds a projection into health metrics
//! - `health_metrics` derives the dashboard ratios from a summary
//! - `identify_risks` / `identify_opportunities` apply fixed rule sets
//! - `compare_scenarios` ranks several independent runs

use runway_core::{
    ComparisonWinners, HealthMetrics, MonthlyProjection, OneTimeEvent, OpportunityFlag, RiskFlag,
    Runway, RunwayHealth, Scenario, ScenarioComparison, ScenarioResult, SimConfig, Summary,
    DEFAULT_HORIZON_MONTHS,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

/// Runway below this many months is flagged as critical.
pub const CRITICAL_RUNWAY_MONTHS: u32 = 6;

const MAX_PREALLOCATED_MONTHS: u32 = DEFAULT_HORIZON_MONTHS * 10;

/// `max(0, 1 + pct/100)`: a percent change as a multiplier, never flipping sign.
fn pct_multiplier(pct: Decimal) -> Decimal {
    let frac = pct.checked_div(Decimal::ONE_HUNDRED).unwrap_or_default();
    Decimal::ONE.saturating_add(frac).max(Decimal::ZERO)
}

fn sum_for_month(events: &[OneTimeEvent], month: u32) -> Decimal {
    events
        .iter()
        .filter(|e| e.month == month)
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
}

/// Months of cash left, from the unfloored running balance.
pub fn runway_months(running_cash: Decimal, burn_rate: Decimal) -> Runway {
    if running_cash <= Decimal::ZERO {
        return Runway::Months(0);
    }
    match running_cash.checked_div(burn_rate) {
        Some(ratio) => ratio
            .ceil()
            .to_u32()
            .map(Runway::Months)
            .unwrap_or(Runway::Unbounded),
        None => Runway::Unbounded,
    }
}

/// Simulate with the default 24-month horizon.
pub fn simulate_default(scenario: &Scenario) -> ScenarioResult {
    simulate(scenario, DEFAULT_HORIZON_MONTHS)
}

/// Simulate using the horizon from a loaded configuration.
pub fn simulate_with_config(scenario: &Scenario, cfg: &SimConfig) -> ScenarioResult {
    simulate(scenario, cfg.horizon_months)
}

/// Project `scenario` month by month for up to `horizon_months`.
///
/// The sequence ends early on the first month whose running balance is
/// at or below zero. A zero horizon is treated as one month.
pub fn simulate(scenario: &Scenario, horizon_months: u32) -> ScenarioResult {
    let horizon = if horizon_months == 0 {
        warn!(scenario = %scenario.id, "horizon of 0 months clamped to 1");
        1
    } else {
        horizon_months
    };
    debug!(scenario = %scenario.id, horizon, "simulating scenario");

    let revenue_step = pct_multiplier(scenario.revenue_growth_rate);
    let expense_step = pct_multiplier(scenario.expense_growth_rate);
    let team_cost = scenario.team_cost();
    let marketing_cost = scenario.marketing_spend;

    // Horizon is caller-controlled; capacity is not.
    let mut projections = Vec::with_capacity(horizon.min(MAX_PREALLOCATED_MONTHS) as usize);
    let mut running_cash = scenario.current_cash;
    let mut current_revenue = scenario
        .monthly_revenue
        .saturating_mul(pct_multiplier(scenario.price_increase));
    let mut current_expenses = scenario.monthly_expenses;
    let mut runway_end_month: Option<u32> = None;

    for month in 1..=horizon {
        if month > 1 {
            current_revenue = current_revenue.saturating_mul(revenue_step);
            current_expenses = current_expenses.saturating_mul(expense_step);
        }
        let seasonal_revenue = current_revenue.saturating_mul(scenario.seasonality_for(month));
        let base_expenses = current_expenses;

        let revenue =
            seasonal_revenue.saturating_add(sum_for_month(&scenario.one_time_revenue, month));
        let expenses = base_expenses
            .saturating_add(team_cost)
            .saturating_add(marketing_cost)
            .saturating_add(sum_for_month(&scenario.one_time_expenses, month));
        let net_cash_flow = revenue.saturating_sub(expenses);

        // Canonical balance: never floored, carried into the next month as-is.
        running_cash = running_cash.saturating_add(net_cash_flow);
        let runway = runway_months(running_cash, expenses);

        let cash_out = running_cash <= Decimal::ZERO;
        let is_runway_end = cash_out && runway_end_month.is_none();
        if is_runway_end {
            runway_end_month = Some(month);
        }
        trace!(month, %net_cash_flow, %running_cash, %runway, "projected month");

        projections.push(MonthlyProjection {
            month,
            revenue,
            expenses,
            net_cash_flow,
            cumulative_cash: running_cash.max(Decimal::ZERO),
            burn_rate: expenses,
            runway,
            team_cost,
            marketing_cost,
            base_expenses,
            is_runway_end,
        });

        if cash_out {
            break;
        }
    }

    let summary = summarize(&projections, runway_end_month);
    let risks = identify_risks(scenario, &projections);
    let opportunities = identify_opportunities(scenario, &projections);
    debug!(
        scenario = %scenario.id,
        months = projections.len(),
        ?runway_end_month,
        break_even = ?summary.break_even_month,
        "simulation finished"
    );

    ScenarioResult {
        scenario: scenario.clone(),
        projections,
        summary,
        risks,
        opportunities,
    }
}

/// Fold a projection sequence into summary metrics.
///
/// `runway_end_month` is the month cash ran out, if it did. An empty
/// sequence yields `Summary::default()`.
pub fn summarize(projections: &[MonthlyProjection], runway_end_month: Option<u32>) -> Summary {
    if projections.is_empty() {
        return Summary {
            total_runway_months: runway_end_month.unwrap_or(0),
            ..Summary::default()
        };
    }
    let count = projections.len() as u32;
    let total_revenue = projections
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.revenue));
    let total_expenses = projections
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.expenses));
    let cash = projections.iter().map(|p| p.cumulative_cash);
    let max_cash_position = cash.clone().max().unwrap_or_default();
    let min_cash_position = cash.min().unwrap_or_default();

    Summary {
        total_runway_months: runway_end_month.unwrap_or(count),
        break_even_month: break_even_month(projections),
        max_cash_position,
        min_cash_position,
        total_revenue,
        total_expenses,
        average_burn_rate: total_expenses / Decimal::from(count),
        profitable_months: profitable_months(projections),
    }
}

/// First month whose net cash flow is non-negative.
pub fn break_even_month(projections: &[MonthlyProjection]) -> Option<u32> {
    projections
        .iter()
        .find(|p| p.net_cash_flow >= Decimal::ZERO)
        .map(|p| p.month)
}

/// Count of months with strictly positive net cash flow.
pub fn profitable_months(projections: &[MonthlyProjection]) -> u32 {
    projections
        .iter()
        .filter(|p| p.net_cash_flow > Decimal::ZERO)
        .count() as u32
}

/// Mean monthly net cash flow; zero for an empty sequence.
pub fn average_net_cash_flow(projections: &[MonthlyProjection]) -> Decimal {
    if projections.is_empty() {
        return Decimal::ZERO;
    }
    let total = projections
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.net_cash_flow));
    total / Decimal::from(projections.len() as u64)
}

/// `num / den * 100`, or `None` when `den` is zero.
fn percent_of(num: Decimal, den: Decimal) -> Option<Decimal> {
    num.checked_div(den).map(|r| r.saturating_mul(Decimal::ONE_HUNDRED))
}

/// Dashboard ratios for a projection and its summary.
///
/// Zero-denominator policy: growth trend and expense efficiency become
/// `None`; cash-burn efficiency and profitability score become 0.
pub fn health_metrics(projections: &[MonthlyProjection], summary: &Summary) -> HealthMetrics {
    let revenue_growth_trend = match (projections.first(), projections.last()) {
        (Some(first), Some(last)) if projections.len() > 1 => {
            percent_of(last.revenue.saturating_sub(first.revenue), first.revenue)
        }
        _ => Some(Decimal::ZERO),
    };
    let cash_burn_efficiency = projections
        .first()
        .filter(|_| summary.average_burn_rate > Decimal::ZERO)
        .and_then(|first| percent_of(first.revenue, summary.average_burn_rate))
        .unwrap_or_default();
    let profitability_score = if projections.is_empty() {
        Decimal::ZERO
    } else {
        percent_of(
            Decimal::from(summary.profitable_months),
            Decimal::from(projections.len() as u64),
        )
        .unwrap_or_default()
    };

    HealthMetrics {
        revenue_growth_trend,
        expense_efficiency: percent_of(summary.total_revenue, summary.total_expenses),
        cash_burn_efficiency,
        profitability_score,
        runway_health: RunwayHealth::from_months(summary.total_runway_months),
    }
}

/// Team cost as a share of revenue exceeds 80%.
///
/// With zero revenue the ratio is infinite when any team cost exists and
/// undefined (not flagged) when there is none.
fn team_cost_ratio_high(scenario: &Scenario) -> bool {
    let team = scenario.team_cost();
    match team.checked_div(scenario.monthly_revenue) {
        Some(ratio) => ratio > Decimal::new(8, 1),
        None => team > Decimal::ZERO,
    }
}

/// Risk rules, each evaluated independently and appended in fixed order.
pub fn identify_risks(scenario: &Scenario, projections: &[MonthlyProjection]) -> Vec<RiskFlag> {
    let mut risks = Vec::new();
    let last = projections.last();

    if last.is_some_and(|p| p.runway.is_below(CRITICAL_RUNWAY_MONTHS)) {
        risks.push(RiskFlag::CriticalRunway);
    }
    if scenario.revenue_growth_rate < Decimal::ZERO {
        risks.push(RiskFlag::DecliningRevenue);
    }
    if scenario.expense_growth_rate > scenario.revenue_growth_rate {
        risks.push(RiskFlag::ExpensesOutpacingRevenue);
    }
    let burn_ceiling = scenario.monthly_revenue.saturating_mul(Decimal::TWO);
    if last.is_some_and(|p| p.burn_rate > burn_ceiling) {
        risks.push(RiskFlag::HighBurnRate);
    }
    if team_cost_ratio_high(scenario) {
        risks.push(RiskFlag::HighTeamCostRatio);
    }
    risks
}

/// Opportunity rules, each evaluated independently and appended in fixed order.
pub fn identify_opportunities(
    scenario: &Scenario,
    projections: &[MonthlyProjection],
) -> Vec<OpportunityFlag> {
    let mut opportunities = Vec::new();

    if scenario.price_increase.is_zero() {
        opportunities.push(OpportunityFlag::PriceOptimization);
    }
    if scenario.revenue_growth_rate.is_zero() {
        opportunities.push(OpportunityFlag::RevenueGrowth);
    }
    // profitable > len / 2, kept in integers
    if profitable_months(projections) as usize * 2 > projections.len() {
        opportunities.push(OpportunityFlag::PathToProfitability);
    }
    if scenario.marketing_spend < scenario.monthly_revenue.saturating_mul(Decimal::new(2, 1)) {
        opportunities.push(OpportunityFlag::MarketingHeadroom);
    }
    if projections
        .last()
        .is_some_and(|p| p.cumulative_cash > scenario.current_cash)
    {
        opportunities.push(OpportunityFlag::PositiveCashGeneration);
    }
    opportunities
}

/// Index of the first maximum under `key`; later ties do not replace it.
fn first_max_by<T, K: PartialOrd>(items: &[T], key: impl Fn(&T) -> K) -> Option<usize> {
    let mut best: Option<(usize, K)> = None;
    for (i, item) in items.iter().enumerate() {
        let k = key(item);
        match &best {
            Some((_, bk)) if k <= *bk => {}
            _ => best = Some((i, k)),
        }
    }
    best.map(|(i, _)| i)
}

fn pick_winners(results: &[ScenarioResult]) -> Option<ComparisonWinners> {
    let best_runway = first_max_by(results, |r| r.summary.total_runway_months)?;
    let best_cash_flow = first_max_by(results, |r| average_net_cash_flow(&r.projections))?;
    let most_profitable = first_max_by(results, |r| r.summary.profitable_months)?;
    let riskiest = first_max_by(results, |r| r.risks.len())?;
    let name_at = |i: usize| results[i].scenario.name.clone();
    Some(ComparisonWinners {
        best_runway: name_at(best_runway),
        best_cash_flow: name_at(best_cash_flow),
        most_profitable: name_at(most_profitable),
        riskiest: name_at(riskiest),
    })
}

/// Simulate each scenario over the default horizon and pick category winners.
pub fn compare_scenarios(scenarios: &[Scenario]) -> ScenarioComparison {
    compare_scenarios_with_horizon(scenarios, DEFAULT_HORIZON_MONTHS)
}

/// Simulate each scenario independently and pick category winners.
///
/// Winners are chosen by linear scan; on a tie the earlier scenario wins.
pub fn compare_scenarios_with_horizon(
    scenarios: &[Scenario],
    horizon_months: u32,
) -> ScenarioComparison {
    let results: Vec<ScenarioResult> = scenarios
        .iter()
        .map(|s| simulate(s, horizon_months))
        .collect();

    let comparison = pick_winners(&results);
    debug!(
        scenarios = results.len(),
        winners = ?comparison,
        "compared scenarios"
    );

    ScenarioComparison {
        results,
        comparison,
    }
}
