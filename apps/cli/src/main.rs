#![deny(warnings)]

//! Headless CLI for running cash-runway scenarios from files.

use anyhow::{Context, Result};
use runway_core::*;
use runway_sim::{compare_scenarios_with_horizon, health_metrics, simulate_with_config};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct Args {
    scenarios: Vec<PathBuf>,
    months: Option<u32>,
    json: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Args {
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => out.scenarios.extend(it.next().map(PathBuf::from)),
            "--months" => out.months = it.next().and_then(|s| s.parse().ok()),
            "--json" => out.json = true,
            _ => {}
        }
    }
    out
}

/// Load and validate a scenario; `.yaml`/`.yml` files go through serde_yaml, the rest through serde_json.
fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let scenario: Scenario = if is_yaml {
        serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
    };
    validate_scenario(&scenario).with_context(|| format!("validating {}", path.display()))?;
    Ok(scenario)
}

/// Undefined ratios (zero denominator) print as "n/a".
fn format_health(m: &HealthMetrics) -> String {
    let undefined = || "n/a".to_string();
    format!(
        "health: {} | revenue trend: {} | expense efficiency: {} | burn efficiency: {}% | profitability: {}%",
        m.runway_health,
        m.revenue_growth_trend
            .map(|v| format!("{}%", v.round_dp(1)))
            .unwrap_or_else(undefined),
        m.expense_efficiency
            .map(|v| format!("{}%", v.round_dp(1)))
            .unwrap_or_else(undefined),
        m.cash_burn_efficiency.round_dp(1),
        m.profitability_score.round_dp(1),
    )
}

fn print_result(r: &ScenarioResult) {
    let s = &r.summary;
    let break_even = s
        .break_even_month
        .map(|m| format!("month {m}"))
        .unwrap_or_else(|| "never".to_string());
    println!(
        "{} | months: {} | runway: {} | break-even: {} | revenue: ${} | expenses: ${} | avg burn: ${} | profitable: {} | cash max/min: ${}/${}",
        r.scenario.name,
        r.projections.len(),
        s.total_runway_months,
        break_even,
        s.total_revenue.round_dp(2),
        s.total_expenses.round_dp(2),
        s.average_burn_rate.round_dp(2),
        s.profitable_months,
        s.max_cash_position.round_dp(2),
        s.min_cash_position.round_dp(2),
    );
    println!("  {}", format_health(&health_metrics(&r.projections, s)));
    for risk in &r.risks {
        println!("  risk: {risk}");
    }
    for opp in &r.opportunities {
        println!("  opportunity: {opp}");
    }
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1));
    info!(?args, "starting CLI");

    let mut cfg = SimConfig::default();
    if let Some(months) = args.months {
        cfg.horizon_months = months;
    }

    let scenarios = if args.scenarios.is_empty() {
        vec![Scenario::base(ScenarioId::random(&mut rand::thread_rng()))]
    } else {
        args.scenarios
            .iter()
            .map(|p| load_scenario(p))
            .collect::<Result<Vec<_>>>()?
    };

    if let [single] = scenarios.as_slice() {
        let result = simulate_with_config(single, &cfg);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_result(&result);
        }
        return Ok(());
    }

    let cmp = compare_scenarios_with_horizon(&scenarios, cfg.horizon_months);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&cmp)?);
        return Ok(());
    }
    for r in &cmp.results {
        print_result(r);
    }
    if let Some(w) = &cmp.comparison {
        println!(
            "Comparison | best runway: {} | best cash flow: {} | most profitable: {} | riskiest: {}",
            w.best_runway, w.best_cash_flow, w.most_profitable, w.riskiest
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn args(list: &[&str]) -> Args {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_repeated_scenarios_and_flags() {
        let a = args(&["--scenario", "a.json", "--months", "36", "--scenario", "b.yaml", "--json"]);
        assert_eq!(a.scenarios, vec![PathBuf::from("a.json"), PathBuf::from("b.yaml")]);
        assert_eq!(a.months, Some(36));
        assert!(a.json);
    }

    #[test]
    fn bad_month_value_is_ignored() {
        assert_eq!(args(&["--months", "soon"]).months, None);
        assert_eq!(args(&[]), Args::default());
    }

    #[test]
    fn health_line_marks_undefined_ratios() {
        let mut s = Scenario::base(ScenarioId("idle".to_string()));
        s.monthly_expenses = Decimal::ZERO;
        s.team_size = 0;
        s.marketing_spend = Decimal::ZERO;
        let r = runway_sim::simulate(&s, 24);
        let line = format_health(&health_metrics(&r.projections, &r.summary));
        assert!(line.starts_with("health: healthy"));
        assert!(line.contains("revenue trend: 0"));
        assert!(line.contains("expense efficiency: n/a"));
        assert!(line.contains("profitability: 100"));
    }

    #[test]
    fn loads_json_and_yaml_scenarios() {
        let dir = tempfile::tempdir().unwrap();
        let base = Scenario::base(ScenarioId("file".to_string()));

        let json_path = dir.path().join("base.json");
        std::fs::write(&json_path, serde_json::to_string(&base).unwrap()).unwrap();
        assert_eq!(load_scenario(&json_path).unwrap(), base);

        let yaml_path = dir.path().join("lean.yml");
        let mut f = std::fs::File::create(&yaml_path).unwrap();
        writeln!(
            f,
            "id: lean\nname: Lean\ncurrentCash: 250000\nmonthlyRevenue: 40000\nmonthlyExpenses: 20000\n\
             teamSize: 3\navgSalary: 7000\nmarketingSpend: 2000\npriceIncrease: 5\n\
             revenueGrowthRate: 3\nexpenseGrowthRate: 1\n\
             seasonalityFactor: [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1.2, 1.4]\n\
             oneTimeRevenue:\n  - month: 4\n    amount: 15000\n    description: Grant"
        )
        .unwrap();
        let lean = load_scenario(&yaml_path).unwrap();
        assert_eq!(lean.name, "Lean");
        assert_eq!(lean.team_cost(), Decimal::new(21_000, 0));
        assert_eq!(lean.one_time_revenue.len(), 1);
        assert!(lean.one_time_expenses.is_empty());
    }

    #[test]
    fn invalid_scenario_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = Scenario::base(ScenarioId("bad".to_string()));
        bad.current_cash = Decimal::new(-5, 0);
        let path = dir.path().join("bad.json");
        std::fs::write(&path, serde_json::to_string(&bad).unwrap()).unwrap();
        let err = load_scenario(&path).unwrap_err();
        assert!(format!("{err:#}").contains("negative monetary value"));
        assert!(load_scenario(&dir.path().join("missing.json")).is_err());
    }
}
