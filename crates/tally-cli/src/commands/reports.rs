//! Report command implementations

use std::path::Path;

use anyhow::Result;
use tally_core::recommend::{RecommendationEngine, RuleContext, Severity};
use tally_core::report;

use super::load_store;

pub fn cmd_dashboard(file: &Path) -> Result<()> {
    let store = load_store(file)?;
    let incomes = store.list_incomes();
    let expenses = store.list_expenses();
    let summary = report::dashboard_summary(&incomes, &expenses);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💰 Tally Dashboard            │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Income sources:  {}", incomes.len());
    println!("  Monthly income:  ${:.2}", summary.monthly_income);
    println!();
    println!("  Expenses:        {}", expenses.len());
    println!("  Total spent:     ${:.2}", summary.total_expenses);
    println!();

    for breakdown in &summary.categories {
        let marker = if breakdown.over_target { "⚠️ " } else { "  " };
        println!(
            "  {}{:<8} ${:>10.2}  {:>5.1}% of income (target {:.0}%)",
            marker,
            breakdown.category.to_string(),
            breakdown.total,
            breakdown.share_of_income,
            breakdown.target_share,
        );
    }
    println!();

    Ok(())
}

pub fn cmd_performance(file: &Path) -> Result<()> {
    let store = load_store(file)?;
    let incomes = store.list_incomes();
    let expenses = store.list_expenses();

    let summary = report::performance_summary(&incomes, &expenses);
    let engine = RecommendationEngine::new();
    let recommendations = engine.evaluate_all(&RuleContext::new(&incomes, &expenses));

    println!();
    println!("📈 Performance");
    println!("   ─────────────────────────────");
    println!("   Monthly income:  ${:.2}", summary.monthly_income);
    println!("   Annual income:   ${:.2}", summary.annual_income);
    println!("   Total spent:     ${:.2}", summary.total_expenses);
    println!(
        "   Saved (future):  ${:.2} ({:.1}% of spending)",
        summary.future_total, summary.savings_share
    );
    println!();

    if recommendations.is_empty() {
        println!("✅ No recommendations. Your budget looks healthy!");
        return Ok(());
    }

    println!("💡 Recommendations");
    for rec in &recommendations {
        let icon = match rec.severity {
            Severity::Opportunity => "💡",
            Severity::Warning => "⚠️ ",
            Severity::Alert => "🚨",
        };
        println!("   {} {} - {}", icon, rec.title, rec.message);
    }
    println!();

    Ok(())
}
