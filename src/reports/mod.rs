use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fleetindex::api::{ScenarioResult, ValueProposition};
use fleetindex::config::SavingsAssumptions;
use fleetindex::money::format_money;
use fleetindex::savings::CostDriver;
use fleetindex::scoring::{Headline, ScoringResponse};
use strum::IntoEnumIterator;
use tracing::info;

pub fn banner() {
    info!("🚚 Fleet Performance Index (FPI)");
}

pub fn footer() {
    info!("Directional estimates. Calibrate with customer fleet data before quoting figures.");
}

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn savings_table(view: &ValueProposition) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Driver").add_attribute(Attribute::Bold),
        Cell::new("Per Vehicle (Annual)"),
        Cell::new(format!("Fleet ({})", view.period_label)).fg(Color::Cyan),
    ]);

    for driver in CostDriver::iter() {
        table.add_row(vec![
            Cell::new(driver.label()),
            Cell::new(format_money(
                view.estimate.driver(driver).per_vehicle,
                view.currency,
            )),
            Cell::new(format_money(view.totals.driver(driver), view.currency)).fg(Color::Cyan),
        ]);
    }

    let per_vehicle_total: f64 = CostDriver::iter()
        .map(|d| view.estimate.driver(d).per_vehicle)
        .sum();

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format_money(per_vehicle_total, view.currency)),
        Cell::new(&view.formatted.total)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);

    right_align(&mut table, 1..=2);

    println!(
        "\nTotal {} Savings (fleet of {}): {}",
        view.period_label, view.estimate.fleet_size, view.formatted.total
    );
    println!("{}", table);
}

pub fn assumptions_table(a: &SavingsAssumptions) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Assumption").add_attribute(Attribute::Bold),
        Cell::new("Before"),
        Cell::new("After"),
        Cell::new("Unit Cost"),
    ]);

    table.add_row(vec![
        Cell::new("Annual distance / vehicle"),
        Cell::new(format!("{:.0}", a.annual_distance)),
        Cell::new(""),
        Cell::new(""),
    ]);

    for driver in CostDriver::iter() {
        let inputs = a.driver(driver);
        let label = match driver {
            CostDriver::Fuel => "Fuel (per 100 units)",
            CostDriver::Brakes => "Brakes (replacement distance)",
            CostDriver::Tyres => "Tyres (replacement distance)",
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{}", inputs.before)),
            Cell::new(format!("{}", inputs.after)),
            Cell::new(format!("{}", inputs.unit_cost)),
        ]);
    }

    right_align(&mut table, 1..=3);
    println!("{}", table);
}

pub fn scenario_table(results: &[ScenarioResult]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let period = results
        .first()
        .map(|r| r.proposition.period_label.as_str())
        .unwrap_or("Annual");

    table.set_header(vec![
        Cell::new("Scenario").add_attribute(Attribute::Bold),
        Cell::new("Fleet"),
        Cell::new("Fuel"),
        Cell::new("Brakes"),
        Cell::new("Tyres"),
        Cell::new(format!("Total ({})", period)).fg(Color::Green),
    ]);

    for r in results {
        let p = &r.proposition;
        table.add_row(vec![
            Cell::new(&r.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{}", p.estimate.fleet_size)),
            Cell::new(&p.formatted.fuel),
            Cell::new(&p.formatted.brakes),
            Cell::new(&p.formatted.tyres),
            Cell::new(&p.formatted.total).fg(Color::Green),
        ]);
    }

    right_align(&mut table, 1..=5);
    println!("\n{}", table);
}

fn opt_num(v: Option<f64>) -> String {
    v.map(|n| format!("{}", n)).unwrap_or_else(|| "—".to_string())
}

pub fn scoring_result(res: &ScoringResponse) {
    if res.is_empty() {
        println!("\nNo result fields returned by the scoring service.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let (headline_label, headline_value) = match res.headline() {
        Some(Headline::ProjectedMonthlySavings(v)) => ("Projected Monthly Savings", format!("{}", v)),
        Some(Headline::FpiPercent(v)) => ("FPI%", format!("{}", v)),
        None => ("Headline", "—".to_string()),
    };

    table.add_row(vec![
        Cell::new(headline_label).add_attribute(Attribute::Bold),
        Cell::new(headline_value)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Run ID"),
        Cell::new(res.run_id.as_deref().unwrap_or("—")),
    ]);
    for (label, value) in [
        ("Fleet Size", res.fleet_size),
        ("Baseline Index", res.baseline_index),
        ("Target Index", res.target_index),
        ("Delta Index", res.delta_index),
        ("Confidence", res.confidence),
    ] {
        if value.is_some() {
            table.add_row(vec![Cell::new(label), Cell::new(opt_num(value))]);
        }
    }

    println!("\n{}", table);

    if !res.explain.is_empty() {
        println!("\nExplanation:");
        for line in &res.explain {
            println!("  • {}", line);
        }
    }

    if let Some(explanation) = &res.explanation {
        println!("\nKey Drivers:");
        println!(
            "{}",
            serde_json::to_string_pretty(explanation).unwrap_or_else(|_| explanation.to_string())
        );
    }
}
