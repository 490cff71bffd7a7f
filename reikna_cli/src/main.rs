//! # Reikna CLI
//!
//! Answers one free-text material question from the command line:
//!
//! ```text
//! reikna_cli [--catalog <file.toml>] [--settings <file.toml>] [--json] [query...]
//! ```
//!
//! With no query words the query is read from stdin. Exit status is 2 for an
//! unclassifiable query and 1 for invalid input or configuration. A capacity
//! violation is a normal result and exits 0.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use reikna_core::calculations::PavingStonesResult;
use reikna_core::{classify_intent, compute, CalcError, CalculationResult, Constrained, ReferenceData, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "reikna_cli")]
#[command(version)]
#[command(about = "Estimate construction materials from a free-text Icelandic question")]
struct Args {
    /// Reference-data override (TOML)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Print only the JSON result
    #[arg(long)]
    json: bool,

    /// The question; read from stdin when omitted
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,
}

fn prompt_query() -> String {
    print!("Spurning: ");
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn report_error(e: &CalcError) {
    eprintln!("Villa: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn summary(result: &CalculationResult) -> Vec<String> {
    match result {
        CalculationResult::PavingStones(PavingStonesResult::Units(u)) => vec![
            format!("{}: {:.2} m²", u.product_name, u.area_m2),
            format!("Steinar: {} ({} + 5% afföll)", u.number_of_stones, u.raw_count),
            format!("Kostnaður: {:.0} kr.", u.total_cost),
        ],
        CalculationResult::PavingStones(PavingStonesResult::AreaPriced(a)) => vec![
            format!("{}: {:.2} m² á {:.0} kr./m²", a.product_name, a.area_m2, a.price_per_m2),
            format!("Kostnaður: {:.0} kr.", a.total_cost),
            a.note.clone(),
        ],
        CalculationResult::BaseSand(s) => vec![
            format!("Rúmmál: {:.3} m³ ({:.0} kg)", s.volume_m3, s.weight_kg),
            format!("Stórsekkir: {} ({:.0} kr.)", s.big_bags, s.total_cost),
        ],
        CalculationResult::JointSand(j) => vec![
            format!("Fúgur: {:.1} m, {:.1} kg", j.total_joint_length_m, j.weight_kg),
            format!(
                "{}: {} pokar ({:.0} kr.)",
                j.recommended.product_name, j.recommended.bags, j.recommended.total_cost
            ),
            j.note.clone(),
        ],
        CalculationResult::ConcreteVolume(c) => vec![
            format!("Rúmmál: {:.3} m³ ({:.3} m³ með afföllum)", c.volume_m3, c.volume_with_waste_m3),
            format!("Steypubílar: {}, {}", c.truck_loads, c.strength_class),
        ],
        CalculationResult::ColumnVolume(c) | CalculationResult::ColumnWithPostVolume(c) => vec![format!(
            "Rúmmál: {:.3} m³ ({:.3} m³ með afföllum)",
            c.volume_m3, c.volume_with_waste_m3
        )],
        CalculationResult::ConcreteTypeRecommendation(r) => vec![
            format!("Steypa: {} ({})", r.strength_class, r.exposure_class),
            format!("Kolefnisspor: {:.0} kg CO₂/m³", r.carbon_footprint_kg_per_m3),
        ],
        CalculationResult::CarbonFootprint(c) => vec![
            format!("{:.2} m³ {}: {:.0} kg CO₂", c.volume_m3, c.strength_class, c.base_total_kg),
            format!("Lágkolefnissteypa sparar {:.0} kg ({:.0}%)", c.savings_kg, c.savings_percent),
        ],
        CalculationResult::ConstructionTime(t) => vec![
            format!("{} {:.0} m²: {} dagar ({} vikur)", t.building_type, t.area_m2, t.prefab_days, t.prefab_weeks),
            format!("Hefðbundin bygging: {} dagar", t.traditional_days),
        ],
        CalculationResult::ConstructionCost(c) => vec![
            format!("{} {:.0} m²: {:.0} kr.", c.building_type, c.area_m2, c.total_cost),
            format!("Sparnaður miðað við hefðbundna byggingu: {:.0} kr.", c.savings),
        ],
        CalculationResult::MaterialRequirements(m) => vec![
            format!("Steypa: {:.1} m³, bendistál: {:.0} kg", m.concrete_m3, m.reinforcement_kg),
            format!("Veggeiningar: {}, gólfeiningar: {}", m.wall_elements, m.floor_elements),
        ],
        CalculationResult::EnvironmentalImpact(e) => {
            let mut lines = vec![format!("CO₂: {:.0} kg (sparar {:.0} kg)", e.total_co2_kg, e.co2_saved_kg)];
            lines.extend(e.recommendations.iter().map(|r| format!("- {}", r)));
            lines
        }
        CalculationResult::ProjectTimeline(t) => {
            let mut lines: Vec<String> = t
                .phases
                .iter()
                .map(|p| format!("{:<12} dagur {:>3}, {} dagar", p.name, p.start_day, p.duration_days))
                .collect();
            lines.push(format!("Samtals: {} dagar", t.total_days));
            lines
        }
        CalculationResult::BinShelterRequirements(b) => vec![
            format!("{} tunnur ({} l): {} skýli, rými fyrir {}", b.bin_count, b.bin_liters, b.shelter_count, b.total_capacity),
            format!("Undirstöður: {:.3} m³", b.foundation.total_volume_m3),
            format!("Verð: {:.0} kr.", b.total_price),
        ],
        CalculationResult::PostSpacing(p) => vec![
            format!("{}: {} stk. á {:.2} m bili", p.post_name, p.post_count, p.actual_spacing_m),
            format!("Verð: {:.0} kr.", p.total_price),
        ],
        CalculationResult::BenchPlacement(Constrained::Satisfied(b)) => vec![
            format!("{} × {} ({}), {} sæti", b.bench_count, b.bench_name, b.arrangement.display_name(), b.total_seats),
            format!("Svæði: {:.1} m²", b.required_area_m2),
        ],
        CalculationResult::BenchPlacement(Constrained::Violation(v)) => vec![v.message.clone()],
        CalculationResult::PlanterCalculation(p) => {
            let mut lines = vec![
                format!("{}: {} stk.", p.planter_name, p.recommended_count),
                format!("Mold: {:.2} m³", p.soil_volume_m3),
            ];
            lines.extend(p.note.clone());
            lines
        }
        CalculationResult::StepConfiguration(s) => {
            let layout = s.layout();
            let mut lines = vec![format!(
                "{} þrep, uppstig {:.1} cm, framstig {:.1} cm",
                layout.step_count, layout.riser_height_cm, layout.tread_depth_cm
            )];
            lines.extend(layout.warnings.iter().cloned());
            lines
        }
        CalculationResult::BarrierRequirements(b) => vec![
            format!("{}: {} stk.", b.barrier_name, b.count),
            format!("Verð: {:.0} kr.", b.total_price),
        ],
        CalculationResult::PriceCalculation(p) => vec![
            format!("{} × {} ({:.0} kr./{})", p.quantity, p.product_name, p.unit_price, p.unit),
            format!("Samtals: {:.0} {} með vsk.", p.total, p.currency),
        ],
    }
}

fn load_config(args: &Args) -> Result<(Settings, ReferenceData), CalcError> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let data = match &args.catalog {
        Some(path) => ReferenceData::load(path)?,
        None => ReferenceData::builtin().clone(),
    };
    Ok((settings, data))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() { ExitCode::from(1) } else { ExitCode::SUCCESS };
        }
    };

    let (settings, data) = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            return ExitCode::from(1);
        }
    };

    let query = if args.query.is_empty() {
        prompt_query()
    } else {
        args.query.join(" ")
    };

    let Some(intent) = classify_intent(&query) else {
        eprintln!("Gat ekki greint spurninguna: \"{}\"", query);
        return ExitCode::from(2);
    };

    match compute(intent.kind, &intent.parameters, &settings, &data) {
        Ok(result) => {
            if !args.json {
                println!("═══════════════════════════════════════");
                println!("  {}", intent.kind.display_name().to_uppercase());
                println!("═══════════════════════════════════════");
                for line in summary(&result) {
                    println!("  {}", line);
                }
                println!();
                println!("JSON Output:");
            }
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::from(1)
        }
    }
}
