//! # Shelfwise CLI Application
//!
//! Terminal front end for the shelf engine.
//!
//! ```text
//! shelf_cli [inventory.json] [settings.json]
//! ```
//!
//! Without arguments a small built-in inventory is used. The inventory file
//! is a JSON array of `{ "id", "weight_kg", "value" }` objects; the optional
//! settings file follows `shelf_core::settings::ShelfSettings`.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;
use tracing::info;

use shelf_core::reports::{materialize, PlacementReport};
use shelf_core::{
    load_settings, CapacityGrid, EnumerationResult, ExhaustiveEnumerator, Inventory, ItemRecord,
    OptimalSelector, SelectionReport, ShelfError, ShelfResult, ShelfSettings,
};

/// Everything one run produces, for the JSON dump at the end.
#[derive(Serialize)]
struct RunOutput<'a> {
    settings: &'a ShelfSettings,
    selection: &'a SelectionReport,
    combinations: &'a EnumerationResult,
    placement: &'a PlacementReport,
    shelf: &'a CapacityGrid,
}

fn demo_inventory() -> ShelfResult<Inventory> {
    Inventory::from_items(vec![
        ItemRecord::new("978-0-13-110362-7", 1.2, 45)?,
        ItemRecord::new("978-0-262-03384-8", 2.3, 90)?,
        ItemRecord::new("978-1-59327-828-1", 0.9, 40)?,
        ItemRecord::new("978-0-201-63361-0", 1.1, 55)?,
        ItemRecord::new("978-0-596-00712-6", 1.6, 38)?,
        ItemRecord::new("978-1-4493-7332-0", 1.4, 42)?,
        ItemRecord::new("978-0-321-57351-3", 3.1, 70)?,
        ItemRecord::new("978-1-7185-0044-0", 1.0, 39)?,
    ])
}

fn load_inventory(path: &Path) -> ShelfResult<Inventory> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ShelfError::file_error("read", path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| ShelfError::SerializationError {
        reason: format!("Invalid inventory JSON in {}: {}", path.display(), e),
    })
}

fn print_header(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
}

fn run(args: &[String]) -> ShelfResult<()> {
    let inventory = match args.first() {
        Some(path) => load_inventory(Path::new(path))?,
        None => {
            println!("No inventory file given. Using the built-in demo inventory.");
            println!();
            demo_inventory()?
        }
    };
    let settings = match args.get(1) {
        Some(path) => load_settings(Path::new(path))?,
        None => ShelfSettings::default(),
    };
    info!(items = inventory.len(), "inventory loaded");

    print_header("INVENTORY (by value, highest first)");
    for item in shelf_core::ranking::sort_by_value_desc(inventory.items()) {
        println!("  {}", item);
    }
    println!();

    let selector = OptimalSelector::new(settings.selector)?;
    let selection = selector.select(inventory.items());

    print_header("OPTIMAL SELECTION");
    println!(
        "Budget: {:.2} kg over the first {} item(s)",
        settings.selector.max_budget_weight_kg, selection.considered
    );
    if selection.best.is_empty() {
        println!("  No item fits the budget.");
    } else {
        for item in &selection.best.items {
            println!("  {}", item);
        }
    }
    println!(
        "Total: {:.2} kg, value {} ({} feasible combination(s), {} node(s) explored)",
        selection.best.total_weight_kg,
        selection.best.total_value,
        selection.feasible.len(),
        selection.stats.nodes_explored
    );
    println!();

    let enumerator = ExhaustiveEnumerator::new(settings.enumerator)?;
    let combinations = enumerator.enumerate(inventory.items());

    print_header("FIXED-SIZE COMBINATIONS");
    println!(
        "{} combination(s) of {} item(s) within {:.2} kg",
        combinations.len(),
        combinations.combination_size,
        combinations.max_budget_weight_kg
    );
    for (i, combination) in combinations.iter().enumerate() {
        println!(
            "  {}. {:?} | {:.2} kg | value {}",
            i + 1,
            combination.ids(),
            combination.total_weight_kg,
            combination.total_value
        );
    }
    println!();

    let mut shelf = CapacityGrid::new("OPTIMAL", settings.grid)?;
    let placement = materialize(&mut shelf, &selection.best.items);

    print_header("SHELF FROM OPTIMAL SELECTION");
    print!("{}", shelf);
    for (id, slot) in &placement.placed {
        println!("  Placed: {} at {}", id, slot);
    }
    for (id, reason) in &placement.rejected {
        println!("  Not placed: {} - {}", id, reason);
    }
    println!();

    let output = RunOutput {
        settings: &settings,
        selection: &selection,
        combinations: &combinations,
        placement: &placement,
        shelf: &shelf,
    };
    println!("JSON Output (for LLM/API use):");
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn main() -> ExitCode {
    shelf_core::logging::init();

    println!("Shelfwise CLI - Shelf Placement and Selection");
    println!("=============================================");
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
