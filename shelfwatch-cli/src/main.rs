use std::env;
use std::process;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use shelfwatch_pipeline::aggregate::{aggregate_batches, SummaryKey};
use shelfwatch_pipeline::expiry::ExpirationWindow;
use shelfwatch_pipeline::kpi::KpiSummary;
use shelfwatch_pipeline::loader::load_report_file;
use shelfwatch_pipeline::pipelines::buyer_view::{BuyerView, BuyerViewPipeline, PipelineConfig};
use shelfwatch_pipeline::room_filter::filter_room;
use shelfwatch_pipeline::schema::InventorySchema;
use shelfwatch_pipeline::types::ItemSummary;
use shelfwatch_tabular::RawTable;

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct BuyerViewJson {
    generated_at: String,
    as_of: String,
    window_days: u32,
    room: Option<String>,
    rows_included: usize,
    rows_excluded: usize,
    kpis: KpiJson,
    items: Vec<ItemJson>,
}

#[derive(Serialize)]
struct KpiJson {
    skus_in_stock: usize,
    dollars_on_hand: f64,
    reorder_count: usize,
    overstock_count: usize,
    expiring_count: usize,
    slow_mover_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    median_days_of_supply: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    worst_category: Option<String>,
}

#[derive(Serialize)]
struct ItemJson {
    item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    on_hand: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    earliest_expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    days_to_expire: Option<f64>,
    total_sold: f64,
    daily_run_rate: f64,
    avg_weekly_sales: f64,
    days_of_supply: f64,
    status: String,
    action: String,
    slow_mover_score: f64,
    discount_band: String,
    suggested_po_price: f64,
}

fn item_json(item: &ItemSummary) -> ItemJson {
    ItemJson {
        item: item.key.clone(),
        category: item.category.clone(),
        on_hand: item.on_hand,
        unit_cost: item.unit_cost,
        earliest_expiration: item.earliest_expiration.map(|d| d.to_string()),
        days_to_expire: item.days_to_expire,
        total_sold: item.total_sold,
        daily_run_rate: item.daily_run_rate,
        avg_weekly_sales: item.avg_weekly_sales,
        days_of_supply: item.days_of_supply,
        status: item.status.to_string(),
        action: item.action.to_string(),
        slow_mover_score: item.slow_mover_score,
        discount_band: item.discount_band.to_string(),
        suggested_po_price: item.suggested_po_price,
    }
}

fn kpi_json(kpis: &KpiSummary) -> KpiJson {
    KpiJson {
        skus_in_stock: kpis.skus_in_stock,
        dollars_on_hand: kpis.dollars_on_hand,
        reorder_count: kpis.reorder_count,
        overstock_count: kpis.overstock_count,
        expiring_count: kpis.expiring_count,
        slow_mover_count: kpis.slow_mover_count,
        median_days_of_supply: kpis.median_days_of_supply,
        worst_category: kpis.worst_category.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human output
// ---------------------------------------------------------------------------

fn print_human(view: &BuyerView, config: &PipelineConfig, top: Option<usize>, elapsed_ms: u128) {
    println!();
    println!("  SHELFWATCH — Buyer View");
    println!("  {:=<98}", "");
    match &config.room {
        Some(room) => println!(
            "  Room '{}': {} rows included, {} excluded | window {} days | as of {} | {} ms",
            room, view.rows_included, view.rows_excluded, config.window_days, config.as_of,
            elapsed_ms
        ),
        None => println!(
            "  All rooms: {} rows | window {} days | as of {} | {} ms",
            view.rows_included, config.window_days, config.as_of, elapsed_ms
        ),
    }
    println!();

    let k = &view.kpis;
    println!(
        "  SKUs in stock: {}   On-hand value: ${:.2}   Reorder: {}   Overstock: {}   Expiring: {}",
        k.skus_in_stock, k.dollars_on_hand, k.reorder_count, k.overstock_count, k.expiring_count
    );
    print!("  Slow movers (>60d): {}", k.slow_mover_count);
    if let Some(median) = k.median_days_of_supply {
        print!("   Median DOH: {:.1}", median);
    }
    if let Some(cat) = &k.worst_category {
        print!("   Heaviest category: {}", cat);
    }
    println!();
    println!();

    if view.items.is_empty() {
        println!("  No items matched the requested filters.");
        return;
    }

    println!(
        "  {:<34} {:>8} {:>8} {:>7} {:>6} {:<10} {:<20} {:<24}",
        "Item", "On Hand", "Cost", "DOH", "Wkly", "Status", "Action", "Discount"
    );
    println!("  {:-<122}", "");

    let shown = top.unwrap_or(view.items.len()).min(view.items.len());
    for item in &view.items[..shown] {
        let cost = item
            .unit_cost
            .map(|c| format!("{:.2}", c))
            .unwrap_or_else(|| "—".to_string());
        println!(
            "  {:<34} {:>8.1} {:>8} {:>7.0} {:>6.1} {:<10} {:<20} {:<24}",
            truncate(&item.key, 34),
            item.on_hand,
            cost,
            item.days_of_supply,
            item.avg_weekly_sales,
            item.status.to_string(),
            item.action.to_string(),
            item.discount_band.to_string(),
        );
    }
    if shown < view.items.len() {
        println!("  … {} more rows (raise --top to see them)", view.items.len() - shown);
    }
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn usage() -> ! {
    eprintln!("Usage: shelfwatch <inventory.csv> <sales.csv> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --window N        Sales lookback window in days (default: 30)");
    eprintln!("  --room NAME       Restrict to one room/partition, e.g. Vault");
    eprintln!("  --expiring N      Only items expiring within N days (30, 60, or 90)");
    eprintln!("  --as-of DATE      Reference date for expiry math (YYYY-MM-DD, default: today)");
    eprintln!("  --top N           Show only the top N rows of the table");
    eprintln!("  --rollup          Also print the category/strain/size rollup");
    eprintln!("  --json            Output as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  shelfwatch inventory.csv sales.csv --room Vault --window 30");
    eprintln!("  shelfwatch inventory.csv sales.csv --room Vault --expiring 60 --json");
    process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage();
    }

    let inventory_path = &args[1];
    let sales_path = &args[2];

    let mut window_days: u32 = 30;
    let mut room: Option<String> = None;
    let mut expiring = ExpirationWindow::Any;
    let mut as_of: Option<NaiveDate> = None;
    let mut top: Option<usize> = None;
    let mut rollup = false;
    let mut json_output = false;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--window" => {
                window_days = next_value(&args, i, "--window requires a number of days");
                i += 2;
            }
            "--room" => {
                room = Some(next_arg(&args, i, "--room requires a room name"));
                i += 2;
            }
            "--expiring" => {
                let days: u32 = next_value(&args, i, "--expiring requires 30, 60, or 90");
                expiring = match days {
                    30 => ExpirationWindow::Within30,
                    60 => ExpirationWindow::Within60,
                    90 => ExpirationWindow::Within90,
                    _ => {
                        eprintln!("Error: --expiring accepts 30, 60, or 90");
                        process::exit(1);
                    }
                };
                i += 2;
            }
            "--as-of" => {
                let raw = next_arg(&args, i, "--as-of requires a date (YYYY-MM-DD)");
                as_of = match raw.parse() {
                    Ok(date) => Some(date),
                    Err(_) => {
                        eprintln!("Error: --as-of requires a date formatted YYYY-MM-DD");
                        process::exit(1);
                    }
                };
                i += 2;
            }
            "--top" => {
                top = Some(next_value(&args, i, "--top requires a positive integer"));
                i += 2;
            }
            "--rollup" => {
                rollup = true;
                i += 1;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                usage();
            }
        }
    }

    let inventory = match load_report_file(inventory_path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error loading inventory: {}", e);
            process::exit(1);
        }
    };
    let sales = match load_report_file(sales_path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error loading sales: {}", e);
            process::exit(1);
        }
    };

    let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
    let mut config = PipelineConfig::new(window_days, as_of).with_expiring(expiring);
    if let Some(room) = &room {
        config = config.with_room(room.clone());
    }

    let start = Instant::now();
    let pipeline = BuyerViewPipeline::new(config.clone());
    let view = match pipeline.execute(&inventory, &sales) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let elapsed_ms = start.elapsed().as_millis();

    if json_output {
        let shown = top.unwrap_or(view.items.len()).min(view.items.len());
        let digest = BuyerViewJson {
            generated_at: Utc::now().to_rfc3339(),
            as_of: config.as_of.to_string(),
            window_days: config.window_days,
            room: config.room.clone(),
            rows_included: view.rows_included,
            rows_excluded: view.rows_excluded,
            kpis: kpi_json(&view.kpis),
            items: view.items[..shown].iter().map(item_json).collect(),
        };
        match serde_json::to_string_pretty(&digest) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    print_human(&view, &config, top, elapsed_ms);

    if rollup {
        print_category_rollup(&inventory, &config);
    }
}

/// Print an on-hand rollup per category/strain/package size. Uses the same
/// room restriction as the main view so the two sections agree.
fn print_category_rollup(inventory: &RawTable, config: &PipelineConfig) {
    let schema = match InventorySchema::resolve(inventory) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let mut rows = schema.read_rows(inventory);
    if let Some(room) = &config.room {
        match filter_room(&schema, rows, room) {
            Ok(outcome) => rows = outcome.kept,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        }
    }

    let groups = aggregate_batches(&rows, SummaryKey::CategoryStrainSize, schema.has_cost());

    println!("  Category / Strain / Size rollup");
    println!("  {:-<70}", "");
    println!("  {:<44} {:>9} {:>8} {:<12}", "Group", "On Hand", "Cost", "Earliest Exp");
    for group in groups {
        let cost = group
            .unit_cost
            .map(|c| format!("{:.2}", c))
            .unwrap_or_else(|| "—".to_string());
        let exp = group
            .earliest_expiration
            .map(|d| d.to_string())
            .unwrap_or_else(|| "—".to_string());
        println!(
            "  {:<44} {:>9.1} {:>8} {:<12}",
            truncate(&group.key, 44),
            group.on_hand,
            cost,
            exp
        );
    }
    println!();
}

fn next_arg(args: &[String], i: usize, message: &str) -> String {
    match args.get(i + 1) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    }
}

fn next_value<T: std::str::FromStr>(args: &[String], i: usize, message: &str) -> T {
    match args.get(i + 1).and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    }
}
