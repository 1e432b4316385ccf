// ReplicaPro - CLI demo
// Prints the product catalog and computes allocations from the terminal.
// The full demo page lives in the server binary (feature "server").

use anyhow::{anyhow, Result};
use std::env;

use replica_pro::{compute, IndexRegistry, InstrumentRegistry};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "allocate" {
        // Allocation mode: replica-pro allocate <index name> <amount>
        run_allocate(&args[2..])?;
    } else {
        // Catalog mode (default)
        run_catalog();
    }

    Ok(())
}

fn run_catalog() {
    let instruments = InstrumentRegistry::new();
    let indices = IndexRegistry::new();

    println!("📈 ReplicaPro - Index Replication Demo");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n📋 Futures used in the replication portfolios:");
    for instrument in instruments.all() {
        println!("   {} - {}", instrument.code, instrument.description);
    }

    println!("\n🗂️  Replicable indices:");
    for profile in indices.all() {
        println!(
            "   {} (tracking error {:.2}, trading costs {:.2})",
            profile.name, profile.tracking_error, profile.trading_costs
        );
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Usage: replica-pro allocate \"<index name>\" <amount>");
    println!("Web UI: cargo run --bin replica-server --features server");
}

fn run_allocate(args: &[String]) -> Result<()> {
    let (name, amount_arg) = match args {
        [name, amount] => (name.as_str(), amount.as_str()),
        _ => {
            return Err(anyhow!(
                "usage: replica-pro allocate \"<index name>\" <amount>"
            ))
        }
    };

    let amount: f64 = amount_arg
        .parse()
        .map_err(|_| anyhow!("amount must be a number, got {:?}", amount_arg))?;

    let indices = IndexRegistry::new();
    let result = compute(name, amount, &indices)?;

    println!("💰 Investment Allocation - {}", result.index_name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for line in &result.lines {
        // Display truncates to two decimals; the computed value is full precision
        println!("   {}: {:.2}", line.code, line.amount);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Total invested: {:.2}", result.total_amount);

    Ok(())
}
