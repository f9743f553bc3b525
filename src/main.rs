mod config;
mod error;
mod invoice;
mod pdf;
mod render;

use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

use crate::config::{load_config, write_yaml, Config, DEFAULT_CONFIG_PATH};
use crate::error::Result;
use crate::invoice::{build_pdf, init_invoice};
use crate::pdf::open_file;

#[derive(Parser)]
#[command(name = "invoice-gen")]
#[command(version, about = "Generate invoice PDFs from YAML data files", long_about = None)]
struct Cli {
    /// Customer id to scaffold a new invoice data file for
    customer_id: Option<String>,

    /// List all customers
    #[arg(short = 'l', long = "list-customers")]
    list_customers: bool,

    /// Build a new PDF from the specified YAML data file
    #[arg(short = 'b', long = "build", value_name = "YAML_FILE")]
    build: Option<PathBuf>,

    /// Path to the config file
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Missing config is the one self-healing case: scaffold a placeholder
    // for the operator to fill in and stop without running the command.
    let Some(config) = load_or_scaffold_config(&cli.config)? else {
        return Ok(());
    };

    if cli.list_customers {
        cmd_list_customers(&config)
    } else if let Some(data_file) = cli.build {
        cmd_build(&config, &data_file)
    } else if let Some(customer_id) = cli.customer_id {
        cmd_init_invoice(&config, &customer_id)
    } else {
        Cli::command().print_help()?;
        Ok(())
    }
}

/// Load the config, or scaffold a placeholder one and return None so the
/// caller terminates after the operator is pointed at it.
fn load_or_scaffold_config(path: &Path) -> Result<Option<Config>> {
    if path.exists() {
        return load_config(path).map(Some);
    }

    write_yaml(path, &Config::placeholder())?;
    println!("Missing config, please fill it in and try again.");
    if open_file(path, None).is_err() {
        println!("Edit {} and re-run.", path.display());
    }
    Ok(None)
}

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CURRENCY")]
    currency: String,
}

/// List configured customers
fn cmd_list_customers(config: &Config) -> Result<()> {
    if config.customers.is_empty() {
        println!("No customers configured.");
        return Ok(());
    }

    let rows: Vec<CustomerRow> = config
        .customers
        .iter()
        .map(|customer| CustomerRow {
            id: customer.id,
            name: customer.name.clone(),
            currency: customer.currency.clone(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

/// Scaffold a new invoice data file for a customer
fn cmd_init_invoice(config: &Config, customer_id: &str) -> Result<()> {
    let path = init_invoice(config, customer_id)?;

    println!("Created {}", path.display());
    println!(
        "  Fill in the line items, then build it: invoice-gen -b {}",
        path.display()
    );

    Ok(())
}

/// Build a PDF from an invoice data file and open it
fn cmd_build(config: &Config, data_file: &Path) -> Result<()> {
    let pdf_path = build_pdf(config, data_file)?;
    open_file(&pdf_path, config.viewer.as_deref())?;

    println!("Complete.");
    println!("  Saved: {}", pdf_path.display());

    Ok(())
}
