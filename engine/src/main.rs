// `notas` command-line entry point: runs the form-side normalization and validation
// outside the desktop UI, and converts invoice CSV files into normalized form.
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use engine::config::settings::AppSettings;
use engine::data::csv_export::InvoiceCsv;
use engine::data::store::InvoiceStore;
use engine::format::{format_currency, format_typing_value, parse_currency};
use engine::forms::{feedback_color, CustomerForm, InvoiceForm};
use engine::validation::{FormError, ValidationOutcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notas")]
#[command(version)]
#[command(about = "Invoice and customer value normalization", long_about = None)]
struct Cli {
    /// Data directory holding config.json (defaults to $CONTROLE_NOTAS_DATA_DIR or ./data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Final display form of an amount (as applied when the field loses focus)
    FormatValue {
        raw: String,
        /// Prefix with the currency symbol
        #[arg(long)]
        symbol: bool,
    },

    /// Display form while the amount is still being typed
    Typing { raw: String },

    /// Canonical 2dp amount as stored
    ParseValue { raw: String },

    /// Validate an invoice form
    CheckInvoice {
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        number: String,
        #[arg(long, default_value = "")]
        customer: String,
        #[arg(long, default_value = "")]
        value: String,
    },

    /// Validate a customer form
    CheckCustomer {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        cnpj: String,
    },

    /// Import an invoice CSV and write it back out normalized, newest first
    ConvertCsv { input: PathBuf, output: PathBuf },
}

fn report(result: Result<(), FormError>, settings: &AppSettings) -> ExitCode {
    let outcome = ValidationOutcome::from_result(&result, settings.language);
    let palette = settings.palette();
    let color = feedback_color(&outcome, &palette);
    if outcome.valid {
        println!("[{}] OK", color);
        ExitCode::SUCCESS
    } else {
        println!("[{}] {}", color, outcome.message);
        ExitCode::FAILURE
    }
}

fn convert_csv(input: &Path, output: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    let invoices = InvoiceCsv::import_invoices_from_path(input)
        .with_context(|| format!("Failed to import '{}'", input.display()))?;
    info!(count = invoices.len(), "Imported invoices");

    let mut store = InvoiceStore::new();
    for invoice in invoices {
        if let Err(e) = store.insert(invoice) {
            warn!(error = %e, "Skipping invoice");
        }
    }

    let written = InvoiceCsv::export_invoices_to_path(output, &store.all())
        .with_context(|| format!("Failed to export '{}'", output.display()))?;
    println!(
        "{} invoices, total {}, written to {}",
        store.count(),
        format_currency(store.total_value(), settings.currency_symbol),
        written.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so command output stays pipeable; RUST_LOG controls the level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(AppSettings::data_dir_from_env);
    let settings = AppSettings::load_from_dir(&data_dir).context("Failed to load settings")?;
    info!(language = ?settings.language, data_dir = %settings.data_dir.display(), "Settings loaded");

    let code = match cli.command {
        Commands::FormatValue { raw, symbol } => {
            println!("{}", format_currency(raw.as_str(), symbol));
            ExitCode::SUCCESS
        }
        Commands::Typing { raw } => {
            println!("{}", format_typing_value(&raw));
            ExitCode::SUCCESS
        }
        Commands::ParseValue { raw } => {
            println!("{}", parse_currency(raw.as_str()));
            ExitCode::SUCCESS
        }
        Commands::CheckInvoice { date, number, customer, value } => {
            let form = InvoiceForm { date, number, customer, value, ..Default::default() };
            report(form.validate(), &settings)
        }
        Commands::CheckCustomer { name, phone, email, cnpj } => {
            let form = CustomerForm { name, phone, email, cnpj, ..Default::default() };
            report(form.validate(), &settings)
        }
        Commands::ConvertCsv { input, output } => {
            convert_csv(&input, &output, &settings)?;
            ExitCode::SUCCESS
        }
    };
    Ok(code)
}
