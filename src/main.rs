use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use loan_compare::{
    EngineConfig, LoanScenario, OfferProvider, RepaymentFrequency, StaticOffers,
    compute_repayment, compute_savings, flat_savings_estimate, quote_offers,
};

#[derive(Parser, Debug)]
#[command(
    name = "loan-compare",
    about = "Price home loan repayments and compare lender offers",
    version
)]
struct Cli {
    /// JSON file overriding the savings assumptions
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Periodic repayment, total repayment and total interest for a loan
    Repayment(LoanArgs),
    /// Savings from moving a loan to another rate
    Savings {
        #[command(flatten)]
        loan: LoanArgs,
        /// Rate to compare against; defaults to the configured best available rate
        #[arg(long)]
        alternative_rate: Option<f64>,
    },
    /// Rank lender offers for a loan by total cost
    Offers {
        #[command(flatten)]
        loan: LoanArgs,
        /// JSON file of offers; the bundled sample table is used otherwise
        #[arg(long)]
        offers: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct LoanArgs {
    /// Amount borrowed
    #[arg(long)]
    principal: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: f64,
    /// Term in years
    #[arg(long, default_value_t = 30)]
    term: u32,
    /// weekly, fortnightly or monthly
    #[arg(long, default_value = "monthly")]
    frequency: RepaymentFrequency,
}

impl LoanArgs {
    fn scenario(&self) -> Result<LoanScenario> {
        LoanScenario::new(self.principal, self.rate, self.term, self.frequency)
            .context("invalid loan details")
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "loan_compare=debug,info"
    } else {
        "loan_compare=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match &cli.command {
        Command::Repayment(args) => {
            let loan = args.scenario()?;
            let result = compute_repayment(&loan)?;
            let summary = result.summary();
            if cli.json {
                return print_json(&summary);
            }
            println!("{} repayment: ${}", loan.frequency, summary.periodic_repayment);
            println!("Total repayment:   ${}", summary.total_repayment);
            println!("Total interest:    ${}", summary.total_interest);
        }
        Command::Savings {
            loan,
            alternative_rate,
        } => {
            let loan = loan.scenario()?;
            let rate = match alternative_rate {
                Some(rate) => *rate,
                None => config.rate_policy.improved_rate(loan.annual_rate_percent)?,
            };
            info!(current = loan.annual_rate_percent, alternative = rate, "comparing rates");

            let result = compute_savings(&loan, rate)?;
            let summary = result.summary();
            if cli.json {
                return print_json(&summary);
            }
            let flat = flat_savings_estimate(
                result.baseline.total_repayment,
                config.flat_savings_percent,
            )?;
            println!("Comparing {:.2}% against {:.2}%", loan.annual_rate_percent, rate);
            println!("Savings per {}: ${}", loan.frequency, summary.periodic_savings);
            println!("Savings per year: ${}", summary.annual_savings);
            println!("Savings over term: ${}", summary.lifetime_savings);
            println!(
                "Flat {}% estimate: ${}",
                config.flat_savings_percent,
                loan_compare::money::to_currency(flat)
            );
        }
        Command::Offers { loan, offers } => {
            let loan = loan.scenario()?;
            let provider = match offers {
                Some(path) => {
                    let json = std::fs::read_to_string(path)
                        .with_context(|| format!("failed to read offers {}", path.display()))?;
                    StaticOffers::from_json(&json)?
                }
                None => StaticOffers::bundled()?,
            };
            let quotes = quote_offers(&loan, &provider.list_offers()?)?;
            if cli.json {
                return print_json(&quotes);
            }
            for (rank, quote) in quotes.iter().enumerate() {
                println!(
                    "{:>2}. {} {} @ {:.2}% (comparison {:.2}%): ${} per {}, total cost ${}, saves ${}",
                    rank + 1,
                    quote.offer.lender,
                    quote.offer.product,
                    quote.offer.annual_rate_percent,
                    quote.offer.comparison_rate_percent,
                    quote.repayment.summary().periodic_repayment,
                    loan.frequency,
                    loan_compare::money::to_currency(quote.total_cost),
                    quote.savings.summary().lifetime_savings,
                );
            }
        }
    }

    Ok(())
}
