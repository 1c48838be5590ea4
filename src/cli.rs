/// CLI argument parsing and the top-level seeding command.
use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::db;
use crate::seed::{self, SeedOptions};

#[derive(Parser, Debug)]
#[command(
    name = "payroll-seed",
    version,
    about = "payroll-seed - Fills a payroll database with synthetic test data"
)]
pub struct Cli {
    /// SQLite database path or `file:` URI. Defaults to the user's data directory.
    #[arg(long)]
    pub dsn: Option<String>,

    /// Number of workers to add
    #[arg(long, default_value_t = 1000)]
    pub num_workers: usize,

    /// Number of crews to add
    #[arg(long, default_value_t = 20)]
    pub num_crews: usize,

    /// Don't create new payroll periods; earnings are still generated for existing ones
    #[arg(long)]
    pub skip_payrolls: bool,

    /// First day of the generated pay periods
    #[arg(long, default_value = "2024-01-01")]
    pub start: NaiveDate,

    /// How many years of pay periods to generate
    #[arg(long, default_value_t = 1)]
    pub years: u32,

    /// Seed for reproducible data
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn seed_options(&self) -> Result<SeedOptions> {
        let end = self
            .years
            .checked_mul(12)
            .and_then(|months| self.start.checked_add_months(Months::new(months)))
            .with_context(|| format!("{} years after {} is out of range", self.years, self.start))?;
        Ok(SeedOptions {
            num_workers: self.num_workers,
            num_crews: self.num_crews,
            create_payrolls: !self.skip_payrolls,
            start: self.start,
            end,
        })
    }
}

/// Connect to the database and run the whole seeding pipeline.
pub fn run(cli: Cli) -> Result<()> {
    let opts = cli.seed_options()?;
    let dsn = cli.dsn.unwrap_or_else(db::default_db_path);
    let mut store = db::init(&dsn)?;
    info!("Connected to {dsn}");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    seed::run(&opts, &mut store, &mut rng)
}
