/// The seeding pipeline: workers, crews, payroll periods, then earnings.
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use rand::Rng;

use crate::db::PayrollStore;
use crate::earnings::generate_earnings;
use crate::names::{fake_crew_names, fake_workers};
use crate::periods::generate_payrolls;
use crate::types::{CrewId, PayPeriod, PayrollId, WorkerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedOptions {
    pub num_workers: usize,
    pub num_crews: usize,
    pub create_payrolls: bool,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Runs every stage in order and stops at the first failure.
pub fn run<S, R>(opts: &SeedOptions, store: &mut S, rng: &mut R) -> Result<()>
where
    S: PayrollStore + ?Sized,
    R: Rng + ?Sized,
{
    seed_workers(store, opts.num_workers, rng)?;
    info!("Workers created (num_workers={})", opts.num_workers);

    seed_crews(store, opts.num_crews, rng)?;
    info!("Crews created (num_crews={})", opts.num_crews);

    if opts.create_payrolls {
        for pay_period in PayPeriod::ALL {
            let ids = seed_payrolls(store, pay_period, opts.start, opts.end)?;
            info!("{} payrolls created (num_payrolls={})", pay_period.label(), ids.len());
        }
    }

    let total = seed_earnings(store, rng)?;
    info!("Earnings created (num_earnings={total})");

    info!("Done");
    Ok(())
}

pub fn seed_workers<S, R>(store: &mut S, count: usize, rng: &mut R) -> Result<Vec<WorkerId>>
where
    S: PayrollStore + ?Sized,
    R: Rng + ?Sized,
{
    let workers = fake_workers(count, rng);
    store.create_workers(&workers).context("Failed to create workers")
}

pub fn seed_crews<S, R>(store: &mut S, count: usize, rng: &mut R) -> Result<Vec<CrewId>>
where
    S: PayrollStore + ?Sized,
    R: Rng + ?Sized,
{
    let names = fake_crew_names(count, rng);
    store.create_crews(&names).context("Failed to create crews")
}

pub fn seed_payrolls<S>(
    store: &mut S,
    pay_period: PayPeriod,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PayrollId>>
where
    S: PayrollStore + ?Sized,
{
    let payrolls = generate_payrolls(pay_period, start, end)?;
    store
        .create_payrolls(&payrolls)
        .with_context(|| format!("Failed to create {pay_period} payrolls"))
}

/// Generates earnings for every persisted payroll, one insert per payroll.
///
/// Returns the total number of rows inserted.
pub fn seed_earnings<S, R>(store: &mut S, rng: &mut R) -> Result<usize>
where
    S: PayrollStore + ?Sized,
    R: Rng + ?Sized,
{
    let worker_ids = store.worker_ids().context("Failed to read worker ids")?;
    let crew_ids = store.crew_ids().context("Failed to read crew ids")?;
    let payrolls = store.payrolls().context("Failed to read payrolls")?;

    let num_payrolls = payrolls.len();
    let mut total = 0;
    for (i, payroll) in payrolls.iter().enumerate() {
        let earnings = generate_earnings(payroll, &worker_ids, &crew_ids, rng)?;
        let inserted = store.create_earnings(&earnings).with_context(|| {
            format!(
                "Failed to create earnings for payroll {} ({} to {})",
                payroll.id, payroll.period_start, payroll.period_end
            )
        })?;
        info!(
            "created earnings for payroll number {} of {} (pay_period={}, num_earnings={})",
            i + 1,
            num_payrolls,
            payroll.pay_period,
            inserted
        );
        total += inserted;
    }
    Ok(total)
}
