/// Random per-worker, per-day earnings for a payroll period.
use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use crate::types::{CrewId, NewEarning, Payroll, WorkKind, WorkerId};

/// Decimal places kept on every generated amount and quantity.
const SCALE: u32 = 4;
const AMOUNT: RangeInclusive<i64> = 10..=500;
const HOURS: RangeInclusive<i64> = 4..=12;
const PIECE_UNITS: RangeInclusive<i64> = 100..=1000;

/// Uniform decimal in `range` (whole-number bounds) with [`SCALE`] places.
fn random_decimal<R: Rng + ?Sized>(range: RangeInclusive<i64>, rng: &mut R) -> Decimal {
    let factor = 10i64.pow(SCALE);
    let mantissa = rng.random_range(range.start() * factor..=range.end() * factor);
    Decimal::new(mantissa, SCALE)
}

/// Piecework or hourly, decided by a fair coin.
pub fn random_work<R: Rng + ?Sized>(crew_id: CrewId, rng: &mut R) -> WorkKind {
    if rng.random_bool(0.5) {
        WorkKind::Piecework {
            piece_units: random_decimal(PIECE_UNITS, rng),
            crew_id,
        }
    } else {
        WorkKind::Hourly {
            hours_worked: random_decimal(HOURS, rng),
            hours_offered: random_decimal(HOURS, rng),
        }
    }
}

/// One row per worker for every day in `[period_start, period_end)`.
///
/// A single crew is drawn per day and shared by every piecework row that day.
pub fn generate_earnings<R: Rng + ?Sized>(
    payroll: &Payroll,
    worker_ids: &[WorkerId],
    crew_ids: &[CrewId],
    rng: &mut R,
) -> Result<Vec<NewEarning>> {
    let mut earnings = Vec::new();
    for date_of_work in payroll.work_days() {
        let crew_id = *crew_ids
            .choose(rng)
            .with_context(|| format!("No crews to assign for payroll {}", payroll.id))?;
        for &worker_id in worker_ids {
            let amount = random_decimal(AMOUNT, rng);
            earnings.push(NewEarning {
                payroll_id: payroll.id,
                worker_id,
                date_of_work,
                amount,
                work: random_work(crew_id, rng),
            });
        }
    }
    Ok(earnings)
}
