/// Calendar arithmetic for splitting a date range into pay periods.
use anyhow::{Context, Result};
use chrono::{Days, Months, NaiveDate};

use crate::types::{NewPayroll, PayPeriod};

/// Moves `date` forward by one period of the given cadence.
pub fn advance(pay_period: PayPeriod, date: NaiveDate) -> Result<NaiveDate> {
    let next = match pay_period {
        PayPeriod::Monthly => date.checked_add_months(Months::new(1)),
        PayPeriod::Biweekly => date.checked_add_days(Days::new(14)),
        PayPeriod::Weekly => date.checked_add_days(Days::new(7)),
    };
    next.with_context(|| format!("Cannot advance {date} by one {pay_period} period"))
}

/// Builds contiguous periods starting at `start` until the cursor reaches `end`.
///
/// Monthly periods end on the last day of the month. Weekly and biweekly
/// periods end on the start of the next period and the final one is not
/// clamped to `end`.
pub fn generate_payrolls(
    pay_period: PayPeriod,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<NewPayroll>> {
    let mut payrolls = Vec::new();
    let mut current = start;
    while current < end {
        let next = advance(pay_period, current)?;
        let period_end = match pay_period {
            PayPeriod::Monthly => next
                .checked_sub_days(Days::new(1))
                .with_context(|| format!("Cannot compute end of month starting {current}"))?,
            PayPeriod::Biweekly | PayPeriod::Weekly => next,
        };
        payrolls.push(NewPayroll {
            pay_period,
            period_start: current,
            period_end,
        });
        current = next;
    }
    Ok(payrolls)
}
