use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub type WorkerId = i64;
pub type CrewId = i64;
pub type PayrollId = i64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWorker {
    pub first_name: String,
    pub last_name: String,
}

/// How often a payroll is run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayPeriod {
    Monthly,
    Biweekly,
    Weekly,
}

impl PayPeriod {
    pub const ALL: [PayPeriod; 3] = [PayPeriod::Monthly, PayPeriod::Biweekly, PayPeriod::Weekly];

    pub fn as_str(self) -> &'static str {
        match self {
            PayPeriod::Monthly => "monthly",
            PayPeriod::Biweekly => "biweekly",
            PayPeriod::Weekly => "weekly",
        }
    }

    /// Human label used in log lines, e.g. "Monthly".
    pub fn label(self) -> &'static str {
        match self {
            PayPeriod::Monthly => "Monthly",
            PayPeriod::Biweekly => "Biweekly",
            PayPeriod::Weekly => "Weekly",
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayPeriod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(PayPeriod::Monthly),
            "biweekly" => Ok(PayPeriod::Biweekly),
            "weekly" => Ok(PayPeriod::Weekly),
            other => Err(anyhow::anyhow!("Unknown pay period '{other}'")),
        }
    }
}

/// A payroll period that has not been persisted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPayroll {
    pub pay_period: PayPeriod,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payroll {
    pub id: PayrollId,
    pub pay_period: PayPeriod,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

impl Payroll {
    /// Days earnings are generated for: `[period_start, period_end)`.
    pub fn work_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.period_start
            .iter_days()
            .take_while(|day| *day < self.period_end)
    }
}

/// Either hours-based or piece-based pay. Exactly one shape is ever stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkKind {
    Piecework {
        piece_units: Decimal,
        crew_id: CrewId,
    },
    Hourly {
        hours_worked: Decimal,
        hours_offered: Decimal,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEarning {
    pub payroll_id: PayrollId,
    pub worker_id: WorkerId,
    pub date_of_work: NaiveDate,
    pub amount: Decimal,
    pub work: WorkKind,
}

impl NewEarning {
    pub fn crew_id(&self) -> Option<CrewId> {
        match self.work {
            WorkKind::Piecework { crew_id, .. } => Some(crew_id),
            WorkKind::Hourly { .. } => None,
        }
    }

    pub fn piece_units(&self) -> Option<Decimal> {
        match self.work {
            WorkKind::Piecework { piece_units, .. } => Some(piece_units),
            WorkKind::Hourly { .. } => None,
        }
    }

    pub fn hours_worked(&self) -> Option<Decimal> {
        match self.work {
            WorkKind::Hourly { hours_worked, .. } => Some(hours_worked),
            WorkKind::Piecework { .. } => None,
        }
    }

    pub fn hours_offered(&self) -> Option<Decimal> {
        match self.work {
            WorkKind::Hourly { hours_offered, .. } => Some(hours_offered),
            WorkKind::Piecework { .. } => None,
        }
    }
}
