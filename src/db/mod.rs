/// Database module with worker, crew, payroll and earning inserts and migrations.
mod crew;
mod earning;
#[cfg(test)]
pub mod memory;
mod migrations;
mod payroll;
mod worker;

use std::time::Duration;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::types::{CrewId, NewEarning, NewPayroll, NewWorker, Payroll, PayrollId, WorkerId};

// Re-export all public functions
pub use crew::{create_crews, query_crew_ids};
pub use earning::create_earnings;
pub use payroll::{create_payrolls, query_payrolls};
pub use worker::{create_workers, query_worker_ids};

/// Bulk-create and read-back operations the seeder needs from storage.
pub trait PayrollStore {
    fn create_workers(&mut self, workers: &[NewWorker]) -> Result<Vec<WorkerId>>;
    fn create_crews(&mut self, names: &[String]) -> Result<Vec<CrewId>>;
    fn create_payrolls(&mut self, payrolls: &[NewPayroll]) -> Result<Vec<PayrollId>>;
    /// Returns the number of rows inserted.
    fn create_earnings(&mut self, earnings: &[NewEarning]) -> Result<usize>;
    fn worker_ids(&mut self) -> Result<Vec<WorkerId>>;
    fn crew_ids(&mut self) -> Result<Vec<CrewId>>;
    fn payrolls(&mut self) -> Result<Vec<Payroll>>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl PayrollStore for SqliteStore {
    fn create_workers(&mut self, workers: &[NewWorker]) -> Result<Vec<WorkerId>> {
        create_workers(workers, &self.conn)
    }

    fn create_crews(&mut self, names: &[String]) -> Result<Vec<CrewId>> {
        create_crews(names, &self.conn)
    }

    fn create_payrolls(&mut self, payrolls: &[NewPayroll]) -> Result<Vec<PayrollId>> {
        create_payrolls(payrolls, &self.conn)
    }

    fn create_earnings(&mut self, earnings: &[NewEarning]) -> Result<usize> {
        create_earnings(earnings, &self.conn)
    }

    fn worker_ids(&mut self) -> Result<Vec<WorkerId>> {
        query_worker_ids(&self.conn)
    }

    fn crew_ids(&mut self) -> Result<Vec<CrewId>> {
        query_crew_ids(&self.conn)
    }

    fn payrolls(&mut self) -> Result<Vec<Payroll>> {
        query_payrolls(&self.conn)
    }
}

/// Opens (or creates) the SQLite database, checks it answers, and runs migrations.
pub fn init(dsn: &str) -> Result<SqliteStore> {
    let conn = Connection::open(dsn).with_context(|| format!("Failed to open database '{dsn}'"))?;
    prepare(&conn).with_context(|| format!("Database '{dsn}' is not usable"))?;
    Ok(SqliteStore::new(conn))
}

fn prepare(conn: &Connection) -> Result<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    migrations::run_migrations(conn)?;
    Ok(())
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./payroll.db` when no data dir is found.
pub fn default_db_path() -> String {
    if let Some(data_dir) = dirs::data_local_dir() {
        let seed_dir = data_dir.join("payroll-seed");
        std::fs::create_dir_all(&seed_dir).ok();
        seed_dir.join("payroll.db").to_string_lossy().into_owned()
    } else {
        "payroll.db".to_string()
    }
}

#[cfg(test)]
pub(crate) fn open_in_memory() -> Result<SqliteStore> {
    let conn = Connection::open_in_memory()?;
    prepare(&conn)?;
    Ok(SqliteStore::new(conn))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{PayPeriod, WorkKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ids_come_back_in_insert_order() {
        let mut store = open_in_memory().unwrap();
        let ids = store
            .create_workers(&[
                NewWorker {
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                },
                NewWorker {
                    first_name: "Alan".to_string(),
                    last_name: "Turing".to_string(),
                },
            ])
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.worker_ids().unwrap(), ids);

        let crew_ids = store
            .create_crews(&["Agile Synergies".to_string()])
            .unwrap();
        assert_eq!(store.crew_ids().unwrap(), crew_ids);
    }

    #[test]
    fn payrolls_round_trip_through_sqlite() {
        let mut store = open_in_memory().unwrap();
        let new = NewPayroll {
            pay_period: PayPeriod::Biweekly,
            period_start: date(2024, 1, 1),
            period_end: date(2024, 1, 15),
        };
        let ids = store.create_payrolls(std::slice::from_ref(&new)).unwrap();
        let stored = store.payrolls().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, ids[0]);
        assert_eq!(stored[0].pay_period, PayPeriod::Biweekly);
        assert_eq!(stored[0].period_start, new.period_start);
        assert_eq!(stored[0].period_end, new.period_end);
    }

    #[test]
    fn earnings_store_exactly_one_shape() {
        let mut store = open_in_memory().unwrap();
        let workers = store
            .create_workers(&[NewWorker {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            }])
            .unwrap();
        let crews = store.create_crews(&["Robust Paradigms".to_string()]).unwrap();
        let payrolls = store
            .create_payrolls(&[NewPayroll {
                pay_period: PayPeriod::Weekly,
                period_start: date(2024, 1, 1),
                period_end: date(2024, 1, 8),
            }])
            .unwrap();
        let earnings = [
            NewEarning {
                payroll_id: payrolls[0],
                worker_id: workers[0],
                date_of_work: date(2024, 1, 1),
                amount: Decimal::new(1_234_567, 4),
                work: WorkKind::Piecework {
                    piece_units: Decimal::new(2_500_000, 4),
                    crew_id: crews[0],
                },
            },
            NewEarning {
                payroll_id: payrolls[0],
                worker_id: workers[0],
                date_of_work: date(2024, 1, 2),
                amount: Decimal::new(100_000, 4),
                work: WorkKind::Hourly {
                    hours_worked: Decimal::new(75_000, 4),
                    hours_offered: Decimal::new(80_000, 4),
                },
            },
        ];
        assert_eq!(store.create_earnings(&earnings).unwrap(), 2);

        let shapes: Vec<(Option<i64>, Option<String>, Option<String>, Option<String>, String)> = store
            .conn
            .prepare(
                "SELECT crew_id, piece_units, hours_worked, hours_offered, amount
                 FROM earnings ORDER BY id",
            )
            .unwrap()
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            shapes[0],
            (
                Some(crews[0]),
                Some("250.0000".to_string()),
                None,
                None,
                "123.4567".to_string()
            )
        );
        assert_eq!(
            shapes[1],
            (
                None,
                None,
                Some("7.5000".to_string()),
                Some("8.0000".to_string()),
                "10.0000".to_string()
            )
        );
    }

    #[test]
    fn failed_batch_leaves_no_rows() {
        let mut store = open_in_memory().unwrap();
        let payrolls = store
            .create_payrolls(&[NewPayroll {
                pay_period: PayPeriod::Weekly,
                period_start: date(2024, 1, 1),
                period_end: date(2024, 1, 8),
            }])
            .unwrap();
        let worker_ids = store
            .create_workers(&[NewWorker {
                first_name: "Katherine".to_string(),
                last_name: "Johnson".to_string(),
            }])
            .unwrap();
        let ok = NewEarning {
            payroll_id: payrolls[0],
            worker_id: worker_ids[0],
            date_of_work: date(2024, 1, 1),
            amount: Decimal::new(100_000, 4),
            work: WorkKind::Hourly {
                hours_worked: Decimal::new(40_000, 4),
                hours_offered: Decimal::new(40_000, 4),
            },
        };
        // Unknown worker violates the foreign key.
        let bad = NewEarning {
            worker_id: 999,
            ..ok.clone()
        };
        assert!(store.create_earnings(&[ok, bad]).is_err());
        let count: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM earnings", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
