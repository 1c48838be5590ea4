/// Earnings inserts. Decimals are stored as their canonical text form.
use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::types::NewEarning;

pub fn create_earnings(earnings: &[NewEarning], conn: &Connection) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO earnings
                (amount, date_of_work, payroll_id, worker_id, crew_id, hours_worked, hours_offered, piece_units)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        for earning in earnings {
            inserted += stmt
                .execute(rusqlite::params![
                    earning.amount.to_string(),
                    earning.date_of_work,
                    earning.payroll_id,
                    earning.worker_id,
                    earning.crew_id(),
                    earning.hours_worked().map(|d| d.to_string()),
                    earning.hours_offered().map(|d| d.to_string()),
                    earning.piece_units().map(|d| d.to_string()),
                ])
                .with_context(|| {
                    format!(
                        "Failed to insert earning for worker {} on {}",
                        earning.worker_id, earning.date_of_work
                    )
                })?;
        }
    }
    tx.commit()?;
    Ok(inserted)
}
