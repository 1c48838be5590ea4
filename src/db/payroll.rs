/// Payroll period database queries.
use anyhow::{Context, Result};
use rusqlite::Connection;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::types::{NewPayroll, PayPeriod, Payroll, PayrollId};

impl ToSql for PayPeriod {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for PayPeriod {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|err: anyhow::Error| FromSqlError::Other(err.into()))
    }
}

pub fn create_payrolls(payrolls: &[NewPayroll], conn: &Connection) -> Result<Vec<PayrollId>> {
    let tx = conn.unchecked_transaction()?;
    let mut ids = Vec::with_capacity(payrolls.len());
    {
        let mut stmt = tx.prepare(
            "INSERT INTO payrolls (pay_period, period_start, period_end) VALUES (?1, ?2, ?3)",
        )?;
        for payroll in payrolls {
            stmt.execute((payroll.pay_period, payroll.period_start, payroll.period_end))
                .with_context(|| {
                    format!(
                        "Failed to insert {} payroll starting {}",
                        payroll.pay_period, payroll.period_start
                    )
                })?;
            ids.push(tx.last_insert_rowid());
        }
    }
    tx.commit()?;
    Ok(ids)
}

pub fn query_payrolls(conn: &Connection) -> Result<Vec<Payroll>> {
    let mut stmt = conn.prepare(
        "SELECT id, pay_period, period_start, period_end FROM payrolls ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Payroll {
            id: row.get(0)?,
            pay_period: row.get(1)?,
            period_start: row.get(2)?,
            period_end: row.get(3)?,
        })
    })?;
    let mut payrolls = Vec::new();
    for row in rows {
        payrolls.push(row.context("Failed to read payroll row")?);
    }
    Ok(payrolls)
}
