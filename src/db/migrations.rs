/// Database migrations and schema management.
use anyhow::Result;
use rusqlite::Connection;

/// Creates the payroll schema if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS workers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT    NOT NULL,
            last_name   TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS crews (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS payrolls (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            pay_period    TEXT    NOT NULL CHECK (pay_period IN ('monthly', 'biweekly', 'weekly')),
            period_start  TEXT    NOT NULL,
            period_end    TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS earnings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            amount         TEXT    NOT NULL,
            date_of_work   TEXT    NOT NULL,
            payroll_id     INTEGER NOT NULL,
            worker_id      INTEGER NOT NULL,
            crew_id        INTEGER,
            hours_worked   TEXT,
            hours_offered  TEXT,
            piece_units    TEXT,
            FOREIGN KEY (payroll_id) REFERENCES payrolls(id),
            FOREIGN KEY (worker_id) REFERENCES workers(id),
            FOREIGN KEY (crew_id) REFERENCES crews(id),
            CHECK (
                (piece_units IS NOT NULL AND crew_id IS NOT NULL
                    AND hours_worked IS NULL AND hours_offered IS NULL)
                OR
                (piece_units IS NULL AND crew_id IS NULL
                    AND hours_worked IS NOT NULL AND hours_offered IS NOT NULL)
            )
        );

        CREATE INDEX IF NOT EXISTS idx_earnings_payroll ON earnings(payroll_id);
        CREATE INDEX IF NOT EXISTS idx_earnings_worker ON earnings(worker_id);
        ",
    )?;
    Ok(())
}
