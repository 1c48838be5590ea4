/// Worker database queries.
use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::types::{NewWorker, WorkerId};

pub fn create_workers(workers: &[NewWorker], conn: &Connection) -> Result<Vec<WorkerId>> {
    let tx = conn.unchecked_transaction()?;
    let mut ids = Vec::with_capacity(workers.len());
    {
        let mut stmt = tx.prepare("INSERT INTO workers (first_name, last_name) VALUES (?1, ?2)")?;
        for worker in workers {
            stmt.execute((&worker.first_name, &worker.last_name))
                .context("Failed to insert worker")?;
            ids.push(tx.last_insert_rowid());
        }
    }
    tx.commit()?;
    Ok(ids)
}

pub fn query_worker_ids(conn: &Connection) -> Result<Vec<WorkerId>> {
    let mut stmt = conn.prepare("SELECT id FROM workers ORDER BY id")?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    let mut ids = Vec::new();
    for row in rows {
        ids.push(row?);
    }
    Ok(ids)
}
