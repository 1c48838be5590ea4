/// Crew database queries.
use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::types::CrewId;

pub fn create_crews(names: &[String], conn: &Connection) -> Result<Vec<CrewId>> {
    let tx = conn.unchecked_transaction()?;
    let mut ids = Vec::with_capacity(names.len());
    {
        let mut stmt = tx.prepare("INSERT INTO crews (name) VALUES (?1)")?;
        for name in names {
            stmt.execute([name])
                .with_context(|| format!("Failed to insert crew '{name}'"))?;
            ids.push(tx.last_insert_rowid());
        }
    }
    tx.commit()?;
    Ok(ids)
}

pub fn query_crew_ids(conn: &Connection) -> Result<Vec<CrewId>> {
    conn.prepare("SELECT id FROM crews ORDER BY id")?
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<CrewId>, _>>()
        .context("Failed to read crew ids")
}
