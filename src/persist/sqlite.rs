//! SQLite-backed country table with an append-only op journal.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, OptionalExtension, Row, Transaction, params};
use tracing::{debug, info};

use crate::{
    country::Country,
    op::{Op, StoredOp, StoredOpEnvelope},
    types::{CountryCode, OpSeq},
};

use super::{CountryStore, StoreError, StoreResult};

const COUNTRY_COLUMNS: &str = "code, name, internet_users, adult_literacy_rate";

/// SQLite implementation of [`crate::persist::CountryStore`].
pub struct SqliteCountryStore {
    conn: Connection,
}

impl SqliteCountryStore {
    /// Opens or creates a SQLite database at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!("Opened country database at [{}].", path.display());
        Self::init_connection(conn)
    }

    /// Opens an in-memory SQLite database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    /// Loads journal entries strictly after `seq`.
    pub fn load_ops_after(&self, seq: OpSeq) -> StoreResult<Vec<StoredOp>> {
        let mut stmt = self
            .conn
            .prepare("SELECT seq, ts_ms, payload FROM ops WHERE seq > ?1 ORDER BY seq ASC")?;

        let rows = stmt.query_map(params![seq as i64], |row| {
            let seq: i64 = row.get(0)?;
            let ts_ms: i64 = row.get(1)?;
            let payload: Vec<u8> = row.get(2)?;
            let mut op = decode_stored_op_payload(&payload).map_err(|err| {
                rusqlite::Error::FromSqlConversionFailure(
                    payload.len(),
                    rusqlite::types::Type::Blob,
                    Box::new(std::io::Error::other(err)),
                )
            })?;
            op.seq = seq as OpSeq;
            op.ts_ms = ts_ms as u64;
            Ok(op)
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Returns the latest sequence persisted in the journal.
    pub fn latest_seq(&self) -> StoreResult<OpSeq> {
        let seq: i64 =
            self.conn
                .query_row("SELECT COALESCE(MAX(seq), 0) FROM ops", [], |row| row.get(0))?;
        Ok(seq as OpSeq)
    }

    fn find_in(conn: &Connection, code: &CountryCode) -> StoreResult<Option<Country>> {
        let sql = format!("SELECT {COUNTRY_COLUMNS} FROM countries WHERE code = ?1");
        let found = conn
            .query_row(&sql, params![code.as_str()], country_from_row)
            .optional()?;
        Ok(found)
    }
}

impl CountryStore for SqliteCountryStore {
    fn find_all(&self) -> StoreResult<Vec<Country>> {
        let sql = format!("SELECT {COUNTRY_COLUMNS} FROM countries ORDER BY id ASC");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], country_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn find_by_code(&self, code: &CountryCode) -> StoreResult<Option<Country>> {
        Self::find_in(&self.conn, code)
    }

    fn insert(&mut self, country: Country) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        if Self::find_in(&tx, &country.code)?.is_some() {
            return Err(StoreError::DuplicateKey(country.code));
        }
        tx.execute(
            "INSERT INTO countries(code, name, internet_users, adult_literacy_rate) VALUES (?1, ?2, ?3, ?4)",
            params![
                country.code.as_str(),
                country.name,
                country.internet_users,
                country.adult_literacy_rate,
            ],
        )?;
        append_op(&tx, Op::Insert { country })?;
        tx.commit()?;
        Ok(())
    }

    fn update(&mut self, country: Country) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        let prev = Self::find_in(&tx, &country.code)?
            .ok_or_else(|| StoreError::NotFound(country.code.clone()))?;
        tx.execute(
            "UPDATE countries SET name = ?2, internet_users = ?3, adult_literacy_rate = ?4 WHERE code = ?1",
            params![
                country.code.as_str(),
                country.name,
                country.internet_users,
                country.adult_literacy_rate,
            ],
        )?;
        append_op(&tx, Op::Update { country, prev })?;
        tx.commit()?;
        Ok(())
    }

    fn delete(&mut self, code: &CountryCode) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        let country =
            Self::find_in(&tx, code)?.ok_or_else(|| StoreError::NotFound(code.clone()))?;
        tx.execute("DELETE FROM countries WHERE code = ?1", params![code.as_str()])?;
        append_op(&tx, Op::Delete { country })?;
        tx.commit()?;
        Ok(())
    }

    fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, err)| StoreError::Sqlite(err))?;
        info!("Closed country database.");
        Ok(())
    }
}

fn country_from_row(row: &Row<'_>) -> rusqlite::Result<Country> {
    let code: String = row.get(0)?;
    let code = CountryCode::parse(&code).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
    })?;
    Ok(Country {
        code,
        name: row.get(1)?,
        internet_users: row.get(2)?,
        adult_literacy_rate: row.get(3)?,
    })
}

fn append_op(tx: &Transaction<'_>, op: Op) -> StoreResult<()> {
    let seq: i64 = tx.query_row("SELECT COALESCE(MAX(seq), 0) + 1 FROM ops", [], |row| {
        row.get(0)
    })?;
    let kind = op.kind();
    let code = op.code().to_string();
    let stored = StoredOp {
        seq: seq as OpSeq,
        ts_ms: now_ms(),
        op,
    };
    let payload = serde_json::to_vec(&StoredOpEnvelope::new(stored.clone()))?;
    tx.execute(
        "INSERT INTO ops(seq, ts_ms, kind, code, payload) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![seq, stored.ts_ms as i64, kind, code, payload],
    )?;
    debug!(seq, kind, code = %code, "journaled country mutation");
    Ok(())
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn decode_stored_op_payload(payload: &[u8]) -> Result<StoredOp, String> {
    let envelope = serde_json::from_slice::<StoredOpEnvelope>(payload)
        .map_err(|e| format!("op payload decode failed: {e}"))?;
    if envelope.format_version != crate::op::OP_FORMAT_VERSION {
        return Err(format!(
            "unsupported op format version: {}",
            envelope.format_version
        ));
    }
    Ok(envelope.stored)
}
