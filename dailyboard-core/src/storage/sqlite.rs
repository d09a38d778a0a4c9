use crate::common::error::Result;
use crate::domain::{TrainTarget, VocabularyPair, WeatherTarget};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

// All three collections live in one SQLite file; each repository type only
// touches its own table.
fn open_connection<P: AsRef<Path>>(db_path: P) -> Result<Connection> {
    let db_path = db_path.as_ref();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(db_path)?;
    conn.execute_batch(
        r#"
        PRAGMA journal_mode=WAL;
        CREATE TABLE IF NOT EXISTS weather_targets (
            pkey   INTEGER PRIMARY KEY AUTOINCREMENT,
            place  TEXT NOT NULL,
            url    TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS train_targets (
            pkey   INTEGER PRIMARY KEY AUTOINCREMENT,
            route  TEXT NOT NULL,
            url    TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS vocabulary_pairs (
            pkey     INTEGER PRIMARY KEY AUTOINCREMENT,
            english  TEXT NOT NULL,
            japanese TEXT NOT NULL
        );
        "#,
    )?;
    debug!("opened board database at {}", db_path.display());
    Ok(conn)
}

/// Repository for the weather target registry.
pub struct WeatherTargets {
    conn: Connection,
}

impl WeatherTargets {
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Ok(Self {
            conn: open_connection(db_path)?,
        })
    }

    pub fn select_all(&self) -> Result<Vec<WeatherTarget>> {
        let mut stmt = self
            .conn
            .prepare("SELECT place, url FROM weather_targets ORDER BY pkey")?;
        let mut rows = stmt.query(params![])?;
        let mut targets = Vec::new();
        while let Some(row) = rows.next()? {
            targets.push(WeatherTarget {
                place: row.get(0)?,
                url: row.get(1)?,
            });
        }
        Ok(targets)
    }

    /// Inserts the batch inside a single transaction.
    pub fn insert_all(&mut self, targets: &[WeatherTarget]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for target in targets {
            tx.execute(
                "INSERT INTO weather_targets (place, url) VALUES (?1, ?2)",
                params![target.place, target.url],
            )?;
        }
        tx.commit()?;
        Ok(targets.len())
    }

    pub fn delete_by_place(&self, place: &str) -> Result<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM weather_targets WHERE place = ?1", params![place])?;
        Ok(deleted)
    }
}

/// Repository for the transit target registry.
pub struct TrainTargets {
    conn: Connection,
}

impl TrainTargets {
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Ok(Self {
            conn: open_connection(db_path)?,
        })
    }

    pub fn select_all(&self) -> Result<Vec<TrainTarget>> {
        let mut stmt = self
            .conn
            .prepare("SELECT route, url FROM train_targets ORDER BY pkey")?;
        let mut rows = stmt.query(params![])?;
        let mut targets = Vec::new();
        while let Some(row) = rows.next()? {
            targets.push(TrainTarget {
                route: row.get(0)?,
                url: row.get(1)?,
            });
        }
        Ok(targets)
    }

    pub fn insert_all(&mut self, targets: &[TrainTarget]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for target in targets {
            tx.execute(
                "INSERT INTO train_targets (route, url) VALUES (?1, ?2)",
                params![target.route, target.url],
            )?;
        }
        tx.commit()?;
        Ok(targets.len())
    }

    pub fn delete_by_route(&self, route: &str) -> Result<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM train_targets WHERE route = ?1", params![route])?;
        Ok(deleted)
    }
}

/// Repository for collected word pairs.
pub struct VocabularyPairs {
    conn: Connection,
}

impl VocabularyPairs {
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Ok(Self {
            conn: open_connection(db_path)?,
        })
    }

    pub fn select_all(&self) -> Result<Vec<VocabularyPair>> {
        let mut stmt = self
            .conn
            .prepare("SELECT english, japanese FROM vocabulary_pairs ORDER BY pkey")?;
        let mut rows = stmt.query(params![])?;
        let mut pairs = Vec::new();
        while let Some(row) = rows.next()? {
            pairs.push(VocabularyPair {
                english: row.get(0)?,
                japanese: row.get(1)?,
            });
        }
        Ok(pairs)
    }

    /// Random selection is delegated to SQLite; callers that need
    /// reproducibility should select all and sample themselves.
    pub fn select_random_sample(&self, n: usize) -> Result<Vec<VocabularyPair>> {
        let mut stmt = self.conn.prepare(
            "SELECT english, japanese FROM vocabulary_pairs ORDER BY RANDOM() LIMIT ?1",
        )?;
        let mut rows = stmt.query(params![n as i64])?;
        let mut pairs = Vec::new();
        while let Some(row) = rows.next()? {
            pairs.push(VocabularyPair {
                english: row.get(0)?,
                japanese: row.get(1)?,
            });
        }
        Ok(pairs)
    }

    pub fn insert_all(&mut self, pairs: &[VocabularyPair]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for pair in pairs {
            tx.execute(
                "INSERT INTO vocabulary_pairs (english, japanese) VALUES (?1, ?2)",
                params![pair.english, pair.japanese],
            )?;
        }
        tx.commit()?;
        Ok(pairs.len())
    }
}
