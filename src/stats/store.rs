//! In-memory stat line store

use super::aggregate::{aggregate_lines, SeasonAggregate};
use super::models::GameStatLine;
use crate::cli::types::{PlayerId, SeasonWindow};
use crate::error::{HoopsError, Result};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// What `record` did with a line.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Inserted,
    /// Overwrite was requested and this line was displaced.
    Replaced(GameStatLine),
}

/// Holds every recorded stat line, one per (player, date).
///
/// Queries hand out clones so callers compute over a stable snapshot.
#[derive(Debug, Clone, Default)]
pub struct StatStore {
    games: HashMap<PlayerId, BTreeMap<NaiveDate, GameStatLine>>,
}

impl StatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stat line.
    ///
    /// A second line for the same player and date is rejected with
    /// `DuplicateGame` unless `overwrite` is set, in which case it fully
    /// replaces the earlier one.
    pub fn record(&mut self, line: GameStatLine, overwrite: bool) -> Result<RecordOutcome> {
        let player_games = self.games.entry(line.player_id().clone()).or_default();
        let date = line.date();

        if player_games.contains_key(&date) && !overwrite {
            warn!(player_id = %line.player_id(), %date, "rejected duplicate stat line");
            return Err(HoopsError::DuplicateGame {
                player_id: line.player_id().to_string(),
                date,
            });
        }

        match player_games.insert(date, line) {
            Some(previous) => {
                info!(player_id = %previous.player_id(), %date, "replaced stat line");
                Ok(RecordOutcome::Replaced(previous))
            }
            None => {
                debug!(%date, "recorded stat line");
                Ok(RecordOutcome::Inserted)
            }
        }
    }

    /// Record a batch of lines, all or nothing.
    ///
    /// Without `overwrite`, a duplicate against the store or within the batch
    /// fails the whole batch before anything is inserted.
    pub fn record_all(&mut self, lines: Vec<GameStatLine>, overwrite: bool) -> Result<usize> {
        if !overwrite {
            let mut seen = HashSet::new();
            for line in &lines {
                let key = (line.player_id(), line.date());
                let stored = self
                    .games
                    .get(line.player_id())
                    .is_some_and(|g| g.contains_key(&line.date()));
                if stored || !seen.insert(key) {
                    return Err(HoopsError::DuplicateGame {
                        player_id: line.player_id().to_string(),
                        date: line.date(),
                    });
                }
            }
        }

        let count = lines.len();
        for line in lines {
            self.record(line, overwrite)?;
        }
        Ok(count)
    }

    /// The `n` most recent games, most recent first. Returns fewer when fewer
    /// exist; `n == 0` is an input error.
    pub fn recent(&self, player_id: &PlayerId, n: usize) -> Result<Vec<GameStatLine>> {
        if n == 0 {
            return Err(HoopsError::invalid_input("number of recent games must be at least 1"));
        }
        Ok(self
            .games
            .get(player_id)
            .map(|g| g.values().rev().take(n).cloned().collect())
            .unwrap_or_default())
    }

    /// Games dated within `[start, end]`, oldest first.
    pub fn range(
        &self,
        player_id: &PlayerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<GameStatLine>> {
        if start > end {
            return Err(HoopsError::invalid_input(format!(
                "range start {} is after end {}",
                start, end
            )));
        }
        Ok(self
            .games
            .get(player_id)
            .map(|g| g.range(start..=end).map(|(_, l)| l.clone()).collect())
            .unwrap_or_default())
    }

    /// Every game for a player, oldest first.
    pub fn lines(&self, player_id: &PlayerId) -> Vec<GameStatLine> {
        self.games
            .get(player_id)
            .map(|g| g.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Aggregate the games inside a caller-defined season window.
    pub fn season_aggregate(&self, player_id: &PlayerId, season: &SeasonWindow) -> SeasonAggregate {
        let lines: Vec<GameStatLine> = self
            .games
            .get(player_id)
            .map(|g| {
                g.range(season.start()..=season.end())
                    .map(|(_, l)| l.clone())
                    .collect()
            })
            .unwrap_or_default();
        aggregate_lines(player_id, Some(season.label()), &lines)
    }

    /// Players with at least one recorded game, sorted.
    pub fn players(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self
            .games
            .iter()
            .filter(|(_, g)| !g.is_empty())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn game_count(&self, player_id: &PlayerId) -> usize {
        self.games.get(player_id).map_or(0, |g| g.len())
    }

    pub fn len(&self) -> usize {
        self.games.values().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A store shared between threads.
///
/// `record` holds the write lock across the duplicate check and the insert so
/// two writers cannot both pass the check for the same game. Reads clone out
/// of the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedStatStore {
    inner: Arc<RwLock<StatStore>>,
}

impl SharedStatStore {
    pub fn new(store: StatStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn record(&self, line: GameStatLine, overwrite: bool) -> Result<RecordOutcome> {
        let mut store = self.inner.write().map_err(|_| HoopsError::StorePoisoned)?;
        store.record(line, overwrite)
    }

    pub fn recent(&self, player_id: &PlayerId, n: usize) -> Result<Vec<GameStatLine>> {
        let store = self.inner.read().map_err(|_| HoopsError::StorePoisoned)?;
        store.recent(player_id, n)
    }

    pub fn range(
        &self,
        player_id: &PlayerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<GameStatLine>> {
        let store = self.inner.read().map_err(|_| HoopsError::StorePoisoned)?;
        store.range(player_id, start, end)
    }

    pub fn season_aggregate(
        &self,
        player_id: &PlayerId,
        season: &SeasonWindow,
    ) -> Result<SeasonAggregate> {
        let store = self.inner.read().map_err(|_| HoopsError::StorePoisoned)?;
        Ok(store.season_aggregate(player_id, season))
    }

    /// Consistent copy of the whole store.
    pub fn snapshot(&self) -> Result<StatStore> {
        let store = self.inner.read().map_err(|_| HoopsError::StorePoisoned)?;
        Ok(store.clone())
    }
}
