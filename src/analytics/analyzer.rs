use tracing::debug;

use super::comparison::{compare, Comparison, Measure};
use super::consistency::{consistency, Consistency};
use super::metric::Metric;
use super::projection::{Projection, Projector};
use super::trend::{trend, Trend, TrendWindow};
use crate::cli::types::{PlayerId, SeasonWindow, StatKind, TeamCode};
use crate::error::Result;
use crate::stats::{aggregate_lines, StatStore};

/// Runs analytics for players by id against a [`StatStore`].
///
/// Every call reads its own copy of the lines it needs, so results never
/// observe a half-applied write.
pub struct PlayerAnalyzer<'a> {
    store: &'a StatStore,
}

impl<'a> PlayerAnalyzer<'a> {
    pub fn new(store: &'a StatStore) -> Self {
        Self { store }
    }

    pub fn trend(
        &self,
        player_id: &PlayerId,
        window: TrendWindow,
        metrics: &[Metric<'_>],
        stable_band_pct: f64,
    ) -> Result<Vec<Trend>> {
        let lines = self.store.recent(player_id, window.total())?;
        debug!(player = %player_id, games = lines.len(), "trend input");
        trend(&lines, window, metrics, stable_band_pct)
    }

    /// Consistency over the last `games` games.
    pub fn consistency(
        &self,
        player_id: &PlayerId,
        metric: Metric<'_>,
        games: usize,
    ) -> Result<Consistency> {
        let lines = self.store.recent(player_id, games)?;
        consistency(&metric.values(&lines)?)
    }

    /// Compare two players over their last `games` games each.
    pub fn compare(
        &self,
        first: &PlayerId,
        second: &PlayerId,
        games: usize,
        measures: &[Measure],
    ) -> Result<Comparison> {
        let first_lines = self.store.recent(first, games)?;
        let second_lines = self.store.recent(second, games)?;
        compare(
            &aggregate_lines(first, None, &first_lines),
            &aggregate_lines(second, None, &second_lines),
            measures,
        )
    }

    /// Compare two players over the same season window.
    pub fn compare_season(
        &self,
        first: &PlayerId,
        second: &PlayerId,
        season: &SeasonWindow,
        measures: &[Measure],
    ) -> Result<Comparison> {
        compare(
            &self.store.season_aggregate(first, season),
            &self.store.season_aggregate(second, season),
            measures,
        )
    }

    pub fn project<P: Projector>(
        &self,
        projector: &P,
        player_id: &PlayerId,
        opponent: Option<&TeamCode>,
        games: usize,
        stats: &[StatKind],
    ) -> Result<Projection> {
        let lines = self.store.recent(player_id, games)?;
        projector.project(player_id, opponent, &lines, stats)
    }
}
