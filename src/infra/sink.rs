use tracing::{debug, trace};

use crate::engine::{PresentationSink, TableSnapshot};

/// Приёмник, который просто копит снапшоты. Удобно для тестов.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    snapshots: Vec<TableSnapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[TableSnapshot] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&TableSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl PresentationSink for RecordingSink {
    fn on_state_change(&mut self, snapshot: &TableSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}

/// Приёмник без рендера: пишет каждый снапшот в лог.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl PresentationSink for TracingSink {
    fn on_state_change(&mut self, snapshot: &TableSnapshot) {
        debug!(
            phase = %snapshot.phase,
            status = %snapshot.status,
            bet = snapshot.bet.0,
            deal = snapshot.deal_enabled,
            hit = snapshot.hit_enabled,
            stand = snapshot.stand_enabled,
            "снапшот стола"
        );
        match serde_json::to_string(snapshot) {
            Ok(json) => trace!(%json, "снапшот стола (json)"),
            Err(err) => debug!(%err, "не удалось сериализовать снапшот"),
        }
    }
}
