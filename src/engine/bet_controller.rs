use serde::Serialize;
use tracing::debug;

use crate::domain::{format_money, normalize_bet, BetBounds, BetSource, Chips, RawBet, TableStatus};
use crate::engine::coalesce::{EditSlot, PendingEdit};
use crate::engine::errors::Ignored;

/// Значения, которые показывают оба контрола ввода ставки.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ControlMirrors {
    /// Значение ползунка.
    pub range: String,
    /// Значение числового поля.
    pub number: String,
}

impl ControlMirrors {
    fn new(value: Chips) -> Self {
        Self {
            range: value.to_string(),
            number: value.to_string(),
        }
    }

    /// Переписать всё, кроме контрола-источника: в нём пользователь сейчас печатает.
    fn sync(&mut self, value: Chips, source: Option<BetSource>) {
        if source != Some(BetSource::Range) {
            self.range = value.to_string();
        }
        if source != Some(BetSource::Number) {
            self.number = value.to_string();
        }
    }

    /// Запомнить, что показывает сам контрол-источник (в него мы не пишем).
    fn echo(&mut self, source: BetSource, text: String) {
        match source {
            BetSource::Range => self.range = text,
            BetSource::Number => self.number = text,
        }
    }
}

/// Владелец канонической ставки.
///
/// Принимает сырые правки от двух контролов, склеивает их до одной на кадр,
/// нормализует по `BetBounds` и держит зеркала контролов в согласии.
#[derive(Clone, Debug)]
pub struct BetController {
    bounds: BetBounds,
    /// Последнее принятое сырое значение (уже приведённое к числу).
    raw_input: f64,
    canonical: Chips,
    locked: bool,
    mirrors: ControlMirrors,
    pending: EditSlot,
    commits: u64,
}

impl BetController {
    pub fn new(bounds: BetBounds) -> Self {
        Self {
            bounds,
            raw_input: 0.0,
            canonical: Chips::ZERO,
            locked: false,
            mirrors: ControlMirrors::new(Chips::ZERO),
            pending: EditSlot::new(),
            commits: 0,
        }
    }

    /// Принять правку от контрола.
    ///
    /// Правка только откладывается до следующего кадра. `Ok(true)` – кадр
    /// ещё не запрошен и его надо запросить у планировщика.
    pub fn submit(&mut self, value: &RawBet, source: BetSource) -> Result<bool, Ignored> {
        if self.locked {
            return Err(Ignored::BetLocked);
        }

        let n = value.to_number();
        self.raw_input = n;
        let needs_frame = self.pending.stage(PendingEdit {
            value: n,
            text: value.as_text(),
            source,
        });

        debug!(raw = n, %source, needs_frame, "правка ставки отложена");
        Ok(needs_frame)
    }

    /// Чистая нормализация по границам этого контроллера.
    pub fn normalize(&self, n: f64) -> Chips {
        normalize_bet(n, &self.bounds)
    }

    /// Записать значение как каноническую ставку.
    ///
    /// `source = None` (reset) переписывает оба контрола.
    pub fn commit(&mut self, n: f64, source: Option<BetSource>) -> Result<Chips, Ignored> {
        if self.locked {
            return Err(Ignored::BetLocked);
        }

        let value = self.apply(n, source);
        self.commits += 1;

        debug!(raw = n, canonical = value.0, source = ?source, "ставка зафиксирована");
        Ok(value)
    }

    fn apply(&mut self, n: f64, source: Option<BetSource>) -> Chips {
        let value = self.normalize(n);
        self.canonical = value;
        self.mirrors.sync(value, source);
        value
    }

    /// Кадр наступил: закоммитить последнюю отложенную правку.
    pub fn flush(&mut self) -> Result<Chips, Ignored> {
        let edit = self.pending.take().ok_or(Ignored::NothingPending)?;
        let value = self.commit(edit.value, Some(edit.source))?;
        self.mirrors.echo(edit.source, edit.text);
        Ok(value)
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Полный сброс: разблокировать, выбросить отложенную правку, ставка = 0.
    pub fn reset(&mut self) {
        self.unlock();
        self.clear_pending();
        self.raw_input = 0.0;
        self.apply(0.0, None);
    }

    pub fn bounds(&self) -> &BetBounds {
        &self.bounds
    }

    pub fn canonical(&self) -> Chips {
        self.canonical
    }

    pub fn raw_input(&self) -> f64 {
        self.raw_input
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn has_bet(&self) -> bool {
        !self.canonical.is_zero()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.peek().is_some()
    }

    pub fn mirrors(&self) -> &ControlMirrors {
        &self.mirrors
    }

    /// Ставка для HUD/стола: `$1,250`.
    pub fn display(&self) -> String {
        format_money(self.canonical)
    }

    /// Статус, который даёт текущая ставка.
    pub fn status(&self) -> TableStatus {
        TableStatus::for_bet(self.has_bet())
    }

    /// Сколько правок пользователя было зафиксировано (reset не считается).
    pub fn commit_count(&self) -> u64 {
        self.commits
    }
}
