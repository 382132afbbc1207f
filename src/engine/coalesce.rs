//! Очередь правок ставки ёмкостью один элемент (trailing-edge debounce на кадр).

use crate::domain::BetSource;

/// Отложенная правка: значение, приведённое к числу, текст контрола и источник.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingEdit {
    pub value: f64,
    /// Что сейчас набрано в контроле-источнике.
    pub text: String,
    pub source: BetSource,
}

/// Слот отложенной правки.
///
/// Каждая новая правка перетирает предыдущую. Кадр запрашивается один раз,
/// пока он не отработал; на кадре забирается только последняя правка.
#[derive(Clone, Debug, Default)]
pub struct EditSlot {
    pending: Option<PendingEdit>,
    frame_requested: bool,
}

impl EditSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Положить правку. Возвращает `true`, если нужно запросить кадр у планировщика.
    pub fn stage(&mut self, edit: PendingEdit) -> bool {
        self.pending = Some(edit);
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Кадр наступил: забрать последнюю правку (если она есть).
    pub fn take(&mut self) -> Option<PendingEdit> {
        self.frame_requested = false;
        self.pending.take()
    }

    /// Выбросить отложенную правку и забыть про запрошенный кадр.
    ///
    /// Если старый кадр всё же придёт, он ничего не найдёт; следующая правка
    /// запросит кадр заново.
    pub fn clear(&mut self) {
        self.pending = None;
        self.frame_requested = false;
    }

    pub fn peek(&self) -> Option<&PendingEdit> {
        self.pending.as_ref()
    }
}
