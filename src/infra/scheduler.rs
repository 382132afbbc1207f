use crate::engine::{ActionOutcome, FrameScheduler, Ignored, PresentationSink, TableController};

/// Ручной планировщик кадров для тестов и CLI.
///
/// Кадр не наступает сам: его "прокручивают" через `pump_frame`,
/// синхронно, без настоящего цикла отрисовки.
#[derive(Clone, Debug, Default)]
pub struct ManualFrameScheduler {
    frame_pending: bool,
    requested: u64,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Забрать запрошенный кадр. `true`, если кадр был запрошен.
    pub fn take_frame(&mut self) -> bool {
        std::mem::replace(&mut self.frame_pending, false)
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Сколько раз движок просил кадр за всё время.
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) {
        self.frame_pending = true;
        self.requested += 1;
    }
}

impl<S: PresentationSink> TableController<S, ManualFrameScheduler> {
    /// Прокрутить один кадр, если он был запрошен.
    pub fn pump_frame(&mut self) -> ActionOutcome {
        if self.scheduler_mut().take_frame() {
            self.on_frame()
        } else {
            ActionOutcome::Ignored(Ignored::NothingPending)
        }
    }
}
