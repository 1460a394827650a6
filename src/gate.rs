//! 準備完了待ち
//!
//! ホストがアイテムを作り終えたことを知らせる手段がないため、
//! 毎フレーム子要素数を確認し、1件以上になったら保留中の要求を取り出す。

/// 警告を出すまでの空振り回数の既定値（60fps でおよそ10秒）
pub const DEFAULT_WARN_AFTER: u32 = 600;

/// 子要素数が 0 より大きくなるまで要求を保留する
#[derive(Debug)]
pub struct ReadinessGate<T> {
    pending: Option<T>,
    empty_polls: u32,
    warn_after: u32,
    warned: bool,
}

impl<T> ReadinessGate<T> {
    pub fn new() -> Self {
        Self::with_warn_after(DEFAULT_WARN_AFTER)
    }

    pub fn with_warn_after(warn_after: u32) -> Self {
        Self {
            pending: None,
            empty_polls: 0,
            warn_after,
            warned: false,
        }
    }

    /// 要求を保留する（既存の要求は置き換える）
    pub fn request(&mut self, request: T) {
        if self.pending.is_none() {
            self.empty_polls = 0;
            self.warned = false;
        }
        self.pending = Some(request);
    }

    /// 保留中の要求を破棄
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 毎フレーム呼ぶ。準備ができていれば保留中の要求を返す
    ///
    /// 準備ができるまで何度でも呼んでよい。
    pub fn poll(&mut self, count: usize) -> Option<T> {
        if self.pending.is_none() {
            return None;
        }

        if count > 0 {
            self.empty_polls = 0;
            self.warned = false;
            return self.pending.take();
        }

        self.empty_polls = self.empty_polls.saturating_add(1);
        if self.empty_polls >= self.warn_after && !self.warned {
            log::warn!(
                "item collection still empty after {} ticks; keep waiting",
                self.empty_polls
            );
            self.warned = true;
        }
        None
    }

    /// 準備完了を待って空振りした回数
    pub fn empty_polls(&self) -> u32 {
        self.empty_polls
    }
}

impl<T> Default for ReadinessGate<T> {
    fn default() -> Self {
        Self::new()
    }
}
