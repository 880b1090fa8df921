/// Runs a callback on every call except the first.
///
/// Hosts use this to react to changes of a value but not to its initial
/// mount.
#[derive(Debug, Clone, Default)]
pub struct UpdateGuard {
    first_run_done: bool,
}

impl UpdateGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips `f` the first time, runs it afterwards.
    pub fn run<R>(&mut self, f: impl FnOnce() -> R) -> Option<R> {
        if !self.first_run_done {
            self.first_run_done = true;
            return None;
        }
        Some(f())
    }

    pub fn has_run_once(&self) -> bool {
        self.first_run_done
    }
}
