/// Runs a callback only when its dependencies change.
///
/// Dependencies are compared by value, so a freshly built but equal list
/// does not trigger a rerun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepsGuard<D> {
    last: Option<D>,
}

impl<D> Default for DepsGuard<D> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<D: PartialEq> DepsGuard<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the first call and whenever `deps` differs from the
    /// dependencies of the previous run.
    pub fn run<R>(&mut self, deps: D, f: impl FnOnce(&D) -> R) -> Option<R> {
        if self.last.as_ref() == Some(&deps) {
            return None;
        }
        let deps = self.last.insert(deps);
        Some(f(deps))
    }

    /// Dependencies of the last run.
    pub fn last(&self) -> Option<&D> {
        self.last.as_ref()
    }
}
