use std::sync::Arc;

use crate::args::Args;
use crate::behavior::Behavior;

/// The arguments captured for a single past call.
#[derive(Debug)]
pub(crate) struct InvocationRecord {
    args: Arc<Args>,
}

impl InvocationRecord {
    fn new(args: Arc<Args>) -> Self {
        Self { args }
    }

    pub fn args(&self) -> &Args {
        &self.args
    }
}

/// Call counter, invocation history and behavior for one method.
///
/// Invariant: `times_called == invocations.len()`.
#[derive(Default)]
pub(crate) struct MethodRecord {
    times_called: usize,
    invocations: Vec<InvocationRecord>,
    behavior: Behavior,
}

impl MethodRecord {
    /// Record one call. Returns the behavior to run for it, along with the recorded arguments.
    pub fn record(&mut self, args: Args) -> (Behavior, Arc<Args>) {
        let args = Arc::new(args);
        self.times_called += 1;
        self.invocations.push(InvocationRecord::new(args.clone()));
        (self.behavior.clone(), args)
    }

    pub fn times_called(&self) -> usize {
        self.times_called
    }

    #[cfg(test)]
    pub fn invocations(&self) -> &[InvocationRecord] {
        &self.invocations
    }

    /// Look up an invocation by its 1-based ordinal.
    pub fn invocation(&self, ordinal: usize) -> Option<&InvocationRecord> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.invocations.get(index))
    }

    /// The ordinal used when a caller does not ask for a specific invocation:
    /// the most recent one, or 1 if there were no calls.
    pub fn default_ordinal(&self) -> usize {
        self.invocations.len().max(1)
    }

    #[cfg(test)]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }
}
