//! Step hooks: the only channel from the engines to a renderer.
//!
//! Every engine awaits its hook at each algorithmic step. A renderer
//! implements [`StepHook`] and returns a future that resolves once it has
//! highlighted the node and waited however long it likes; the engine does
//! not continue until that future resolves.

use std::future::{self, Future};

use crate::types::{NodeId, Phase, Step};

pub trait StepHook {
    fn step(&mut self, step: Step) -> impl Future<Output = ()>;
}

/// Resolves every step immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHook;

impl StepHook for NoopHook {
    fn step(&mut self, _step: Step) -> impl Future<Output = ()> {
        future::ready(())
    }
}

/// Records every step, for replay renderers and tests.
#[derive(Clone, Debug, Default)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Drains the recorded steps.
    pub fn take(&mut self) -> Vec<Step> {
        std::mem::take(&mut self.steps)
    }

    pub fn visited(&self) -> Vec<NodeId> {
        self.steps
            .iter()
            .filter(|s| s.phase == Phase::Visit)
            .map(|s| s.node)
            .collect()
    }

    pub fn found(&self) -> Option<NodeId> {
        self.steps
            .iter()
            .rev()
            .find(|s| s.phase == Phase::Found)
            .map(|s| s.node)
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl StepHook for StepLog {
    fn step(&mut self, step: Step) -> impl Future<Output = ()> {
        self.steps.push(step);
        future::ready(())
    }
}

pub(crate) async fn emit<H: StepHook>(hook: &mut H, node: NodeId, phase: Phase) {
    tracing::trace!(%node, ?phase, "step");
    hook.step(Step { node, phase }).await;
}
