//! Step observer trait for monitoring cloth ticks.

/// Hooks into the four phases of a cloth tick.
///
/// Useful for profiling a tick or drawing intermediate solver state. Every
/// method defaults to doing nothing.
pub trait StepObserver {
    /// Called after wind, gravity, and spring accelerations are written.
    fn on_forces_accumulated(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after collision resolution with the number of corrections made.
    fn on_collisions_resolved(&mut self, _corrections: usize) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// Observer for callers that don't care about tick phases.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
