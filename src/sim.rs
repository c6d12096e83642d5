//! Tick-level driver coupling the cloth with its wind source.

use core::time::Duration;

use crate::cloth::Cloth;
use crate::collision::Collidable;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::vec::Vec3;
use crate::wind::Wind;

/// Everything the surrounding application hands the simulation per tick.
#[derive(Clone, Copy, Debug)]
pub struct TickInput<'a, C> {
    /// Time since the previous tick. Only drives the wind reversal clock.
    pub elapsed: Duration,
    pub wind_enabled: bool,
    pub colliders: &'a [C],
    /// Detach request. Acted on when it turns true, not while it stays true.
    pub detach: bool,
}

impl<'a, C> TickInput<'a, C> {
    /// Wind on, no detach request.
    pub fn new(elapsed: Duration, colliders: &'a [C]) -> Self {
        TickInput { elapsed, wind_enabled: true, colliders, detach: false }
    }

    pub fn with_wind(mut self, enabled: bool) -> Self {
        self.wind_enabled = enabled;
        self
    }

    pub fn with_detach(mut self, detach: bool) -> Self {
        self.detach = detach;
        self
    }
}

/// A cloth plus the wind that blows on it.
#[derive(Clone, Debug)]
pub struct ClothSimulation<F: Float> {
    cloth: Cloth<F>,
    wind: Wind<F>,
    detach_held: bool,
    ticks: u64,
}

impl<F: Float> ClothSimulation<F> {
    pub fn new(cloth: Cloth<F>, wind: Wind<F>) -> Self {
        ClothSimulation { cloth, wind, detach_held: false, ticks: 0 }
    }

    /// Process one tick. Returns the wind vector that was applied.
    pub fn tick<C: Collidable<F>, O: StepObserver>(
        &mut self,
        input: TickInput<'_, C>,
        observer: &mut O,
    ) -> Vec3<F> {
        if input.detach && !self.detach_held {
            self.cloth.detach();
        }
        self.detach_held = input.detach;

        self.wind.set_enabled(input.wind_enabled);
        let wind = self.wind.generate(input.elapsed);

        self.cloth.step(wind, input.colliders, observer);
        self.ticks += 1;
        wind
    }

    pub fn cloth(&self) -> &Cloth<F> { &self.cloth }
    pub fn cloth_mut(&mut self) -> &mut Cloth<F> { &mut self.cloth }
    pub fn wind(&self) -> &Wind<F> { &self.wind }
    pub fn wind_mut(&mut self) -> &mut Wind<F> { &mut self.wind }
    /// Ticks processed so far.
    pub fn ticks(&self) -> u64 { self.ticks }
}
