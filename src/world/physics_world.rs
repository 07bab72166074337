use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, debug_span, trace};

use super::config::SolverConfig;
use crate::collision::{Arbiter, ContactManifold, PairKey};
use crate::error::PhysicsError;
use crate::integration::integrator;
use crate::objects::{body_pair, RigidBody};

/// Reference driver for the arbiter protocol.
///
/// Owns the body registry and one [`Arbiter`] per touching pair. Collision
/// detection happens elsewhere: every step receives the manifolds found for
/// that step. Arbiters are visited in [`PairKey`] order so a replay with the
/// same inputs produces the same velocities.
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    arbiters: BTreeMap<PairKey, Arbiter>,
    config: SolverConfig,
}

impl PhysicsWorld {
    pub fn new(config: SolverConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            bodies: Vec::new(),
            arbiters: BTreeMap::new(),
            config,
        })
    }

    /// Adds a rigid body to the world and returns its index.
    ///
    /// Bodies are never removed, so the index is a stable identity.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut RigidBody> {
        self.bodies.get_mut(index)
    }

    pub fn arbiter(&self, key: PairKey) -> Option<&Arbiter> {
        self.arbiters.get(&key)
    }

    pub fn arbiters(&self) -> impl Iterator<Item = &Arbiter> {
        self.arbiters.values()
    }

    pub fn arbiter_count(&self) -> usize {
        self.arbiters.len()
    }

    /// Advances the simulation by `dt` using the manifolds detected for this step.
    ///
    /// Pairs missing from `manifolds` are considered separated and lose their
    /// arbiter along with its impulse history. Nothing is mutated if `dt` or
    /// any manifold is invalid.
    pub fn step(&mut self, dt: f64, manifolds: &[ContactManifold]) -> Result<(), PhysicsError> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }
        for manifold in manifolds {
            body_pair(&self.bodies, manifold.body_a, manifold.body_b)?;
        }

        let _span = debug_span!("step", dt, manifolds = manifolds.len()).entered();

        for body in self.bodies.iter_mut() {
            integrator::integrate_velocity(body, self.config.gravity, dt);
        }

        self.update_arbiters(manifolds)?;
        self.solve_contacts()?;

        for body in self.bodies.iter_mut() {
            integrator::integrate_position(body, dt);
        }
        Ok(())
    }

    /// Resets every touched arbiter with its new manifold and drops the rest.
    fn update_arbiters(&mut self, manifolds: &[ContactManifold]) -> Result<(), PhysicsError> {
        let mut touched = BTreeSet::new();

        for manifold in manifolds {
            let key = PairKey::new(manifold.body_a, manifold.body_b);
            let arbiter = match self.arbiters.entry(key) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(Arbiter::new(
                    &self.bodies,
                    manifold.body_a,
                    manifold.body_b,
                )?),
            };
            arbiter.load_manifold(&self.bodies, manifold)?;
            touched.insert(key);
        }

        self.arbiters.retain(|key, _| {
            let keep = touched.contains(key);
            if !keep {
                debug!(%key, "arbiter discarded");
            }
            keep
        });
        Ok(())
    }

    /// Warm starts, then iterates every non-sensor arbiter.
    fn solve_contacts(&mut self) -> Result<(), PhysicsError> {
        for arbiter in self.arbiters.values_mut().filter(|a| !a.is_sensor()) {
            arbiter.pre_solve(&mut self.bodies)?;
        }

        let mut solved = 0usize;
        for _ in 0..self.config.velocity_iterations {
            for arbiter in self.arbiters.values_mut().filter(|a| !a.is_sensor()) {
                if arbiter.solve(&mut self.bodies)? {
                    solved += 1;
                }
            }
        }

        trace!(
            arbiters = self.arbiters.len(),
            iterations = self.config.velocity_iterations,
            solved,
            "contacts solved"
        );
        Ok(())
    }
}
