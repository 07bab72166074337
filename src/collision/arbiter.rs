//! Persistent contact resolution for one pair of bodies.
//!
//! An [`Arbiter`] lives for as long as its two bodies keep touching. Each
//! step the driver runs the same protocol on it:
//!
//! 1. [`Arbiter::set`] with the new separation normal,
//! 2. [`Arbiter::add_contact`] once per manifold point,
//! 3. [`Arbiter::pre_solve`] once, which warm starts the bodies with last
//!    step's accumulated impulses,
//! 4. [`Arbiter::solve`] once per velocity iteration.
//!
//! Bodies are not owned. The arbiter stores the registry indices of its pair
//! and borrows the driver's body slice for each call.
//!
//! The sensor flag is carried but never checked here. Drivers must not call
//! `pre_solve` or `solve` for sensor pairs.

use std::fmt;

use tracing::{trace, warn};

use super::contact::Contact;
use super::manifold::ContactManifold;
use crate::common::Material;
use crate::error::PhysicsError;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::inverse_or_zero;
use crate::objects::{body_pair, body_pair_mut, RigidBody};

/// Identity of an unordered body pair, stable across steps.
///
/// `PairKey::new(a, b) == PairKey::new(b, a)`. Keys order by their lower
/// index first, which gives drivers a reproducible iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    low: usize,
    high: usize,
}

impl PairKey {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn bodies(&self) -> (usize, usize) {
        (self.low, self.high)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.low, self.high)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arbiter {
    key: PairKey,
    body_a: usize,
    body_b: usize,

    restitution: f64,
    friction: f64,
    sensor: bool,

    /// Unit normal from A towards B.
    normal: Vec2,
    /// `normal` rotated 90 degrees counter-clockwise.
    tangent: Vec2,

    /// Backing storage; entries past `contact_count` are stale until `pre_solve`.
    contacts: Vec<Contact>,
    contact_count: usize,

    /// Set until the first warm start, when there is no impulse history yet.
    first: bool,
}

impl Arbiter {
    /// Creates the arbiter for bodies `body_a` and `body_b` of the registry.
    pub fn new(bodies: &[RigidBody], body_a: usize, body_b: usize) -> Result<Self, PhysicsError> {
        let (a, b) = body_pair(bodies, body_a, body_b)?;
        let combined = Material::combine(&a.material, &b.material);
        let key = PairKey::new(body_a, body_b);

        trace!(
            %key,
            restitution = combined.restitution,
            friction = combined.friction,
            sensor = combined.sensor,
            "arbiter created"
        );

        Ok(Self {
            key,
            body_a,
            body_b,
            restitution: combined.restitution,
            friction: combined.friction,
            sensor: combined.sensor,
            normal: Vec2::ZERO,
            tangent: Vec2::ZERO,
            contacts: Vec::with_capacity(2),
            contact_count: 0,
            first: true,
        })
    }

    pub fn key(&self) -> PairKey {
        self.key
    }

    pub fn body_a(&self) -> usize {
        self.body_a
    }

    pub fn body_b(&self) -> usize {
        self.body_b
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn is_sensor(&self) -> bool {
        self.sensor
    }

    pub fn is_first(&self) -> bool {
        self.first
    }

    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    pub fn tangent(&self) -> Vec2 {
        self.tangent
    }

    pub fn contact_count(&self) -> usize {
        self.contact_count
    }

    /// Contacts added since the last [`Arbiter::set`].
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts[..self.contact_count.min(self.contacts.len())]
    }

    /// Starts a new frame for this pair.
    ///
    /// Contacts from the previous frame stay in storage so `add_contact` can
    /// carry their impulses forward.
    pub fn set(&mut self, normal: Vec2) {
        if (normal.magnitude_squared() - 1.0).abs() > 1e-6 {
            warn!(key = %self.key, ?normal, "arbiter normal is not unit length");
        }
        trace!(key = %self.key, ?normal, "arbiter reset");
        self.normal = normal;
        self.tangent = normal.perpendicular();
        self.contact_count = 0;
    }

    /// Adds one manifold point to the current frame.
    ///
    /// `depth` defaults to the separation of the two points along the normal.
    /// The new contact inherits the accumulated impulses of whichever contact
    /// held the same slot last frame. Slots are matched by position only, so
    /// a manifold whose point order changes between frames warm starts from
    /// the wrong point.
    pub fn add_contact(
        &mut self,
        bodies: &[RigidBody],
        contact_on_a: Vec2,
        contact_on_b: Vec2,
        depth: Option<f64>,
    ) -> Result<(), PhysicsError> {
        let (a, b) = body_pair(bodies, self.body_a, self.body_b)?;
        let normal = self.normal;
        let tangent = self.tangent;

        let depth = depth.unwrap_or_else(|| (contact_on_a - contact_on_b).dot(normal));

        let arm_a = contact_on_a - a.position;
        let arm_b = contact_on_b - b.position;

        let arm_a_cross_n = arm_a.cross(normal).powi(2);
        let arm_b_cross_n = arm_b.cross(normal).powi(2);
        let arm_a_cross_t = arm_a.cross(tangent).powi(2);
        let arm_b_cross_t = arm_b.cross(tangent).powi(2);

        let normal_mass = inverse_or_zero(
            a.inv_mass + b.inv_mass + arm_a_cross_n * a.inv_inertia + arm_b_cross_n * b.inv_inertia,
        );
        let tangent_mass = inverse_or_zero(
            a.inv_mass + b.inv_mass + arm_a_cross_t * a.inv_inertia + arm_b_cross_t * b.inv_inertia,
        );

        let mut contact = Contact {
            contact_on_a,
            contact_on_b,
            arm_a,
            arm_b,
            depth,
            normal_mass,
            tangent_mass,
            normal_impulse: 0.0,
            tangent_impulse: 0.0,
            velocity_bias: None,
        };

        match self.contacts.get_mut(self.contact_count) {
            Some(slot) => {
                contact.normal_impulse = slot.normal_impulse;
                contact.tangent_impulse = slot.tangent_impulse;
                *slot = contact;
            }
            None => self.contacts.push(contact),
        }
        self.contact_count += 1;
        Ok(())
    }

    /// Resets the frame from a narrow-phase manifold and adds all of its points.
    ///
    /// A manifold that lists the pair in the opposite order is reversed first,
    /// so the normal always points from this arbiter's A to its B. A manifold
    /// for any other pair is rejected without touching the arbiter.
    pub fn load_manifold(
        &mut self,
        bodies: &[RigidBody],
        manifold: &ContactManifold,
    ) -> Result<(), PhysicsError> {
        let manifold_key = PairKey::new(manifold.body_a, manifold.body_b);
        if manifold_key != self.key {
            return Err(PhysicsError::PairMismatch {
                arbiter: self.key,
                manifold: manifold_key,
            });
        }

        let reversed;
        let manifold = if manifold.body_a == self.body_a {
            manifold
        } else {
            reversed = manifold.reversed();
            &reversed
        };

        self.set(manifold.normal);
        for point in &manifold.points {
            self.add_contact(bodies, point.point_a, point.point_b, point.depth)?;
        }
        Ok(())
    }

    /// Drops stale contacts and warm starts both bodies from the accumulated impulses.
    ///
    /// Skipped on the pair's first frame, which has no history.
    pub fn pre_solve(&mut self, bodies: &mut [RigidBody]) -> Result<(), PhysicsError> {
        self.contacts.truncate(self.contact_count);
        if self.first {
            self.first = false;
            return Ok(());
        }

        let (a, b) = body_pair_mut(bodies, self.body_a, self.body_b)?;
        for contact in &self.contacts {
            let impulse = contact.accumulated_impulse(self.normal, self.tangent);
            a.apply_impulse(impulse, contact.arm_a);
            b.apply_impulse(-impulse, contact.arm_b);
        }

        trace!(key = %self.key, contacts = self.contacts.len(), "warm started");
        Ok(())
    }

    /// Runs one sequential impulse pass over every contact.
    ///
    /// Returns `Ok(false)` without touching the bodies when there are no
    /// contacts. The restitution bias of every contact is resolved from the
    /// normal velocity of the first contact visited in the pass that finds
    /// it unresolved, so all points of a manifold share one target.
    pub fn solve(&mut self, bodies: &mut [RigidBody]) -> Result<bool, PhysicsError> {
        if self.contact_count == 0 || self.contacts.is_empty() {
            return Ok(false);
        }

        let (a, b) = body_pair_mut(bodies, self.body_a, self.body_b)?;
        let normal = self.normal;
        let tangent = self.tangent;
        let restitution = self.restitution;
        let friction = self.friction;

        let mut bias_basis: Option<f64> = None;
        let mut solved = false;

        for contact in self.contacts.iter_mut().take(self.contact_count) {
            solved = true;

            let relative_velocity = a.velocity_at(contact.arm_a) - b.velocity_at(contact.arm_b);
            let normal_velocity = relative_velocity.dot(normal);

            let basis = *bias_basis.get_or_insert(normal_velocity);
            let velocity_bias = *contact.velocity_bias.get_or_insert(restitution * basis);

            let normal_step = contact.normal_mass * -(normal_velocity + velocity_bias);
            let old_normal = contact.normal_impulse;
            contact.normal_impulse = (old_normal + normal_step).min(0.0);
            let normal_delta = contact.normal_impulse - old_normal;

            let tangent_velocity = relative_velocity.dot(tangent);
            let tangent_step = contact.tangent_mass * -tangent_velocity;
            let friction_bound = (contact.normal_impulse * friction).abs();
            let old_tangent = contact.tangent_impulse;
            contact.tangent_impulse = (old_tangent + tangent_step)
                .min(friction_bound)
                .max(-friction_bound);
            let tangent_delta = contact.tangent_impulse - old_tangent;

            let impulse = Contact::world_impulse(normal, tangent, normal_delta, tangent_delta);
            a.apply_impulse(impulse, contact.arm_a);
            b.apply_impulse(-impulse, contact.arm_b);
        }

        Ok(solved)
    }

    /// Relative velocity of A with respect to B along the normal at `contact`.
    ///
    /// Positive while the bodies approach each other.
    pub fn normal_velocity(
        &self,
        bodies: &[RigidBody],
        contact: &Contact,
    ) -> Result<f64, PhysicsError> {
        let (a, b) = body_pair(bodies, self.body_a, self.body_b)?;
        Ok((a.velocity_at(contact.arm_a) - b.velocity_at(contact.arm_b)).dot(self.normal))
    }
}
