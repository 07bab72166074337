pub mod rigid_body;

pub use rigid_body::{BodyType, RigidBody};

use crate::error::PhysicsError;

/// Borrows two distinct bodies from the registry mutably at once.
pub fn body_pair_mut(
    bodies: &mut [RigidBody],
    idx_a: usize,
    idx_b: usize,
) -> Result<(&mut RigidBody, &mut RigidBody), PhysicsError> {
    if idx_a == idx_b {
        return Err(PhysicsError::SelfContact(idx_a));
    }
    let len = bodies.len();
    for index in [idx_a, idx_b] {
        if index >= len {
            return Err(PhysicsError::BodyOutOfBounds { index, len });
        }
    }

    if idx_a < idx_b {
        let (head, tail) = bodies.split_at_mut(idx_b);
        Ok((&mut head[idx_a], &mut tail[0]))
    } else {
        let (head, tail) = bodies.split_at_mut(idx_a);
        Ok((&mut tail[0], &mut head[idx_b]))
    }
}

/// Borrows two distinct bodies from the registry immutably.
pub fn body_pair(
    bodies: &[RigidBody],
    idx_a: usize,
    idx_b: usize,
) -> Result<(&RigidBody, &RigidBody), PhysicsError> {
    if idx_a == idx_b {
        return Err(PhysicsError::SelfContact(idx_a));
    }
    let len = bodies.len();
    let a = bodies
        .get(idx_a)
        .ok_or(PhysicsError::BodyOutOfBounds { index: idx_a, len })?;
    let b = bodies
        .get(idx_b)
        .ok_or(PhysicsError::BodyOutOfBounds { index: idx_b, len })?;
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_bodies() -> Vec<RigidBody> {
        (1..=3)
            .map(|m| RigidBody::new_dynamic(m as f64, 1.0))
            .collect()
    }

    #[test]
    fn test_body_pair_mut_either_order() {
        let mut bodies = three_bodies();
        {
            let (a, b) = body_pair_mut(&mut bodies, 2, 0).unwrap();
            assert_eq!(a.mass, 3.0);
            assert_eq!(b.mass, 1.0);
        }
        let (a, b) = body_pair_mut(&mut bodies, 0, 1).unwrap();
        assert_eq!(a.mass, 1.0);
        assert_eq!(b.mass, 2.0);
    }

    #[test]
    fn test_body_pair_rejects_bad_indices() {
        let mut bodies = three_bodies();
        assert_eq!(
            body_pair_mut(&mut bodies, 1, 1).unwrap_err(),
            PhysicsError::SelfContact(1)
        );
        assert_eq!(
            body_pair(&bodies, 0, 7).unwrap_err(),
            PhysicsError::BodyOutOfBounds { index: 7, len: 3 }
        );
    }
}
