//! Drawing facts without replacement.

use crate::error::SelectError;
use crate::fact::{FactId, FactPool};
use factdeck_core::Result;
use rand::Rng;

/// Draws one fact uniformly at random and returns it with the rest of the pool.
///
/// # Errors
///
/// Returns [`SelectError::PoolExhausted`] if the pool is empty. Callers are
/// expected to check emptiness first, since running out is a policy decision.
pub fn draw<R: Rng>(pool: FactPool, rng: &mut R) -> Result<(FactId, FactPool), SelectError> {
    if pool.is_empty() {
        return Err(SelectError::PoolExhausted.into());
    }

    let mut remaining = pool;
    let index = rng.gen_range(0..remaining.len());
    let fact = remaining.take(index);
    Ok((fact, remaining))
}

/// Draws one fact using the thread-local generator.
///
/// # Errors
///
/// Returns [`SelectError::PoolExhausted`] if the pool is empty.
pub fn draw_with_thread_rng(pool: FactPool) -> Result<(FactId, FactPool), SelectError> {
    draw(pool, &mut rand::thread_rng())
}
