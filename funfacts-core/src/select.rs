//! Uniform random selection over fact pools.
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("cannot pick from an empty pool")]
    EmptyPool,
}

/// Pick one element uniformly at random.
///
/// # Errors
///
/// Returns [`SelectError::EmptyPool`] when `items` is empty.
pub fn pick<'a, T, R>(rng: &mut R, items: &'a [T]) -> Result<&'a T, SelectError>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(SelectError::EmptyPool);
    }
    let idx = rng.gen_range(0..items.len());
    Ok(&items[idx])
}
