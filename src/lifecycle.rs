/// At-most-once ownership of a mounted resource bundle.
///
/// `acquire` runs setup only when nothing is mounted. Resources clean up in
/// their own `Drop`, so a setup that bails out with `?` releases whatever it
/// had already built, and `release` tears down the mounted bundle.
pub struct Mount<T> {
    inner: Option<T>,
}

impl<T> Default for Mount<T> {
    fn default() -> Self {
        Self { inner: None }
    }
}

impl<T> Mount<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Returns `Ok(false)` without calling `setup` when already mounted.
    pub fn acquire<E>(&mut self, setup: impl FnOnce() -> Result<T, E>) -> Result<bool, E> {
        if self.inner.is_some() {
            return Ok(false);
        }
        self.inner = Some(setup()?);
        Ok(true)
    }

    /// Returns true if something was mounted.
    pub fn release(&mut self) -> bool {
        self.inner.take().is_some()
    }
}
