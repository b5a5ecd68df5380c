use std::{
    num::NonZeroUsize,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use javagen_model::{AsNode, Model, NodeKind};

use crate::{CancellationToken, Generator, Result, Transform, View};

/// A generator that can be extended while renders are in flight.
///
/// Registration takes the write lock; rendering holds the read lock for
/// the whole of one call, so a render never observes a half-updated
/// table.
#[derive(Debug, Clone, Default)]
pub struct SharedGenerator {
    inner: Arc<RwLock<Generator>>,
}

impl SharedGenerator {
    pub fn new(generator: Generator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(generator)),
        }
    }

    // A panicking view cannot leave the table half-written, so a poisoned
    // lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Generator> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Generator> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register<T>(&self, kind: NodeKind, transform: T) -> Option<Arc<dyn Transform>>
    where
        T: Transform + 'static,
    {
        self.write().register(kind, transform)
    }

    pub fn install<M, V>(&self, view: V) -> Option<Arc<dyn Transform>>
    where
        M: Model + 'static,
        V: View<M> + 'static,
    {
        self.write().install(view)
    }

    pub fn unregister(&self, kind: NodeKind) -> Option<Arc<dyn Transform>> {
        self.write().unregister(kind)
    }

    pub fn on<N: AsNode + ?Sized>(&self, node: &N) -> Result<Option<String>> {
        self.read().on(node)
    }

    pub fn render_all<N: AsNode>(
        &self,
        nodes: &[N],
        cancel: &CancellationToken,
    ) -> Result<Vec<Option<String>>> {
        self.read().render_all(nodes, cancel)
    }

    pub fn render_all_parallel<N: AsNode + Sync>(
        &self,
        nodes: &[N],
        cancel: &CancellationToken,
        workers: NonZeroUsize,
    ) -> Result<Vec<Option<String>>> {
        self.read().render_all_parallel(nodes, cancel, workers)
    }

    /// Run `f` with read access to the current generator.
    pub fn with<R>(&self, f: impl FnOnce(&Generator) -> R) -> R {
        f(&self.read())
    }

    /// A point-in-time copy of the generator, independent of later
    /// registrations.
    pub fn snapshot(&self) -> Generator {
        self.read().clone()
    }
}

impl From<Generator> for SharedGenerator {
    fn from(generator: Generator) -> Self {
        Self::new(generator)
    }
}
