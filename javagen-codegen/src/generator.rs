use std::{
    collections::HashMap,
    fmt,
    num::NonZeroUsize,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use javagen_config::Settings;
use javagen_model::{AsNode, Model, NodeKind};
use tracing::{debug, trace, warn};

use crate::{
    CancellationToken, Error, Result, Token, Transform, View, transform::ViewTransform,
};

/// The rendering context.
///
/// Holds one [`Transform`] per [`NodeKind`] and is the only place where
/// dispatch happens. Views receive `&Generator` and call [`Generator::on`]
/// for their children.
///
/// A `Generator` is `Send + Sync`; any number of renders may run against a
/// shared reference. Mutation requires `&mut self`, so registration cannot
/// race with rendering unless the generator is wrapped in a
/// [`SharedGenerator`](crate::SharedGenerator).
#[derive(Default, Clone)]
pub struct Generator {
    transforms: HashMap<NodeKind, Arc<dyn Transform>>,
    settings: Settings,
}

impl Generator {
    /// Create a generator with no transforms and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            transforms: HashMap::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Install `transform` for `kind`.
    ///
    /// Registering a kind twice overwrites the first entry. The replaced
    /// transform is returned.
    pub fn register<T>(&mut self, kind: NodeKind, transform: T) -> Option<Arc<dyn Transform>>
    where
        T: Transform + 'static,
    {
        self.register_arc(kind, Arc::new(transform))
    }

    pub(crate) fn register_arc(
        &mut self,
        kind: NodeKind,
        transform: Arc<dyn Transform>,
    ) -> Option<Arc<dyn Transform>> {
        let previous = self.transforms.insert(kind, transform);
        if previous.is_some() {
            debug!(%kind, "overriding registered transform");
        } else {
            debug!(%kind, "registered transform");
        }
        previous
    }

    /// Install a typed view under `M::KIND`.
    pub fn install<M, V>(&mut self, view: V) -> Option<Arc<dyn Transform>>
    where
        M: Model + 'static,
        V: View<M> + 'static,
    {
        self.register(M::KIND, ViewTransform::<M, V>::new(view))
    }

    /// Remove the transform for `kind`.
    pub fn unregister(&mut self, kind: NodeKind) -> Option<Arc<dyn Transform>> {
        self.transforms.remove(&kind)
    }

    pub fn is_registered(&self, kind: NodeKind) -> bool {
        self.transforms.contains_key(&kind)
    }

    /// Render a node with the transform registered for its kind.
    ///
    /// An unregistered kind yields `Ok(None)`.
    pub fn on<N: AsNode + ?Sized>(&self, node: &N) -> Result<Option<String>> {
        let node = node.as_node();
        let kind = node.kind();
        match self.transforms.get(&kind) {
            Some(transform) => transform.transform(self, node),
            None => {
                trace!(%kind, "no transform registered");
                Ok(None)
            }
        }
    }

    /// Render an optional sub-node; an absent node renders absent.
    pub fn on_option<N: AsNode>(&self, node: Option<&N>) -> Result<Option<String>> {
        match node {
            Some(node) => self.on(node),
            None => Ok(None),
        }
    }

    /// Render every node in order, dropping absent results.
    pub fn on_all<'n, N, I>(&self, nodes: I) -> Result<Vec<String>>
    where
        N: AsNode + 'n,
        I: IntoIterator<Item = &'n N>,
    {
        let mut rendered = Vec::new();
        for node in nodes {
            if let Some(text) = self.on(node)? {
                rendered.push(text);
            }
        }
        Ok(rendered)
    }

    /// Literal spelling of a fixed token.
    pub fn token<T: Token>(&self, token: T) -> &'static str {
        token.text()
    }

    /// Kinds with no registered transform, in declaration order.
    pub fn missing_kinds(&self) -> Vec<NodeKind> {
        NodeKind::ALL
            .into_iter()
            .filter(|kind| !self.is_registered(*kind))
            .collect()
    }

    /// Fail unless every kind has a transform.
    pub fn ensure_complete(&self) -> Result<()> {
        let kinds = self.missing_kinds();
        if kinds.is_empty() {
            Ok(())
        } else {
            Err(Error::Incomplete { kinds })
        }
    }

    /// Render top-level nodes in order.
    ///
    /// `cancel` is checked before each node. On cancellation all output
    /// rendered so far is dropped and [`Error::Cancelled`] is returned.
    pub fn render_all<N: AsNode>(
        &self,
        nodes: &[N],
        cancel: &CancellationToken,
    ) -> Result<Vec<Option<String>>> {
        let total = nodes.len();
        let mut rendered = Vec::with_capacity(total);
        for node in nodes {
            if cancel.is_cancelled() {
                let completed = rendered.len();
                warn!(completed, total, "render cancelled, discarding output");
                return Err(Error::Cancelled { completed, total });
            }
            rendered.push(self.on(node)?);
        }
        Ok(rendered)
    }

    /// Render top-level nodes on up to `workers` scoped threads.
    ///
    /// Output order matches input order. Cancellation and errors follow the
    /// same all-or-nothing contract as [`Generator::render_all`].
    pub fn render_all_parallel<N: AsNode + Sync>(
        &self,
        nodes: &[N],
        cancel: &CancellationToken,
        workers: NonZeroUsize,
    ) -> Result<Vec<Option<String>>> {
        let total = nodes.len();
        if total == 0 {
            return Ok(Vec::new());
        }
        let chunk_size = total.div_ceil(workers.get());
        let completed = AtomicUsize::new(0);

        let chunks = thread::scope(|scope| {
            let handles: Vec<_> = nodes
                .chunks(chunk_size)
                .map(|chunk| {
                    let completed = &completed;
                    scope.spawn(move || -> Result<Vec<Option<String>>> {
                        let mut rendered = Vec::with_capacity(chunk.len());
                        for node in chunk {
                            if cancel.is_cancelled() {
                                return Err(Error::Cancelled {
                                    completed: completed.load(Ordering::Relaxed),
                                    total,
                                });
                            }
                            rendered.push(self.on(node)?);
                            completed.fetch_add(1, Ordering::Relaxed);
                        }
                        Ok(rendered)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .collect::<Vec<_>>()
        });

        let mut rendered = Vec::with_capacity(total);
        for chunk in chunks {
            match chunk {
                Ok(chunk) => rendered.extend(chunk),
                Err(err) => {
                    if err.is_cancelled() {
                        warn!(total, "parallel render cancelled, discarding output");
                    }
                    return Err(err);
                }
            }
        }
        Ok(rendered)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.transforms.keys().collect();
        kinds.sort();
        f.debug_struct("Generator")
            .field("transforms", &kinds)
            .field("settings", &self.settings)
            .finish()
    }
}
