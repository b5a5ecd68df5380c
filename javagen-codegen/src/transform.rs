//! Renderers for a single node kind.

use std::marker::PhantomData;

use javagen_model::{Model, NodeRef};

use crate::{Generator, Result};

/// Renders nodes of one kind to optional text.
///
/// `Ok(None)` means "render nothing" and is not an error. Implementations
/// must be pure functions of the generator state and the node.
pub trait Transform: Send + Sync {
    fn transform(&self, generator: &Generator, node: NodeRef<'_>) -> Result<Option<String>>;
}

impl<F> Transform for F
where
    F: Fn(&Generator, NodeRef<'_>) -> Result<Option<String>> + Send + Sync,
{
    fn transform(&self, generator: &Generator, node: NodeRef<'_>) -> Result<Option<String>> {
        self(generator, node)
    }
}

/// A typed renderer for model type `M`.
///
/// Install with [`Generator::install`]; the generator takes care of
/// narrowing the dispatched node to `M`.
pub trait View<M: Model>: Send + Sync {
    fn render(&self, generator: &Generator, model: &M) -> Result<Option<String>>;
}

/// Adapts a [`View`] to the untyped [`Transform`] interface.
pub(crate) struct ViewTransform<M, V> {
    view: V,
    _model: PhantomData<fn(&M)>,
}

impl<M, V> ViewTransform<M, V> {
    pub(crate) fn new(view: V) -> Self {
        Self {
            view,
            _model: PhantomData,
        }
    }
}

impl<M, V> Transform for ViewTransform<M, V>
where
    M: Model,
    V: View<M>,
{
    fn transform(&self, generator: &Generator, node: NodeRef<'_>) -> Result<Option<String>> {
        match M::from_node(node) {
            Some(model) => self.view.render(generator, model),
            None => Ok(None),
        }
    }
}
