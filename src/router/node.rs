use std::{collections::HashMap, fmt};

use crate::server::Handler;

pub type BoxedHandler = Box<dyn Handler + Send + Sync>;

/// A registered handler together with the wildcards met on the way to it.
///
/// `parameters[i]` describes the `i`-th wildcard of the pattern, shallow to
/// deep. Unnamed wildcards are `None` and never reach the handler.
pub struct Endpoint {
    pattern: String,
    parameters: Vec<Option<String>>,
    handler: BoxedHandler,
}

impl Endpoint {
    pub fn new(pattern: String, parameters: Vec<Option<String>>, handler: BoxedHandler) -> Self {
        Self {
            pattern,
            parameters,
            handler,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn parameters(&self) -> &[Option<String>] {
        &self.parameters
    }

    pub fn handler(&self) -> &(dyn Handler + Send + Sync) {
        self.handler.as_ref()
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("pattern", &self.pattern)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// One level of path depth in the route trie.
///
/// Static children and the parameter child are independent: a node may have
/// both, and lookups always try the static edge first.
#[derive(Default, Debug)]
pub struct RouteNode {
    pub(super) static_children: HashMap<String, RouteNode>,
    pub(super) parameter_child: Option<Box<RouteNode>>,
    pub(super) endpoints: HashMap<String, Endpoint>,
}

impl RouteNode {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        1 + self.static_children.values().map(RouteNode::len).sum::<usize>()
            + self.parameter_child.as_ref().map_or(0, |child| child.len())
    }
}
