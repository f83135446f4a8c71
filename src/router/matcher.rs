use super::node::{Endpoint, RouteNode};

/// The endpoint selected for a request plus the values captured by every
/// wildcard along the way, in path order.
#[derive(Debug)]
pub struct Match<'r, 'p> {
    pub endpoint: &'r Endpoint,
    pub values: Vec<&'p str>,
}

impl<'r, 'p> Match<'r, 'p> {
    fn new(endpoint: &'r Endpoint, values: Vec<&'p str>) -> Self {
        Self { endpoint, values }
    }

    /// Name/value pairs for the named wildcards only.
    pub fn bindings<'s>(&'s self) -> impl Iterator<Item = (&'r str, &'p str)> + 's {
        self.endpoint
            .parameters()
            .iter()
            .zip(&self.values)
            .filter_map(|(name, value)| name.as_deref().map(|name| (name, *value)))
    }
}

impl RouteNode {
    /// Descends one node per segment. A static edge, when present, is taken
    /// over the parameter edge and never revisited, even if it dead-ends.
    pub fn find<'r, 'p>(&'r self, method: &str, segments: &[&'p str]) -> Option<Match<'r, 'p>> {
        let mut node = self;
        let mut values = vec![];

        for &segment in segments {
            node = if let Some(child) = node.static_children.get(segment) {
                child
            } else if let Some(child) = node.parameter_child.as_deref() {
                values.push(segment);
                child
            } else {
                return None;
            };
        }

        node.endpoints
            .get(method)
            .map(|endpoint| Match::new(endpoint, values))
    }
}
