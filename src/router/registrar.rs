use tracing::debug;

use super::{
    node::{BoxedHandler, Endpoint, RouteNode},
    segment::{segmentize, PatternSegment},
};

impl RouteNode {
    /// Registers `handler` for `method` at `pattern`, creating nodes on demand.
    ///
    /// Patterns are not validated. Registering the same method and pattern
    /// again replaces the previous endpoint.
    pub fn insert(&mut self, method: &str, pattern: &str, handler: BoxedHandler) {
        let mut node = self;
        let mut parameters = vec![];

        for segment in segmentize(pattern) {
            node = match PatternSegment::parse(segment) {
                PatternSegment::Static(literal) => {
                    node.static_children.entry(literal.to_owned()).or_default()
                }
                PatternSegment::Param(name) => {
                    parameters.push(name.map(str::to_owned));
                    &mut **node.parameter_child.get_or_insert_with(Box::default)
                }
            };
        }

        let endpoint = Endpoint::new(pattern.to_owned(), parameters, handler);
        if node.endpoints.insert(method.to_owned(), endpoint).is_some() {
            debug!(method, pattern, "route replaced");
        } else {
            debug!(method, pattern, "route added");
        }
    }
}
