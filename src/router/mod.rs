pub use matcher::Match;
pub use node::Endpoint;
pub use segment::segmentize;

use node::RouteNode;
use tracing::info;

use crate::{
    request::Request,
    response_writer::ResponseWriter,
    server::{Handler, HttpMethod},
    status_code_registry::StatusCode,
};

mod matcher;
mod node;
mod registrar;
mod segment;

pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Maps a method and a path to a registered handler.
///
/// Routes are added up front and the router is then shared read-only between
/// connection threads. There is no locking: registering while serving is not
/// supported.
///
/// ```text
/// router.get("/people", index);         // only /people
/// router.get("/people/:id", show);      // /people/*, binds `id`
/// router.get("/people/?/pets", pets);   // /people/*/pets, binds nothing
/// ```
#[derive(Debug, Default)]
pub struct Router {
    root: RouteNode,
}

impl Router {
    pub fn new() -> Self {
        Self {
            root: RouteNode::new(),
        }
    }

    pub fn add_route(
        &mut self,
        method: impl AsRef<str>,
        pattern: impl AsRef<str>,
        handler: impl Handler + Send + Sync + 'static,
    ) {
        self.root
            .insert(method.as_ref(), pattern.as_ref(), Box::new(handler));
    }

    pub fn get(&mut self, pattern: impl AsRef<str>, handler: impl Handler + Send + Sync + 'static) {
        self.add_route(HttpMethod::Get, pattern, handler);
    }

    pub fn post(&mut self, pattern: impl AsRef<str>, handler: impl Handler + Send + Sync + 'static) {
        self.add_route(HttpMethod::Post, pattern, handler);
    }

    pub fn put(&mut self, pattern: impl AsRef<str>, handler: impl Handler + Send + Sync + 'static) {
        self.add_route(HttpMethod::Put, pattern, handler);
    }

    pub fn patch(&mut self, pattern: impl AsRef<str>, handler: impl Handler + Send + Sync + 'static) {
        self.add_route(HttpMethod::Patch, pattern, handler);
    }

    pub fn delete(&mut self, pattern: impl AsRef<str>, handler: impl Handler + Send + Sync + 'static) {
        self.add_route(HttpMethod::Delete, pattern, handler);
    }

    /// Looks up the endpoint for `method` at the already segmented path.
    ///
    /// A path that exists without `method` is reported the same way as a path
    /// that does not exist.
    pub fn find_endpoint<'r, 'p>(
        &'r self,
        method: &str,
        segments: &[&'p str],
    ) -> Option<Match<'r, 'p>> {
        self.root.find(method, segments)
    }

    pub fn handle(&self, w: &mut ResponseWriter, r: &mut Request) {
        let segments = segmentize(r.get_path());
        let Some(m) = self.find_endpoint(r.get_http_method(), &segments) else {
            info!("no match");
            w.set_status(StatusCode::NotFound);
            w.set_body_str(NOT_FOUND_BODY);
            return;
        };

        info!("match: {}", m.endpoint.pattern());
        let endpoint = m.endpoint;
        let bindings: Vec<(String, String)> = m
            .bindings()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();

        add_route_arguments(r, bindings);
        endpoint.handler().handle(w, r);
    }
}

impl Handler for Router {
    fn handle(&self, w: &mut ResponseWriter, r: &mut Request) {
        self.handle(w, r);
    }
}

/// Path arguments are exposed as query parameters and replace any query
/// parameter of the same name.
fn add_route_arguments(r: &mut Request, bindings: Vec<(String, String)>) {
    let query = r.get_query_mut();
    for (name, value) in bindings {
        query.set(name, value);
    }
}
