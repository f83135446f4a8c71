pub use config::Config;
pub use headers::Headers;
pub use query::Query;
pub use request::Request;
pub use response_writer::ResponseWriter;
pub use router::{segmentize, Endpoint, Match, Router, NOT_FOUND_BODY};
pub use server::{Handler, HttpMethod, Server};
pub use status_code_registry::StatusCode;

use tracing::info;

mod config;
mod headers;
mod multi_map;
mod query;
mod request;
mod response_writer;
mod router;
mod server;
mod status_code_registry;
mod stream_reader;
#[cfg(test)]
mod test_utils;

fn home(w: &mut ResponseWriter, _: &mut Request) {
    w.set_status(StatusCode::OK);
    w.set_body_str("quo vadis?");
}

fn show_widget(w: &mut ResponseWriter, r: &mut Request) {
    let id = r.get_query_param("id").unwrap_or_default();
    let body = format!("widget {}", id);
    w.set_status(StatusCode::OK);
    w.set_body_str(&body);
}

fn search_people(w: &mut ResponseWriter, r: &mut Request) {
    let name = r.get_query_param("name").unwrap_or_default();
    let body = format!("searching people named {:?}", name);
    w.set_status(StatusCode::OK);
    w.set_body_str(&body);
}

fn show_person(w: &mut ResponseWriter, r: &mut Request) {
    let id = r.get_query_param("id").unwrap_or_default();
    let body = format!("person {}", id);
    w.set_status(StatusCode::OK);
    w.set_body_str(&body);
}

fn echo(w: &mut ResponseWriter, r: &mut Request) {
    let body = r.get_body().unwrap_or_default().to_vec();
    w.set_status(StatusCode::OK);
    w.set_body(body, "application/octet-stream");
}

/// Routes served by the binary.
pub fn demo_router() -> Router {
    let mut router = Router::new();
    router.get("/", home);
    router.get("/widgets/:id", show_widget);
    router.get("/people/search", search_people);
    router.get("/people/:id", show_person);
    router.post("/echo", echo);
    router
}

pub fn run(config: &Config) -> anyhow::Result<()> {
    let server = Server::bind(&config.addr)?
        .with_read_timeout(config.read_timeout())
        .with_max_body_bytes(config.max_body_bytes);
    info!(addr = %server.local_addr()?, "listening");

    server.run(demo_router());
    Ok(())
}
