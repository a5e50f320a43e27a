#![allow(missing_docs)]

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode, body::Incoming as IncomingBody};
use hyper_util::rt::TokioIo;
use plaza::render::render_document;
use plaza::route_table;
use plaza_pages::Page;
use plaza_router::RouteTable;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

fn full<T: Into<Bytes>>(chunk: T) -> BoxBody {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

async fn handle_request(
    req: Request<IncomingBody>,
    table: Arc<RouteTable<Page>>,
) -> Result<Response<BoxBody>, hyper::Error> {
    let path = req.uri().path();

    match render_document(&table, path) {
        Some(content) => Ok(Response::builder()
            .header("content-type", "text/html")
            .body(full(content))
            .unwrap()),
        None => {
            tracing::debug!(path, "no route matched");

            Ok(Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(full("Not Found"))
                .unwrap())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let table = Arc::new(route_table()?);

    let listener = TcpListener::bind("0.0.0.0:9999").await?;
    tracing::info!("server running on http://0.0.0.0:9999");

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let table = Arc::clone(&table);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let table = Arc::clone(&table);
                async move { handle_request(req, table).await }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::error!(?err, "error serving connection");
            }
        });
    }
}
