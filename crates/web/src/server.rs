use crate::api::AppState;
use crate::config::{ServerConfig, StoreKind};
use crate::router::{self, Reply};
use anyhow::{anyhow, Context};
use cards_core::RngState;
use cards_data::{DeckStore, FileStore, MemoryStore};
use std::io::Read;
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tracing::{info, warn};

const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn open_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn DeckStore>> {
    let store: Arc<dyn DeckStore> = match config.store {
        StoreKind::Memory => Arc::new(MemoryStore::new()),
        StoreKind::File => Arc::new(
            FileStore::open(&config.data_dir)
                .with_context(|| format!("open deck store {}", config.data_dir.display()))?,
        ),
    };
    Ok(store)
}

pub fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let store = open_store(config)?;
    let rng = config
        .seed
        .map(RngState::from_seed)
        .unwrap_or_else(RngState::from_entropy);
    Ok(AppState::new(store, rng, config.allow_empty_custom))
}

/// Binds and serves until every worker stops.
pub fn run(config: &ServerConfig) -> anyhow::Result<()> {
    let state = Arc::new(build_state(config)?);
    let addr = config.bind_addr();
    let server =
        Arc::new(Server::http(&addr).map_err(|err| anyhow!("start server on {addr}: {err}"))?);
    info!(
        %addr,
        workers = config.workers,
        store = ?config.store,
        seed = state.seed(),
        "cards server listening"
    );

    let mut workers = Vec::with_capacity(config.workers);
    for index in 0..config.workers {
        let server = server.clone();
        let state = state.clone();
        let handle = thread::Builder::new()
            .name(format!("cards-worker-{index}"))
            .spawn(move || serve(&server, &state))
            .context("spawn worker")?;
        workers.push(handle);
    }
    for handle in workers {
        if handle.join().is_err() {
            warn!("worker thread panicked");
        }
    }
    Ok(())
}

fn serve(server: &Server, state: &AppState) {
    loop {
        let request = match server.recv() {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "stopped accepting requests");
                return;
            }
        };
        if let Err(err) = handle_request(request, state) {
            warn!(error = %err, "request error");
        }
    }
}

fn handle_request(mut request: Request, state: &AppState) -> anyhow::Result<()> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = Vec::new();
    Read::take(request.as_reader(), MAX_BODY_BYTES + 1).read_to_end(&mut body)?;
    let reply = if body.len() as u64 > MAX_BODY_BYTES {
        Reply {
            status: 413,
            content_type: router::JSON,
            body: br#"{"message":"Request body is too large"}"#.to_vec(),
        }
    } else {
        router::dispatch(state, &method, &url, &body)
    };
    info!(%method, path = %url, status = reply.status, "request");

    let header = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes())
        .map_err(|_| anyhow!("invalid content type {}", reply.content_type))?;
    let response = Response::from_data(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(header);
    request.respond(response)?;
    Ok(())
}
