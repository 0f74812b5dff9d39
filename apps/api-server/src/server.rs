//! Process lifecycle - start and stop of the HTTP listener and storage.

use std::io;
use std::net::SocketAddr;

use actix_rt::task::JoinHandle;
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// A listening server.
///
/// Dropping it leaves the server running; call [`RunningServer::stop`] or
/// [`RunningServer::wait`] to shut down and release the database pool.
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
    #[cfg_attr(not(feature = "postgres"), allow(dead_code))]
    state: AppState,
}

/// Build application state, bind, and start serving in the background.
///
/// Must be called from within an actix (or tokio `LocalSet`) runtime.
pub async fn start(config: AppConfig) -> io::Result<RunningServer> {
    let state = AppState::new(config.database.as_ref()).await;
    start_with_state(&config, state)
}

/// Like [`start`], but serves an already-built state.
pub fn start_with_state(config: &AppConfig, state: AppState) -> io::Result<RunningServer> {
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?;

    let addr = server.addrs().first().copied().ok_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "server bound no address")
    })?;

    let server = server.run();
    let handle = server.handle();
    let task = actix_rt::spawn(server);

    tracing::info!(%addr, "Blog API listening");

    Ok(RunningServer {
        addr,
        handle,
        task,
        state,
    })
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections, let in-flight requests finish, then close
    /// the database pool.
    pub async fn stop(self) -> io::Result<()> {
        tracing::info!("Stopping server");
        self.handle.stop(true).await;
        self.finish().await
    }

    /// Run until the server exits on its own (SIGINT/SIGTERM).
    pub async fn wait(self) -> io::Result<()> {
        self.finish().await
    }

    async fn finish(self) -> io::Result<()> {
        let served = self.task.await.map_err(io::Error::other)?;

        #[cfg(feature = "postgres")]
        if let Some(db) = &self.state.db {
            db.close().await.map_err(io::Error::other)?;
        }

        tracing::info!("Server stopped");
        served
    }
}
