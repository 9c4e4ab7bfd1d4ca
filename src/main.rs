use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::runtime::Handle;

use cisec_nexus::application::ports::{RandomSource, Scheduler};
use cisec_nexus::application::services::{
    AcademicPortalService, CourseService, ResponseSelector, SimulatorSessions,
};
use cisec_nexus::domain::{PATIENT_OPENING_LINE, ReplyPool};
use cisec_nexus::infrastructure::catalog::{StaticCourseCatalog, StaticGradeBook};
use cisec_nexus::infrastructure::observability::{TracingConfig, init_tracing};
use cisec_nexus::infrastructure::random::{SeededRandomSource, ThreadRngSource};
use cisec_nexus::infrastructure::scheduling::TokioScheduler;
use cisec_nexus::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let random: Arc<dyn RandomSource> = match settings.simulator.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded reply selection");
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(ThreadRngSource),
    };
    let selector = Arc::new(ResponseSelector::new(ReplyPool::patient_maria(), random));
    let scheduler: Arc<dyn Scheduler> = Arc::new(TokioScheduler::new(Handle::current()));

    let simulator_sessions = Arc::new(SimulatorSessions::new(
        selector,
        scheduler,
        settings.simulator.reply_latency(),
        PATIENT_OPENING_LINE,
        settings.simulator.max_sessions,
    ));
    let portal_service = Arc::new(AcademicPortalService::new(
        Arc::new(StaticGradeBook::demo()),
        settings.portal.verification_delay(),
    ));
    let course_service = Arc::new(CourseService::new(Arc::new(StaticCourseCatalog::demo())));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        simulator_sessions,
        portal_service,
        course_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
