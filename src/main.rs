use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use skill_match::config::{LoggingSettings, Settings, StoreBackend};
use skill_match::core::Matcher;
use skill_match::routes::{self, AppState};
use skill_match::services::{CacheManager, CachedStore, MatchService, MemoryStore, PostgresStore, RecordStore};
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

async fn build_store(settings: &Settings) -> io::Result<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match settings.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory record store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Postgres => {
            let db = settings.database.as_ref().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "store.backend = postgres requires [database]")
            })?;

            let store = PostgresStore::from_settings(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                io::Error::new(io::ErrorKind::Other, e.to_string())
            })?;

            info!("PostgreSQL record store initialized (max: {} connections)", db.max_connections.unwrap_or(10));
            Arc::new(store)
        }
    };

    if !settings.cache.enabled {
        info!("Caching disabled");
        return Ok(store);
    }

    let ttl = settings.cache.ttl_secs.unwrap_or(60);
    let l1_size = settings.cache.l1_cache_size.unwrap_or(1000);

    let cache = match &settings.cache.redis_url {
        Some(url) => match CacheManager::with_redis(url, l1_size, ttl).await {
            Ok(cache) => cache,
            Err(e) => {
                warn!("Failed to connect to Redis ({}), falling back to in-process cache", e);
                CacheManager::in_memory(l1_size, ttl)
            }
        },
        None => CacheManager::in_memory(l1_size, ttl),
    };

    info!("Cache manager initialized (L1: {} entries, TTL: {}s, redis: {})", l1_size, ttl, cache.has_redis());

    Ok(Arc::new(CachedStore::new(store, Arc::new(cache))))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);
    info!("Starting Skill Match service...");

    let store = build_store(&settings).await?;

    let matcher = Matcher::new(settings.matching.shortlist_limit);
    info!("Matcher initialized with shortlist limit {}", matcher.limit());

    let app_state = AppState {
        service: MatchService::new(store, matcher),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
