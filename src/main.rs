//! 모로코 여행 콘텐츠 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB에서 여행지/장소 문서를 읽어 Redis에 캐시하고, 로그인 세션마다
//! 즐겨찾기 문서를 구독해 낙관적 토글을 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use morocco_travel_service::caching::redis::RedisClient;
use morocco_travel_service::config::{CorsConfig, FavoritesBackend, FavoritesConfig, ServerConfig};
use morocco_travel_service::core::registry::ServiceLocator;
use morocco_travel_service::db::Database;
use morocco_travel_service::repositories::destinations::DestinationRepository;
use morocco_travel_service::repositories::favorites::{InMemoryFavoritesStore, MongoFavoritesStore};
use morocco_travel_service::repositories::places::PlaceRepository;
use morocco_travel_service::routes::configure_all_routes;
use morocco_travel_service::services::auth::TokenService;
use morocco_travel_service::services::destinations::DestinationService;
use morocco_travel_service::services::favorites::{FavoritesStore, SessionManager};
use morocco_travel_service::services::places::PlaceService;
use morocco_travel_service::utils::display_terminal;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    display_terminal::print_boxed_title("🇲🇦 Morocco Travel Service");

    if let Err(e) = bootstrap().await {
        error!("❌ 서비스 초기화 실패: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server().await
}

/// 의존 순서대로 컴포넌트를 만들어 [`ServiceLocator`]에 등록합니다
///
/// 1. MongoDB / Redis 연결
/// 2. 리포지토리와 캐시 초기화
/// 3. 서비스와 즐겨찾기 세션 관리자
async fn bootstrap() -> Result<(), Box<dyn std::error::Error>> {
    display_terminal::print_step_start(1, "데이터 스토어 연결");
    let database = Arc::new(Database::new().await?);
    display_terminal::print_sub_task("MongoDB", database.database_name());
    let redis_client = Arc::new(RedisClient::new().await?);
    display_terminal::print_sub_task("Redis", "connected");
    ServiceLocator::set(Arc::clone(&database));
    ServiceLocator::set(Arc::clone(&redis_client));
    display_terminal::print_step_complete(1, "데이터 스토어 연결", 2);

    display_terminal::print_step_start(2, "리포지토리 초기화");
    let destination_repo = Arc::new(DestinationRepository::new(
        Arc::clone(&database),
        Arc::clone(&redis_client),
    ));
    let place_repo = Arc::new(PlaceRepository::new(
        Arc::clone(&database),
        Arc::clone(&redis_client),
    ));
    ServiceLocator::set(Arc::clone(&destination_repo));
    ServiceLocator::set(Arc::clone(&place_repo));
    display_terminal::print_step_complete(2, "리포지토리 초기화", 2);

    display_terminal::print_step_start(3, "서비스 초기화");
    let destination_service = Arc::new(DestinationService::new(destination_repo));
    let place_service = Arc::new(PlaceService::new(
        Arc::clone(&destination_service),
        place_repo,
    ));

    // 외부에서 바뀐 콘텐츠가 남아 있지 않도록 부팅 시 캐시를 비움
    let cleared = destination_service.refresh_cache().await? + place_service.refresh_cache().await?;
    display_terminal::print_sub_task("cache", &format!("{} keys cleared", cleared));

    let favorites_store: Arc<dyn FavoritesStore> = match FavoritesConfig::backend() {
        FavoritesBackend::MongoDb => Arc::new(MongoFavoritesStore::new(Arc::clone(&database))),
        FavoritesBackend::Memory => {
            warn!("⚠️ 즐겨찾기를 프로세스 메모리에 저장합니다 (재시작 시 사라짐)");
            Arc::new(InMemoryFavoritesStore::new())
        }
    };
    display_terminal::print_sub_task("favorites", &format!("{:?}", FavoritesConfig::backend()));

    ServiceLocator::set(destination_service);
    ServiceLocator::set(place_service);
    ServiceLocator::set(Arc::new(TokenService::from_env()));
    let sessions = Arc::new(SessionManager::new(
        favorites_store,
        FavoritesConfig::write_timeout(),
        FavoritesConfig::session_idle_ttl(),
    ));
    spawn_session_sweeper(Arc::clone(&sessions));
    ServiceLocator::set(sessions);
    display_terminal::print_step_complete(3, "서비스 초기화", 4);

    display_terminal::print_final_summary(2, 4);
    Ok(())
}

/// 유휴 세션을 주기적으로 닫는 작업을 띄웁니다
fn spawn_session_sweeper(sessions: Arc<SessionManager>) {
    let period = sessions.idle_ttl().min(Duration::from_secs(60));
    info!("⌛ 세션 유휴 만료: {}초 (점검 주기 {}초)", sessions.idle_ttl().as_secs(), period.as_secs());

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = sessions.evict_idle();
            if evicted > 0 {
                info!("🧹 유휴 세션 {}개 정리, 활성 세션 {}개", evicted, sessions.active_sessions());
            }
        }
    });
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// ```rust,ignore
/// // Health check: http://127.0.0.1:8080/health
/// // API 엔드포인트: http://127.0.0.1:8080/api/v1/*
/// ```
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/destinations", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("rate limit 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 표준 에러로 출력
    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=morocco_travel_service::services::favorites=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
/// 즐겨찾기 요청이 세션 헤더를 보내므로 `X-Session-Id`를 허용 헤더에 포함합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-session-id"),
        ])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
