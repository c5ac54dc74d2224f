//! Single binary web server: standings and match entry via REST, optional static frontend.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Optional env: STANDINGS_CONFIG (JSON scoring/tie-break config), TEAMS_CSV and
//! MATCHES_CSV (seed data), STATIC_DIR (built frontend served at /).

use actix_files::{Files, NamedFile};
use actix_web::{
    delete,
    dev::{fn_service, ServiceRequest, ServiceResponse},
    get, post,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use volley_standings::import::{read_matches_from_path, read_teams_from_path};
use volley_standings::{
    compute_standings, BatchPolicy, GroupId, League, LeagueError, MatchId, MatchResult,
    StandingsConfig, TeamRegistry,
};

/// In-memory league. Writes are serialized by the lock; standings are recomputed per request.
type AppState = Data<RwLock<League>>;
type ConfigState = Data<StandingsConfig>;

/// Display labels for the standings table, keyed by output field. `no` is the 1-based rank.
const COLUMNS: [(&str, &str); 12] = [
    ("no", "#"),
    ("team_name", "Team Name"),
    ("wins", "W"),
    ("losses", "L"),
    ("total_matches", "T"),
    ("points", "Pts."),
    ("wins_3_0", "3-0"),
    ("wins_3_1", "3-1"),
    ("wins_3_2", "3-2"),
    ("losses_0_3", "0-3"),
    ("losses_1_3", "1-3"),
    ("losses_2_3", "2-3"),
];

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct ColumnLabel {
    accessor_key: &'static str,
    header: &'static str,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
    group_id: GroupId,
}

#[derive(Deserialize)]
struct StandingsQuery {
    /// Only count matches played on or before this date.
    as_of: Option<NaiveDate>,
}

#[derive(Serialize)]
struct RecordErrorResponse {
    index: usize,
    error: String,
}

#[derive(Serialize)]
struct AddMatchesResponse {
    ids: Vec<MatchId>,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

fn error_response(e: LeagueError) -> HttpResponse {
    match e {
        LeagueError::MatchNotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        LeagueError::BatchRejected(ref errors) => {
            let records: Vec<RecordErrorResponse> = errors
                .iter()
                .map(|r| RecordErrorResponse {
                    index: r.index,
                    error: r.error.to_string(),
                })
                .collect();
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string(), "records": records }))
        }
        LeagueError::Engine(_) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "volley-standings",
    })
}

/// Column definitions for the standings table.
#[get("/api/columns")]
async fn api_columns() -> impl Responder {
    let columns: Vec<ColumnLabel> = COLUMNS
        .iter()
        .map(|&(accessor_key, header)| ColumnLabel { accessor_key, header })
        .collect();
    HttpResponse::Ok().json(columns)
}

/// Active scoring table and tie-break order.
#[get("/api/config")]
async fn api_config(config: ConfigState) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}

#[get("/api/teams")]
async fn api_list_teams(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&g.registry)
}

/// Register a team in group A or B.
#[post("/api/teams")]
async fn api_add_team(state: AppState, body: Json<AddTeamBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match g.add_team(body.name, body.group_id) {
        Ok(id) => HttpResponse::Ok().json(g.registry.get(id)),
        Err(e) => error_response(e),
    }
}

#[get("/api/matches")]
async fn api_list_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.matches())
}

/// Add a batch of match results. Any invalid record rejects the whole batch.
#[post("/api/matches")]
async fn api_add_matches(state: AppState, body: Json<Vec<MatchResult>>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_matches(body.into_inner()) {
        Ok(ids) => HttpResponse::Ok().json(AddMatchesResponse { ids }),
        Err(e) => error_response(e),
    }
}

#[delete("/api/matches/{id}")]
async fn api_remove_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove_match(path.id) {
        Ok(removed) => HttpResponse::Ok().json(removed),
        Err(e) => error_response(e),
    }
}

/// Standings for both groups, recomputed from every stored match.
#[get("/api/standings")]
async fn api_standings(state: AppState, config: ConfigState, query: Query<StandingsQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let matches = match query.as_of {
        Some(date) => g.matches_as_of(date),
        None => g.matches().to_vec(),
    };
    // Stored matches were validated on entry, so rejecting here only reports corrupt state.
    match compute_standings(&g.registry, &matches, &config, BatchPolicy::RejectBatch) {
        Ok(report) => HttpResponse::Ok().json(report.standings),
        Err(e) => {
            log::error!("Standings computation failed on stored matches: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Built frontend. Paths with no matching file (client-side routes such as /add-matches)
/// get index.html so the router can take over.
fn frontend_files(dir: &str) -> Files {
    let index = std::path::Path::new(dir).join("index.html");
    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Load config and seed data from the paths given in the environment.
fn load_from_env() -> Result<(StandingsConfig, League), String> {
    let config = match std::env::var("STANDINGS_CONFIG") {
        Ok(path) => StandingsConfig::from_path(&path).map_err(|e| format!("{path}: {e}"))?,
        Err(_) => StandingsConfig::default(),
    };
    let registry = match std::env::var("TEAMS_CSV") {
        Ok(path) => read_teams_from_path(&path).map_err(|e| e.to_string())?,
        Err(_) => TeamRegistry::new(),
    };
    let mut league = League::new(registry);
    if let Ok(path) = std::env::var("MATCHES_CSV") {
        let matches = read_matches_from_path(&path).map_err(|e| e.to_string())?;
        league
            .add_matches(matches)
            .map_err(|e| match e {
                LeagueError::BatchRejected(errors) => errors
                    .iter()
                    .map(|r| format!("{path} record #{}: {}", r.index, r.error))
                    .collect::<Vec<_>>()
                    .join("; "),
                other => other.to_string(),
            })?;
    }
    Ok((config, league))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);

    let (config, league) = load_from_env().map_err(|e| {
        log::error!("Startup failed: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    log::info!(
        "Loaded {} team(s) and {} match(es)",
        league.registry.len(),
        league.matches().len()
    );
    let static_dir = std::env::var("STATIC_DIR").ok();

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(league));
    let config = Data::new(config);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .service(api_health)
            .service(api_columns)
            .service(api_config)
            .service(api_list_teams)
            .service(api_add_team)
            .service(api_list_matches)
            .service(api_add_matches)
            .service(api_remove_match)
            .service(api_standings);
        match &static_dir {
            Some(dir) => app.service(frontend_files(dir)),
            None => app,
        }
    })
    .bind(bind)?
    .run()
    .await
}
