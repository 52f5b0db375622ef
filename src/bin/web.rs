//! Single binary web server: HTML from templates/, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_DIR (where
//! the roster files live), REQUIRE_GROUP / REQUIRE_COURT (1 to make the
//! group/court selection mandatory).

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_match_web::{
    ClubConfig, FileStore, LogNotifier, MatchMaker, MatchType,
};
use serde::Deserialize;
use std::sync::RwLock;
use uuid::Uuid;

/// Shared state: one club per server, guarded by a lock.
type AppState = Data<RwLock<MatchMaker>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    #[serde(default)]
    group_id: Option<Uuid>,
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize, Default)]
struct ClearPlayersBody {
    #[serde(default)]
    group_id: Option<Uuid>,
}

#[derive(Deserialize)]
struct SelectGroupBody {
    group_id: Uuid,
}

#[derive(Deserialize)]
struct SelectCourtBody {
    court_id: Uuid,
}

#[derive(Deserialize)]
struct GenerateMatchBody {
    match_type: MatchType,
}

/// Path segment: entity id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct IdPath {
    id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-match-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full club state (roster, groups, courts, history, current match, selections).
#[get("/api/club")]
async fn api_get_club(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.club())
}

/// Add a player, defaulting to the active group.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_player(&body.name, body.group_id) {
        Ok(_) => HttpResponse::Ok().json(g.club()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove a player by id. Unknown ids are a no-op.
#[delete("/api/players/{id}")]
async fn api_remove_player(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.remove_player(path.id);
    HttpResponse::Ok().json(g.club())
}

/// Clear the roster (one group if given, else everyone). Keeps match history.
#[post("/api/players/clear")]
async fn api_clear_players(state: AppState, body: Option<Json<ClearPlayersBody>>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let scope = body.map(|b| b.group_id).unwrap_or_default();
    g.clear_players(scope);
    HttpResponse::Ok().json(g.club())
}

/// Create a group (first group becomes the active one).
#[post("/api/groups")]
async fn api_add_group(state: AppState, body: Json<NameBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_group(&body.name) {
        Ok(_) => HttpResponse::Ok().json(g.club()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Delete a group; refused while it still has players.
#[delete("/api/groups/{id}")]
async fn api_remove_group(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove_group(path.id) {
        Ok(()) => HttpResponse::Ok().json(g.club()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Create a court (first court becomes the active one).
#[post("/api/courts")]
async fn api_add_court(state: AppState, body: Json<NameBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_court(&body.name) {
        Ok(_) => HttpResponse::Ok().json(g.club()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Delete a court. Past matches keep a dangling court id.
#[delete("/api/courts/{id}")]
async fn api_remove_court(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.remove_court(path.id);
    HttpResponse::Ok().json(g.club())
}

/// Select the active group.
#[put("/api/selection/group")]
async fn api_select_group(state: AppState, body: Json<SelectGroupBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.select_group(body.group_id) {
        Ok(()) => HttpResponse::Ok().json(g.club()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Select the active court.
#[put("/api/selection/court")]
async fn api_select_court(state: AppState, body: Json<SelectCourtBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.select_court(body.court_id) {
        Ok(()) => HttpResponse::Ok().json(g.club()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Generate a random singles or doubles match from the current pool.
#[post("/api/matches/generate")]
async fn api_generate_match(state: AppState, body: Json<GenerateMatchBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.generate_match(body.match_type) {
        Ok(()) => HttpResponse::Ok().json(g.club()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// The most recent matches (at most 5), newest first.
#[get("/api/matches/recent")]
async fn api_recent_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.club().recent_matches())
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let config = ClubConfig {
        require_group: env_flag("REQUIRE_GROUP"),
        require_court: env_flag("REQUIRE_COURT"),
    };

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Persisting club data under {data_dir}/");

    let store = FileStore::open(&data_dir)?;
    let service = MatchMaker::new(Box::new(store), Box::new(LogNotifier), config);
    let state = Data::new(RwLock::new(service));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_club)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_clear_players)
            .service(api_add_group)
            .service(api_remove_group)
            .service(api_add_court)
            .service(api_remove_court)
            .service(api_select_group)
            .service(api_select_court)
            .service(api_generate_match)
            .service(api_recent_matches)
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
