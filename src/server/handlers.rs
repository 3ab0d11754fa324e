use super::templates::Template;
use super::ServerState;
use crate::assets::content_type;
use crate::i18n::language_from_accept_header;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};

/// Top-level directories served straight from the docs tree.
pub const STATIC_DIRS: &[&str] = &["css", "font-awesome", "js", "img", "markdown"];

const HTML: &str = "text/html; charset=utf-8";
const JS: &str = "application/javascript; charset=utf-8";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/.well-known/{tail:.*}", web::route().to(well_known))
        .route("/favicon.ico", web::get().to(favicon))
        .route("/js/i18n.js", web::get().to(i18n_script))
        .route(
            &format!("/{{dir:{}}}/{{tail:.*}}", STATIC_DIRS.join("|")),
            web::get().to(static_file),
        )
        .default_service(web::route().to(not_found));
}

fn request_language(req: &HttpRequest) -> &'static str {
    let header = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    language_from_accept_header(header)
}

pub async fn index(req: HttpRequest, state: web::Data<ServerState>) -> ActixResult<HttpResponse> {
    let lang = request_language(&req);
    match state
        .templates
        .render(Template::Index, lang, &state.version)
        .await
    {
        Some(html) => Ok(HttpResponse::Ok().content_type(HTML).body(html)),
        None => {
            log::error!("Failed to render index page");
            Ok(HttpResponse::InternalServerError()
                .content_type(HTML)
                .body("Internal Server Error"))
        }
    }
}

pub async fn well_known() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// The language tables rendered into the client script.
pub async fn i18n_script(
    req: HttpRequest,
    state: web::Data<ServerState>,
) -> ActixResult<HttpResponse> {
    match state
        .templates
        .render(Template::I18nScript, "", &state.version)
        .await
    {
        Some(script) => Ok(HttpResponse::Ok().content_type(JS).body(script)),
        None => not_found(req, state).await,
    }
}

pub async fn favicon(req: HttpRequest, state: web::Data<ServerState>) -> ActixResult<HttpResponse> {
    serve("/favicon.ico", req, state).await
}

/// `dir` and `tail` arrive percent-decoded, so the docs tree is looked up by
/// the real file name.
pub async fn static_file(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    state: web::Data<ServerState>,
) -> ActixResult<HttpResponse> {
    let (dir, tail) = path.into_inner();
    serve(&format!("/{}/{}", dir, tail), req, state).await
}

async fn serve(
    path: &str,
    req: HttpRequest,
    state: web::Data<ServerState>,
) -> ActixResult<HttpResponse> {
    match state.assets.read(path).await {
        Some(bytes) => Ok(HttpResponse::Ok()
            .content_type(content_type(path))
            .body(bytes.into_owned())),
        None => not_found(req, state).await,
    }
}

pub async fn not_found(
    req: HttpRequest,
    state: web::Data<ServerState>,
) -> ActixResult<HttpResponse> {
    log::debug!("Not found: {}", req.path());
    let lang = request_language(&req);
    let body = match state
        .templates
        .render(Template::NotFound, lang, &state.version)
        .await
    {
        Some(html) => html,
        None => {
            log::error!("Failed to render 404 page");
            "404 Not Found".to_string()
        }
    };
    Ok(HttpResponse::NotFound().content_type(HTML).body(body))
}
