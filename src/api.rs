use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, ResponseError};
use anyhow::Context;
use askama::Template;
use log::{error, info, warn};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::color::{ColorError, Hsl};
use crate::config::Config;
use crate::scheme::{Scheme, SchemeError};
use crate::state::{PaletteEvent, PaletteState};
use crate::templates::{PaletteHtmlTemplate, SchemeOption, WheelSvgTemplate};
use crate::wheel::{Point, Wheel};

/// Everything a handler needs, built once from a validated [`Config`].
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub wheel: Wheel,
    pub default_state: PaletteState,
}

impl AppContext {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate().context("invalid configuration")?;
        let default_state = PaletteState::new(config.default_base()?, config.scheme()?);
        Ok(Self {
            wheel: config.wheel(),
            default_state,
            config,
        })
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Scheme(#[from] SchemeError),
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorJson {
            error: self.to_string(),
        })
    }
}

#[derive(Serialize)]
struct ErrorJson {
    error: String,
}

#[derive(Serialize)]
struct ColorJson {
    #[serde(flatten)]
    hsl: Hsl,
    hex: String,
}

impl From<&Hsl> for ColorJson {
    fn from(c: &Hsl) -> Self {
        Self {
            hsl: *c,
            hex: c.to_hex(),
        }
    }
}

#[derive(Serialize)]
struct PaletteJson {
    base: ColorJson,
    scheme: Scheme,
    colors: Vec<ColorJson>,
}

type Params = HashMap<String, String>;

fn query_params(req: &HttpRequest) -> Params {
    url::form_urlencoded::parse(req.query_string().as_bytes())
        .into_owned()
        .collect()
}

fn requested_scheme(params: &Params) -> Result<Option<Scheme>, SchemeError> {
    params.get("scheme").map(|s| s.parse()).transpose()
}

/// Click coordinates submitted by the `pick` image input.
fn pick_point(params: &Params) -> Option<Point> {
    let coordinate = |key: &str| {
        params
            .get(key)?
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    };
    Some(Point {
        x: coordinate("pick.x")?,
        y: coordinate("pick.y")?,
    })
}

/// State for the read-only endpoints: `color` and `scheme`, each optional.
fn state_from_query(params: &Params, ctx: &AppContext) -> Result<PaletteState, RequestError> {
    let scheme = requested_scheme(params)?.unwrap_or(ctx.default_state.scheme);
    match params.get("color") {
        Some(hex) => Ok(PaletteState::from_hex(hex, scheme)?),
        None => Ok(PaletteState::new(ctx.default_state.base, scheme)),
    }
}

fn wheel_url(state: &PaletteState) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("color", &state.base_hex())
        .append_pair("scheme", state.scheme.as_str())
        .finish();
    format!("/wheel.svg?{}", query)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(palette_page_handler))
        .route("/wheel.svg", web::get().to(wheel_svg_handler))
        .route("/palette.json", web::get().to(palette_json_handler));
}

pub async fn run_api_server(config: Config) -> anyhow::Result<()> {
    let ctx = web::Data::new(AppContext::new(config)?);
    let address = (ctx.config.bind_address.clone(), ctx.config.port);

    info!("Starting palette server on {}:{}", address.0, address.1);
    info!(
        "Default color {}, scheme {}, wheel size {}px",
        ctx.config.default_color, ctx.default_state.scheme, ctx.wheel.size
    );

    HttpServer::new(move || App::new().app_data(ctx.clone()).configure(configure))
        .bind(address.clone())
        .with_context(|| format!("failed to bind {}:{}", address.0, address.1))?
        .run()
        .await
        .context("server terminated with an error")
}

/// The interactive page. The previous color comes back as `last`; the
/// scheme, text field and wheel click are applied on top of it in turn.
async fn palette_page_handler(req: HttpRequest, ctx: web::Data<AppContext>) -> HttpResponse {
    let params = query_params(&req);
    let scheme = match requested_scheme(&params) {
        Ok(scheme) => scheme,
        Err(e) => {
            warn!("Rejected page request: {}", e);
            return RequestError::from(e).error_response();
        }
    };

    let prior = params
        .get("last")
        .and_then(|hex| PaletteState::from_hex(hex, ctx.default_state.scheme).ok())
        .unwrap_or_else(|| ctx.default_state.clone());

    let mut events = Vec::new();
    if let Some(scheme) = scheme {
        events.push(PaletteEvent::SchemeSelected(scheme));
    }
    if let Some(color) = params.get("color") {
        events.push(PaletteEvent::ColorInput(color.clone()));
    }
    if let Some(point) = pick_point(&params) {
        events.push(PaletteEvent::WheelClick(point));
    }

    let mut state = prior;
    let mut error_message = String::new();
    for event in events {
        match state.update(event, &ctx.wheel) {
            Ok(next) => state = next,
            Err(e) => {
                warn!("Keeping {} after rejected input: {}", state.base_hex(), e);
                error_message = e.to_string();
            }
        }
    }

    info!(
        "Rendering {} palette for {} ({} colors)",
        state.scheme,
        state.base_hex(),
        state.palette.len()
    );
    let template = PaletteHtmlTemplate {
        color: state.base_hex(),
        scheme_options: SchemeOption::all(state.scheme),
        swatches: state.swatches(),
        wheel_url: wheel_url(&state),
        wheel_size: ctx.wheel.size,
        error: error_message,
    };
    match template.render() {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            error!("Template error for palette page: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}

async fn wheel_svg_handler(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, RequestError> {
    let state = state_from_query(&query_params(&req), &ctx)
        .inspect_err(|e| warn!("Rejected wheel request: {}", e))?;
    let template = WheelSvgTemplate {
        size: ctx.wheel.size,
        sectors: ctx.wheel.sectors(),
        markers: ctx.wheel.markers(state.base, &state.palette),
    };
    Ok(match template.render() {
        Ok(body) => HttpResponse::Ok().content_type("image/svg+xml").body(body),
        Err(e) => {
            error!("Template error for wheel: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    })
}

async fn palette_json_handler(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, RequestError> {
    let state = state_from_query(&query_params(&req), &ctx)
        .inspect_err(|e| warn!("Rejected palette request: {}", e))?;
    info!("Generated {} palette for {}", state.scheme, state.base_hex());
    Ok(HttpResponse::Ok().json(PaletteJson {
        base: ColorJson::from(&state.base),
        scheme: state.scheme,
        colors: state.palette.iter().map(ColorJson::from).collect(),
    }))
}
