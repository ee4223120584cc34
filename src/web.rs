use actix_web::http::header::ContentType;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};

use crate::types::{Context, Direction, Encoding};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const BIND_ENV: &str = "TEXTCODEC_BIND";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Fields posted by the form. Missing fields read as empty.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FormInput {
    pub text: String,
    pub action: String,
    pub encoding: String,
}

#[derive(Debug, Deserialize)]
pub struct JsonRequest {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type")]
    pub encoding: String,
}

#[derive(Debug, Serialize)]
pub struct JsonResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Text to display for a submission, or `None` when the action or encoding
/// is not recognised. Decode failures render as their fixed message.
pub fn form_result(ctx: &Context, form: &FormInput) -> Option<String> {
    let direction: Direction = form.action.parse().ok()?;
    let outcome = ctx.registry.apply(direction, &form.encoding, &form.text)?;
    Some(outcome.unwrap_or_else(|e| e.to_string()))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_TEMPLATE: &str = include_str!("../templates/index.html");

/// Fills `{name}` slots in `template` in a single pass, so substituted values
/// are never scanned for slots themselves. Unknown slots are left as written.
fn fill_template(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let slot = after
            .find('}')
            .and_then(|close| slots.iter().find(|(name, _)| *name == &after[..close]).map(|s| (close, s.1)));
        match slot {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn render_page(text: &str, selected: &str, result: Option<&str>) -> String {
    let options: String = Encoding::ALL
        .iter()
        .map(|e| {
            let name = e.as_str();
            let sel = if name == selected { " selected" } else { "" };
            format!("<option value=\"{name}\"{sel}>{name}</option>")
        })
        .collect();

    let result_block = result
        .map(|r| format!("<h2>Result</h2>\n<pre class=\"result\">{}</pre>\n", escape_html(r)))
        .unwrap_or_default();

    let text = escape_html(text);
    fill_template(
        PAGE_TEMPLATE,
        &[("text", text.as_str()), ("options", options.as_str()), ("result", result_block.as_str())],
    )
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

pub async fn index() -> impl Responder {
    html(render_page("", "", None))
}

pub async fn submit(ctx: web::Data<Context>, form: web::Form<FormInput>) -> impl Responder {
    let result = form_result(&ctx, &form);
    html(render_page(&form.text, &form.encoding, result.as_deref()))
}

fn json_transform(ctx: &Context, direction: Direction, req: &JsonRequest) -> HttpResponse {
    match ctx.registry.apply(direction, &req.encoding, &req.text) {
        Some(Ok(result)) => HttpResponse::Ok().json(JsonResponse {
            result: Some(result),
            error: None,
        }),
        Some(Err(e)) => HttpResponse::UnprocessableEntity().json(JsonResponse {
            result: None,
            error: Some(e.to_string()),
        }),
        None => HttpResponse::BadRequest().json(JsonResponse {
            result: None,
            error: Some(format!("unsupported encoding: {}", req.encoding)),
        }),
    }
}

pub async fn encode_json(ctx: web::Data<Context>, req: web::Json<JsonRequest>) -> impl Responder {
    json_transform(&ctx, Direction::Encode, &req)
}

pub async fn decode_json(ctx: web::Data<Context>, req: web::Json<JsonRequest>) -> impl Responder {
    json_transform(&ctx, Direction::Decode, &req)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(Context::default()))
        .route("/", web::get().to(index))
        .route("/", web::post().to(submit))
        .route("/encode", web::post().to(encode_json))
        .route("/decode", web::post().to(decode_json));
}

pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    log::info!("listening on http://{}", config.bind);
    HttpServer::new(|| App::new().configure(configure))
        .bind(&config.bind)?
        .run()
        .await
}
