//! HTTP handlers and the helpers they share for rendering and redirects.

use actix_identity::Identity;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

pub mod auth;
pub mod main;
pub mod posts;
pub mod subscribers;

/// Per-request state every page needs: who is logged in and which one-shot
/// messages are waiting to be shown.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    pub current_user: Option<String>,
    pub alerts: Vec<(String, &'static str)>,
}

impl RequestContext {
    pub fn new(identity: Option<&Identity>, flash_messages: &IncomingFlashMessages) -> Self {
        let current_user = identity.and_then(|identity| identity.id().ok());
        let alerts = flash_messages
            .iter()
            .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
            .collect();
        Self {
            current_user,
            alerts,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}

/// Maps a flash message level to the CSS class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Template context pre-filled with the values the base layout uses.
pub fn base_context(request: &RequestContext, current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &request.alerts);
    context.insert("current_user", &request.current_user);
    context.insert("login", &request.is_authenticated());
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(tera.render(template, context).unwrap_or_else(|e| {
            log::error!("Failed to render template '{template}': {e}");
            String::new()
        }))
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Register every page handler. The catch-all category route goes last so
/// the fixed paths win.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::home)
        .service(main::search)
        .service(main::contact)
        .service(posts::show_post)
        .service(posts::add_comment)
        .service(posts::show_compose)
        .service(posts::compose)
        .service(subscribers::show_subscribe)
        .service(subscribers::subscribe)
        .service(subscribers::subscribers_list)
        .service(auth::show_register)
        .service(auth::register)
        .service(auth::show_login)
        .service(auth::login)
        .service(auth::logout)
        .service(main::category);
}
