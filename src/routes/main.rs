use actix_identity::Identity;
use actix_web::{HttpResponse, Responder, get, post, route, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::types::Category;
use crate::forms::listing::{PagerForm, SearchForm};
use crate::pagination::PageRequest;
use crate::repository::DieselRepository;
use crate::routes::{RequestContext, base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::main::{
    recent_titles, show_category as show_category_service, show_home as show_home_service,
    show_search as show_search_service,
};

fn page_request(form: Option<web::Form<PagerForm>>) -> PageRequest {
    form.map(|form| PageRequest::from(&form.into_inner()))
        .unwrap_or_default()
}

fn internal_error(page: &str, err: ServiceError) -> HttpResponse {
    log::error!("Failed to render {page} page: {err}");
    HttpResponse::InternalServerError().finish()
}

#[route("/", method = "GET", method = "POST")]
pub async fn home(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    form: Option<web::Form<PagerForm>>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = RequestContext::new(identity.as_ref(), &flash_messages);

    match show_home_service(page_request(form), repo.get_ref()) {
        Ok(page) => {
            let mut context = base_context(&request, "home");
            context.insert("posts", &page.posts);
            context.insert("featured", &page.featured);
            context.insert("recent", &page.recent);
            context.insert("pager_action", "/");
            render_template(&tera, "main/home.html", &context)
        }
        Err(err) => internal_error("home", err),
    }
}

#[route("/{category}", method = "GET", method = "POST")]
pub async fn category(
    category: web::Path<String>,
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    form: Option<web::Form<PagerForm>>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Ok(category) = category.parse::<Category>() else {
        return redirect("/");
    };
    let request = RequestContext::new(identity.as_ref(), &flash_messages);

    match show_category_service(category, page_request(form), repo.get_ref()) {
        Ok(page) => {
            let mut context = base_context(&request, category.as_str());
            context.insert("category", &page.category);
            context.insert("posts", &page.posts);
            context.insert("recent", &page.recent);
            context.insert("pager_action", &format!("/{category}"));
            render_template(&tera, "main/category.html", &context)
        }
        Err(err) => internal_error("category", err),
    }
}

#[post("/search")]
pub async fn search(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    web::Form(form): web::Form<SearchForm>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = RequestContext::new(identity.as_ref(), &flash_messages);
    let pager = PageRequest::from(&form);

    match show_search_service(&form.search, pager, repo.get_ref()) {
        Ok(page) => {
            let mut context = base_context(&request, "search");
            context.insert("search", &page.search);
            context.insert("posts", &page.posts);
            context.insert("recent", &page.recent);
            context.insert("pager_action", "/search");
            render_template(&tera, "main/search.html", &context)
        }
        Err(err) => internal_error("search", err),
    }
}

#[get("/contact")]
pub async fn contact(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = RequestContext::new(identity.as_ref(), &flash_messages);

    match recent_titles(repo.get_ref()) {
        Ok(recent) => {
            let mut context = base_context(&request, "contact");
            context.insert("recent", &recent);
            render_template(&tera, "main/contact.html", &context)
        }
        Err(err) => internal_error("contact", err),
    }
}

/// Fallback for every unmatched path.
pub async fn not_found() -> HttpResponse {
    redirect("/")
}
