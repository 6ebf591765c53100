use actix_identity::Identity;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::Category;
use crate::forms::posts::{CommentForm, CommentFormPayload, ComposeForm, ComposeFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{RequestContext, base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::posts::{
    add_comment as add_comment_service, create_post as create_post_service,
    show_compose as show_compose_service, show_post as show_post_service,
};

fn post_url(title: &str) -> String {
    format!("/posts/{}", urlencoding::encode(title))
}

#[get("/posts/{title}")]
pub async fn show_post(
    title: web::Path<String>,
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_post_service(&title, repo.get_ref()) {
        Ok(page) => {
            let request = RequestContext::new(identity.as_ref(), &flash_messages);
            let mut context = base_context(&request, "post");
            context.insert("post", &page.post);
            context.insert("comments", &page.comments);
            context.insert("recent", &page.recent);
            render_template(&tera, "posts/post.html", &context)
        }
        Err(ServiceError::NotFound) => redirect("/"),
        Err(err) => {
            log::error!("Failed to render post page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/post")]
pub async fn add_comment(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CommentForm>,
) -> impl Responder {
    let payload: CommentFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(_) => return redirect("/"),
    };

    match add_comment_service(payload, repo.get_ref()) {
        Ok(title) => redirect(&post_url(title.as_str())),
        Err(ServiceError::NotFound) => redirect("/"),
        Err(err) => {
            log::error!("Failed to add comment: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/compose")]
pub async fn show_compose(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = RequestContext::new(identity.as_ref(), &flash_messages);

    match show_compose_service(request.current_user.as_deref(), repo.get_ref()) {
        Ok(recent) => {
            let mut context = base_context(&request, "compose");
            context.insert("recent", &recent);
            context.insert("categories", &Category::ALL);
            render_template(&tera, "posts/compose.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/"),
        Err(err) => {
            log::error!("Failed to render compose page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/compose")]
pub async fn compose(
    identity: Option<Identity>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ComposeForm>,
) -> impl Responder {
    let user = identity.and_then(|identity| identity.id().ok());
    if user.is_none() {
        return redirect("/");
    }

    let payload: ComposeFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/compose");
        }
    };

    match create_post_service(payload, user.as_deref(), repo.get_ref()) {
        Ok(_) => redirect("/"),
        Err(ServiceError::Unauthorized) => redirect("/"),
        Err(ServiceError::Conflict(message)) => {
            FlashMessage::error(message).send();
            redirect("/compose")
        }
        Err(err) => {
            log::error!("Failed to create post: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
