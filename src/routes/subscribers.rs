use actix_identity::Identity;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::subscriber::NewSubscriber;
use crate::forms::subscribers::SubscribeForm;
use crate::repository::DieselRepository;
use crate::routes::{RequestContext, base_context, redirect, render_template};
use crate::services::main::recent_titles;
use crate::services::subscribers::{
    list_subscribers as list_subscribers_service, subscribe as subscribe_service,
};

#[get("/subscribe")]
pub async fn show_subscribe(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = RequestContext::new(identity.as_ref(), &flash_messages);

    match recent_titles(repo.get_ref()) {
        Ok(recent) => {
            let mut context = base_context(&request, "subscribe");
            context.insert("recent", &recent);
            render_template(&tera, "subscribers/subscribe.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render subscribe page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/subscribe")]
pub async fn subscribe(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SubscribeForm>,
) -> impl Responder {
    let subscriber: NewSubscriber = match form.try_into() {
        Ok(subscriber) => subscriber,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/subscribe");
        }
    };

    match subscribe_service(subscriber, repo.get_ref()) {
        Ok(()) => FlashMessage::success("Successfully subscribed to newsletter.").send(),
        Err(err) => {
            log::error!("Failed to subscribe: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/subscribe")
}

#[get("/subscribersList")]
pub async fn subscribers_list(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_subscribers_service(repo.get_ref()) {
        Ok(subscribers) => HttpResponse::Ok().json(subscribers),
        Err(err) => {
            log::error!("Failed to list subscribers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
