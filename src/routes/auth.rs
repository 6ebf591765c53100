use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::auth::{LoginForm, RegisterForm, RegisterFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{RequestContext, base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::auth::{login as login_service, register as register_service};

#[get("/Register")]
pub async fn show_register(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = RequestContext::new(identity.as_ref(), &flash_messages);
    if request.is_authenticated() {
        return redirect("/");
    }

    let context = base_context(&request, "register");
    render_template(&tera, "auth/register.html", &context)
}

#[post("/Register")]
pub async fn register(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<RegisterForm>,
) -> impl Responder {
    let payload: RegisterFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::info(e.to_string()).send();
            return redirect("/Register");
        }
    };

    match register_service(payload, repo.get_ref()) {
        Ok(()) => redirect("/"),
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::info("This email address is already taken.").send();
            redirect("/Register")
        }
        Err(_) => {
            FlashMessage::info("There was an error while registering.").send();
            redirect("/Register")
        }
    }
}

#[get("/Login")]
pub async fn show_login(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = RequestContext::new(identity.as_ref(), &flash_messages);
    if request.is_authenticated() {
        return redirect("/");
    }

    let context = base_context(&request, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/Login")]
pub async fn login(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match login_service(&form, repo.get_ref()) {
        Ok(username) => match Identity::login(&request.extensions(), username.into_inner()) {
            Ok(_) => redirect("/"),
            Err(e) => {
                log::error!("Failed to attach identity to session: {e}");
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(ServiceError::Unauthorized) => {
            FlashMessage::info("Email or Password Is Incorrect.").send();
            redirect("/Login")
        }
        Err(err) => {
            log::error!("Failed to log in: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/Logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect("/")
}
