use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::types::DateStamp;
use crate::dto::client::{ClientTripDto, CreatedClientDto};
use crate::forms::client::CreateClientForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::{clients, registrations};

#[get("/clients/{id}/trips")]
pub async fn client_trips(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let client_id = path.into_inner();

    match registrations::list_client_trips(repo.get_ref(), client_id) {
        Ok(trips) if trips.is_empty() => {
            HttpResponse::Ok().json(format!("Client with ID {client_id} has no trips"))
        }
        Ok(trips) => {
            let body: Vec<ClientTripDto> = trips.into_iter().map(ClientTripDto::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(err) => service_error_response(&err),
    }
}

#[post("/clients")]
pub async fn create_client(
    form: web::Json<CreateClientForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients::create_client(repo.get_ref(), form.into_inner()) {
        Ok(client_id) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/api/clients/{client_id}/trips"),
            ))
            .json(CreatedClientDto::from(client_id)),
        Err(err) => service_error_response(&err),
    }
}

#[put("/clients/{id}/trips/{trip_id}")]
pub async fn register_for_trip(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (client_id, trip_id) = path.into_inner();

    match registrations::register_client_for_trip(
        repo.get_ref(),
        client_id,
        trip_id,
        DateStamp::today(),
    ) {
        Ok(()) => HttpResponse::Ok().json("Registration successful"),
        Err(err) => service_error_response(&err),
    }
}

#[delete("/clients/{id}/trips/{trip_id}")]
pub async fn cancel_registration(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (client_id, trip_id) = path.into_inner();

    match registrations::cancel_registration(repo.get_ref(), client_id, trip_id) {
        Ok(()) => HttpResponse::Ok().json("Registration deleted"),
        Err(err) => service_error_response(&err),
    }
}
