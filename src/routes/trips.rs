use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::trip::TripDto;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::trips;

#[get("/trips")]
pub async fn list_trips(repo: web::Data<DieselRepository>) -> impl Responder {
    match trips::list_trips(repo.get_ref()) {
        Ok(catalog) => {
            let body: Vec<TripDto> = catalog.into_iter().map(TripDto::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(err) => service_error_response(&err),
    }
}
