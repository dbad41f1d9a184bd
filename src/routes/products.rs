use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::products::{ErrorResponse, TransactionResponse};
use crate::forms::products::{
    CreateProductForm, CreateProductPayload, UpdateProductForm, UpdateProductPayload,
};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, get_by_slug as get_by_slug_service,
    list_active_products as list_active_products_service,
    list_by_category as list_by_category_service,
    soft_delete_product as soft_delete_product_service,
    update_product as update_product_service,
};

#[post("/create")]
pub async fn create_product(
    form: web::Json<CreateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: CreateProductPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                detail: e.to_string(),
            });
        }
    };

    match create_product_service(payload, repo.get_ref()) {
        Ok(()) => HttpResponse::Created().json(TransactionResponse {
            transaction: "Successful",
        }),
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse { detail: message })
        }
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_active_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/category/{category_slug}")]
pub async fn products_by_category(
    category_slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_by_category_service(&category_slug, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            detail: "Category not found".to_string(),
        }),
        Err(err) => {
            log::error!("Failed to list products by category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/{product_slug}")]
pub async fn product_detail(
    product_slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_by_slug_service(&product_slug, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            detail: "There are no product".to_string(),
        }),
        Err(err) => {
            log::error!("Failed to get product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/update/{product_slug}")]
pub async fn update_product(
    product_slug: web::Path<String>,
    form: web::Json<UpdateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: UpdateProductPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                detail: e.to_string(),
            });
        }
    };

    match update_product_service(&product_slug, payload, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(TransactionResponse {
            transaction: "Product update is successful",
        }),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            detail: "There is no product found".to_string(),
        }),
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse { detail: message })
        }
        Err(err) => {
            log::error!("Failed to update product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/delete/{product_slug}")]
pub async fn delete_product(
    product_slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match soft_delete_product_service(&product_slug, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(TransactionResponse {
            transaction: "Product delete is successful",
        }),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            detail: "There is no product found".to_string(),
        }),
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
