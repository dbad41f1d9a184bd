//! Error conversion glue between the domain, repository and service layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls live here instead.

use crate::domain::types::TypeConstraintError;
use crate::forms::products::{CreateProductFormError, UpdateProductFormError};
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<CreateProductFormError> for ServiceError {
    fn from(val: CreateProductFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateProductFormError> for ServiceError {
    fn from(val: UpdateProductFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
