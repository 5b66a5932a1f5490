//! Base service traits

use async_trait::async_trait;

use crate::result::ServiceResult;

/// Base trait for callable services
#[async_trait]
pub trait Callable<Params, Output> {
    async fn call(&self, params: Params) -> ServiceResult<Output>;
}
