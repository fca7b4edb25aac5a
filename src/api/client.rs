//! Transport Trait
//!
//! The board only needs three calls. Futures are `?Send` so the same trait
//! fits the browser's single-threaded executor and a current-thread Tokio
//! runtime.

use async_trait::async_trait;
use std::rc::Rc;

use super::dto::MessageResponse;
use super::error::ApiResult;
use crate::catalog::ActivityCatalog;

/// Access to the activities API
#[async_trait(?Send)]
pub trait ActivityApi {
    /// Fetch the full catalog, bypassing any cached response
    async fn list_activities(&self) -> ApiResult<ActivityCatalog>;

    /// Register `email` for `activity`
    async fn signup(&self, activity: &str, email: &str) -> ApiResult<MessageResponse>;

    /// Remove `email` from `activity`
    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MessageResponse>;
}

#[async_trait(?Send)]
impl<T: ActivityApi + ?Sized> ActivityApi for Rc<T> {
    async fn list_activities(&self) -> ApiResult<ActivityCatalog> {
        (**self).list_activities().await
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        (**self).signup(activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MessageResponse> {
        (**self).unregister(activity, email).await
    }
}
