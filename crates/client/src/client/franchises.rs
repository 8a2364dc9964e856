//! Franchises and stores.

use reqwest::Method;
use serde::de::IgnoredAny;
use tracing::{debug, instrument};

use jwt_pizza_core::{Franchise, FranchiseId, FranchiseList, PageRequest, Store, StoreId, UserId};

use super::users::paged;
use super::{PizzaClient, segment};
use crate::error::ServiceError;

/// Franchise collection endpoint.
pub const FRANCHISE_PATH: &str = "/api/franchise";

fn franchise_path(franchise_id: &FranchiseId) -> String {
    format!("{FRANCHISE_PATH}/{}", segment(franchise_id))
}

impl PizzaClient {
    /// Franchises administered by a user.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_franchise(&self, user_id: &UserId) -> Result<Vec<Franchise>, ServiceError> {
        let path = format!("{FRANCHISE_PATH}/{}", segment(user_id));
        self.get(&path).await
    }

    /// One page of franchises matching the name filter.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_franchises(&self, page: &PageRequest) -> Result<FranchiseList, ServiceError> {
        self.get(&paged(FRANCHISE_PATH, page)).await
    }

    /// Every franchise matching the filter, following `more` from `first`.
    ///
    /// # Errors
    ///
    /// Returns the first failing page's error.
    #[instrument(skip(self))]
    pub async fn get_all_franchises(&self, first: &PageRequest) -> Result<Vec<Franchise>, ServiceError> {
        let mut page = first.clone();
        let mut franchises = Vec::new();
        loop {
            let list = self.get_franchises(&page).await?;
            let fetched = list.franchises.len();
            franchises.extend(list.franchises);
            if !list.more || fetched == 0 {
                debug!(last_page = page.page, total = franchises.len(), "Franchise listing complete");
                return Ok(franchises);
            }
            page = page.next();
        }
    }

    /// Create a franchise (admin only).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the service refuses the creation.
    #[instrument(skip(self, franchise), fields(name = %franchise.name))]
    pub async fn create_franchise(&self, franchise: &Franchise) -> Result<Franchise, ServiceError> {
        let created: Franchise = self
            .call(FRANCHISE_PATH, Method::POST, Some(franchise))
            .await?;

        debug!(franchise_id = ?created.id, "Franchise created");
        Ok(created)
    }

    /// Close a franchise and all of its stores (admin only).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the service refuses the deletion.
    #[instrument(skip(self))]
    pub async fn close_franchise(&self, franchise_id: &FranchiseId) -> Result<(), ServiceError> {
        self.call::<IgnoredAny, ()>(&franchise_path(franchise_id), Method::DELETE, None)
            .await?;
        Ok(())
    }

    /// Open a store under a franchise.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the caller does not administer the franchise.
    #[instrument(skip(self, store), fields(name = %store.name))]
    pub async fn create_store(
        &self,
        franchise_id: &FranchiseId,
        store: &Store,
    ) -> Result<Store, ServiceError> {
        let path = format!("{}/store", franchise_path(franchise_id));
        let created: Store = self.call(&path, Method::POST, Some(store)).await?;

        debug!(store_id = ?created.id, "Store created");
        Ok(created)
    }

    /// Close a store.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Api` if the caller does not administer the franchise.
    #[instrument(skip(self))]
    pub async fn close_store(
        &self,
        franchise_id: &FranchiseId,
        store_id: &StoreId,
    ) -> Result<(), ServiceError> {
        let path = format!("{}/store/{}", franchise_path(franchise_id), segment(store_id));
        self.call::<IgnoredAny, ()>(&path, Method::DELETE, None)
            .await?;
        Ok(())
    }
}
