//! Typed endpoints of the back-office API, one block per entity.

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::{
    Client, ClientCreate, ClientUpdate, Job, JobsQuery, PageParams, Paginated, Resource,
    ResourcesQuery, RoleMapping, Round, RoundsQuery, Vendor, ROLE_MAPPINGS_PAGE_SIZE,
};

// Clients
impl ApiClient {
    pub async fn list_clients(&self, params: PageParams) -> Result<Paginated<Client>, ApiError> {
        self.get_with("clients/", &params).await
    }

    pub async fn get_client(&self, client_id: &str) -> Result<Client, ApiError> {
        self.get(&format!("clients/{}", client_id)).await
    }

    pub async fn create_client(&self, payload: &ClientCreate) -> Result<Client, ApiError> {
        self.post("clients/", payload).await
    }

    pub async fn update_client(
        &self,
        client_id: &str,
        payload: &ClientUpdate,
    ) -> Result<Client, ApiError> {
        self.put(&format!("clients/{}", client_id), payload).await
    }
}

// Vendors
impl ApiClient {
    pub async fn list_vendors(&self, params: PageParams) -> Result<Paginated<Vendor>, ApiError> {
        self.get_with("vendors/", &params).await
    }
}

// Jobs (requirements)
impl ApiClient {
    pub async fn list_jobs(&self, query: &JobsQuery) -> Result<Paginated<Job>, ApiError> {
        self.get_with("jobs/", query).await
    }

    pub async fn get_job(&self, job_id: &str) -> Result<Job, ApiError> {
        self.get(&format!("jobs/{}", job_id)).await
    }
}

// Resources (candidates)
impl ApiClient {
    pub async fn list_resources(
        &self,
        query: &ResourcesQuery,
    ) -> Result<Paginated<Resource>, ApiError> {
        self.get_with("resources/", query).await
    }
}

// Interview rounds
impl ApiClient {
    pub async fn list_rounds(&self, resource_id: &str) -> Result<Vec<Round>, ApiError> {
        let query = RoundsQuery {
            resource_id: resource_id.to_string(),
        };
        self.get_with("rounds/", &query).await
    }
}

// Employee role mappings
impl ApiClient {
    /// Lists role mappings. A page size of zero falls back to 100.
    pub async fn list_role_mappings(
        &self,
        params: PageParams,
    ) -> Result<Paginated<RoleMapping>, ApiError> {
        let params = PageParams {
            page_size: if params.page_size == 0 {
                ROLE_MAPPINGS_PAGE_SIZE
            } else {
                params.page_size
            },
            ..params
        };
        self.get_with("employee-role-mappings/", &params).await
    }
}
