//! Records exchanged with the staffing back-office API.
//!
//! Response types are lenient (`#[serde(default)]`) because list endpoints
//! return trimmed projections of the full records.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const ROLE_MAPPINGS_PAGE_SIZE: u32 = 100;

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Query string parameters of a request.
pub trait QueryParams {
    fn pairs(&self) -> Vec<(&'static str, String)>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams for PageParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobsQuery {
    pub page: PageParams,
    pub client_id: Option<String>,
    pub client_name: Option<String>,
}

impl QueryParams for JobsQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.page.pairs();
        if let Some(id) = &self.client_id {
            pairs.push(("client_id", id.clone()));
        }
        if let Some(name) = &self.client_name {
            pairs.push(("client_name", name.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcesQuery {
    pub page: PageParams,
    pub job_id: Option<String>,
    pub resource_status: Option<String>,
}

impl QueryParams for ResourcesQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.page.pairs();
        if let Some(job) = &self.job_id {
            pairs.push(("job_id", job.clone()));
        }
        if let Some(status) = &self.resource_status {
            pairs.push(("resource_status", status.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundsQuery {
    pub resource_id: String,
}

impl QueryParams for RoundsQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("resource_id", self.resource_id.clone())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// An employee granted a role on a client or job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignedRole {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub employee_id: u64,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_email: String,
    #[serde(default)]
    pub role_name: String,
    #[serde(default)]
    pub role_display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub filetype: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub client_accesses: Vec<AssignedRole>,
    #[serde(default)]
    pub sales_manager_client_accesses: Vec<AssignedRole>,
    #[serde(default)]
    pub jobs_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub resources_count: Option<u64>,
}

/// A job requirement raised by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub positions: u32,
    #[serde(default)]
    pub total_experience: Option<String>,
    #[serde(default)]
    pub skills_required: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "type", default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// A candidate proposed against a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_experience: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub rounds_count: Option<u32>,
    #[serde(default)]
    pub is_active: bool,
}

/// One interview round of a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub round_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub interviewer: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub resource_id: String,
}

/// An employee's assignment to one application role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleMapping {
    pub id: String,
    #[serde(default)]
    pub employee_id: u64,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_email: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub role_name: String,
    #[serde(default)]
    pub role_display_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobs_query_skips_absent_filters() {
        let query = JobsQuery {
            client_id: Some("c-1".into()),
            ..JobsQuery::default()
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("page", "1".to_string()),
                ("page_size", "10".to_string()),
                ("client_id", "c-1".to_string()),
            ]
        );
    }

    #[test]
    fn job_type_maps_to_type_key() {
        let job: Job = serde_json::from_str(r#"{"id": "j1", "title": "Dev", "type": "Contract"}"#)
            .unwrap();
        assert_eq!(job.job_type.as_deref(), Some("Contract"));
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "Contract");
    }

    #[test]
    fn paginated_defaults() {
        let page: Paginated<Client> = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.total, 0);
    }
}
