use futures::FutureExt;
use serde::Serialize;

use crate::api::types::{PageParams, Paginated, RoleMapping, ROLE_MAPPINGS_PAGE_SIZE};
use crate::api::{ApiClient, ApiError, Envelope};
use crate::records::{Extractors, FieldDescriptor, MetaPill, Tone, PLACEHOLDER};
use crate::ui::screens::entity::{Entity, PageFuture};
use crate::ui::screens::ScreenId;

/// Role mappings grouped per employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRoles {
    pub employee_id: u64,
    pub employee_name: String,
    pub employee_email: String,
    pub roles: Vec<String>,
}

/// Groups active mappings by employee, keeping first-appearance order.
pub fn group_by_employee(mappings: &[RoleMapping]) -> Vec<EmployeeRoles> {
    let mut grouped: Vec<EmployeeRoles> = Vec::new();
    for mapping in mappings.iter().filter(|m| m.is_active) {
        let role = mapping
            .role_display_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| mapping.role_name.clone());
        match grouped
            .iter_mut()
            .find(|entry| entry.employee_id == mapping.employee_id)
        {
            Some(entry) => {
                if !entry.roles.contains(&role) {
                    entry.roles.push(role);
                }
            }
            None => grouped.push(EmployeeRoles {
                employee_id: mapping.employee_id,
                employee_name: mapping.employee_name.clone(),
                employee_email: mapping.employee_email.clone(),
                roles: vec![role],
            }),
        }
    }
    grouped
}

pub struct RolesEntity;

impl Entity for RolesEntity {
    type Record = EmployeeRoles;
    type Scope = ();

    const ID: ScreenId = ScreenId::Roles;

    fn title(_: &()) -> String {
        "Role Assignments".to_string()
    }

    fn fetch(client: ApiClient, _: (), _: PageParams) -> PageFuture<EmployeeRoles> {
        async move {
            let page = client
                .list_role_mappings(PageParams {
                    page: 1,
                    page_size: ROLE_MAPPINGS_PAGE_SIZE,
                })
                .await?;
            let items = group_by_employee(&page.items);
            Ok::<_, ApiError>(Envelope::ok(Paginated {
                total: items.len() as u64,
                page: 1,
                page_size: ROLE_MAPPINGS_PAGE_SIZE,
                items,
            }))
        }
        .boxed()
    }

    fn extractors() -> Extractors<EmployeeRoles> {
        Extractors::new(
            |e: &EmployeeRoles| e.employee_id.to_string(),
            |e: &EmployeeRoles| e.employee_name.clone(),
        )
        .subtitle(|e| Some(e.employee_email.clone()))
        .avatar_text(|e| Some(e.employee_name.clone()))
        .meta_pill(|e| {
            let tone = if e.roles.is_empty() {
                Tone::Neutral
            } else {
                Tone::Info
            };
            Some(MetaPill::new(e.roles.len().to_string(), tone))
        })
    }

    fn fields() -> Vec<FieldDescriptor<EmployeeRoles>> {
        vec![FieldDescriptor::new("roles")
            .label("Roles")
            .render(|_, e: &EmployeeRoles| {
                if e.roles.is_empty() {
                    PLACEHOLDER.to_string()
                } else {
                    e.roles.join(", ")
                }
            })
            .line_limit(2)]
    }

    fn paginated() -> bool {
        false
    }

    fn empty_text() -> &'static str {
        "No role assignments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(employee_id: u64, name: &str, role: &str, active: bool) -> RoleMapping {
        RoleMapping {
            id: format!("{employee_id}-{role}"),
            employee_id,
            employee_name: name.into(),
            employee_email: format!("{}@example.com", name.to_lowercase()),
            role_name: role.into(),
            is_active: active,
            ..Default::default()
        }
    }

    #[test]
    fn groups_roles_per_employee_in_order() {
        let mappings = vec![
            mapping(2, "Lee", "recruiter", true),
            mapping(1, "Dana", "admin", true),
            mapping(2, "Lee", "sales", true),
            mapping(2, "Lee", "recruiter", true),
            mapping(1, "Dana", "viewer", false),
        ];
        let grouped = group_by_employee(&mappings);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].employee_name, "Lee");
        assert_eq!(grouped[0].roles, vec!["recruiter", "sales"]);
        assert_eq!(grouped[1].roles, vec!["admin"]);
    }

    #[test]
    fn display_name_wins_over_role_name() {
        let mut m = mapping(1, "Dana", "hr_admin", true);
        m.role_display_name = Some("HR Admin".into());
        assert_eq!(group_by_employee(&[m])[0].roles, vec!["HR Admin"]);
    }
}
