use futures::FutureExt;
use serde_json::Value;

use crate::api::types::{Client, PageParams};
use crate::api::{enveloped, ApiClient};
use crate::records::{CardAction, Extractors, FieldDescriptor, MetaPill, Tone, PLACEHOLDER};
use crate::ui::screens::entity::{more_action, Entity, PageFuture};
use crate::ui::screens::ScreenId;

pub struct ClientsEntity;

/// Joins the `employee_name` of each assignment, or the placeholder when none.
pub(crate) fn employee_names(value: Option<&Value>) -> String {
    let names: Vec<&str> = value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("employee_name").and_then(Value::as_str))
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if names.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        names.join(", ")
    }
}

fn contacts_count(value: Option<&Value>) -> String {
    match value.and_then(Value::as_array).map(Vec::len) {
        Some(0) | None => PLACEHOLDER.to_string(),
        Some(1) => "1 contact".to_string(),
        Some(n) => format!("{} contacts", n),
    }
}

impl Entity for ClientsEntity {
    type Record = Client;
    type Scope = ();

    const ID: ScreenId = ScreenId::Clients;

    fn title(_: &()) -> String {
        "Clients".to_string()
    }

    fn fetch(client: ApiClient, _: (), page: PageParams) -> PageFuture<Client> {
        async move { enveloped(client.list_clients(page)).await }.boxed()
    }

    fn extractors() -> Extractors<Client> {
        Extractors::new(|c: &Client| c.id.clone(), |c: &Client| c.name.clone())
            .subtitle(|c| Some(c.location.clone().unwrap_or_else(|| PLACEHOLDER.to_string())))
            .avatar_text(|c| Some(c.name.clone()))
            .meta_pill(|c| {
                Some(MetaPill::new(
                    c.jobs_count.unwrap_or(0).to_string(),
                    Tone::Info,
                ))
            })
    }

    fn fields() -> Vec<FieldDescriptor<Client>> {
        vec![
            FieldDescriptor::new("sales_manager_client_accesses")
                .label("Sales Managers")
                .render(|value, _| employee_names(value)),
            FieldDescriptor::new("client_accesses")
                .label("Account Managers")
                .render(|value, _| employee_names(value)),
            FieldDescriptor::new("contacts")
                .label("Contacts")
                .render(|value, _| contacts_count(value)),
        ]
    }

    fn actions() -> Vec<CardAction> {
        vec![more_action()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AssignedRole, Contact};
    use crate::records::{compose_card, Avatar};

    fn manager(name: &str) -> AssignedRole {
        AssignedRole {
            employee_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn client_card_shows_managers_and_contact_count() {
        let client = Client {
            id: "c1".into(),
            name: "Acme Corp".into(),
            location: Some("Pune".into()),
            sales_manager_client_accesses: vec![manager("Dana"), manager("Lee")],
            contacts: vec![Contact::default(), Contact::default()],
            jobs_count: Some(4),
            ..Default::default()
        };
        let card = compose_card(
            &client,
            &ClientsEntity::extractors(),
            &ClientsEntity::fields(),
            &ClientsEntity::actions(),
        );
        assert_eq!(card.title, "Acme Corp");
        assert_eq!(card.subtitle.as_deref(), Some("Pune"));
        assert_eq!(card.avatar, Avatar::Initials("AC".into()));
        assert_eq!(card.meta.as_ref().map(|m| m.text.as_str()), Some("4"));
        let values: Vec<&str> = card.rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["Dana, Lee", PLACEHOLDER, "2 contacts"]);
        assert_eq!(card.actions.len(), 1);
    }

    #[test]
    fn single_contact_is_singular() {
        let contacts = serde_json::json!([{"name": "A"}]);
        assert_eq!(contacts_count(Some(&contacts)), "1 contact");
        assert_eq!(contacts_count(None), PLACEHOLDER);
    }
}
