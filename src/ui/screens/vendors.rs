use futures::FutureExt;
use serde_json::Value;

use crate::api::types::{PageParams, Vendor};
use crate::api::{enveloped, ApiClient};
use crate::records::{Extractors, FieldDescriptor, PLACEHOLDER};
use crate::ui::screens::entity::{Entity, PageFuture};
use crate::ui::screens::ScreenId;

pub struct VendorsEntity;

impl Entity for VendorsEntity {
    type Record = Vendor;
    type Scope = ();

    const ID: ScreenId = ScreenId::Vendors;

    fn title(_: &()) -> String {
        "Vendors".to_string()
    }

    fn fetch(client: ApiClient, _: (), page: PageParams) -> PageFuture<Vendor> {
        async move { enveloped(client.list_vendors(page)).await }.boxed()
    }

    fn extractors() -> Extractors<Vendor> {
        Extractors::new(|v: &Vendor| v.id.clone(), |v: &Vendor| v.name.clone())
            .subtitle(|v| Some(v.location.clone().unwrap_or_else(|| PLACEHOLDER.to_string())))
            .avatar_text(|v| Some(v.name.clone()))
    }

    fn fields() -> Vec<FieldDescriptor<Vendor>> {
        vec![
            FieldDescriptor::new("email").label("Email"),
            FieldDescriptor::new("phone").label("Phone"),
            FieldDescriptor::new("contacts")
                .label("Contacts")
                .render(|value, _| match value.and_then(Value::as_array) {
                    Some(items) => items.len().to_string(),
                    None => PLACEHOLDER.to_string(),
                }),
            FieldDescriptor::new("resources_count")
                .label("Candidates")
                .hidden(|v: &Vendor| v.resources_count.is_none()),
        ]
    }
}
