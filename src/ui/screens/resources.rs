use futures::FutureExt;

use crate::api::types::{PageParams, Resource, ResourcesQuery};
use crate::api::{enveloped, ApiClient};
use crate::records::{CardAction, Extractors, FieldDescriptor, MetaPill, Tone, PLACEHOLDER};
use crate::ui::screens::entity::{more_action, Entity, PageFuture};
use crate::ui::screens::rounds::ResourceRef;
use crate::ui::screens::{ScreenAction, ScreenId};

pub struct ResourcesEntity;

impl Entity for ResourcesEntity {
    type Record = Resource;
    type Scope = ();

    const ID: ScreenId = ScreenId::Resources;

    fn title(_: &()) -> String {
        "Candidates".to_string()
    }

    fn fetch(client: ApiClient, _: (), page: PageParams) -> PageFuture<Resource> {
        async move {
            let query = ResourcesQuery {
                page,
                ..Default::default()
            };
            enveloped(client.list_resources(&query)).await
        }
        .boxed()
    }

    fn extractors() -> Extractors<Resource> {
        Extractors::new(|r: &Resource| r.id.clone(), |r: &Resource| r.name.clone())
            .subtitle(|r| {
                Some(
                    r.job_title
                        .clone()
                        .or_else(|| r.email.clone())
                        .unwrap_or_else(|| PLACEHOLDER.to_string()),
                )
            })
            .avatar_text(|r| Some(r.name.clone()))
            .meta_pill(|r| {
                r.status
                    .as_deref()
                    .map(|status| MetaPill::new(status, Tone::from_status(status)))
            })
    }

    fn fields() -> Vec<FieldDescriptor<Resource>> {
        vec![
            FieldDescriptor::new("client_name").label("Client"),
            FieldDescriptor::new("email").label("Email"),
            FieldDescriptor::new("rounds_count").label("Rounds"),
            FieldDescriptor::new("total_experience").label("Experience (years)"),
            FieldDescriptor::new("skills").label("Skills").line_limit(2),
        ]
    }

    fn actions() -> Vec<CardAction> {
        vec![
            CardAction::new("rounds", "Rounds").with_hotkey('o'),
            more_action(),
        ]
    }

    /// Pressing a candidate drills into their interview rounds.
    fn on_press(record: &Resource, _: &Extractors<Resource>) -> ScreenAction {
        ScreenAction::OpenRounds(ResourceRef {
            id: record.id.clone(),
            name: record.name.clone(),
        })
    }

    fn on_action(
        action: &CardAction,
        record: &Resource,
        extractors: &Extractors<Resource>,
    ) -> ScreenAction {
        match action.key.as_str() {
            "rounds" => Self::on_press(record, extractors),
            _ => Self::on_detail(record, extractors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screens::entity::MORE_ACTION;

    fn candidate() -> Resource {
        Resource {
            id: "r1".into(),
            name: "Sam Rivera".into(),
            status: Some("Selected".into()),
            ..Default::default()
        }
    }

    #[test]
    fn press_opens_rounds() {
        let extractors = ResourcesEntity::extractors();
        match ResourcesEntity::on_press(&candidate(), &extractors) {
            ScreenAction::OpenRounds(target) => {
                assert_eq!(target.id, "r1");
                assert_eq!(target.name, "Sam Rivera");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn more_opens_detail() {
        let extractors = ResourcesEntity::extractors();
        let more = CardAction::new(MORE_ACTION, "More");
        match ResourcesEntity::on_action(&more, &candidate(), &extractors) {
            ScreenAction::OpenDetail(content) => assert_eq!(content.title, "Sam Rivera"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn status_pill_uses_status_tone() {
        let pill = ResourcesEntity::extractors()
            .meta_pill_of(&candidate())
            .expect("pill");
        assert_eq!(pill.tone, Tone::Success);
    }
}
