use futures::FutureExt;

use crate::api::types::{PageParams, Paginated, Round};
use crate::api::{ApiClient, ApiError, Envelope};
use crate::records::{Extractors, FieldDescriptor, MetaPill, Tone, PLACEHOLDER};
use crate::ui::screens::entity::{Entity, PageFuture};
use crate::ui::screens::ScreenId;

/// Candidate whose interview rounds are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub id: String,
    pub name: String,
}

pub struct RoundsEntity;

impl Entity for RoundsEntity {
    type Record = Round;
    type Scope = ResourceRef;

    const ID: ScreenId = ScreenId::Rounds;

    fn title(scope: &ResourceRef) -> String {
        format!("Interview Rounds · {}", scope.name)
    }

    fn fetch(client: ApiClient, scope: ResourceRef, _: PageParams) -> PageFuture<Round> {
        async move {
            let rounds = client.list_rounds(&scope.id).await?;
            let count = rounds.len();
            Ok::<_, ApiError>(Envelope::ok(Paginated {
                total: count as u64,
                page: 1,
                page_size: u32::try_from(count).unwrap_or(u32::MAX),
                items: rounds,
            }))
        }
        .boxed()
    }

    fn extractors() -> Extractors<Round> {
        Extractors::new(|r: &Round| r.id.clone(), |r: &Round| r.name.clone())
            .subtitle(|r| Some(r.round_type.clone().unwrap_or_else(|| PLACEHOLDER.to_string())))
            .meta_pill(|r| {
                r.status
                    .as_deref()
                    .map(|status| MetaPill::new(status, Tone::from_status(status)))
            })
    }

    fn fields() -> Vec<FieldDescriptor<Round>> {
        vec![
            FieldDescriptor::new("scheduled_date").label("Scheduled"),
            FieldDescriptor::new("interviewer").label("Interviewer"),
            FieldDescriptor::new("feedback").label("Feedback").line_limit(2),
        ]
    }

    fn paginated() -> bool {
        false
    }

    fn empty_text() -> &'static str {
        "No interview rounds yet"
    }
}
