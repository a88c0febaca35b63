use futures::FutureExt;

use crate::api::types::{Job, JobsQuery, PageParams};
use crate::api::{enveloped, ApiClient};
use crate::records::{CardAction, Extractors, FieldDescriptor, MetaPill, Tone, PLACEHOLDER};
use crate::ui::screens::entity::{more_action, Entity, PageFuture};
use crate::ui::screens::ScreenId;

pub struct JobsEntity;

/// Open jobs read as success, closed ones as neutral, anything else as info.
fn job_status_tone(status: &str) -> Tone {
    match status {
        "Open" => Tone::Success,
        "Closed" => Tone::Neutral,
        _ => Tone::Info,
    }
}

impl Entity for JobsEntity {
    type Record = Job;
    type Scope = ();

    const ID: ScreenId = ScreenId::Jobs;

    fn title(_: &()) -> String {
        "Requirements".to_string()
    }

    fn fetch(client: ApiClient, _: (), page: PageParams) -> PageFuture<Job> {
        async move {
            let query = JobsQuery {
                page,
                ..Default::default()
            };
            enveloped(client.list_jobs(&query)).await
        }
        .boxed()
    }

    fn extractors() -> Extractors<Job> {
        Extractors::new(|j: &Job| j.id.clone(), |j: &Job| j.title.clone())
            .subtitle(|j| {
                Some(
                    j.location
                        .clone()
                        .or_else(|| j.job_type.clone())
                        .unwrap_or_else(|| PLACEHOLDER.to_string()),
                )
            })
            .avatar_text(|j| Some(j.title.clone()))
            .meta_pill(|j| {
                let status = j.status.as_deref().unwrap_or("Open");
                Some(MetaPill::new(status, job_status_tone(status)))
            })
    }

    fn fields() -> Vec<FieldDescriptor<Job>> {
        vec![
            FieldDescriptor::new("positions").label("Positions"),
            FieldDescriptor::new("skills_required")
                .label("Skills")
                .line_limit(2),
            FieldDescriptor::new("total_experience").label("Experience"),
            FieldDescriptor::new("client_name")
                .label("Client")
                .hidden(|j: &Job| j.client_name.is_none()),
        ]
    }

    fn actions() -> Vec<CardAction> {
        vec![more_action()]
    }
}
