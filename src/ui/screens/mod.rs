//! Entity list screens.
//!
//! Every tab is a [`ListScreen`] over one [`Entity`]; the entity supplies
//! the record type, the fetch, and the card configuration, the screen
//! owns the controller, pagination, and selection.

mod clients;
mod entity;
mod jobs;
mod list_screen;
mod resources;
mod roles;
mod rounds;
mod vendors;

use std::sync::mpsc::Sender;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::lifecycle::LifecycleContext;
use crate::ui::detail::DetailContent;
use crate::ui::events::AppEvent;

pub use clients::ClientsEntity;
pub use entity::{Entity, PageFuture, MORE_ACTION};
pub use jobs::JobsEntity;
pub use list_screen::ListScreen;
pub use resources::ResourcesEntity;
pub use roles::{EmployeeRoles, RolesEntity};
pub use rounds::{ResourceRef, RoundsEntity};
pub use vendors::VendorsEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Clients,
    Vendors,
    Jobs,
    Resources,
    Roles,
    Rounds,
}

impl ScreenId {
    /// Top-level tabs in display order.
    pub const TABS: [ScreenId; 5] = [
        ScreenId::Clients,
        ScreenId::Vendors,
        ScreenId::Jobs,
        ScreenId::Resources,
        ScreenId::Roles,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScreenId::Clients => "Clients",
            ScreenId::Vendors => "Vendors",
            ScreenId::Jobs => "Requirements",
            ScreenId::Resources => "Candidates",
            ScreenId::Roles => "Roles",
            ScreenId::Rounds => "Interview Rounds",
        }
    }

    /// Parses a configuration name (`clients`, `vendors`, `jobs`, `resources`, `roles`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "clients" => Some(ScreenId::Clients),
            "vendors" => Some(ScreenId::Vendors),
            "jobs" | "requirements" => Some(ScreenId::Jobs),
            "resources" | "candidates" => Some(ScreenId::Resources),
            "roles" => Some(ScreenId::Roles),
            _ => None,
        }
    }

    pub fn tab_index(self) -> Option<usize> {
        Self::TABS.iter().position(|tab| *tab == self)
    }
}

/// What the app should do after a screen handled a key.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    Ignored,
    Handled,
    OpenDetail(DetailContent),
    OpenRounds(ResourceRef),
}

/// Collaborators every screen needs to issue background calls.
#[derive(Clone)]
pub struct ScreenContext {
    pub client: ApiClient,
    pub lifecycle: LifecycleContext,
    pub runtime: Handle,
    pub events: Sender<AppEvent>,
}

/// Object-safe view of a [`ListScreen`] so the app can hold heterogeneous tabs.
pub trait Screen {
    fn id(&self) -> ScreenId;
    fn title(&self) -> &str;
    /// Called when the screen becomes visible. Fetches on first activation.
    fn activate(&mut self);
    /// Called when the screen is left. Cancels the call in flight.
    fn deactivate(&mut self);
    fn reload(&mut self);
    /// Picks up the outcome of a settled background call.
    fn on_settled(&mut self);
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction;
    fn render(&mut self, frame: &mut Frame, area: Rect, tick: usize);
}
