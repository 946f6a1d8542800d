//! Routing definitions for the floatchat UI.
use crate::core::nav::NavId;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Dashboard,
    #[at("/chat")]
    Chat,
    #[at("/chat/:session")]
    ChatSession { session: String },
    #[at("/map")]
    Map,
    #[at("/explorer")]
    Explorer,
    #[at("/analytics")]
    Analytics,
    #[at("/floats")]
    Floats,
    #[at("/reports")]
    Reports,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<NavId> for Route {
    fn from(id: NavId) -> Self {
        match id {
            NavId::Dashboard => Self::Dashboard,
            NavId::Chat => Self::Chat,
            NavId::Map => Self::Map,
            NavId::Explorer => Self::Explorer,
            NavId::Analytics => Self::Analytics,
            NavId::Floats => Self::Floats,
            NavId::Reports => Self::Reports,
            NavId::Settings => Self::Settings,
        }
    }
}
