use super::view_model::DashboardViewModel;
use leptos::prelude::*;

/// Lifecycle of one dashboard mount: `Mounting -> Loading -> Loaded`.
///
/// Transitions only move forward and each happens at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardPhase {
    /// Rendering context not ready; nothing data-dependent is drawn
    #[default]
    Mounting,
    /// Sources outstanding
    Loading,
    Loaded(Box<DashboardViewModel>),
}

impl DashboardPhase {
    pub fn is_loading(&self) -> bool {
        !matches!(self, DashboardPhase::Loaded(_))
    }

    /// `Mounting -> Loading`. Returns false when the load already started.
    pub fn begin_loading(&mut self) -> bool {
        match self {
            DashboardPhase::Mounting => {
                *self = DashboardPhase::Loading;
                true
            }
            _ => false,
        }
    }

    /// `Loading -> Loaded`. Returns false (and drops `view_model`) otherwise.
    pub fn finish(&mut self, view_model: DashboardViewModel) -> bool {
        match self {
            DashboardPhase::Loading => {
                *self = DashboardPhase::Loaded(Box::new(view_model));
                true
            }
            _ => false,
        }
    }

    pub fn view_model(&self) -> Option<&DashboardViewModel> {
        match self {
            DashboardPhase::Loaded(view_model) => Some(view_model.as_ref()),
            _ => None,
        }
    }
}

pub fn create_state() -> RwSignal<DashboardPhase> {
    RwSignal::new(DashboardPhase::default())
}
