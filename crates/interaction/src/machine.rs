use std::collections::BTreeSet;

use catalog::{EntityCatalog, EntityId};
use foundation::time::Time;
use runtime::debounce::DebounceTimer;
use runtime::notify::{Notifier, SubscriberId};
use viewport::{Camera, FitParams, GeometryProvider, Region, fit};

use crate::state::{Phase, SelectionState};

/// Instruction for the presentation layer, drained via
/// [`SelectionMachine::drain_outputs`].
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Animate the camera to this transform.
    Refit(Camera),
    /// The effective highlight changed; restyle, no camera movement.
    RedrawHighlight,
}

/// Mediates click / hover / dropdown input for one dashboard.
///
/// All transitions are total: any id the catalog does not know is treated
/// as the null id (a graceful focus clear / hover release), never an error.
///
/// Camera refits happen only on focus changes, and change notifications
/// fire only from input transitions, never from the presentation layer
/// consuming a refit. A subscriber that re-invokes selection therefore
/// cannot start a feedback loop.
pub struct SelectionMachine<G: GeometryProvider> {
    geometry: G,
    known_ids: BTreeSet<EntityId>,
    state: SelectionState,
    fit_params: FitParams,
    hover_debounce: DebounceTimer<EntityId>,
    change: Notifier<Option<EntityId>>,
    outputs: Vec<Output>,
}

impl<G: GeometryProvider> SelectionMachine<G> {
    /// `debounce_delay_s` is the hover commit delay; the dashboards use 0.5.
    pub fn new(
        catalog: &EntityCatalog,
        geometry: G,
        fit_params: FitParams,
        debounce_delay_s: f64,
    ) -> Self {
        let known_ids = catalog
            .records()
            .iter()
            .map(|record| record.id.clone())
            .collect();
        Self {
            geometry,
            known_ids,
            state: SelectionState::new(),
            fit_params,
            hover_debounce: DebounceTimer::new(debounce_delay_s),
            change: Notifier::new(),
            outputs: Vec::new(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Subscribes to focus changes. The payload is the new focus id, `None`
    /// on clear.
    pub fn on_change(
        &mut self,
        subscriber: impl FnMut(&Option<EntityId>) + 'static,
    ) -> SubscriberId {
        self.change.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.change.unsubscribe(id)
    }

    /// Map click. Clicking the focused entity again (or empty space)
    /// clears the focus.
    pub fn click(&mut self, id: Option<EntityId>) {
        let id = self.validated(id);
        let next = if id.is_some() && id.as_ref() == self.state.focused() {
            None
        } else {
            id
        };
        self.apply_focus(next);
    }

    /// Dropdown selection. Never toggles: re-selecting the focused entity
    /// keeps it focused; the none-sentinel row clears.
    pub fn select_from_control(&mut self, id: Option<EntityId>) {
        let id = self.validated(id);
        self.apply_focus(id);
    }

    /// Explicit dismiss. Forces `Idle` from any state.
    pub fn clear(&mut self) {
        self.hover_debounce.cancel();
        if self.state.set_hover(None) {
            self.outputs.push(Output::RedrawHighlight);
        }
        self.apply_focus(None);
    }

    /// Pointer hover. A `Some` target is committed only after the debounce
    /// delay passes with no newer hover superseding it (see [`Self::advance`]);
    /// `None` releases the hover immediately.
    pub fn hover(&mut self, id: Option<EntityId>, now: Time) {
        match self.validated(id) {
            Some(target) => self.hover_debounce.schedule(target, now),
            None => {
                self.hover_debounce.cancel();
                if self.state.set_hover(None) {
                    self.outputs.push(Output::RedrawHighlight);
                }
            }
        }
    }

    /// Advances the machine's clock, committing a pending hover whose
    /// debounce deadline has been reached.
    pub fn advance(&mut self, now: Time) {
        if let Some(target) = self.hover_debounce.poll(now)
            && self.state.set_hover(Some(target))
        {
            self.outputs.push(Output::RedrawHighlight);
        }
    }

    /// Takes the queued presentation instructions, oldest first.
    pub fn drain_outputs(&mut self) -> Vec<Output> {
        std::mem::take(&mut self.outputs)
    }

    fn validated(&self, id: Option<EntityId>) -> Option<EntityId> {
        match id {
            Some(id) if self.known_ids.contains(&id) => Some(id),
            Some(id) => {
                tracing::debug!(id = %id, "unknown entity id, treating as null");
                None
            }
            None => None,
        }
    }

    fn apply_focus(&mut self, id: Option<EntityId>) {
        self.hover_debounce.cancel();
        if !self.state.set_focus(id) {
            return;
        }

        let region = self
            .state
            .focused()
            .and_then(|id| self.geometry.region_of(id))
            .unwrap_or(Region::World);
        let camera = fit(&region, &self.fit_params);
        self.outputs.push(Output::Refit(camera));
        self.outputs.push(Output::RedrawHighlight);

        let focused = self.state.focused().cloned();
        self.change.notify(&focused);
    }
}
