//! Layout engine - owns every card placement on the board.

use std::collections::HashMap;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::geometry::{clamp, clamp_point, Bounds, Placement, Point};
use super::gesture::{Gesture, GestureOutcome};
use super::grid::{grid_content_height, grid_placement};
use super::scatter::random_placement;
use super::ViewMode;
use crate::config::LayoutConfig;
use crate::types::CardId;

/// Placement, stacking and drag state for the cards on the board.
///
/// The engine is fed the ids of the visible cards (in display order), the
/// board size, and pointer events. It never looks at card contents.
///
/// # Example
///
/// ```ignore
/// let mut engine = LayoutEngine::new(LayoutConfig::default(), 7);
/// engine.resize(Bounds::new(1280.0, 800.0));
/// engine.set_mode(ViewMode::Interactive, &ids);
///
/// engine.pointer_down(ids[0], pointer, Instant::now());
/// engine.pointer_move(pointer_later);
/// match engine.pointer_up(pointer_later, Instant::now()) {
///     GestureOutcome::Clicked(id) => open_popup(id),
///     _ => {}
/// }
/// ```
pub struct LayoutEngine {
    config: LayoutConfig,
    mode: ViewMode,
    bounds: Bounds,
    /// Visible cards in display order; grid index comes from here
    order: Vec<CardId>,
    placements: HashMap<CardId, Placement>,
    /// Back to front
    stacking: Vec<CardId>,
    gesture: Gesture,
    /// Set by the first non-empty board size
    measured: bool,
    rng: StdRng,
}

impl LayoutEngine {
    /// Create an empty engine in grid mode. `seed` drives the random
    /// placements of the interactive board.
    pub fn new(config: LayoutConfig, seed: u64) -> Self {
        Self {
            config,
            mode: ViewMode::Grid,
            bounds: Bounds::default(),
            order: Vec::new(),
            placements: HashMap::new(),
            stacking: Vec::new(),
            gesture: Gesture::Idle,
            measured: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn placement(&self, id: CardId) -> Option<Placement> {
        self.placements.get(&id).copied()
    }

    /// Placements in display order
    pub fn placements(&self) -> Vec<(CardId, Placement)> {
        self.order
            .iter()
            .filter_map(|id| self.placements.get(id).map(|p| (*id, *p)))
            .collect()
    }

    /// Card ids back to front
    pub fn stacking(&self) -> &[CardId] {
        &self.stacking
    }

    /// Stacking position starting at 1; 0 for unknown cards.
    pub fn z_index(&self, id: CardId) -> usize {
        self.stacking
            .iter()
            .position(|c| *c == id)
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Card currently following the pointer
    pub fn dragging(&self) -> Option<CardId> {
        match self.gesture {
            Gesture::Dragging { card, .. } => Some(card),
            _ => None,
        }
    }

    /// Height the board needs to show every card.
    pub fn content_height(&self) -> f64 {
        match self.mode {
            ViewMode::Grid => {
                grid_content_height(self.order.len(), self.bounds, &self.config)
            }
            ViewMode::Interactive => self.bounds.height,
        }
    }

    /// Switch modes and lay every card out again from scratch.
    pub fn set_mode(&mut self, mode: ViewMode, ids: &[CardId]) {
        tracing::debug!(from = %self.mode, to = %mode, cards = ids.len(), "Switching board mode");
        self.mode = mode;
        self.gesture.cancel();
        self.refresh(ids);
    }

    /// Forced recompute: every card gets a fresh placement, interactive
    /// spots included.
    pub fn refresh(&mut self, ids: &[CardId]) {
        self.set_order(ids);
        self.placements.clear();
        self.layout_all();
    }

    /// Follow a change of the visible card set. Cards that left lose their
    /// placement; cards that entered get one. Survivors keep their spot in
    /// interactive mode and are re-flowed in grid mode.
    pub fn sync(&mut self, ids: &[CardId]) {
        self.set_order(ids);

        if let Some(card) = self.gesture.card() {
            if !self.order.contains(&card) {
                self.gesture.cancel();
            }
        }

        match self.mode {
            ViewMode::Grid => self.layout_all(),
            ViewMode::Interactive => {
                for id in self.order.clone() {
                    if !self.placements.contains_key(&id) {
                        let p = random_placement(&mut self.rng, self.bounds, &self.config);
                        self.placements.insert(id, p);
                    }
                }
            }
        }
    }

    /// Apply a new board size. Grid mode re-flows; interactive mode clamps
    /// existing spots into the new bounds. The first real measurement of an
    /// interactive board scatters the cards, since nothing could be placed
    /// meaningfully before.
    ///
    /// An empty size (collapsed or minimized board) is recorded but leaves
    /// every placement alone.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        tracing::trace!(width = bounds.width, height = bounds.height, "Board resized");
        self.bounds = bounds;
        if bounds.is_empty() {
            return;
        }
        let first_measurement = !self.measured;
        self.measured = true;

        match self.mode {
            ViewMode::Grid => self.layout_all(),
            ViewMode::Interactive if first_measurement => {
                self.placements.clear();
                self.layout_all();
            }
            ViewMode::Interactive => {
                for p in self.placements.values_mut() {
                    *p = clamp(*p, bounds, &self.config);
                }
            }
        }
    }

    /// Move `id` to the front of the stacking order.
    pub fn bring_to_front(&mut self, id: CardId) {
        if let Some(idx) = self.stacking.iter().position(|c| *c == id) {
            let card = self.stacking.remove(idx);
            self.stacking.push(card);
        }
    }

    /// Pointer went down on a card. Returns false for unknown cards.
    pub fn pointer_down(&mut self, id: CardId, pointer: Point, now: Instant) -> bool {
        let Some(placement) = self.placements.get(&id) else {
            tracing::warn!(card = %id, "Pointer down on a card without placement");
            return false;
        };
        self.gesture = Gesture::press(id, pointer, placement.origin(), now);
        self.bring_to_front(id);
        true
    }

    /// Pointer moved. Returns true when a card was repositioned.
    ///
    /// Cards only follow the pointer on the interactive board.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some((card, top_left)) = self.gesture.motion(pointer, self.config.drag_threshold_px)
        else {
            return false;
        };
        if self.mode != ViewMode::Interactive {
            return false;
        }
        let target = clamp_point(top_left, self.bounds, &self.config);
        match self.placements.get_mut(&card) {
            Some(p) => {
                p.x = target.x;
                p.y = target.y;
                tracing::trace!(card = %card, x = target.x, y = target.y, "Card dragged");
                true
            }
            None => false,
        }
    }

    /// Pointer released; resolves the gesture.
    ///
    /// Grid cards never move, so any press on one counts as a click there.
    pub fn pointer_up(&mut self, pointer: Point, now: Instant) -> GestureOutcome {
        self.pointer_move(pointer);
        let outcome = self.gesture.release(
            pointer,
            now,
            self.config.drag_threshold_px,
            self.config.click_window(),
        );
        let outcome = match (self.mode, outcome) {
            (ViewMode::Grid, GestureOutcome::Dragged(card) | GestureOutcome::Released(card)) => {
                GestureOutcome::Clicked(card)
            }
            (_, outcome) => outcome,
        };
        tracing::debug!(?outcome, "Gesture finished");
        outcome
    }

    /// Drop the current gesture without an outcome (pointer left the board).
    pub fn cancel_gesture(&mut self) {
        self.gesture.cancel();
    }

    fn set_order(&mut self, ids: &[CardId]) {
        self.order = ids.to_vec();
        self.placements.retain(|id, _| ids.contains(id));
        self.stacking.retain(|id| ids.contains(id));
        for id in ids {
            if !self.stacking.contains(id) {
                self.stacking.push(*id);
            }
        }
    }

    fn layout_all(&mut self) {
        match self.mode {
            ViewMode::Grid => {
                for (index, id) in self.order.iter().enumerate() {
                    let p = grid_placement(index, self.bounds, &self.config);
                    self.placements.insert(*id, p);
                }
            }
            ViewMode::Interactive => {
                for id in &self.order {
                    let p = random_placement(&mut self.rng, self.bounds, &self.config);
                    self.placements.insert(*id, p);
                }
            }
        }
    }
}
