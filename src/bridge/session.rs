//! Map-Session für Host-Bridges.

use super::{HostEvent, HostUpdate};
use crate::app::{MapController, MapIntent, MapState};
use crate::core::Envelope;
use crate::shared::ViewportOptions;
use crate::ui::{CaptureFlag, InteractionMode, PointerInteractionController, ViewportContext};
use anyhow::Context;

/// Bündelt State, Controller und Pointer-Interaktion eines Kartenfensters.
#[derive(Debug)]
pub struct MapSession {
    state: MapState,
    controller: MapController,
    pointer: PointerInteractionController,
    capture: CaptureFlag,
}

impl MapSession {
    /// Erstellt eine Session mit Startansicht und Kartengröße in Pixeln.
    pub fn new(
        initial_extent: Envelope,
        map_size: [f64; 2],
        options: ViewportOptions,
    ) -> anyhow::Result<Self> {
        let state = MapState::new(initial_extent, map_size, options)
            .context("Map-Session konnte nicht erstellt werden")?;
        Ok(Self {
            state,
            controller: MapController::new(),
            pointer: PointerInteractionController::new(),
            capture: CaptureFlag::default(),
        })
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    pub fn capture(&self) -> &CaptureFlag {
        &self.capture
    }

    pub fn pointer(&self) -> &PointerInteractionController {
        &self.pointer
    }

    /// Verarbeitet ein Host-Event und liefert den neuen Anzeigezustand.
    pub fn handle_event(&mut self, event: HostEvent) -> anyhow::Result<HostUpdate> {
        let mut intents = Vec::new();

        match event {
            HostEvent::PointerDown { x, y } => {
                let transform = self.state.view.transform()?;
                let mut ctx = ViewportContext {
                    mode: self.state.tool.mode,
                    transform: &transform,
                    options: &self.state.options,
                    capture: &mut self.capture,
                };
                self.pointer
                    .pointer_down(&mut ctx, &HostEvent::position(x, y));
            }
            HostEvent::PointerMove { x, y } => {
                self.pointer.pointer_move(&HostEvent::position(x, y));
            }
            HostEvent::PointerUp { x, y } => {
                let transform = self.state.view.transform()?;
                let mut ctx = ViewportContext {
                    mode: self.state.tool.mode,
                    transform: &transform,
                    options: &self.state.options,
                    capture: &mut self.capture,
                };
                self.pointer
                    .pointer_up(&mut ctx, &HostEvent::position(x, y), &mut intents);
            }
            HostEvent::CaptureLost => {
                self.pointer.capture_lost();
                self.capture.captured = false;
            }
            HostEvent::OverviewClick { x, y } => {
                self.state
                    .view
                    .overview
                    .handle_click(&HostEvent::position(x, y), &mut intents);
            }
            HostEvent::SelectMode { mode } => {
                let mode: InteractionMode = mode.parse()?;
                intents.push(MapIntent::InteractionModeSelected { mode });
            }
            HostEvent::Resize { width, height } => {
                intents.push(MapIntent::MapResized { width, height });
            }
            HostEvent::Pan { direction } => intents.push(MapIntent::PanRequested { direction }),
            HostEvent::PanAngle { degrees } => {
                intents.push(MapIntent::PanByAngleRequested { degrees });
            }
            HostEvent::ZoomIn => intents.push(MapIntent::ZoomInRequested),
            HostEvent::ZoomOut => intents.push(MapIntent::ZoomOutRequested),
            HostEvent::SetExtent { extent } => {
                intents.push(MapIntent::ExtentEntered { text: extent });
            }
            HostEvent::Reset => intents.push(MapIntent::ResetViewRequested),
        }

        self.controller.handle_intents(&mut self.state, intents)?;
        Ok(self.snapshot())
    }

    /// JSON-Variante von [`Self::handle_event`].
    pub fn handle_json(&mut self, json: &str) -> anyhow::Result<String> {
        let event: HostEvent =
            serde_json::from_str(json).with_context(|| format!("Ungültiges Host-Event: {json}"))?;
        let update = self.handle_event(event)?;
        Ok(serde_json::to_string(&update)?)
    }

    /// Aktueller Anzeigezustand ohne Event.
    pub fn snapshot(&self) -> HostUpdate {
        HostUpdate {
            extent: self.state.view.envelope.to_string(),
            mode: self.state.tool.mode,
            captured: self.capture.captured,
            feedback: self.pointer.feedback(),
            overview_highlight: self.state.view.overview.highlight(),
            last_view_change: self.state.command_log.last_view_change().cloned(),
        }
    }
}
