//! Hover-and-click element picking.
//!
//! [`SelectionController`] owns the selection state that a page overlay needs:
//! whether selection mode is on, which element is highlighted, where the
//! tooltip sits and which element the inspector is showing. The host forwards
//! pointer and keyboard events and applies the returned [`SelectionEffect`]s
//! to the page; the controller never touches the page itself.

use crate::dom::ElementNode;

/// Class prefix of the picker's own overlay elements.
pub const OVERLAY_CLASS_PREFIX: &str = "cc-";

/// Overlay element classes that never react to hover or click.
pub const OVERLAY_CLASSES: &[&str] = &[
    "cc-tooltip",
    "cc-mode-indicator",
    "cc-modal-container",
    "cc-modal-backdrop",
];

/// Tooltip offset from the pointer, in CSS pixels.
const TOOLTIP_OFFSET: f64 = 10.0;

/// What the controller needs to know about a host element.
pub trait ElementHandle: Clone + PartialEq {
    fn tag_name(&self) -> String;
    fn id(&self) -> Option<String>;
    fn class_list(&self) -> Vec<String>;

    /// True when the element is inside the open inspector overlay.
    fn within_overlay(&self) -> bool {
        false
    }
}

impl ElementHandle for ElementNode {
    fn tag_name(&self) -> String {
        self.tag.clone()
    }

    fn id(&self) -> Option<String> {
        self.attribute("id")
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    fn class_list(&self) -> Vec<String> {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Tooltip text for an element: `tag#id.class1.class2`, overlay classes
/// removed.
pub fn element_label<T: ElementHandle>(element: &T) -> String {
    let mut label = element.tag_name().to_ascii_lowercase();
    if let Some(id) = element.id() {
        label.push('#');
        label.push_str(&id);
    }
    for class in element.class_list() {
        if !class.starts_with(OVERLAY_CLASS_PREFIX) {
            label.push('.');
            label.push_str(&class);
        }
    }
    label
}

/// True for the picker's own overlay elements.
pub fn is_overlay<T: ElementHandle>(element: &T) -> bool {
    element.within_overlay()
        || element
            .class_list()
            .iter()
            .any(|c| OVERLAY_CLASSES.contains(&c.as_str()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn tooltip_anchor(self) -> Pointer {
        Pointer::new(self.x + TOOLTIP_OFFSET, self.y + TOOLTIP_OFFSET)
    }
}

/// A key press as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Cmd+Shift+E (macOS) or Ctrl+Shift+E.
    pub fn is_toggle_shortcut(&self) -> bool {
        (self.meta || self.ctrl) && self.shift && self.key.eq_ignore_ascii_case("e")
    }

    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}

/// Page changes the host applies after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEffect<T> {
    ModeChanged(bool),
    Highlight(T),
    ClearHighlight(T),
    ShowTooltip { label: String, at: Pointer },
    MoveTooltip(Pointer),
    HideTooltip,
    OpenInspector { target: T, at: Pointer },
    CloseInspector,
}

#[derive(Debug, Clone)]
pub struct SelectionController<T> {
    active: bool,
    disposed: bool,
    highlighted: Option<T>,
    tooltip_visible: bool,
    inspecting: Option<T>,
}

impl<T> Default for SelectionController<T> {
    fn default() -> Self {
        Self {
            active: false,
            disposed: false,
            highlighted: None,
            tooltip_visible: false,
            inspecting: None,
        }
    }
}

impl<T: ElementHandle> SelectionController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn highlighted(&self) -> Option<&T> {
        self.highlighted.as_ref()
    }

    pub fn inspecting(&self) -> Option<&T> {
        self.inspecting.as_ref()
    }

    /// Turns selection mode on.
    pub fn start(&mut self) -> Vec<SelectionEffect<T>> {
        if self.active || self.disposed {
            return Vec::new();
        }
        self.active = true;
        log::debug!("selection mode on");
        vec![SelectionEffect::ModeChanged(true)]
    }

    /// Turns selection mode off and clears every overlay.
    pub fn stop(&mut self) -> Vec<SelectionEffect<T>> {
        if !self.active {
            return Vec::new();
        }
        let mut effects = self.clear_hover();
        effects.extend(self.close_inspector());
        self.active = false;
        log::debug!("selection mode off");
        effects.push(SelectionEffect::ModeChanged(false));
        effects
    }

    pub fn toggle(&mut self) -> Vec<SelectionEffect<T>> {
        if self.active {
            self.stop()
        } else {
            self.start()
        }
    }

    /// Stops selection, closes the inspector and ignores all later events.
    pub fn dispose(&mut self) -> Vec<SelectionEffect<T>> {
        let mut effects = self.stop();
        effects.extend(self.close_inspector());
        self.disposed = true;
        effects
    }

    pub fn hover(&mut self, target: T, pointer: Pointer) -> Vec<SelectionEffect<T>> {
        if !self.active || is_overlay(&target) {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some(previous) = self.highlighted.take() {
            if previous == target {
                self.highlighted = Some(previous);
            } else {
                effects.push(SelectionEffect::ClearHighlight(previous));
            }
        }
        if self.highlighted.is_none() {
            effects.push(SelectionEffect::Highlight(target.clone()));
        }
        effects.push(SelectionEffect::ShowTooltip {
            label: element_label(&target),
            at: pointer.tooltip_anchor(),
        });
        self.highlighted = Some(target);
        self.tooltip_visible = true;
        effects
    }

    pub fn hover_out(&mut self, target: &T) -> Vec<SelectionEffect<T>> {
        if !self.active {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if self.highlighted.as_ref() == Some(target) {
            if let Some(previous) = self.highlighted.take() {
                effects.push(SelectionEffect::ClearHighlight(previous));
            }
        }
        if self.tooltip_visible {
            self.tooltip_visible = false;
            effects.push(SelectionEffect::HideTooltip);
        }
        effects
    }

    pub fn pointer_move(&mut self, pointer: Pointer) -> Vec<SelectionEffect<T>> {
        if !self.active || !self.tooltip_visible {
            return Vec::new();
        }
        vec![SelectionEffect::MoveTooltip(pointer.tooltip_anchor())]
    }

    /// Opens the inspector on `target`, replacing any open one.
    pub fn click(&mut self, target: T, pointer: Pointer) -> Vec<SelectionEffect<T>> {
        if !self.active || is_overlay(&target) {
            return Vec::new();
        }
        let mut effects = self.close_inspector();
        log::debug!("inspecting {}", element_label(&target));
        effects.push(SelectionEffect::OpenInspector {
            target: target.clone(),
            at: pointer,
        });
        self.inspecting = Some(target);
        effects
    }

    pub fn close_inspector(&mut self) -> Vec<SelectionEffect<T>> {
        match self.inspecting.take() {
            Some(_) => vec![SelectionEffect::CloseInspector],
            None => Vec::new(),
        }
    }

    /// Shortcut toggles selection mode; Escape closes the inspector, or
    /// leaves selection mode when no inspector is open.
    pub fn handle_key(&mut self, key: &KeyInput) -> Vec<SelectionEffect<T>> {
        if self.disposed {
            return Vec::new();
        }
        if key.is_toggle_shortcut() {
            return self.toggle();
        }
        if key.is_escape() {
            if self.inspecting.is_some() {
                return self.close_inspector();
            }
            return self.stop();
        }
        Vec::new()
    }

    fn clear_hover(&mut self) -> Vec<SelectionEffect<T>> {
        let mut effects = Vec::new();
        if let Some(previous) = self.highlighted.take() {
            effects.push(SelectionEffect::ClearHighlight(previous));
        }
        if self.tooltip_visible {
            self.tooltip_visible = false;
            effects.push(SelectionEffect::HideTooltip);
        }
        effects
    }
}
