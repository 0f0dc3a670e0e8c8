use serde::Serialize;

use crate::catalog::BodyDetails;

/// Index of a body in its catalog. Stable for the lifetime of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a node in the scene hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A notification for the UI layer.
/// The engine owns no markup; the host drains these each frame and updates its panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiEvent {
    /// Open (or refill) the detail panel for a body.
    #[serde(rename_all = "camelCase")]
    ShowDetails { body_id: String, details: BodyDetails },
    /// Hide the detail panel.
    ClosePanel,
    /// Pause state changed; update the play/pause indicator.
    #[serde(rename_all = "camelCase")]
    PauseIndicator { is_paused: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_events_serialize_tagged() {
        let json = serde_json::to_string(&UiEvent::PauseIndicator { is_paused: true }).unwrap();
        assert_eq!(json, r#"{"type":"pauseIndicator","isPaused":true}"#);

        let json = serde_json::to_string(&UiEvent::ClosePanel).unwrap();
        assert_eq!(json, r#"{"type":"closePanel"}"#);
    }

    #[test]
    fn show_details_carries_fields() {
        let event = UiEvent::ShowDetails {
            body_id: "mars".into(),
            details: BodyDetails {
                title: "Mars".into(),
                distance: "1.52 AU".into(),
                ..Default::default()
            },
        };
        let value: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "showDetails");
        assert_eq!(value["bodyId"], "mars");
        assert_eq!(value["details"]["title"], "Mars");
        assert_eq!(value["details"]["distance"], "1.52 AU");
    }
}
