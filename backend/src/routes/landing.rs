use serde::{Deserialize, Serialize};

use crate::models::DateRange;

// =========================================================
// Control panel types
// =========================================================

/// Entry of the park selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkOption {
    pub label: String, // Display name shown to the user
    pub value: String, // Park code used in filters
}

/// Entry of the camera selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraOption {
    pub label: String,
    pub value: String,
}

/// State of the dependent controls after a park/camera selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsData {
    pub park: Option<String>,
    pub cameras: Vec<CameraOption>,
    /// Camera the selector lands on: the requested one when it belongs to the
    /// park, otherwise the first available.
    pub selected_camera: Option<String>,
    pub date_range: DateRange,
    pub camera_image: String,
}

// Paths under `/v1`
pub const LIST_PARKS: &str = "/parks";
pub const LIST_CAMERAS: &str = "/parks/{park}/cameras";
pub const GET_CONTROLS: &str = "/controls";
