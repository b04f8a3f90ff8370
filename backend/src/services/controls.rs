//! Dependent control values: park labels, camera list, auto-selected camera
//! and date bounds after a selection change.

use std::collections::BTreeMap;

use crate::api::{CameraOption, ControlsData, ParkOption};
use crate::models::DateRange;
use crate::services::images::ImageCatalog;

/// Park selector entries sorted by label. Codes without a configured display
/// name are shown as-is.
pub fn park_options(parks: &[String], names: &BTreeMap<String, String>) -> Vec<ParkOption> {
    let mut options: Vec<ParkOption> = parks
        .iter()
        .map(|code| ParkOption {
            label: names.get(code).cloned().unwrap_or_else(|| code.clone()),
            value: code.clone(),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));
    options
}

/// Camera selector entries, sorted.
pub fn camera_options(cameras: &[String]) -> Vec<CameraOption> {
    let mut options: Vec<CameraOption> = cameras
        .iter()
        .map(|camera| CameraOption {
            label: camera.clone(),
            value: camera.clone(),
        })
        .collect();
    options.sort_by(|a, b| a.value.cmp(&b.value));
    options
}

/// Camera the selector should land on.
///
/// Keeps `requested` when it is one of the options, otherwise picks the
/// first option; `None` when the park has no cameras.
pub fn select_camera(options: &[CameraOption], requested: Option<&str>) -> Option<String> {
    if let Some(requested) = requested {
        if options.iter().any(|o| o.value == requested) {
            return Some(requested.to_string());
        }
    }
    options.first().map(|o| o.value.clone())
}

/// Assemble the controls state once the camera list and date bounds for the
/// selected camera are known.
pub fn build_controls(
    park: Option<&str>,
    cameras: Vec<CameraOption>,
    selected_camera: Option<String>,
    date_range: DateRange,
    images: &ImageCatalog,
) -> ControlsData {
    let camera_image = images.image_for(park, selected_camera.as_deref()).src;
    ControlsData {
        park: park.map(str::to_string),
        cameras,
        selected_camera,
        date_range,
        camera_image,
    }
}
