use serde::{Deserialize, Serialize};

/// Representative snapshot for the selected camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraImage {
    /// URL path of the image under the static route
    pub src: String,
    /// `false` when the placeholder image was substituted
    pub matched: bool,
}

pub const GET_CAMERA_IMAGE: &str = "/camera-image";
