//! Graphics scene selection, colormap legends and image capture.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{Colormap, ColormapType, CutOffMode, RunOption, Scene, SceneView};
use crate::script::Script;
use crate::values::{path_with_extension, require_finite, Scalar};

const IMAGE_EXTENSIONS: &[&str] = &["bmp", "png", "jpg", "jpeg", "tiff", "gif"];

impl Script {
    pub fn view_resize(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Resize the view to fit the scene", "VIEW_RESIZE")
    }

    pub fn change_scene_to(&mut self, scene: Scene) -> Result<&mut Self, ValidationError> {
        self.command(
            &format!("Change the scene to {scene}"),
            format!("CHANGE_SCENE_TO_{scene}"),
        )
    }

    /// Save the current scene; the file must carry an image extension.
    pub fn save_scene_as_image(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_with_extension("filename", path.as_ref(), IMAGE_EXTENSIONS)?;
        self.block(
            "Save the scene as an image",
            ["SAVE_SCENE_AS_IMAGE".to_string(), path],
        )
    }

    pub fn set_scene_view(&mut self, view: SceneView) -> Result<&mut Self, ValidationError> {
        self.command(
            &format!("Setting Scene to {view}"),
            format!("SET_SCENE_{view}"),
        )
    }

    pub fn set_scene_colormap_type(
        &mut self,
        colormap: Colormap,
        kind: ColormapType,
    ) -> Result<&mut Self, ValidationError> {
        self.block(
            "Set solver colormap type",
            [
                "SET_SCENE_COLORMAP_TYPE".to_string(),
                format!("COLORMAP {colormap}"),
                format!("TYPE {kind}"),
            ],
        )
    }

    /// Colormap legend size in pixels.
    pub fn set_scene_colormap_size(
        &mut self,
        colormap: Colormap,
        thickness: u32,
        height: u32,
    ) -> Result<&mut Self, ValidationError> {
        self.block(
            "Set solver colormap size",
            [
                "SET_SCENE_COLORMAP_SIZE".to_string(),
                format!("COLORMAP {colormap}"),
                format!("THICKNESS {thickness}"),
                format!("HEIGHT {height}"),
            ],
        )
    }

    /// Colormap legend position in pixels.
    pub fn set_scene_colormap_position(
        &mut self,
        colormap: Colormap,
        x: i32,
        y: i32,
    ) -> Result<&mut Self, ValidationError> {
        self.block(
            "Set solver colormap position",
            [
                "SET_SCENE_COLORMAP_POSITION".to_string(),
                format!("COLORMAP {colormap}"),
                format!("X {x}"),
                format!("Y {y}"),
            ],
        )
    }

    pub fn set_scene_colormap_shading(
        &mut self,
        colormap: Colormap,
        reverse: RunOption,
        smooth: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        self.block(
            "Set solver colormap shading",
            [
                "SET_SCENE_COLORMAP_SHADING".to_string(),
                format!("COLORMAP {colormap}"),
                format!("REVERSE {reverse}"),
                format!("SMOOTH {smooth}"),
            ],
        )
    }

    pub fn set_scene_colormap_custom_mode(
        &mut self,
        colormap: Colormap,
        custom_range: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        self.block(
            "Set solver colormap custom range mode",
            [
                "SET_SCENE_COLORMAP_CUSTOM_MODE".to_string(),
                format!("COLORMAP {colormap}"),
                format!("CUSTOM_RANGE {custom_range}"),
            ],
        )
    }

    pub fn set_scene_colormap_custom_range(
        &mut self,
        colormap: Colormap,
        cut_off: CutOffMode,
        maximum: impl Into<Scalar>,
        minimum: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let (max, min) = (maximum.into(), minimum.into());
        require_finite("maximum", max)?;
        require_finite("minimum", min)?;
        self.block(
            "Set solver colormap custom range",
            [
                "SET_SCENE_COLORMAP_CUSTOM_RANGE".to_string(),
                format!("COLORMAP {colormap}"),
                format!("CUT_OFF_MODE {cut_off}"),
                format!("MAXIMUM {max}"),
                format!("MINIMUM {min}"),
            ],
        )
    }
}
