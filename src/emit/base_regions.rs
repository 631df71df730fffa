//! Base (wake-separated) regions.

use crate::errors::ValidationError;
use crate::options::BaseRegionType;
use crate::script::Script;
use crate::values::{require_finite, require_positive_index, Scalar};

/// Trailing edge selection for base regions: every boundary, or one boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingEdgeBoundary {
    #[default]
    All,
    Boundary(u32),
}

impl Script {
    /// New base region on `surface` with pressure coefficient `cp`.
    pub fn create_new_base_region(
        &mut self,
        surface: u32,
        kind: BaseRegionType,
        cp: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let cp = cp.into();
        require_positive_index("surface", surface)?;
        require_finite("base_pressure_coefficient", cp)?;
        self.command(
            "Create a new base region",
            format!("CREATE_NEW_BASE_REGION {surface} {kind} {cp}"),
        )
    }

    pub fn auto_detect_base_regions(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Auto-detect base regions", "AUTO_DETECT_BASE_REGIONS")
    }

    pub fn detect_base_regions_by_surface(
        &mut self,
        boundary: u32,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("boundary_index", boundary)?;
        self.command(
            "Detect base regions by surface",
            format!("DETECT_BASE_REGIONS_BY_SURFACE {boundary}"),
        )
    }

    pub fn set_base_region_trailing_edges(
        &mut self,
        boundary: TrailingEdgeBoundary,
    ) -> Result<&mut Self, ValidationError> {
        let token = match boundary {
            TrailingEdgeBoundary::All => "-1".to_string(),
            TrailingEdgeBoundary::Boundary(b) => {
                require_positive_index("base_region_boundary", b)?;
                b.to_string()
            }
        };
        self.command(
            "Set base region trailing edges",
            format!("SET_BASE_REGION_TRAILING_EDGES {token}"),
        )
    }

    pub fn delete_base_region(&mut self, index: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("base_region_index", index)?;
        self.command("Delete a base region", format!("DELETE_BASE_REGION {index}"))
    }

    /// Select the faces of a base region.
    pub fn select_base_region(&mut self, index: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("base_region_index", index)?;
        self.command(
            "Select a base region",
            format!("SELECT_BASE_REGION_FACES {index}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_region_commands() {
        let mut s = Script::with_banners(false);
        s.create_new_base_region(1, BaseRegionType::Empirical, -0.2)
            .unwrap()
            .auto_detect_base_regions()
            .unwrap()
            .detect_base_regions_by_surface(2)
            .unwrap()
            .set_base_region_trailing_edges(TrailingEdgeBoundary::All)
            .unwrap()
            .set_base_region_trailing_edges(TrailingEdgeBoundary::Boundary(3))
            .unwrap()
            .delete_base_region(1)
            .unwrap()
            .select_base_region(2)
            .unwrap();
        assert_eq!(
            s.lines(),
            [
                "CREATE_NEW_BASE_REGION 1 EMPIRICAL -0.2",
                "AUTO_DETECT_BASE_REGIONS",
                "DETECT_BASE_REGIONS_BY_SURFACE 2",
                "SET_BASE_REGION_TRAILING_EDGES -1",
                "SET_BASE_REGION_TRAILING_EDGES 3",
                "DELETE_BASE_REGION 1",
                "SELECT_BASE_REGION_FACES 2"
            ]
        );
    }

    #[test]
    fn zero_indices_are_rejected() {
        let mut s = Script::new();
        assert!(s.create_new_base_region(0, BaseRegionType::Constant, 0.0).is_err());
        assert!(s
            .set_base_region_trailing_edges(TrailingEdgeBoundary::Boundary(0))
            .is_err());
        assert!(s.delete_base_region(0).is_err());
        assert!(s.is_empty());
    }
}
