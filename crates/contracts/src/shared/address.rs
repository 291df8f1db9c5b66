use serde::{Deserialize, Serialize};

use crate::domain::a011_province::Province;
use crate::domain::a012_municipality::Municipality;
use crate::domain::a013_barangay::Barangay;

/// Four-level address selection used by customer and vendor forms.
///
/// Selecting a record at any level back-fills every ancestor field from
/// the record's parent codes in the same update, reading the already
/// loaded reference lists. Selecting an ancestor directly only sets that
/// level: descendants keep their old values even when they no longer
/// belong to the new ancestor. Current behavior, kept as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSelection {
    #[serde(rename = "RegionID")]
    pub region_id: Option<i32>,
    #[serde(rename = "ProvinceID")]
    pub province_id: Option<i32>,
    #[serde(rename = "MunicipalityID")]
    pub municipality_id: Option<i32>,
    #[serde(rename = "BarangayID")]
    pub barangay_id: Option<i32>,
}

impl AddressSelection {
    pub fn is_empty(&self) -> bool {
        self.region_id.is_none()
            && self.province_id.is_none()
            && self.municipality_id.is_none()
            && self.barangay_id.is_none()
    }

    /// Sets the barangay and back-fills municipality, province and region
    /// from the matched record. An id missing from `barangays` (stale
    /// option, cleared selection) changes only the barangay field.
    pub fn select_barangay(&mut self, id: Option<i32>, barangays: &[Barangay]) {
        self.barangay_id = id;
        if let Some(record) = id.and_then(|id| barangays.iter().find(|b| b.id == id)) {
            self.municipality_id = Some(record.municipality_code);
            self.province_id = Some(record.province_code);
            self.region_id = Some(record.region_code);
        }
    }

    /// Sets the municipality and back-fills province and region. The
    /// barangay field is left as-is.
    pub fn select_municipality(&mut self, id: Option<i32>, municipalities: &[Municipality]) {
        self.municipality_id = id;
        if let Some(record) = id.and_then(|id| municipalities.iter().find(|m| m.id == id)) {
            self.province_id = Some(record.province_code);
            self.region_id = Some(record.region_code);
        }
    }

    /// Sets the province and back-fills the region only.
    pub fn select_province(&mut self, id: Option<i32>, provinces: &[Province]) {
        self.province_id = id;
        if let Some(record) = id.and_then(|id| provinces.iter().find(|p| p.id == id)) {
            self.region_id = Some(record.region_code);
        }
    }

    pub fn select_region(&mut self, id: Option<i32>) {
        self.region_id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barangay(id: i32, municipality: i32, province: i32, region: i32) -> Barangay {
        Barangay {
            id,
            name: format!("Barangay {}", id),
            municipality_code: municipality,
            province_code: province,
            region_code: region,
        }
    }

    fn municipality(id: i32, province: i32, region: i32) -> Municipality {
        Municipality {
            id,
            name: format!("Municipality {}", id),
            province_code: province,
            region_code: region,
        }
    }

    fn province(id: i32, region: i32) -> Province {
        Province {
            id,
            name: format!("Province {}", id),
            region_code: region,
        }
    }

    #[test]
    fn barangay_selection_fills_all_ancestors_at_once() {
        let barangays = vec![barangay(41, 3, 5, 2)];
        let mut selection = AddressSelection::default();
        selection.select_barangay(Some(41), &barangays);
        assert_eq!(
            selection,
            AddressSelection {
                region_id: Some(2),
                province_id: Some(5),
                municipality_id: Some(3),
                barangay_id: Some(41),
            }
        );
    }

    #[test]
    fn municipality_selection_fills_province_and_region() {
        let municipalities = vec![municipality(10, 5, 2)];
        let mut selection = AddressSelection::default();
        selection.select_municipality(Some(10), &municipalities);
        assert_eq!(selection.province_id, Some(5));
        assert_eq!(selection.region_id, Some(2));
        assert_eq!(selection.barangay_id, None);
    }

    #[test]
    fn unknown_id_sets_only_the_selected_level() {
        let barangays = vec![barangay(41, 3, 5, 2)];
        let mut selection = AddressSelection::default();
        selection.select_barangay(Some(999), &barangays);
        assert_eq!(selection.barangay_id, Some(999));
        assert_eq!(selection.municipality_id, None);
        assert_eq!(selection.region_id, None);
    }

    #[test]
    fn clearing_a_leaf_keeps_ancestors() {
        let barangays = vec![barangay(41, 3, 5, 2)];
        let mut selection = AddressSelection::default();
        selection.select_barangay(Some(41), &barangays);
        selection.select_barangay(None, &barangays);
        assert_eq!(selection.barangay_id, None);
        assert_eq!(selection.municipality_id, Some(3));
        assert_eq!(selection.province_id, Some(5));
    }

    // Pins the deployed behavior: changing an ancestor leaves descendants
    // stale rather than clearing them.
    #[test]
    fn ancestor_change_does_not_clear_descendants() {
        let municipalities = vec![municipality(10, 5, 2)];
        let provinces = vec![province(5, 2), province(9, 4)];
        let mut selection = AddressSelection::default();
        selection.select_municipality(Some(10), &municipalities);
        selection.select_province(Some(9), &provinces);
        assert_eq!(selection.province_id, Some(9));
        assert_eq!(selection.region_id, Some(4));
        assert_eq!(selection.municipality_id, Some(10));
    }
}
