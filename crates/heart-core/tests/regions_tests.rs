// Host-side tests for the region table.

use heart_core::*;
use std::collections::HashSet;

#[test]
fn seven_unique_regions_in_id_order() {
    let ids: Vec<RegionId> = regions().iter().map(|r| r.id).collect();
    assert_eq!(ids, RegionId::ALL.to_vec());
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 7);
}

#[test]
fn anchors_and_scales_are_finite() {
    for r in regions() {
        assert!(r.anchor.is_finite(), "{}", r.id);
        assert!(r.scale.is_finite() && r.scale.min_element() > 0.0, "{}", r.id);
        assert!(!r.name.is_empty());
        assert!(!r.description.is_empty());
        assert!(!r.functions.is_empty());
        assert!(r.headline_fact().is_some());
    }
}

#[test]
fn keys_round_trip() {
    for id in RegionId::ALL {
        assert_eq!(RegionId::from_key(id.as_str()), Some(id));
        assert_eq!(id.to_string(), id.as_str());
    }
    assert_eq!(RegionId::from_key("spleen"), None);
}

#[test]
fn lookup_by_id() {
    let lv = region(RegionId::LeftVentricle).unwrap();
    assert_eq!(lv.name, "Left Ventricle");
    assert_eq!(lv.color.to_hex(), "#475569");
    assert_eq!(lv.color.to_hex_alpha(0x33), "#47556933");
}

#[test]
fn color_components_are_normalized() {
    let [r, g, b] = Rgb(255, 0, 51).to_f32();
    assert_eq!((r, g, b), (1.0, 0.0, 0.2));
}

#[test]
fn geometry_hints_have_marker_classes() {
    for r in regions() {
        assert!(r.geometry.css_class().starts_with("marker-"));
    }
}
