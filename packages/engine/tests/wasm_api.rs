use sandfall_engine::{pixel_empty, pixel_gas, pixel_sand, pixel_stone, pixel_water, Simulation};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn pixel_ids_are_stable() {
    assert_eq!(
        [pixel_empty(), pixel_sand(), pixel_water(), pixel_gas(), pixel_stone()],
        [0, 1, 2, 3, 4]
    );
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn facade_places_and_steps() {
    let mut sim = Simulation::new(32, 16, 8);
    assert_eq!((sim.width(), sim.height(), sim.region_size()), (32, 16, 8));
    assert_eq!((sim.regions_x(), sim.regions_y(), sim.region_count()), (4, 2, 8));
    assert_eq!(sim.colors_len(), 32 * 16);

    assert!(sim.place_pixel(3, 3, pixel_sand()));
    assert!(!sim.place_pixel(3, 3, pixel_water()));
    assert!(!sim.place_pixel(4, 3, 42));
    assert_eq!(sim.pixel_count(), 1);

    sim.advance();
    assert!(sim.is_region_dirty(0));
    assert_eq!(sim.region_dirty_rect(0), vec![2, 4, 2, 4]);
    assert!(sim.region_dirty_rect(1).is_empty());

    sim.advance();
    assert_eq!(sim.cell_type_at(3, 4), pixel_sand());
    assert_eq!(sim.cell_last_updated_at(3, 4), sim.tick());
    assert_eq!(sim.cell_type_at(-1, 0), pixel_empty());
    assert_eq!(sim.get_perf_stats().pixels_moved(), 1);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn facade_brushes_and_erase() {
    let mut sim = Simulation::new(32, 32, 16);
    assert_eq!(sim.place_pixels_in_circle(16, 16, 2, pixel_stone()), 13);
    assert_eq!(sim.place_pixels_in_circle(16, 16, 2, 200), 0);
    assert_eq!(sim.place_pixels_in_circle(16, 16, 1, pixel_empty()), 5);
    assert_eq!(sim.pixel_count(), 8);
    assert!(sim.place_pixels_in_square(4, 4, 6, pixel_sand()) > 0);
    sim.clear();
    assert_eq!(sim.pixel_count(), 0);
    assert_eq!(sim.tick(), 0);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn facade_from_config_and_debug_json() {
    let sim = match Simulation::from_config_json(r#"{"width": 100, "height": 50, "region_size": 25, "sim_fps": 60}"#) {
        Ok(sim) => sim,
        Err(_) => panic!("config should be accepted"),
    };
    assert_eq!(sim.region_count(), 8);
    assert!(sim.supports_parallel_stages());
    assert!((sim.core().clock().step_seconds() - 1.0 / 60.0).abs() < 1e-12);

    let json = match sim.debug_regions_json() {
        Ok(json) => json,
        Err(_) => panic!("debug json should serialize"),
    };
    let regions: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(regions.as_array().map(Vec::len), Some(8));
    assert_eq!(regions[7]["x"], serde_json::json!(75));
    assert_eq!(regions[7]["active"], serde_json::json!(false));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn facade_update_uses_fixed_step() {
    let mut sim = Simulation::new(8, 8, 4);
    assert!(!sim.update(0.0));
    assert!(sim.update(1.0));
    assert_eq!(sim.tick(), 1);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen_test]
fn facade_rejects_bad_config() {
    assert!(Simulation::from_config_json(r#"{"width": 0}"#).is_err());
}
