use sandfall_engine::{PixelType, SimulationCore};

fn kind_at(sim: &SimulationCore, x: i32, y: i32) -> PixelType {
    sim.cell_at(x, y).map(|c| c.kind).unwrap_or_default()
}

fn positions_of(sim: &SimulationCore, kind: PixelType) -> Vec<(u32, u32)> {
    let grid = sim.grid();
    grid.types
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == kind)
        .map(|(i, _)| grid.coords(i))
        .collect()
}

#[test]
fn sand_pile_settles_and_goes_idle() {
    let mut sim = SimulationCore::new(40, 30, 8);
    let placed = sim.place_pixels_in_circle(20, 5, 4, PixelType::Sand);
    assert_eq!(placed, 49);

    for _ in 0..300 {
        sim.advance();
    }
    assert_eq!(sim.pixel_count(), placed);

    // Nothing hangs in the air
    for (x, y) in positions_of(&sim, PixelType::Sand) {
        if y + 1 < sim.height() {
            assert_ne!(kind_at(&sim, x as i32, y as i32 + 1), PixelType::Empty, "sand floating at ({}, {})", x, y);
        }
    }

    sim.advance();
    assert_eq!(sim.perf_stats().pixels_moved(), 0);
    assert_eq!(sim.dirty_rects().dirty_region_count(), 0);
}

#[test]
fn water_runs_down_and_spreads() {
    let mut sim = SimulationCore::new(40, 20, 8);
    for y in 0..5 {
        for x in 18..23 {
            sim.place_pixel(x, y, PixelType::Water);
        }
    }

    for _ in 0..400 {
        sim.advance();
    }

    let water = positions_of(&sim, PixelType::Water);
    assert_eq!(water.len(), 25);
    assert!(water.iter().all(|&(_, y)| y >= 15), "water stacked too high: {:?}", water);
    let xs: std::collections::HashSet<u32> = water.iter().map(|&(x, _)| x).collect();
    assert!(xs.len() > 5);
}

#[test]
fn gas_vents_out_through_the_top() {
    let mut sim = SimulationCore::new(20, 20, 8);
    let placed = sim.place_pixels_in_circle(10, 15, 3, PixelType::Gas);
    assert!(placed > 0);

    for _ in 0..200 {
        sim.advance();
    }
    assert_eq!(sim.pixel_count(), 0);
    assert!(positions_of(&sim, PixelType::Gas).is_empty());
}

#[test]
fn sand_sinks_through_a_pool() {
    let mut sim = SimulationCore::new(9, 12, 4);
    for y in 0..12 {
        sim.place_pixel(0, y, PixelType::Stone);
        sim.place_pixel(8, y, PixelType::Stone);
    }
    for y in 8..12 {
        for x in 1..8 {
            sim.place_pixel(x, y, PixelType::Water);
        }
    }
    sim.place_pixel(4, 0, PixelType::Sand);

    for _ in 0..60 {
        sim.advance();
    }
    assert_eq!(kind_at(&sim, 4, 11), PixelType::Sand);
    assert_eq!(positions_of(&sim, PixelType::Water).len(), 28);
}

#[test]
fn stone_never_moves() {
    let mut sim = SimulationCore::new(16, 16, 8);
    sim.place_pixel(7, 2, PixelType::Stone);
    sim.place_pixel(7, 1, PixelType::Sand);
    for _ in 0..30 {
        sim.advance();
    }
    assert_eq!(kind_at(&sim, 7, 2), PixelType::Stone);
    assert_eq!(kind_at(&sim, 7, 1), PixelType::Empty);
}
