use super::*;

fn request(metal: Metal, topology: Topology, pore_size: f64, count: usize) -> DesignRequest {
    DesignRequest {
        brief: "x".to_string(),
        metal,
        topology,
        pore_size,
        candidate_count: count,
    }
}

#[test]
fn test_default_request_matches_reference_output() {
    let out = DemoGenerator::new().generate(&request(Metal::Auto, Topology::Auto, 12.0, 3));

    assert_eq!(out.len(), 3);
    assert_eq!(out[0].name, "Zn-GenMOF-1");
    assert_eq!(out[0].metal, "Zn");
    assert_eq!(out[0].pore_size, 10.0);
    assert_eq!(out[0].linker, "terephthalate");
    assert_eq!(out[0].tagline, TAGLINES[0]);

    assert_eq!(out[1].name, "Cu-GenMOF-2");
    assert_eq!(out[1].pore_size, 12.0);
    assert_eq!(out[1].linker, "bipyridyl + dicarboxylate");

    assert_eq!(out[2].name, "Zr-GenMOF-3");
    assert_eq!(out[2].pore_size, 14.0);
    assert_eq!(out[2].linker, "UiO-type dicarboxylate");

    assert!(out.iter().all(|c| c.topology == "pcu"));
}

#[test]
fn test_length_always_matches_count() {
    for count in 0..=8 {
        assert_eq!(generate_candidates(Metal::Auto, Topology::Auto, 12.0, count).len(), count);
    }
}

#[test]
fn test_zero_count_is_empty() {
    assert!(generate_candidates(Metal::Co, Topology::Dia, 8.0, 0).is_empty());
}

#[test]
fn test_is_deterministic() {
    let a = generate_candidates(Metal::Ni, Topology::Fcu, 17.5, 5);
    let b = generate_candidates(Metal::Ni, Topology::Fcu, 17.5, 5);
    assert_eq!(a, b);
}

#[test]
fn test_fixed_metal_used_for_every_candidate() {
    let out = generate_candidates(Metal::Cu, Topology::Sql, 12.0, 5);
    assert!(out.iter().all(|c| c.metal == "Cu"));
    assert_eq!(out[4].name, "Cu-GenMOF-5");
}

#[test]
fn test_mixed_metal_keeps_display_name() {
    let out = generate_candidates(Metal::MixedMetal, Topology::Auto, 12.0, 1);
    assert_eq!(out[0].name, "Mixed metal-GenMOF-1");
}

#[test]
fn test_explicit_topology_is_kept() {
    let out = generate_candidates(Metal::Auto, Topology::SqlPillared, 12.0, 3);
    assert!(out.iter().all(|c| c.topology == "sql-pillared"));
}

#[test]
fn test_zero_pore_size_falls_back_to_default() {
    let out = generate_candidates(Metal::Auto, Topology::Auto, 0.0, 3);
    let pores: Vec<f64> = out.iter().map(|c| c.pore_size).collect();
    assert_eq!(pores, vec![10.0, 12.0, 14.0]);
}

#[test]
fn test_fifth_candidate_wraps_tables() {
    let out = generate_candidates(Metal::Auto, Topology::Auto, 12.0, 5);
    assert_eq!(out[3].metal, "Zn");
    assert_eq!(out[4].metal, "Cu");
    assert_eq!(out[4].name, "Cu-GenMOF-5");
    assert_eq!(out[4].linker, LINKERS[1]);
    assert_eq!(out[4].tagline, TAGLINES[1]);
    assert_eq!(out[4].pore_size, 18.0);
}

#[test]
fn test_pore_offset_is_not_clamped() {
    let out = generate_candidates(Metal::Auto, Topology::Auto, 3.0, 1);
    assert_eq!(out[0].pore_size, 1.0);
}

#[test]
fn test_half_step_pore_sizes_round_to_one_decimal() {
    let out = generate_candidates(Metal::Zr, Topology::Auto, 7.5, 3);
    let pores: Vec<f64> = out.iter().map(|c| c.pore_size).collect();
    assert_eq!(pores, vec![5.5, 7.5, 9.5]);
}

#[test]
fn test_rounding_ties_go_to_even() {
    let out = generate_candidates(Metal::Auto, Topology::Auto, 12.25, 3);
    let pores: Vec<f64> = out.iter().map(|c| c.pore_size).collect();
    assert_eq!(pores, vec![10.2, 12.2, 14.2]);

    let out = generate_candidates(Metal::Auto, Topology::Auto, 12.75, 2);
    assert_eq!(out[1].pore_size, 12.8);
}

#[test]
fn test_serializes_with_snake_case_fields() {
    let out = generate_candidates(Metal::Auto, Topology::Auto, 12.0, 1);
    let json = serde_json::to_value(&out[0]).unwrap();
    assert_eq!(json["name"], "Zn-GenMOF-1");
    assert_eq!(json["pore_size"], 10.0);
}
