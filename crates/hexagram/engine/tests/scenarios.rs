//! End-to-end behaviour of the canonical relationship index.

use hexagram_engine::{
    derive_all, EngineConfig, GridLayout, HexagramCodex, Relation, RelationshipEngine,
};
use hexagram_registry::canonical;
use hexagram_types::{AuxValue, HexagramId, HexagramLines, Line, TrigramIdentity};

fn codex() -> HexagramCodex {
    derive_all(&canonical()).expect("canonical registry derives")
}

fn ids(raw: &[u32]) -> Vec<HexagramId> {
    raw.iter().copied().map(HexagramId).collect()
}

#[test]
fn qian_flips_to_kun() {
    let codex = codex();
    let qian = codex.get(HexagramId(1)).unwrap();
    assert!(qian.lines().iter().all(Line::is_yang));
    assert_eq!(qian.relationships().opposite, Some(HexagramId(2)));
    assert_eq!(qian.relationships().shadow, Some(HexagramId(2)));

    let kun = codex.get(HexagramId(2)).unwrap();
    assert_eq!(kun.name(), "Kun");
    assert!(kun.lines().iter().all(Line::is_yin));
}

#[test]
fn qian_reversals_resolve_to_itself() {
    let codex = codex();
    let rel = codex.get(HexagramId(1)).unwrap().relationships();
    assert_eq!(rel.inverse, Some(HexagramId(1)));
    assert_eq!(rel.mirror, rel.inverse);
    assert_eq!(rel.rotational, rel.inverse);
}

#[test]
fn default_grid_places_index_nine_at_one_one() {
    let codex = codex();
    let grid = GridLayout::default_for(&codex);
    let cell = grid.cell(1, 1).unwrap();
    assert_eq!(cell.id(), codex.at_position(9).map(|h| h.id()));
}

#[test]
fn annotation_depth_one_stops_after_one_hop() {
    let mut codex = codex();
    let writes = codex.annotate_related(HexagramId(1), "x", "v", 1).unwrap();
    assert_eq!(writes, 41);

    let v = AuxValue::Text("v".into());
    assert_eq!(codex.get(HexagramId(1)).unwrap().datum("x"), Some(&v));
    assert_eq!(codex.get(HexagramId(2)).unwrap().datum("x_opposite"), Some(&v));
    for hexagram in codex.iter() {
        assert!(
            hexagram.data().keys().all(|k| !k.contains("_opposite_opposite")),
            "{} carries a second-hop key",
            hexagram
        );
    }
}

#[test]
fn absent_pattern_is_a_miss() {
    let codex = codex();
    let absent: HexagramLines = "000101".parse().unwrap();
    assert!(codex.find_by_lines(&absent).is_none());
    assert_eq!(codex.index().find_by_exact_lines(&absent), None);
}

#[test]
fn full_relationship_set_of_qian() {
    let codex = codex();
    let qian = codex.get(HexagramId(1)).unwrap();
    let rel = qian.relationships();
    assert_eq!(qian.upper_trigram().identity(), TrigramIdentity::Qian);
    assert_eq!(qian.lower_trigram().identity(), TrigramIdentity::Qian);
    assert_eq!(rel.nuclear, Some(HexagramId(1)));
    assert_eq!(rel.mutual, Some(HexagramId(1)));
    assert_eq!(rel.derivative, ids(&[56, 37, 13, 9, 34]));
    assert_eq!(rel.sequential.next, Some(HexagramId(2)));
    assert_eq!(rel.sequential.previous, Some(HexagramId(64)));
    assert_eq!(
        rel.complementary_trigrams,
        ids(&[
            1, 5, 6, 9, 11, 12, 13, 14, 20, 25, 26, 32, 34, 37, 38, 43, 44, 46, 49, 52, 55, 56,
            57, 60, 64
        ])
    );
    assert_eq!(rel.symmetrical, ids(&[1]));
}

#[test]
fn kun_derivatives_in_line_order() {
    let codex = codex();
    let rel = codex.get(HexagramId(2)).unwrap().relationships();
    assert_eq!(rel.opposite, Some(HexagramId(1)));
    assert_eq!(rel.derivative, ids(&[33, 7, 15, 8, 45]));
}

#[test]
fn shared_patterns_group_and_resolve_to_first() {
    let codex = codex();
    for id in [11, 20, 38] {
        let rel = codex.get(HexagramId(id)).unwrap().relationships();
        assert_eq!(rel.symmetrical, ids(&[11, 20, 38]));
        assert_eq!(rel.inverse, Some(HexagramId(12)));
    }
    let guai = codex.get(HexagramId(43)).unwrap().relationships();
    assert_eq!(guai.symmetrical, ids(&[34, 43, 44, 46, 49]));
    assert_eq!(guai.mutual, None);
}

#[test]
fn misses_are_plain_absence() {
    let codex = codex();
    let wei_ji = codex.get(HexagramId(64)).unwrap().relationships();
    assert_eq!(wei_ji.inverse, None);
    assert_eq!(wei_ji.opposite, Some(HexagramId(15)));
    assert_eq!(wei_ji.symmetrical, ids(&[13, 64]));
    assert!(codex.related(HexagramId(64), Relation::Inverse).is_empty());

    let count = |f: fn(&hexagram_engine::Relationships) -> bool| {
        codex.iter().filter(|h| f(h.relationships())).count()
    };
    assert_eq!(count(|r| r.inverse.is_none()), 9);
    assert_eq!(count(|r| r.opposite.is_none()), 14);
    assert_eq!(count(|r| r.nuclear.is_none()), 0);
    assert_eq!(count(|r| r.mutual.is_none()), 16);
}

#[test]
fn rederivation_is_identical() {
    let a = codex();
    let b = codex();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x, y);
    }
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
}

#[test]
fn config_from_toml_drives_engine() {
    let config: EngineConfig = toml::from_str("grid_columns = 4\n").unwrap();
    let codex = RelationshipEngine::new(config)
        .derive_all(&canonical())
        .unwrap();
    let grid = GridLayout::default_for(&codex);
    assert_eq!(grid.row_count(), 16);
    assert_eq!(grid.cell(2, 1).and_then(|c| c.id()), Some(HexagramId(10)));
}
