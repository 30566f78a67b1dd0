use super::*;
use chess_core::Position;

fn key_of(fen: &str) -> u64 {
    Position::from_fen(fen).unwrap().material_key()
}

#[test]
fn test_default_registry_size() {
    let eg = Endgames::new();
    assert_eq!(eg.value_len(), 16);
    assert_eq!(eg.scale_len(), 16);
}

#[test]
fn test_both_strong_sides_resolve() {
    let eg = Endgames::new();
    for &kind in ValueKind::REGISTERED {
        for strong in Color::ALL {
            let entry = eg.probe_value(signature::key(kind.code(), strong)).unwrap();
            assert_eq!(entry.kind(), kind);
            assert_eq!(entry.strong_side(), strong);
        }
    }
    for &kind in ScaleKind::REGISTERED {
        for strong in Color::ALL {
            let entry = eg.probe_scale(signature::key(kind.code(), strong)).unwrap();
            assert_eq!(entry.kind(), kind);
            assert_eq!(entry.strong_side(), strong);
        }
    }
}

#[test]
fn test_live_position_lookup() {
    let eg = Endgames::new();

    let krkp = eg.probe_value(key_of("8/8/8/4k3/8/3p4/8/R3K3 w - - 0 1")).unwrap();
    assert_eq!(krkp.kind(), ValueKind::KRKP);
    assert_eq!(krkp.strong_side(), Color::White);

    let krpkr = eg.probe_scale(key_of("r3k3/8/8/8/8/8/P7/4K2R b - - 0 1")).unwrap();
    assert_eq!(krpkr.kind(), ScaleKind::KRPKR);
    assert_eq!(krpkr.strong_side(), Color::White);

    let knnk = eg.probe_value(key_of("1n2k1n1/8/8/8/8/8/8/4K3 w - - 0 1")).unwrap();
    assert_eq!(knnk.strong_side(), Color::Black);
}

#[test]
fn test_unregistered_material_misses() {
    let eg = Endgames::new();
    let start = key_of("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(eg.probe_value(start).is_none());
    assert!(eg.probe_scale(start).is_none());
}

#[test]
fn test_families_do_not_mix() {
    let eg = Endgames::new();
    assert!(eg.probe_scale(signature::key("KPK", Color::White)).is_none());
    assert!(eg.probe_value(signature::key("KRPKR", Color::White)).is_none());
}

#[test]
fn test_register_single_code() {
    let mut eg = Endgames::default();
    eg.register("KQKR").unwrap();
    assert_eq!(eg.value_len(), 2);
    assert_eq!(eg.scale_len(), 0);
    assert!(eg.probe_value(signature::key("KQKR", Color::Black)).is_some());

    assert!(matches!(eg.register("KQQK"), Err(EndgameError::UnknownCode(_))));
    assert!(matches!(eg.register("KQ"), Err(EndgameError::MalformedCode { .. })));
}

#[test]
fn test_from_config() {
    let config = RegistryConfig {
        value: vec!["KBNK".into()],
        scale: vec!["KRPKR".into(), "KBPKB".into()],
    };
    let eg = Endgames::from_config(&config).unwrap();
    assert_eq!(eg.value_len(), 2);
    assert_eq!(eg.scale_len(), 4);
    assert!(eg.probe_value(signature::key("KPK", Color::White)).is_none());
}

#[test]
fn test_from_config_rejects_misfiled_code() {
    let config = RegistryConfig {
        value: vec!["KRPKR".into()],
        scale: vec![],
    };
    assert!(matches!(
        Endgames::from_config(&config),
        Err(EndgameError::WrongFamily(code)) if code == "KRPKR"
    ));
}

#[test]
fn test_from_config_rejects_unknown_code() {
    let config = RegistryConfig {
        value: vec![],
        scale: vec!["KRRKR".into()],
    };
    assert!(matches!(Endgames::from_config(&config), Err(EndgameError::UnknownCode(_))));
}

#[test]
fn test_global_registry_is_shared() {
    assert!(std::ptr::eq(endgames(), endgames()));
    assert_eq!(endgames().value_len(), 16);
}
