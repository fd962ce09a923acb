//! End-to-end tests: load a small catalog, then exercise every match tier
//! through the public registry surface.

use devicematch_catalog::{load_catalog, Registry};

fn catalog_json() -> &'static str {
    r#"[
        {
            "id": "blackberry_root",
            "user_agent": "BlackBerry",
            "actual_device_root": true,
            "capabilities": {"is_mobile": "true", "vendor": "RIM"}
        },
        {
            "id": "blackberry9000_ver1",
            "user_agent": "BlackBerry9000/4.6.0.167 Profile/MIDP-2.0 Configuration/CLDC-1.1",
            "parent": "blackberry_root",
            "capabilities": {"screen_width": "480"}
        },
        {
            "id": "nokia_n95_ver1",
            "user_agent": "NokiaN95/2.0 (SymbianOS/9.2; U; Series60/3.1)",
            "actual_device_root": true,
            "capabilities": {"is_mobile": "true", "vendor": "Nokia"}
        },
        {
            "id": "motorola_droid3_ver1",
            "user_agent": "Mozilla/5.0 (Linux; U; Android 2.3.4; en-us; DROID3 Build/5.5.1_84_D3G-55) AppleWebKit/533.1",
            "actual_device_root": true,
            "capabilities": {"is_mobile": "true", "os": "Android"}
        }
    ]"#
}

fn loaded_registry() -> Registry {
    let mut registry = Registry::with_standard_chain().unwrap();
    load_catalog(&mut registry, catalog_json().as_bytes()).unwrap();
    registry
}

#[test]
fn exact_tier_hits_registered_agent() {
    let registry = loaded_registry();
    assert_eq!(
        registry.match_ua("BlackBerry9000/4.6.0.167 Profile/MIDP-2.0 Configuration/CLDC-1.1"),
        "blackberry9000_ver1"
    );
}

#[test]
fn conclusive_tier_matches_firmware_variant() {
    let registry = loaded_registry();
    // Same handset, different firmware: prefix search up to the first
    // slash finds the registered reference.
    assert_eq!(
        registry.match_ua("NokiaN95/3.1 (SymbianOS/9.2; U; Series60/3.1)"),
        "nokia_n95_ver1"
    );
}

#[test]
fn conclusive_tier_matches_android_model_discriminant() {
    let registry = loaded_registry();
    assert_eq!(
        registry.match_ua(
            "Mozilla/5.0 (Linux; U; Android 2.3.4; fr-fr; DROID3 Build/5.6.890) AppleWebKit/534.8"
        ),
        "motorola_droid3_ver1"
    );
}

#[test]
fn recovery_tier_maps_version_markers() {
    let registry = loaded_registry();
    // Unregistered handset, but the BlackBerry version token recovers a
    // generic family identity.
    assert_eq!(
        registry.match_ua("BlackBerry8520/5.0.0.592 Profile/MIDP-2.1"),
        "blackberry_generic_ver5"
    );
}

#[test]
fn catch_all_tier_uses_keyword_tables() {
    let registry = loaded_registry();
    assert_eq!(
        registry.match_ua("SonyEricssonK700i/R2A UP.Browser/6.2.3.1"),
        "opwv_v62_generic"
    );
    assert_eq!(
        registry.match_ua(
            "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/535.1 Chrome/13.0.782.112 Safari/535.1"
        ),
        "google_chrome"
    );
}

#[test]
fn capabilities_resolve_through_inheritance() {
    let registry = loaded_registry();
    let device = registry
        .match_device("BlackBerry9000/4.6.0.167 Profile/MIDP-2.0 Configuration/CLDC-1.1")
        .unwrap();
    assert_eq!(device.capability("vendor"), Some("RIM"));
    assert_eq!(device.capability("screen_width"), Some("480"));
    assert_eq!(device.parent.as_deref(), Some("blackberry_root"));
}

#[test]
fn every_agent_resolves_to_some_identity() {
    let registry = loaded_registry();
    for ua in [
        "",
        " ",
        "complete garbage",
        "Mozilla/5.0",
        "Mozilla/4.0 (compatible)",
        "端末/1.0 ブラウザ/2.0",
        "\u{0}\u{1}binary junk",
    ] {
        let id = registry.match_ua(ua);
        assert!(!id.is_empty(), "no identity for {ua:?}");
    }
}
