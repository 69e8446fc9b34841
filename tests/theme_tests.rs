// Host-side tests for theme parsing, resolution and persistence.

use folio_core::constants::THEME_STORAGE_KEY;
use folio_core::{MemoryStore, Palette, ParseThemeError, PreferenceStore, ThemeController, ThemeMode};

fn store_with(value: &str) -> MemoryStore {
    let mut store = MemoryStore::default();
    store.save(THEME_STORAGE_KEY, value);
    store
}

#[test]
fn parses_and_prints_both_modes() {
    assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
    assert_eq!(ThemeMode::Light.as_str(), "light");
}

#[test]
fn unknown_theme_is_an_error() {
    let err = "sepia".parse::<ThemeMode>().unwrap_err();
    assert_eq!(err, ParseThemeError("sepia".to_string()));
    assert!(err.to_string().contains("sepia"));
    assert!("Dark".parse::<ThemeMode>().is_err());
}

#[test]
fn attribute_snapshot_defaults_to_light() {
    assert_eq!(ThemeMode::from_attribute(Some("dark")), ThemeMode::Dark);
    assert_eq!(ThemeMode::from_attribute(Some("light")), ThemeMode::Light);
    assert_eq!(ThemeMode::from_attribute(Some("bogus")), ThemeMode::Light);
    assert_eq!(ThemeMode::from_attribute(None), ThemeMode::Light);
}

#[test]
fn toggling_flips_mode_and_icon() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert_eq!(ThemeMode::Light.icon_class(), "fa-sun");
    assert_eq!(ThemeMode::Dark.icon_class(), "fa-moon");
}

#[test]
fn stored_preference_wins_over_os() {
    let c = ThemeController::new(store_with("light"), true);
    assert_eq!(c.mode(), ThemeMode::Light);
    let c = ThemeController::new(store_with("dark"), false);
    assert_eq!(c.mode(), ThemeMode::Dark);
}

#[test]
fn os_preference_is_the_fallback() {
    assert_eq!(ThemeController::new(MemoryStore::default(), true).mode(), ThemeMode::Dark);
    assert_eq!(ThemeController::new(MemoryStore::default(), false).mode(), ThemeMode::Light);
    assert_eq!(ThemeController::new(store_with("neon"), true).mode(), ThemeMode::Dark);
}

#[test]
fn resolving_does_not_write_storage() {
    let c = ThemeController::new(MemoryStore::default(), true);
    assert_eq!(c.store().load(THEME_STORAGE_KEY), None);
}

#[test]
fn toggle_persists_the_new_mode() {
    let mut c = ThemeController::new(MemoryStore::default(), false);
    assert_eq!(c.toggle(), ThemeMode::Dark);
    assert_eq!(c.store().load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(c.toggle(), ThemeMode::Light);
    assert_eq!(c.store().load(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_from_follows_the_displayed_mode() {
    let mut c = ThemeController::new(store_with("light"), false);
    // The page shows dark even though the controller resolved light.
    assert_eq!(c.toggle_from(ThemeMode::Dark), ThemeMode::Light);
    assert_eq!(c.mode(), ThemeMode::Light);
}

#[test]
fn palettes_differ_per_theme() {
    let light = Palette::for_theme(ThemeMode::Light);
    let dark = Palette::for_theme(ThemeMode::Dark);
    assert_ne!(light, dark);
    assert_eq!((dark.orbit.r, dark.orbit.g, dark.orbit.b), (59, 130, 246));
    assert_eq!(light.drift.to_string(), "rgba(0, 0, 0, 0.05)");
    assert_eq!(dark.drift.to_string(), "rgba(255, 255, 255, 0.1)");
}
