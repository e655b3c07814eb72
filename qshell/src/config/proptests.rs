//! Property-based tests for setting resolution.

use super::resolver::Config;
use super::setting::Setting;
use super::store::{ConfigStore, Layer};
use proptest::prelude::*;

fn setting_strategy() -> impl Strategy<Value = Setting> {
    prop::sample::select(Setting::ALL.to_vec())
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9./_-]{1,24}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every key of a setting reads back what was set
    #[test]
    fn set_is_visible_through_every_key(
        setting in setting_strategy(),
        value in value_strategy(),
    ) {
        let mut config = Config::new();
        config.set(setting, &value);

        prop_assert_eq!(config.get(setting), value.as_str());
        for key in setting.keys() {
            prop_assert_eq!(config.get_key(key), value.as_str());
        }
    }

    // Explicit values shadow defaults regardless of write order
    #[test]
    fn explicit_shadows_default(
        setting in setting_strategy(),
        default in value_strategy(),
        explicit in value_strategy(),
        default_first in any::<bool>(),
    ) {
        let mut config = Config::new();
        if default_first {
            config.set_default(setting, &default);
            config.set(setting, &explicit);
        } else {
            config.set(setting, &explicit);
            config.set_default(setting, &default);
        }

        prop_assert_eq!(config.get(setting), explicit.as_str());
    }

    // A value held only by some alias is still found
    #[test]
    fn single_key_value_is_found(
        setting in setting_strategy(),
        index in any::<prop::sample::Index>(),
        value in value_strategy(),
        layer in prop::sample::select(Layer::PRECEDENCE.to_vec()),
    ) {
        let key = setting.keys()[index.index(setting.keys().len())];
        let mut store = ConfigStore::new();
        store.insert(layer, key, &value);
        let config = Config::from_store(store, None);

        prop_assert_eq!(config.get(setting), value.as_str());
    }

    // Writing one setting leaves every other setting unset
    #[test]
    fn settings_are_independent(
        setting in setting_strategy(),
        value in value_strategy(),
    ) {
        let mut config = Config::new();
        config.set(setting, &value);

        for other in Setting::ALL.into_iter().filter(|s| *s != setting) {
            prop_assert_eq!(config.get(other), "");
        }
    }
}
