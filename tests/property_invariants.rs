use std::collections::BTreeMap;
use std::io::Cursor;

use proptest::prelude::*;

use countrymgr::{
    analysis::{Metric, metric_range},
    controller::Controller,
    core::store::MemoryCountryStore,
    country::Country,
    persist::CountryStore,
    types::CountryCode,
};

fn code_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

fn percent_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0u32..=10_000).prop_map(|v| Some(f64::from(v) / 100.0))]
}

fn entry(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn run_script(store: MemoryCountryStore, script: String) -> MemoryCountryStore {
    let mut controller = Controller::new(store, Cursor::new(script), Vec::new());
    controller.run().expect("session");
    controller.into_parts().0
}

proptest! {
    #[test]
    fn adds_with_distinct_codes_are_listed_exactly(
        rows in prop::collection::btree_map(code_strategy(), (percent_strategy(), percent_strategy()), 0..20)
    ) {
        let mut script = String::new();
        for (code, (internet, literacy)) in &rows {
            script.push_str(&format!("add\n{code}\nName of {code}\n{}\n{}\n", entry(*internet), entry(*literacy)));
        }
        script.push_str("quit\n");

        let store = run_script(MemoryCountryStore::new(), script);
        let listed: BTreeMap<String, (Option<f64>, Option<f64>)> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|c| (c.code.to_string(), (c.internet_users, c.adult_literacy_rate)))
            .collect();
        prop_assert_eq!(listed, rows);
    }

    #[test]
    fn add_with_wrong_code_length_never_mutates(raw in "[A-Z]{0,2}|[A-Z]{4,8}") {
        let seeded = MemoryCountryStore::with_countries([
            Country::builder(CountryCode::parse("USA").unwrap(), "United States").build(),
        ]).unwrap();
        let before = seeded.find_all().unwrap();

        let store = run_script(seeded, format!("add\n{raw}\nName\n1\n1\nquit\n"));
        prop_assert_eq!(store.find_all().unwrap(), before);
    }

    #[test]
    fn extrema_match_full_scan_with_first_seen_ties(
        values in prop::collection::vec(percent_strategy(), 0..30)
    ) {
        let countries: Vec<Country> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                Country::builder(CountryCode::parse(&format!("C{i:02}")).unwrap(), format!("Country {i}"))
                    .internet_users(*v)
                    .build()
            })
            .collect();

        let range = metric_range(&countries, Metric::InternetUsers);
        let present: Vec<(usize, f64)> = values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
            .collect();

        if present.is_empty() {
            prop_assert!(range.max.is_none());
            prop_assert!(range.min.is_none());
        } else {
            let max_value = present.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
            let min_value = present.iter().map(|(_, v)| *v).fold(f64::MAX, f64::min);
            let first_max = present.iter().find(|(_, v)| *v == max_value).unwrap().0;
            let first_min = present.iter().find(|(_, v)| *v == min_value).unwrap().0;

            let max = range.max.unwrap();
            let min = range.min.unwrap();
            prop_assert_eq!(max.value, max_value);
            prop_assert_eq!(min.value, min_value);
            prop_assert_eq!(&max.country.code, &countries[first_max].code);
            prop_assert_eq!(&min.country.code, &countries[first_min].code);
        }
    }
}
