use countrymgr::{
    core::store::MemoryCountryStore,
    country::Country,
    persist::{CountryStore, StoreError, sqlite::SqliteCountryStore},
    types::CountryCode,
};

fn code(raw: &str) -> CountryCode {
    CountryCode::parse(raw).expect("valid code")
}

fn country(raw: &str, name: &str, internet: Option<f64>, literacy: Option<f64>) -> Country {
    Country::builder(code(raw), name)
        .internet_users(internet)
        .adult_literacy_rate(literacy)
        .build()
}

fn insert_then_find_all_keeps_insertion_order(mut store: impl CountryStore) {
    store.insert(country("USA", "United States", Some(87.0), Some(99.0))).unwrap();
    store.insert(country("CHD", "Chad", Some(6.5), None)).unwrap();
    store.insert(country("ARG", "Argentina", None, None)).unwrap();

    let codes: Vec<_> = store
        .find_all()
        .unwrap()
        .into_iter()
        .map(|c| c.code.to_string())
        .collect();
    assert_eq!(codes, ["USA", "CHD", "ARG"]);
}

fn duplicate_insert_is_rejected(mut store: impl CountryStore) {
    store.insert(country("USA", "United States", None, None)).unwrap();
    let err = store
        .insert(country("USA", "Impostor", Some(1.0), Some(1.0)))
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(c) if c == code("USA")));

    let stored = store.find_by_code(&code("USA")).unwrap().unwrap();
    assert_eq!(stored.name, "United States");
    assert_eq!(store.find_all().unwrap().len(), 1);
}

fn update_overwrites_fields_but_not_code(mut store: impl CountryStore) {
    store.insert(country("CHD", "Chad", Some(6.5), None)).unwrap();
    store
        .update(country("CHD", "Republic of Chad", None, Some(22.3)))
        .unwrap();

    let stored = store.find_by_code(&code("CHD")).unwrap().unwrap();
    assert_eq!(stored, country("CHD", "Republic of Chad", None, Some(22.3)));
}

fn update_and_delete_missing_report_not_found(mut store: impl CountryStore) {
    store.insert(country("USA", "United States", None, None)).unwrap();

    let err = store.update(country("ZZZ", "Nowhere", None, None)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(c) if c == code("ZZZ")));
    let err = store.delete(&code("ZZZ")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    assert_eq!(
        store.find_all().unwrap(),
        vec![country("USA", "United States", None, None)]
    );
}

fn delete_removes_only_that_record(mut store: impl CountryStore) {
    store.insert(country("USA", "United States", None, None)).unwrap();
    store.insert(country("CHD", "Chad", None, None)).unwrap();
    store.delete(&code("USA")).unwrap();

    assert!(store.find_by_code(&code("USA")).unwrap().is_none());
    assert_eq!(store.find_all().unwrap(), vec![country("CHD", "Chad", None, None)]);
}

#[test]
fn memory_store_contract() {
    insert_then_find_all_keeps_insertion_order(MemoryCountryStore::new());
    duplicate_insert_is_rejected(MemoryCountryStore::new());
    update_overwrites_fields_but_not_code(MemoryCountryStore::new());
    update_and_delete_missing_report_not_found(MemoryCountryStore::new());
    delete_removes_only_that_record(MemoryCountryStore::new());
}

#[test]
fn sqlite_store_contract() {
    let open = || SqliteCountryStore::open_in_memory().expect("open sqlite");
    insert_then_find_all_keeps_insertion_order(open());
    duplicate_insert_is_rejected(open());
    update_overwrites_fields_but_not_code(open());
    update_and_delete_missing_report_not_found(open());
    delete_removes_only_that_record(open());
}

fn lookups_ignore_code_case(mut store: impl CountryStore) {
    store.insert(country("usa", "United States", None, None)).unwrap();
    let err = store.insert(country("USA", "Again", None, None)).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(_)));

    let stored = store.find_by_code(&code(" Usa ")).unwrap().unwrap();
    assert_eq!(stored.code.as_str(), "USA");
    store.delete(&code("uSA")).unwrap();
    assert!(store.find_all().unwrap().is_empty());
}

#[test]
fn code_case_is_normalized_in_both_stores() {
    lookups_ignore_code_case(MemoryCountryStore::new());
    lookups_ignore_code_case(SqliteCountryStore::open_in_memory().expect("open sqlite"));
}

#[test]
fn memory_store_mutations_track_length() {
    let mut store = MemoryCountryStore::new();
    assert!(store.is_empty());
    store.insert(country("USA", "United States", None, None)).unwrap();
    store.update(country("USA", "USA", Some(90.0), None)).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.delete(&code("XXX")).is_err());
    store.delete(&code("USA")).unwrap();
    assert!(store.is_empty());
}
