//! Parsing of both filter encodings and the error contract for bad input.

use filterkit::errors::FilterError;
use filterkit::filter::{PlantFilter, PostFilter};
use filterkit::models::FilterDescriptor;
use filterkit::parse::{
    parse_plant_descriptors, parse_plant_query, parse_post_descriptors, parse_post_query,
    plant_parsers, post_parsers,
};
use filterkit::translate::{plant_translators, post_translators};
use serde_json::json;
use uuid::Uuid;

fn descriptor(kind: &str, params: serde_json::Value) -> FilterDescriptor {
    serde_json::from_value(json!({"type": kind, "params": params}))
        .expect("descriptor fixture must deserialize")
}

fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

#[test]
fn query_string_ranges_split_on_dash() {
    let search = parse_plant_query(&[pair("height", "5-10")]).unwrap();
    assert_eq!(
        search.iter().next(),
        Some(&PlantFilter::Height { min: 5.0, max: 10.0 })
    );

    let search = parse_plant_query(&[pair("soil_acidity", "5-7")]).unwrap();
    assert_eq!(
        search.iter().next(),
        Some(&PlantFilter::SoilAcidity { min: 5, max: 7 })
    );
}

#[test]
fn query_string_lists_split_on_comma_and_trim() {
    let search = parse_plant_query(&[pair("soil_moisture", "medium, high ,low")]).unwrap();
    assert_eq!(
        search.iter().next(),
        Some(&PlantFilter::SoilMoisture {
            moistures: vec!["medium".to_string(), "high".to_string(), "low".to_string()]
        })
    );
}

#[test]
fn both_encodings_yield_equal_operands() {
    let from_query = parse_plant_query(&[
        pair("height", "5-10"),
        pair("flowering_period", "spring,summer"),
        pair("name", "English Oak"),
    ])
    .unwrap();

    let from_body = parse_plant_descriptors(&[
        descriptor("height", json!({"min": 5.0, "max": 10.0})),
        descriptor("flowering_period", json!({"flowering_periods": ["spring", "summer"]})),
        descriptor("name", json!({"name": "English Oak"})),
    ])
    .unwrap();

    let query_filters: Vec<_> = from_query.iter().collect();
    let body_filters: Vec<_> = from_body.iter().collect();
    assert_eq!(query_filters, body_filters);
}

#[test]
fn post_filters_parse_from_both_encodings() {
    let author = Uuid::from_u128(0xB2);

    let from_query = parse_post_query(&[
        pair("title_contains", "tomato"),
        pair("tags", "gardening,cooking"),
        pair("author", &author.to_string()),
    ])
    .unwrap();

    let from_body = parse_post_descriptors(&[
        descriptor("title_contains", json!({"part": "tomato"})),
        descriptor("tags", json!({"tags": ["gardening", "cooking"]})),
        descriptor("author", json!({"author_id": author.to_string()})),
    ])
    .unwrap();

    let expected = vec![
        PostFilter::TitleContains { part: "tomato".to_string() },
        PostFilter::Tags { tags: vec!["gardening".to_string(), "cooking".to_string()] },
        PostFilter::Author { author_id: author },
    ];
    assert_eq!(from_query.iter().cloned().collect::<Vec<_>>(), expected);
    assert_eq!(from_body.iter().cloned().collect::<Vec<_>>(), expected);
}

#[test]
fn album_parses_with_an_unresolved_member_list() {
    let album_id = Uuid::from_u128(0xA88);
    let search = parse_plant_query(&[pair("album", &album_id.to_string())]).unwrap();

    assert_eq!(
        search.iter().next(),
        Some(&PlantFilter::Album { album_id, plant_ids: None })
    );
}

#[test]
fn unknown_filter_type_is_distinct_from_malformed() {
    let err = parse_plant_query(&[pair("bogus", "1-2")]).unwrap_err();
    assert!(matches!(
        err,
        FilterError::UnknownFilterType { identifier } if identifier == "bogus"
    ));

    let err = parse_plant_query(&[pair("height", "not-a-range-at-all")]).unwrap_err();
    assert!(matches!(err, FilterError::MalformedValue { filter: "height", .. }));
}

#[test]
fn malformed_range_arity_is_rejected() {
    for bad in ["5", "5-10-15", ""] {
        let err = parse_plant_query(&[pair("height", bad)]).unwrap_err();
        assert!(
            matches!(err, FilterError::MalformedValue { .. }),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn malformed_numbers_and_uuids_are_rejected() {
    let err = parse_plant_query(&[pair("soil_acidity", "low-high")]).unwrap_err();
    assert!(matches!(err, FilterError::MalformedValue { filter: "soil_acidity", .. }));

    let err = parse_plant_query(&[pair("album", "not-a-uuid")]).unwrap_err();
    assert!(matches!(err, FilterError::MalformedValue { filter: "album", .. }));

    let err = parse_plant_query(&[pair("ids", "not-a-uuid,also-bad")]).unwrap_err();
    assert!(matches!(err, FilterError::MalformedValue { filter: "ids", .. }));
}

#[test]
fn body_params_missing_keys_are_rejected() {
    let err = parse_plant_descriptors(&[descriptor("height", json!({"min": 5.0}))]).unwrap_err();
    assert!(matches!(err, FilterError::MalformedValue { filter: "height", .. }));

    let err =
        parse_post_descriptors(&[descriptor("tags", json!({"tags": "gardening"}))]).unwrap_err();
    assert!(matches!(err, FilterError::MalformedValue { filter: "tags", .. }));
}

#[test]
fn repeated_query_keys_accumulate_filters() {
    let search = parse_plant_query(&[
        pair("soil_moisture", "low"),
        pair("soil_moisture", "medium,high"),
    ])
    .unwrap();

    assert_eq!(search.len(), 2);
}

#[test]
fn parser_and_translator_registries_cover_the_same_kinds() {
    let mut plant_parse: Vec<_> = plant_parsers().identifiers().collect();
    let mut plant_translate: Vec<_> = plant_translators().identifiers().collect();
    plant_parse.sort_unstable();
    plant_translate.sort_unstable();
    assert_eq!(plant_parse.len(), 14);
    assert_eq!(plant_parse, plant_translate);

    let mut post_parse: Vec<_> = post_parsers().identifiers().collect();
    let mut post_translate: Vec<_> = post_translators().identifiers().collect();
    post_parse.sort_unstable();
    post_translate.sort_unstable();
    assert_eq!(post_parse.len(), 4);
    assert_eq!(post_parse, post_translate);
}
