// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Intent routing tests

use fabstir_net_search::search::{router::classify, CityGazetteer, Intent};

#[test]
fn test_known_cities_route_to_weather() {
    let gazetteer = CityGazetteer::builtin();

    let cases = [
        ("北京今天天气怎么样", "101010100"),
        ("明天上海会下雨吗", "101020100"),
        ("朝阳天气", "101010300"),
    ];
    for (query, code) in cases {
        assert_eq!(
            classify(query, &gazetteer),
            Intent::Weather(code.to_string()),
            "query: {}",
            query
        );
    }
}

#[test]
fn test_queries_without_city_route_to_general() {
    let gazetteer = CityGazetteer::builtin();

    for query in ["今天天气怎么样", "rust async runtime", "", "   "] {
        assert_eq!(
            classify(query, &gazetteer),
            Intent::General,
            "query: {:?}",
            query
        );
    }
}

#[test]
fn test_weather_code_always_comes_from_gazetteer() {
    let gazetteer = CityGazetteer::builtin();

    for query in ["北京天气", "广州下雨吗", "weather in 深圳", "hello world"] {
        match classify(query, &gazetteer) {
            Intent::Weather(code) => {
                let (_, expected) = gazetteer.find(query).unwrap();
                assert_eq!(code, expected);
            }
            Intent::General => assert!(gazetteer.find(query).is_none()),
        }
    }
}

#[test]
fn test_custom_gazetteer() {
    let gazetteer = CityGazetteer::from_entries(vec![("测试城", "999")]);
    assert_eq!(
        classify("测试城天气", &gazetteer),
        Intent::Weather("999".to_string())
    );
    assert_eq!(classify("北京天气", &gazetteer), Intent::General);
}
