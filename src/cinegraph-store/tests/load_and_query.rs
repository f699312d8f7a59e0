//! End-to-end: load a JSON catalog document and answer questions over it.

use cinegraph_query::CatalogRepository;
use cinegraph_store::Loader;

const DOCUMENT: &str = r#"{
    "actors": [
        {"id": "nm0000093", "name": "Brad Pitt", "birth_date": "1963-12-18",
         "url": "https://www.imdb.com/name/nm0000093/"},
        {"id": "nm0001837", "name": "Marion Cotillard", "birth_date": "1975-09-30"},
        {"id": "nm0241121", "name": "Jean Dujardin", "birth_date": "1972-06-19"}
    ],
    "directors": [
        {"id": "nm0000399", "name": "David Fincher"},
        {"id": "nm0371890", "name": "Michel Hazanavicius"}
    ],
    "countries": [
        {"id": "fr", "name": "France"},
        {"id": "us", "name": "United States"}
    ],
    "films": [
        {"id": "tt0137523", "title": "Fight Club", "year": 1999,
         "countries": ["us"], "directors": ["nm0000399"]},
        {"id": "tt1655442", "title": "The Artist", "year": 2011,
         "countries": ["fr"], "directors": ["nm0371890"]}
    ],
    "roles": [
        {"character": "Tyler Durden", "actor": "nm0000093", "film": "tt0137523"},
        {"character": "George Valentin", "actor": "nm0241121", "film": "tt1655442"},
        {"character": "Peppy Miller", "actor": "nm0001837", "film": "tt1655442"}
    ]
}"#;

#[test]
fn test_load_then_query() {
    let catalog = Loader::new().from_str(DOCUMENT).unwrap();
    let repository = CatalogRepository::new(&catalog);

    let all = repository.actors_sorted_by_name().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Brad Pitt");

    let french = repository.actors_by_country("France").unwrap();
    assert_eq!(french.len(), 2);

    let directors = repository.directors_by_actor("Jean Dujardin").unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].name, "Michel Hazanavicius");

    let born_1963 = repository.actors_by_birth_year(1963).unwrap();
    assert_eq!(born_1963.len(), 1);
    assert_eq!(
        born_1963[0].url.as_deref(),
        Some("https://www.imdb.com/name/nm0000093/")
    );
}
