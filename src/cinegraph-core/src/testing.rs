//! Testing fixtures for the catalog graph.
//!
//! Provides a small but representative movie catalog shared by the unit
//! and integration tests across the workspace: fan-out joins (one actor
//! in several films by the same director), co-directed films, films with
//! several countries of origin, a film with no countries, a film with no
//! directors, actors with no roles, and a country with no films.

use chrono::NaiveDate;

use crate::catalog::{Actor, Catalog, CatalogBuilder, Country, Director, Film, Role};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Build the shared movie catalog fixture.
///
/// Shape summary (counts the tests rely on):
/// - 11 actors, two of them sharing the display name "Aaron Ash" with no
///   birth date; "Emma Stone" and the "Aaron Ash" pair hold no roles
/// - 9 films, including one with zero countries ("Se7en"), one with zero
///   directors ("Home Movie") and one co-directed ("Blade Runner 2049")
/// - 3 countries, one of them ("Japan") associated with no film
/// - 5 directors
pub fn movie_catalog() -> Catalog {
    let mut builder = CatalogBuilder::new();

    builder.add_country(Country::new("fr", "France"));
    builder.add_country(Country::new("us", "United States"));
    builder.add_country(Country::new("jp", "Japan"));

    builder.add_director(Director::new("nm0000631", "Ridley Scott"));
    builder.add_director(Director::new("nm0898288", "Denis Villeneuve"));
    builder.add_director(Director::new("nm0371890", "Michel Hazanavicius"));
    builder.add_director(Director::new("nm0000399", "David Fincher"));
    builder.add_director(Director::new("nm0043742", "David Ayer"));

    builder.add_actor(
        Actor::new("nm0000093", "Brad Pitt")
            .with_birth_date(date(1963, 12, 18))
            .with_url("https://www.imdb.com/name/nm0000093/"),
    );
    builder.add_actor(
        Actor::new("nm0001837", "Marion Cotillard").with_birth_date(date(1975, 9, 30)),
    );
    builder.add_actor(
        Actor::new("nm3053338", "Margot Robbie").with_birth_date(date(1990, 7, 2)),
    );
    builder.add_actor(Actor::new("nm0000354", "Matt Damon").with_birth_date(date(1970, 10, 8)));
    builder.add_actor(
        Actor::new("nm0331516", "Ryan Gosling").with_birth_date(date(1980, 11, 12)),
    );
    builder.add_actor(Actor::new("nm1297015", "Emma Stone").with_birth_date(date(1988, 11, 6)));
    builder.add_actor(
        Actor::new("nm0241121", "Jean Dujardin").with_birth_date(date(1972, 6, 19)),
    );
    builder.add_actor(
        Actor::new("nm0000288", "Christian Bale").with_birth_date(date(1974, 1, 30)),
    );
    builder.add_actor(
        Actor::new("nm0000151", "Morgan Freeman").with_birth_date(date(1937, 6, 1)),
    );
    // Name collision pair for the sort tie-break; no birth dates on purpose.
    builder.add_actor(Actor::new("nm9000001", "Aaron Ash"));
    builder.add_actor(Actor::new("nm9000002", "Aaron Ash"));

    builder.add_film(
        Film::new("tt3659388", "The Martian", 2015)
            .with_country("us")
            .with_director("nm0000631"),
    );
    builder.add_film(
        Film::new("tt5294550", "All the Money in the World", 2017)
            .with_country("us")
            .with_director("nm0000631"),
    );
    builder.add_film(
        Film::new("tt1655442", "The Artist", 2011)
            .with_country("fr")
            .with_director("nm0371890"),
    );
    builder.add_film(
        Film::new("tt5687334", "Le Redoutable", 2017)
            .with_country("fr")
            .with_director("nm0371890"),
    );
    builder.add_film(
        Film::new("tt1856101", "Blade Runner 2049", 2017)
            .with_country("us")
            .with_director("nm0898288")
            .with_director("nm0000631"),
    );
    builder.add_film(
        Film::new("tt1386697", "Suicide Squad", 2016)
            .with_country("us")
            .with_director("nm0043742"),
    );
    builder.add_film(
        Film::new("tt0137523", "Fight Club", 1999)
            .with_country("us")
            .with_country("fr")
            .with_director("nm0000399"),
    );
    // No country of origin recorded.
    builder.add_film(Film::new("tt0114369", "Se7en", 1995).with_director("nm0000399"));
    // No director recorded.
    builder.add_film(Film::new("tt9000001", "Home Movie", 2020).with_country("us"));

    builder.add_role(Role::new("Mark Watney", "nm0000354", "tt3659388"));
    builder.add_role(Role::new("J. Paul Getty", "nm0000093", "tt5294550"));
    builder.add_role(Role::new("George Valentin", "nm0241121", "tt1655442"));
    builder.add_role(Role::new("Peppy Miller", "nm0001837", "tt1655442"));
    builder.add_role(Role::new("Jean-Luc Godard", "nm0241121", "tt5687334"));
    builder.add_role(Role::new("Anne Wiazemsky", "nm0001837", "tt5687334"));
    builder.add_role(Role::new("Officer K", "nm0331516", "tt1856101"));
    builder.add_role(Role::new("Harley Quinn", "nm3053338", "tt1386697"));
    builder.add_role(Role::new("Tyler Durden", "nm0000093", "tt0137523"));
    builder.add_role(Role::new("David Mills", "nm0000093", "tt0114369"));
    builder.add_role(Role::new("William Somerset", "nm0000151", "tt0114369"));
    builder.add_role(Role::new("Narrator", "nm0000288", "tt9000001"));

    builder
        .build()
        .unwrap_or_else(|e| panic!("fixture catalog must build: {e}"))
}

/// Build an empty catalog.
pub fn empty_catalog() -> Catalog {
    CatalogBuilder::new()
        .build()
        .unwrap_or_else(|e| panic!("empty catalog must build: {e}"))
}
