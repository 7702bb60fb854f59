use kinobaza::db::{
    add_actor, add_movie, fetch_actor, fetch_movie, find_or_create_actor, link_cast,
    movies_with_cast, paginated_titles, DEFAULT_PAGE_SIZE,
};
use kinobaza::{open_catalog, Config};
use tempfile::TempDir;

fn temp_config() -> (Config, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::with_db_path(temp_dir.path().join("data").join("kinobaza.sqlite"));
    (config, temp_dir)
}

#[test]
fn rows_survive_reopening_the_file() {
    let (config, _temp) = temp_config();

    let (movie_id, actor_id) = {
        let conn = open_catalog(&config.db_path).unwrap();
        let movie_id = add_movie(&conn, "Ivan's Childhood", 1962, "War").unwrap();
        let actor_id = find_or_create_actor(&conn, "Nikolai Burlyayev", || Ok(1946)).unwrap();
        link_cast(&conn, movie_id, actor_id).unwrap();
        (movie_id, actor_id)
    };

    let conn = open_catalog(&config.db_path).unwrap();
    let movie = fetch_movie(&conn, movie_id).unwrap().unwrap();
    assert_eq!(movie.title, "Ivan's Childhood");
    assert_eq!(movie.release_year, 1962);
    assert_eq!(movie.genre, "War");

    let again = find_or_create_actor(&conn, "Nikolai Burlyayev", || Ok(2000)).unwrap();
    assert_eq!(again, actor_id);
    assert_eq!(fetch_actor(&conn, actor_id).unwrap().unwrap().birth_year, 1946);

    let rows = movies_with_cast(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].actors, "Nikolai Burlyayev");
}

#[test]
fn partial_cast_entry_keeps_the_movie() {
    let (config, _temp) = temp_config();
    let conn = open_catalog(&config.db_path).unwrap();

    let movie_id = add_movie(&conn, "The Sacrifice", 1986, "Drama").unwrap();
    let actor_id = add_actor(&conn, "Erland Josephson", 1923).unwrap();
    link_cast(&conn, movie_id, actor_id).unwrap();
    assert!(link_cast(&conn, movie_id, actor_id).is_err());

    assert!(fetch_movie(&conn, movie_id).unwrap().is_some());
    assert_eq!(movies_with_cast(&conn).unwrap().len(), 1);
}

#[test]
fn pagination_over_a_small_catalog() {
    let (config, _temp) = temp_config();
    let conn = open_catalog(&config.db_path).unwrap();
    for n in 1..=5 {
        add_movie(&conn, &format!("Short {n}"), 2010 + n, "Animation").unwrap();
    }

    assert_eq!(paginated_titles(&conn, 1, DEFAULT_PAGE_SIZE).unwrap().len(), 5);
    assert!(paginated_titles(&conn, 2, DEFAULT_PAGE_SIZE).unwrap().is_empty());
    assert_eq!(
        paginated_titles(&conn, 2, 2).unwrap(),
        vec!["Short 3".to_string(), "Short 4".to_string()]
    );
}
