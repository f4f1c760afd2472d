use chrono::NaiveDate;
use serde_json::Value;
use storage::{
    Database, LeagueSettings,
    repository::{
        jornada::JornadaRepository,
        matches::{MatchRepository, StoredResult},
        team::TeamRepository,
    },
    services::fixtures::generate_fixtures,
};
use tempfile::TempDir;

use super::*;

/// Three teams over a past jornada and a far-future one, with the first
/// match of the past jornada played.
async fn seeded() -> Database {
    let db = Database::new("sqlite::memory:").await.unwrap();
    db.run_migrations().await.unwrap();

    let teams = TeamRepository::new(db.pool());
    for (name, username) in [("Rayo", "rayo"), ("Trueno", "trueno"), ("Ciclón", "ciclon")] {
        teams.create(name, username, "hash").await.unwrap();
    }

    let dates: Vec<NaiveDate> = ["2025-02-07", "2099-02-14"]
        .iter()
        .map(|d| d.parse().unwrap())
        .collect();
    JornadaRepository::new(db.pool())
        .replace_all(&dates)
        .await
        .unwrap();
    generate_fixtures(db.pool(), &LeagueSettings::default(), false)
        .await
        .unwrap();

    let matches = MatchRepository::new(db.pool());
    let first = matches.list_all().await.unwrap()[0].id;
    matches
        .record_result(
            first,
            &StoredResult::Scored {
                home_score: 3,
                away_score: 1,
                winner_one_player: false,
            },
            None,
            "2025-02-07T23:30:00+01:00",
        )
        .await
        .unwrap();

    db
}

fn read_json(dir: &std::path::Path, filename: &str) -> Value {
    let contents = std::fs::read_to_string(dir.join(filename)).unwrap();
    assert!(contents.ends_with("]\n"), "{filename} must end with a newline");
    serde_json::from_str(&contents).unwrap()
}

#[tokio::test]
async fn test_export_writes_all_files() {
    let db = seeded().await;
    let out = TempDir::new().unwrap();
    let target = out.path().join("data");

    let files = export(db.pool(), &LeagueSettings::default(), &target)
        .await
        .unwrap();

    let names: Vec<String> = files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "standings.json",
            "upcoming.json",
            "recent.json",
            "jornadas.json",
            "matches.json"
        ]
    );
    assert_eq!(files[0].records, 3);
    assert_eq!(files[3].records, 2);
    assert_eq!(files[4].records, 2);
}

#[tokio::test]
async fn test_standings_file_hides_team_ids() {
    let db = seeded().await;
    let out = TempDir::new().unwrap();
    export(db.pool(), &LeagueSettings::default(), out.path())
        .await
        .unwrap();

    let standings = read_json(out.path(), "standings.json");
    let leader = &standings[0];

    assert!(leader.get("team_id").is_none());
    assert_eq!(leader["pos"], 1);
    assert_eq!(leader["points"], 3);
    assert_eq!(leader["gd"], 2);
}

#[tokio::test]
async fn test_upcoming_and_recent_files() {
    let db = seeded().await;
    let out = TempDir::new().unwrap();
    export(db.pool(), &LeagueSettings::default(), out.path())
        .await
        .unwrap();

    let upcoming = read_json(out.path(), "upcoming.json");
    assert_eq!(upcoming.as_array().unwrap().len(), 1);
    assert_eq!(upcoming[0]["date"], "2099-02-14");
    assert!(upcoming[0].get("status").is_none());

    let recent = read_json(out.path(), "recent.json");
    assert_eq!(recent.as_array().unwrap().len(), 1);
    assert_eq!(recent[0]["status"], "completed");
    assert_eq!(recent[0]["home_score"], 3);
    assert_eq!(recent[0]["winner_one_player"], false);
}

#[tokio::test]
async fn test_jornadas_file_nests_matches() {
    let db = seeded().await;
    let out = TempDir::new().unwrap();
    export(db.pool(), &LeagueSettings::default(), out.path())
        .await
        .unwrap();

    let jornadas = read_json(out.path(), "jornadas.json");
    assert_eq!(jornadas[0]["jornada"]["number"], 1);
    assert_eq!(jornadas[0]["jornada"]["date"], "2025-02-07");
    assert_eq!(jornadas[0]["matches"].as_array().unwrap().len(), 1);
    assert!(jornadas[0]["matches"][0].get("winner_one_player").is_none());

    let matches = read_json(out.path(), "matches.json");
    assert_eq!(matches[0]["jornada_number"], 1);
    assert_eq!(matches[1]["jornada_number"], 2);
}

#[tokio::test]
async fn test_names_are_written_as_utf8() {
    let db = seeded().await;
    let out = TempDir::new().unwrap();
    export(db.pool(), &LeagueSettings::default(), out.path())
        .await
        .unwrap();

    let raw = std::fs::read_to_string(out.path().join("matches.json")).unwrap();
    assert!(raw.contains("Ciclón"));
}

#[test]
fn test_write_json_pretty_prints() {
    let out = TempDir::new().unwrap();

    let file = writer::write_json(out.path(), "numbers.json", &[1, 2]).unwrap();

    assert_eq!(file.records, 2);
    assert_eq!(
        std::fs::read_to_string(file.path).unwrap(),
        "[\n  1,\n  2\n]\n"
    );
}
