use clap::Parser;
use mediahub_core::ErrorKind;
use mediahub_core::service::Movies;
use mediahub_model::{Domain, SortBy, SortOrder};
use mediahubctl::cli::Cli;
use mediahubctl::config::ConfigLoader;
use mediahubctl::{BootstrapError, bootstrap, commands};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DATASET: &str = r#"{
  "movies": [
    { "id": "m1", "title": "Heat", "year": 1995, "rating": 8.3,
      "genres": ["Action", "Drama"], "categories": ["Favourites"] },
    { "id": "m2", "title": "Alien", "year": 1979, "rating": 8.5,
      "genres": ["Horror"] },
    { "id": "m3", "title": "Zodiac", "year": 2007,
      "genres": ["Drama"], "summary": "San Francisco, 1969." }
  ],
  "pictures": [
    { "id": "p1", "title": "Harbour", "categories": ["Holidays"] }
  ]
}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("catalog.json"), DATASET).unwrap();
        let database = dir.path().join("catalog.db");
        let config = config
            .replace("{database}", &database.display().to_string());
        fs::write(dir.path().join("mediahub.toml"), config).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn args(&self, rest: &[&str]) -> Vec<String> {
        let mut args = vec![
            "mediahubctl".to_string(),
            "--config".to_string(),
            self.path("mediahub.toml").display().to_string(),
            "--env-file".to_string(),
            self.path("missing.env").display().to_string(),
        ];
        args.extend(rest.iter().map(|arg| arg.to_string()));
        args
    }

    async fn run(&self, rest: &[&str]) -> anyhow::Result<Value> {
        let cli = Cli::try_parse_from(self.args(rest))?;
        commands::run(cli).await
    }
}

fn load(path: &Path) -> mediahubctl::Settings {
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_file(path.with_extension("env"))
        .load()
        .unwrap()
        .settings
}

const FIXTURE_CONFIG: &str = r#"
[[providers]]
name = "fixtures"
domains = ["movie", "picture"]
backend = "fixture"
path = "catalog.json"

[[providers]]
name = "shadowed"
domains = ["movie"]
backend = "fixture"
path = "catalog.json"
"#;

#[tokio::test]
async fn fixture_provider_serves_its_domains() {
    let workspace = Workspace::new(FIXTURE_CONFIG);
    let settings = load(&workspace.path("mediahub.toml"));
    let service = bootstrap::build_service(&settings).await.unwrap();

    let movies = service
        .list::<Movies>(SortBy::Year, SortOrder::Ascending)
        .await
        .unwrap();
    let ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["m2", "m1", "m3"]);

    let description = service.service_description();
    assert_eq!(
        description.available_providers[&Domain::Movie],
        ["fixtures", "shadowed"]
    );
    assert_eq!(description.active_providers[&Domain::Picture], "fixtures");

    let err = service.genres(Domain::Music).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoProviderAvailable);
}

#[tokio::test]
async fn cli_commands_render_json() {
    let workspace = Workspace::new(FIXTURE_CONFIG);

    let listed = workspace
        .run(&[
            "list", "--kind", "movie", "--genre", "Drama", "--sort", "title",
            "--order", "desc",
        ])
        .await
        .unwrap();
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|movie| movie["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Zodiac", "Heat"]);

    let page = workspace
        .run(&["list", "--kind", "movie", "--start", "1", "--end", "2"])
        .await
        .unwrap();
    assert_eq!(page.as_array().unwrap().len(), 1);
    assert_eq!(page[0]["title"], "Heat");

    let count = workspace
        .run(&["count", "--kind", "movie", "--category", "Favourites"])
        .await
        .unwrap();
    assert_eq!(count, json!({ "kind": "movie", "count": 1 }));

    let item = workspace.run(&["get", "movie", "m3"]).await.unwrap();
    assert_eq!(item["type"], "movie");
    assert_eq!(item["summary"], "San Francisco, 1969.");

    let genres = workspace.run(&["genres", "movie"]).await.unwrap();
    assert_eq!(
        genres,
        json!([{ "name": "Action" }, { "name": "Drama" }, { "name": "Horror" }])
    );

    let err = workspace
        .run(&["list", "--kind", "picture", "--sort", "rating"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("pictures"), "{err:#}");
}

#[tokio::test]
async fn import_populates_a_sqlite_provider() {
    let workspace = Workspace::new(
        r#"
[[providers]]
name = "library-db"
domains = ["movie", "picture"]
backend = "sqlite"
database_url = "sqlite://{database}"
"#,
    );
    let dataset = workspace.path("catalog.json").display().to_string();

    let imported = workspace
        .run(&["import", "--provider", "library-db", dataset.as_str()])
        .await
        .unwrap();
    assert_eq!(imported, json!({ "provider": "library-db", "imported": 4 }));

    let listed = workspace
        .run(&[
            "list", "--kind", "movie", "--sort", "rating", "--order", "desc",
        ])
        .await
        .unwrap();
    let ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|movie| movie["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["m2", "m1", "m3"]);

    let in_memory = workspace
        .run(&[
            "--in-memory", "list", "--kind", "movie", "--sort", "rating",
            "--order", "desc",
        ])
        .await
        .unwrap();
    assert_eq!(listed, in_memory);

    let categories = workspace.run(&["categories", "picture"]).await.unwrap();
    assert_eq!(
        categories,
        json!([{ "id": "Holidays", "title": "Holidays" }])
    );
}

#[tokio::test]
async fn import_requires_a_sqlite_provider() {
    let workspace = Workspace::new(FIXTURE_CONFIG);
    let settings = load(&workspace.path("mediahub.toml"));

    let err = bootstrap::open_sqlite_provider(&settings, "fixtures")
        .await
        .unwrap_err();
    assert!(matches!(err, BootstrapError::NotSqlite { .. }));

    let err = bootstrap::open_sqlite_provider(&settings, "elsewhere")
        .await
        .unwrap_err();
    assert!(matches!(err, BootstrapError::UnknownProvider(_)));
}

#[tokio::test]
async fn unreadable_fixture_fails_bootstrap() {
    let workspace = Workspace::new(
        r#"
[[providers]]
name = "broken"
domains = ["music"]
backend = "fixture"
path = "does-not-exist.json"
"#,
    );
    let settings = load(&workspace.path("mediahub.toml"));
    let err = bootstrap::build_registry(&settings).await.unwrap_err();
    assert!(matches!(err, BootstrapError::DatasetIo { .. }));
}
