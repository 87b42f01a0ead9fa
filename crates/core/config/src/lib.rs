use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Encore.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Encore.toml").exists() {
            builder = builder.add_source(File::new("Encore.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hosts {
    pub app: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub port: u16,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiKey {
    pub api_key: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Apis {
    pub ticketmaster: ApiKey,
    pub openweather: ApiKey,
    pub youtube: ApiKey,
    pub spotify: SpotifyCredentials,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub hosts: Hosts,
    pub api: Api,
    pub apis: Apis,
}

pub async fn init() {
    println!(
        ":: Encore Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}
