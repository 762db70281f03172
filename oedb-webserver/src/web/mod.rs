use std::time::Duration;

use rocket::{config::Config as RocketCfg, Rocket, Route};

use oedb_core::gateways::{media::MediaGateway, translate::TranslationGateway};

pub mod api;
mod guards;
pub(crate) mod sqlite;

#[cfg(test)]
pub mod tests;

/// Runtime options of the web layer.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Files younger than this are never touched by the orphan sweep.
    pub media_sweep_min_age: Duration,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    media: Box<dyn MediaGateway + Send + Sync>,
    translations: Box<dyn TranslationGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways {
        media,
        translations,
    } = gateways;

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(rocket_cfg) => rocket::custom(rocket_cfg),
        None => rocket::build(),
    };

    let media = guards::Media(media);
    let translations = guards::Translations(translations);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(media)
        .manage(translations)
        .manage(cfg)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    media: Box<dyn MediaGateway + Send + Sync>,
    translations: Box<dyn TranslationGateway + Send + Sync>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways {
        media,
        translations,
    };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
