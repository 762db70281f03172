//! JSON API of openeatdb, served by Rocket.

#[macro_use]
extern crate log;

use oedb_core::gateways::{media::MediaGateway, translate::TranslationGateway};
use oedb_db_sqlite::Connections;

mod web;

pub use web::Cfg;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    media_gw: Box<dyn MediaGateway + Send + Sync>,
    translation_gw: Box<dyn TranslationGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(
        connections.into(),
        enable_cors,
        cfg,
        media_gw,
        translation_gw,
        version,
    )
    .await;
}
