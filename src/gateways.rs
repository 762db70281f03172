use anyhow::Result;

use oedb_core::gateways::{media::MediaGateway, translate::TranslationGateway};
use oedb_gateways::{FsMediaStorage, NoTranslations, StaticTranslations};

use crate::config;

pub fn media_gateway_from_config(
    cfg: &config::Media,
) -> Result<Box<dyn MediaGateway + Send + Sync>> {
    let storage = FsMediaStorage::new(&cfg.dir, &cfg.base_url)?;
    log::info!(
        "Storing uploaded media below {} (served under {})",
        storage.root().display(),
        cfg.base_url
    );
    Ok(Box::new(storage))
}

pub fn translation_gateway_from_config(
    cfg: &config::Translations,
) -> Result<Box<dyn TranslationGateway + Send + Sync>> {
    let Some(file) = &cfg.file else {
        log::info!("No translation catalog configured, terms keep their canonical spelling");
        return Ok(Box::new(NoTranslations));
    };
    let catalog = StaticTranslations::from_file(file)?;
    if catalog.is_empty() {
        log::warn!("Translation catalog {} contains no terms", file.display());
    } else {
        log::info!(
            "Loaded {} translated term(s) from {}",
            catalog.len(),
            file.display()
        );
    }
    Ok(Box::new(catalog))
}
