use dns_select_application::selectors::SelectorRegistry;
use dns_select_application::services::{GeoMetadataProvider, ProtocolMetadataProvider};
use dns_select_application::use_cases::SelectAnswersUseCase;
use dns_select_domain::Config;
use dns_select_infrastructure::geo::StaticGeoDatabase;
use std::sync::Arc;
use tracing::info;

/// Everything a selection needs, wired from the configuration.
pub struct SelectionServices {
    pub registry: Arc<SelectorRegistry>,
    pub geo: Arc<StaticGeoDatabase>,
    pub use_case: SelectAnswersUseCase,
}

impl SelectionServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(SelectorRegistry::from_records(&config.select.records));
        let geo = Arc::new(StaticGeoDatabase::new(&config.geoip.networks)?);

        let mut use_case = SelectAnswersUseCase::new(Arc::clone(&registry))
            .with_provider(Arc::new(ProtocolMetadataProvider::new()));

        if config.geoip.is_enabled() {
            use_case = use_case.with_provider(Arc::new(GeoMetadataProvider::new(geo.clone())));
        } else {
            info!("No GeoIP networks configured, geoip/* metadata disabled");
        }

        Ok(Self {
            registry,
            geo,
            use_case,
        })
    }
}
