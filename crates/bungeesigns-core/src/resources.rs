//! Default documents compiled into the crate

use crate::traits::{DocumentKind, ResourceProvider};

const DEFAULT_SETTINGS: &str = include_str!("../resources/config.yml");
const DEFAULT_LAYOUTS: &str = include_str!("../resources/layout.yml");
const DEFAULT_SIGNS: &str = include_str!("../resources/signs.yml");

/// The bundled `config.yml`, `layout.yml` and `signs.yml` templates
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledResources;

impl ResourceProvider for BundledResources {
    fn default_document(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Settings => DEFAULT_SETTINGS,
            DocumentKind::Layouts => DEFAULT_LAYOUTS,
            DocumentKind::Signs => DEFAULT_SIGNS,
        }
    }
}
