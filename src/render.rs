//! Rendering catalogs into per-engine links.

use tracing::debug;

use crate::{
    resolve_target, Catalog, EngineLink, EngineRegistry, RenderedDork, RenderedPattern, Result,
};

/// Renders every pattern of an already-targeted catalog.
///
/// `engines` selects the engines by shortcut or alias, in output order; an
/// empty selection renders for every enabled engine. Engine resolution
/// happens before any output is produced, so an unknown engine fails the
/// whole render.
pub fn render(
    catalog: &Catalog,
    registry: &EngineRegistry,
    engines: &[String],
) -> Result<Vec<RenderedDork>> {
    let selected = registry.select(engines)?;
    debug!(
        "Rendering {} templates for {} engines",
        catalog.len(),
        selected.len()
    );

    let dorks = catalog
        .templates()
        .iter()
        .map(|template| RenderedDork {
            title: template.title.clone(),
            patterns: template
                .patterns()
                .iter()
                .map(|pattern| RenderedPattern {
                    pattern: pattern.clone(),
                    links: selected
                        .iter()
                        .map(|engine| EngineLink {
                            engine: engine.shortcut().to_string(),
                            query: engine.translate(pattern),
                            url: engine.search_url(pattern),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Ok(dorks)
}

/// Substitutes the target into the catalog and renders it.
///
/// Blank input falls back to the placeholder domain.
pub fn render_for_target(
    catalog: &Catalog,
    registry: &EngineRegistry,
    engines: &[String],
    input: &str,
) -> Result<Vec<RenderedDork>> {
    let target = resolve_target(input);
    debug!("Rendering catalog for target {}", target);
    render(&catalog.with_target(target), registry, engines)
}
