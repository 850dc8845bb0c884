//! Basic usage example for gate-render

use gate_render::{GateConfig, Page, Pipeline, logging};

fn main() -> gate_render::Result<()> {
    let _ = logging::init();

    let source = r#"---
title: Upgrade
kong_version: "3.2.x"
---
Upgrade steps:
{% if_version lte:2.8.x %}
1. Run `migrations up`.
{% endif_version %}
{% if_version gte:3.0.x %}
1. Run `migrations up --force`.
{% endif_version %}

Available since {% if_version gte:3.2 inline %}3.2{% endif_version %}.
"#;

    let config = GateConfig::from_toml_str(
        r#"
[page]
version_field = "kong_version"
"#,
    )?;

    let page = Page::parse("upgrade.md", source)?;
    println!("Version: {:?}", page.field("kong_version"));

    let pipeline = Pipeline::new(config)?;
    let rendered = pipeline.render_page(&page)?;
    println!("--- rendered ---\n{}", rendered.content);

    for failure in &rendered.failures {
        println!("skipped {}:{}: {}", failure.document, failure.line, failure.message);
    }

    Ok(())
}
