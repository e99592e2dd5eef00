use anyhow::Context;

use worldgen_datagen::catalog::Catalog;
use worldgen_datagen::cli::CliArgs;
use worldgen_datagen::config::GenConfig;
use worldgen_datagen::document::ResourceTree;
use worldgen_datagen::generator::Generator;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = CliArgs::from_env_args()?;
    let config = GenConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    let out = cli.out.clone().unwrap_or_else(|| config.output.clone());
    log::info!(
        "namespace: {}, output: {}, dry run: {}",
        config.namespace,
        out.display(),
        cli.dry_run
    );

    let extra = config.extra_veins().context("invalid extra vein")?;
    let catalog = Catalog::builtin()
        .and_then(|c| c.with_veins(extra))
        .context("failed to build catalog")?;

    let mut tree = ResourceTree::new(&config.namespace);
    Generator::new(&catalog, &config)
        .generate(&mut tree)
        .context("generation failed")?;

    if cli.dry_run {
        log::info!("dry run, {} files not written", tree.len());
        return Ok(());
    }
    tree.flush(&out, config.pretty)?;
    Ok(())
}
