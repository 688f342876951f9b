use super::render;
use super::setup::{build_command, Cli, Commands, CompletionShell, ListArgs};
use anyhow::{Context, Result};
use clap_complete::{generate, Shell};
use discoverapp::api::DiscoverApi;
use discoverapp::catalog::{sample_catalog, CatalogSource, InMemoryCatalog};
use discoverapp::config::{ConfigPaths, DiscoverConfig};
use discoverapp::context::ContextResolver;
use discoverapp::model::Domain;
use discoverapp::taxonomy::TagTaxonomy;
use std::io;

pub struct AppContext {
    pub config: DiscoverConfig,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot read the working directory")?;
        let config = DiscoverConfig::load(&ConfigPaths::discover(&cwd))?;
        Ok(Self { config })
    }

    fn default_domain(&self) -> Result<Domain> {
        Ok(self.config.domain()?)
    }
}

pub fn dispatch(cli: Cli, ctx: &AppContext) -> Result<()> {
    match cli.command {
        None => list(ctx, &ListArgs::default()),
        Some(Commands::List(args)) => list(ctx, &args),
        Some(Commands::Tags { domain }) => {
            let domains = match domain {
                Some(d) => vec![d],
                None => Domain::ALL.to_vec(),
            };
            print!("{}", render::tag_tree(TagTaxonomy::builtin(), &domains));
            Ok(())
        }
        Some(Commands::Subfilters { domain }) => {
            let domain = domain.map_or_else(|| ctx.default_domain(), Ok)?;
            print!("{}", render::subfilter_list(&ContextResolver::builtin(), domain));
            Ok(())
        }
        Some(Commands::Attributes { domain }) => {
            let domain = domain.map_or_else(|| ctx.default_domain(), Ok)?;
            print!("{}", render::attribute_list(&ContextResolver::builtin(), domain));
            Ok(())
        }
        Some(Commands::Config) => show_config(&ctx.config),
        Some(Commands::Completions { shell }) => {
            let shell = match shell {
                CompletionShell::Bash => Shell::Bash,
                CompletionShell::Zsh => Shell::Zsh,
            };
            generate(shell, &mut build_command(), "discover", &mut io::stdout());
            Ok(())
        }
    }
}

fn list(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => InMemoryCatalog::load(path)
            .with_context(|| format!("cannot load catalog {}", path.display()))?,
        None => sample_catalog(),
    };
    let api = DiscoverApi::new(catalog, &ctx.config)?;
    apply_filters(&api, args)?;

    let domain = api.active_domain();
    let items = api.visible_items();
    let state = api.snapshot();
    tracing::debug!(%domain, visible = items.len(), "listing items");
    if args.json {
        println!("{}", render::item_list_json(domain, &items, &state)?);
    } else {
        print!("{}", render::item_list(domain, &items, &state));
    }
    Ok(())
}

/// Flags become store mutations. The domain goes first so subfilters and the
/// attribute are checked against it.
fn apply_filters<C: CatalogSource>(api: &DiscoverApi<C>, args: &ListArgs) -> Result<()> {
    if let Some(domain) = args.domain {
        api.set_active_domain(domain);
    }
    if let Some(role) = args.role {
        api.set_viewer_role(role);
    }
    if let Some(search) = &args.search {
        api.set_search_text(search);
    }
    for tag in &args.tags {
        api.toggle_tag(tag)?;
    }
    if let Some(value) = &args.attribute {
        api.set_attribute(value)?;
    }
    if let Some(disciplinary) = args.disciplinary {
        api.set_disciplinary_type(disciplinary);
    }
    for value in &args.subfilters {
        api.toggle_subfilter(value)?;
    }
    Ok(())
}

fn show_config(config: &DiscoverConfig) -> Result<()> {
    let table = toml::Value::try_from(config).context("cannot serialize configuration")?;
    if let toml::Value::Table(t) = table {
        for (k, v) in &t {
            println!("{} = {}", k, v);
        }
    }
    Ok(())
}
