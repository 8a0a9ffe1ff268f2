use clap::Parser;
use notegraph_cli::cli::{Cli, Commands};
use notegraph_cli::error::{exit_with_error, CliError, CliResult};
use notegraph_cli::{config, pipeline};
use notegraph_diagram::{render_mermaid, resolve_entity, traverse, PredicateSets};
use notegraph_graph::hierarchy::suppress_inverse_for;
use notegraph_turtle::load_dir;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off" (no logs, no matter what)
    //   --verbose → "info" level (useful diagnostics)
    //   default  → "off" (clean terminal output)
    //   RUST_LOG → honoured only with --verbose, so developers can still
    //              get fine-grained control.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Disable color when --no-color flag or NO_COLOR env var is set.
    // Errors go to stderr, so piping stdout (e.g. `notegraph diagram ada
    // | pbcopy`) should not strip color from error messages.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Process {
            source,
            dest,
            triples,
            base_iri,
            draft,
        } => {
            let mut config = config::load(config_path)?;
            if let Some(source) = source {
                config.source_dir = source;
            }
            if let Some(dest) = dest {
                config.dest_dir = dest;
            }
            if let Some(triples) = triples {
                config.ttl_dir = triples;
            }
            if let Some(base_iri) = base_iri {
                config.base_iri = base_iri;
            }
            if let Some(draft) = draft {
                config.draft = draft;
            }
            pipeline::run(&config)
        }

        Commands::Diagram {
            name,
            triples,
            base_iri,
            layers,
            no_inverse,
        } => {
            if layers == 0 {
                return Err(CliError::Usage("--layers must be at least 1".into()));
            }
            let mut config = config::load(config_path)?;
            if let Some(triples) = triples {
                config.ttl_dir = triples;
            }
            if let Some(base_iri) = base_iri {
                config.base_iri = base_iri;
            }

            let store = load_dir(&config.ttl_dir)?;
            let sets = PredicateSets::classify(&store);
            let start = resolve_entity(&name, &store, &config.base_iri);
            let suppress = no_inverse || suppress_inverse_for(&store, &start);
            let outcome = traverse(&store, &sets, &start, &name, suppress, layers);
            println!("{}", render_mermaid(&outcome));
            Ok(())
        }
    }
}
