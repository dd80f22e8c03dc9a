use crate::cli::args::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use seqfilter::{ErrorPolicy, FilterConfig, FormatPolicy, ReaderOptions, RunConfig};

pub fn entry() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    if cli.max_length > 0 && cli.min_length > cli.max_length {
        log::warn!(
            "--min-length ({}) is greater than --max-length ({}); no record can pass",
            cli.min_length,
            cli.max_length
        );
    }

    let config = RunConfig {
        input: cli.input,
        output: cli.output,
        id_list: cli.list,
        filter: FilterConfig {
            min_len: cli.min_length,
            max_len: cli.max_length,
            negate: cli.negate,
        },
        reader: ReaderOptions {
            error_policy: if cli.skip_malformed {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Return
            },
            format: FormatPolicy::Auto,
        },
    };
    log::debug!("run config: {config:?}");

    let stats = seqfilter::run(&config)
        .with_context(|| format!("filtering {} failed", config.input.display()))?;

    if !cli.quiet {
        eprint!("{stats}");
    }
    Ok(())
}
