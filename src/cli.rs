use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::config::CONFIG_FILE;

#[derive(Clone, Debug)]
pub struct CliArgs {
    /// Overrides the configured output directory.
    pub out: Option<PathBuf>,
    pub config: PathBuf,
    pub dry_run: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            out: None,
            config: PathBuf::from(CONFIG_FILE),
            dry_run: false,
        }
    }
}

impl CliArgs {
    pub fn from_env_args() -> Result<Self> {
        Self::from_iter(std::env::args_os().skip(1), std::env::var_os("DATAGEN_OUT"))
    }

    fn from_iter<I>(args: I, env_out: Option<OsString>) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut cli = Self {
            out: env_out.filter(|v| !v.is_empty()).map(PathBuf::from),
            ..Self::default()
        };

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "--out" => {
                    let Some(value) = iter.next() else {
                        return Err(anyhow!("--out requires a value"));
                    };
                    cli.out = Some(PathBuf::from(value));
                }
                "--config" => {
                    let Some(value) = iter.next() else {
                        return Err(anyhow!("--config requires a value"));
                    };
                    cli.config = PathBuf::from(value);
                }
                "--dry-run" => cli.dry_run = true,
                other => log::warn!("ignoring unknown argument {other}"),
            }
        }

        Ok(cli)
    }
}
