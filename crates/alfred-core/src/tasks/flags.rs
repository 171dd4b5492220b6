//! Environment flag handling

use crate::target::{Env, Target};

/// Strip env-selecting flags, applying the last one to `target.env`.
///
/// `--prod`/`--production`, `--dev`/`--development` and `--test` are
/// recognized; every other flag is returned in order for pass-through.
pub fn handle_env_flags(flags: &[String], target: &mut Target) -> Vec<String> {
    let mut rest = Vec::with_capacity(flags.len());
    for flag in flags {
        match Env::from_flag(flag) {
            Some(env) => target.env = env,
            None => rest.push(flag.clone()),
        }
    }
    rest
}
