//! Selects the compiled-in environment variant.
//!
//! Reads `.env` when present, then `COFFEE_SHOP_ENVIRONMENT` and the optional
//! per-field overrides. The build fails on an unknown variant, a non-UTF-8
//! variable, a blank override, surrounding whitespace or a malformed URL
//! override, using the same checks as runtime validation.

use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[path = "src/url_check.rs"]
mod url_check;

const ENVIRONMENT_VAR: &str = "COFFEE_SHOP_ENVIRONMENT";

/// (variable, generated constant, must be an absolute URL)
const OVERRIDES: &[(&str, &str, bool)] = &[
    ("COFFEE_SHOP_API_SERVER_URL", "API_SERVER_URL_OVERRIDE", true),
    ("COFFEE_SHOP_AUTH0_URL", "AUTH0_URL_OVERRIDE", false),
    ("COFFEE_SHOP_AUTH0_AUDIENCE", "AUTH0_AUDIENCE_OVERRIDE", false),
    ("COFFEE_SHOP_AUTH0_CLIENT_ID", "AUTH0_CLIENT_ID_OVERRIDE", false),
    ("COFFEE_SHOP_AUTH0_CALLBACK_URL", "AUTH0_CALLBACK_URL_OVERRIDE", true),
];

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/url_check.rs");
    println!("cargo:rerun-if-env-changed={ENVIRONMENT_VAR}");
    for (var, _, _) in OVERRIDES {
        println!("cargo:rerun-if-env-changed={var}");
    }

    // dotenvy walks up from the crate dir, so watch whichever file it found
    match dotenvy::dotenv() {
        Ok(path) => println!("cargo:rerun-if-changed={}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(format!("failed to read .env: {e}").into()),
    }

    let variant = match url_check::read_var(ENVIRONMENT_VAR)? {
        Some(name) => match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => "Development",
            "production" | "prod" => "Production",
            _ => return Err(format!("{ENVIRONMENT_VAR}: unknown environment '{name}'").into()),
        },
        None => "Development",
    };

    let mut out = String::new();
    writeln!(
        out,
        "pub(crate) const COMPILED_ENVIRONMENT: Environment = Environment::{variant};"
    )?;

    for (var, constant, is_url) in OVERRIDES {
        let Some(value) = url_check::read_var(var)? else {
            writeln!(out, "pub(crate) const {constant}: Option<&str> = None;")?;
            continue;
        };

        let checked = if *is_url {
            url_check::check_absolute_url(&value).map(|_| ())
        } else {
            url_check::check_text(&value)
        };
        checked.map_err(|reason| format!("{var}: invalid value {value:?}: {reason}"))?;

        writeln!(out, "pub(crate) const {constant}: Option<&str> = Some({value:?});")?;
    }

    let out_dir = env::var("OUT_DIR")?;
    fs::write(Path::new(&out_dir).join("build_constants.rs"), out)?;
    Ok(())
}
