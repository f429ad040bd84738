//! `run` and `eval`: load source into a fresh context and show the result.

use lispy_ir::Value;

use crate::{Context, LoadError, HOST_KEYWORDS};

/// Run the file at `path`, printing the last value unless it is `null`.
///
/// `extra_keywords` are registered on top of [`HOST_KEYWORDS`].
pub fn run_file(path: &str, extra_keywords: &[String]) -> Result<(), LoadError> {
    let mut context = Context::with_keywords(
        HOST_KEYWORDS
            .iter()
            .map(|w| (*w).to_string())
            .chain(extra_keywords.iter().cloned()),
    );
    let loaded = context.load_file(path)?;
    if !matches!(loaded.value, Value::Null) {
        println!("{}", loaded.value);
    }
    Ok(())
}

/// Run inline `source` and print its last value.
pub fn eval_source(source: &str) -> Result<(), LoadError> {
    let mut context = Context::new();
    let loaded = context.load_str("<eval>", source)?;
    println!("{}", loaded.value);
    Ok(())
}
