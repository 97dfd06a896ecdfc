//! Config resolution order: `--config`, then `NOUGHTS_CONFIG`, then defaults.

use noughts::{AppConfig, CONFIG_ENV, ConfigSource, OutputFormat};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

fn write_config(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", body).unwrap();
    path
}

fn set_env(value: &Path) {
    // SAFETY: only `test_resolution_order` touches the environment in this binary.
    unsafe { std::env::set_var(CONFIG_ENV, value) };
}

fn clear_env() {
    // SAFETY: see `set_env`.
    unsafe { std::env::remove_var(CONFIG_ENV) };
}

/// Single test so the environment is never mutated concurrently.
#[test]
fn test_resolution_order() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = write_config(dir.path(), "env.toml", "output = \"json\"");
    let flag_file = write_config(dir.path(), "flag.toml", "empty_glyph = \"_\"");

    clear_env();
    let (config, source) = AppConfig::resolve(None).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(source, ConfigSource::Defaults);

    set_env(&env_file);
    let (config, source) = AppConfig::resolve(None).unwrap();
    assert_eq!(*config.output(), OutputFormat::Json);
    assert_eq!(source, ConfigSource::Env(env_file.clone()));

    let (config, source) = AppConfig::resolve(Some(&flag_file)).unwrap();
    assert_eq!(*config.output(), OutputFormat::Text);
    assert_eq!(*config.empty_glyph(), '_');
    assert_eq!(source, ConfigSource::Explicit(flag_file.clone()));

    let missing = dir.path().join("absent.toml");
    set_env(&missing);
    let (config, source) = AppConfig::resolve(None).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(source, ConfigSource::MissingEnvFile(missing));

    clear_env();
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_missing_env_file_is_logged_once_subscriber_exists() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let source = ConfigSource::MissingEnvFile("/nowhere/noughts.toml".into());
    tracing::subscriber::with_default(subscriber, || source.log());

    let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("WARN"));
    assert!(logged.contains("points to a missing file"));
    assert!(logged.contains("/nowhere/noughts.toml"));
}
