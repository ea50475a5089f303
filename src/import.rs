//! `--import-art`: store an art file inline in the user config

use crate::config::{ASCII_SECTION, CUSTOM_STYLE};
use crate::error::{Result, SysfetchError};
use crate::utils::file::read_file_safe;
use ini::Ini;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read `source`, then rewrite `config_path` with `ascii.style = custom`
/// and the trimmed art in `ascii.custom`. Every other key already in the
/// file is kept.
///
/// Nothing is written unless the art and the existing config are both
/// usable. The new file replaces the old one in a single rename.
pub fn import_art(source: &Path, config_path: &Path) -> Result<()> {
    let art = read_art(source)?;

    let mut document = if config_path.is_file() {
        let text = read_file_safe(config_path)?;
        Ini::load_from_str(&text).map_err(|err| SysfetchError::ConfigParse {
            path: config_path.to_path_buf(),
            source: err.into(),
        })?
    } else {
        Ini::new()
    };

    document
        .with_section(Some(ASCII_SECTION))
        .set("style", CUSTOM_STYLE)
        .set("custom", art.as_str());

    let mut text = Vec::new();
    document
        .write_to(&mut text)
        .map_err(|err| SysfetchError::write_file(config_path, err))?;
    check_stored(&text, &art, source)?;

    write_replacing(config_path, &text)?;

    tracing::debug!(path = %config_path.display(), "custom art stored");
    Ok(())
}

fn read_art(source: &Path) -> Result<String> {
    let raw = fs::read(source).map_err(|err| SysfetchError::read_file(source, err))?;
    let text = String::from_utf8(raw).map_err(|_| {
        SysfetchError::Import(format!("{} is not valid UTF-8 text", source.display()))
    })?;

    let art = text.trim();
    if art.is_empty() {
        return Err(SysfetchError::Import(format!(
            "{} contains no art",
            source.display()
        )));
    }
    Ok(art.to_string())
}

/// The serialized document must give back exactly the art that went in
fn check_stored(text: &[u8], art: &str, source: &Path) -> Result<()> {
    let stored = std::str::from_utf8(text)
        .ok()
        .and_then(|text| Ini::load_from_str(text).ok())
        .and_then(|doc| doc.get_from(Some(ASCII_SECTION), "custom").map(str::to_string));

    if stored.as_deref() == Some(art) {
        Ok(())
    } else {
        Err(SysfetchError::Import(format!(
            "{} cannot be stored as a config value",
            source.display()
        )))
    }
}

/// Write to a temp file beside `path`, then rename it over `path`
fn write_replacing(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|err| SysfetchError::write_file(dir, err))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| SysfetchError::write_file(dir, err))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|err| SysfetchError::write_file(tmp.path(), err))?;
    tmp.persist(path)
        .map_err(|err| SysfetchError::write_file(path, err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::resolve_art;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn import_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("art.txt");
        let config_path = dir.path().join("sysfetch").join("config.ini");
        let original = "\n   /\\_/\\\n  ( o.o )\n   > ^ <   \n\n";
        fs::write(&source, original).unwrap();

        import_art(&source, &config_path).unwrap();

        let config = Config::load_from(&[config_path]).unwrap();
        assert_eq!(config.ascii.style, CUSTOM_STYLE);
        let expected: Vec<&str> = original.trim().lines().collect();
        assert_eq!(resolve_art(&config.ascii), expected);
    }

    #[test]
    fn art_with_ini_syntax_survives() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("art.txt");
        let config_path = dir.path().join("config.ini");
        let original = "[tux]\n  ; == # ==\n\tkey = value\\n\n  \\__/ ";
        fs::write(&source, original).unwrap();

        import_art(&source, &config_path).unwrap();

        let config = Config::load_from(&[config_path]).unwrap();
        assert_eq!(config.ascii.custom.as_deref(), Some(original.trim()));
    }

    #[test]
    fn existing_keys_survive_import() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("art.txt");
        let config_path = dir.path().join("config.ini");
        fs::write(&source, "[]").unwrap();
        fs::write(
            &config_path,
            "[display]\nshow_gpu = false\n\n[ascii]\nstyle = tux\nwidth = 9\n\n[plugins]\nweather = on\n",
        )
        .unwrap();

        import_art(&source, &config_path).unwrap();

        let config = Config::load_from(&[config_path.clone()]).unwrap();
        assert!(!config.display.show_gpu);
        assert_eq!(config.ascii.width, 9);
        assert_eq!(config.ascii.style, CUSTOM_STYLE);
        assert_eq!(config.ascii.custom.as_deref(), Some("[]"));

        let written = Ini::load_from_file(&config_path).unwrap();
        assert_eq!(written.get_from(Some("plugins"), "weather"), Some("on"));
    }

    #[test]
    fn replaced_in_place_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("art.txt");
        fs::write(&source, "<o>").unwrap();
        let config_dir = dir.path().join("sysfetch");
        let config_path = config_dir.join("config.ini");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(&config_path, "[format]\nmax_width = 30\n").unwrap();

        import_art(&source, &config_path).unwrap();

        let names: Vec<_> = fs::read_dir(&config_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("config.ini")]);

        let config = Config::load_from(&[config_path]).unwrap();
        assert_eq!(config.format.max_width, 30);
        assert_eq!(config.ascii.custom.as_deref(), Some("<o>"));
    }

    #[test]
    fn malformed_art_leaves_config_untouched() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.ini");
        let before = "[ascii]\nstyle = ferris\n";
        fs::write(&config_path, before).unwrap();

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, " \n\t\n").unwrap();
        let binary = dir.path().join("binary.bin");
        fs::write(&binary, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let missing = dir.path().join("missing.txt");

        for source in [&empty, &binary, &missing] {
            assert!(import_art(source, &config_path).is_err());
            assert_eq!(fs::read_to_string(&config_path).unwrap(), before);
        }
    }

    #[test]
    fn malformed_config_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("art.txt");
        let config_path = dir.path().join("config.ini");
        fs::write(&source, "art").unwrap();
        fs::write(&config_path, "[ascii\nstyle = tux").unwrap();

        let err = import_art(&source, &config_path).unwrap_err();
        assert!(matches!(err, SysfetchError::ConfigParse { .. }));
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "[ascii\nstyle = tux");
    }
}
