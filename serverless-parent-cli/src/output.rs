//! Output writers for `serverless-parent`.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::CliError;

/// Write `rendered` to `out`, creating or truncating the file.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the parent directory cannot be opened or the
/// file cannot be written.
pub fn write_file(out: &Utf8Path, rendered: &str) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: out.to_path_buf(),
        source,
    };
    let parent = out
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = out.file_name().ok_or_else(|| {
        io_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(io_error)?;
    file.write_all(rendered.as_bytes()).map_err(io_error)
}

/// Write `rendered` to standard output.
///
/// # Errors
///
/// Returns [`CliError::Io`] when stdout cannot be written.
pub fn write_stdout(rendered: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| CliError::Io {
            path: "<stdout>".into(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::write_file;
    use crate::error::CliError;
    use anyhow::{Context, Result, ensure};
    use camino::Utf8PathBuf;
    use rstest::rstest;

    fn utf8_temp_dir() -> Result<(tempfile::TempDir, Utf8PathBuf)> {
        let dir = tempfile::tempdir()?;
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow::anyhow!("non-UTF-8 temp dir: {}", path.display()))?;
        Ok((dir, path))
    }

    #[rstest]
    fn write_file_truncates_existing_content() -> Result<()> {
        let (_guard, root) = utf8_temp_dir()?;
        let out = root.join("effective.yml");
        std::fs::write(&out, "stale: content that is longer than the new one\n")?;

        write_file(&out, "service: orders\n")?;

        let written = std::fs::read_to_string(&out).context("read output")?;
        ensure!(written == "service: orders\n", "unexpected output: {written}");
        Ok(())
    }

    #[rstest]
    fn write_file_reports_missing_directory() -> Result<()> {
        let (_guard, root) = utf8_temp_dir()?;
        let out = root.join("missing").join("effective.yml");

        let err = write_file(&out, "service: orders\n")
            .err()
            .context("expected write to fail")?;
        ensure!(
            matches!(&err, CliError::Io { path, .. } if *path == out),
            "unexpected error: {err}"
        );
        Ok(())
    }
}
