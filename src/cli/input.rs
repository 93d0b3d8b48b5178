use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Read the collection to paginate: one item per line. `-` reads stdin.
pub async fn load_lines(path: &Path) -> Result<Vec<String>> {
    let content = if path == Path::new("-") {
        debug!("Reading collection from stdin");
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read from stdin")?;
        buffer
    } else {
        debug!("Reading collection from: {}", path.display());
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_lines_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "alpha\nbeta\n\ngamma\n").unwrap();

        let lines = load_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["alpha", "beta", "", "gamma"]);
    }

    #[tokio::test]
    async fn test_missing_file_has_context() {
        let err = load_lines(Path::new("/nonexistent/pagewise-input.txt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
