use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use super::SaveError;

/// Reads every row of a headerless CSV file that has at least `min_fields`
/// fields. Never fails: a missing file yields no rows, short rows are
/// skipped, and any other problem is logged and ends the read with what
/// was parsed so far.
pub async fn read_rows(path: &Path, min_fields: usize) -> Vec<Vec<String>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read record file");
            return Vec::new();
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "stopped reading malformed record file");
                break;
            }
        };
        if record.len() < min_fields {
            continue;
        }
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }
    rows
}

/// Overwrites `path` with `rows`, one CSV record per row.
pub async fn write_rows<I, R>(path: &Path, rows: I) -> Result<(), SaveError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for row in rows {
        writer
            .write_record(row)
            .map_err(|source| SaveError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
    }
    let bytes = writer.into_inner().map_err(|e| SaveError::Io {
        path: path.to_path_buf(),
        source: e.into_error(),
    })?;

    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let rows = read_rows(&dir.path().join("absent.csv"), 2).await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn short_rows_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.csv");
        tokio::fs::write(&path, "a,b\nlonely\n\nc,d,extra\n")
            .await
            .unwrap();

        let rows = read_rows(&path, 2).await;
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string(), "extra".to_string()],
            ]
        );
    }

    #[tokio::test]
    async fn fields_with_commas_and_quotes_survive_a_rewrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.csv");
        let rows = vec![
            vec!["s1", "Doe, Jane", "jane@mergington.edu"],
            vec!["s2", "Bob \"Bobby\" Ray", "bob@mergington.edu"],
        ];
        write_rows(&path, rows).await.unwrap();

        let read = read_rows(&path, 3).await;
        assert_eq!(read.len(), 2);
        assert_eq!(read[0][1], "Doe, Jane");
        assert_eq!(read[1][1], "Bob \"Bobby\" Ray");
    }

    #[tokio::test]
    async fn write_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.csv");
        write_rows(&path, vec![vec!["a", "1"], vec!["b", "2"]])
            .await
            .unwrap();
        write_rows(&path, vec![vec!["c", "3"]]).await.unwrap();

        let read = read_rows(&path, 2).await;
        assert_eq!(read, vec![vec!["c".to_string(), "3".to_string()]]);
    }

    #[tokio::test]
    async fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("rows.csv");
        let err = write_rows(&path, vec![vec!["a", "b"]]).await.unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }
}
