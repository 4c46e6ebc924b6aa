use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn write_string_to_file(path: &Path, content: &str) -> std::io::Result<()> {
    write_bytes_to_file(path, content.as_bytes())
}

pub fn write_bytes_to_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_string_to_file(&path, "first").unwrap();
        write_string_to_file(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
